//! # Endpoints
//!
//! Static description of the resources and operations the API exposes.
//! Each `(Resource, Operation)` pair maps to an HTTP method and a path
//! relative to the version prefix, e.g. `DELETE /clients/{id}`.

use crate::error::{PaymillError, PaymillResult};
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use serde_json::Value;
use std::fmt;

/// HTTP verbs used by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Reads carry their parameters in the query string.
    pub fn is_read(&self) -> bool {
        matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API entity types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Clients,
    Offers,
    Payments,
    Preauthorizations,
    Refunds,
    Subscriptions,
    Transactions,
    Webhooks,
}

impl Resource {
    pub const ALL: [Resource; 8] = [
        Resource::Clients,
        Resource::Offers,
        Resource::Payments,
        Resource::Preauthorizations,
        Resource::Refunds,
        Resource::Subscriptions,
        Resource::Transactions,
        Resource::Webhooks,
    ];

    /// Path segment of the collection
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Clients => "clients",
            Resource::Offers => "offers",
            Resource::Payments => "payments",
            Resource::Preauthorizations => "preauthorizations",
            Resource::Refunds => "refunds",
            Resource::Subscriptions => "subscriptions",
            Resource::Transactions => "transactions",
            Resource::Webhooks => "webhooks",
        }
    }

    /// Name of the identifier argument, used in argument errors
    pub fn id_label(&self) -> &'static str {
        match self {
            Resource::Clients => "clientId",
            Resource::Offers => "offerId",
            Resource::Payments => "paymentId",
            Resource::Preauthorizations => "preauthorizationId",
            Resource::Refunds => "refundId",
            Resource::Subscriptions => "subscriptionId",
            Resource::Transactions => "transactionId",
            Resource::Webhooks => "webhookId",
        }
    }

    /// Operations this resource exposes
    pub fn operations(&self) -> &'static [Operation] {
        use Operation::*;
        match self {
            Resource::Clients | Resource::Offers | Resource::Subscriptions | Resource::Webhooks => {
                &[Create, List, Details, Update, Remove]
            }
            Resource::Payments | Resource::Preauthorizations => &[Create, List, Details, Remove],
            Resource::Refunds => &[Create, List, Details],
            Resource::Transactions => &[Create, List, Details, Update],
        }
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.operations().contains(&operation)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// CRUD operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    List,
    Details,
    Update,
    Remove,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::List => "list",
            Operation::Details => "details",
            Operation::Update => "update",
            Operation::Remove => "remove",
        }
    }

    pub fn method(&self) -> HttpMethod {
        match self {
            Operation::Create => HttpMethod::Post,
            Operation::List | Operation::Details => HttpMethod::Get,
            Operation::Update => HttpMethod::Put,
            Operation::Remove => HttpMethod::Delete,
        }
    }
}

/// A supported `(resource, operation)` pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    resource: Resource,
    operation: Operation,
}

impl Endpoint {
    pub fn new(resource: Resource, operation: Operation) -> PaymillResult<Self> {
        if !resource.supports(operation) {
            return Err(PaymillError::UnsupportedOperation {
                resource: resource.as_str(),
                operation: operation.as_str(),
            });
        }
        Ok(Self {
            resource,
            operation,
        })
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn method(&self) -> HttpMethod {
        self.operation.method()
    }

    /// Refunds are created against the transaction they refund.
    pub fn requires_id(&self) -> bool {
        match self.operation {
            Operation::Details | Operation::Update | Operation::Remove => true,
            Operation::Create => self.resource == Resource::Refunds,
            Operation::List => false,
        }
    }

    pub fn id_label(&self) -> &'static str {
        match (self.resource, self.operation) {
            (Resource::Refunds, Operation::Create) => Resource::Transactions.id_label(),
            (resource, _) => resource.id_label(),
        }
    }

    /// Path below the version prefix, with a validated identifier when needed.
    ///
    /// The identifier is percent-encoded as a single path segment.
    pub fn path(&self, id: Option<&str>) -> PaymillResult<String> {
        let base = format!("/{}", self.resource.as_str());
        if !self.requires_id() {
            return Ok(base);
        }
        let label = self.id_label();
        let id = id.ok_or_else(|| PaymillError::invalid_argument(label, ", got nothing"))?;
        validate_id(id, label)?;
        Ok(format!("{}/{}", base, encode_segment(id)))
    }
}

// Characters that would end or corrupt a path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Percent-encode an identifier for use as one path segment.
pub fn encode_segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

/// Reject identifiers that cannot name an entity.
///
/// Any non-empty string is accepted; `encode_segment` makes it path-safe.
pub fn validate_id(id: &str, label: &'static str) -> PaymillResult<()> {
    if id.is_empty() {
        return Err(PaymillError::invalid_argument(label, ", got an empty string"));
    }
    Ok(())
}

/// Read an identifier out of dynamic JSON input.
///
/// Anything but a JSON string is an argument error labelled with `label`.
pub fn require_id<'a>(value: &'a Value, label: &'static str) -> PaymillResult<&'a str> {
    match value {
        Value::String(id) => {
            validate_id(id, label)?;
            Ok(id)
        }
        Value::Null => Err(PaymillError::invalid_argument(label, ", got null")),
        other => Err(PaymillError::invalid_argument(
            label,
            format!(", got {}", other),
        )),
    }
}
