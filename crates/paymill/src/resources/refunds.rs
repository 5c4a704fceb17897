//! # Refunds
//!
//! Refunds are created against the transaction they pay back, so `create`
//! takes a transaction id rather than a refund id.
//!
//! ```rust,ignore
//! // amount only: no description field is sent
//! paymill.refunds().create("tran_023d3b5769321c649435", RefundOptions::new(500))?.await?;
//!
//! // any other field the API accepts
//! let params = Params::new().with("amount", 500).with("description", "damaged");
//! paymill.refunds().create("tran_023d3b5769321c649435", params)?.await?;
//! ```

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Operation, Params, PaymillResult, Resource};

/// Amount and optional description of a refund
///
/// An omitted description is left out of the request entirely, which is not
/// the same as sending an empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefundOptions {
    /// Amount in the smallest currency unit
    pub amount: u64,
    pub description: Option<String>,
}

impl RefundOptions {
    pub fn new(amount: u64) -> Self {
        Self {
            amount,
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl From<RefundOptions> for Params {
    fn from(options: RefundOptions) -> Self {
        let params = Params::new().with("amount", options.amount);
        match options.description {
            Some(description) => params.with("description", description),
            None => params,
        }
    }
}

pub struct Refunds<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Refunds<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Refunds),
        }
    }

    /// Refund (part of) a transaction.
    ///
    /// Accepts `RefundOptions` or a full `Params` map.
    pub fn create(&self, transaction_id: &str, refund: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.call(Operation::Create, Some(transaction_id), refund.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, refund_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(refund_id)
    }
}
