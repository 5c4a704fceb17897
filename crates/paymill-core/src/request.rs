//! # Request Builder
//!
//! Turns an operation and its parameters into a fully prepared HTTP request:
//! versioned path, encoded query string or body, and the fixed header set.
//! No I/O happens here; the client crate sends the result.

use crate::endpoint::{Endpoint, HttpMethod};
use crate::error::PaymillResult;
use crate::params::Params;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::trace;

pub const DEFAULT_API_VERSION: &str = "v2.1";

pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";

/// `Authorization` value for an API key: HTTP Basic with an empty password.
pub fn basic_auth_header(api_key: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:", api_key)))
}

/// A request ready to be put on the wire
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    /// Versioned path including any query string, e.g. `/v2.1/clients?count=5`
    pub path: String,
    pub headers: Vec<(String, String)>,
    /// Encoded form body; empty for reads
    pub body: String,
}

impl PreparedRequest {
    /// Case-insensitive header lookup
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn content_length(&self) -> usize {
        self.body.len()
    }
}

/// Builds authenticated requests for one API key and version
///
/// The authorization header is computed once here and reused for every
/// request. The builder is immutable and can be shared freely.
#[derive(Clone)]
pub struct RequestBuilder {
    api_version: String,
    auth_header: String,
}

impl RequestBuilder {
    pub fn new(api_key: &str, api_version: impl Into<String>) -> Self {
        Self {
            api_version: api_version.into(),
            auth_header: basic_auth_header(api_key),
        }
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn auth_header(&self) -> &str {
        &self.auth_header
    }

    /// Prepare a request for a table endpoint.
    pub fn endpoint(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        params: Params,
    ) -> PaymillResult<PreparedRequest> {
        let path = endpoint.path(id)?;
        self.build(endpoint.method(), &path, params)
    }

    /// Prepare a request for an arbitrary path below the version prefix.
    ///
    /// Reads with parameters put them in the query string; every other verb
    /// sends them as a form body.
    pub fn build(&self, method: HttpMethod, path: &str, params: Params) -> PaymillResult<PreparedRequest> {
        let params = params.flatten();
        let mut full_path = format!("/{}{}", self.api_version, path);
        let mut body = String::new();

        if method.is_read() {
            if !params.is_empty() {
                full_path.push('?');
                full_path.push_str(&params.encode()?);
            }
        } else {
            body = params.encode()?;
        }

        trace!(%method, path = %full_path, body_len = body.len(), "prepared request");

        let headers = vec![
            ("Authorization".to_string(), self.auth_header.clone()),
            ("Accept".to_string(), "application/json".to_string()),
            ("Content-Type".to_string(), CONTENT_TYPE_FORM.to_string()),
            ("Content-Length".to_string(), body.len().to_string()),
        ];

        Ok(PreparedRequest {
            method,
            path: full_path,
            headers,
            body,
        })
    }
}

impl std::fmt::Debug for RequestBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestBuilder")
            .field("api_version", &self.api_version)
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{Operation, Resource};
    use crate::error::PaymillError;

    fn builder() -> RequestBuilder {
        RequestBuilder::new("abc", DEFAULT_API_VERSION)
    }

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(basic_auth_header("abc"), "Basic YWJjOg==");
        assert_eq!(builder().auth_header(), "Basic YWJjOg==");
    }

    #[test]
    fn test_get_puts_params_in_query() {
        let params = Params::new().with("count", 10).nested("filter", [("status", "open")]);
        let req = builder().build(HttpMethod::Get, "/transactions", params).unwrap();

        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "/v2.1/transactions?count=10&filter%5Bstatus%5D=open");
        assert!(req.body.is_empty());
        assert_eq!(req.header("content-length"), Some("0"));
    }

    #[test]
    fn test_get_without_params_has_no_query() {
        let req = builder().build(HttpMethod::Get, "/clients", Params::new()).unwrap();
        assert_eq!(req.path, "/v2.1/clients");
        assert_eq!(req.content_length(), 0);
    }

    #[test]
    fn test_post_puts_params_in_body() {
        let params = Params::new().with("email", "lovely-client@example.com").with("description", "Lovely Client");
        let req = builder().build(HttpMethod::Post, "/clients", params).unwrap();

        assert_eq!(req.path, "/v2.1/clients");
        assert_eq!(req.body, "email=lovely-client%40example.com&description=Lovely+Client");
        assert_eq!(req.header("Content-Length"), Some(req.body.len().to_string().as_str()));
    }

    #[test]
    fn test_delete_with_params_uses_body() {
        let req = builder()
            .build(HttpMethod::Delete, "/subscriptions/sub_1", Params::new().with("remove", true))
            .unwrap();
        assert_eq!(req.path, "/v2.1/subscriptions/sub_1");
        assert_eq!(req.body, "remove=true");
        assert_eq!(req.header("content-length"), Some("11"));
    }

    #[test]
    fn test_content_length_counts_bytes() {
        let req = builder()
            .build(HttpMethod::Put, "/offers/offer_1", Params::new().with("name", "Größe"))
            .unwrap();
        assert_eq!(req.header("content-length").unwrap(), req.body.len().to_string());
    }

    #[test]
    fn test_fixed_headers() {
        let req = builder().build(HttpMethod::Post, "/webhooks", Params::new()).unwrap();
        assert_eq!(req.header("accept"), Some("application/json"));
        assert_eq!(req.header("content-type"), Some(CONTENT_TYPE_FORM));
        assert_eq!(req.header("authorization"), Some("Basic YWJjOg=="));
    }

    #[test]
    fn test_endpoint_validates_id_first() {
        let endpoint = Endpoint::new(Resource::Clients, Operation::Details).unwrap();
        let err = builder().endpoint(endpoint, Some(""), Params::new()).unwrap_err();
        assert!(matches!(err, PaymillError::InvalidArgument { label: "clientId", .. }));

        let req = builder().endpoint(endpoint, Some("client_1"), Params::new()).unwrap();
        assert_eq!(req.path, "/v2.1/clients/client_1");
    }

    #[test]
    fn test_other_version() {
        let req = RequestBuilder::new("abc", "v2")
            .build(HttpMethod::Get, "/offers", Params::new())
            .unwrap();
        assert_eq!(req.path, "/v2/offers");
    }

    #[test]
    fn test_debug_redacts_key() {
        let printed = format!("{:?}", builder());
        assert!(!printed.contains("YWJjOg=="));
    }
}
