//! # paymill-core
//!
//! I/O-free building blocks of the Paymill client.
//!
//! This crate provides:
//! - `Params` and one-level parameter flattening (`client[email]=...`)
//! - `Endpoint`, the fixed table of resources and operations
//! - `RequestBuilder`, which produces authenticated `PreparedRequest`s
//! - `normalize` and `ResponseBuffer`, which turn a status and body into a
//!   JSON value or a `PaymillError`
//! - the static response code table in `codes`
//!
//! ## Example
//!
//! ```rust
//! use paymill_core::{Endpoint, Operation, Params, RequestBuilder, Resource};
//!
//! let builder = RequestBuilder::new("private-key", "v2.1");
//! let endpoint = Endpoint::new(Resource::Transactions, Operation::List).unwrap();
//! let request = builder
//!     .endpoint(endpoint, None, Params::new().with("count", 5))
//!     .unwrap();
//!
//! assert_eq!(request.path, "/v2.1/transactions?count=5");
//! ```

pub mod codes;
pub mod endpoint;
pub mod error;
pub mod params;
pub mod request;
pub mod response;

// Re-exports for convenience
pub use codes::{is_success_code, message_for, response_code, StatusKind};
pub use endpoint::{encode_segment, require_id, validate_id, Endpoint, HttpMethod, Operation, Resource};
pub use error::{PaymillError, PaymillResult};
pub use params::{ParamValue, Params};
pub use request::{basic_auth_header, PreparedRequest, RequestBuilder, DEFAULT_API_VERSION};
pub use response::{normalize, Envelope, ResponseBuffer};
