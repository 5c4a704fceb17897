//! # paymill
//!
//! Async client for the Paymill payment API.
//!
//! The client exposes eight resource namespaces: clients, offers, payments,
//! preauthorizations, refunds, subscriptions, transactions and webhooks.
//! Each operation prepares one authenticated request and returns an
//! `ApiCall` that resolves to the parsed JSON body or a `PaymillError`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paymill::{Paymill, Params, RefundOptions};
//!
//! let paymill = Paymill::new("<private key>")?;
//!
//! // Awaitable
//! let client = paymill
//!     .clients()
//!     .create(Params::new().with("email", "mail@example.com"))?
//!     .await?;
//!
//! // Nested values are sent as `client[email]=...`
//! let transactions = paymill
//!     .transactions()
//!     .list(Params::new().with("count", 10))?
//!     .await?;
//!
//! // Callback
//! paymill
//!     .refunds()
//!     .create("tran_023d3b5769321c649435", RefundOptions::new(500))?
//!     .on_complete(|result| {
//!         if let Err(err) = result {
//!             eprintln!("refund failed: {}", err);
//!         }
//!     })?;
//!
//! // No handler: the call is still sent once the `ApiCall` is dropped
//! paymill.webhooks().remove("hook_40237e20a7d5a231d99b")?;
//!
//! // Another API version with the same key
//! let legacy = paymill.with_version("v2");
//! ```
//!
//! ## Errors
//!
//! - argument errors (`InvalidArgument`, `InvalidParams`) are returned before
//!   any request is sent
//! - transport errors are forwarded unchanged in `PaymillError::Transport`
//! - a body that is not JSON yields `PaymillError::InvalidJson`
//! - any status but 200 yields `PaymillError::Api`, with a message looked up
//!   from the `response_code` and the parsed body in `response()`
//!
//! Nothing is retried.

pub mod client;
pub mod config;
pub mod resources;

// Re-exports
pub use client::{ApiCall, Paymill};
pub use config::{PaymillConfig, DEFAULT_API_BASE_URL};
pub use paymill_core::{
    is_success_code, message_for, require_id, response_code, Envelope, HttpMethod, ParamValue,
    Params, PaymillError, PaymillResult, PreparedRequest, StatusKind, DEFAULT_API_VERSION,
};
pub use resources::{
    Clients, Offers, Payments, Preauthorizations, RefundOptions, Refunds, Subscriptions,
    Transactions, Webhooks,
};
