//! # Resource Namespaces
//!
//! One handle per API resource, each exposing only the operations the API
//! supports for it. Identifier arguments are validated before a request is
//! prepared, so a bad identifier fails without touching the network.

pub mod clients;
pub mod offers;
pub mod payments;
pub mod preauthorizations;
pub mod refunds;
pub mod subscriptions;
pub mod transactions;
pub mod webhooks;

pub use clients::Clients;
pub use offers::Offers;
pub use payments::Payments;
pub use preauthorizations::Preauthorizations;
pub use refunds::{RefundOptions, Refunds};
pub use subscriptions::Subscriptions;
pub use transactions::Transactions;
pub use webhooks::Webhooks;

use crate::client::{ApiCall, Paymill};
use paymill_core::{Endpoint, Operation, Params, PaymillResult, Resource};

/// Shared plumbing behind the resource handles
#[derive(Clone, Copy)]
struct ResourceApi<'a> {
    client: &'a Paymill,
    resource: Resource,
}

impl<'a> ResourceApi<'a> {
    fn new(client: &'a Paymill, resource: Resource) -> Self {
        Self { client, resource }
    }

    fn create(&self, params: Params) -> PaymillResult<ApiCall> {
        self.call(Operation::Create, None, params)
    }

    fn list(&self, params: Params) -> PaymillResult<ApiCall> {
        self.call(Operation::List, None, params)
    }

    fn details(&self, id: &str) -> PaymillResult<ApiCall> {
        self.call(Operation::Details, Some(id), Params::new())
    }

    fn update(&self, id: &str, params: Params) -> PaymillResult<ApiCall> {
        self.call(Operation::Update, Some(id), params)
    }

    fn remove(&self, id: &str, params: Params) -> PaymillResult<ApiCall> {
        self.call(Operation::Remove, Some(id), params)
    }

    fn call(&self, operation: Operation, id: Option<&str>, params: Params) -> PaymillResult<ApiCall> {
        let endpoint = Endpoint::new(self.resource, operation)?;
        self.client.call(endpoint, id, params)
    }
}

#[cfg(test)]
pub(crate) fn test_client() -> Paymill {
    Paymill::new("abc").expect("client builds")
}
