//! Clients: the customers that payments and subscriptions belong to.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Clients<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Clients<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Clients),
        }
    }

    /// Create a client, usually with `email` and `description`.
    pub fn create(&self, client: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(client.into())
    }

    /// List clients; `count`, `offset`, `order` and filters go in `filter`.
    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, client_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(client_id)
    }

    pub fn update(&self, client_id: &str, changes: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.update(client_id, changes.into())
    }

    pub fn remove(&self, client_id: &str) -> PaymillResult<ApiCall> {
        self.api.remove(client_id, Params::new())
    }
}
