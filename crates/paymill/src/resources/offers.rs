//! Offers: recurring price plans that subscriptions are built from.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Offers<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Offers<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Offers),
        }
    }

    /// Create an offer (`amount`, `currency`, `interval`, `name`).
    pub fn create(&self, offer: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(offer.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, offer_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(offer_id)
    }

    pub fn update(&self, offer_id: &str, changes: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.update(offer_id, changes.into())
    }

    pub fn remove(&self, offer_id: &str) -> PaymillResult<ApiCall> {
        self.api.remove(offer_id, Params::new())
    }
}
