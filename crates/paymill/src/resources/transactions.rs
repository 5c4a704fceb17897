//! Transactions: charges against a payment, token or preauthorization.
//!
//! A successful HTTP status does not mean the charge went through; check the
//! `response_code` of the returned transaction with
//! `paymill_core::is_success_code`.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Transactions<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Transactions<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Transactions),
        }
    }

    /// Charge `amount` in `currency` against a `token`, `payment` or
    /// `preauthorization`.
    pub fn create(&self, transaction: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(transaction.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, transaction_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(transaction_id)
    }

    /// Only the description can be changed.
    pub fn update(&self, transaction_id: &str, changes: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.update(transaction_id, changes.into())
    }
}
