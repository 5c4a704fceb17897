//! Subscriptions: a client's recurring payment of an offer.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Subscriptions<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Subscriptions<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Subscriptions),
        }
    }

    /// Create a subscription for `client` and `payment`, from an `offer` or
    /// with `amount`, `currency` and `interval` given directly.
    pub fn create(&self, subscription: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(subscription.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, subscription_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(subscription_id)
    }

    pub fn update(&self, subscription_id: &str, changes: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.update(subscription_id, changes.into())
    }

    /// Cancel or delete a subscription.
    ///
    /// Pass `Params::new()` to cancel; `remove=true` deletes it for good.
    pub fn remove(&self, subscription_id: &str, options: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.remove(subscription_id, options.into())
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::test_client;
    use paymill_core::{HttpMethod, Params};

    #[test]
    fn test_remove_without_options() {
        let paymill = test_client();
        let call = paymill.subscriptions().remove("sub_dea86e5c65b2087202e3", Params::new()).unwrap();

        assert_eq!(call.request().method, HttpMethod::Delete);
        assert_eq!(call.request().path, "/v2.1/subscriptions/sub_dea86e5c65b2087202e3");
        assert!(call.request().body.is_empty());
        assert_eq!(call.request().header("content-length"), Some("0"));
    }

    #[test]
    fn test_remove_with_options() {
        let paymill = test_client();
        let call = paymill
            .subscriptions()
            .remove("sub_1", Params::new().with("remove", true))
            .unwrap();
        assert_eq!(call.request().body, "remove=true");
    }

    #[test]
    fn test_update_flattens_nested() {
        let paymill = test_client();
        let call = paymill
            .subscriptions()
            .update("sub_1", Params::new().nested("offer_change", [("offer", "offer_2"), ("type", "1")]))
            .unwrap();
        assert_eq!(
            call.request().body,
            "offer_change%5Boffer%5D=offer_2&offer_change%5Btype%5D=1"
        );
    }
}
