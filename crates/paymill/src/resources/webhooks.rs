//! Webhooks: URL or e-mail endpoints notified of API events.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Webhooks<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Webhooks<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Webhooks),
        }
    }

    /// Register a `url` or `email` for a list of `event_types`.
    pub fn create(&self, webhook: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(webhook.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, webhook_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(webhook_id)
    }

    pub fn update(&self, webhook_id: &str, changes: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.update(webhook_id, changes.into())
    }

    pub fn remove(&self, webhook_id: &str) -> PaymillResult<ApiCall> {
        self.api.remove(webhook_id, Params::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::test_client;
    use paymill_core::Params;
    use serde_json::json;

    #[test]
    fn test_event_types_are_indexed() {
        let paymill = test_client();
        let params = Params::from_json(&json!({
            "url": "https://example.com/hook",
            "event_types": ["transaction.succeeded", "subscription.created"]
        }))
        .unwrap();
        let call = paymill.webhooks().create(params).unwrap();

        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(&call.request().body).unwrap();
        assert!(pairs.contains(&("event_types[0]".into(), "transaction.succeeded".into())));
        assert!(pairs.contains(&("event_types[1]".into(), "subscription.created".into())));
        assert!(pairs.contains(&("url".into(), "https://example.com/hook".into())));
    }

    #[test]
    fn test_remove_webhook() {
        let paymill = test_client();
        let call = paymill.webhooks().remove("hook_40237e20a7d5a231d99b").unwrap();
        assert_eq!(call.request().path, "/v2.1/webhooks/hook_40237e20a7d5a231d99b");
    }
}
