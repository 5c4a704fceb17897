//! Preauthorizations: amounts reserved on a card for a later transaction.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

pub struct Preauthorizations<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Preauthorizations<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Preauthorizations),
        }
    }

    pub fn create(&self, preauthorization: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(preauthorization.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, preauthorization_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(preauthorization_id)
    }

    /// Release the reserved amount.
    pub fn remove(&self, preauthorization_id: &str) -> PaymillResult<ApiCall> {
        self.api.remove(preauthorization_id, Params::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::test_client;
    use paymill_core::{HttpMethod, Params, PaymillError};

    #[test]
    fn test_preauthorization_calls() {
        let paymill = test_client();
        let preauths = paymill.preauthorizations();

        let create = preauths
            .create(Params::new().with("token", "tok_1").with("amount", 4200).with("currency", "EUR"))
            .unwrap();
        assert_eq!(create.request().method, HttpMethod::Post);
        assert_eq!(create.request().path, "/v2.1/preauthorizations");

        let details = preauths.details("preauth_31eb90495837447f76b7").unwrap();
        assert_eq!(details.request().method, HttpMethod::Get);

        let err = preauths.remove("").unwrap_err();
        assert!(matches!(
            err,
            PaymillError::InvalidArgument { label: "preauthorizationId", .. }
        ));
    }
}
