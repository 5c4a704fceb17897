//! Payments: stored credit card or direct debit payment methods.

use super::ResourceApi;
use crate::client::{ApiCall, Paymill};
use paymill_core::{Params, PaymillResult, Resource};

/// Payments cannot be updated; create a new one instead.
pub struct Payments<'a> {
    api: ResourceApi<'a>,
}

impl<'a> Payments<'a> {
    pub(crate) fn new(client: &'a Paymill) -> Self {
        Self {
            api: ResourceApi::new(client, Resource::Payments),
        }
    }

    /// Create a payment from a `token`, optionally attached to a `client`.
    pub fn create(&self, payment: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.create(payment.into())
    }

    pub fn list(&self, filter: impl Into<Params>) -> PaymillResult<ApiCall> {
        self.api.list(filter.into())
    }

    pub fn details(&self, payment_id: &str) -> PaymillResult<ApiCall> {
        self.api.details(payment_id)
    }

    pub fn remove(&self, payment_id: &str) -> PaymillResult<ApiCall> {
        self.api.remove(payment_id, Params::new())
    }
}

#[cfg(test)]
mod tests {
    use crate::resources::test_client;
    use paymill_core::{Params, PaymillError};

    #[test]
    fn test_payment_calls() {
        let paymill = test_client();
        let payments = paymill.payments();

        let create = payments
            .create(Params::new().with("token", "098f6bcd4621d373cade4e832627b4f6"))
            .unwrap();
        assert_eq!(create.request().body, "token=098f6bcd4621d373cade4e832627b4f6");

        let remove = payments.remove("pay_3af44644dd6d25c820a8").unwrap();
        assert_eq!(remove.request().path, "/v2.1/payments/pay_3af44644dd6d25c820a8");
    }

    #[test]
    fn test_path_like_id_stays_one_segment() {
        let paymill = test_client();
        let call = paymill.payments().details("pay_1/../../clients").unwrap();
        assert_eq!(call.request().path, "/v2.1/payments/pay_1%2F..%2F..%2Fclients");

        let err = paymill.payments().details("").unwrap_err();
        assert!(matches!(err, PaymillError::InvalidArgument { label: "paymentId", .. }));
    }
}
