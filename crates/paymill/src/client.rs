//! # Paymill Client
//!
//! Owns the HTTP client, the immutable request builder and the resource
//! namespaces. Every call prepares one request synchronously and returns an
//! `ApiCall`. The request is sent when the call is awaited, spawned or given
//! a callback. A call dropped without any of these is sent in the background
//! and its outcome is discarded.

use crate::config::PaymillConfig;
use crate::resources::{
    Clients, Offers, Payments, Preauthorizations, Refunds, Subscriptions, Transactions, Webhooks,
};
use paymill_core::{
    Endpoint, Envelope, HttpMethod, Params, PaymillError, PaymillResult, PreparedRequest,
    RequestBuilder, ResponseBuffer,
};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, instrument, warn};

/// Paymill API client
///
/// Cheap to clone; clones share the HTTP connection pool and the
/// precomputed authorization header.
#[derive(Clone, Debug)]
pub struct Paymill {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    config: PaymillConfig,
    http: Client,
    requests: RequestBuilder,
}

impl Paymill {
    /// Create a client for `api_key` against API version `v2.1`
    pub fn new(api_key: impl Into<String>) -> PaymillResult<Self> {
        Self::with_config(PaymillConfig::new(api_key))
    }

    /// Create from environment variables
    pub fn from_env() -> PaymillResult<Self> {
        Self::with_config(PaymillConfig::from_env()?)
    }

    pub fn with_config(config: PaymillConfig) -> PaymillResult<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(|e| {
            PaymillError::Configuration(format!("Failed to create HTTP client: {}", e))
        })?;
        Ok(Self::from_parts(config, http))
    }

    fn from_parts(config: PaymillConfig, http: Client) -> Self {
        let requests = RequestBuilder::new(&config.api_key, config.api_version.clone());
        Self {
            inner: Arc::new(Inner {
                config,
                http,
                requests,
            }),
        }
    }

    /// Another client bound to a different API version, same key.
    pub fn with_version(&self, api_version: impl Into<String>) -> Self {
        let config = self.inner.config.clone().with_api_version(api_version);
        Self::from_parts(config, self.inner.http.clone())
    }

    pub fn config(&self) -> &PaymillConfig {
        &self.inner.config
    }

    pub fn api_version(&self) -> &str {
        self.inner.requests.api_version()
    }

    pub fn clients(&self) -> Clients<'_> {
        Clients::new(self)
    }

    pub fn offers(&self) -> Offers<'_> {
        Offers::new(self)
    }

    pub fn payments(&self) -> Payments<'_> {
        Payments::new(self)
    }

    pub fn preauthorizations(&self) -> Preauthorizations<'_> {
        Preauthorizations::new(self)
    }

    pub fn refunds(&self) -> Refunds<'_> {
        Refunds::new(self)
    }

    pub fn subscriptions(&self) -> Subscriptions<'_> {
        Subscriptions::new(self)
    }

    pub fn transactions(&self) -> Transactions<'_> {
        Transactions::new(self)
    }

    pub fn webhooks(&self) -> Webhooks<'_> {
        Webhooks::new(self)
    }

    /// Prepare a request for a path the resource table does not cover.
    ///
    /// `path` is relative to the version prefix, e.g. `/clients`.
    pub fn request(&self, method: HttpMethod, path: &str, params: Params) -> PaymillResult<ApiCall> {
        let request = self.inner.requests.build(method, path, params)?;
        Ok(self.prepared(request))
    }

    pub(crate) fn call(
        &self,
        endpoint: Endpoint,
        id: Option<&str>,
        params: Params,
    ) -> PaymillResult<ApiCall> {
        let request = self.inner.requests.endpoint(endpoint, id, params)?;
        Ok(self.prepared(request))
    }

    fn prepared(&self, request: PreparedRequest) -> ApiCall {
        ApiCall {
            client: self.clone(),
            request,
            started: false,
        }
    }

    #[instrument(skip(self, request), fields(method = %request.method, path = %request.path))]
    async fn execute(&self, request: &PreparedRequest) -> PaymillResult<Value> {
        let url = self.inner.config.url_for(&request.path);

        let mut builder = self.inner.http.request(reqwest_method(request.method), &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.method.is_read() {
            builder = builder.body(request.body.clone());
        }

        debug!(body_len = request.body.len(), "Sending Paymill request");

        let mut response = builder.send().await.map_err(PaymillError::transport)?;

        let mut buffer = ResponseBuffer::new(response.status().as_u16());
        while let Some(chunk) = response.chunk().await.map_err(PaymillError::transport)? {
            buffer.push(&chunk);
        }

        debug!(status = buffer.status(), bytes = buffer.len(), "Received Paymill response");

        buffer.finish()
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

/// One prepared API call
///
/// Resolves exactly once, to the parsed JSON body or a `PaymillError`.
/// Pick a completion style:
///
/// ```rust,ignore
/// // awaitable
/// let client = paymill.clients().details("client_88a388d9dd48f86c3136")?.await?;
///
/// // callback
/// paymill.clients().list(Params::new())?.on_complete(|result| match result {
///     Ok(list) => println!("{}", list["data_count"]),
///     Err(err) => eprintln!("{}", err),
/// })?;
///
/// // no handler: sent in the background when dropped
/// paymill.clients().remove("client_88a388d9dd48f86c3136")?;
/// ```
#[must_use = "a dropped ApiCall is still sent, but its outcome is lost"]
#[derive(Debug)]
pub struct ApiCall {
    client: Paymill,
    request: PreparedRequest,
    started: bool,
}

impl ApiCall {
    /// The request that will be sent
    pub fn request(&self) -> &PreparedRequest {
        &self.request
    }

    /// Send the request and normalize the response.
    pub async fn send(self) -> PaymillResult<Value> {
        let (client, request) = self.start();
        client.execute(&request).await
    }

    /// Send and deserialize the `data` envelope into `T`.
    pub async fn send_as<T: DeserializeOwned>(self) -> PaymillResult<Envelope<T>> {
        Envelope::from_value(self.send().await?)
    }

    /// Send in the background without a handler.
    ///
    /// The request runs to completion even if the handle is dropped.
    pub fn spawn(self) -> PaymillResult<JoinHandle<PaymillResult<Value>>> {
        let runtime = current_runtime()?;
        Ok(runtime.spawn(self.send()))
    }

    /// Send in the background and hand the outcome to `callback` once.
    pub fn on_complete<F>(self, callback: F) -> PaymillResult<JoinHandle<()>>
    where
        F: FnOnce(PaymillResult<Value>) + Send + 'static,
    {
        let runtime = current_runtime()?;
        Ok(runtime.spawn(async move {
            let result = self.send().await;
            callback(result);
        }))
    }

    fn start(mut self) -> (Paymill, PreparedRequest) {
        self.started = true;
        (self.client.clone(), self.request.clone())
    }
}

fn current_runtime() -> PaymillResult<Handle> {
    Handle::try_current().map_err(|e| {
        PaymillError::Configuration(format!("No Tokio runtime to send the call on: {}", e))
    })
}

impl Drop for ApiCall {
    fn drop(&mut self) {
        if self.started {
            return;
        }
        let Ok(runtime) = Handle::try_current() else {
            warn!(path = %self.request.path, "ApiCall dropped outside a Tokio runtime, request not sent");
            return;
        };

        let client = self.client.clone();
        let request = self.request.clone();
        runtime.spawn(async move {
            if let Err(err) = client.execute(&request).await {
                warn!(path = %request.path, error = %err, "Unhandled Paymill call failed");
            }
        });
    }
}

impl IntoFuture for ApiCall {
    type Output = PaymillResult<Value>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.send())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_version_keeps_key() {
        let paymill = Paymill::new("abc").unwrap();
        let v2 = paymill.with_version("v2");

        assert_eq!(paymill.api_version(), "v2.1");
        assert_eq!(v2.api_version(), "v2");
        assert_eq!(v2.config().api_key, "abc");

        let req = v2.clients().list(Params::new()).unwrap();
        assert_eq!(req.request().path, "/v2/clients");
        assert_eq!(req.request().header("authorization"), Some("Basic YWJjOg=="));
    }

    #[test]
    fn test_raw_request() {
        let paymill = Paymill::new("abc").unwrap();
        let call = paymill
            .request(HttpMethod::Get, "/checksums", Params::new().with("count", 1))
            .unwrap();
        assert_eq!(call.request().path, "/v2.1/checksums?count=1");
    }

    #[test]
    fn test_background_styles_need_a_runtime() {
        let paymill = Paymill::new("abc").unwrap();

        let err = paymill.clients().list(Params::new()).unwrap().spawn().unwrap_err();
        assert!(matches!(err, PaymillError::Configuration(_)));

        let err = paymill
            .clients()
            .list(Params::new())
            .unwrap()
            .on_complete(|_| {})
            .unwrap_err();
        assert!(matches!(err, PaymillError::Configuration(_)));
    }

    #[test]
    fn test_reqwest_methods() {
        assert_eq!(reqwest_method(HttpMethod::Get), Method::GET);
        assert_eq!(reqwest_method(HttpMethod::Delete), Method::DELETE);
    }
}
