//! # Response Normalizer
//!
//! Buffers a response body and classifies the outcome:
//!
//! ```text
//! body is not JSON   -> PaymillError::InvalidJson
//! status 200         -> parsed value
//! any other status   -> PaymillError::Api (message from the code table,
//!                       parsed body attached)
//! ```

use crate::codes;
use crate::error::{PaymillError, PaymillResult};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

/// Accumulates body chunks until the response is complete
#[derive(Debug)]
pub struct ResponseBuffer {
    status: u16,
    body: Vec<u8>,
}

impl ResponseBuffer {
    pub fn new(status: u16) -> Self {
        Self {
            status,
            body: Vec::new(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn push(&mut self, chunk: &[u8]) {
        self.body.extend_from_slice(chunk);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Decode the buffered body and classify it.
    pub fn finish(self) -> PaymillResult<Value> {
        let text = String::from_utf8_lossy(&self.body);
        normalize(self.status, &text)
    }
}

/// Classify a complete response.
pub fn normalize(status: u16, body: &str) -> PaymillResult<Value> {
    let parsed: Value =
        serde_json::from_str(body).map_err(|source| PaymillError::InvalidJson { status, source })?;

    if status == 200 {
        return Ok(parsed);
    }

    let response_code = codes::response_code(&parsed);
    let message = codes::error_message(&parsed);
    debug!(status, ?response_code, resolved = message, "API returned an error");

    Err(PaymillError::Api {
        status,
        response_code,
        message: message.to_string(),
        response: parsed,
    })
}

/// Standard payload wrapper: `{"data": ..., "data_count": ..., "mode": ...}`
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Total number of matching entities for list calls
    #[serde(default, deserialize_with = "count_from_any")]
    pub data_count: Option<u64>,
    /// `"test"` or `"live"`
    #[serde(default)]
    pub mode: Option<String>,
}

impl<T> Envelope<T> {
    pub fn is_live(&self) -> bool {
        self.mode.as_deref() == Some("live")
    }
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Interpret an already-normalized success value.
    pub fn from_value(value: Value) -> PaymillResult<Self> {
        serde_json::from_value(value).map_err(|source| PaymillError::InvalidJson {
            status: 200,
            source,
        })
    }
}

// The API reports counts as strings in some versions and numbers in others.
fn count_from_any<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Count {
        Number(u64),
        Text(String),
    }

    Ok(match Option::<Count>::deserialize(deserializer)? {
        Some(Count::Number(n)) => Some(n),
        Some(Count::Text(s)) => s.parse().ok(),
        None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::UNKNOWN_ERROR_MESSAGE;
    use crate::error::INVALID_JSON_MESSAGE;
    use serde_json::json;

    #[test]
    fn test_success() {
        let value = normalize(200, r#"{"data":{"id":"tran_1"}}"#).unwrap();
        assert_eq!(value, json!({"data": {"id": "tran_1"}}));
    }

    #[test]
    fn test_api_error_with_known_code() {
        let err = normalize(404, r#"{"response_code":40401}"#).unwrap_err();

        assert_eq!(err.to_string(), "Amount too low or zero.");
        assert_eq!(err.response(), Some(&json!({"response_code": 40401})));
        assert_eq!(err.response_code(), Some(40401));
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_api_error_without_code() {
        let err = normalize(401, r#"{"error":"Access Denied","exception":"InvalidAuthentication"}"#)
            .unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.response().unwrap()["error"], "Access Denied");
    }

    #[test]
    fn test_api_error_with_unknown_code() {
        let err = normalize(500, r#"{"response_code":99999}"#).unwrap_err();
        assert_eq!(err.to_string(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(err.response_code(), Some(99999));
    }

    #[test]
    fn test_non_200_success_status_is_an_error() {
        let err = normalize(201, r#"{"data":{}}"#).unwrap_err();
        assert!(matches!(err, PaymillError::Api { status: 201, .. }));
    }

    #[test]
    fn test_invalid_json() {
        let err = normalize(412, "<html>Precondition Failed</html>").unwrap_err();
        assert_eq!(err.to_string(), INVALID_JSON_MESSAGE);
        assert!(err.response().is_none());

        let err = normalize(200, "").unwrap_err();
        assert!(matches!(err, PaymillError::InvalidJson { status: 200, .. }));
    }

    #[test]
    fn test_buffer_joins_split_chunks() {
        let body = r#"{"data":{"description":"Grüße"}}"#.as_bytes();
        // split inside the multi-byte character
        let cut = body.iter().position(|b| *b == 0xC3).unwrap() + 1;

        let mut buffer = ResponseBuffer::new(200);
        buffer.push(&body[..cut]);
        buffer.push(&body[cut..]);
        assert_eq!(buffer.len(), body.len());

        let value = buffer.finish().unwrap();
        assert_eq!(value["data"]["description"], "Grüße");
    }

    #[test]
    fn test_envelope_counts() {
        #[derive(Debug, Deserialize)]
        struct Client {
            id: String,
        }

        let list: Envelope<Vec<Client>> = Envelope::from_value(json!({
            "data": [{"id": "client_1"}, {"id": "client_2"}],
            "data_count": "2",
            "mode": "test"
        }))
        .unwrap();
        assert_eq!(list.data.len(), 2);
        assert_eq!(list.data[1].id, "client_2");
        assert_eq!(list.data_count, Some(2));
        assert!(!list.is_live());

        let single: Envelope<Client> =
            Envelope::from_value(json!({"data": {"id": "client_1"}, "mode": "live"})).unwrap();
        assert_eq!(single.data_count, None);
        assert!(single.is_live());

        let err = Envelope::<Client>::from_value(json!({"nothing": true})).unwrap_err();
        assert!(matches!(err, PaymillError::InvalidJson { .. }));
    }
}
