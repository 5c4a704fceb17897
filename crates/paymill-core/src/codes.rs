//! # Response Codes
//!
//! Static lookup of the numeric `response_code` values published by Paymill.
//! The table is sorted by code and never mutated.

use serde_json::Value;

/// Message used when a failed response carries no recognised code.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error.";

/// Published response codes, sorted ascending.
pub static RESPONSE_MESSAGES: &[(i64, &str)] = &[
    (10001, "General undefined response."),
    (10002, "Still waiting on something."),
    (11000, "Retry later."),
    (20000, "General success response."),
    (40000, "General problem with data."),
    (40001, "General problem with payment data."),
    (40100, "Problem with credit card data."),
    (40101, "Problem with cvv."),
    (40102, "Card expired or not yet valid."),
    (40103, "Limit exceeded."),
    (40104, "Card invalid."),
    (40105, "Expiry date not valid."),
    (40106, "Credit card brand required."),
    (40200, "Problem with bank account data."),
    (40201, "Bank account data combination mismatch."),
    (40202, "User authentication failed."),
    (40300, "Problem with 3d secure data."),
    (40301, "Currency / amount mismatch"),
    (40400, "Problem with input data."),
    (40401, "Amount too low or zero."),
    (40402, "Usage field too long."),
    (40403, "Currency not allowed."),
    (50000, "General problem with backend."),
    (50001, "Country blacklisted."),
    (50002, "IP address blacklisted."),
    (50003, "Anonymous IP proxy used."),
    (50100, "Technical error with credit card."),
    (50101, "Error limit exceeded."),
    (50102, "Card declined by authorization system."),
    (50103, "Manipulation or stolen card."),
    (50104, "Card restricted."),
    (50105, "Invalid card configuration data."),
    (50200, "Technical error with bank account."),
    (50201, "Card blacklisted."),
    (50300, "Technical error with 3D secure."),
    (50400, "Decline because of risk issues."),
    (50500, "General timeout."),
    (50501, "Timeout on side of the acquirer."),
    (50502, "Risk management transaction timeout."),
    (50600, "Duplicate transaction."),
];

/// Look up the message for a response code.
pub fn message_for(code: i64) -> Option<&'static str> {
    RESPONSE_MESSAGES
        .binary_search_by_key(&code, |(c, _)| *c)
        .ok()
        .map(|idx| RESPONSE_MESSAGES[idx].1)
}

/// Success codes live in the 2xxxx family.
pub fn is_success_code(code: i64) -> bool {
    (20000..30000).contains(&code)
}

/// Extract a numeric `response_code` from a parsed body.
///
/// The code is read from the top level first, then from the `data` envelope
/// the API wraps transactions and refunds in. Non-numeric values are ignored.
pub fn response_code(body: &Value) -> Option<i64> {
    numeric_code(body.get("response_code"))
        .or_else(|| numeric_code(body.get("data").and_then(|d| d.get("response_code"))))
}

fn numeric_code(value: Option<&Value>) -> Option<i64> {
    let value = value?;
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && f.is_finite())
            .map(|f| f as i64)
    })
}

/// Resolve the human-readable message for a failed response body.
pub fn error_message(body: &Value) -> &'static str {
    response_code(body)
        .and_then(message_for)
        .unwrap_or(UNKNOWN_ERROR_MESSAGE)
}

/// HTTP status classes as documented by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// 200 - great, go ahead
    Ok,
    /// 401 - no or wrong private API key
    Unauthorized,
    /// 403 - transaction could not be completed
    TransactionError,
    /// 404 - no entity with this identifier
    NotFound,
    /// 412 - a required parameter is missing
    PreconditionFailed,
    /// 5xx
    ServerError,
    Other(u16),
}

impl StatusKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            200 => StatusKind::Ok,
            401 => StatusKind::Unauthorized,
            403 => StatusKind::TransactionError,
            404 => StatusKind::NotFound,
            412 => StatusKind::PreconditionFailed,
            500..=599 => StatusKind::ServerError,
            other => StatusKind::Other(other),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StatusKind::Ok => "OK",
            StatusKind::Unauthorized => "Unauthorized",
            StatusKind::TransactionError => "Transaction Error",
            StatusKind::NotFound => "Not Found",
            StatusKind::PreconditionFailed => "Precondition Failed",
            StatusKind::ServerError => "Server Error",
            StatusKind::Other(_) => "Unexpected Status",
        }
    }
}
