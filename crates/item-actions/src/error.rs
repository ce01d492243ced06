//! Action errors

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActionError {
    #[error("item id must not be empty")]
    EmptyId,

    #[error("item id {0:?} is a dot segment")]
    DotSegment(String),

    #[error("request failed: {0}")]
    Network(String),

    #[error("server responded {status}: {message}")]
    Status { status: u16, message: String },

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type ActionResult<T> = Result<T, ActionError>;

impl ActionError {
    /// Build a status error from a non-2xx response body.
    ///
    /// The server reports failures as `{"error": "..."}`; anything else is
    /// passed through as-is, falling back to the status code alone.
    pub fn from_status(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct ErrorBody {
            error: String,
        }

        let message = match serde_json::from_str::<ErrorBody>(body) {
            Ok(parsed) => parsed.error,
            Err(_) if !body.trim().is_empty() => body.trim().to_string(),
            Err(_) => format!("HTTP {}", status),
        };
        ActionError::Status { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_uses_server_message() {
        let err = ActionError::from_status(500, r#"{"error":"sql: no rows"}"#);
        assert_eq!(
            err,
            ActionError::Status { status: 500, message: "sql: no rows".to_string() }
        );
        assert_eq!(err.to_string(), "server responded 500: sql: no rows");
    }

    #[test]
    fn test_status_error_falls_back_to_body_or_code() {
        let plain = ActionError::from_status(502, "Bad Gateway\n");
        assert_eq!(plain, ActionError::Status { status: 502, message: "Bad Gateway".to_string() });

        let empty = ActionError::from_status(404, "");
        assert_eq!(empty, ActionError::Status { status: 404, message: "HTTP 404".to_string() });
    }
}
