use serde_json::Value;
use std::fmt;

use crate::connectors::paypal::mapper::MapperError;

/// Errors that can occur while talking to PayPal
#[derive(Debug)]
pub enum PayPalError {
    /// Missing or invalid plugin setting, names the offending field
    Configuration { field: &'static str },
    /// Payload does not fit the declared struct schema
    Mapper(MapperError),
    /// Network failure, no response received
    Transport(reqwest::Error),
    /// PayPal answered with an error body
    Api(ApiError),
    /// Successful response that is not a JSON object
    InvalidResponse(String),
}

impl PayPalError {
    /// Provider error name (`VALIDATION_ERROR`, `INVALID_RESOURCE_ID`, ...) for `Api` errors.
    pub fn api_error_name(&self) -> Option<&str> {
        match self {
            Self::Api(error) => Some(&error.name),
            _ => None,
        }
    }
}

impl fmt::Display for PayPalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration { field } => {
                write!(f, "Required setting \"{}\" is missing or invalid", field)
            }
            Self::Mapper(err) => write!(f, "Struct mapping failed: {}", err),
            Self::Transport(err) => write!(f, "HTTP error: {}", err),
            Self::Api(err) => write!(f, "{}", err),
            Self::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for PayPalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Mapper(err) => Some(err),
            Self::Transport(err) => Some(err),
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MapperError> for PayPalError {
    fn from(err: MapperError) -> Self {
        Self::Mapper(err)
    }
}

impl From<ApiError> for PayPalError {
    fn from(err: ApiError) -> Self {
        Self::Api(err)
    }
}

/// Field level issue reported in `details`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub issue: String,
    pub field: String,
}

/// Structured PayPal error response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: u16,
    pub name: String,
    /// `message` followed by every `issue (field)` detail
    pub message: String,
    pub details: Vec<ErrorDetail>,
}

impl ApiError {
    /// Build from an error response body.
    ///
    /// REST errors look like `{ name, message, details: [{ issue, field }] }`; the OAuth
    /// endpoint answers `{ error, error_description }`. Anything else keeps the raw body
    /// as message under an `HTTP_<status>` name.
    pub fn from_response(status: u16, body: &str) -> Self {
        let error = match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(error)) => error,
            _ => {
                let message = if body.trim().is_empty() {
                    format!("HTTP status {}", status)
                } else {
                    body.trim().to_string()
                };
                return Self {
                    status,
                    name: format!("HTTP_{}", status),
                    message,
                    details: Vec::new(),
                };
            }
        };

        let text = |key: &str| error.get(key).and_then(Value::as_str).map(str::to_string);

        let name = text("name")
            .or_else(|| text("error"))
            .unwrap_or_else(|| format!("HTTP_{}", status));
        let mut message = text("message")
            .or_else(|| text("error_description"))
            .unwrap_or_default();

        let details: Vec<ErrorDetail> = error
            .get("details")
            .and_then(Value::as_array)
            .map(|details| {
                details
                    .iter()
                    .map(|detail| ErrorDetail {
                        issue: detail_text(detail, "issue"),
                        field: detail_text(detail, "field"),
                    })
                    .collect()
            })
            .unwrap_or_default();

        if !details.is_empty() {
            let issues: Vec<String> = details
                .iter()
                .map(|detail| format!("{} ({})", detail.issue, detail.field))
                .collect();
            message = format!("{}: {}", message, issues.join(" "));
        }

        Self {
            status,
            name,
            message,
            details,
        }
    }
}

fn detail_text(detail: &Value, key: &str) -> String {
    detail
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The error \"{}\" occurred with the following message: {}",
            self.name, self.message
        )
    }
}

impl std::error::Error for ApiError {}
