//! Normalized API error shape.
//!
//! The backend reports failures in three formats: a FastAPI-style `detail`
//! list of field validation errors, a plain-string `detail` for domain
//! errors ("Project not found"), or a generic `message`. All of them,
//! plus requests that never reached the server, normalize into one
//! [`ApiError`] so callers display errors uniformly.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use std::fmt;

use serde::Deserialize;

/// One field-level validation failure reported by the server.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct FieldError {
    /// Location of the offending field, e.g. `["body", "title"]`.
    pub loc: Vec<serde_json::Value>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// The server's `detail` field: either a plain string or a list of
/// structured field errors.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Detail {
    Text(String),
    Fields(Vec<FieldError>),
}

/// Best-effort parse of a non-2xx response body.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Detail>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Uniform error produced by the HTTP wrapper.
///
/// `Status` carries the response the server actually sent; `Transport`
/// means no response arrived at all, so the two are distinguishable at
/// every handling boundary via [`ApiError::status`].
#[derive(Clone, Debug, PartialEq)]
pub enum ApiError {
    /// The server answered with a non-2xx status.
    Status {
        status: u16,
        status_text: String,
        body: ErrorBody,
    },
    /// The request never produced a response.
    Transport(String),
}

impl ApiError {
    /// Normalize a non-2xx response. A body that is not valid JSON (or
    /// not an object) is treated as empty.
    #[must_use]
    pub fn from_response(status: u16, status_text: &str, body_text: &str) -> Self {
        let body = serde_json::from_str(body_text).unwrap_or_default();
        ApiError::Status {
            status,
            status_text: status_text.to_owned(),
            body,
        }
    }

    /// Stub error for builds without a browser fetch runtime.
    pub(crate) fn unavailable() -> Self {
        ApiError::Transport("not available outside the browser".to_owned())
    }

    /// The HTTP status code, or `None` for transport failures.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Transport(_) => None,
        }
    }

    /// Single display string for the UI: validation messages joined with
    /// `", "`, then string `detail`, then `message`, then the status line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            ApiError::Status {
                status,
                status_text,
                body,
            } => {
                if let Some(Detail::Fields(fields)) = &body.detail {
                    if !fields.is_empty() {
                        return fields
                            .iter()
                            .map(|field| field.msg.clone())
                            .collect::<Vec<_>>()
                            .join(", ");
                    }
                }
                if let Some(Detail::Text(text)) = &body.detail {
                    return text.clone();
                }
                if let Some(message) = &body.message {
                    return message.clone();
                }
                if status_text.is_empty() {
                    format!("request failed with status {status}")
                } else {
                    status_text.clone()
                }
            }
            ApiError::Transport(message) => message.clone(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ApiError {}
