//! Normalized error returned by every service call.
//!
//! The backend answers failures with a loose body
//! `{message?, detail?, resolution?, type?}`. Pages only ever see
//! [`ApiError`], built from that body with per-call fallback texts.

use serde::{Deserialize, Serialize};

/// Severity of a notice shown to the user (toast colour and icon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Warning,
    #[default]
    Error,
    Info,
}

impl NoticeKind {
    /// Lenient parse of the backend `type` field. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::Info => "info",
        }
    }
}

/// Success body of the mutating endpoints. Both fields are informational.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerMessage {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub resolution: Option<String>,
}

/// Raw error body as the backend sends it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    /// FastAPI puts either a string or a list of field errors here.
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
    #[serde(default)]
    pub resolution: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Texts used when the body does not carry its own.
#[derive(Debug, Clone, Copy)]
pub struct ErrorFallback {
    pub message: &'static str,
    pub resolution: &'static str,
}

impl ErrorFallback {
    pub const fn new(message: &'static str, resolution: &'static str) -> Self {
        Self {
            message,
            resolution,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default)]
    pub resolution: String,
    #[serde(default, rename = "type")]
    pub kind: NoticeKind,
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

impl ApiError {
    pub fn new(
        message: impl Into<String>,
        resolution: impl Into<String>,
        kind: NoticeKind,
    ) -> Self {
        Self {
            message: message.into(),
            resolution: resolution.into(),
            kind,
        }
    }

    /// Build from a parsed body: `message`, then a string `detail`, then the fallback.
    pub fn from_body(body: &ErrorBody, fallback: ErrorFallback) -> Self {
        let detail = body.detail.as_ref().and_then(|d| d.as_str());
        let message = non_blank(body.message.as_deref())
            .or_else(|| non_blank(detail))
            .unwrap_or(fallback.message);
        let resolution = non_blank(body.resolution.as_deref()).unwrap_or(fallback.resolution);
        let kind = body
            .kind
            .as_deref()
            .and_then(NoticeKind::parse)
            .unwrap_or(NoticeKind::Error);

        Self::new(message, resolution, kind)
    }

    /// Build from the raw response text. Non-JSON bodies fall back entirely.
    pub fn from_response_text(text: &str, fallback: ErrorFallback) -> Self {
        let body = serde_json::from_str::<ErrorBody>(text).unwrap_or_default();
        Self::from_body(&body, fallback)
    }

    /// The request never produced a response (DNS, CORS, offline...).
    pub fn transport(message: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(message, cause.to_string(), NoticeKind::Error)
    }

    /// A success response whose body did not match the expected shape.
    pub fn decode(cause: impl std::fmt::Display) -> Self {
        Self::new(
            "Unexpected response from server",
            cause.to_string(),
            NoticeKind::Error,
        )
    }

    pub fn not_authenticated() -> Self {
        Self::new("Not authenticated", "Please log in again", NoticeKind::Error)
    }

    pub fn no_file() -> Self {
        Self::new(
            "No file provided",
            "Select a .csv file to upload",
            NoticeKind::Error,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FALLBACK: ErrorFallback =
        ErrorFallback::new("Upload failed", "Try again or contact support");

    #[test]
    fn test_message_and_resolution_come_from_body() {
        let err = ApiError::from_response_text(
            r#"{"message":"Duplicate SRF","resolution":"Use next code","type":"warning"}"#,
            FALLBACK,
        );
        assert_eq!(err.message, "Duplicate SRF");
        assert_eq!(err.resolution, "Use next code");
        assert_eq!(err.kind, NoticeKind::Warning);
    }

    #[test]
    fn test_detail_used_when_message_missing() {
        let err = ApiError::from_response_text(r#"{"detail":"Token expired"}"#, FALLBACK);
        assert_eq!(err.message, "Token expired");
        assert_eq!(err.resolution, "Try again or contact support");
        assert_eq!(err.kind, NoticeKind::Error);
    }

    #[test]
    fn test_list_detail_is_ignored() {
        let err = ApiError::from_response_text(
            r#"{"detail":[{"loc":["body","model"],"msg":"field required"}]}"#,
            FALLBACK,
        );
        assert_eq!(err.message, "Upload failed");
    }

    #[test]
    fn test_blank_fields_fall_back() {
        let err = ApiError::from_response_text(r#"{"message":"  ","resolution":""}"#, FALLBACK);
        assert_eq!(err.message, "Upload failed");
        assert_eq!(err.resolution, "Try again or contact support");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        let err = ApiError::from_response_text("<html>502 Bad Gateway</html>", FALLBACK);
        assert_eq!(err.message, "Upload failed");
        assert_eq!(err.kind, NoticeKind::Error);
    }

    #[test]
    fn test_unknown_type_maps_to_error() {
        let err = ApiError::from_response_text(r#"{"message":"x","type":"fatal"}"#, FALLBACK);
        assert_eq!(err.kind, NoticeKind::Error);
    }

    #[test]
    fn test_display_is_message() {
        let err = ApiError::no_file();
        assert_eq!(err.to_string(), "No file provided");
    }
}
