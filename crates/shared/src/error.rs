use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The only failure text ever shown to a user.
pub const USER_FAILURE_MESSAGE: &str = "Failed to load tags. Please try again later.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    Network,
    Response,
    Parse,
}

impl FetchErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            FetchErrorKind::Network => "network",
            FetchErrorKind::Response => "response",
            FetchErrorKind::Parse => "parse",
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    #[error("transport failure: {0}")]
    Network(String),
    #[error("remote service answered {status}{}", .detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default())]
    Response { status: u16, detail: Option<String> },
    #[error("malformed tag payload: {0}")]
    Parse(String),
}

impl FetchError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            FetchError::Network(_) => FetchErrorKind::Network,
            FetchError::Response { .. } => FetchErrorKind::Response,
            FetchError::Parse(_) => FetchErrorKind::Parse,
        }
    }

    pub fn user_message(&self) -> &'static str {
        USER_FAILURE_MESSAGE
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid {kind} value '{value}'")]
pub struct ParseParameterError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseParameterError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_maps_to_the_same_user_message() {
        let errors = [
            FetchError::Network("connection refused".into()),
            FetchError::Response {
                status: 500,
                detail: Some("internal".into()),
            },
            FetchError::Parse("expected value".into()),
        ];
        for err in errors {
            assert_eq!(err.user_message(), USER_FAILURE_MESSAGE);
        }
    }

    #[test]
    fn response_error_includes_detail_only_when_present() {
        let bare = FetchError::Response {
            status: 502,
            detail: None,
        };
        assert_eq!(bare.to_string(), "remote service answered 502");

        let detailed = FetchError::Response {
            status: 400,
            detail: Some("bad_parameter: site is required".into()),
        };
        assert_eq!(
            detailed.to_string(),
            "remote service answered 400: bad_parameter: site is required"
        );
        assert_eq!(detailed.kind(), FetchErrorKind::Response);
    }
}
