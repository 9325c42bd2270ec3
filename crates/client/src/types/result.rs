// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The outcome of a revocation request.

use std::fmt;

use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use super::ErrorBody;

/// The category of a [`RevocationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseErrorType {
    /// The token was revoked.
    None,

    /// The server returned a structured error.
    Protocol,

    /// The server returned an opaque error status.
    Http,

    /// No response could be obtained, or it didn't follow the protocol.
    Exception,
}

impl fmt::Display for ResponseErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Protocol => f.write_str("protocol"),
            Self::Http => f.write_str("http"),
            Self::Exception => f.write_str("exception"),
        }
    }
}

/// What went wrong when no usable response was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The connection to the server could not be established.
    Connect,

    /// The request timed out.
    Timeout,

    /// The request could not be built or sent.
    Request,

    /// The response body could not be read.
    Body,

    /// The request was cancelled before completing.
    Cancelled,

    /// An error response did not follow the expected format.
    Decode,

    /// Any other failure.
    Other,
}

/// The details of a failure: its kind and a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct FailureDetail {
    /// The kind of failure.
    pub kind: FailureKind,

    /// A description of the failure.
    pub message: String,
}

impl FailureDetail {
    /// Create a new failure.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// The failure reported when a request is cancelled.
    #[must_use]
    pub fn cancelled() -> Self {
        Self::new(FailureKind::Cancelled, "the request was cancelled")
    }
}

impl From<reqwest::Error> for FailureDetail {
    fn from(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            FailureKind::Timeout
        } else if err.is_connect() {
            FailureKind::Connect
        } else if err.is_body() || err.is_decode() {
            FailureKind::Body
        } else if err.is_builder() || err.is_request() || err.is_redirect() {
            FailureKind::Request
        } else {
            FailureKind::Other
        };

        Self::new(kind, err.to_string())
    }
}

/// The outcome of a revocation request.
///
/// Exactly one variant is active. Use [`RevocationResult::error_type`] or a
/// `match` to find out which before reading variant-specific data. The
/// accessors return `None` for data that the active variant doesn't carry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevocationResult {
    /// The server accepted the request.
    Success {
        /// The status code, usually 200.
        status: StatusCode,

        /// The raw response body, possibly empty.
        raw: String,
    },

    /// The server returned an error response with an `error` code.
    ProtocolError {
        /// The status code.
        status: StatusCode,

        /// The parsed error response.
        error: ErrorBody,

        /// The raw response body.
        raw: String,
    },

    /// The server returned an error status with a body which isn't a
    /// structured error.
    HttpError {
        /// The status code.
        status: StatusCode,

        /// The raw response body, used as the error message.
        raw: String,
    },

    /// The request failed, or the error response could not be understood.
    TransportException {
        /// What went wrong.
        failure: FailureDetail,

        /// The status code, if a response was received.
        status: Option<StatusCode>,

        /// The raw response body, if one was received.
        raw: Option<String>,
    },
}

impl RevocationResult {
    /// Whether this result is an error. Only [`RevocationResult::Success`] is
    /// not.
    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Success { .. })
    }

    /// The category of this result.
    #[must_use]
    pub fn error_type(&self) -> ResponseErrorType {
        match self {
            Self::Success { .. } => ResponseErrorType::None,
            Self::ProtocolError { .. } => ResponseErrorType::Protocol,
            Self::HttpError { .. } => ResponseErrorType::Http,
            Self::TransportException { .. } => ResponseErrorType::Exception,
        }
    }

    /// The status code of the response.
    ///
    /// `None` if the request failed before a response was received.
    #[must_use]
    pub fn status_code(&self) -> Option<StatusCode> {
        match self {
            Self::Success { status, .. }
            | Self::ProtocolError { status, .. }
            | Self::HttpError { status, .. } => Some(*status),
            Self::TransportException { status, .. } => *status,
        }
    }

    /// The raw response body.
    ///
    /// `None` if the request failed before a response was received.
    #[must_use]
    pub fn raw(&self) -> Option<&str> {
        match self {
            Self::Success { raw, .. }
            | Self::ProtocolError { raw, .. }
            | Self::HttpError { raw, .. } => Some(raw),
            Self::TransportException { raw, .. } => raw.as_deref(),
        }
    }

    /// The error message:
    ///
    /// - the `error` code of a [`RevocationResult::ProtocolError`]
    /// - the raw body of a [`RevocationResult::HttpError`]
    /// - the failure message of a [`RevocationResult::TransportException`]
    ///
    /// `None` for a [`RevocationResult::Success`].
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::ProtocolError { error, .. } => Some(error.error.as_str()),
            Self::HttpError { raw, .. } => Some(raw),
            Self::TransportException { failure, .. } => Some(&failure.message),
        }
    }

    /// The `error_description` of a [`RevocationResult::ProtocolError`].
    #[must_use]
    pub fn error_description(&self) -> Option<&str> {
        match self {
            Self::ProtocolError { error, .. } => error.error_description.as_deref(),
            _ => None,
        }
    }

    /// The failure of a [`RevocationResult::TransportException`].
    #[must_use]
    pub fn failure(&self) -> Option<&FailureDetail> {
        match self {
            Self::TransportException { failure, .. } => Some(failure),
            _ => None,
        }
    }

    /// The raw body parsed as JSON, if it is valid JSON.
    #[must_use]
    pub fn json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(self.raw()?).ok()
    }
}

impl fmt::Display for RevocationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success { status, .. } => write!(f, "token revoked ({status})"),
            Self::ProtocolError { status, error, .. } => {
                write!(f, "protocol error ({status}): {error}")
            }
            Self::HttpError { status, raw } => write!(f, "HTTP error ({status}): {raw}"),
            Self::TransportException {
                failure,
                status: Some(status),
                ..
            } => write!(f, "transport exception ({status}): {failure}"),
            Self::TransportException {
                failure,
                status: None,
                ..
            } => write!(f, "transport exception: {failure}"),
        }
    }
}
