// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Classification of the responses of the revocation endpoint.

use http::StatusCode;

use crate::{
    http_service::{RawResponse, TransportFailure},
    types::{ErrorBody, FailureDetail, FailureKind, RevocationResult},
};

/// The error statuses for which the server is expected to answer with a
/// structured [`ErrorBody`].
///
/// An error response with one of those statuses which can't be parsed is a
/// [`RevocationResult::TransportException`], while any other error status
/// with an unparseable body is a [`RevocationResult::HttpError`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorStatusPolicy {
    structured: Vec<StatusCode>,
}

impl Default for ErrorStatusPolicy {
    /// `400 Bad Request` and `401 Unauthorized`, the statuses used by
    /// [RFC 6749, section 5.2].
    ///
    /// [RFC 6749, section 5.2]: https://www.rfc-editor.org/rfc/rfc6749#section-5.2
    fn default() -> Self {
        Self::new([StatusCode::BAD_REQUEST, StatusCode::UNAUTHORIZED])
    }
}

impl ErrorStatusPolicy {
    /// Expect a structured error body for the given statuses.
    #[must_use]
    pub fn new(structured: impl IntoIterator<Item = StatusCode>) -> Self {
        Self {
            structured: structured.into_iter().collect(),
        }
    }

    /// Whether a structured error body is expected for this status.
    #[must_use]
    pub fn expects_error_body(&self, status: StatusCode) -> bool {
        self.structured.contains(&status)
    }

    /// The statuses for which a structured error body is expected.
    #[must_use]
    pub fn structured_statuses(&self) -> &[StatusCode] {
        &self.structured
    }
}

/// Classify the outcome of sending a revocation request.
///
/// - if no complete response was obtained, the result is a transport
///   exception, keeping the status if the response head was received
/// - a 2xx response is a success, whatever its body
/// - an error response with a body parsing as an [`ErrorBody`] is a protocol
///   error
/// - otherwise the result depends on whether the [`ErrorStatusPolicy`]
///   expects a structured body for this status: if it does, the server broke
///   the protocol and it is a transport exception, else it is an HTTP error
#[must_use]
pub fn classify(
    outcome: Result<RawResponse, TransportFailure>,
    policy: &ErrorStatusPolicy,
) -> RevocationResult {
    let RawResponse { status, body } = match outcome {
        Ok(response) => response,
        Err(TransportFailure { failure, status }) => {
            return RevocationResult::TransportException {
                failure,
                status,
                raw: None,
            };
        }
    };

    let raw = String::from_utf8_lossy(&body).into_owned();

    if status.is_success() {
        return RevocationResult::Success { status, raw };
    }

    match parse_error_body(&body) {
        Ok(error) => RevocationResult::ProtocolError { status, error, raw },

        Err(err) if policy.expects_error_body(status) => RevocationResult::TransportException {
            failure: FailureDetail::new(
                FailureKind::Decode,
                format!("invalid error response: {err}"),
            ),
            status: Some(status),
            raw: Some(raw),
        },

        Err(_) => RevocationResult::HttpError { status, raw },
    }
}

/// Parse an error response body, which must be a JSON object with an `error`
/// field.
fn parse_error_body(body: &[u8]) -> Result<ErrorBody, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_slice(body)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("expected a JSON object"));
    }

    serde_json::from_value(value)
}
