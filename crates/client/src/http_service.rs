// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The HTTP transport used to send revocation requests.

use async_trait::async_trait;
use bytes::Bytes;
use http::StatusCode;
use revoke_http::RequestBuilderExt as _;

use crate::types::{EncodedRevocationRequest, FailureDetail, FailureKind};

/// The raw response of the server: its status and body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// The status code of the response.
    pub status: StatusCode,

    /// The body of the response.
    pub body: Bytes,
}

impl RawResponse {
    /// Create a new raw response.
    #[must_use]
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// A failure to get a complete response.
///
/// The status is set when the response head was received but its body could
/// not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportFailure {
    /// What went wrong.
    pub failure: FailureDetail,

    /// The status code, if the response head was received.
    pub status: Option<StatusCode>,
}

impl TransportFailure {
    /// A failure which happened after receiving a response with this status.
    #[must_use]
    pub fn with_status(failure: FailureDetail, status: StatusCode) -> Self {
        Self {
            failure,
            status: Some(status),
        }
    }
}

impl From<FailureDetail> for TransportFailure {
    fn from(failure: FailureDetail) -> Self {
        Self {
            failure,
            status: None,
        }
    }
}

/// A way to send an encoded revocation request.
///
/// Implementations send the request once, without retrying, and return the
/// response whatever its status, or a [`TransportFailure`] if no complete
/// response could be obtained.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send the request and read the whole response.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response body
    /// could not be read.
    async fn send(
        &self,
        request: EncodedRevocationRequest,
    ) -> Result<RawResponse, TransportFailure>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(
        &self,
        request: EncodedRevocationRequest,
    ) -> Result<RawResponse, TransportFailure> {
        let EncodedRevocationRequest {
            endpoint,
            headers,
            body,
        } = request;

        let response = self
            .post(endpoint)
            .headers(headers)
            .body(body)
            .send_traced()
            .await
            .map_err(FailureDetail::from)?;

        let status = response.status();
        let body = response.bytes().await.map_err(|err| {
            // The head was received, so this is about the body whatever reqwest says
            let failure = FailureDetail::new(FailureKind::Body, err.to_string());
            TransportFailure::with_status(failure, status)
        })?;

        Ok(RawResponse { status, body })
    }
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn send(
        &self,
        request: EncodedRevocationRequest,
    ) -> Result<RawResponse, TransportFailure> {
        (**self).send(request).await
    }
}
