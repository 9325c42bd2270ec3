// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Requests for [Token Revocation].
//!
//! [Token Revocation]: https://www.rfc-editor.org/rfc/rfc7009.html

use tokio_util::sync::CancellationToken;

use crate::{
    classify::{ErrorStatusPolicy, classify},
    http_service::Transport,
    types::{FailureDetail, RevocationRequest, RevocationResult},
};

/// Revoke a token.
///
/// The request is sent once. Every outcome, including transport failures, is
/// reported in the returned [`RevocationResult`].
///
/// # Arguments
///
/// * `transport` - The transport to use for making HTTP requests.
///
/// * `request` - The revocation request.
///
/// * `policy` - The error statuses for which a structured error body is
///   expected.
#[tracing::instrument(skip_all, fields(revocation_endpoint = %request.endpoint()))]
pub async fn revoke_token<T>(
    transport: &T,
    request: &RevocationRequest,
    policy: &ErrorStatusPolicy,
) -> RevocationResult
where
    T: Transport + ?Sized,
{
    tracing::debug!(token_type_hint = ?request.token_type_hint(), "Revoking token…");

    let outcome = transport.send(request.encode()).await;

    let result = classify(outcome, policy);
    log_result(&result);
    result
}

/// Revoke a token, aborting the request if `cancellation_token` is cancelled.
///
/// A cancelled request results in a
/// [`RevocationResult::TransportException`] with a
/// [`FailureKind::Cancelled`](crate::types::FailureKind::Cancelled) failure.
#[tracing::instrument(skip_all, fields(revocation_endpoint = %request.endpoint()))]
pub async fn revoke_token_with_cancellation<T>(
    transport: &T,
    request: &RevocationRequest,
    policy: &ErrorStatusPolicy,
    cancellation_token: &CancellationToken,
) -> RevocationResult
where
    T: Transport + ?Sized,
{
    tracing::debug!(token_type_hint = ?request.token_type_hint(), "Revoking token…");

    let outcome = tokio::select! {
        biased;

        () = cancellation_token.cancelled() => Err(FailureDetail::cancelled().into()),
        outcome = transport.send(request.encode()) => outcome,
    };

    let result = classify(outcome, policy);
    log_result(&result);
    result
}

fn log_result(result: &RevocationResult) {
    match result {
        RevocationResult::Success { status, .. } => {
            tracing::debug!(%status, "Token revoked");
        }
        RevocationResult::ProtocolError { status, error, .. } => {
            tracing::warn!(
                %status,
                error = %error.error,
                error_description = error.error_description.as_deref(),
                "Revocation endpoint returned an error"
            );
        }
        RevocationResult::HttpError { status, .. } => {
            tracing::warn!(%status, "Revocation endpoint returned an HTTP error");
        }
        RevocationResult::TransportException {
            failure, status, ..
        } => {
            tracing::warn!(
                kind = ?failure.kind,
                status = status.map(|status| status.as_u16()),
                error = %failure,
                "Token revocation failed"
            );
        }
    }
}
