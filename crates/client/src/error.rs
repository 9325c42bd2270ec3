// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! The error types used in this crate.

use thiserror::Error;

/// All possible errors when building a revocation request.
///
/// Those are programming errors: the request is rejected before anything is
/// sent.
#[derive(Debug, Error)]
pub enum InvalidArgumentError {
    /// The token to revoke is empty.
    #[error("the token to revoke is missing")]
    MissingToken,

    /// The revocation endpoint is not a valid URL.
    #[error("invalid revocation endpoint")]
    InvalidEndpoint(#[from] url::ParseError),

    /// The revocation endpoint does not use an HTTP scheme.
    #[error("unsupported scheme {0:?} for the revocation endpoint")]
    UnsupportedEndpointScheme(String),

    /// An extra parameter uses the name of a field set by the request itself.
    #[error("the {0:?} parameter is reserved and can't be set as an extra parameter")]
    ReservedParameter(String),
}
