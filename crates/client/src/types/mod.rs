// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! OAuth 2.0 token revocation types.

pub mod client_credentials;
pub mod errors;
pub mod request;
pub mod result;
pub mod token_type_hint;

pub use self::{
    client_credentials::{BasicAuthEncoding, ClientCredentials},
    errors::{ClientErrorCode, ErrorBody},
    request::{EncodedRevocationRequest, RevocationRequest, RevocationRequestBuilder},
    result::{FailureDetail, FailureKind, ResponseErrorType, RevocationResult},
    token_type_hint::TokenTypeHint,
};
