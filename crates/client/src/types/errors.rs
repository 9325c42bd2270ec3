// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Error responses returned by the authorization server.

use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay, skip_serializing_none};

/// An error code returned by the revocation endpoint.
///
/// The codes are the ones of [RFC 6749, section 5.2], plus
/// `unsupported_token_type` added by [RFC 7009, section 2.2.1].
///
/// [RFC 6749, section 5.2]: https://www.rfc-editor.org/rfc/rfc6749#section-5.2
/// [RFC 7009, section 2.2.1]: https://www.rfc-editor.org/rfc/rfc7009#section-2.2.1
#[derive(Debug, Clone, PartialEq, Eq, Hash, SerializeDisplay, DeserializeFromStr)]
#[non_exhaustive]
pub enum ClientErrorCode {
    /// `invalid_request`
    ///
    /// The request is missing a required parameter or is otherwise malformed.
    InvalidRequest,

    /// `invalid_client`
    ///
    /// Client authentication failed.
    InvalidClient,

    /// `invalid_grant`
    InvalidGrant,

    /// `unauthorized_client`
    ///
    /// The client is not authorized to use this endpoint.
    UnauthorizedClient,

    /// `unsupported_grant_type`
    UnsupportedGrantType,

    /// `invalid_scope`
    InvalidScope,

    /// `unsupported_token_type`
    ///
    /// The server does not support the revocation of the presented token
    /// type.
    UnsupportedTokenType,

    /// An unknown error code.
    Unknown(String),
}

impl ClientErrorCode {
    /// The string form of this code, as found in the `error` field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::InvalidClient => "invalid_client",
            Self::InvalidGrant => "invalid_grant",
            Self::UnauthorizedClient => "unauthorized_client",
            Self::UnsupportedGrantType => "unsupported_grant_type",
            Self::InvalidScope => "invalid_scope",
            Self::UnsupportedTokenType => "unsupported_token_type",
            Self::Unknown(value) => value,
        }
    }
}

impl fmt::Display for ClientErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClientErrorCode {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "invalid_request" => Ok(Self::InvalidRequest),
            "invalid_client" => Ok(Self::InvalidClient),
            "invalid_grant" => Ok(Self::InvalidGrant),
            "unauthorized_client" => Ok(Self::UnauthorizedClient),
            "unsupported_grant_type" => Ok(Self::UnsupportedGrantType),
            "invalid_scope" => Ok(Self::InvalidScope),
            "unsupported_token_type" => Ok(Self::UnsupportedTokenType),
            value => Ok(Self::Unknown(value.to_owned())),
        }
    }
}

/// The body of an error response.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error code.
    pub error: ClientErrorCode,

    /// A human-readable description of the error.
    pub error_description: Option<String>,

    /// A URI identifying a web page with information about the error.
    pub error_uri: Option<String>,
}

impl ErrorBody {
    /// Create an error body with just an error code.
    #[must_use]
    pub fn new(error: ClientErrorCode) -> Self {
        Self {
            error,
            error_description: None,
            error_uri: None,
        }
    }

    /// Set the description of the error.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.error_description = Some(description.into());
        self
    }
}

impl fmt::Display for ErrorBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error_description {
            Some(description) => write!(f, "{}: {description}", self.error),
            None => write!(f, "{}", self.error),
        }
    }
}
