// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Hints about the type of a token.

use std::{convert::Infallible, fmt, str::FromStr};

use serde_with::{DeserializeFromStr, SerializeDisplay};

/// A hint about the type of the token submitted for revocation.
///
/// Defined in [RFC 7009, section 2.1] and registered in the OAuth Token Type
/// Hints registry.
///
/// [RFC 7009, section 2.1]: https://www.rfc-editor.org/rfc/rfc7009#section-2.1
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, SerializeDisplay, DeserializeFromStr)]
#[non_exhaustive]
pub enum TokenTypeHint {
    /// `access_token`
    AccessToken,

    /// `refresh_token`
    RefreshToken,

    /// An unknown value.
    Unknown(String),
}

impl TokenTypeHint {
    /// The value of this hint as sent in the `token_type_hint` field.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AccessToken => "access_token",
            Self::RefreshToken => "refresh_token",
            Self::Unknown(value) => value,
        }
    }
}

impl fmt::Display for TokenTypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenTypeHint {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "access_token" => Ok(Self::AccessToken),
            "refresh_token" => Ok(Self::RefreshToken),
            value => Ok(Self::Unknown(value.to_owned())),
        }
    }
}
