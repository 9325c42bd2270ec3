// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Types and methods for client credentials.

use std::fmt;

use headers::{Authorization, HeaderMapExt as _};
use http::HeaderMap;
use serde::{Deserialize, Serialize};

/// The assertion type used for JWT client assertions, as defined in
/// [RFC 7523, section 2.2].
///
/// [RFC 7523, section 2.2]: https://www.rfc-editor.org/rfc/rfc7523#section-2.2
pub const JWT_BEARER_CLIENT_ASSERTION_TYPE: &str =
    "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// How the client ID and secret are encoded in a `Basic` Authorization
/// header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BasicAuthEncoding {
    /// The client ID and secret are form-urlencoded before being joined and
    /// base64-encoded, as mandated by [RFC 6749, section 2.3.1].
    ///
    /// [RFC 6749, section 2.3.1]: https://www.rfc-editor.org/rfc/rfc6749#section-2.3.1
    #[default]
    Rfc6749,

    /// The client ID and secret are joined and base64-encoded as-is, as in
    /// [RFC 2617].
    ///
    /// Some servers don't decode the credentials and need this.
    ///
    /// [RFC 2617]: https://www.rfc-editor.org/rfc/rfc2617#section-2
    Rfc2617,
}

/// The credentials obtained during registration, to authenticate a client on
/// the revocation endpoint.
#[derive(Clone)]
pub enum ClientCredentials {
    /// No client authentication is used.
    ///
    /// This is used if the client is public.
    None {
        /// The unique ID for the client.
        client_id: String,
    },

    /// The client authentication is sent via the Authorization HTTP header.
    ClientSecretBasic {
        /// The unique ID for the client.
        client_id: String,

        /// The secret of the client.
        client_secret: String,
    },

    /// The client authentication is sent with the body of the request.
    ClientSecretPost {
        /// The unique ID for the client.
        client_id: String,

        /// The secret of the client.
        client_secret: String,
    },

    /// The client authenticates with an assertion built beforehand, usually a
    /// signed JWT.
    ClientAssertion {
        /// The unique ID for the client, if it should be sent alongside the
        /// assertion.
        client_id: Option<String>,

        /// The assertion.
        assertion: String,

        /// The type of the assertion, usually
        /// [`JWT_BEARER_CLIENT_ASSERTION_TYPE`].
        assertion_type: String,
    },
}

impl ClientCredentials {
    /// Credentials for a client authenticating with a JWT bearer assertion.
    #[must_use]
    pub fn jwt_bearer_assertion(client_id: Option<String>, assertion: String) -> Self {
        Self::ClientAssertion {
            client_id,
            assertion,
            assertion_type: JWT_BEARER_CLIENT_ASSERTION_TYPE.to_owned(),
        }
    }

    /// Get the client ID of these `ClientCredentials`, if any.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        match self {
            ClientCredentials::None { client_id }
            | ClientCredentials::ClientSecretBasic { client_id, .. }
            | ClientCredentials::ClientSecretPost { client_id, .. } => Some(client_id),
            ClientCredentials::ClientAssertion { client_id, .. } => client_id.as_deref(),
        }
    }

    /// Apply these [`ClientCredentials`] to a request, either in its headers or
    /// in its form.
    pub(crate) fn apply_to_request(
        &self,
        headers: &mut HeaderMap,
        form: &mut form_urlencoded::Serializer<'_, String>,
        basic_auth_encoding: BasicAuthEncoding,
    ) {
        match self {
            ClientCredentials::None { client_id } => {
                form.append_pair("client_id", client_id);
            }

            ClientCredentials::ClientSecretBasic {
                client_id,
                client_secret,
            } => {
                let authorization = match basic_auth_encoding {
                    BasicAuthEncoding::Rfc6749 => {
                        let username = form_urlencoded::byte_serialize(client_id.as_bytes())
                            .collect::<String>();
                        let password = form_urlencoded::byte_serialize(client_secret.as_bytes())
                            .collect::<String>();
                        Authorization::basic(&username, &password)
                    }
                    BasicAuthEncoding::Rfc2617 => Authorization::basic(client_id, client_secret),
                };

                headers.typed_insert(authorization);
            }

            ClientCredentials::ClientSecretPost {
                client_id,
                client_secret,
            } => {
                form.append_pair("client_id", client_id);
                form.append_pair("client_secret", client_secret);
            }

            ClientCredentials::ClientAssertion {
                client_id,
                assertion,
                assertion_type,
            } => {
                if let Some(client_id) = client_id {
                    form.append_pair("client_id", client_id);
                }
                form.append_pair("client_assertion", assertion);
                form.append_pair("client_assertion_type", assertion_type);
            }
        }
    }
}

impl fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None { client_id } => f
                .debug_struct("None")
                .field("client_id", client_id)
                .finish(),
            Self::ClientSecretBasic { client_id, .. } => f
                .debug_struct("ClientSecretBasic")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
            Self::ClientSecretPost { client_id, .. } => f
                .debug_struct("ClientSecretPost")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
            Self::ClientAssertion {
                client_id,
                assertion_type,
                ..
            } => f
                .debug_struct("ClientAssertion")
                .field("client_id", client_id)
                .field("assertion_type", assertion_type)
                .finish_non_exhaustive(),
        }
    }
}
