// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::Error as _};
use serde_with::skip_serializing_none;
use url::Url;

use super::ConfigurationSection;

/// Authentication method used by the client on the revocation endpoint
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ClientAuthMethod {
    /// Public client, only the `client_id` is sent, in the request body
    #[default]
    None,

    /// `client_id` and `client_secret` in a `Basic` authorization header
    ClientSecretBasic,

    /// `client_id` and `client_secret` in the request body
    ClientSecretPost,

    /// A pre-built JWT client assertion, in the request body
    ClientAssertion,
}

/// How the client credentials are encoded in a `Basic` authorization header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BasicAuthEncoding {
    /// Form-urlencode the client ID and secret before joining them, as
    /// required by RFC 6749
    #[default]
    Rfc6749,

    /// Join the client ID and secret as-is
    Rfc2617,
}

fn default_structured_error_statuses() -> Vec<u16> {
    vec![400, 401]
}

fn is_default_structured_error_statuses(value: &[u16]) -> bool {
    value == default_structured_error_statuses()
}

fn endpoint_example() -> &'static str {
    "https://auth.example.com/oauth2/revoke"
}

/// Configuration of the revocation endpoint and of the client calling it
#[skip_serializing_none]
#[derive(Clone, Serialize, Deserialize, JsonSchema)]
pub struct RevocationConfig {
    /// URL of the revocation endpoint
    #[schemars(example = "endpoint_example")]
    pub endpoint: Url,

    /// How the client authenticates to the endpoint
    #[serde(default)]
    pub auth_method: ClientAuthMethod,

    /// The client ID
    ///
    /// Required by every authentication method but `client_assertion`.
    pub client_id: Option<String>,

    /// The client secret
    ///
    /// Used by the `client_secret_basic` and `client_secret_post` methods.
    pub client_secret: Option<String>,

    /// A signed JWT used as the client assertion
    ///
    /// Used by the `client_assertion` method.
    pub client_assertion: Option<String>,

    /// The type of the client assertion
    ///
    /// Defaults to `urn:ietf:params:oauth:client-assertion-type:jwt-bearer`.
    pub client_assertion_type: Option<String>,

    /// Encoding of the credentials for the `client_secret_basic` method
    #[serde(default)]
    pub basic_auth_encoding: BasicAuthEncoding,

    /// Default `token_type_hint` sent along the token
    pub token_type_hint: Option<String>,

    /// Error statuses for which the server must answer with a JSON error
    /// body
    ///
    /// An unparseable body on one of those is reported as an exception, and
    /// as an HTTP error on any other status.
    #[serde(
        default = "default_structured_error_statuses",
        skip_serializing_if = "is_default_structured_error_statuses"
    )]
    pub structured_error_statuses: Vec<u16>,

    /// Additional parameters sent in the request body, in the order they
    /// are written
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub parameters: IndexMap<String, String>,
}

impl std::fmt::Debug for RevocationConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationConfig")
            .field("endpoint", &self.endpoint.as_str())
            .field("auth_method", &self.auth_method)
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[redacted]"))
            .field(
                "client_assertion",
                &self.client_assertion.as_ref().map(|_| "[redacted]"),
            )
            .field("client_assertion_type", &self.client_assertion_type)
            .field("basic_auth_encoding", &self.basic_auth_encoding)
            .field("token_type_hint", &self.token_type_hint)
            .field("structured_error_statuses", &self.structured_error_statuses)
            .field("parameters", &self.parameters)
            .finish()
    }
}

impl ConfigurationSection for RevocationConfig {
    const PATH: Option<&'static str> = Some("revocation");

    fn validate(&self, figment: &figment::Figment) -> Result<(), figment::Error> {
        let annotate = |mut error: figment::Error| {
            error.metadata = figment
                .find_metadata(Self::PATH.unwrap_or_default())
                .cloned();
            error.profile = Some(figment::Profile::Default);
            error.path = vec![Self::PATH.unwrap_or_default().to_owned()];
            Err(error)
        };

        if !matches!(self.endpoint.scheme(), "http" | "https") {
            return annotate(figment::Error::custom(format!(
                "Unsupported scheme `{}` for the revocation endpoint",
                self.endpoint.scheme()
            )));
        }

        match self.auth_method {
            ClientAuthMethod::None
            | ClientAuthMethod::ClientSecretBasic
            | ClientAuthMethod::ClientSecretPost => {
                if self.client_id.is_none() {
                    return annotate(figment::Error::missing_field("client_id"));
                }

                if self.client_assertion.is_some() {
                    return annotate(figment::Error::custom(
                        "Unexpected field `client_assertion` for the selected authentication method",
                    ));
                }
            }
            ClientAuthMethod::ClientAssertion => {
                if self.client_assertion.is_none() {
                    return annotate(figment::Error::missing_field("client_assertion"));
                }
            }
        }

        match self.auth_method {
            ClientAuthMethod::ClientSecretBasic | ClientAuthMethod::ClientSecretPost => {
                if self.client_secret.is_none() {
                    return annotate(figment::Error::missing_field("client_secret"));
                }
            }
            ClientAuthMethod::None | ClientAuthMethod::ClientAssertion => {
                if self.client_secret.is_some() {
                    return annotate(figment::Error::custom(
                        "Unexpected field `client_secret` for the selected authentication method",
                    ));
                }
            }
        }

        if let Some(status) = self
            .structured_error_statuses
            .iter()
            .find(|status| !(400..=599).contains(*status))
        {
            return annotate(figment::Error::custom(format!(
                "Invalid status `{status}` in `structured_error_statuses`, expected an error status between 400 and 599"
            )));
        }

        Ok(())
    }
}
