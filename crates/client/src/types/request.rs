// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

//! Revocation requests and their encoding.

use bytes::Bytes;
use headers::{ContentType, HeaderMapExt as _};
use http::{HeaderMap, HeaderValue, header::ACCEPT};
use indexmap::IndexMap;
use url::Url;

use super::{BasicAuthEncoding, ClientCredentials, TokenTypeHint};
use crate::error::InvalidArgumentError;

/// Body fields set by the request itself, which can't be overridden by extra
/// parameters.
const RESERVED_PARAMETERS: &[&str] = &[
    "token",
    "token_type_hint",
    "client_id",
    "client_secret",
    "client_assertion",
    "client_assertion_type",
];

/// A request to revoke a token, as defined in [RFC 7009, section 2.1].
///
/// It is immutable once built with a [`RevocationRequestBuilder`].
///
/// [RFC 7009, section 2.1]: https://www.rfc-editor.org/rfc/rfc7009#section-2.1
#[derive(Debug, Clone)]
pub struct RevocationRequest {
    endpoint: Url,
    token: String,
    token_type_hint: Option<TokenTypeHint>,
    client_credentials: Option<ClientCredentials>,
    basic_auth_encoding: BasicAuthEncoding,
    parameters: IndexMap<String, String>,
}

impl RevocationRequest {
    /// Start building a request to revoke `token` at the given revocation
    /// endpoint.
    #[must_use]
    pub fn builder(
        endpoint: impl Into<String>,
        token: impl Into<String>,
    ) -> RevocationRequestBuilder {
        RevocationRequestBuilder {
            endpoint: endpoint.into(),
            token: token.into(),
            token_type_hint: None,
            client_credentials: None,
            basic_auth_encoding: BasicAuthEncoding::default(),
            parameters: IndexMap::new(),
        }
    }

    /// The URL of the revocation endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// The token to revoke.
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// The hint about the type of the token, if any.
    #[must_use]
    pub fn token_type_hint(&self) -> Option<&TokenTypeHint> {
        self.token_type_hint.as_ref()
    }

    /// The credentials used to authenticate the client, if any.
    #[must_use]
    pub fn client_credentials(&self) -> Option<&ClientCredentials> {
        self.client_credentials.as_ref()
    }

    /// The extra parameters, in insertion order.
    #[must_use]
    pub fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }

    /// Encode this request as a form-urlencoded POST to the revocation
    /// endpoint.
    ///
    /// The fields are, in order: `token`, `token_type_hint`, the client
    /// credentials when they are not sent in the Authorization header, and
    /// the extra parameters.
    #[must_use]
    pub fn encode(&self) -> EncodedRevocationRequest {
        let mut headers = HeaderMap::new();
        headers.typed_insert(ContentType::form_url_encoded());
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut form = form_urlencoded::Serializer::new(String::new());
        form.append_pair("token", &self.token);

        if let Some(token_type_hint) = &self.token_type_hint {
            form.append_pair("token_type_hint", token_type_hint.as_str());
        }

        if let Some(client_credentials) = &self.client_credentials {
            client_credentials.apply_to_request(&mut headers, &mut form, self.basic_auth_encoding);
        }

        form.extend_pairs(&self.parameters);

        EncodedRevocationRequest {
            endpoint: self.endpoint.clone(),
            headers,
            body: Bytes::from(form.finish()),
        }
    }
}

/// A builder for a [`RevocationRequest`].
#[derive(Debug, Clone)]
#[must_use]
pub struct RevocationRequestBuilder {
    endpoint: String,
    token: String,
    token_type_hint: Option<TokenTypeHint>,
    client_credentials: Option<ClientCredentials>,
    basic_auth_encoding: BasicAuthEncoding,
    parameters: IndexMap<String, String>,
}

impl RevocationRequestBuilder {
    /// Set the hint about the type of the token.
    pub fn token_type_hint(mut self, token_type_hint: TokenTypeHint) -> Self {
        self.token_type_hint = Some(token_type_hint);
        self
    }

    /// Set the credentials used to authenticate the client.
    pub fn client_credentials(mut self, client_credentials: ClientCredentials) -> Self {
        self.client_credentials = Some(client_credentials);
        self
    }

    /// Set how the credentials are encoded in the Authorization header, when
    /// using [`ClientCredentials::ClientSecretBasic`].
    pub fn basic_auth_encoding(mut self, basic_auth_encoding: BasicAuthEncoding) -> Self {
        self.basic_auth_encoding = basic_auth_encoding;
        self
    }

    /// Add an extra parameter to the body of the request.
    ///
    /// Setting the same parameter twice keeps the last value, at the position
    /// of the first insertion.
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    /// Add several extra parameters to the body of the request.
    pub fn parameters<I, K, V>(mut self, parameters: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.extend(
            parameters
                .into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        );
        self
    }

    /// Validate and build the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is empty, if the endpoint is not a valid
    /// HTTP(S) URL, or if an extra parameter uses a reserved name.
    pub fn build(self) -> Result<RevocationRequest, InvalidArgumentError> {
        if self.token.is_empty() {
            return Err(InvalidArgumentError::MissingToken);
        }

        let endpoint = Url::parse(&self.endpoint)?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(InvalidArgumentError::UnsupportedEndpointScheme(
                endpoint.scheme().to_owned(),
            ));
        }

        if let Some(key) = self
            .parameters
            .keys()
            .find(|key| RESERVED_PARAMETERS.contains(&key.as_str()))
        {
            return Err(InvalidArgumentError::ReservedParameter(key.clone()));
        }

        Ok(RevocationRequest {
            endpoint,
            token: self.token,
            token_type_hint: self.token_type_hint,
            client_credentials: self.client_credentials,
            basic_auth_encoding: self.basic_auth_encoding,
            parameters: self.parameters,
        })
    }
}

/// A [`RevocationRequest`] encoded as an HTTP request, ready to be sent by a
/// [`Transport`](crate::http_service::Transport).
#[derive(Debug, Clone)]
pub struct EncodedRevocationRequest {
    /// The URL to POST the request to.
    pub endpoint: Url,

    /// The headers of the request, including the Authorization header when
    /// the client authenticates with HTTP Basic.
    pub headers: HeaderMap,

    /// The form-urlencoded body.
    pub body: Bytes,
}

impl EncodedRevocationRequest {
    /// The value of the Authorization header, if any.
    #[must_use]
    pub fn authorization(&self) -> Option<&HeaderValue> {
        self.headers.get(http::header::AUTHORIZATION)
    }

    /// Decode the fields of the form body.
    pub fn form_fields(&self) -> impl Iterator<Item = (String, String)> + '_ {
        form_urlencoded::parse(&self.body).into_owned()
    }
}
