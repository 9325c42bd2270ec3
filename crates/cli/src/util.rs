// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use anyhow::Context;
use http::StatusCode;
use revoke_client::{
    classify::ErrorStatusPolicy,
    types::{
        BasicAuthEncoding, ClientCredentials, RevocationRequest, RevocationResult, TokenTypeHint,
        client_credentials::JWT_BEARER_CLIENT_ASSERTION_TYPE,
    },
};
use revoke_config::{ClientAuthMethod, RevocationConfig, TelemetryConfig};
use tracing_subscriber::EnvFilter;

/// Build the log filter, from `RUST_LOG` if set, else from the config,
/// defaulting to `info`
pub fn log_filter(config: &TelemetryConfig) -> anyhow::Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_deref().unwrap_or("info")))
        .context("could not setup logging filter")
}

pub fn client_credentials_from_config(
    config: &RevocationConfig,
) -> anyhow::Result<ClientCredentials> {
    let client_id = || {
        config
            .client_id
            .clone()
            .context("missing `client_id` in the revocation config")
    };
    let client_secret = || {
        config
            .client_secret
            .clone()
            .context("missing `client_secret` in the revocation config")
    };

    let credentials = match config.auth_method {
        ClientAuthMethod::None => ClientCredentials::None {
            client_id: client_id()?,
        },
        ClientAuthMethod::ClientSecretBasic => ClientCredentials::ClientSecretBasic {
            client_id: client_id()?,
            client_secret: client_secret()?,
        },
        ClientAuthMethod::ClientSecretPost => ClientCredentials::ClientSecretPost {
            client_id: client_id()?,
            client_secret: client_secret()?,
        },
        ClientAuthMethod::ClientAssertion => ClientCredentials::ClientAssertion {
            client_id: config.client_id.clone(),
            assertion: config
                .client_assertion
                .clone()
                .context("missing `client_assertion` in the revocation config")?,
            assertion_type: config
                .client_assertion_type
                .clone()
                .unwrap_or_else(|| JWT_BEARER_CLIENT_ASSERTION_TYPE.to_owned()),
        },
    };

    Ok(credentials)
}

/// Build a revocation request for the given token
///
/// The hint and parameters given on the command line take precedence over the
/// ones from the configuration.
pub fn request_from_config(
    config: &RevocationConfig,
    token: impl Into<String>,
    hint: Option<TokenTypeHint>,
    params: Vec<(String, String)>,
) -> anyhow::Result<RevocationRequest> {
    let credentials = client_credentials_from_config(config)?;
    let basic_auth_encoding = match config.basic_auth_encoding {
        revoke_config::BasicAuthEncoding::Rfc6749 => BasicAuthEncoding::Rfc6749,
        revoke_config::BasicAuthEncoding::Rfc2617 => BasicAuthEncoding::Rfc2617,
    };

    let mut builder = RevocationRequest::builder(config.endpoint.as_str(), token)
        .client_credentials(credentials)
        .basic_auth_encoding(basic_auth_encoding)
        .parameters(config.parameters.clone())
        .parameters(params);

    let hint = hint.or_else(|| {
        config
            .token_type_hint
            .as_deref()
            .and_then(|hint| hint.parse().ok())
    });
    if let Some(hint) = hint {
        builder = builder.token_type_hint(hint);
    }

    builder.build().context("invalid revocation request")
}

pub fn error_status_policy_from_config(
    config: &RevocationConfig,
) -> anyhow::Result<ErrorStatusPolicy> {
    let statuses = config
        .structured_error_statuses
        .iter()
        .map(|status| StatusCode::from_u16(*status))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid status in `structured_error_statuses`")?;

    Ok(ErrorStatusPolicy::new(statuses))
}

/// Parse a `KEY=VALUE` command line argument
pub fn parse_key_value(arg: &str) -> Result<(String, String), String> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| format!("expected `KEY=VALUE`, got `{arg}`"))?;

    if key.is_empty() {
        return Err(format!("empty parameter name in `{arg}`"));
    }

    Ok((key.to_owned(), value.to_owned()))
}

/// A JSON representation of a result, for machine consumption
pub fn result_to_json(result: &RevocationResult) -> serde_json::Value {
    serde_json::json!({
        "is_error": result.is_error(),
        "error_type": result.error_type(),
        "status": result.status_code().map(|status| status.as_u16()),
        "error": result.error(),
        "error_description": result.error_description(),
        "failure": result.failure().map(|failure| failure.kind),
        "body": result.raw(),
    })
}
