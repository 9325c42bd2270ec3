// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use figment::Figment;
use revoke_client::{requests::revocation::revoke_token_with_cancellation, types::TokenTypeHint};
use revoke_config::{ConfigurationSection, RevocationConfig};
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, info_span};

use crate::util::{error_status_policy_from_config, parse_key_value, request_from_config};

#[derive(Parser, Debug)]
pub(super) struct Options {
    /// The token to revoke
    #[arg(required = true)]
    token: Option<String>,

    /// Hint about the type of the token, e.g. `access_token` or
    /// `refresh_token`
    ///
    /// Overrides the `token_type_hint` set in the configuration.
    #[arg(long)]
    hint: Option<TokenTypeHint>,

    /// Additional parameter to send in the request, as `KEY=VALUE`
    ///
    /// Can be repeated. Overrides the parameters with the same name set in
    /// the configuration.
    #[arg(short, long = "param", value_parser = parse_key_value)]
    params: Vec<(String, String)>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        let span = info_span!("cli.revoke");

        async move {
            let config =
                RevocationConfig::extract(figment).context("Failed to load revocation config")?;

            let token = self.token.context("missing token")?;
            let request = request_from_config(&config, token, self.hint, self.params)?;
            let policy = error_status_policy_from_config(&config)?;

            let http_client = revoke_http::reqwest_client();

            let cancellation_token = CancellationToken::new();
            tokio::spawn({
                let cancellation_token = cancellation_token.clone();
                async move {
                    if tokio::signal::ctrl_c().await.is_ok() {
                        tracing::info!("Received interrupt, cancelling the request");
                        cancellation_token.cancel();
                    }
                }
            });

            let result =
                revoke_token_with_cancellation(&http_client, &request, &policy, &cancellation_token)
                    .await;

            if self.json {
                let output = crate::util::result_to_json(&result);
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{result}");
            }

            Ok(if result.is_error() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            })
        }
        .instrument(span)
        .await
    }
}
