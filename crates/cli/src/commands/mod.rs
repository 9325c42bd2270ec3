// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use figment::Figment;

mod config;
mod revoke;

#[derive(Parser, Debug)]
enum Subcommand {
    /// Configuration-related commands
    Config(self::config::Options),
}

/// Revoke an OAuth 2.0 access or refresh token (RFC 7009)
#[derive(Parser, Debug)]
#[command(
    version,
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true
)]
pub struct Options {
    /// Path to the configuration file
    ///
    /// Can be repeated, later files are merged on top of earlier ones.
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Append,
        env = "REVOKE_CONFIG",
        value_delimiter = ','
    )]
    config: Vec<Utf8PathBuf>,

    #[command(subcommand)]
    subcommand: Option<Subcommand>,

    #[command(flatten)]
    revoke: self::revoke::Options,
}

impl Options {
    pub async fn run(self, figment: &Figment) -> anyhow::Result<ExitCode> {
        use Subcommand as S;
        match self.subcommand {
            Some(S::Config(c)) => Box::pin(c.run(figment)).await,
            None => Box::pin(self.revoke.run(figment)).await,
        }
    }

    /// Get a [`Figment`] instance with the configuration loaded
    pub fn figment(&self) -> Figment {
        let configs = if self.config.is_empty() {
            vec![Utf8PathBuf::from("config.yaml")]
        } else {
            self.config.clone()
        };

        revoke_config::load_figment(&configs)
    }
}
