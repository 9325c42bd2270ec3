// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use super::ConfigurationSection;

fn log_filter_example() -> &'static str {
    "info,revoke_client=debug"
}

/// Configuration related to logging
#[skip_serializing_none]
#[derive(Clone, Debug, Default, Serialize, Deserialize, JsonSchema)]
pub struct TelemetryConfig {
    /// Filter directives for the logs, in the `RUST_LOG` format
    ///
    /// The `RUST_LOG` environment variable takes precedence. Defaults to
    /// `info` if not set.
    #[schemars(example = "log_filter_example")]
    pub log_filter: Option<String>,

    /// Whether to colorize the logs
    ///
    /// Defaults to `true` when logging to a terminal.
    pub ansi: Option<bool>,
}

impl TelemetryConfig {
    /// Returns true if all fields are at their default values
    pub(crate) fn is_default(&self) -> bool {
        self.log_filter.is_none() && self.ansi.is_none()
    }
}

impl ConfigurationSection for TelemetryConfig {
    const PATH: Option<&'static str> = Some("telemetry");
}
