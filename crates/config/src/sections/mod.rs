// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

mod revocation;
mod telemetry;

pub use self::{
    revocation::{BasicAuthEncoding, ClientAuthMethod, RevocationConfig},
    telemetry::TelemetryConfig,
};
use crate::util::ConfigurationSection;

/// Application configuration root
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct RootConfig {
    /// Configuration of the revocation endpoint and of the client
    pub revocation: RevocationConfig,

    /// Configuration related to logging
    #[serde(default, skip_serializing_if = "TelemetryConfig::is_default")]
    pub telemetry: TelemetryConfig,
}

impl ConfigurationSection for RootConfig {
    fn validate(&self, figment: &figment::Figment) -> Result<(), figment::Error> {
        self.revocation.validate(figment)?;
        self.telemetry.validate(figment)?;

        Ok(())
    }
}
