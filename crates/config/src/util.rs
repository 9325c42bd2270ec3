// Copyright 2025 New Vector Ltd.
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE files in the repository root for full details.

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};
use serde::de::DeserializeOwned;

/// Prefix of the environment variables overriding the configuration files.
///
/// Nested keys are separated with `__`, e.g.
/// `REVOKE_REVOCATION__CLIENT_ID=my-client`.
pub const ENV_PREFIX: &str = "REVOKE_";

/// Build a [`Figment`] from the given YAML files, merged in order, with the
/// `REVOKE_` environment variables on top.
#[must_use]
pub fn load_figment<P: AsRef<Path>>(config_files: &[P]) -> Figment {
    let files = config_files
        .iter()
        .fold(Figment::new(), |figment, path| {
            figment.admerge(Yaml::file(path.as_ref()))
        });

    files.merge(Env::prefixed(ENV_PREFIX).split("__"))
}

/// Trait implemented by all configuration sections to help loading a specific
/// part of the config.
pub trait ConfigurationSection: Sized + DeserializeOwned {
    /// Specify where this section should live relative to the root.
    const PATH: Option<&'static str> = None;

    /// Validate the configuration section
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid
    fn validate(&self, _figment: &Figment) -> Result<(), figment::Error> {
        Ok(())
    }

    /// Extract configuration from a Figment instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration could not be loaded or is invalid
    fn extract(figment: &Figment) -> Result<Self, figment::Error> {
        let this: Self = match Self::PATH {
            Some(path) => figment.extract_inner(path)?,
            None => figment.extract()?,
        };

        this.validate(figment)?;
        Ok(this)
    }
}

/// Extension trait for sections which have sensible defaults, to load them
/// even when absent from the configuration.
pub trait ConfigurationSectionExt: ConfigurationSection + Default {
    /// Extract the configuration section, or return the default value if the
    /// section is not present.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration section is invalid.
    fn extract_or_default(figment: &Figment) -> Result<Self, figment::Error> {
        match Self::PATH {
            Some(path) if !figment.contains(path) => Ok(Self::default()),
            _ => Self::extract(figment),
        }
    }
}

impl<T: ConfigurationSection + Default> ConfigurationSectionExt for T {}
