// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shell configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{Result, ShellError};

/// Scheme registered in the Android manifest for wallet callbacks.
pub const DEFAULT_CUSTOM_SCHEME: &str = "chessdao";

/// Local entry document bundled by Capacitor into the APK assets.
pub const DEFAULT_ENTRY_DOCUMENT: &str = "file:///android_asset/public/index.html";

/// Host part of the redirect link handed to the wallet.
pub const DEFAULT_CALLBACK_HOST: &str = "callback";

/// Persistent shell settings.
///
/// Every field falls back to its default, so a partial JSON file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// URI scheme that marks an activation request as ours.
    pub custom_scheme: String,
    /// Address of the web document loaded on initial activation.
    pub entry_document: String,
    /// Host used when building the wallet redirect link.
    pub callback_host: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            custom_scheme: DEFAULT_CUSTOM_SCHEME.into(),
            entry_document: DEFAULT_ENTRY_DOCUMENT.into(),
            callback_host: DEFAULT_CALLBACK_HOST.into(),
        }
    }
}

impl ShellConfig {
    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Check that the scheme is a legal URI scheme (RFC 3986 §3.1) and that
    /// the entry document is an absolute URL.
    pub fn validate(&self) -> Result<()> {
        let mut chars = self.custom_scheme.chars();
        let valid_scheme = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid_scheme {
            return Err(ShellError::Config(format!(
                "custom_scheme {:?} is not a valid URI scheme",
                self.custom_scheme
            )));
        }
        self.entry_url()?;
        Ok(())
    }

    /// Parsed form of [`Self::entry_document`].
    pub fn entry_url(&self) -> Result<Url> {
        Ok(Url::parse(&self.entry_document)?)
    }

    /// Whether `scheme` is the registered custom scheme.
    ///
    /// URI schemes are case-insensitive, and `url` lowercases them on parse.
    pub fn matches_scheme(&self, scheme: &str) -> bool {
        scheme.eq_ignore_ascii_case(&self.custom_scheme)
    }

    /// The `redirect_link` the web app passes to the wallet, e.g.
    /// `chessdao://callback`.
    pub fn redirect_link(&self) -> String {
        format!("{}://{}", self.custom_scheme, self.callback_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_android_shell() {
        let config = ShellConfig::default();
        assert_eq!(config.custom_scheme, "chessdao");
        assert_eq!(config.entry_document, "file:///android_asset/public/index.html");
        assert_eq!(config.redirect_link(), "chessdao://callback");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn scheme_match_ignores_case() {
        let config = ShellConfig::default();
        assert!(config.matches_scheme("chessdao"));
        assert!(config.matches_scheme("ChessDAO"));
        assert!(!config.matches_scheme("https"));
        assert!(!config.matches_scheme(""));
    }

    #[test]
    fn rejects_bad_scheme() {
        let config = ShellConfig {
            custom_scheme: "9chess".into(),
            ..ShellConfig::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::Config(_))));

        let config = ShellConfig {
            custom_scheme: String::new(),
            ..ShellConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_relative_entry_document() {
        let config = ShellConfig {
            entry_document: "public/index.html".into(),
            ..ShellConfig::default()
        };
        assert!(matches!(config.validate(), Err(ShellError::InvalidUrl(_))));
    }

    #[test]
    fn partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        std::fs::write(&path, r#"{ "callback_host": "phantom" }"#).unwrap();

        let config = ShellConfig::load(&path).unwrap();
        assert_eq!(config.custom_scheme, "chessdao");
        assert_eq!(config.redirect_link(), "chessdao://phantom");
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");
        let config = ShellConfig {
            entry_document: "https://chessdao.app/".into(),
            ..ShellConfig::default()
        };
        config.save(&path).unwrap();
        assert_eq!(ShellConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ShellConfig::load(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ShellError::Io(_)));
    }
}
