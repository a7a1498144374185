use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::paths;

/// Built-in default source language.
pub const DEFAULT_SOURCE_LANG: &str = "EN";

/// Built-in default target language.
pub const DEFAULT_TARGET_LANG: &str = "ZH";

/// Default settings in the `[dlt]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DltConfig {
    /// Default source language code.
    pub source_lang: Option<String>,
    /// Default target language code.
    pub target_lang: Option<String>,
    /// DeepL auth key for the free-tier API.
    pub auth_key: Option<String>,
    /// Proxy API base URL. When set, the proxy backend is used.
    pub proxy_api: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/dlt/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub dlt: DltConfig,
}

/// CLI overrides for configuration resolution.
///
/// Values given on the command line take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub source_lang: Option<String>,
    pub target_lang: Option<String>,
    pub auth_key: Option<String>,
    pub proxy_api: Option<String>,
}

/// Immutable run configuration, constructed once at startup and passed by
/// reference into the translation layer.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source_lang: String,
    pub target_lang: String,
    /// Empty when no key is configured; the free-tier API rejects the
    /// request with its own error in that case.
    pub auth_key: String,
    /// `None` selects the free-tier backend.
    pub proxy_api: Option<String>,
}

/// Returns the path of the configuration file.
pub fn config_file_path() -> PathBuf {
    paths::config_dir().join("config.toml")
}

/// Loads the configuration file, returning defaults when it does not exist.
pub fn load_config_file() -> Result<ConfigFile> {
    let path = config_file_path();
    if !path.exists() {
        return Ok(ConfigFile::default());
    }

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&raw).with_context(|| format!("invalid config file: {}", path.display()))
}

/// Merges CLI options over config file values over built-in defaults.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> ResolvedConfig {
    let file = &config_file.dlt;

    ResolvedConfig {
        source_lang: options
            .source_lang
            .clone()
            .or_else(|| file.source_lang.clone())
            .unwrap_or_else(|| DEFAULT_SOURCE_LANG.to_string()),
        target_lang: options
            .target_lang
            .clone()
            .or_else(|| file.target_lang.clone())
            .unwrap_or_else(|| DEFAULT_TARGET_LANG.to_string()),
        auth_key: options
            .auth_key
            .clone()
            .or_else(|| file.auth_key.clone())
            .unwrap_or_default(),
        proxy_api: options
            .proxy_api
            .clone()
            .or_else(|| file.proxy_api.clone())
            .filter(|url| !url.is_empty()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults_when_nothing_is_set() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default());

        assert_eq!(resolved.source_lang, "EN");
        assert_eq!(resolved.target_lang, "ZH");
        assert_eq!(resolved.auth_key, "");
        assert_eq!(resolved.proxy_api, None);
    }

    #[test]
    fn test_empty_proxy_url_selects_free_backend() {
        let options = ResolveOptions {
            proxy_api: Some(String::new()),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &ConfigFile::default());
        assert_eq!(resolved.proxy_api, None);
    }

    #[test]
    fn test_config_file_parses_dlt_section() {
        let file: ConfigFile = toml::from_str(
            r#"
            [dlt]
            source_lang = "DE"
            target_lang = "FR"
            auth_key = "secret"
            proxy_api = "http://127.0.0.1/v2/translate"
            "#,
        )
        .unwrap();

        assert_eq!(file.dlt.source_lang.as_deref(), Some("DE"));
        assert_eq!(file.dlt.target_lang.as_deref(), Some("FR"));
        assert_eq!(file.dlt.auth_key.as_deref(), Some("secret"));
        assert_eq!(
            file.dlt.proxy_api.as_deref(),
            Some("http://127.0.0.1/v2/translate")
        );
    }

    #[test]
    fn test_empty_config_file_parses_to_defaults() {
        let file: ConfigFile = toml::from_str("").unwrap();
        assert!(file.dlt.source_lang.is_none());
        assert!(file.dlt.proxy_api.is_none());
    }
}
