use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::fetch::FetchOptions;
use crate::ingest::go::GO_XREFS_URL;

/// Global configuration loaded from `~/.config/prefixmaps/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrefixmapsConfig {
    /// Where the GO db-xrefs registry is fetched from.
    pub go_source_url: String,
    /// Seconds allowed for establishing the connection.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, body included.
    pub timeout_secs: u64,
    /// Maximum redirects followed before giving up.
    #[serde(default = "default_max_redirections")]
    pub max_redirections: u32,
    /// Optional `User-Agent`; if missing, `prefixmaps/<version>` is sent.
    #[serde(default)]
    pub user_agent: Option<String>,
}

fn default_max_redirections() -> u32 {
    10
}

impl Default for PrefixmapsConfig {
    fn default() -> Self {
        Self {
            go_source_url: GO_XREFS_URL.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 60,
            max_redirections: default_max_redirections(),
            user_agent: None,
        }
    }
}

impl PrefixmapsConfig {
    pub fn validate(&self) -> Result<()> {
        validate_source_url(&self.go_source_url).context("go_source_url")?;
        if self.timeout_secs == 0 {
            anyhow::bail!("timeout_secs must be greater than zero");
        }
        Ok(())
    }

    pub fn fetch_options(&self) -> FetchOptions {
        let mut opts = FetchOptions::with_timeouts(self.connect_timeout_secs, self.timeout_secs);
        opts.max_redirections = self.max_redirections;
        if let Some(ua) = &self.user_agent {
            opts.user_agent = ua.clone();
        }
        opts
    }
}

/// Registry URLs must be http or https; curl would happily read file:// too.
pub fn validate_source_url(source: &str) -> Result<()> {
    let parsed = url::Url::parse(source).with_context(|| format!("invalid URL {:?}", source))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => anyhow::bail!("registry URL must be http or https, got {}", other),
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("prefixmaps")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<PrefixmapsConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = PrefixmapsConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: PrefixmapsConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = PrefixmapsConfig::default();
        assert_eq!(cfg.go_source_url, GO_XREFS_URL);
        assert_eq!(cfg.connect_timeout_secs, 15);
        assert_eq!(cfg.timeout_secs, 60);
        assert_eq!(cfg.max_redirections, 10);
        assert!(cfg.user_agent.is_none());
        cfg.validate().unwrap();
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = PrefixmapsConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: PrefixmapsConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.go_source_url, cfg.go_source_url);
        assert_eq!(parsed.timeout_secs, cfg.timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            go_source_url = "http://127.0.0.1:8080/db-xrefs.yaml"
            connect_timeout_secs = 2
            timeout_secs = 5
            user_agent = "test-agent"
        "#;
        let cfg: PrefixmapsConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.connect_timeout_secs, 2);
        assert_eq!(cfg.max_redirections, 10);
        let opts = cfg.fetch_options();
        assert_eq!(opts.user_agent, "test-agent");
        assert_eq!(opts.timeout.as_secs(), 5);
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_non_http_scheme() {
        let cfg = PrefixmapsConfig {
            go_source_url: "file:///etc/passwd".to_string(),
            ..PrefixmapsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_source_url_schemes() {
        validate_source_url("https://example.org/db-xrefs.yaml").unwrap();
        validate_source_url("http://127.0.0.1:8080/x").unwrap();
        assert!(validate_source_url("file:///etc/passwd").is_err());
        assert!(validate_source_url("ftp://example.org/x").is_err());
        assert!(validate_source_url("not a url").is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let cfg = PrefixmapsConfig {
            timeout_secs: 0,
            ..PrefixmapsConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
