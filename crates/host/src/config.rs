use directories::BaseDirs;
use history_core::SkipRules;
use serde::Deserialize;
use std::{env, fs, path::{Path, PathBuf}};
use tracing::warn;
use url::Url;

use crate::error::{HostError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8081/";
pub const DEFAULT_BACK_SKIP: &str = "*->edit,*->new";

#[derive(Clone, Debug, Default, Deserialize)]
pub struct HistoryFileConfig {
    pub base_url: Option<String>,
    pub back_skip: Option<String>,
    pub recent_limit: Option<usize>,
    pub skip_duplicate_descriptions: Option<bool>,
    pub default_package: Option<String>,
}

#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub base_url: Url,
    pub back_skip: SkipRules,
    pub recent_limit: usize,
    pub skip_duplicate_descriptions: bool,
    pub default_package: String,
}

impl HistoryConfig {
    pub fn defaults() -> Result<Self> {
        Ok(Self {
            base_url: Url::parse(DEFAULT_BASE_URL)?,
            back_skip: SkipRules::lenient(DEFAULT_BACK_SKIP),
            recent_limit: 10,
            skip_duplicate_descriptions: true,
            default_package: "Acme.Shop".to_string(),
        })
    }

    /// Defaults, then `config.toml` if present, then environment overrides.
    pub fn from_env_and_file() -> anyhow::Result<Self> {
        Self::load(Self::config_path().as_deref(), |key| env::var(key).ok())
    }

    /// A config file that cannot be read, parsed or applied is logged and
    /// skipped as a whole. Bad environment overrides are errors.
    pub fn load(
        path: Option<&Path>,
        var: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let mut cfg = Self::defaults()?;

        if let Some(path) = path.filter(|p| p.exists()) {
            let merged = Self::read_file(path).and_then(|file_cfg| {
                let mut next = cfg.clone();
                next.merge(file_cfg)?;
                Ok(next)
            });
            match merged {
                Ok(next) => cfg = next,
                Err(e) => warn!(target: "host", "ignoring {}: {}", path.display(), e),
            }
        }

        if let Some(u) = var("ACTION_HISTORY_BASE_URL") {
            cfg.base_url = Url::parse(&u)
                .map_err(|e| anyhow::anyhow!("ACTION_HISTORY_BASE_URL: {}", e))?;
        }
        if let Some(s) = var("ACTION_HISTORY_BACK_SKIP") {
            cfg.back_skip = SkipRules::parse(&s)
                .map_err(|e| anyhow::anyhow!("ACTION_HISTORY_BACK_SKIP: {}", e))?;
        }

        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let mut cfg = Self::defaults()?;
        cfg.merge(Self::read_file(path)?)?;
        Ok(cfg)
    }

    pub fn from_toml_str(s: &str) -> Result<Self> {
        let file_cfg = toml::from_str::<HistoryFileConfig>(s)
            .map_err(|e| HostError::Config(e.to_string()))?;
        let mut cfg = Self::defaults()?;
        cfg.merge(file_cfg)?;
        Ok(cfg)
    }

    fn read_file(path: &Path) -> Result<HistoryFileConfig> {
        let data = fs::read_to_string(path)
            .map_err(|e| HostError::Config(format!("read {}: {}", path.display(), e)))?;
        toml::from_str(&data)
            .map_err(|e| HostError::Config(format!("parse {}: {}", path.display(), e)))
    }

    fn merge(&mut self, file_cfg: HistoryFileConfig) -> Result<()> {
        if let Some(u) = file_cfg.base_url {
            self.base_url = Url::parse(&u)?;
        }
        if let Some(s) = file_cfg.back_skip {
            self.back_skip = SkipRules::parse(&s)?;
        }
        if let Some(n) = file_cfg.recent_limit {
            if n == 0 {
                return Err(HostError::Config("recent_limit must be positive".into()));
            }
            self.recent_limit = n;
        }
        if let Some(d) = file_cfg.skip_duplicate_descriptions {
            self.skip_duplicate_descriptions = d;
        }
        if let Some(p) = file_cfg.default_package {
            self.default_package = p;
        }
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        let base = BaseDirs::new()?;
        let p = if cfg!(target_os = "windows") {
            base.home_dir().join(".action-history").join("config.toml")
        } else {
            base.config_dir().join("action-history").join("config.toml")
        };
        Some(p)
    }
}
