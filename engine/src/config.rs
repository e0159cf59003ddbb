use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

use cofactor_types::{ConsistencyPolicy, FormSettings, MAX_RESIDUE_LEN, ui::UiOptions};

/// Environment override for `[form] consistency`.
pub const CONSISTENCY_ENV_VAR: &str = "COFACTOR_CONSISTENCY";

pub const DEFAULT_SAMPLE_ARGUMENTS: u32 = 3;

#[derive(Debug, Default, Deserialize)]
pub struct CofactorConfig {
    pub app: Option<AppConfig>,
    pub form: Option<FormConfig>,
    pub sample: Option<SampleConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &PathBuf {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for the field indicators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct FormConfig {
    /// Maximum residue length. Clamped to 1..=16.
    pub max_residue_len: Option<usize>,
    /// `"both"` (default) or `"left-only"`.
    pub consistency: Option<ConsistencyPolicy>,
    /// Hold requests whose argument number exceeds the zero residue length. Default: true.
    pub enforce_index_bound: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SampleConfig {
    /// Number of arguments of generated sample functions. Default: 3.
    pub arguments: Option<u32>,
}

impl CofactorConfig {
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn form_settings(&self) -> FormSettings {
        let defaults = FormSettings::default();
        let Some(form) = self.form.as_ref() else {
            return defaults;
        };
        FormSettings {
            max_residue_len: form
                .max_residue_len
                .unwrap_or(defaults.max_residue_len)
                .clamp(1, MAX_RESIDUE_LEN),
            consistency: form.consistency.unwrap_or(defaults.consistency),
            enforce_index_bound: form
                .enforce_index_bound
                .unwrap_or(defaults.enforce_index_bound),
        }
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.app
            .as_ref()
            .map(|app| UiOptions {
                ascii_only: app.ascii_only,
                high_contrast: app.high_contrast,
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn sample_arguments(&self) -> u32 {
        self.sample
            .as_ref()
            .and_then(|sample| sample.arguments)
            .unwrap_or(DEFAULT_SAMPLE_ARGUMENTS)
    }
}

/// Reads [`CONSISTENCY_ENV_VAR`]; unknown values are logged and ignored.
#[must_use]
pub fn consistency_from_env() -> Option<ConsistencyPolicy> {
    let raw = env::var(CONSISTENCY_ENV_VAR).ok()?;
    let policy = ConsistencyPolicy::parse(&raw);
    if policy.is_none() {
        tracing::warn!("Unknown consistency policy in {}: {}", CONSISTENCY_ENV_VAR, raw);
    }
    policy
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".cofactor").join("config.toml"))
}
