//! Loading and saving config.json
//!
//! [`ConfigStore`] reads the file into an existing [`ConfigModel`] by merging
//! onto it, and writes the whole model back out as pretty JSON. Both
//! operations return explicit results; deciding whether a failure matters is
//! left to the caller (see [`ConfigSession`](crate::config::ConfigSession)).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::model::ConfigModel;
use crate::config::patch::{ConfigPatch, RejectedField};
use crate::constants;

/// Result of a load that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No config file; the model was left untouched
    NotFound,
    /// The file was applied. Fields in `rejected` kept their prior value.
    Merged { rejected: Vec<RejectedField> },
}

/// Persistence for a single config file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location (see [`default_path`](Self::default_path))
    pub fn at_default_location() -> Self {
        Self::new(Self::default_path())
    }

    /// Store for `config.json` inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(constants::config::FILENAME))
    }

    /// `$QUEST_LAUNCHER_CONFIG_DIR/config.json` if the variable is set,
    /// otherwise `<data dir>/quest-app-launcher/config.json`
    pub fn default_path() -> PathBuf {
        let override_dir = std::env::var_os(constants::config::DIR_ENV_VAR)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        resolve_path(override_dir, dirs::data_dir())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Merge the config file onto `model`.
    ///
    /// The document is parsed completely before anything is applied, so a
    /// parse error leaves `model` exactly as it was.
    pub fn load(&self, model: &mut ConfigModel) -> ConfigResult<LoadOutcome> {
        let contents = match fs::read(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("Did not find config file: {:?}", self.path);
                return Ok(LoadOutcome::NotFound);
            }
            Err(source) => {
                warn!("Failed to read config file {:?}: {}", self.path, source);
                return Err(ConfigError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        info!("Found config file: {:?}", self.path);

        let patch = ConfigPatch::from_slice(&contents).map_err(|source| {
            warn!("Failed to parse config file {:?}: {}", self.path, source);
            ConfigError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        let rejected = patch.apply(model);
        for field in &rejected {
            warn!(field = field.field, "Ignoring config value: {}", field.reason);
        }

        Ok(LoadOutcome::Merged { rejected })
    }

    /// Write `model` to the config file, replacing its previous contents.
    pub fn save(&self, model: &ConfigModel) -> ConfigResult<()> {
        info!("Saving config file: {:?}", self.path);

        let write_err = |source: std::io::Error| {
            warn!("Failed to save config file {:?}: {}", self.path, source);
            ConfigError::Write {
                path: self.path.clone(),
                source,
            }
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json_string = model.to_json_pretty().map_err(ConfigError::Serialize)?;
        fs::write(&self.path, json_string).map_err(write_err)?;

        Ok(())
    }
}

fn resolve_path(override_dir: Option<PathBuf>, data_dir: Option<PathBuf>) -> PathBuf {
    let mut path = match override_dir {
        Some(dir) => dir,
        None => {
            let mut dir = data_dir.unwrap_or_else(|| PathBuf::from("."));
            dir.push(constants::config::APP_DIR);
            dir
        }
    };
    path.push(constants::config::FILENAME);
    path
}
