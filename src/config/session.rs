//! Owned config handle for the launcher
//!
//! Created once at startup, then passed by reference to whatever needs the
//! preferences. Changes go through [`ConfigSession::update`] so that every
//! change is written back.

use tracing::{debug, info, warn};

use crate::config::error::ConfigResult;
use crate::config::model::ConfigModel;
use crate::config::store::{ConfigStore, LoadOutcome};

#[derive(Debug)]
pub struct ConfigSession {
    store: ConfigStore,
    model: ConfigModel,
}

impl ConfigSession {
    /// Start from defaults and merge the config file on top.
    ///
    /// Load failures are logged and the defaults stand; this never fails.
    pub fn initialize(store: ConfigStore) -> Self {
        let mut model = ConfigModel::default();
        match store.load(&mut model) {
            Ok(LoadOutcome::NotFound) => info!("Using default config"),
            Ok(LoadOutcome::Merged { rejected }) if rejected.is_empty() => {
                info!("Loaded config from {:?}", store.path())
            }
            Ok(LoadOutcome::Merged { rejected }) => info!(
                "Loaded config from {:?} ({} value(s) ignored)",
                store.path(),
                rejected.len()
            ),
            Err(e) => warn!("Continuing with default config: {}", e),
        }
        Self { store, model }
    }

    pub fn model(&self) -> &ConfigModel {
        &self.model
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Apply `change` and persist if the model actually changed.
    ///
    /// Returns whether anything was written. On a write error the in-memory
    /// change is kept.
    pub fn update<F>(&mut self, change: F) -> ConfigResult<bool>
    where
        F: FnOnce(&mut ConfigModel),
    {
        let before = self.model.clone();
        change(&mut self.model);
        if self.model == before {
            debug!("Config unchanged, skipping save");
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Write the current model to disk
    pub fn persist(&self) -> ConfigResult<()> {
        self.store.save(&self.model)
    }

    /// Merge the file onto the current in-memory state again
    pub fn reload(&mut self) -> ConfigResult<LoadOutcome> {
        self.store.load(&mut self.model)
    }

    /// Put every field back to its default and persist
    pub fn reset(&mut self) -> ConfigResult<()> {
        self.model = ConfigModel::default();
        self.persist()
    }
}
