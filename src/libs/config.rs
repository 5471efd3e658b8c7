//! Application configuration.
//!
//! A small JSON file in the platform data directory. The only setting today
//! is an optional override for the database file location; everything else
//! falls back to defaults.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Overrides the default database file location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_file: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration file, returning defaults when it does not
    /// exist yet.
    pub fn read() -> Result<Self> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Interactively collects configuration values from the user.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();
        let db_file: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbFile.to_string())
            .default(current.db_file.map(|p| p.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        Ok(Self {
            db_file: if db_file.is_empty() { None } else { Some(PathBuf::from(db_file)) },
        })
    }

    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        fs::write(&path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
