//! Configuration for the tasksync application.
//!
//! Stored as pretty-printed JSON in `config.json` inside the data directory
//! resolved by [`DataStorage`]:
//!
//! - **Windows**: `%LOCALAPPDATA%\politecinco\tasksync\config.json`
//! - **macOS**: `~/Library/Application Support/politecinco/tasksync/config.json`
//! - **Linux**: `~/.local/share/politecinco/tasksync/config.json`
//!
//! A missing file is not an error; defaults apply.
//!
//! ```rust,no_run
//! use tasksync::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("Sessions open on the {} list", config.default_filter);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::db::db::DB_FILE_NAME;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Filter the session screen opens with.
    pub default_filter: TaskFilter,

    /// Database file name inside the data directory.
    pub database_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_filter: TaskFilter::All,
            database_file: DB_FILE_NAME.to_string(),
        }
    }
}

impl Config {
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the stored configuration. Returns `false` when there was none.
    pub fn delete_from(storage: &DataStorage) -> Result<bool> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    /// Interactive wizard starting from the stored configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let theme = ColorfulTheme::default();

        let filters = TaskFilter::ALL;
        let default_index = filters.iter().position(|f| *f == config.default_filter).unwrap_or(0);
        let selection = Select::with_theme(&theme)
            .with_prompt(Message::PromptDefaultFilter.to_string())
            .items(&filters)
            .default(default_index)
            .interact()?;
        config.default_filter = filters[selection];

        config.database_file = Input::with_theme(&theme)
            .with_prompt(Message::PromptDatabaseFile.to_string())
            .default(config.database_file)
            .interact_text()?;

        Ok(config)
    }
}
