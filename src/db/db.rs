use super::migrations::init_with_migrations;
use super::StoreResult;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tasksync.db";

pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the default database file in the application data directory.
    pub fn new() -> StoreResult<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        Self::open(db_file_path)
    }

    /// Opens the database file named by the configuration.
    pub fn from_config(config: &Config) -> StoreResult<Db> {
        let db_file_path = DataStorage::new().get_path(&config.database_file)?;
        Self::open(db_file_path)
    }

    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    pub fn in_memory() -> StoreResult<Db> {
        let mut conn = Connection::open_in_memory()?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }
}
