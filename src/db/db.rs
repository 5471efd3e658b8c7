use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::Path;

pub const DB_FILE_NAME: &str = "tarefas.db";

/// A single long-lived SQLite connection.
///
/// The connection is opened once at startup and handed to the store;
/// consumers never open their own.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the configured location, falling back to the
    /// platform data directory.
    pub fn new() -> Result<Db> {
        let db_file_path = match Config::read()?.db_file {
            Some(path) => path,
            None => DataStorage::new().get_path(DB_FILE_NAME)?,
        };
        Self::open(db_file_path)
    }

    /// Opens the database at an explicit path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let conn = Connection::open(path)?;
        Ok(Db { conn })
    }
}
