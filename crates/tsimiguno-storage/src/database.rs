//! Database connection and key-value operations

use chrono::Utc;
use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension};
use std::path::Path;
use std::sync::Arc;

use crate::migrations::run_migrations;
use crate::Result;

pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open(path)?;

        // WAL mode for better concurrent performance
        let _: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;

        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn with_connection<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Connection) -> Result<T>,
    {
        let conn = self.conn.lock();
        f(&conn)
    }

    /// Read a value from the store. Absent keys are `None`, not an error.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        self.with_connection(|conn| {
            let value = conn
                .query_row("SELECT value FROM store WHERE key = ?1", [key], |row| {
                    row.get(0)
                })
                .optional()?;
            Ok(value)
        })
    }

    /// Write a value, replacing any previous value under the same key.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let updated_at = Utc::now().to_rfc3339();
        self.with_connection(|conn| {
            conn.execute(
                "INSERT OR REPLACE INTO store (key, value, updated_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![key, value, updated_at],
            )?;
            Ok(())
        })?;

        Ok(())
    }

    /// Remove a key. Removing an absent key is a no-op.
    pub fn delete(&self, key: &str) -> Result<()> {
        self.with_connection(|conn| {
            conn.execute("DELETE FROM store WHERE key = ?1", [key])?;
            Ok(())
        })?;

        Ok(())
    }
}

impl Clone for Database {
    fn clone(&self) -> Self {
        Self {
            conn: Arc::clone(&self.conn),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory() {
        let db = Database::open_in_memory().unwrap();
        db.with_connection(|conn| {
            let count: i32 = conn.query_row("SELECT COUNT(*) FROM store", [], |row| row.get(0))?;
            assert_eq!(count, 0);
            Ok(())
        })
        .unwrap();
    }

    #[test]
    fn test_put_get_roundtrip() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.get("user").unwrap(), None);

        db.put("user", r#"{"credential":"tok"}"#).unwrap();
        assert_eq!(
            db.get("user").unwrap().as_deref(),
            Some(r#"{"credential":"tok"}"#)
        );
    }

    #[test]
    fn test_put_overwrites() {
        let db = Database::open_in_memory().unwrap();

        db.put("user", "first").unwrap();
        db.put("user", "second").unwrap();

        assert_eq!(db.get("user").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_delete() {
        let db = Database::open_in_memory().unwrap();

        db.put("user", "value").unwrap();
        db.delete("user").unwrap();
        assert_eq!(db.get("user").unwrap(), None);

        // Deleting again is a no-op
        db.delete("user").unwrap();
    }
}
