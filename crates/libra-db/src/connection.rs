use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::schema;

/// Kept low, sqlite serializes writers anyway.
const MAX_CONNECTIONS: u32 = 5;

/// A cloneable handle to the database
#[derive(Debug, Clone)]
pub struct Connection {
    pool: SqlitePool,
}

impl Connection {
    /// Open a connection to the database, creating the file if needed
    pub async fn open(filename: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(filename)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

pub struct TestHandle {
    path: PathBuf,
}

impl Drop for TestHandle {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

/// Open a new test database connection.
/// The database will be created on each open and removed
/// when the handle is dropped.
pub async fn open_test() -> (TestHandle, Connection) {
    let path = std::env::temp_dir().join(format!("libra_test_{}.sqlite3", rand::random::<u64>()));
    let handle = TestHandle { path: path.clone() };
    let conn = Connection::open(&path).await.unwrap();

    // Install the schema
    schema::install(&conn).await.unwrap();

    (handle, conn)
}
