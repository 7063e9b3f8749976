//! Helpers for integration tests.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use pushkind_messages::db::{DbPool, establish_connection_pool, run_migrations};

/// Migrated SQLite database living in a temporary directory.
///
/// The directory, including the `-wal` and `-shm` files, is removed on drop.
pub struct TestDb {
    path: PathBuf,
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create a temporary directory.");
        let path = dir.path().join(filename);
        let url = path.to_str().expect("Temporary path is not valid UTF-8.");

        let pool = establish_connection_pool(url).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");

        TestDb {
            path,
            pool,
            _dir: dir,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
