//! Database Connection and Setup
//!
//! Manages the SQLite connection and the schema.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::{DomainError, DomainResult};

/// Schema version written to `PRAGMA user_version`
pub const SCHEMA_VERSION: i32 = 1;

/// The single connection, shared by every repository
pub type SharedConnection = Arc<Mutex<Connection>>;

enum DbStatus {
    Pending,
    Ready(SharedConnection),
    Failed(String),
}

/// Database state wrapper
///
/// Created empty when the app starts and filled once the database is open.
/// Cheap to clone; all clones see the same connection.
#[derive(Clone)]
pub struct DbState {
    status: Arc<RwLock<DbStatus>>,
}

impl Default for DbState {
    fn default() -> Self {
        Self::new()
    }
}

impl DbState {
    pub fn new() -> Self {
        Self {
            status: Arc::new(RwLock::new(DbStatus::Pending)),
        }
    }

    /// Get the connection, failing if initialization has not completed
    pub async fn connection(&self) -> DomainResult<SharedConnection> {
        match &*self.status.read().await {
            DbStatus::Ready(conn) => Ok(conn.clone()),
            DbStatus::Pending => Err(DomainError::NotInitialized),
            DbStatus::Failed(msg) => Err(DomainError::Initialization(msg.clone())),
        }
    }

    pub async fn is_ready(&self) -> bool {
        matches!(&*self.status.read().await, DbStatus::Ready(_))
    }

    /// Open the database file at `path` and run the schema setup.
    ///
    /// On failure the state remembers the error so later calls report it.
    pub async fn open(&self, path: &Path) -> DomainResult<()> {
        let opened = Connection::open(path)
            .map_err(|e| DomainError::Initialization(format!("Failed to open {}: {}", path.display(), e)));
        self.install(opened).await
    }

    /// Open a private in-memory database (tests and previews)
    pub async fn open_in_memory(&self) -> DomainResult<()> {
        let opened = Connection::open_in_memory()
            .map_err(|e| DomainError::Initialization(format!("Failed to open in-memory db: {}", e)));
        self.install(opened).await
    }

    async fn install(&self, opened: DomainResult<Connection>) -> DomainResult<()> {
        let result = opened.and_then(|conn| {
            run_migrations(&conn)?;
            Ok(conn)
        });

        let mut status = self.status.write().await;
        match result {
            Ok(conn) => {
                log::info!("Database initialized successfully");
                *status = DbStatus::Ready(Arc::new(Mutex::new(conn)));
                Ok(())
            }
            Err(e) => {
                log::error!("Database error: {}", e);
                *status = DbStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    /// Run `f` against the connection, mapping SQLite errors to storage failures
    pub async fn with_connection<R, F>(&self, f: F) -> DomainResult<R>
    where
        F: FnOnce(&Connection) -> rusqlite::Result<R> + Send,
        R: Send,
    {
        let conn = self.connection().await?;
        let guard = conn.lock().await;
        f(&*guard).map_err(|e| DomainError::Storage(e.to_string()))
    }
}

/// Initialize database with path
pub async fn init_db(db_path: &Path) -> DomainResult<DbState> {
    let state = DbState::new();
    state.open(db_path).await?;
    Ok(state)
}

/// Create both collections if they are absent
fn run_migrations(conn: &Connection) -> DomainResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS novedades (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            descripcion TEXT NOT NULL,
            responsable TEXT NOT NULL,
            hora_inicio TEXT NOT NULL DEFAULT '',
            prioridad TEXT NOT NULL DEFAULT 'Media',
            observaciones TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL,
            completed INTEGER NOT NULL DEFAULT 0,
            completion_date TEXT
        );
        CREATE TABLE IF NOT EXISTS consignas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            titulo TEXT NOT NULL,
            asignado TEXT NOT NULL,
            descripcion TEXT NOT NULL DEFAULT '',
            completed INTEGER NOT NULL DEFAULT 0,
            completion_date TEXT
        );",
    )
    .map_err(|e| DomainError::Initialization(e.to_string()))?;

    conn.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))
        .map_err(|e| DomainError::Initialization(e.to_string()))?;

    Ok(())
}
