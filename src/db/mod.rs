use anyhow::{Context, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use std::path::Path;

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Schema steps, applied in order and recorded in `schema_migrations`.
const MIGRATIONS: &[(i32, &str)] = &[(
    1,
    "CREATE TABLE IF NOT EXISTS settings (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at TEXT DEFAULT CURRENT_TIMESTAMP
    );",
)];

/// Pooled SQLite handle backing the settings store.
#[derive(Clone)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn open(path: &str) -> Result<Self> {
        let path = Path::new(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create storage directory {}", parent.display())
            })?;
        }

        let pool = Pool::builder()
            .max_size(4)
            .build(SqliteConnectionManager::file(path))
            .with_context(|| format!("Failed to open settings database {}", path.display()))?;
        pool.get()?.execute_batch("PRAGMA journal_mode=WAL;")?;

        Ok(Self { pool })
    }

    /// A private in-memory database.
    ///
    /// The data lives in a single connection, so the pool holds exactly one
    /// and never retires it.
    pub fn open_memory() -> Result<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .min_idle(Some(1))
            .max_lifetime(None)
            .idle_timeout(None)
            .build(SqliteConnectionManager::memory())?;
        Ok(Self { pool })
    }

    pub fn get(&self) -> Result<DbConnection> {
        Ok(self.pool.get()?)
    }

    pub fn migrate(&self) -> Result<()> {
        let mut conn = self.get()?;
        apply_migrations(&mut conn)
    }

    /// Highest migration applied so far, 0 on a fresh database.
    pub fn schema_version(&self) -> Result<i32> {
        let conn = self.get()?;
        current_version(&conn)
    }
}

fn current_version(conn: &Connection) -> Result<i32> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'schema_migrations')",
        [],
        |row| row.get(0),
    )?;
    if !exists {
        return Ok(0);
    }
    let version = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_migrations",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

fn apply_migrations(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version INTEGER PRIMARY KEY,
            applied_at TEXT DEFAULT CURRENT_TIMESTAMP
        );",
    )?;

    let current = current_version(conn)?;
    for &(version, sql) in MIGRATIONS.iter().filter(|(v, _)| *v > current) {
        tracing::info!("Applying settings migration {}", version);
        let tx = conn.transaction()?;
        tx.execute_batch(sql)
            .with_context(|| format!("Migration {} failed", version))?;
        tx.execute("INSERT INTO schema_migrations (version) VALUES (?1)", [version])?;
        tx.commit()?;
    }

    Ok(())
}
