use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool, PooledConnection};
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tracing::{info, trace, trace_span};

pub mod models;
pub mod schema;
pub mod seed;
pub mod serializer;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("./migrations");

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to create connection pool: {0}")]
    Pool(#[from] r2d2::PoolError),
    #[error("failed to run migrations: {0}")]
    Migration(String),
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

fn build_pool(
    database_url: &str,
    builder: r2d2::Builder<ConnectionManager<SqliteConnection>>,
) -> Result<DbPool, StoreError> {
    let span = trace_span!("establishing pooled connection", database_url);
    let _guard = span.enter();

    trace!("Creating manager");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);

    trace!("Creating pool");
    let pool = builder
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

pub fn establish_pool(database_url: &str, max_size: u32) -> Result<DbPool, StoreError> {
    build_pool(database_url, Pool::builder().max_size(max_size))
}

/// Single-connection pool over a private in-memory database. The connection
/// is never recycled, since closing it drops the database.
pub fn establish_in_memory_pool() -> Result<DbPool, StoreError> {
    build_pool(
        IN_MEMORY_DATABASE_URL,
        Pool::builder()
            .max_size(1)
            .max_lifetime(None)
            .idle_timeout(None),
    )
}

pub fn run_migrations(conn: &mut SqliteConnection) -> Result<(), StoreError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| StoreError::Migration(e.to_string()))?;
    for version in applied {
        info!(%version, "applied migration");
    }
    Ok(())
}
