//! Database connection pool and migration management.
//!
//! This module provides utilities for:
//! - Creating a PostgreSQL connection pool without blocking startup
//! - Connecting and running migrations in the background, retrying until it works
//! - Checking connectivity for health checks

use std::time::Duration;

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// The pool is lazy: no connection is opened until the first query, so the
/// HTTP listener can bind even when the database is unreachable.
///
/// # Errors
///
/// Returns an error if the connection string cannot be parsed.
pub fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url)
}

/// Open the first connection and bring the schema up to date.
pub async fn connect(pool: &DbPool) -> anyhow::Result<()> {
    ping(pool).await?;
    run_migrations(pool).await?;
    Ok(())
}

/// Delay schedule between connection attempts: doubles after each failure, capped.
#[derive(Debug, Clone, Copy)]
pub struct Backoff {
    pub initial: Duration,
    pub max: Duration,
}

impl Default for Backoff {
    fn default() -> Self {
        Self {
            initial: Duration::from_secs(1),
            max: Duration::from_secs(30),
        }
    }
}

impl Backoff {
    pub fn next_delay(&self, current: Duration) -> Duration {
        (current * 2).min(self.max)
    }
}

/// Run `attempt` until it succeeds, sleeping between failures.
///
/// Every failure is logged with the attempt number and the next delay.
pub async fn retry_with_backoff<F, Fut, T, E>(mut attempt: F, backoff: Backoff) -> T
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let mut delay = backoff.initial;
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        match attempt().await {
            Ok(value) => return value,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    attempt = attempts,
                    retry_in_ms = delay.as_millis() as u64,
                    "Database connection error"
                );
                tokio::time::sleep(delay).await;
                delay = backoff.next_delay(delay);
            }
        }
    }
}

/// Connect in the background and log the outcome.
///
/// Failures are logged and retried with backoff until the database is
/// reachable and migrated. The server keeps serving meanwhile and
/// store-backed requests fail individually.
pub fn spawn_connect(pool: DbPool) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        retry_with_backoff(|| connect(&pool), Backoff::default()).await;
        tracing::info!("Database connected");
    })
}

/// Run database migrations from the `migrations/` directory.
///
/// Migrations are tracked in the `_sqlx_migrations` table, so each one runs only once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    // The macro embeds ./migrations at compile time
    sqlx::migrate!("./migrations").run(pool).await
}

/// Execute a trivial query to verify connectivity.
pub async fn ping(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
