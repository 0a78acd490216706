//! Posted-thread store over a pooled SQLite connection.

use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use skylark_error::{StoreError, StoreErrorKind, StoreResult};
use tracing::info;

use crate::models::NewPostedThread;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Connection pool alias for the SQLite store.
pub type SqlitePool = Pool<ConnectionManager<SqliteConnection>>;

/// Run pending migrations.
pub fn run_migrations(conn: &mut SqliteConnection) -> StoreResult<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map(|_| ())
        .map_err(|e| StoreError::new(StoreErrorKind::Migration(e.to_string())))
}

/// True when `target` already has a row in `posted_threads`.
pub fn already_posted(conn: &mut SqliteConnection, target: &str) -> StoreResult<bool> {
    use crate::schema::posted_threads::dsl::*;

    let matches: i64 = posted_threads
        .filter(reddit_id.eq(target))
        .count()
        .get_result(conn)?;
    Ok(matches > 0)
}

/// Return which of `ids` already have rows.
pub fn posted_subset(conn: &mut SqliteConnection, ids: &[String]) -> StoreResult<Vec<String>> {
    use crate::schema::posted_threads::dsl::*;

    posted_threads
        .filter(reddit_id.eq_any(ids))
        .select(reddit_id)
        .load(conn)
        .map_err(Into::into)
}

/// Insert a posted-thread record.
///
/// The unique constraint on `reddit_id` rejects a second insert for the
/// same thread.
pub fn insert_posted_thread(
    conn: &mut SqliteConnection,
    thread: &NewPostedThread,
) -> StoreResult<()> {
    use crate::schema::posted_threads::dsl::*;

    diesel::insert_into(posted_threads)
        .values(thread)
        .execute(conn)?;
    Ok(())
}

/// Delete records older than `days`, returning the number removed.
pub fn delete_older_than(conn: &mut SqliteConnection, days: i64) -> StoreResult<usize> {
    use crate::schema::posted_threads::dsl::*;

    let cutoff = Utc::now().naive_utc() - chrono::Duration::days(days);
    diesel::delete(posted_threads.filter(posted_at.lt(cutoff)))
        .execute(conn)
        .map_err(Into::into)
}

/// Database-backed ledger of threads the bot has replied to.
#[derive(Clone)]
pub struct PostedThreadStore {
    pool: SqlitePool,
}

impl PostedThreadStore {
    /// Open (or create) the store at `database_url` and run pending
    /// migrations.
    ///
    /// `:memory:` is supported for tests. An in-memory database is private
    /// to its connection, so the pool is capped at one connection in that
    /// case.
    pub fn new(database_url: &str) -> StoreResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_url);
        let mut builder = Pool::builder();
        if database_url.contains(":memory:") {
            builder = builder.max_size(1);
        }
        let pool = builder.build(manager)?;

        let mut conn = pool.get()?;
        run_migrations(&mut conn)?;
        drop(conn);

        info!(path = %database_url, "posted-thread store ready");
        Ok(Self { pool })
    }

    /// True when `reddit_id` has already been replied to.
    pub async fn is_already_posted(&self, reddit_id: &str) -> StoreResult<bool> {
        let reddit_id = reddit_id.to_string();
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            already_posted(&mut conn, &reddit_id)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?
    }

    /// Of `ids`, return those that already have a record.
    ///
    /// One query for the whole candidate window instead of a lookup per
    /// post.
    pub async fn already_posted_among(&self, ids: Vec<String>) -> StoreResult<Vec<String>> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            posted_subset(&mut conn, &ids)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?
    }

    /// Record a thread immediately after publishing a reply to it.
    pub async fn record(&self, thread: NewPostedThread) -> StoreResult<()> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            insert_posted_thread(&mut conn, &thread)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?
    }

    /// Delete records older than `days`, returning the number removed.
    pub async fn cleanup_older_than(&self, days: i64) -> StoreResult<usize> {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            delete_older_than(&mut conn, days)
        })
        .await
        .map_err(|e| StoreError::new(StoreErrorKind::Query(e.to_string())))?
    }
}
