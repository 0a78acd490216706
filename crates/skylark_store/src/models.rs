//! Diesel models for the posted-thread ledger.

use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::schema::posted_threads;

/// A thread the bot has already replied to.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable, Identifiable)]
#[diesel(table_name = posted_threads)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct PostedThread {
    /// Row id.
    pub id: i32,
    /// Reddit post id, unique per thread.
    pub reddit_id: String,
    /// Post score at the time the reply was published.
    pub score: i64,
    /// When the reply was published.
    pub posted_at: NaiveDateTime,
}

/// New posted-thread record for insertion.
///
/// `posted_at` is filled in by the database.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = posted_threads)]
pub struct NewPostedThread {
    /// Reddit post id.
    pub reddit_id: String,
    /// Post score at the time the reply was published.
    pub score: i64,
}

impl NewPostedThread {
    /// Create a record for a freshly posted thread.
    pub fn new(reddit_id: impl Into<String>, score: i64) -> Self {
        Self {
            reddit_id: reddit_id.into(),
            score,
        }
    }
}
