//! SQLite persistence of posted threads for the Skylark reply bot.
//!
//! This crate keeps the ledger the reply pipeline consults before picking a
//! trending post: once a reply is published, the thread id lands here and
//! later runs skip it. Backed by Diesel over a pooled SQLite connection,
//! with migrations embedded in the binary.
//!
//! # Example
//!
//! ```rust,no_run
//! use skylark_store::{NewPostedThread, PostedThreadStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PostedThreadStore::new("skylark.db")?;
//!
//! if !store.is_already_posted("t3_abc123").await? {
//!     store.record(NewPostedThread::new("t3_abc123", 512)).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod models;
pub mod schema;
mod store;

pub use models::{NewPostedThread, PostedThread};
pub use store::{
    PostedThreadStore, SqlitePool, already_posted, delete_older_than, insert_posted_thread,
    posted_subset, run_migrations,
};
