//! Test utilities for Skylark orchestrator tests.
//!
//! Provides a scripted driver and request helpers so fallback behavior
//! can be exercised without real API calls.

use skylark_core::GenerationRequest;

pub mod mock_driver;

#[allow(unused_imports)]
pub use mock_driver::{ScriptedDriver, ScriptedOutcome};

/// Helper to create a request shaped like a formatted trending post.
pub fn trending_post_request() -> GenerationRequest {
    GenerationRequest::new(
        "Title: Ferris spotted at the beach\n\
         Subreddit: r/rust\n\
         Score: 1024\n\
         Author: u/crab_fan\n\
         URL: https://reddit.com/r/rust/comments/abc123/ferris/\n",
        "https://reddit.com/r/rust/comments/abc123/ferris/",
    )
}
