//! Provider identity.

use serde::{Deserialize, Serialize};

/// The closed set of generation backends.
///
/// Display renders the lowercase configuration name; parsing accepts any
/// casing.
///
/// # Examples
///
/// ```
/// use skylark_core::ProviderId;
/// use std::str::FromStr;
///
/// assert_eq!(ProviderId::from_str("Groq").unwrap(), ProviderId::Groq);
/// assert_eq!(ProviderId::Cloudflare.to_string(), "cloudflare");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    derive_more::Display,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Cloudflare Workers AI
    #[display("cloudflare")]
    Cloudflare,
    /// Groq
    #[display("groq")]
    Groq,
    /// Google Gemini
    #[display("gemini")]
    Gemini,
}
