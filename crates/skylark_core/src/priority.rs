//! Provider priority resolution.

use crate::ProviderId;
use std::str::FromStr;
use tracing::warn;

/// Attempt order used when no valid priority is configured.
pub const DEFAULT_PRIORITY: [ProviderId; 3] = [
    ProviderId::Cloudflare,
    ProviderId::Groq,
    ProviderId::Gemini,
];

/// Resolve the effective provider attempt order from configuration.
///
/// `priority` is the comma-separated list setting; `legacy` is the older
/// single-provider setting, honored only when `priority` is absent
/// entirely. Entries are trimmed and matched case-insensitively;
/// unrecognized names are dropped with a warning and duplicates collapse
/// to their first occurrence. When nothing valid remains the fixed
/// [`DEFAULT_PRIORITY`] order applies.
///
/// # Examples
///
/// ```
/// use skylark_core::{resolve, ProviderId};
///
/// let order = resolve(Some("gemini, Groq"), None);
/// assert_eq!(order, vec![ProviderId::Gemini, ProviderId::Groq]);
///
/// let order = resolve(Some(""), None);
/// assert_eq!(order, skylark_core::DEFAULT_PRIORITY.to_vec());
/// ```
pub fn resolve(priority: Option<&str>, legacy: Option<&str>) -> Vec<ProviderId> {
    if let Some(raw) = priority {
        let parsed = parse_list(raw);
        if parsed.is_empty() {
            warn!(
                list = raw,
                "no valid providers in priority list, using default order"
            );
            return DEFAULT_PRIORITY.to_vec();
        }
        return parsed;
    }
    if let Some(raw) = legacy {
        return match ProviderId::from_str(raw.trim()) {
            Ok(provider) => vec![provider],
            Err(_) => {
                warn!(provider = raw, "unrecognized provider, using default order");
                DEFAULT_PRIORITY.to_vec()
            }
        };
    }
    DEFAULT_PRIORITY.to_vec()
}

fn parse_list(raw: &str) -> Vec<ProviderId> {
    let mut providers = Vec::new();
    for token in raw.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match ProviderId::from_str(token) {
            Ok(provider) => {
                if !providers.contains(&provider) {
                    providers.push(provider);
                }
            }
            Err(_) => warn!(provider = token, "ignoring unrecognized provider name"),
        }
    }
    providers
}
