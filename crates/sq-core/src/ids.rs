//! Story ID generation and reserved identifiers.
//!
//! Generated IDs have the form `story-{unix_millis}-{suffix}` where `suffix`
//! is 9 characters drawn uniformly from `[0-9a-z]` using the OS random source.

use chrono::{DateTime, Utc};

use crate::errors::CoreError;

pub const PREFIX_STORY: &str = "story";

/// Reserved ID of the built-in demonstration story. Never persisted.
pub const DEMO_STORY_ID: &str = "demo-1";

/// Length of the random base-36 suffix.
pub const RANDOM_SUFFIX_LEN: usize = 9;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Largest multiple of 36 that fits in a byte; higher bytes are rejected to
/// keep the alphabet uniform.
const REJECT_FROM: u8 = 252;

/// Mint a fresh story ID stamped with the current time.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source fails.
pub fn generate_story_id() -> Result<String, CoreError> {
    generate_story_id_at(Utc::now())
}

/// Mint a story ID stamped with `now`.
///
/// # Errors
///
/// Returns `CoreError::Random` if the OS random source fails.
pub fn generate_story_id_at(now: DateTime<Utc>) -> Result<String, CoreError> {
    let suffix = random_base36(RANDOM_SUFFIX_LEN)?;
    Ok(format!(
        "{PREFIX_STORY}-{millis}-{suffix}",
        millis = now.timestamp_millis()
    ))
}

fn random_base36(len: usize) -> Result<String, CoreError> {
    let mut out = String::with_capacity(len);
    let mut buf = [0u8; 16];
    while out.len() < len {
        getrandom::fill(&mut buf)
            .map_err(|e| CoreError::Random(format!("failed to generate story id: {e}")))?;
        for byte in buf.iter().copied().filter(|b| *b < REJECT_FROM) {
            out.push(char::from(BASE36[usize::from(byte % 36)]));
            if out.len() == len {
                break;
            }
        }
    }
    Ok(out)
}
