//! Stable id generation using xxHash3.
//!
//! Components that wire `aria-controls`/`id` pairs need ids that are unique
//! within a page yet identical across renders of the same input, so the ids
//! are derived from content rather than from a counter.

use xxhash_rust::xxh3::xxh3_64;

/// Compute a 64-bit hash of the given string using xxHash3.
#[inline]
pub fn hash_str(data: &str) -> u64 {
    xxh3_64(data.as_bytes())
}

/// Convert a hash to a hex string (16 characters).
#[inline]
pub fn hash_to_hex(hash: u64) -> String {
    format!("{:016x}", hash)
}

/// Build a stable element id from a prefix and the parts that identify it.
///
/// ```
/// use gesso_carton::stable_id;
///
/// let id = stable_id("accordion", &["Is it accessible?", "0"]);
/// assert!(id.starts_with("accordion-"));
/// assert_eq!(id, stable_id("accordion", &["Is it accessible?", "0"]));
/// ```
pub fn stable_id(prefix: &str, parts: &[&str]) -> String {
    let mut seed = String::with_capacity(parts.iter().map(|p| p.len() + 1).sum());
    for part in parts {
        seed.push_str(part);
        // Unit separator keeps ["ab", "c"] and ["a", "bc"] apart.
        seed.push('\u{1f}');
    }
    let hex = hash_to_hex(hash_str(&seed));
    format!("{}-{}", prefix, &hex[..8])
}
