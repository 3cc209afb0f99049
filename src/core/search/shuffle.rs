//! Seeded shuffle scoring.
//!
//! Shuffle mode orders documents by a deterministic pseudo-random
//! score derived from the request seed and the document id, never
//! from a global random generator. Store implementations apply
//! [`shuffle_score`] when executing a `function_score` clause.

use sha2::{Digest, Sha256};

/// Deterministic pseudo-random score for one document.
///
/// The same `(seed, doc_id)` pair always produces the same score,
/// so a given seed yields a stable ordering over a fixed document
/// set while different seeds produce unrelated orderings.
pub fn shuffle_score(seed: &str, doc_id: &str) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(seed.as_bytes());
    hasher.update([0u8]);
    hasher.update(doc_id.as_bytes());
    let digest = hasher.finalize();

    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
