use hazop_types::RelevanceArea;
use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a compliance gap.
///
/// Identity fields:
/// - standard id
/// - clause id
/// - failing relevance areas, comma separated in the order given
pub fn fingerprint_for_gap(
    standard_id: &str,
    clause_id: &str,
    relevance: &[RelevanceArea],
) -> String {
    let areas: Vec<&str> = relevance.iter().map(|a| a.as_str()).collect();
    let canonical = [standard_id, clause_id, &areas.join(",")].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
