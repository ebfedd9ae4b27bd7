//! Case-insensitive keyword containment, the only text analysis the engine performs.

/// True if `haystack` contains any of `needles`, ignoring ASCII case.
///
/// Needles are expected in lowercase.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    if haystack.is_empty() {
        return false;
    }
    let lowered = haystack.to_lowercase();
    needles.iter().any(|needle| lowered.contains(needle))
}
