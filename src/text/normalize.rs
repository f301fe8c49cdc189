// Text normalization for n-gram extraction.
//
// Aggressive by design: punctuation and digits carry language-specific noise
// (quoting conventions, numerals) that would pollute the n-gram histograms,
// so everything that isn't a letter becomes a space and runs of whitespace
// collapse to one. What survives is lower-cased alphabetic structure only.

/// Normalize a set of raw text units into a single string.
///
/// Units are joined with a single space, lower-cased, every punctuation
/// character and digit replaced by a space, whitespace runs collapsed, and
/// the result trimmed. Empty input yields an empty string.
pub fn normalize_units(units: &[String]) -> String {
    normalize(&units.join(" "))
}

/// Normalize a single block of raw text.
///
/// Idempotent: normalizing already-normalized text returns it unchanged.
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_space = false;

    for c in raw.chars() {
        if c.is_alphabetic() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            for lower in c.to_lowercase() {
                out.push(lower);
            }
        } else {
            // Whitespace, punctuation, and digits all collapse into a
            // single separating space
            pending_space = true;
        }
    }

    out
}
