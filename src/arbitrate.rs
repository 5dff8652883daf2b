//! Candidate arbitration for the ranked label list produced at finalize time.

/// Picks the final answer from a confidence-ordered candidate list.
///
/// Defaults to the first entry, then scans for the first label that does not
/// start with `UTF-16` or `GB18030` and prefers it. Those two families have
/// byte grammars broad enough to stay plausible for almost any multi-byte
/// input, so they only win when nothing more specific survived. The rule is
/// fixed and case-sensitive on the canonical label spellings; callers depend
/// on this exact bias.
///
/// Returns `None` for an empty list.
pub fn pick<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    let first = *candidates.first()?;
    for &label in candidates {
        if !(label.starts_with("UTF-16") || label.starts_with("GB18030")) {
            return Some(label);
        }
    }
    Some(first)
}
