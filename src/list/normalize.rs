use std::cmp::Ordering;

/// Deduplicate and sort licence identifiers.
///
/// Ordering is case-insensitive, with exact byte order breaking ties so the
/// result is deterministic. Deduplication is exact: `mit` and `MIT` are
/// different identifiers and both survive, next to each other.
pub fn normalize<I>(candidates: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut list: Vec<String> = candidates.into_iter().collect();
    list.sort_by(|a, b| compare_identifiers(a, b));
    // Equal strings compare Equal under the total order above, so they are adjacent.
    list.dedup();
    list
}

/// Case-folded comparison, falling back to plain byte order.
pub fn compare_identifiers(a: &str, b: &str) -> Ordering {
    let folded_a = a.chars().flat_map(char::to_lowercase);
    let folded_b = b.chars().flat_map(char::to_lowercase);
    folded_a.cmp(folded_b).then_with(|| a.cmp(b))
}
