/// Map a free-text query to at most one category key.
///
/// The query must be pre-trimmed and non-empty; blank input is handled
/// upstream and never reaches this function. Matching is case-insensitive
/// bidirectional substring containment: a key matches when it contains the
/// lowered query or the lowered query contains it, so inputs like `"oceans"`
/// or `"sun"` still resolve. The first matching key in enumeration order
/// wins; there is no scoring or best-match ranking (a documented
/// limitation, not an oversight).
#[must_use]
pub fn match_category<'a>(query: &str, categories: &'a [String]) -> Option<&'a str> {
    let lowered = query.to_lowercase();
    categories
        .iter()
        .map(String::as_str)
        .find(|key| lowered.contains(key) || key.contains(&lowered))
}
