//! Typo suggestions for lemma lookups.

use strsim::levenshtein;

/// Up to three candidates close to `query`, closest first.
///
/// Queries of up to three characters accept distance 1, longer ones
/// distance 2. Exact matches are not suggestions. Ties keep the order of
/// `candidates`.
pub fn compute_suggestions<'a>(
    query: &str,
    candidates: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if query.chars().count() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, &str)> = candidates
        .into_iter()
        .filter_map(|candidate| {
            let distance = levenshtein(query, candidate);
            (distance > 0 && distance <= max_distance).then_some((distance, candidate))
        })
        .collect();
    suggestions.sort_by_key(|(distance, _)| *distance);
    suggestions
        .into_iter()
        .take(3)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
