//! Fuzzy candidate ranking.

use complang_eval::Ranker;

/// Keeps candidates that contain the query's characters in order, ignoring
/// case. Candidates containing the query outright come first, then the rest;
/// each group is ordered by edit distance to the query.
#[derive(Clone, Copy, Debug, Default)]
pub struct FuzzyRanker;

impl Ranker for FuzzyRanker {
    fn rank(&self, query: &str, candidates: Vec<String>) -> Vec<String> {
        let query = query.to_lowercase();
        let mut scored: Vec<(bool, usize, String)> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let folded = candidate.to_lowercase();
                is_subsequence(&query, &folded).then(|| {
                    (
                        !folded.contains(&query),
                        edit_distance(&query, &folded),
                        candidate,
                    )
                })
            })
            .collect();
        scored.sort_by(|a, b| (a.0, a.1).cmp(&(b.0, b.1)));
        scored.into_iter().map(|(_, _, candidate)| candidate).collect()
    }
}

/// Whether every character of `needle` appears in `haystack`, in order.
pub fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

/// Levenshtein distance between two strings, in characters.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row = vec![0; b.len() + 1];

    for (i, a_char) in a.chars().enumerate() {
        curr_row[0] = i + 1;
        for (j, &b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1) // deletion
                .min(curr_row[j] + 1) // insertion
                .min(prev_row[j] + cost); // substitution
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}
