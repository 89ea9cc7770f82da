// Approximate string matching, used only when token overlap finds nothing
use strsim::normalized_levenshtein;

use crate::matcher::text::normalize;
use crate::model::{CatalogRow, MatchKey};

/// Minimum similarity for a fuzzy hit. Below this the fallback reports no
/// match at all.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.6;

/// Similarity in `[0, 1]` between a query and a candidate key, location
/// independent: containment counts as a full match, and otherwise a
/// query-sized window slides across the candidate so a near-match anywhere
/// in the string counts as much as one at the start.
pub fn similarity(query: &str, candidate: &str) -> f64 {
    let q = normalize(query);
    let c = normalize(candidate);
    if q.is_empty() || c.is_empty() {
        return 0.0;
    }
    if c.contains(&q) || q.contains(&c) {
        return 1.0;
    }
    let mut best = normalized_levenshtein(&q, &c);
    // normalize() output is pure ASCII, so byte slicing is safe here
    if c.len() > q.len() {
        for start in 0..=(c.len() - q.len()) {
            let window = &c[start..start + q.len()];
            best = best.max(normalized_levenshtein(&q, window));
        }
    }
    best
}

/// Best row whose match key clears the threshold, or `None`. Ties go to the
/// earliest row, same as the overlap scan.
pub fn closest_row<'a>(
    query: &str,
    catalog: &'a [CatalogRow],
    key: MatchKey,
    threshold: f64,
) -> Option<&'a CatalogRow> {
    let mut best: Option<(&CatalogRow, f64)> = None;
    for row in catalog {
        let score = similarity(query, row.key(key));
        if score < threshold {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((row, score)),
        }
    }
    best.map(|(row, _)| row)
}
