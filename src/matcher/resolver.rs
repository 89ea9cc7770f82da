// Catalog and build resolution
use tracing::debug;

use crate::config::MatcherConfig;
use crate::matcher::fuzzy;
use crate::matcher::score::token_overlap;
use crate::matcher::text::tokenize;
use crate::model::{
    Build, CatalogRow, CatalogSet, Category, MatchKey, MatchResult, Price, ResolvedBuild,
};

/// Resolves one free-text component name against one catalog.
///
/// Scans every row once and keeps the first row with the maximal token
/// overlap. When no row shares a single token with the query, falls back to
/// approximate matching over the raw query string. Returns `None` for an
/// empty query, an empty catalog, or a fuzzy miss.
pub fn resolve(
    query: &str,
    catalog: &[CatalogRow],
    key: MatchKey,
    cfg: &MatcherConfig,
) -> Option<MatchResult> {
    if query.is_empty() || catalog.is_empty() {
        return None;
    }

    let query_tokens = tokenize(query, &cfg.stopwords);

    let mut best_row: Option<&CatalogRow> = None;
    let mut best_score: i64 = -1;
    for row in catalog {
        let row_tokens = tokenize(row.key(key), &cfg.stopwords);
        let score = token_overlap(&query_tokens, &row_tokens) as i64;
        // strict comparison: ties keep the earliest row
        if score > best_score {
            best_score = score;
            best_row = Some(row);
        }
    }

    if best_score == 0 {
        debug!("no token overlap for '{}', trying fuzzy match", query);
        best_row = fuzzy::closest_row(query, catalog, key, cfg.fuzzy_threshold);
    }

    best_row.map(|row| MatchResult {
        name: row.key(key).to_string(),
        price: Price::parse(row.price.as_deref()),
    })
}

/// Resolves all six component slots of a suggested build. Slots are
/// independent: one slot failing to match leaves the others untouched.
pub fn resolve_build(build: &Build, catalogs: &CatalogSet, cfg: &MatcherConfig) -> ResolvedBuild {
    let mut resolved = ResolvedBuild::default();
    for category in Category::ALL {
        let query = build.component(category);
        let result = resolve(query, catalogs.get(category), category.match_key(), cfg);
        if result.is_none() {
            debug!("no match for {} query '{}'", category.label(), query);
        }
        resolved.set(category, result);
    }
    resolved
}
