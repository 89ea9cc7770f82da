// Exact token-overlap scoring

/// Counts query tokens that also occur in the candidate's token sequence.
/// Membership, not consumption: a query token repeated twice scores twice
/// no matter how often the candidate contains it.
pub fn token_overlap(query: &[String], candidate: &[String]) -> usize {
    query.iter().filter(|t| candidate.contains(*t)).count()
}
