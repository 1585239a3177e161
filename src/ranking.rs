use crate::models::{RankedList, RepositorySummary};

/// Order repositories by star count (descending) and keep the first `limit`.
///
/// `sort_by` is stable, so repositories with equal star counts keep the
/// order the API returned them in.
pub fn rank(mut repos: Vec<RepositorySummary>, limit: usize) -> RankedList {
    repos.sort_by(|a, b| b.star_count.cmp(&a.star_count));
    repos.truncate(limit);
    repos
}
