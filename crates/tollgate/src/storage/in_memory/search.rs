//! Search filter and result ordering for the in-memory store.

use crate::domain::Entity;
use rayon::prelude::*;

/// Filter `entities` by `query` and sort the hits by label.
///
/// At or above `parallel_threshold` records the predicate runs on rayon's
/// pool. rayon's indexed `collect` keeps input order, and the final sort is
/// total (label, then identity), so both paths return the same sequence.
pub(super) fn filter_sorted<T: Entity>(
    entities: &[T],
    query: &str,
    parallel_threshold: usize,
) -> Vec<T> {
    let mut hits: Vec<T> = if entities.len() >= parallel_threshold {
        entities
            .par_iter()
            .filter(|entity| entity.matches(query))
            .cloned()
            .collect()
    } else {
        entities
            .iter()
            .filter(|entity| entity.matches(query))
            .cloned()
            .collect()
    };

    sort_by_label(&mut hits);
    hits
}

/// Ascending by label, identity as the tiebreaker.
pub(super) fn sort_by_label<T: Entity>(entities: &mut [T]) {
    entities.sort_by(|a, b| {
        a.sort_key()
            .cmp(b.sort_key())
            .then_with(|| a.id().cmp(&b.id()))
    });
}
