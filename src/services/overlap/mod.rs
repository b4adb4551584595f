//! Overlap grouping for items sharing one column.
//!
//! A merge sweep over the items sorted by start and, independently, by end.
//! Each start seen before the earliest open end joins the current group; each
//! end closes the group if it was still growing. Only groups with more than
//! one member are reported, so non-overlapping items keep their full-width
//! placement.
//!
//! The sweep does not compute a true transitive closure. Chained overlaps
//! with no common instant (A overlaps B, B overlaps C, A and C disjoint) come
//! out as two groups `[A, B]` and `[B, C]`, which the layout resolver handles
//! by freezing the members it has already placed.

use crate::models::interval::{TimeInterval, VerticalSpan};

/// Result of [`group_overlaps`]: the peak number of concurrently open items
/// and the overlap groups as indices into the input slice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OverlapGrouping {
    pub max_concurrent: usize,
    pub groups: Vec<Vec<usize>>,
}

impl OverlapGrouping {
    /// Resolve group indices back to the items they point at.
    pub fn members<'a, T>(&self, items: &'a [T]) -> Vec<Vec<&'a T>> {
        self.groups
            .iter()
            .map(|group| group.iter().map(|&idx| &items[idx]).collect())
            .collect()
    }

    /// Groups ordered by member count, largest first. Ties keep sweep order.
    pub fn sorted_by_size(&self) -> Vec<&[usize]> {
        let mut groups: Vec<&[usize]> = self.groups.iter().map(Vec::as_slice).collect();
        groups.sort_by(|a, b| b.len().cmp(&a.len()));
        groups
    }

    pub fn has_overlaps(&self) -> bool {
        self.max_concurrent > 1
    }
}

/// Partition `items` into overlap groups.
///
/// Comparison is strict: an item ending exactly where another starts does not
/// overlap it.
pub fn group_overlaps<T: VerticalSpan>(items: &[T]) -> OverlapGrouping {
    let count = items.len();

    let mut by_start: Vec<usize> = (0..count).collect();
    by_start.sort_by(|&a, &b| items[a].span_start().total_cmp(&items[b].span_start()));
    let mut by_end: Vec<usize> = (0..count).collect();
    by_end.sort_by(|&a, &b| items[a].span_end().total_cmp(&items[b].span_end()));

    let mut max_concurrent = 0usize;
    let mut concurrent = 0usize;
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut open_group: Vec<usize> = Vec::new();
    // Only the first end after a run of starts closes a group.
    let mut group_growing = false;

    let (mut i, mut j) = (0, 0);
    while i < count && j < count {
        let starting = by_start[i];
        let closing = by_end[j];

        if items[starting].span_start() < items[closing].span_end() {
            concurrent += 1;
            max_concurrent = max_concurrent.max(concurrent);
            group_growing = true;
            open_group.push(starting);
            i += 1;
        } else {
            concurrent = concurrent.saturating_sub(1);
            if group_growing {
                if open_group.len() > 1 {
                    groups.push(open_group.clone());
                }
                group_growing = false;
            }
            open_group.retain(|&idx| idx != closing);
            j += 1;
        }
    }

    if open_group.len() > 1 {
        groups.push(open_group);
    }

    log::trace!(
        "Grouped {} items: max concurrent {}, {} overlap groups",
        count,
        max_concurrent,
        groups.len()
    );

    OverlapGrouping {
        max_concurrent,
        groups,
    }
}

/// Convenience form of [`group_overlaps`] returning the intervals themselves.
pub fn group_intervals(intervals: &[TimeInterval]) -> (usize, Vec<Vec<TimeInterval>>) {
    let grouping = group_overlaps(intervals);
    let groups = grouping
        .members(intervals)
        .into_iter()
        .map(|group| group.into_iter().copied().collect())
        .collect();
    (grouping.max_concurrent, groups)
}
