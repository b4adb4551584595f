// Property-based tests for overlap grouping and horizontal allocation
// Random columns of events must always produce consistent groups and frames

use proptest::prelude::*;
use week_view_layout::services::overlap::group_overlaps;
use week_view_layout::services::ranges::{available_ranges, AxisRange};
use week_view_layout::{
    resolve_column_layout, ColumnGeometry, EdgeInsets, ItemIndex, TimeInterval, VerticalScale,
};

fn intervals_from(spans: &[(u32, u32)]) -> Vec<TimeInterval> {
    spans
        .iter()
        .enumerate()
        .filter_map(|(item, &(start, duration))| {
            TimeInterval::new(
                ItemIndex::new(0, item),
                start as f32,
                (start + duration) as f32,
            )
        })
        .collect()
}

proptest! {
    /// Property: Every reported group has several members that all share an instant
    #[test]
    fn prop_group_members_pairwise_overlap(
        spans in prop::collection::vec((0..1440u32, 1..240u32), 0..20),
    ) {
        let intervals = intervals_from(&spans);
        let grouping = group_overlaps(&intervals);

        for group in &grouping.groups {
            prop_assert!(group.len() > 1);
            prop_assert!(group.len() <= grouping.max_concurrent);
            for &a in group {
                for &b in group {
                    if a != b {
                        prop_assert!(intervals[a].overlaps(&intervals[b]));
                    }
                }
            }
        }
    }

    /// Property: Events laid end to end never form a group
    #[test]
    fn prop_sequential_events_never_group(
        durations in prop::collection::vec(1..120u32, 1..30),
    ) {
        let mut start = 0;
        let mut spans = Vec::new();
        for duration in durations {
            spans.push((start, duration));
            start += duration;
        }

        let grouping = group_overlaps(&intervals_from(&spans));
        prop_assert_eq!(grouping.max_concurrent, 1);
        prop_assert!(grouping.groups.is_empty());
    }

    /// Property: Free ranges are sorted, disjoint, non-empty and inside the total
    #[test]
    fn prop_available_ranges_are_well_formed(
        claims in prop::collection::vec((0..300u32, 1..150u32), 0..8),
        margin in 0..3u32,
    ) {
        let total = AxisRange::new(0.0, 300.0);
        let claimed: Vec<AxisRange> = claims
            .iter()
            .map(|&(low, width)| AxisRange::new(low as f32, (low + width).min(300) as f32))
            .collect();
        let margin = EdgeInsets::uniform(margin as f32);

        let free = available_ranges(total, &claimed, &margin);
        for range in &free {
            prop_assert!(range.width() > 0.0);
            prop_assert!(range.low >= total.low && range.high <= total.high);
        }
        for pair in free.windows(2) {
            prop_assert!(pair[0].high <= pair[1].low);
        }
        for range in &free {
            for taken in &claimed {
                prop_assert!(
                    range.high <= taken.low || taken.high <= range.low,
                    "free {:?} overlaps claimed {:?}",
                    range,
                    taken
                );
            }
        }
    }

    /// Property: Without margins, free and claimed ranges together cover the total
    #[test]
    fn prop_available_ranges_cover_total_without_margin(
        claims in prop::collection::vec((0..300u32, 1..150u32), 0..8),
    ) {
        let total = AxisRange::new(0.0, 300.0);
        let claimed: Vec<AxisRange> = claims
            .iter()
            .map(|&(low, width)| AxisRange::new(low as f32, (low + width).min(300) as f32))
            .collect();

        let free = available_ranges(total, &claimed, &EdgeInsets::default());

        let mut edges: Vec<f32> = vec![total.low, total.high];
        for range in free.iter().chain(claimed.iter()) {
            edges.push(range.low);
            edges.push(range.high);
        }
        edges.sort_by(|a, b| a.total_cmp(b));
        edges.dedup();

        for pair in edges.windows(2) {
            let mid_x = (pair[0] + pair[1]) / 2.0;
            let covered = free
                .iter()
                .chain(claimed.iter())
                .any(|range| range.low < mid_x && mid_x < range.high);
            prop_assert!(covered, "{} is neither free nor claimed", mid_x);
        }
    }

    /// Property: Resolved frames stay inside their column and are reproducible
    #[test]
    fn prop_resolved_frames_stay_in_column(
        spans in prop::collection::vec((0..1200u32, 5..240u32), 0..8),
    ) {
        let intervals = intervals_from(&spans);
        let column = ColumnGeometry::new(44.0, 300.0, 1);
        let scale = VerticalScale::new(0.0, 1.0);
        let margin = EdgeInsets::uniform(1.0);

        let elements = resolve_column_layout(&intervals, &column, &scale, &margin);
        prop_assert_eq!(elements.len(), intervals.len());
        for element in &elements {
            prop_assert!(element.frame.min_x() >= column.x - 0.5);
            prop_assert!(element.frame.max_x() <= column.x + column.width + 0.5);
            prop_assert!(element.frame.height > 0.0);
        }

        let again = resolve_column_layout(&intervals, &column, &scale, &margin);
        prop_assert_eq!(elements, again);
    }
}
