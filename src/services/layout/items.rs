// Item placement
// Vertical placement of timed items and side-by-side resolution of overlaps

use std::cmp::Ordering;
use std::collections::HashSet;

use super::error::LayoutError;
use super::source::WeekViewDataSource;
use super::WeekViewLayout;
use crate::models::element::{ElementKey, ElementKind, LayoutElement};
use crate::models::interval::{
    valid_intervals, ItemIndex, ItemKind, TimeComponents, TimeInterval, VerticalSpan,
};
use crate::models::settings::EdgeInsets;
use crate::models::timeline::HOURS_PER_DAY;
use crate::services::overlap::group_overlaps;
use crate::services::ranges::{available_ranges, AxisRange};
use crate::utils::geometry::{round1, Rect};

/// Horizontal extent of one day column and how it splits into resources.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnGeometry {
    pub x: f32,
    pub width: f32,
    pub resource_count: usize,
}

impl ColumnGeometry {
    pub const fn new(x: f32, width: f32, resource_count: usize) -> Self {
        Self {
            x,
            width,
            resource_count,
        }
    }

    /// Resource count with zero treated as a single column.
    pub fn resource_count(&self) -> usize {
        self.resource_count.max(1)
    }

    pub fn subsection_width(&self) -> f32 {
        self.width / self.resource_count() as f32
    }

    /// Width available to the items of one resource.
    pub fn partition_width(&self) -> f32 {
        if self.resource_count() > 1 {
            self.subsection_width()
        } else {
            self.width
        }
    }

    /// Left edge of a resource's sub-column.
    pub fn partition_min_x(&self, resource_index: usize) -> f32 {
        if self.resource_count() > 1 {
            self.x + (self.subsection_width() * resource_index as f32).round_ties_even()
        } else {
            self.x
        }
    }

    fn clamp_resource(&self, resource_index: usize) -> usize {
        let count = self.resource_count();
        if resource_index < count {
            return resource_index;
        }
        log::warn!(
            "Resource index {} out of range for {} resources, using the last one",
            resource_index,
            count
        );
        count - 1
    }
}

/// Maps minute offsets to content y-coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalScale {
    /// y of minute zero.
    pub grid_min_y: f32,
    pub minute_height: f32,
}

impl VerticalScale {
    pub const fn new(grid_min_y: f32, minute_height: f32) -> Self {
        Self {
            grid_min_y,
            minute_height,
        }
    }
}

/// An item with its frame, before it becomes a [`LayoutElement`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PlacedItem {
    pub index: ItemIndex,
    pub kind: ItemKind,
    pub frame: Rect,
    pub z_index: i32,
    pub resource_index: usize,
}

impl PlacedItem {
    fn element_kind(&self) -> ElementKind {
        match self.kind {
            ItemKind::EventCell => ElementKind::EventCell,
            ItemKind::CalendarBlock => ElementKind::CalendarBlockCell,
            ItemKind::Placeholder => ElementKind::PlaceholderCell,
        }
    }

    pub(crate) fn into_element(self) -> LayoutElement {
        let key = ElementKey::for_item(self.element_kind(), self.index);
        let mut element = LayoutElement::new(key, self.frame).with_z_index(self.z_index);
        element.resource_index = self.resource_index;
        element
    }
}

impl VerticalSpan for PlacedItem {
    fn span_start(&self) -> f32 {
        self.frame.min_y()
    }

    fn span_end(&self) -> f32 {
        self.frame.max_y()
    }
}

/// Frame an interval inside its column, at full resource width.
///
/// Returns `None` when the resolved frame has no height or width, or starts
/// above the top of the content.
pub(crate) fn place_interval(
    interval: &TimeInterval,
    kind: ItemKind,
    column: &ColumnGeometry,
    scale: &VerticalScale,
    margin: &EdgeInsets,
) -> Option<PlacedItem> {
    let resource_index = column.clamp_resource(interval.resource_index);
    let resource_offset = if column.resource_count() > 1 {
        round1(column.subsection_width() * resource_index as f32)
    } else {
        0.0
    };

    let min_x = round1(column.x + margin.left + resource_offset);
    let max_x = round1(min_x + column.partition_width() - margin.horizontal());
    let min_y = round1(interval.start_offset * scale.minute_height + scale.grid_min_y + margin.top);
    let max_y = round1(interval.end_offset * scale.minute_height + scale.grid_min_y - margin.bottom);

    let frame = Rect::new(min_x, min_y, max_x - min_x, max_y - min_y);
    if !(frame.height > 0.0 && frame.width > 0.0) || frame.min_y() < 0.0 {
        log::trace!("Skipping item {}: degenerate frame {:?}", interval.id, frame);
        return None;
    }

    let z_index = match kind {
        ItemKind::EventCell => ElementKind::EventCell.base_z_index(),
        ItemKind::CalendarBlock => ElementKind::CalendarBlockCell.z_index(interval.z_hint),
        ItemKind::Placeholder => ElementKind::PlaceholderCell.base_z_index(),
    };

    Some(PlacedItem {
        index: interval.id,
        kind,
        frame,
        z_index,
        resource_index,
    })
}

/// Mutable state shared by every group placed within one partition.
///
/// Tracks which items already have their final horizontal slot and hands
/// out increasing z-values in placement order.
#[derive(Debug)]
pub struct AllocationContext {
    next_z: i32,
    adjusted: HashSet<usize>,
}

impl AllocationContext {
    pub fn new(base_z: i32) -> Self {
        Self {
            next_z: base_z,
            adjusted: HashSet::new(),
        }
    }

    pub fn is_adjusted(&self, slot: usize) -> bool {
        self.adjusted.contains(&slot)
    }

    /// Split `[min_x, min_x + width]` evenly between the items at `slots`.
    fn spread(
        &mut self,
        items: &mut [PlacedItem],
        slots: &[usize],
        min_x: f32,
        width: f32,
        margin: &EdgeInsets,
    ) {
        if slots.is_empty() {
            return;
        }
        let division = round1(width / slots.len() as f32);
        let item_width = division - margin.horizontal();

        for (position, &slot) in slots.iter().enumerate() {
            let item = &mut items[slot];
            item.frame.x = round1(min_x + margin.left + division * position as f32);
            item.frame.width = item_width;
            item.z_index = self.next_z;
            self.next_z += 1;
            self.adjusted.insert(slot);
        }
    }
}

fn group_slots(group: &[usize], slots: &[usize]) -> Vec<usize> {
    group.iter().map(|&member| slots[member]).collect()
}

/// Place overlapping items of one resource side by side.
///
/// The largest overlap group is spread evenly across the partition. Every
/// other group keeps the slots of members that were already placed and fits
/// its remaining members into the gaps, sized by the largest group's
/// per-item width. Members that find no gap keep their full-width frame.
/// Placeholders never take part.
pub(crate) fn adjust_items_for_overlap(
    items: &mut [PlacedItem],
    resource_index: usize,
    column: &ColumnGeometry,
    margin: &EdgeInsets,
) {
    let slots: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| item.resource_index == resource_index && item.kind != ItemKind::Placeholder)
        .map(|(slot, _)| slot)
        .collect();
    let spans: Vec<PlacedItem> = slots.iter().map(|&slot| items[slot]).collect();

    let grouping = group_overlaps(&spans);
    if !grouping.has_overlaps() {
        return;
    }

    let min_x = column.partition_min_x(resource_index);
    let width = column.partition_width();
    let groups = grouping.sorted_by_size();
    let Some((largest, rest)) = groups.split_first() else {
        return;
    };

    let mut context = AllocationContext::new(ElementKind::EventCell.base_z_index());
    context.spread(items, &group_slots(largest, &slots), min_x, width, margin);
    let unit_width = round1(width / largest.len() as f32);

    for group in rest {
        let mut pending = Vec::new();
        let mut claimed = Vec::new();
        for slot in group_slots(group, &slots) {
            if context.is_adjusted(slot) {
                let frame = items[slot].frame;
                claimed.push(AxisRange::new(frame.min_x(), frame.max_x()));
            } else {
                pending.push(slot);
            }
        }

        if claimed.is_empty() {
            context.spread(items, &pending, min_x, width, margin);
            continue;
        }
        if pending.is_empty() || !(unit_width > 0.0) {
            continue;
        }

        let free = available_ranges(AxisRange::new(min_x, min_x + width), &claimed, margin);
        let mut placed = 0;
        for range in free {
            if placed == pending.len() {
                break;
            }
            // Rounded, not floored: a range one margin short of a unit still takes an item.
            let capacity = (range.width() / unit_width).round() as usize;
            let take = capacity.min(pending.len() - placed);
            if take == 0 {
                continue;
            }
            context.spread(items, &pending[placed..placed + take], range.low, range.width(), margin);
            placed += take;
        }

        if placed < pending.len() {
            log::debug!(
                "{} overlapping items found no free slot in resource {}",
                pending.len() - placed,
                resource_index
            );
        }
    }
}

/// Lay out the timed items of a single column.
///
/// Offsets of `intervals` are minutes from the top of the grid. Invalid
/// intervals are dropped; the rest come back as event cells in input order.
pub fn resolve_column_layout(
    intervals: &[TimeInterval],
    column: &ColumnGeometry,
    scale: &VerticalScale,
    margin: &EdgeInsets,
) -> Vec<LayoutElement> {
    let mut placed: Vec<PlacedItem> = valid_intervals(intervals.iter().copied())
        .iter()
        .filter_map(|interval| place_interval(interval, ItemKind::EventCell, column, scale, margin))
        .collect();

    for resource_index in 0..column.resource_count() {
        adjust_items_for_overlap(&mut placed, resource_index, column, margin);
    }

    placed.into_iter().map(PlacedItem::into_element).collect()
}

impl WeekViewLayout {
    pub(super) fn column_for_section(&self, section: usize) -> ColumnGeometry {
        let x = self.settings.calendar_content_min_x() + self.section_width * section as f32;
        ColumnGeometry::new(x, self.section_width, self.resource_count)
    }

    pub(super) fn vertical_scale(&self) -> VerticalScale {
        VerticalScale::new(self.settings.calendar_grid_min_y(), self.minute_height())
    }

    /// Minute offsets of an item inside the visible window.
    ///
    /// Starts before the window are clipped to its top. An end on a later day
    /// extends past the nominal day height instead of wrapping; a same-day
    /// end is clamped to the bottom of the window.
    pub(super) fn interval_for_times(
        &self,
        index: ItemIndex,
        start: &TimeComponents,
        end: &TimeComponents,
    ) -> Option<TimeInterval> {
        let (lower, upper) = self.timeline.time_range();
        let (lower, upper) = (lower as i32, upper as i32);
        let window_end = ((upper - lower) * 60) as f32;

        let start_offset = ((start.hour - lower) * 60 + start.minute as i32).max(0) as f32;
        let end_offset = match end.date.cmp(&start.date) {
            Ordering::Greater => {
                ((HOURS_PER_DAY as i32 + end.hour - lower) * 60 + end.minute as i32) as f32
            }
            Ordering::Equal => (((end.hour - lower) * 60 + end.minute as i32) as f32).min(window_end),
            Ordering::Less => return None,
        };

        TimeInterval::new(index, start_offset, end_offset)
    }

    pub(super) fn layout_items_for_section(
        &mut self,
        source: &dyn WeekViewDataSource,
        section: usize,
    ) -> Result<(), LayoutError> {
        let column = self.column_for_section(section);
        let scale = self.vertical_scale();
        let margin = self.settings.item_margin;
        let division_height = self.division_height();

        let mut placed = Vec::new();
        for item in 0..source.number_of_items(section) {
            let index = ItemIndex::new(section, item);
            let start = self.cache.start_time(source, index)?;
            let end = self.cache.end_time(source, index)?;

            let Some(interval) = self.interval_for_times(index, &start, &end) else {
                log::debug!("Item {} has no visible duration, skipping", index);
                continue;
            };
            let interval = interval
                .with_resource(source.resource_index_for_item(index))
                .with_z_hint(source.z_index_for_item(index));

            let kind = source.item_kind(index);
            let Some(mut item) = place_interval(&interval, kind, &column, &scale, &margin) else {
                continue;
            };

            match kind {
                ItemKind::Placeholder => item.frame.height = division_height,
                ItemKind::EventCell => self.layout_outscreen_indicator(source, &item, &column),
                ItemKind::CalendarBlock => {}
            }
            placed.push(item);
        }

        for resource_index in 0..column.resource_count() {
            adjust_items_for_overlap(&mut placed, resource_index, &column, &margin);
        }

        for item in placed {
            self.insert_element(item.into_element());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn interval(item: usize, start: f32, end: f32) -> TimeInterval {
        TimeInterval::new(ItemIndex::new(0, item), start, end).unwrap()
    }

    fn unit_scale() -> VerticalScale {
        VerticalScale::new(0.0, 1.0)
    }

    fn frames(elements: &[LayoutElement]) -> Vec<(f32, f32)> {
        elements.iter().map(|e| (e.frame.x, e.frame.width)).collect()
    }

    #[test]
    fn test_three_overlapping_events_share_column() {
        let column = ColumnGeometry::new(0.0, 300.0, 1);
        let margin = EdgeInsets::uniform(1.0);
        let input = [
            interval(0, 540.0, 600.0),
            interval(1, 540.0, 600.0),
            interval(2, 540.0, 600.0),
        ];

        let elements = resolve_column_layout(&input, &column, &unit_scale(), &margin);
        assert_eq!(frames(&elements), vec![(1.0, 98.0), (101.0, 98.0), (201.0, 98.0)]);
        let z: Vec<i32> = elements.iter().map(|e| e.z_index).collect();
        assert_eq!(z, vec![100, 101, 102]);
    }

    #[test]
    fn test_single_event_fills_column() {
        let column = ColumnGeometry::new(50.0, 200.0, 1);
        let margin = EdgeInsets::uniform(1.0);
        let elements = resolve_column_layout(&[interval(0, 60.0, 120.0)], &column, &unit_scale(), &margin);

        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].frame, Rect::new(51.0, 61.0, 198.0, 58.0));
        assert_eq!(elements[0].z_index, 100);
    }

    #[test]
    fn test_back_to_back_events_keep_full_width() {
        let column = ColumnGeometry::new(0.0, 100.0, 1);
        let elements = resolve_column_layout(
            &[interval(0, 0.0, 30.0), interval(1, 30.0, 60.0)],
            &column,
            &unit_scale(),
            &EdgeInsets::default(),
        );
        assert_eq!(frames(&elements), vec![(0.0, 100.0), (0.0, 100.0)]);
    }

    #[test]
    fn test_daisy_chain_reuses_free_slot() {
        // A and C never overlap, so C takes the slot A left behind in the second group.
        let column = ColumnGeometry::new(0.0, 200.0, 1);
        let input = [
            interval(0, 0.0, 60.0),
            interval(1, 30.0, 120.0),
            interval(2, 90.0, 150.0),
        ];
        let elements = resolve_column_layout(&input, &column, &unit_scale(), &EdgeInsets::default());

        assert_eq!(frames(&elements), vec![(0.0, 100.0), (100.0, 100.0), (0.0, 100.0)]);
        assert_eq!(elements[2].z_index, 102);
    }

    #[test]
    fn test_smaller_group_fills_gap_left_by_largest() {
        // Largest group {0,1,2} splits 300 into thirds. Item 3 overlaps 0 and 2
        // only, so it lands in the middle third that item 1 vacates.
        let column = ColumnGeometry::new(0.0, 300.0, 1);
        let input = [
            interval(0, 0.0, 120.0),
            interval(1, 0.0, 60.0),
            interval(2, 0.0, 120.0),
            interval(3, 90.0, 150.0),
        ];
        let elements = resolve_column_layout(&input, &column, &unit_scale(), &EdgeInsets::default());

        assert_eq!(elements[3].frame.x, 100.0);
        assert_eq!(elements[3].frame.width, 100.0);
    }

    #[test]
    fn test_invalid_intervals_are_dropped() {
        let column = ColumnGeometry::new(0.0, 100.0, 1);
        let broken = TimeInterval {
            id: ItemIndex::new(0, 7),
            start_offset: 90.0,
            end_offset: 30.0,
            resource_index: 0,
            z_hint: 0,
        };
        let elements = resolve_column_layout(
            &[broken, interval(1, 0.0, 30.0)],
            &column,
            &unit_scale(),
            &EdgeInsets::default(),
        );
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].key.item, 1);
    }

    #[test]
    fn test_resources_are_laid_out_independently() {
        let column = ColumnGeometry::new(0.0, 200.0, 2);
        let input = [
            interval(0, 0.0, 60.0).with_resource(0),
            interval(1, 0.0, 60.0).with_resource(1),
            interval(2, 0.0, 60.0).with_resource(1),
        ];
        let elements = resolve_column_layout(&input, &column, &unit_scale(), &EdgeInsets::default());

        assert_eq!(frames(&elements), vec![(0.0, 100.0), (100.0, 50.0), (150.0, 50.0)]);
        assert_eq!(elements[1].resource_index, 1);
    }

    #[test]
    fn test_zero_resource_count_degrades_to_full_width() {
        let column = ColumnGeometry::new(0.0, 120.0, 0);
        let elements = resolve_column_layout(
            &[interval(0, 0.0, 60.0).with_resource(3)],
            &column,
            &unit_scale(),
            &EdgeInsets::default(),
        );
        assert_eq!(frames(&elements), vec![(0.0, 120.0)]);
        assert_eq!(elements[0].resource_index, 0);
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let column = ColumnGeometry::new(44.0, 157.0, 1);
        let margin = EdgeInsets::uniform(1.0);
        let input = [
            interval(0, 0.0, 95.0),
            interval(1, 20.0, 40.0),
            interval(2, 35.0, 130.0),
            interval(3, 100.0, 200.0),
        ];
        let first = resolve_column_layout(&input, &column, &unit_scale(), &margin);
        let second = resolve_column_layout(&input, &column, &unit_scale(), &margin);
        assert_eq!(first, second);
    }

    #[test]
    fn test_calendar_block_stacks_by_hint() {
        let column = ColumnGeometry::new(0.0, 100.0, 1);
        let block = interval(0, 0.0, 60.0).with_z_hint(5);
        let placed = place_interval(
            &block,
            ItemKind::CalendarBlock,
            &column,
            &unit_scale(),
            &EdgeInsets::default(),
        )
        .unwrap();
        assert_eq!(placed.z_index, 105);
        assert_eq!(placed.into_element().kind(), ElementKind::CalendarBlockCell);
    }

    #[test]
    fn test_allocation_context_counts_up() {
        let column = ColumnGeometry::new(0.0, 100.0, 1);
        let mut items: Vec<PlacedItem> = (0..2)
            .map(|item| {
                place_interval(
                    &interval(item, 0.0, 10.0),
                    ItemKind::EventCell,
                    &column,
                    &unit_scale(),
                    &EdgeInsets::default(),
                )
                .unwrap()
            })
            .collect();

        let mut context = AllocationContext::new(100);
        context.spread(&mut items, &[1, 0], 0.0, 100.0, &EdgeInsets::default());
        assert!(context.is_adjusted(0));
        assert_eq!(items[1].z_index, 100);
        assert_eq!(items[0].z_index, 101);
        assert_eq!(items[0].frame.x, 50.0);
    }
}
