//! Caller-side lookups the layout needs during a pass.

use chrono::{Local, NaiveDate, NaiveDateTime};

use crate::models::color::RgbaColor;
use crate::models::interval::{ItemIndex, ItemKind};
use crate::models::restricted_area::RestrictedArea;

/// Data the host view exposes to the layout.
///
/// Passed by reference into each pass and never retained. Returning `None`
/// from one of the required lookups (`day_for_section`, `start_time_for_item`,
/// `end_time_for_item`) means the caller's data does not match the sections
/// and items it reported, and aborts the pass.
#[cfg_attr(test, mockall::automock)]
pub trait WeekViewDataSource {
    fn number_of_sections(&self) -> usize;

    fn number_of_items(&self, section: usize) -> usize;

    /// Calendar day shown by `section`.
    fn day_for_section(&self, section: usize) -> Option<NaiveDate>;

    fn start_time_for_item(&self, index: ItemIndex) -> Option<NaiveDateTime>;

    fn end_time_for_item(&self, index: ItemIndex) -> Option<NaiveDateTime>;

    fn item_kind(&self, _index: ItemIndex) -> ItemKind {
        ItemKind::EventCell
    }

    fn resource_index_for_item(&self, _index: ItemIndex) -> usize {
        0
    }

    /// Number of resource sub-columns per day. `0` is treated as `1`.
    fn resource_count(&self) -> usize {
        1
    }

    fn z_index_for_item(&self, _index: ItemIndex) -> i32 {
        1
    }

    fn restricted_areas(&self, _section: usize, _resource_index: usize) -> Vec<RestrictedArea> {
        Vec::new()
    }

    fn number_of_restricted_lines(&self, _section: usize) -> usize {
        0
    }

    fn outside_screen_color(&self, _index: ItemIndex) -> Option<RgbaColor> {
        None
    }

    /// Wall-clock time for the current-time line.
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
