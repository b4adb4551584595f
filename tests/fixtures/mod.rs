// Test fixtures - reusable test data
// An in-memory week of events implementing the layout data source
#![allow(dead_code)]

use chrono::{Duration, NaiveDate, NaiveDateTime};
use week_view_layout::models::color::RgbaColor;
use week_view_layout::models::restricted_area::RestrictedArea;
use week_view_layout::{ItemIndex, ItemKind, WeekViewDataSource};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Mar 4, 2024
    pub fn monday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
    }

    /// Time on the given day of the fixture week (0 = Monday)
    pub fn at(day: usize, hour: u32, minute: u32) -> NaiveDateTime {
        (monday() + Duration::days(day as i64))
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }
}

#[derive(Debug, Clone)]
pub struct FixtureItem {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub kind: ItemKind,
    pub resource: usize,
    pub z_hint: i32,
}

/// A week of sections backed by plain vectors.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    pub days: Vec<Vec<FixtureItem>>,
    pub resources: usize,
    pub now: NaiveDateTime,
    pub restricted: Vec<(usize, usize, RestrictedArea)>,
}

impl FixtureSource {
    pub fn week() -> Self {
        Self::with_days(7)
    }

    pub fn with_days(days: usize) -> Self {
        Self {
            days: vec![Vec::new(); days],
            resources: 1,
            // Far from the fixture week so no time line is drawn by default.
            now: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap().and_hms_opt(9, 0, 0).unwrap(),
            restricted: Vec::new(),
        }
    }

    pub fn event(self, day: usize, start: (u32, u32), end: (u32, u32)) -> Self {
        self.item(day, dates::at(day, start.0, start.1), dates::at(day, end.0, end.1), ItemKind::EventCell, 0)
    }

    pub fn resource_event(self, day: usize, resource: usize, start: (u32, u32), end: (u32, u32)) -> Self {
        self.item(day, dates::at(day, start.0, start.1), dates::at(day, end.0, end.1), ItemKind::EventCell, resource)
    }

    pub fn item(mut self, day: usize, start: NaiveDateTime, end: NaiveDateTime, kind: ItemKind, resource: usize) -> Self {
        self.days[day].push(FixtureItem {
            start,
            end,
            kind,
            resource,
            z_hint: 1,
        });
        self
    }

    pub fn resources(mut self, resources: usize) -> Self {
        self.resources = resources;
        self
    }

    pub fn restricted(mut self, day: usize, line: usize, area: RestrictedArea) -> Self {
        self.restricted.push((day, line, area));
        self
    }

    fn get(&self, index: ItemIndex) -> Option<&FixtureItem> {
        self.days.get(index.section)?.get(index.item)
    }
}

impl WeekViewDataSource for FixtureSource {
    fn number_of_sections(&self) -> usize {
        self.days.len()
    }

    fn number_of_items(&self, section: usize) -> usize {
        self.days.get(section).map_or(0, Vec::len)
    }

    fn day_for_section(&self, section: usize) -> Option<NaiveDate> {
        (section < self.days.len()).then(|| dates::monday() + Duration::days(section as i64))
    }

    fn start_time_for_item(&self, index: ItemIndex) -> Option<NaiveDateTime> {
        self.get(index).map(|item| item.start)
    }

    fn end_time_for_item(&self, index: ItemIndex) -> Option<NaiveDateTime> {
        self.get(index).map(|item| item.end)
    }

    fn item_kind(&self, index: ItemIndex) -> ItemKind {
        self.get(index).map_or(ItemKind::EventCell, |item| item.kind)
    }

    fn resource_index_for_item(&self, index: ItemIndex) -> usize {
        self.get(index).map_or(0, |item| item.resource)
    }

    fn resource_count(&self) -> usize {
        self.resources
    }

    fn z_index_for_item(&self, index: ItemIndex) -> i32 {
        self.get(index).map_or(1, |item| item.z_hint)
    }

    fn restricted_areas(&self, section: usize, resource_index: usize) -> Vec<RestrictedArea> {
        self.restricted
            .iter()
            .filter(|(day, line, _)| *day == section && *line == resource_index)
            .map(|(_, _, area)| area.clone())
            .collect()
    }

    fn number_of_restricted_lines(&self, section: usize) -> usize {
        self.restricted
            .iter()
            .filter(|(day, _, _)| *day == section)
            .map(|(_, line, _)| line + 1)
            .max()
            .unwrap_or(0)
    }

    fn outside_screen_color(&self, _index: ItemIndex) -> Option<RgbaColor> {
        RgbaColor::from_hex_str("#3366CC")
    }

    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
