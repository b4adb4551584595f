// Geometry cache
// Memoizes data-source lookups for the lifetime of one layout pass

use std::collections::HashMap;

use chrono::{NaiveDate, NaiveDateTime};

use super::error::LayoutError;
use super::source::WeekViewDataSource;
use crate::models::interval::{ItemIndex, TimeComponents};
use crate::utils::date::time_components;

/// Per-pass memo of section days, item times and the current time.
///
/// Cleared whenever the layout is invalidated. The current time survives a
/// plain [`GeometryCache::clear`] so the time line does not jump between
/// passes; [`GeometryCache::clear_current_time`] drops it explicitly.
#[derive(Debug, Default)]
pub struct GeometryCache {
    days: HashMap<usize, NaiveDate>,
    start_times: HashMap<ItemIndex, TimeComponents>,
    end_times: HashMap<ItemIndex, TimeComponents>,
    current_time: Option<NaiveDateTime>,
}

impl GeometryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn day_for_section(
        &mut self,
        source: &dyn WeekViewDataSource,
        section: usize,
    ) -> Result<NaiveDate, LayoutError> {
        if let Some(day) = self.days.get(&section) {
            return Ok(*day);
        }
        let day = source
            .day_for_section(section)
            .ok_or(LayoutError::MissingDay { section })?;
        self.days.insert(section, day);
        Ok(day)
    }

    pub fn start_time(
        &mut self,
        source: &dyn WeekViewDataSource,
        index: ItemIndex,
    ) -> Result<TimeComponents, LayoutError> {
        if let Some(components) = self.start_times.get(&index) {
            return Ok(*components);
        }
        let start = source
            .start_time_for_item(index)
            .ok_or(LayoutError::MissingStartTime(index))?;
        let components = time_components(start);
        self.start_times.insert(index, components);
        Ok(components)
    }

    pub fn end_time(
        &mut self,
        source: &dyn WeekViewDataSource,
        index: ItemIndex,
    ) -> Result<TimeComponents, LayoutError> {
        if let Some(components) = self.end_times.get(&index) {
            return Ok(*components);
        }
        let end = source
            .end_time_for_item(index)
            .ok_or(LayoutError::MissingEndTime(index))?;
        let components = time_components(end);
        self.end_times.insert(index, components);
        Ok(components)
    }

    pub fn current_time(&mut self, source: &dyn WeekViewDataSource) -> NaiveDateTime {
        *self.current_time.get_or_insert_with(|| source.now())
    }

    pub fn clear(&mut self) {
        self.days.clear();
        self.start_times.clear();
        self.end_times.clear();
    }

    pub fn clear_current_time(&mut self) {
        self.current_time = None;
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.start_times.is_empty() && self.end_times.is_empty()
    }
}
