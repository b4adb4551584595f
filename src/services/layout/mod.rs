//! Week-view layout resolver.
//!
//! [`WeekViewLayout`] turns the caller's sections and timed items into
//! positioned [`LayoutElement`]s: event cells resolved side by side where they
//! overlap, sticky headers, grid lines, restricted areas and the current-time
//! line. A full pass runs lazily after any invalidation; viewport-dependent
//! elements of the visible sections are refreshed on every
//! [`WeekViewLayout::elements_in_rect`] query.

mod cache;
mod decorations;
mod dump;
mod error;
mod grid;
mod headers;
mod items;
mod source;

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

pub use cache::GeometryCache;
pub use decorations::OutscreenPosition;
pub use dump::{read_snapshot, write_snapshot, LayoutSnapshot};
pub use error::LayoutError;
pub use items::{resolve_column_layout, AllocationContext, ColumnGeometry, VerticalScale};
pub use source::WeekViewDataSource;
#[cfg(test)]
pub use source::MockWeekViewDataSource;

use crate::models::element::{ElementKey, LayoutElement};
use crate::models::settings::LayoutSettings;
use crate::models::timeline::TimelineType;
use crate::models::zoom::{HourGridDivision, ZoomLevel};
use crate::utils::date::start_of_day;
use crate::utils::geometry::{Rect, Size};

/// Visible part of the content: scroll offset plus size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub offset_x: f32,
    pub offset_y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(offset_x: f32, offset_y: f32, width: f32, height: f32) -> Self {
        Self {
            offset_x,
            offset_y,
            width,
            height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.offset_x, self.offset_y, self.width, self.height)
    }

    /// A viewport with no size has not been reported by the host yet.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Where a scrolled-to time ends up in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScrollPosition {
    #[default]
    Top,
    CenterVertically,
}

#[derive(Debug)]
pub struct WeekViewLayout {
    settings: LayoutSettings,
    zoom: ZoomLevel,
    hour_grid_division: HourGridDivision,
    timeline: TimelineType,
    section_width: f32,
    viewport: Viewport,
    dragging: bool,
    number_of_sections: usize,
    resource_count: usize,
    cache: GeometryCache,
    elements: BTreeMap<ElementKey, LayoutElement>,
    needs_full_pass: bool,
}

impl Default for WeekViewLayout {
    fn default() -> Self {
        Self::with_valid_settings(LayoutSettings::default())
    }
}

impl WeekViewLayout {
    pub fn new(settings: LayoutSettings) -> Result<Self, LayoutError> {
        settings.validate().map_err(LayoutError::InvalidSettings)?;
        Ok(Self::with_valid_settings(settings))
    }

    fn with_valid_settings(settings: LayoutSettings) -> Self {
        Self {
            hour_grid_division: settings.hour_grid_division,
            settings,
            zoom: ZoomLevel::default(),
            timeline: TimelineType::default(),
            section_width: 0.0,
            viewport: Viewport::default(),
            dragging: false,
            number_of_sections: 0,
            resource_count: 1,
            cache: GeometryCache::new(),
            elements: BTreeMap::new(),
            needs_full_pass: true,
        }
    }

    // Configuration

    pub fn settings(&self) -> &LayoutSettings {
        &self.settings
    }

    pub fn set_settings(&mut self, settings: LayoutSettings) -> Result<(), LayoutError> {
        settings.validate().map_err(LayoutError::InvalidSettings)?;
        self.hour_grid_division = settings.hour_grid_division;
        self.settings = settings;
        self.invalidate_layout();
        Ok(())
    }

    pub fn zoom_level(&self) -> ZoomLevel {
        self.zoom
    }

    /// Change zoom; the grid division follows the zoom level.
    pub fn set_zoom_level(&mut self, zoom: ZoomLevel) {
        if self.zoom == zoom {
            return;
        }
        log::debug!("Zoom level {:?} -> {:?}", self.zoom, zoom);
        self.zoom = zoom;
        self.hour_grid_division = zoom.division();
        self.invalidate_layout();
    }

    pub fn hour_grid_division(&self) -> HourGridDivision {
        self.hour_grid_division
    }

    pub fn timeline(&self) -> TimelineType {
        self.timeline
    }

    pub fn set_timeline(&mut self, timeline: TimelineType) {
        if self.timeline == timeline {
            return;
        }
        log::debug!("Timeline {:?} -> {:?}", self.timeline, timeline);
        self.timeline = timeline;
        self.invalidate_layout();
    }

    pub fn section_width(&self) -> f32 {
        self.section_width
    }

    pub fn set_section_width(&mut self, width: f32) {
        let width = if width.is_finite() { width.max(0.0) } else { 0.0 };
        if self.section_width == width {
            return;
        }
        self.section_width = width;
        self.invalidate_layout();
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Update the scroll offset and size. Viewport-dependent elements are
    /// refreshed on the next query, without a full pass.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Restricted areas are hidden while an item is being dragged.
    pub fn set_dragging(&mut self, dragging: bool) {
        if self.dragging == dragging {
            return;
        }
        self.dragging = dragging;
        self.invalidate_layout();
    }

    // Dimensions

    /// Height of one hour row.
    ///
    /// Grows beyond the zoom level's height when the visible hours would not
    /// fill the configured minimum section height.
    pub fn hour_height(&self) -> f32 {
        let duration = self.timeline.duration() as f32;
        let zoom_height = self.zoom.hour_height();
        let min_height = self.settings.min_section_height;
        if zoom_height * duration <= min_height && duration > 0.0 {
            min_height / duration
        } else {
            zoom_height
        }
    }

    pub fn minute_height(&self) -> f32 {
        self.hour_height() / 60.0
    }

    pub fn division_height(&self) -> f32 {
        self.hour_height() / self.hour_grid_division.divisions_per_hour() as f32
    }

    /// Distance from midnight to the top of the visible window.
    pub fn time_lower_offset(&self) -> f32 {
        self.hour_height() * self.timeline.lower_bound() as f32
    }

    pub fn content_size(&self) -> Size {
        let settings = &self.settings;
        let width = settings.row_header_width + self.section_width * self.number_of_sections as f32;
        let height = settings.column_header_height
            + self.hour_height() * self.timeline.duration() as f32
            + settings.contents_margin.vertical()
            + settings.all_day_header_height;
        Size::new(width, height)
    }

    pub fn rect_for_section(&self, section: usize) -> Rect {
        Rect::new(
            self.settings.row_header_width + self.section_width * section as f32,
            0.0,
            self.section_width,
            self.content_size().height,
        )
    }

    pub(crate) fn visible_width(&self) -> f32 {
        if self.viewport.width > 0.0 {
            self.viewport.width
        } else {
            self.content_size().width
        }
    }

    pub(crate) fn visible_height(&self) -> f32 {
        if self.viewport.height > 0.0 {
            self.viewport.height
        } else {
            self.content_size().height
        }
    }

    // Passes

    /// Run a full pass if anything changed since the last one.
    pub fn prepare(&mut self, source: &dyn WeekViewDataSource) -> Result<(), LayoutError> {
        if !self.needs_full_pass {
            return Ok(());
        }

        self.begin_pass(source);
        let sections: Vec<usize> = (0..self.number_of_sections).collect();
        self.run_pass(source, &sections)?;
        self.needs_full_pass = false;

        log::debug!(
            "Laid out {} sections into {} elements",
            self.number_of_sections,
            self.elements.len()
        );
        Ok(())
    }

    /// Every element intersecting `rect`, in key order.
    ///
    /// Sections intersecting `rect` are laid out again so sticky headers and
    /// out-of-view indicators follow the current viewport.
    pub fn elements_in_rect(
        &mut self,
        source: &dyn WeekViewDataSource,
        rect: Rect,
    ) -> Result<Vec<LayoutElement>, LayoutError> {
        self.prepare(source)?;

        let visible: Vec<usize> = (0..self.number_of_sections)
            .filter(|&section| self.rect_for_section(section).intersects(&rect))
            .collect();
        self.run_pass(source, &visible)?;

        Ok(self
            .elements
            .values()
            .filter(|element| element.frame.intersects(&rect))
            .cloned()
            .collect())
    }

    pub fn element(&self, key: &ElementKey) -> Option<&LayoutElement> {
        self.elements.get(key)
    }

    /// All elements from the last pass, in key order.
    pub fn elements(&self) -> impl Iterator<Item = &LayoutElement> {
        self.elements.values()
    }

    /// Drop cached geometry; the next query runs a full pass.
    pub fn invalidate_layout(&mut self) {
        self.cache.clear();
        self.elements.clear();
        self.needs_full_pass = true;
    }

    /// Re-read the current time on the next pass.
    pub fn invalidate_current_time(&mut self) {
        self.cache.clear_current_time();
        self.invalidate_layout();
    }

    fn begin_pass(&mut self, source: &dyn WeekViewDataSource) {
        self.elements.clear();
        self.cache.clear();
        self.number_of_sections = source.number_of_sections();

        let resource_count = source.resource_count();
        if resource_count == 0 {
            log::warn!("Data source reported no resources, laying out a single column");
        }
        self.resource_count = resource_count.max(1);
    }

    fn run_pass(&mut self, source: &dyn WeekViewDataSource, sections: &[usize]) -> Result<(), LayoutError> {
        if let Err(err) = self.layout_sections(source, sections) {
            log::error!("Layout pass failed: {}", err);
            self.elements.clear();
            self.needs_full_pass = true;
            return Err(err);
        }
        Ok(())
    }

    fn layout_sections(&mut self, source: &dyn WeekViewDataSource, sections: &[usize]) -> Result<(), LayoutError> {
        if self.number_of_sections == 0 || !(self.section_width > 0.0) {
            return Ok(());
        }

        for &section in sections {
            self.layout_vertical_gridlines(section);
            self.layout_column_header(section);
            self.layout_all_day_header(section);
            self.layout_current_time_line(source, section)?;
            self.layout_restricted_areas(source, section);
            self.layout_items_for_section(source, section)?;
        }

        self.layout_horizontal_gridlines();
        self.layout_row_headers();
        self.layout_header_backgrounds();
        Ok(())
    }

    pub(crate) fn insert_element(&mut self, element: LayoutElement) {
        self.elements.insert(element.key, element);
    }

    // Lookups

    /// Time shown by an hour row header of `section`.
    pub fn time_for_row_header(
        &mut self,
        source: &dyn WeekViewDataSource,
        section: usize,
        row: u32,
    ) -> Result<NaiveDateTime, LayoutError> {
        let day = self.cache.day_for_section(source, section)?;
        let hour = row + self.timeline.lower_bound();
        Ok(start_of_day(day) + Duration::hours(i64::from(hour)))
    }

    pub fn date_for_column_header(
        &mut self,
        source: &dyn WeekViewDataSource,
        section: usize,
    ) -> Result<NaiveDate, LayoutError> {
        self.cache.day_for_section(source, section)
    }

    /// Vertical scroll offset that brings the hour of `time` into view.
    ///
    /// `zoom` overrides the current zoom level, for scrolling while a zoom
    /// change is still pending. The result is clamped to the scrollable range.
    pub fn scroll_offset_for_time(&self, time: NaiveTime, position: ScrollPosition, zoom: Option<ZoomLevel>) -> f32 {
        let hour_height = zoom.map_or_else(|| self.hour_height(), |zoom| zoom.hour_height());
        let mut hour_y = time.hour() as f32 * hour_height;
        if self.timeline != TimelineType::Full {
            hour_y -= hour_height * self.timeline.lower_bound() as f32;
        }

        let y = match position {
            ScrollPosition::Top => hour_y,
            ScrollPosition::CenterVertically => hour_y - self.viewport.height / 2.0,
        };
        let max_y = self.content_size().height - self.viewport.height;
        y.min(max_y).max(0.0)
    }
}
