// Headers
// Sticky column, row and all-day headers, their backgrounds, and the current-time line

use super::error::LayoutError;
use super::source::WeekViewDataSource;
use super::WeekViewLayout;
use crate::models::element::{ElementKey, ElementKind, LayoutElement};
use crate::utils::date::time_components;
use crate::utils::geometry::{round1, Rect};

impl WeekViewLayout {
    pub(super) fn layout_column_header(&mut self, section: usize) {
        let column = self.column_for_section(section);
        let y = self.viewport.offset_y.max(0.0);
        let key = ElementKey::new(ElementKind::ColumnHeader, section, 0);
        let frame = Rect::new(column.x, y, column.width, self.settings.column_header_height);
        self.insert_element(LayoutElement::new(key, frame));
    }

    pub(super) fn layout_all_day_header(&mut self, section: usize) {
        let height = self.settings.all_day_header_height;
        if height <= 0.0 {
            return;
        }
        let column = self.column_for_section(section);
        let header_height = self.settings.column_header_height;
        let y = (self.viewport.offset_y + header_height).max(header_height);
        let key = ElementKey::new(ElementKind::AllDayHeader, section, 0);
        self.insert_element(LayoutElement::new(key, Rect::new(column.x, y, column.width, height)));
    }

    /// Row headers stick to the left edge while scrolling horizontally.
    pub(super) fn layout_row_headers(&mut self) {
        let hour_height = self.hour_height();
        let grid_min_y = self.settings.calendar_grid_min_y();
        let x = self.viewport.offset_x.max(0.0);
        let width = self.settings.row_header_width;

        for row in self.timeline.row_offsets() {
            let y = grid_min_y + hour_height * row as f32 - round1(hour_height / 2.0);
            let key = ElementKey::new(ElementKind::RowHeader, 0, row as usize);
            self.insert_element(LayoutElement::new(key, Rect::new(x, y, width, hour_height)));
        }
    }

    /// Backgrounds and corners pinned to the viewport.
    pub(super) fn layout_header_backgrounds(&mut self) {
        let offset_x = self.viewport.offset_x;
        let offset_y = self.viewport.offset_y;
        let visible_width = self.visible_width();
        let header_height = self.settings.column_header_height;
        let row_header_width = self.settings.row_header_width;

        // Stretch over the bounce area when pulled past the top.
        let background_height = header_height + if offset_y < 0.0 { -offset_y } else { 0.0 };
        self.insert_element(LayoutElement::new(
            ElementKey::new(ElementKind::ColumnHeaderBackground, 0, 0),
            Rect::new(offset_x, offset_y, visible_width, background_height),
        ));

        self.insert_element(LayoutElement::new(
            ElementKey::new(ElementKind::CornerHeader, 0, 0),
            Rect::new(offset_x, offset_y, row_header_width, header_height),
        ));

        self.insert_element(LayoutElement::new(
            ElementKey::new(ElementKind::RowHeaderBackground, 0, 0),
            Rect::new(offset_x.max(0.0), offset_y, row_header_width, self.visible_height()),
        ));

        let all_day_height = self.settings.all_day_header_height;
        if all_day_height > 0.0 {
            let y = offset_y + header_height;
            self.insert_element(LayoutElement::new(
                ElementKey::new(ElementKind::AllDayHeaderBackground, 0, 0),
                Rect::new(offset_x, y, visible_width, all_day_height),
            ));
            self.insert_element(LayoutElement::new(
                ElementKey::new(ElementKind::AllDayCorner, 0, 0),
                Rect::new(offset_x, y, row_header_width, all_day_height),
            ));
        }
    }

    /// Current-time line, drawn only in the section showing today.
    pub(super) fn layout_current_time_line(
        &mut self,
        source: &dyn WeekViewDataSource,
        section: usize,
    ) -> Result<(), LayoutError> {
        let now = self.cache.current_time(source);
        let day = self.cache.day_for_section(source, section)?;
        if day != now.date() {
            return Ok(());
        }

        let now = time_components(now);
        let column = self.column_for_section(section);
        let hour_height = self.hour_height();
        let line_height = self.settings.current_time_line_height;

        let time_y = self.settings.calendar_grid_min_y()
            + hour_height * now.hour as f32
            + self.minute_height() * now.minute as f32
            - self.time_lower_offset();
        let y = time_y - round1(self.settings.grid_thickness / 2.0) - line_height / 2.0;

        let key = ElementKey::new(ElementKind::CurrentTimeline, section, 0);
        self.insert_element(LayoutElement::new(key, Rect::new(column.x, y, column.width, line_height)));
        Ok(())
    }
}
