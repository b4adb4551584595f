// Grid lines
// Day and resource separators, hour lines and division lines with their labels

use super::WeekViewLayout;
use crate::models::element::{ElementKey, ElementKind, ElementPayload, LayoutElement};
use crate::utils::geometry::{round1, Rect};

/// Alpha of the lines between hour lines.
const DIVISION_LINE_ALPHA: f32 = 0.3;
/// Gap between a divider label and the hour grid.
const DIVIDER_TRAILING_GAP: f32 = 4.0;

impl WeekViewLayout {
    /// Calendar grid width, excluding the row header and side margins.
    pub fn calendar_grid_width(&self) -> f32 {
        self.content_size().width
            - self.settings.row_header_width
            - self.settings.contents_margin.horizontal()
    }

    /// Line at the left edge of a day, plus one per resource boundary.
    pub(super) fn layout_vertical_gridlines(&mut self, section: usize) {
        let column = self.column_for_section(section);
        let thickness = self.settings.grid_thickness;
        let section_height = round1(self.hour_height() * self.timeline.duration() as f32);
        let grid_min_y = self.settings.calendar_grid_min_y();

        let key = ElementKey::new(ElementKind::VerticalGridline, section, 0);
        let frame = Rect::new(round1(column.x - thickness / 2.0), grid_min_y, thickness, section_height);
        self.insert_element(LayoutElement::new(key, frame));

        if column.resource_count() <= 1 {
            return;
        }
        let subsection_width = column.subsection_width();
        for resource_index in 1..column.resource_count() {
            let x = (column.x + (subsection_width * resource_index as f32).round_ties_even()
                - thickness / 2.0)
                .round_ties_even();
            let key = ElementKey::new(ElementKind::VerticalGridline, section, resource_index);
            let mut element = LayoutElement::new(key, Rect::new(x, grid_min_y, thickness, section_height));
            element.resource_index = resource_index;
            self.insert_element(element);
        }
    }

    /// One line per visible hour, followed by its division lines and labels.
    ///
    /// Lines span the visible width only and follow horizontal scrolling.
    pub(super) fn layout_horizontal_gridlines(&mut self) {
        let thickness = self.settings.grid_thickness;
        let content_min_x = self.settings.calendar_content_min_x();
        let grid_min_y = self.settings.calendar_grid_min_y();
        let row_header_width = self.settings.row_header_width;
        let divider_height = self.settings.row_header_divider_height;
        let hour_height = self.hour_height();
        let division_height = self.division_height();
        let division = self.hour_grid_division;

        let min_x = content_min_x.max(self.viewport.offset_x + content_min_x);
        let width = self.calendar_grid_width().min(self.visible_width());

        let mut line_index = 0;
        for hour in self.timeline.row_offsets() {
            let hour_y = grid_min_y + hour_height * hour as f32 - round1(thickness / 2.0);
            let key = ElementKey::new(ElementKind::HorizontalGridline, 0, line_index);
            self.insert_element(LayoutElement::new(key, Rect::new(min_x, hour_y, width, thickness)));
            line_index += 1;

            for step in 1..division.divisions_per_hour() {
                let y = round1(hour_y + division_height * step as f32 - thickness / 2.0);
                let key = ElementKey::new(ElementKind::HorizontalGridline, 0, line_index);
                let line = LayoutElement::new(key, Rect::new(min_x, y, width, thickness))
                    .with_alpha(DIVISION_LINE_ALPHA);
                self.insert_element(line);

                let divider_key = ElementKey::new(ElementKind::RowHeaderDivider, 0, line_index);
                let divider_frame = Rect::new(
                    min_x - row_header_width,
                    y - divider_height / 2.0,
                    row_header_width - DIVIDER_TRAILING_GAP,
                    divider_height,
                );
                let divider = LayoutElement::new(divider_key, divider_frame).with_payload(ElementPayload::Divider {
                    text: division.divider_label(step),
                });
                self.insert_element(divider);
                line_index += 1;
            }
        }
    }
}
