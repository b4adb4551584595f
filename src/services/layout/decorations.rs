// Decorations
// Out-of-view indicators for event cells and restricted-area bands

use super::items::{ColumnGeometry, PlacedItem};
use super::source::WeekViewDataSource;
use super::WeekViewLayout;
use crate::models::element::{ElementKey, ElementKind, ElementPayload, LayoutElement};
use crate::utils::geometry::Rect;

/// Distance into the viewport an item must reach to count as visible.
const OUTSCREEN_INSET: f32 = 20.0;
const OUTSCREEN_PADDING: f32 = 4.0;
const OUTSCREEN_HEIGHT: f32 = 5.0;

/// Where an event sits relative to the visible part of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutscreenPosition {
    Top,
    Center,
    Bottom,
}

impl WeekViewLayout {
    pub fn outscreen_position(&self, frame: &Rect) -> OutscreenPosition {
        let viewport = &self.viewport;
        if frame.min_y() > viewport.offset_y + viewport.height - OUTSCREEN_INSET {
            OutscreenPosition::Bottom
        } else if frame.max_y() < viewport.offset_y + self.settings.column_header_height + OUTSCREEN_INSET {
            OutscreenPosition::Top
        } else {
            OutscreenPosition::Center
        }
    }

    /// Pin a thin strip to the top or bottom edge of the viewport for an event
    /// scrolled out of view. Visible events have no indicator.
    pub(super) fn layout_outscreen_indicator(
        &mut self,
        source: &dyn WeekViewDataSource,
        item: &PlacedItem,
        column: &ColumnGeometry,
    ) {
        let key = ElementKey::for_item(ElementKind::OutscreenCell, item.index);
        if self.viewport.is_empty() {
            self.elements.remove(&key);
            return;
        }

        let base_z = ElementKind::OutscreenCell.base_z_index();
        let offset_y = self.viewport.offset_y;
        let (y, z_index) = match self.outscreen_position(&item.frame) {
            OutscreenPosition::Top => (
                offset_y + OUTSCREEN_PADDING + self.settings.column_header_height,
                base_z + item.index.item as i32,
            ),
            OutscreenPosition::Bottom => (
                offset_y + self.viewport.height - OUTSCREEN_PADDING - OUTSCREEN_HEIGHT,
                base_z - item.index.item as i32,
            ),
            OutscreenPosition::Center => {
                self.elements.remove(&key);
                return;
            }
        };

        let frame = Rect::new(item.frame.min_x(), y, column.subsection_width(), OUTSCREEN_HEIGHT);
        let mut element = LayoutElement::new(key, frame)
            .with_z_index(z_index)
            .with_payload(ElementPayload::Outscreen {
                color: source.outside_screen_color(item.index),
            });
        element.resource_index = item.resource_index;
        self.insert_element(element);
    }

    /// Shaded bands for each restricted line of a section.
    ///
    /// Skipped while an item is being dragged so the bands do not flicker
    /// under the moving cell.
    pub(super) fn layout_restricted_areas(&mut self, source: &dyn WeekViewDataSource, section: usize) {
        if self.dragging {
            return;
        }

        let column = self.column_for_section(section);
        let subsection_width = column.subsection_width();
        let scale = self.vertical_scale();
        let lower_offset = self.time_lower_offset();

        for line in 0..source.number_of_restricted_lines(section) {
            let min_x = (column.x + (subsection_width * line as f32).round_ties_even()).round_ties_even();

            for (position, area) in source.restricted_areas(section, line).into_iter().enumerate() {
                if area.is_empty() {
                    log::debug!(
                        "Skipping empty restricted area {} on line {} of section {}",
                        position,
                        line,
                        section
                    );
                    continue;
                }

                let min_y = area.start_seconds / 60.0 * scale.minute_height + scale.grid_min_y - lower_offset;
                let max_y = area.end_seconds / 60.0 * scale.minute_height + scale.grid_min_y - lower_offset;
                let key = ElementKey::new(ElementKind::RestrictedArea, section, line * 100 + position);

                let mut element = LayoutElement::new(key, Rect::new(min_x, min_y, subsection_width, max_y - min_y))
                    .with_payload(ElementPayload::RestrictedArea {
                        title: area.title,
                        background_color: area.background_color,
                        is_unavailability: area.is_unavailability,
                        is_schedule_template: area.is_schedule_template,
                    });
                element.resource_index = line;
                self.insert_element(element);
            }
        }
    }
}
