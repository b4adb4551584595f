// Settings module
// Fixed dimensions of the week grid chrome and item spacing

use serde::{Deserialize, Serialize};

use crate::models::zoom::HourGridDivision;

/// Insets on the four sides of a box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeInsets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl EdgeInsets {
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Left plus right inset.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    fn is_valid(&self) -> bool {
        [self.top, self.left, self.bottom, self.right]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    pub row_header_width: f32,
    pub column_header_height: f32,
    /// Height of the all-day strip under the column headers (0 hides it).
    pub all_day_header_height: f32,
    pub hour_grid_division: HourGridDivision,
    pub grid_thickness: f32,
    pub row_header_divider_height: f32,
    pub current_time_line_height: f32,
    pub contents_margin: EdgeInsets,
    pub item_margin: EdgeInsets,
    /// Smallest height the hour rows may occupy; usually the viewport height.
    pub min_section_height: f32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            row_header_width: 44.0,
            column_header_height: 44.0,
            all_day_header_height: 0.0,
            hour_grid_division: HourGridDivision::Minutes15,
            grid_thickness: 0.5,
            row_header_divider_height: 25.0,
            current_time_line_height: 10.0,
            contents_margin: EdgeInsets::new(10.0, 0.0, 10.0, 0.0),
            item_margin: EdgeInsets::uniform(1.0),
            min_section_height: 0.0,
        }
    }
}

impl LayoutSettings {
    /// Validate that every dimension is finite and non-negative.
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("row_header_width", self.row_header_width),
            ("column_header_height", self.column_header_height),
            ("all_day_header_height", self.all_day_header_height),
            ("grid_thickness", self.grid_thickness),
            ("row_header_divider_height", self.row_header_divider_height),
            ("current_time_line_height", self.current_time_line_height),
            ("min_section_height", self.min_section_height),
        ];

        for (name, value) in sizes {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{} must be a non-negative number, got {}", name, value));
            }
        }

        if !self.contents_margin.is_valid() {
            return Err("contents_margin insets must be non-negative numbers".to_string());
        }

        if !self.item_margin.is_valid() {
            return Err("item_margin insets must be non-negative numbers".to_string());
        }

        Ok(())
    }

    /// Top of the hour grid in content coordinates.
    pub fn calendar_grid_min_y(&self) -> f32 {
        self.column_header_height + self.contents_margin.top + self.all_day_header_height
    }

    /// Left edge of the first day column in content coordinates.
    pub fn calendar_content_min_x(&self) -> f32 {
        self.row_header_width + self.contents_margin.left
    }
}
