// Restricted area module
// Time bands a resource cannot be booked in (breaks, schedule templates)

use serde::{Deserialize, Serialize};

use crate::models::color::RgbaColor;

/// A shaded band drawn behind the items of one resource line.
///
/// Times are seconds from the start of the section's day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RestrictedArea {
    pub start_seconds: f32,
    pub end_seconds: f32,
    pub title: Option<String>,
    pub background_color: Option<RgbaColor>,
    pub is_unavailability: Option<bool>,
    pub is_schedule_template: Option<bool>,
    pub location_id: Option<i64>,
}

impl RestrictedArea {
    pub fn new(start_seconds: f32, end_seconds: f32) -> Self {
        Self {
            start_seconds,
            end_seconds,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_background_color(mut self, color: RgbaColor) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Copy of this area covering a different time span.
    pub fn updated(&self, start_seconds: f32, end_seconds: f32) -> Self {
        Self {
            start_seconds,
            end_seconds,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.end_seconds > self.start_seconds)
    }
}
