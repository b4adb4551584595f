// Zoom module
// Zoom levels and the hour-grid granularity they map to

use serde::{Deserialize, Serialize};

/// Spacing between horizontal grid divisions inside one hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HourGridDivision {
    #[serde(rename = "5")]
    Minutes5,
    #[default]
    #[serde(rename = "15")]
    Minutes15,
    #[serde(rename = "30")]
    Minutes30,
}

impl HourGridDivision {
    pub fn minutes(&self) -> u32 {
        match self {
            HourGridDivision::Minutes5 => 5,
            HourGridDivision::Minutes15 => 15,
            HourGridDivision::Minutes30 => 30,
        }
    }

    /// Number of divisions an hour is split into.
    pub fn divisions_per_hour(&self) -> u32 {
        60 / self.minutes()
    }

    /// Label shown next to the divider line at `division` (1-based within an hour).
    ///
    /// Only some dividers carry text so the row header stays readable.
    pub fn divider_label(&self, division: u32) -> Option<String> {
        let labelled = match self {
            HourGridDivision::Minutes30 => true,
            HourGridDivision::Minutes15 => division % 2 == 0,
            HourGridDivision::Minutes5 => division % 3 == 0,
        };
        labelled.then(|| format!(":{}", self.minutes() * division))
    }
}

/// User-selectable zoom of the time grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ZoomLevel {
    Min,
    #[default]
    Default,
    Max,
}

impl ZoomLevel {
    /// Grid division used at this zoom.
    pub fn division(&self) -> HourGridDivision {
        match self {
            ZoomLevel::Min => HourGridDivision::Minutes30,
            ZoomLevel::Default => HourGridDivision::Minutes15,
            ZoomLevel::Max => HourGridDivision::Minutes5,
        }
    }

    /// Pixel height of one hour at this zoom.
    pub fn hour_height(&self) -> f32 {
        match self {
            ZoomLevel::Min => 75.0,
            ZoomLevel::Default => 150.0,
            ZoomLevel::Max => 300.0,
        }
    }

    /// Length of a freshly created placeholder, in minutes.
    pub fn placeholder_minutes(&self) -> u32 {
        self.division().minutes()
    }

    /// Stable integer code, matching the declaration order.
    pub fn code(&self) -> i32 {
        match self {
            ZoomLevel::Min => 0,
            ZoomLevel::Default => 1,
            ZoomLevel::Max => 2,
        }
    }

    /// Unknown codes fall back to the default zoom.
    pub fn from_code(code: i32) -> Self {
        match code {
            0 => ZoomLevel::Min,
            2 => ZoomLevel::Max,
            _ => ZoomLevel::Default,
        }
    }

    pub fn zoomed_in(&self) -> Self {
        match self {
            ZoomLevel::Min => ZoomLevel::Default,
            ZoomLevel::Default | ZoomLevel::Max => ZoomLevel::Max,
        }
    }

    pub fn zoomed_out(&self) -> Self {
        match self {
            ZoomLevel::Max => ZoomLevel::Default,
            ZoomLevel::Default | ZoomLevel::Min => ZoomLevel::Min,
        }
    }
}
