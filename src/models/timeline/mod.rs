// Timeline module
// Visible hour window of the time grid

use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u32 = 24;

/// Which hours of the day are visible in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TimelineType {
    /// Twelve hours from midnight.
    Short,
    /// The whole day.
    #[default]
    Full,
    /// Custom `[start_hour, end_hour)` window.
    Range { start_hour: u32, end_hour: u32 },
}

impl TimelineType {
    /// Build a custom window. Out-of-day or empty windows are rejected.
    pub fn range(start_hour: u32, end_hour: u32) -> Option<Self> {
        (start_hour < end_hour && end_hour <= HOURS_PER_DAY)
            .then_some(TimelineType::Range { start_hour, end_hour })
    }

    /// `(lower, upper)` hour bounds of the window.
    ///
    /// A malformed custom range degrades to the full day.
    pub fn time_range(&self) -> (u32, u32) {
        match *self {
            TimelineType::Short => (0, 12),
            TimelineType::Full => (0, HOURS_PER_DAY),
            TimelineType::Range {
                start_hour,
                end_hour,
            } => {
                if start_hour < end_hour && end_hour <= HOURS_PER_DAY {
                    (start_hour, end_hour)
                } else {
                    (0, HOURS_PER_DAY)
                }
            }
        }
    }

    pub fn lower_bound(&self) -> u32 {
        self.time_range().0
    }

    pub fn upper_bound(&self) -> u32 {
        self.time_range().1
    }

    /// Number of visible hours.
    pub fn duration(&self) -> u32 {
        let (lower, upper) = self.time_range();
        upper - lower
    }

    /// Hour rows relative to the top of the grid.
    pub fn row_offsets(&self) -> std::ops::Range<u32> {
        0..self.duration()
    }

    /// Hour the view scrolls to when the timeline is first shown.
    pub fn scroll_offset_hours(&self) -> u32 {
        match self {
            TimelineType::Short => 6,
            TimelineType::Full | TimelineType::Range { .. } => 0,
        }
    }

    pub fn title(&self) -> String {
        match self {
            TimelineType::Short => "12".to_string(),
            TimelineType::Full => "24".to_string(),
            TimelineType::Range { .. } => self.duration().to_string(),
        }
    }
}
