// Interval module
// Vertical extent and horizontal slot of a single laid-out item

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Position of an item inside the caller's data: day section and item within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemIndex {
    pub section: usize,
    pub item: usize,
}

impl ItemIndex {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl std::fmt::Display for ItemIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.section, self.item)
    }
}

/// How a timed item is drawn, which decides its z-order and decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ItemKind {
    /// Regular event; gets an out-of-view indicator when scrolled away.
    #[default]
    EventCell,
    /// Blocked time; stacks by the caller's z hint.
    CalendarBlock,
    /// Tap-to-create placeholder, one grid division tall.
    Placeholder,
}

/// Calendar components of a start or end time.
///
/// `hour` is signed so it can be shifted by the lower bound of the visible
/// timeline, which may put it before the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeComponents {
    pub date: NaiveDate,
    pub hour: i32,
    pub minute: u32,
}

/// Anything with a vertical extent that can take part in overlap grouping.
pub trait VerticalSpan {
    fn span_start(&self) -> f32;
    fn span_end(&self) -> f32;
}

/// Semantic vertical extent of an event inside one column.
///
/// Offsets are minutes from the column top. Intervals with
/// `end_offset <= start_offset` are not valid and are dropped before layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub id: ItemIndex,
    pub start_offset: f32,
    pub end_offset: f32,
    pub resource_index: usize,
    pub z_hint: i32,
}

impl TimeInterval {
    /// Create an interval, returning `None` for zero-length or inverted spans.
    pub fn new(id: ItemIndex, start_offset: f32, end_offset: f32) -> Option<Self> {
        let interval = Self {
            id,
            start_offset,
            end_offset,
            resource_index: 0,
            z_hint: 0,
        };
        interval.is_valid().then_some(interval)
    }

    pub fn with_resource(mut self, resource_index: usize) -> Self {
        self.resource_index = resource_index;
        self
    }

    pub fn with_z_hint(mut self, z_hint: i32) -> Self {
        self.z_hint = z_hint;
        self
    }

    pub fn is_valid(&self) -> bool {
        self.start_offset.is_finite()
            && self.end_offset.is_finite()
            && self.end_offset > self.start_offset
    }

    pub fn duration(&self) -> f32 {
        self.end_offset - self.start_offset
    }

    /// Strict overlap: back-to-back intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start_offset < other.end_offset && other.start_offset < self.end_offset
    }
}

impl VerticalSpan for TimeInterval {
    fn span_start(&self) -> f32 {
        self.start_offset
    }

    fn span_end(&self) -> f32 {
        self.end_offset
    }
}

/// Drop intervals that cannot be laid out.
pub fn valid_intervals(intervals: impl IntoIterator<Item = TimeInterval>) -> Vec<TimeInterval> {
    intervals
        .into_iter()
        .filter(|interval| {
            let valid = interval.is_valid();
            if !valid {
                log::warn!(
                    "Dropping interval {} with non-positive duration ({} -> {})",
                    interval.id,
                    interval.start_offset,
                    interval.end_offset
                );
            }
            valid
        })
        .collect()
}
