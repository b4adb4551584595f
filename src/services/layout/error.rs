use thiserror::Error;

use crate::models::interval::ItemIndex;

/// Caller contract violations that abort a layout pass.
///
/// Degenerate geometry (empty durations, zero widths) is never reported here;
/// the affected element is skipped instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("data source returned no day for section {section}")]
    MissingDay { section: usize },

    #[error("data source returned no start time for item {0}")]
    MissingStartTime(ItemIndex),

    #[error("data source returned no end time for item {0}")]
    MissingEndTime(ItemIndex),

    #[error("invalid layout settings: {0}")]
    InvalidSettings(String),
}
