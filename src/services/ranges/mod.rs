//! Horizontal range allocation inside a column.
//!
//! Given the full span of a column and the spans already claimed by placed
//! items, compute what is still free for the next group of items.

use serde::{Deserialize, Serialize};

use crate::models::settings::EdgeInsets;

/// Closed range `[low, high]` along the horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: f32,
    pub high: f32,
}

impl AxisRange {
    pub const fn new(low: f32, high: f32) -> Self {
        Self { low, high }
    }

    pub fn width(&self) -> f32 {
        self.high - self.low
    }

    pub fn contains(&self, value: f32) -> bool {
        self.low <= value && value <= self.high
    }
}

/// Remaining free ranges of `total` once every range in `claimed` is taken.
///
/// Claimed ranges are processed left to right against the rightmost free
/// range. A claimed range only splits that range when it starts more than the
/// item margin (left + right inset) past its left edge; closer than that, it
/// just pushes the left edge to the claimed range's right edge. This avoids
/// leaving slivers narrower than the visual margin.
///
/// The result is sorted, non-overlapping, and contains no empty ranges.
pub fn available_ranges(total: AxisRange, claimed: &[AxisRange], margin: &EdgeInsets) -> Vec<AxisRange> {
    let mut available = vec![total];
    let mut sorted_claimed = claimed.to_vec();
    sorted_claimed.sort_by(|a, b| a.low.total_cmp(&b.low));

    for claimed_range in sorted_claimed {
        let Some(last) = available.last().copied() else {
            break;
        };

        // Everything right of the last free range is already taken.
        if claimed_range.low >= last.high {
            continue;
        }

        if claimed_range.low > last.low + margin.horizontal() {
            available.pop();
            available.push(AxisRange::new(last.low, claimed_range.low));
            if claimed_range.high + margin.right < last.high {
                available.push(AxisRange::new(claimed_range.high, last.high));
            }
        } else if claimed_range.high > last.low {
            available.pop();
            available.push(AxisRange::new(claimed_range.high, last.high));
        }
        // Otherwise the claimed range sits inside an already removed region.
    }

    available.retain(|range| range.width() > 0.0);
    available
}
