//! Output model of a layout pass.
//!
//! Every visual element of the week grid is a [`LayoutElement`]: a frame, a
//! stacking value and a kind-specific payload. Callers render whatever
//! `elements_in_rect` hands back, ordered by `z_index`.

use serde::{Deserialize, Serialize};

use crate::models::color::RgbaColor;
use crate::models::interval::ItemIndex;
use crate::utils::geometry::Rect;

/// Items above the grid: headers and the current-time line.
pub const MIN_OVERLAY_Z: i32 = 1000;
/// Event cells. Leaves room for 900 adjusted items per section below the overlay.
pub const MIN_CELL_Z: i32 = 100;
/// Gridlines and restricted areas.
pub const MIN_BACKGROUND_Z: i32 = 0;

/// Offset applied to calendar blocks when the caller supplies no hint.
pub const DEFAULT_CALENDAR_BLOCK_OFFSET: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    EventCell,
    CalendarBlockCell,
    PlaceholderCell,
    ColumnHeader,
    ColumnHeaderBackground,
    RowHeader,
    RowHeaderBackground,
    CornerHeader,
    AllDayHeader,
    AllDayHeaderBackground,
    AllDayCorner,
    VerticalGridline,
    HorizontalGridline,
    CurrentTimeline,
    OutscreenCell,
    RestrictedArea,
    RowHeaderDivider,
}

/// Broad role of an element, mirroring how hosts usually recycle views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementCategory {
    Cell,
    Supplementary,
    Decoration,
}

impl ElementKind {
    pub fn category(&self) -> ElementCategory {
        match self {
            ElementKind::EventCell | ElementKind::CalendarBlockCell | ElementKind::PlaceholderCell => {
                ElementCategory::Cell
            }
            ElementKind::ColumnHeader
            | ElementKind::RowHeader
            | ElementKind::CornerHeader
            | ElementKind::AllDayHeader
            | ElementKind::CurrentTimeline => ElementCategory::Supplementary,
            _ => ElementCategory::Decoration,
        }
    }

    /// Base stacking value for this kind.
    ///
    /// `offset` only applies to calendar blocks, which stack by the caller's hint.
    pub fn z_index(&self, offset: i32) -> i32 {
        match self {
            ElementKind::CornerHeader | ElementKind::AllDayCorner => MIN_OVERLAY_Z + 11,
            ElementKind::AllDayHeader => MIN_OVERLAY_Z + 10,
            ElementKind::AllDayHeaderBackground => MIN_OVERLAY_Z + 9,
            ElementKind::RowHeader | ElementKind::RowHeaderDivider => MIN_OVERLAY_Z + 8,
            ElementKind::RowHeaderBackground => MIN_OVERLAY_Z + 7,
            ElementKind::ColumnHeader => MIN_OVERLAY_Z + 6,
            ElementKind::ColumnHeaderBackground => MIN_OVERLAY_Z + 5,
            ElementKind::CurrentTimeline => MIN_OVERLAY_Z + 12,
            ElementKind::HorizontalGridline => MIN_BACKGROUND_Z + 3,
            ElementKind::VerticalGridline => MIN_BACKGROUND_Z + 2,
            ElementKind::RestrictedArea => MIN_BACKGROUND_Z + 1,
            ElementKind::OutscreenCell => MIN_CELL_Z + 41,
            ElementKind::PlaceholderCell => MIN_CELL_Z + 10,
            ElementKind::CalendarBlockCell => MIN_CELL_Z + offset,
            ElementKind::EventCell => MIN_CELL_Z,
        }
    }

    pub fn base_z_index(&self) -> i32 {
        self.z_index(DEFAULT_CALENDAR_BLOCK_OFFSET)
    }
}

/// Identity of an element within one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ElementKey {
    pub kind: ElementKind,
    pub section: usize,
    pub item: usize,
}

impl ElementKey {
    pub const fn new(kind: ElementKind, section: usize, item: usize) -> Self {
        Self {
            kind,
            section,
            item,
        }
    }

    pub const fn for_item(kind: ElementKind, index: ItemIndex) -> Self {
        Self::new(kind, index.section, index.item)
    }

    pub fn index(&self) -> ItemIndex {
        ItemIndex::new(self.section, self.item)
    }
}

/// Extra data carried by decoration elements.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementPayload {
    #[default]
    None,
    /// Minute label next to a grid division.
    Divider { text: Option<String> },
    /// Out-of-view indicator strip.
    Outscreen { color: Option<RgbaColor> },
    RestrictedArea {
        title: Option<String>,
        background_color: Option<RgbaColor>,
        is_unavailability: Option<bool>,
        is_schedule_template: Option<bool>,
    },
}

/// One positioned element of the week grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutElement {
    pub key: ElementKey,
    pub frame: Rect,
    pub z_index: i32,
    pub alpha: f32,
    pub resource_index: usize,
    pub payload: ElementPayload,
}

impl LayoutElement {
    pub fn new(key: ElementKey, frame: Rect) -> Self {
        Self {
            key,
            frame,
            z_index: key.kind.base_z_index(),
            alpha: 1.0,
            resource_index: 0,
            payload: ElementPayload::None,
        }
    }

    pub fn kind(&self) -> ElementKind {
        self.key.kind
    }

    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_payload(mut self, payload: ElementPayload) -> Self {
        self.payload = payload;
        self
    }

    pub fn is_visible(&self) -> bool {
        self.alpha > 0.0
    }
}
