// Week View Layout Library
// Computes frames for a multi-day, time-gridded calendar week view

pub mod models;
pub mod services;
pub mod utils;

pub use models::element::{ElementKey, ElementKind, ElementPayload, LayoutElement};
pub use models::interval::{ItemIndex, ItemKind, TimeInterval};
pub use models::settings::{EdgeInsets, LayoutSettings};
pub use models::timeline::TimelineType;
pub use models::zoom::{HourGridDivision, ZoomLevel};
pub use services::layout::{
    resolve_column_layout, ColumnGeometry, LayoutError, ScrollPosition, VerticalScale, Viewport,
    WeekViewDataSource, WeekViewLayout,
};
pub use utils::geometry::{Rect, Size};
