// Module exports for models

pub mod color;
pub mod element;
pub mod interval;
pub mod restricted_area;
pub mod settings;
pub mod timeline;
pub mod zoom;
