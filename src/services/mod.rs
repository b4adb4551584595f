// Service module exports
// Overlap grouping, range allocation, the layout resolver and settings storage

pub mod layout;
pub mod overlap;
pub mod ranges;
pub mod settings;
