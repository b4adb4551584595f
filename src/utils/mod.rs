// Utility modules shared by models and services

pub mod date;
pub mod geometry;
