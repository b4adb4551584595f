//! Export of a prepared layout as JSON.
//!
//! The snapshot captures everything a host or a golden test needs to compare
//! two passes: content size, the configuration that produced it and every
//! element in key order.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::WeekViewLayout;
use crate::models::element::LayoutElement;
use crate::models::timeline::TimelineType;
use crate::models::zoom::ZoomLevel;
use crate::utils::geometry::Size;

/// Schema version for forward-compatibility checks.
const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub schema_version: u32,
    pub content_size: Size,
    pub section_width: f32,
    pub hour_height: f32,
    pub zoom_level: ZoomLevel,
    pub timeline: TimelineType,
    #[serde(default)]
    pub elements: Vec<LayoutElement>,
}

impl WeekViewLayout {
    /// Snapshot of the elements computed so far.
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            content_size: self.content_size(),
            section_width: self.section_width,
            hour_height: self.hour_height(),
            zoom_level: self.zoom,
            timeline: self.timeline,
            elements: self.elements().cloned().collect(),
        }
    }
}

pub fn write_snapshot(path: &Path, snapshot: &LayoutSnapshot) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(snapshot).context("Failed to serialise layout snapshot")?;
    fs::write(path, json)
        .with_context(|| format!("failed to write layout snapshot to {}", path.display()))?;
    Ok(())
}

pub fn read_snapshot(path: &Path) -> Result<LayoutSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout snapshot from {}", path.display()))?;
    let snapshot: LayoutSnapshot =
        serde_json::from_str(&json).context("Failed to parse layout snapshot JSON")?;

    if snapshot.schema_version > SNAPSHOT_SCHEMA_VERSION {
        anyhow::bail!(
            "Snapshot uses schema version {} but only version {} is supported",
            snapshot.schema_version,
            SNAPSHOT_SCHEMA_VERSION,
        );
    }

    Ok(snapshot)
}
