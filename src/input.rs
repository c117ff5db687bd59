use std::collections::HashSet;
use std::path::Path;

use anyhow::Context;
use thiserror::Error;

use crate::model::Layout;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("device id may not be empty")]
    EmptyDeviceId,
    #[error("duplicate device id {id}")]
    DuplicateDeviceId { id: String },
    #[error("device {device}: coordinates must be finite")]
    NonFiniteCoordinate { device: String },
    #[error("room {id}: extents must be finite and positive")]
    DegenerateRoom { id: String },
}

/// Parses and sanity-checks a layout produced by the placement editor or
/// the placement-suggestion service. Geometry findings are not errors;
/// only structurally unusable input is rejected here.
pub fn parse_layout(raw: &str) -> Result<Layout, LayoutError> {
    let layout: Layout = serde_json::from_str(raw)?;
    check_layout(&layout)?;
    Ok(layout)
}

pub fn load_layout(path: &Path) -> anyhow::Result<Layout> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read layout {}", path.display()))?;
    let layout =
        parse_layout(&raw).with_context(|| format!("invalid layout {}", path.display()))?;
    Ok(layout)
}

/// Structural sanity checks for a layout, independent of how it was built.
/// JSON input runs through this via `parse_layout`; callers constructing
/// devices in process (the placement editor, test fixtures) can call it
/// directly before validating.
pub fn check_layout(layout: &Layout) -> Result<(), LayoutError> {
    let mut seen = HashSet::new();
    for device in &layout.devices {
        if device.id.is_empty() {
            return Err(LayoutError::EmptyDeviceId);
        }
        if !seen.insert(device.id.as_str()) {
            return Err(LayoutError::DuplicateDeviceId {
                id: device.id.clone(),
            });
        }
        if !device.x.is_finite() || !device.y.is_finite() {
            return Err(LayoutError::NonFiniteCoordinate {
                device: device.id.clone(),
            });
        }
    }
    for room in &layout.rooms {
        let finite = room.x.is_finite() && room.y.is_finite();
        if !finite || !(room.width > 0.0) || !(room.height > 0.0) {
            return Err(LayoutError::DegenerateRoom {
                id: room.id.clone(),
            });
        }
    }
    Ok(())
}
