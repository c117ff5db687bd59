use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::model::{Conflict, Layout};
use crate::summary::{Stats, summarize};

/// Flat serializable snapshot of one validation pass, for downstream
/// consumers that want the whole picture in a single document.
#[derive(Debug, Serialize)]
pub struct ValidationReport {
    pub blueprint: Option<String>,
    pub room_count: usize,
    pub device_count: usize,
    pub devices: Vec<DeviceReport>,
    pub conflicts: Vec<Conflict>,
    pub stats: Stats,
}

#[derive(Debug, Serialize)]
pub struct DeviceReport {
    pub id: String,
    pub device_type: String,
    pub system: String,
    pub x: f64,
    pub y: f64,
    pub conflict_ids: Vec<String>,
}

impl ValidationReport {
    pub fn from_layout(layout: &Layout, conflicts: &[Conflict]) -> Self {
        let devices = layout
            .devices
            .iter()
            .map(|device| DeviceReport {
                id: device.id.clone(),
                device_type: device.device_type.as_token().to_string(),
                system: device.system.as_token().to_string(),
                x: device.x,
                y: device.y,
                conflict_ids: device.conflicts.iter().map(|c| c.id.clone()).collect(),
            })
            .collect();

        ValidationReport {
            blueprint: layout.blueprint.clone(),
            room_count: layout.rooms.len(),
            device_count: layout.devices.len(),
            devices,
            conflicts: conflicts.to_vec(),
            stats: summarize(conflicts),
        }
    }
}

pub fn write_report(path: &Path, report: &ValidationReport) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}
