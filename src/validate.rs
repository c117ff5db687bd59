use crate::config::RuleConfig;
use crate::model::{Conflict, Device, Layout, Room, ValidationContext};
use crate::rules::evaluate_device;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs every rule over every device, in input order. Each device's
/// `conflicts` is overwritten wholesale; the flat list concatenates
/// per-device findings in the same order. Rules read positions only, so
/// the devices slice itself serves as the immutable pass snapshot.
///
/// Pairwise rules scan all devices and rooms per device, so a pass is
/// O(n^2) in device count and O(n*m) against rooms. Fine for per-floor
/// layouts of tens to low hundreds of devices; a spatial grid keyed by
/// system and type is the upgrade path beyond that.
pub fn validate_layout(
    rooms: &[Room],
    devices: &mut [Device],
    blueprint: Option<&str>,
    config: &RuleConfig,
) -> Vec<Conflict> {
    let per_device = {
        let ctx = ValidationContext {
            devices,
            rooms,
            blueprint,
        };
        collect_per_device(&ctx, config)
    };

    let mut flat = Vec::new();
    for (device, conflicts) in devices.iter_mut().zip(per_device) {
        flat.extend(conflicts.iter().cloned());
        device.conflicts = conflicts;
    }
    flat
}

#[cfg(not(feature = "parallel"))]
fn collect_per_device(ctx: &ValidationContext, config: &RuleConfig) -> Vec<Vec<Conflict>> {
    ctx.devices
        .iter()
        .map(|device| evaluate_device(device, ctx, config))
        .collect()
}

// Indexed collect keeps output order identical to the serial path.
#[cfg(feature = "parallel")]
fn collect_per_device(ctx: &ValidationContext, config: &RuleConfig) -> Vec<Vec<Conflict>> {
    ctx.devices
        .par_iter()
        .map(|device| evaluate_device(device, ctx, config))
        .collect()
}

/// Convenience wrapper over a whole layout.
pub fn validate(layout: &mut Layout, config: &RuleConfig) -> Vec<Conflict> {
    let Layout {
        blueprint,
        rooms,
        devices,
    } = layout;
    validate_layout(rooms, devices, blueprint.as_deref(), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ConflictKind, DeviceType, SystemKind};

    fn fixture() -> (Vec<Room>, Vec<Device>) {
        let rooms = vec![Room::new("r1", 0.0, 0.0, 240.0, 180.0)];
        let devices = vec![
            Device::new("sd-1", DeviceType::SmokeDetector, SystemKind::Fire, 2.0, 2.0),
            Device::new("sd-2", DeviceType::SmokeDetector, SystemKind::Fire, 238.0, 178.0),
            Device::new("c-1", DeviceType::Camera, SystemKind::Cctv, 120.0, 90.0),
        ];
        (rooms, devices)
    }

    #[test]
    fn conflicts_attach_to_devices_and_the_flat_list() {
        let (rooms, mut devices) = fixture();
        let flat = validate_layout(&rooms, &mut devices, None, &RuleConfig::default());
        assert_eq!(devices[0].conflicts.len(), 1);
        assert_eq!(devices[1].conflicts.len(), 1);
        assert!(devices[2].conflicts.is_empty());
        assert_eq!(flat.len(), 2);
        assert_eq!(flat[0].device_id, "sd-1");
        assert_eq!(flat[1].device_id, "sd-2");
    }

    #[test]
    fn repeat_passes_are_identical() {
        let (rooms, mut devices) = fixture();
        let config = RuleConfig::default();
        let first = validate_layout(&rooms, &mut devices, None, &config);
        let second = validate_layout(&rooms, &mut devices, None, &config);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn stale_conflicts_are_replaced_not_merged() {
        let (rooms, mut devices) = fixture();
        let config = RuleConfig::default();
        validate_layout(&rooms, &mut devices, None, &config);
        assert_eq!(devices[0].conflicts.len(), 1);

        // Fix the placement; the next pass must clear the finding.
        devices[0].x = 120.0;
        devices[0].y = 90.0;
        validate_layout(&rooms, &mut devices, None, &config);
        assert!(devices[0].conflicts.is_empty());
    }

    #[test]
    fn empty_inputs_validate_clean() {
        let mut devices: Vec<Device> = Vec::new();
        let flat = validate_layout(&[], &mut devices, None, &RuleConfig::default());
        assert!(flat.is_empty());
    }

    #[test]
    fn validate_uses_the_layout_blueprint_label() {
        let mut layout = Layout {
            blueprint: Some("Floor 2".to_string()),
            rooms: Vec::new(),
            devices: vec![Device::new(
                "c-1",
                DeviceType::Camera,
                SystemKind::Cctv,
                10.0,
                10.0,
            )],
        };
        let flat = validate(&mut layout, &RuleConfig::default());
        assert_eq!(flat.len(), 1);
        assert_eq!(flat[0].kind, ConflictKind::OutsideBoundary);
        assert!(flat[0].message.contains("Floor 2"));
    }

    #[test]
    fn well_separated_same_system_devices_never_overlap() {
        // Exactly one inch beyond the radius.
        let mut devices = vec![
            Device::new("c-1", DeviceType::Camera, SystemKind::Cctv, 0.0, 0.0),
            Device::new("c-2", DeviceType::Camera, SystemKind::Cctv, 13.0, 0.0),
        ];
        let flat = validate_layout(&[], &mut devices, None, &RuleConfig::default());
        assert!(flat.iter().all(|c| c.kind != ConflictKind::Overlap));
    }
}
