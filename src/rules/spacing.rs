use crate::geometry::distance;
use crate::model::{
    Conflict, ConflictKind, Device, DeviceType, Severity, SystemKind, ValidationContext,
};

/// Maximum code spacing in feet (travel distance for pull stations),
/// after NFPA 72. Device types without an entry are exempt from the
/// code-spacing rule.
pub fn max_spacing_ft(device_type: DeviceType) -> Option<f64> {
    match device_type {
        DeviceType::SmokeDetector => Some(30.0),
        DeviceType::HeatDetector => Some(25.0),
        DeviceType::CoDetector => Some(15.0),
        DeviceType::PullStation => Some(200.0),
        DeviceType::Strobe | DeviceType::Horn => Some(100.0),
        DeviceType::Camera
        | DeviceType::CardReader
        | DeviceType::DoorContact
        | DeviceType::MotionSensor => None,
    }
}

/// Fire-system devices with a code spacing entry must have a same-type
/// neighbor within the table distance. The nearest neighbor is found by
/// true minimum distance; a lone device of its type yields nothing, since
/// there is no spacing to measure.
pub(super) fn check_spacing(device: &Device, ctx: &ValidationContext) -> Option<Conflict> {
    if device.system != SystemKind::Fire {
        return None;
    }
    let required_ft = max_spacing_ft(device.device_type)?;

    let mut nearest: Option<(&Device, f64)> = None;
    for other in ctx.devices {
        if other.id == device.id
            || other.system != device.system
            || other.device_type != device.device_type
        {
            continue;
        }
        let gap = distance(device.x, device.y, other.x, other.y);
        match nearest {
            Some((_, best)) if gap >= best => {}
            _ => nearest = Some((other, gap)),
        }
    }
    let (other, measured) = nearest?;

    if measured <= required_ft * 12.0 {
        return None;
    }

    let label = device.device_type.label();
    Some(Conflict {
        id: Conflict::id_for(&device.id, ConflictKind::CodeSpacing, Some(&other.id)),
        device_id: device.id.clone(),
        kind: ConflictKind::CodeSpacing,
        severity: Severity::Warning,
        message: format!(
            "Nearest {} ({}) is {:.1} ft away; code maximum spacing is {:.0} ft",
            label,
            other.id,
            measured / 12.0,
            required_ft
        ),
        related_device_id: Some(other.id.clone()),
        suggestion: Some(format!(
            "Add a {} between this device and {}",
            label, other.id
        )),
        has_auto_fix: false,
    })
}
