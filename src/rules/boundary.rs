use crate::lookup::containing_room;
use crate::model::{Conflict, ConflictKind, Device, Severity, ValidationContext};

/// A device outside every room is a reportable finding, not an engine
/// failure. No auto-fix: which room was intended is ambiguous.
pub(super) fn check_boundary(device: &Device, ctx: &ValidationContext) -> Option<Conflict> {
    if containing_room(device.x, device.y, ctx.rooms).is_some() {
        return None;
    }
    let message = match ctx.blueprint {
        Some(blueprint) => format!(
            "Placed at ({:.1}, {:.1}), outside every room on {}",
            device.x, device.y, blueprint
        ),
        None => format!(
            "Placed at ({:.1}, {:.1}), outside every room",
            device.x, device.y
        ),
    };
    Some(Conflict {
        id: Conflict::id_for(&device.id, ConflictKind::OutsideBoundary, None),
        device_id: device.id.clone(),
        kind: ConflictKind::OutsideBoundary,
        severity: Severity::Error,
        message,
        related_device_id: None,
        suggestion: Some("Move the device inside a room".to_string()),
        has_auto_fix: false,
    })
}
