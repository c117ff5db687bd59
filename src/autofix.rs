use crate::config::RuleConfig;
use crate::geometry::{Wall, distance, nearest_wall};
use crate::lookup::containing_room;
use crate::model::{Conflict, ConflictKind, Device, ValidationContext};

/// Computes a corrected position for conflicts that support one, keyed by
/// conflict kind. Never mutates anything: the caller applies the move and
/// must re-validate, since a fix may introduce a new violation elsewhere.
pub fn auto_fix(
    conflict: &Conflict,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Option<(f64, f64)> {
    match conflict.kind {
        ConflictKind::Overlap => fix_overlap(conflict, ctx, config),
        ConflictKind::WallProximity => fix_wall(conflict, ctx, config),
        ConflictKind::CodeSpacing
        | ConflictKind::OutsideBoundary
        | ConflictKind::CoverageGap => None,
    }
}

/// Destination positions for every fixable conflict of a pass, keyed by
/// conflict id.
pub fn proposed_fixes(
    conflicts: &[Conflict],
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Vec<(String, (f64, f64))> {
    conflicts
        .iter()
        .filter(|conflict| conflict.has_auto_fix)
        .filter_map(|conflict| {
            auto_fix(conflict, ctx, config).map(|position| (conflict.id.clone(), position))
        })
        .collect()
}

fn device_by_id<'a>(ctx: &ValidationContext<'a>, id: &str) -> Option<&'a Device> {
    ctx.devices.iter().find(|device| device.id == id)
}

/// Push the device away from the overlapping device along the line
/// connecting them, to radius + clearance. Coincident devices leave the
/// direction undefined; the fixed fallback vector (1, 0) keeps the result
/// deterministic.
fn fix_overlap(
    conflict: &Conflict,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Option<(f64, f64)> {
    let device = device_by_id(ctx, &conflict.device_id)?;
    let other = device_by_id(ctx, conflict.related_device_id.as_deref()?)?;
    let target = config.overlap.radius + config.overlap.clearance;
    let gap = distance(other.x, other.y, device.x, device.y);
    let (ux, uy) = if gap == 0.0 {
        (1.0, 0.0)
    } else {
        ((device.x - other.x) / gap, (device.y - other.y) / gap)
    };
    Some((other.x + ux * target, other.y + uy * target))
}

/// Push the device perpendicular to the violated wall, to minimum +
/// clearance from it; the other axis is untouched.
fn fix_wall(
    conflict: &Conflict,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Option<(f64, f64)> {
    let device = device_by_id(ctx, &conflict.device_id)?;
    let room = containing_room(device.x, device.y, ctx.rooms)?;
    let clear = config.wall.min_distance + config.wall.clearance;
    let (wall, _) = nearest_wall(device.x, device.y, room);
    Some(match wall {
        Wall::Left => (room.x + clear, device.y),
        Wall::Right => (room.x + room.width - clear, device.y),
        Wall::Top => (device.x, room.y + clear),
        Wall::Bottom => (device.x, room.y + room.height - clear),
    })
}
