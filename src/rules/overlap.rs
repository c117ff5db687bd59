use crate::config::RuleConfig;
use crate::geometry::distance;
use crate::model::{Conflict, ConflictKind, Device, Severity, ValidationContext};

/// Two devices of the same system may not sit within the overlap radius of
/// each other. The first offender in context order is reported, not the
/// nearest; both directions of a pair are evaluated independently, so a
/// full pass still flags both devices.
pub(super) fn check_overlap(
    device: &Device,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Option<Conflict> {
    for other in ctx.devices {
        if other.id == device.id || other.system != device.system {
            continue;
        }
        let gap = distance(device.x, device.y, other.x, other.y);
        if gap < config.overlap.radius {
            return Some(Conflict {
                id: Conflict::id_for(&device.id, ConflictKind::Overlap, Some(&other.id)),
                device_id: device.id.clone(),
                kind: ConflictKind::Overlap,
                severity: Severity::Error,
                message: format!(
                    "Overlaps {} ({:.1} in apart, minimum {:.0} in)",
                    other.id, gap, config.overlap.radius
                ),
                related_device_id: Some(other.id.clone()),
                suggestion: Some(format!(
                    "Move at least {:.0} in away from {}",
                    config.overlap.radius, other.id
                )),
                has_auto_fix: true,
            });
        }
    }
    None
}
