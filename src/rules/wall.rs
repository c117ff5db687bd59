use crate::config::RuleConfig;
use crate::geometry::nearest_wall;
use crate::lookup::containing_room;
use crate::model::{Conflict, ConflictKind, Device, Severity, ValidationContext};

/// Devices must keep a minimum perpendicular clearance from every wall of
/// their containing room. A device with no containing room yields nothing
/// here; boundary containment covers that case.
pub(super) fn check_wall(
    device: &Device,
    ctx: &ValidationContext,
    config: &RuleConfig,
) -> Option<Conflict> {
    let room = containing_room(device.x, device.y, ctx.rooms)?;
    let (wall, gap) = nearest_wall(device.x, device.y, room);
    if gap >= config.wall.min_distance {
        return None;
    }
    Some(Conflict {
        id: Conflict::id_for(&device.id, ConflictKind::WallProximity, None),
        device_id: device.id.clone(),
        kind: ConflictKind::WallProximity,
        severity: Severity::Error,
        message: format!(
            "Only {:.1} in from the {} wall of {} (minimum {:.0} in)",
            gap,
            wall.label(),
            room.display_name(),
            config.wall.min_distance
        ),
        related_device_id: None,
        suggestion: Some(format!(
            "Keep at least {:.0} in of wall clearance",
            config.wall.min_distance
        )),
        has_auto_fix: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DeviceType, Room, SystemKind};

    fn smoke(id: &str, x: f64, y: f64) -> Device {
        Device::new(id, DeviceType::SmokeDetector, SystemKind::Fire, x, y)
    }

    fn ctx<'a>(devices: &'a [Device], rooms: &'a [Room]) -> ValidationContext<'a> {
        ValidationContext {
            devices,
            rooms,
            blueprint: None,
        }
    }

    #[test]
    fn flags_devices_hugging_a_wall() {
        let rooms = vec![Room::new("r1", 0.0, 0.0, 240.0, 180.0)];
        let devices = vec![smoke("sd-1", 2.0, 90.0)];
        let conflict =
            check_wall(&devices[0], &ctx(&devices, &rooms), &RuleConfig::default()).unwrap();
        assert_eq!(conflict.severity, Severity::Error);
        assert!(conflict.has_auto_fix);
        assert!(conflict.message.contains("left wall"));
        assert!(conflict.message.contains("2.0 in"));
        assert!(conflict.message.contains("4 in"));
    }

    #[test]
    fn exact_minimum_is_compliant() {
        let rooms = vec![Room::new("r1", 0.0, 0.0, 240.0, 180.0)];
        let devices = vec![smoke("sd-1", 4.0, 90.0)];
        assert!(check_wall(&devices[0], &ctx(&devices, &rooms), &RuleConfig::default()).is_none());
    }

    #[test]
    fn tie_breaks_follow_wall_order() {
        let rooms = vec![Room::new("r1", 0.0, 0.0, 240.0, 180.0)];
        let corner = vec![smoke("sd-1", 3.0, 3.0)];
        let conflict =
            check_wall(&corner[0], &ctx(&corner, &rooms), &RuleConfig::default()).unwrap();
        assert!(conflict.message.contains("left wall"));

        let opposite = vec![smoke("sd-2", 237.0, 177.0)];
        let conflict =
            check_wall(&opposite[0], &ctx(&opposite, &rooms), &RuleConfig::default()).unwrap();
        assert!(conflict.message.contains("right wall"));
    }

    #[test]
    fn no_containing_room_yields_nothing() {
        let rooms = vec![Room::new("r1", 0.0, 0.0, 240.0, 180.0)];
        let devices = vec![smoke("sd-1", 500.0, 500.0)];
        assert!(check_wall(&devices[0], &ctx(&devices, &rooms), &RuleConfig::default()).is_none());
    }

    #[test]
    fn room_names_appear_in_messages() {
        let mut room = Room::new("r1", 0.0, 0.0, 240.0, 180.0);
        room.name = "Server Room".to_string();
        let rooms = vec![room];
        let devices = vec![smoke("sd-1", 1.0, 90.0)];
        let conflict =
            check_wall(&devices[0], &ctx(&devices, &rooms), &RuleConfig::default()).unwrap();
        assert!(conflict.message.contains("Server Room"));
    }
}
