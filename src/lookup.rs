use crate::geometry::point_in_rect;
use crate::model::Room;

/// First room whose rectangle contains the point, in slice order. Rooms
/// are assumed non-overlapping in well-formed input; when they do overlap,
/// the earliest match wins.
pub fn containing_room<'a>(x: f64, y: f64, rooms: &'a [Room]) -> Option<&'a Room> {
    rooms.iter().find(|room| point_in_rect(x, y, room))
}
