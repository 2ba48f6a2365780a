//! Administrator operations
//!
//! Thin pass-throughs over hotel and registry mutations. No precondition is
//! enforced beyond what the target types already enforce themselves.

use crate::hotel::Hotel;
use crate::registry::Registry;

/// Overwrite a hotel's total room count
///
/// Inherits the permissive contract of [`Hotel::set_room_count`]: no
/// validation against the occupied count.
pub fn update_room_count(hotel: &mut Hotel, rooms: i64) {
    hotel.set_room_count(rooms);
}

/// Append a facility to a hotel
pub fn add_facility(hotel: &mut Hotel, facility: impl Into<String>) {
    hotel.add_facility(facility);
}

/// Add a hotel to the registry
///
/// Unconditional append; duplicate names and locations are permitted.
pub fn add_hotel(registry: &mut Registry, hotel: Hotel) {
    registry.add_hotel(hotel);
}

/// Remove every hotel matching the given hotel's name and location
///
/// Returns the number removed; zero matches is a no-op.
pub fn remove_hotel(registry: &mut Registry, hotel: &Hotel) -> usize {
    registry.remove_hotel(hotel)
}
