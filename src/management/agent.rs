//! Hotel agent operations
//!
//! Agents hold the same mutation rights over room counts and facilities as
//! administrators; the two façades differ only in which caller role invokes
//! them. Agents cannot add or remove hotels.

use crate::hotel::Hotel;

/// Overwrite a hotel's total room count; same contract as the admin façade
pub fn update_room_count(hotel: &mut Hotel, rooms: i64) {
    hotel.set_room_count(rooms);
}

/// Append a facility to a hotel; same contract as the admin façade
pub fn add_facility(hotel: &mut Hotel, facility: impl Into<String>) {
    hotel.add_facility(facility);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_operations_match_admin_contract() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());

        update_room_count(&mut hotel, 3);
        add_facility(&mut hotel, "Parking");

        assert_eq!(hotel.total_rooms(), 3);
        assert_eq!(hotel.facilities(), &["Parking".to_string()]);
    }
}
