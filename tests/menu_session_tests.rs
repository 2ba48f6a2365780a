//! End-to-end scripted menu sessions
//!
//! Drives the full menu loop with in-memory buffers, covering one complete
//! admin / user / agent interaction the way a terminal session would.

use hoteldesk::hotel::Hotel;
use hoteldesk::menu::Menu;
use hoteldesk::registry::Registry;
use std::io::Cursor;

fn run_session(script: &str, registry: &mut Registry) -> String {
    let input = Cursor::new(script.to_string());
    let mut output = Vec::new();
    Menu::new(input, &mut output).run(registry).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_full_session_across_all_roles() {
    let mut registry = Registry::new("Front Desk", "admin123");

    let script = concat!(
        // Admin: create the hotel with two facilities
        "1\n1\nGrand\nCity\n10\nPool\nWifi\ndone\n0\n",
        // User Alice: book 4 rooms, rate and review
        "2\nAlice\nu-1\n1\nGrand\n4\n3\nGrand\n4\ncomfortable\n0\n",
        // Agent Bob: add a facility
        "3\nBob\na-1\n2\nGrand\nParking\n0\n",
        // User Alice returns: duplicate registration is rejected
        "2\nAlice\nu-1\n",
        "0\n",
    );

    let output = run_session(script, &mut registry);

    assert!(output.contains("Hotel added."));
    assert!(output.contains("Booking confirmed."));
    assert!(output.contains("Thank you for your feedback."));
    assert!(output.contains("Facility added."));
    assert!(output.contains("User is registered already"));

    let hotel = registry.find_hotel_by_name("Grand").unwrap();
    assert_eq!(hotel.occupied_rooms(), 4);
    assert_eq!(hotel.rating(), 4);
    assert_eq!(hotel.reviews(), &["comfortable".to_string()]);
    assert_eq!(
        hotel.facilities(),
        &["Pool".to_string(), "Wifi".to_string(), "Parking".to_string()]
    );
    assert_eq!(registry.user_count(), 1);
    assert_eq!(registry.agent_count(), 1);
}

#[test]
fn test_session_against_seeded_registry() {
    let mut registry = Registry::new("Front Desk", "admin123");
    registry.add_hotel(Hotel::new("Grand", "City", 2, Vec::new()));

    // Two users compete for two rooms; the second booking must fail and
    // leave the seeded hotel at one occupied room.
    let script = concat!(
        "2\nAlice\nu-1\n1\nGrand\n1\n0\n",
        "2\nBob\nu-2\n1\nGrand\n2\n0\n",
        "0\n",
    );
    let output = run_session(script, &mut registry);

    assert!(output.contains("Booking confirmed."));
    assert!(output.contains("Hotel does not have enough rooms"));
    assert_eq!(registry.find_hotel_by_name("Grand").unwrap().occupied_rooms(), 1);
}

#[test]
fn test_admin_remove_strips_duplicates_in_session() {
    let mut registry = Registry::new("Front Desk", "admin123");
    registry.add_hotel(Hotel::new("Grand", "City", 10, Vec::new()));
    registry.add_hotel(Hotel::new("Grand", "City", 4, Vec::new()));
    registry.add_hotel(Hotel::new("Plaza", "City", 6, Vec::new()));

    let script = "1\n2\nGrand\n0\n0\n";
    let output = run_session(script, &mut registry);

    assert!(output.contains("Removed 2 hotel(s)."));
    assert_eq!(registry.hotels().len(), 1);
    assert_eq!(registry.hotels()[0].name, "Plaza");
}
