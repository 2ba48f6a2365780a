//! User operations: booking, check-out, ratings, and reviews
//!
//! The booking path is the one façade that enforces a real precondition:
//! capacity is checked here, not in [`Hotel::check_in`], so a failed booking
//! leaves the hotel completely untouched.

use crate::hotel::Hotel;
use crate::identity::User;
use crate::management::{ManagementError, ManagementResult};
use tracing::{info, warn};

/// Book rooms at a hotel for a user
///
/// Fails with [`ManagementError::InsufficientRooms`] when the hotel has fewer
/// available rooms than requested; no state is mutated on the failure path.
/// On success the user is checked in and the occupied count grows by `rooms`.
pub fn book_room(user: &User, hotel: &mut Hotel, rooms: i64) -> ManagementResult<()> {
    let available = hotel.available_rooms();
    if available < rooms {
        warn!(
            hotel = %hotel.id,
            user = user.id(),
            requested = rooms,
            available,
            "booking rejected"
        );
        return Err(ManagementError::insufficient_rooms(rooms, available));
    }
    hotel.check_in(user.clone(), rooms);
    info!(hotel = %hotel.id, user = user.id(), rooms, "booking confirmed");
    Ok(())
}

/// Check a user out of a hotel
///
/// Delegates directly to [`Hotel::check_out`]: every stay of the user is
/// removed and `rooms` is subtracted once. No validation that the user was
/// actually checked in with that exact room count.
pub fn check_out(user: &User, hotel: &mut Hotel, rooms: i64) {
    hotel.check_out(user, rooms);
    info!(hotel = %hotel.id, user = user.id(), rooms, "check-out processed");
}

/// Submit a rating and a review in one interaction
///
/// The rating is folded into the aggregate before the review is appended;
/// the order matters to the aggregation rule and must not be swapped.
pub fn rate_and_review(hotel: &mut Hotel, rating: i64, review: impl Into<String>) {
    hotel.submit_rating(rating);
    hotel.submit_review(review);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guest(id: &str) -> User {
        User::new("Guest", id).unwrap()
    }

    #[test]
    fn test_booking_within_capacity() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());
        book_room(&guest("u-1"), &mut hotel, 4).unwrap();

        assert_eq!(hotel.occupied_rooms(), 4);
        assert_eq!(hotel.checked_in_users().len(), 1);
    }

    #[test]
    fn test_booking_over_capacity_fails_without_mutation() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());
        book_room(&guest("u-1"), &mut hotel, 4).unwrap();

        let result = book_room(&guest("u-2"), &mut hotel, 8);
        match result {
            Err(ManagementError::InsufficientRooms { requested, available }) => {
                assert_eq!(requested, 8);
                assert_eq!(available, 6);
            }
            other => panic!("expected InsufficientRooms, got {:?}", other),
        }

        // State unchanged from after the first booking
        assert_eq!(hotel.occupied_rooms(), 4);
        assert_eq!(hotel.checked_in_users().len(), 1);
    }

    #[test]
    fn test_booking_exact_capacity_succeeds() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());
        book_room(&guest("u-1"), &mut hotel, 10).unwrap();
        assert_eq!(hotel.available_rooms(), 0);
    }

    #[test]
    fn test_book_then_check_out_restores_count() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());
        let user = guest("u-1");

        book_room(&user, &mut hotel, 4).unwrap();
        check_out(&user, &mut hotel, 4);

        assert_eq!(hotel.occupied_rooms(), 0);
        assert!(hotel.checked_in_users().is_empty());
    }

    #[test]
    fn test_check_out_without_booking_is_noop() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());
        check_out(&guest("u-1"), &mut hotel, 3);
        assert_eq!(hotel.occupied_rooms(), 0);
    }

    #[test]
    fn test_rate_and_review_order() {
        let mut hotel = Hotel::new("Grand", "City", 10, Vec::new());

        rate_and_review(&mut hotel, 4, "great");
        assert_eq!(hotel.rating(), 4);

        rate_and_review(&mut hotel, 2, "ok");
        assert_eq!(hotel.rating(), 3);
        assert_eq!(hotel.reviews().len(), 2);
    }
}
