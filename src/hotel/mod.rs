//! Hotel entity and room-capacity accounting
//!
//! This module contains the [`Hotel`] struct: room counters, the facility
//! list, the review/rating aggregate, and the multiset of currently
//! checked-in users.
//!
//! Two hotels are considered the same entity when both `name` and `location`
//! match; that equality drives removal from the registry. The synthetic
//! [`HotelId`] is assigned at creation and used only for logging.

use crate::identity::User;
use crate::types::HotelId;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use tracing::debug;

/// A hotel with room inventory, facilities, reviews, and checked-in guests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hotel {
    /// Synthetic identifier, assigned at creation (diagnostics only)
    pub id: HotelId,
    /// Hotel name, used for lookup by the menu layer
    pub name: String,
    /// Hotel location; participates in entity equality together with `name`
    pub location: String,
    /// Total room count; writable without validation via [`Hotel::set_room_count`]
    total_rooms: i64,
    /// Rooms currently occupied by checked-in guests
    occupied_rooms: i64,
    /// Integer running average of submitted ratings
    rating: i64,
    /// Review texts in submission order
    reviews: Vec<String>,
    /// Facility names in insertion order; duplicates allowed
    facilities: Vec<String>,
    /// Guests currently checked in; one entry per check-in, copies not references
    checked_in_users: Vec<User>,
}

impl Hotel {
    /// Create a new hotel with no occupied rooms, no reviews, and rating 0
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        total_rooms: i64,
        facilities: Vec<String>,
    ) -> Self {
        Self {
            id: HotelId::new(),
            name: name.into(),
            location: location.into(),
            total_rooms,
            occupied_rooms: 0,
            rating: 0,
            reviews: Vec::new(),
            facilities,
            checked_in_users: Vec::new(),
        }
    }

    /// Total room count
    pub fn total_rooms(&self) -> i64 {
        self.total_rooms
    }

    /// Rooms currently occupied
    pub fn occupied_rooms(&self) -> i64 {
        self.occupied_rooms
    }

    /// Rooms still available: `total_rooms - occupied_rooms`
    ///
    /// Always derived, never stored. Can be negative after a permissive
    /// [`Hotel::set_room_count`] lowered the total below the occupied count.
    pub fn available_rooms(&self) -> i64 {
        self.total_rooms - self.occupied_rooms
    }

    /// Current integer rating aggregate
    pub fn rating(&self) -> i64 {
        self.rating
    }

    /// Review texts in submission order
    pub fn reviews(&self) -> &[String] {
        &self.reviews
    }

    /// Facility names in insertion order
    pub fn facilities(&self) -> &[String] {
        &self.facilities
    }

    /// Guests currently checked in (one entry per check-in)
    pub fn checked_in_users(&self) -> &[User] {
        &self.checked_in_users
    }

    /// Overwrite the total room count
    ///
    /// Deliberately does not validate `n` against `occupied_rooms`, so the
    /// available-room count can go negative. Callers wanting a stricter
    /// contract must check before calling.
    pub fn set_room_count(&mut self, n: i64) {
        debug!(hotel = %self.id, total_rooms = n, "room count updated");
        self.total_rooms = n;
    }

    /// Append a facility name; duplicates allowed, no normalization
    pub fn add_facility(&mut self, facility: impl Into<String>) {
        self.facilities.push(facility.into());
    }

    /// Append a review text
    ///
    /// Independent of [`Hotel::submit_rating`]; a caller may submit a review
    /// without a rating or vice versa.
    pub fn submit_review(&mut self, review: impl Into<String>) {
        self.reviews.push(review.into());
    }

    /// Fold a new rating into the running integer average
    ///
    /// The weight denominator is the review count at the time of the call,
    /// before any review from the same interaction is appended, and the
    /// division truncates. Starting from rating 0 with no reviews, submitting
    /// 4 then 2 (each followed by a review) yields 4 then 3. This exact
    /// aggregation is observable behavior and must not change.
    pub fn submit_rating(&mut self, value: i64) {
        let weight = self.reviews.len() as i64;
        self.rating = (self.rating * weight + value) / (weight + 1);
    }

    /// Record a check-in: append the guest and add `rooms` to the occupied count
    ///
    /// Capacity checking is the caller's precondition, not this operation's
    /// postcondition; [`crate::management::user::book_room`] performs it.
    /// Calling this directly bypasses capacity enforcement.
    pub fn check_in(&mut self, user: User, rooms: i64) {
        self.checked_in_users.push(user);
        self.occupied_rooms += rooms;
    }

    /// Record a check-out: remove every stay of the guest, subtract `rooms` once
    ///
    /// All occurrences of the user (matched by identity) are removed; the
    /// occupied count is decremented by `rooms` only when at least one
    /// occurrence was removed. A guest never present is a no-op. The caller
    /// must pass a room count consistent with what was booked; mismatches
    /// silently desynchronize the occupied counter.
    pub fn check_out(&mut self, user: &User, rooms: i64) {
        let before = self.checked_in_users.len();
        self.checked_in_users.retain(|u| u != user);
        if self.checked_in_users.len() < before {
            self.occupied_rooms -= rooms;
        }
    }

    /// Check whether this hotel is the same entity as another
    ///
    /// Entity identity is `name` + `location`; the synthetic id does not
    /// participate. Registry removal removes every hotel matching the pair.
    pub fn same_entity(&self, other: &Hotel) -> bool {
        self.name == other.name && self.location == other.location
    }

    /// Render a text summary of the hotel for display
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Hotel name: {}", self.name);
        let _ = writeln!(out, "Hotel location: {}", self.location);
        let _ = writeln!(out, "Number of available rooms: {}", self.available_rooms());
        let _ = writeln!(out, "Rating: {} stars", self.rating);
        let _ = writeln!(out, "Reviews:");
        for review in &self.reviews {
            let _ = writeln!(out, "{}", review);
        }
        let _ = writeln!(out, "Facilities:");
        for facility in &self.facilities {
            let _ = writeln!(out, "{}", facility);
        }
        out
    }
}
