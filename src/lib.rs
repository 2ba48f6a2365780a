//! Hotel Desk
//!
//! An in-memory hotel registry tracking hotels, their room inventory,
//! facilities, reviews and ratings, and the users and agents who interact
//! with them.
//!
//! # Overview
//!
//! The core of the library is the entity/state-management model: the
//! [`Hotel`], [`Registry`], [`User`], and [`HotelAgent`] records, their
//! invariants (room-capacity accounting, identifier uniqueness, rating
//! aggregation), and the management façades that mutate them consistently.
//! The interactive menu in [`menu`] is a thin collaborator that collects
//! field values and calls into the core; it holds no state of its own.
//!
//! ## Quick Start
//!
//! ```rust
//! use hoteldesk::hotel::Hotel;
//! use hoteldesk::identity::User;
//! use hoteldesk::management;
//! use hoteldesk::registry::Registry;
//!
//! let mut registry = Registry::new("Front Desk", "admin123");
//! registry.register_user(User::new("Alice", "u-1").unwrap())?;
//!
//! management::admin::add_hotel(&mut registry, Hotel::new("Grand", "City", 10, Vec::new()));
//!
//! let user = registry.get_user("u-1").unwrap().clone();
//! let hotel = registry.find_hotel_by_name_mut("Grand").unwrap();
//! management::user::book_room(&user, hotel, 4)?;
//! assert_eq!(hotel.available_rooms(), 6);
//! # Ok::<(), hoteldesk::management::ManagementError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Synthetic hotel identifier and session configuration
//! - [`identity`]: User and agent records, unique by identifier
//! - [`hotel`]: The hotel entity and its capacity/rating accounting
//! - [`registry`]: The authoritative hotel collection and participant sets
//! - [`management`]: Stateless admin, agent, and user operation façades
//! - [`menu`]: Interactive session driver for the binary
//! - [`logging`]: Tracing subscriber configuration
//!
//! All operations are synchronous and assume a single caller; one registry
//! instance exists per session and is passed explicitly into every façade
//! call.
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

pub mod hotel;
pub mod identity;
pub mod logging;
pub mod management;
pub mod menu;
pub mod registry;
pub mod types;

pub use hotel::Hotel;
pub use identity::{HotelAgent, User};
pub use logging::LoggingConfig;
pub use management::{ManagementError, ManagementResult};
pub use menu::Menu;
pub use registry::Registry;
pub use types::{CliArgs, HotelId, HotelSeed, MenuConfig};
