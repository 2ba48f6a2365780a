//! Hotel registry and participant registration
//!
//! This module contains the [`Registry`]: the single authoritative collection
//! of hotels plus the sets of registered users and agents. One registry
//! instance exists per session; it is constructed explicitly at startup and
//! passed to every façade call rather than living in global state.
//!
//! Hotels are stored in an ordered sequence. Removal and name lookup are
//! linear scans, matching the behavior callers observe: lookup is first-match
//! by name alone, removal strips every hotel matching name + location.

use crate::hotel::Hotel;
use crate::identity::{HotelAgent, User};
use crate::management::{ManagementError, ManagementResult};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// The authoritative collection of hotels and registered participants
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    /// Display name of the administrator owning this registry
    pub name: String,
    /// Administrator secret supplied at construction
    admin_secret: String,
    /// Hotels in insertion order; duplicates by name/location are permitted
    hotels: Vec<Hotel>,
    /// Registered users, keyed by identifier
    users: HashMap<String, User>,
    /// Registered agents, keyed by identifier
    agents: HashMap<String, HotelAgent>,
}

impl Registry {
    /// Create an empty registry
    pub fn new(name: impl Into<String>, admin_secret: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin_secret: admin_secret.into(),
            hotels: Vec::new(),
            users: HashMap::new(),
            agents: HashMap::new(),
        }
    }

    /// Register a user
    ///
    /// Fails with [`ManagementError::AlreadyRegistered`] when a user with the
    /// same identifier is present; the user set is left unchanged. Uniqueness
    /// is by identifier only, so a duplicate id with a different name is
    /// still a duplicate.
    pub fn register_user(&mut self, user: User) -> ManagementResult<()> {
        if self.users.contains_key(user.id()) {
            warn!(id = user.id(), "user is registered already");
            return Err(ManagementError::already_registered(user.id()));
        }
        info!(id = user.id(), name = %user.name, "user registered");
        self.users.insert(user.id().to_string(), user);
        Ok(())
    }

    /// Register a hotel agent; identical contract to [`Registry::register_user`]
    pub fn register_agent(&mut self, agent: HotelAgent) -> ManagementResult<()> {
        if self.agents.contains_key(agent.id()) {
            warn!(id = agent.id(), "agent is registered already");
            return Err(ManagementError::already_registered(agent.id()));
        }
        info!(id = agent.id(), name = %agent.name, "agent registered");
        self.agents.insert(agent.id().to_string(), agent);
        Ok(())
    }

    /// Append a hotel to the sequence
    ///
    /// Unconditional: duplicate names and locations are permitted here.
    /// Uniqueness is only consulted later by equality-based removal.
    pub fn add_hotel(&mut self, hotel: Hotel) {
        info!(hotel = %hotel.id, name = %hotel.name, location = %hotel.location, "hotel added");
        self.hotels.push(hotel);
    }

    /// Remove every hotel matching the given hotel's name and location
    ///
    /// Returns the number of hotels removed. Zero matches is a no-op, not an
    /// error; the sequence keeps its length and order.
    pub fn remove_hotel(&mut self, hotel: &Hotel) -> usize {
        let before = self.hotels.len();
        self.hotels.retain(|h| !h.same_entity(hotel));
        let removed = before - self.hotels.len();
        if removed > 0 {
            info!(name = %hotel.name, location = %hotel.location, removed, "hotels removed");
        }
        removed
    }

    /// Find the first hotel with the given name
    ///
    /// Lookup considers the name alone, not the location; when duplicates
    /// exist the earliest-added hotel wins. Absence is a distinct outcome the
    /// caller surfaces as [`ManagementError::HotelNotFound`].
    pub fn find_hotel_by_name(&self, name: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.name == name)
    }

    /// Mutable variant of [`Registry::find_hotel_by_name`]
    pub fn find_hotel_by_name_mut(&mut self, name: &str) -> Option<&mut Hotel> {
        self.hotels.iter_mut().find(|h| h.name == name)
    }

    /// All hotels in insertion order
    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Number of registered users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of registered agents
    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// Look up a registered user by identifier
    pub fn get_user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    /// Look up a registered agent by identifier
    pub fn get_agent(&self, id: &str) -> Option<&HotelAgent> {
        self.agents.get(id)
    }

    /// Check the administrator secret supplied at construction
    pub fn verify_admin_secret(&self, secret: &str) -> bool {
        self.admin_secret == secret
    }
}
