//! Identity records for registry participants
//!
//! This module contains the [`User`] and [`HotelAgent`] value types. Both are
//! plain records carrying a display name and a caller-supplied identifier.
//! Equality and hashing consider only the identifier, so two records with the
//! same id are the same participant regardless of name.

use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// A registered guest who can book rooms and leave reviews
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Display name of the user
    pub name: String,
    /// Unique identifier chosen at registration; immutable afterwards
    id: String,
}

impl User {
    /// Create a new user record
    ///
    /// Returns `None` when the identifier is empty; every identity must carry
    /// a non-empty id.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        Some(Self { name: name.into(), id })
    }

    /// Get the unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for User {}

impl Hash for User {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A registered hotel agent with facility and room-count management rights
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelAgent {
    /// Display name of the agent
    pub name: String,
    /// Unique identifier chosen at registration; immutable afterwards
    id: String,
}

impl HotelAgent {
    /// Create a new agent record
    ///
    /// Returns `None` when the identifier is empty.
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        Some(Self { name: name.into(), id })
    }

    /// Get the unique identifier
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl PartialEq for HotelAgent {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for HotelAgent {}

impl Hash for HotelAgent {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_user_creation() {
        let user = User::new("Alice", "u-1").unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.id(), "u-1");
    }

    #[test]
    fn test_empty_id_rejected() {
        assert!(User::new("Alice", "").is_none());
        assert!(HotelAgent::new("Bob", "").is_none());
    }

    #[test]
    fn test_user_equality_is_id_based() {
        let a = User::new("Alice", "u-1").unwrap();
        let b = User::new("Alicia", "u-1").unwrap();
        let c = User::new("Alice", "u-2").unwrap();

        // Same id, different names: equal
        assert_eq!(a, b);
        // Same name, different ids: not equal
        assert_ne!(a, c);
    }

    #[test]
    fn test_agent_equality_is_id_based() {
        let a = HotelAgent::new("Bob", "a-1").unwrap();
        let b = HotelAgent::new("Robert", "a-1").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_user_hash_matches_equality() {
        let a = User::new("Alice", "u-1").unwrap();
        let b = User::new("Alicia", "u-1").unwrap();

        let mut set = HashSet::new();
        set.insert(a);
        set.insert(b); // Should not increase size

        assert_eq!(set.len(), 1);
    }
}
