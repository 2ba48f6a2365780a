//! Unique identifier types for the hotel registry
//!
//! This module contains the synthetic UUID-based identifier assigned to each
//! hotel at creation time. User and agent identifiers are caller-supplied
//! strings and live on the identity records themselves.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Synthetic identifier assigned to a hotel when it is created
///
/// The identifier exists for logging and diagnostics only. Hotel removal and
/// lookup deliberately use name/location equality instead, matching the
/// behavior callers observe (see [`crate::hotel::Hotel`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HotelId(pub Uuid);

impl HotelId {
    /// Create a new random hotel ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HotelId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HotelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HOTEL_{}", self.0.simple())
    }
}

impl Serialize for HotelId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("HOTEL_{}", self.0.simple()))
    }
}

impl<'de> Deserialize<'de> for HotelId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        if let Some(uuid_str) = s.strip_prefix("HOTEL_") {
            let uuid = Uuid::parse_str(uuid_str).map_err(serde::de::Error::custom)?;
            Ok(HotelId(uuid))
        } else {
            // Fallback: try to parse as raw UUID
            let uuid = Uuid::parse_str(&s).map_err(serde::de::Error::custom)?;
            Ok(HotelId(uuid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hotel_id_creation() {
        let id1 = HotelId::new();
        let id2 = HotelId::new();

        // IDs should be unique
        assert_ne!(id1, id2);

        // Default should create a new ID
        let id3 = HotelId::default();
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_hotel_id_display() {
        let id = HotelId::new();
        let display_str = format!("{}", id);

        // Should start with HOTEL_ prefix
        assert!(display_str.starts_with("HOTEL_"));

        // Should be 38 characters total (HOTEL_ + 32 hex chars)
        assert_eq!(display_str.len(), 38);
    }

    #[test]
    fn test_hotel_id_serialization_round_trip() {
        let id = HotelId::new();

        let json = serde_json::to_string(&id).unwrap();
        assert!(json.contains("HOTEL_"));

        let deserialized: HotelId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }

    #[test]
    fn test_hotel_id_deserialization_raw_uuid() {
        let raw_uuid = Uuid::new_v4();
        let raw_uuid_str = format!("\"{}\"", raw_uuid);

        let id: HotelId = serde_json::from_str(&raw_uuid_str).unwrap();
        assert_eq!(id.0, raw_uuid);
    }
}
