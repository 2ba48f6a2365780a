//! Error types and handling
//!
//! This module contains the error taxonomy shared by the registry and the
//! management façades. Every error here is recoverable: operations surface a
//! distinguishable failure to the caller and never terminate the process.

use thiserror::Error;

/// Errors surfaced by registry and façade operations
#[derive(Debug, Error)]
pub enum ManagementError {
    /// A user or agent with the same identifier is already registered
    #[error("participant with id '{id}' is registered already")]
    AlreadyRegistered {
        /// The duplicate identifier
        id: String,
    },

    /// No hotel matched the lookup key
    #[error("hotel '{name}' not found")]
    HotelNotFound {
        /// The name used for lookup
        name: String,
    },

    /// A booking requested more rooms than are available
    #[error("hotel does not have enough rooms: requested {requested}, available {available}")]
    InsufficientRooms {
        /// Rooms requested by the booking
        requested: i64,
        /// Rooms available at the time of the booking
        available: i64,
    },

    /// I/O error from the interactive menu layer
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization error from configuration handling
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ManagementError {
    /// Create an already-registered error
    pub fn already_registered(id: impl Into<String>) -> Self {
        Self::AlreadyRegistered { id: id.into() }
    }

    /// Create a hotel-not-found error
    pub fn hotel_not_found(name: impl Into<String>) -> Self {
        Self::HotelNotFound { name: name.into() }
    }

    /// Create an insufficient-rooms error
    pub fn insufficient_rooms(requested: i64, available: i64) -> Self {
        Self::InsufficientRooms { requested, available }
    }

    /// Check if this is a recoverable error
    ///
    /// All domain errors are recoverable by design; only I/O failures from
    /// the menu layer warrant tearing down the session.
    pub fn is_recoverable(&self) -> bool {
        match self {
            ManagementError::AlreadyRegistered { .. } => true,
            ManagementError::HotelNotFound { .. } => true,
            ManagementError::InsufficientRooms { .. } => true,
            ManagementError::IoError(_) => false,
            ManagementError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ManagementError::AlreadyRegistered { .. } => "Registration",
            ManagementError::HotelNotFound { .. } => "Lookup",
            ManagementError::InsufficientRooms { .. } => "Booking",
            ManagementError::IoError(_) => "IO",
            ManagementError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for registry and façade operations
pub type ManagementResult<T> = Result<T, ManagementError>;
