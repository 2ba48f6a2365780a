//! Management façades for administrator, agent, and user operations
//!
//! Each submodule is a stateless set of operations acting on behalf of one
//! caller role. A façade validates its preconditions, applies exactly one
//! mutation to a [`crate::hotel::Hotel`] or [`crate::registry::Registry`],
//! and reports the outcome as a [`ManagementResult`]. Nothing here holds
//! state of its own; the caller resolves the target hotel through the
//! registry first and passes it in.

pub mod admin;
pub mod agent;
pub mod error;
pub mod user;

pub use error::{ManagementError, ManagementResult};
