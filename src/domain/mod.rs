//! Domain types and DTOs
//!
//! Entities are serialized camelCase, matching the dashboard client.

pub mod bid_events;
pub mod items;
pub mod projects;

// Re-export commonly used types
pub use bid_events::*;
pub use items::*;
pub use projects::*;
