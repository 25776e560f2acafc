//! Storage abstractions for service layer
//!
//! In-memory, process-lifetime stores. Nothing here touches the filesystem.

pub mod entity_store;

pub use entity_store::{Entity, EntityStore};
