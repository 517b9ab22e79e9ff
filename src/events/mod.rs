// src/events/mod.rs
// =============================================================================
// This module owns the shape of GitHub activity events.
//
// Submodules:
// - model: The Event data structures and JSON decoding
// - group: Partitioning decoded events into pushes and stars
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

mod group;
mod model;

// Re-export public items from submodules
// This lets users write `events::decode_events()` instead of
// `events::model::decode_events()`
pub use group::{group_events, EventGroup, PushSummary};
pub use model::{decode_events, DecodeError, Event, Payload, Repo};
