//! NetSketch - network segment and firewall rule sketchpad
//!
//! A desktop editor for documenting a network's logical topology and the
//! firewall policy between its segments, with JSON/YAML export.
//!
//! # Architecture
//!
//! - [`core`] - Data model, persistence, ordering, canvas geometry and export
//! - [`config`] - User preference persistence
//! - [`utils`] - Utility functions (XDG directories, etc.)
//!
//! Nothing in this library touches real networks: CIDR blocks, ports and rule
//! endpoints are stored as labels only.

// Allow pedantic clippy warnings that are not worth fixing for this codebase
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod core;
pub mod utils;

// Re-export commonly used types
pub use core::error::{Error, Result};
pub use core::network::{Action, FirewallRule, NetworkSegment, Protocol};
pub use core::store::NetworkStore;
