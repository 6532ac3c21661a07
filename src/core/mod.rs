//! Core network modeling functionality
//!
//! Everything here is independent of the GUI:
//!
//! - [`network`]: Segment and firewall rule records
//! - [`storage`]: Durable key-value backends
//! - [`store`]: The in-memory collections with write-through persistence
//! - [`ordering`]: Priority ordering for rule display
//! - [`topology`]: Canvas geometry and the drag state machine
//! - [`export`]: JSON/YAML configuration export
//! - [`stats`]: Dashboard summary counts
//! - [`error`]: Error types

pub mod error;
pub mod export;
pub mod network;
pub mod ordering;
pub mod stats;
pub mod storage;
pub mod store;
pub mod topology;

#[cfg(test)]
pub mod test_helpers;
