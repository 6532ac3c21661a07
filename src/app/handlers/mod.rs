//! Message handlers organized by domain
//!
//! This module contains the message handlers called from `State::update()`,
//! organized by functional domain.

pub mod export;
pub mod rules;
pub mod segments;
pub mod topology;
pub mod ui_state;

#[cfg(test)]
pub mod test_utils;

// Re-export all handlers for clean imports in app/mod.rs
pub(crate) use export::*;
pub(crate) use rules::*;
pub(crate) use segments::*;
pub(crate) use topology::*;
pub(crate) use ui_state::*;
