//! Shared test utilities for handler modules
//!
//! Provides common test helpers to avoid duplication across handler test suites.

use crate::app::{LaunchOptions, State};
use uuid::Uuid;

/// State over in-memory storage
pub fn create_test_state() -> State {
    State::new(LaunchOptions {
        ephemeral: true,
        ..LaunchOptions::default()
    })
    .0
}

/// State holding one segment at the first staggered position (100, 100)
pub fn create_test_state_with_segment() -> (State, Uuid) {
    let mut state = create_test_state();
    crate::app::handlers::handle_add_segment_clicked(&mut state);
    fill_segment_form(&mut state, "LAN", "192.168.1.0/24", "Internal Network");
    crate::app::handlers::handle_save_segment_form(&mut state);
    let id = state.store.segments()[0].id;
    (state, id)
}

pub fn fill_segment_form(state: &mut State, name: &str, cidr: &str, role: &str) {
    let form = state.segment_form.as_mut().expect("segment form open");
    form.name = name.to_string();
    form.cidr = cidr.to_string();
    form.role = role.to_string();
}

pub fn fill_rule_form(state: &mut State, name: &str, source: &str, destination: &str, port: &str) {
    let form = state.rule_form.as_mut().expect("rule form open");
    form.name = name.to_string();
    form.source = source.to_string();
    form.destination = destination.to_string();
    form.port = port.to_string();
}
