//! UI state management
//!
//! Handles UI state changes:
//! - Tab switching
//! - Banner management

use crate::app::{State, Tab};

/// Handles tab change
pub(crate) fn handle_tab_changed(state: &mut State, tab: Tab) {
    state.active_tab = tab;
    // The canvas only lives on the dashboard
    if tab != Tab::Dashboard {
        state.drag.release();
    }
    // Stamp the preview with the time the page was opened
    if tab == Tab::Export {
        state.update_cached_preview();
    }
}

/// Handles pruning expired banners
pub(crate) fn handle_prune_banners(state: &mut State) {
    state.prune_expired_banners();
}

/// Handles dismissing a specific banner
pub(crate) fn handle_dismiss_banner(state: &mut State, index: usize) {
    if index < state.banners.len() {
        state.banners.remove(index);
    }
}
