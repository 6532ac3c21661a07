//! Segment form and deletion handlers

use crate::app::{BANNER_SECS, BannerSeverity, SegmentForm, State};
use uuid::Uuid;

/// Opens an empty segment form
pub(crate) fn handle_add_segment_clicked(state: &mut State) {
    state.rule_form = None;
    state.segment_form = Some(SegmentForm::default());
    state.form_errors = None;
}

/// Opens the segment form pre-filled from an existing segment
pub(crate) fn handle_edit_segment_clicked(state: &mut State, id: Uuid) {
    if let Some(segment) = state.store.segment(id) {
        state.rule_form = None;
        state.segment_form = Some(SegmentForm::from_segment(segment));
        state.form_errors = None;
    }
}

pub(crate) fn handle_cancel_segment_form(state: &mut State) {
    state.segment_form = None;
    state.form_errors = None;
}

/// Validates and submits the segment form.
///
/// On validation failure the form stays open with its contents and per-field
/// errors, and nothing reaches the store.
pub(crate) fn handle_save_segment_form(state: &mut State) {
    let Some(form) = state.segment_form.clone() else {
        return;
    };

    if let Some(errors) = form.validate() {
        state.push_banner(errors.summary(), BannerSeverity::Error, BANNER_SECS);
        state.form_errors = Some(errors);
        return;
    }

    let message = if let Some(id) = form.id {
        state.store.update_segment(id, form.to_patch());
        "Segment updated successfully"
    } else {
        let existing = state.store.segments().len();
        state.store.add_segment(form.to_draft(existing));
        "Segment created successfully"
    };

    state.segment_form = None;
    state.form_errors = None;
    state.update_cached_preview();
    state.push_banner(message, BannerSeverity::Success, BANNER_SECS);
}

pub(crate) fn handle_delete_segment(state: &mut State, id: Uuid) {
    if state.store.delete_segment(id).is_none() {
        return;
    }
    if state.drag.dragging() == Some(id) {
        state.drag.release();
    }
    if state.segment_form.as_ref().is_some_and(|f| f.id == Some(id)) {
        state.segment_form = None;
        state.form_errors = None;
    }
    state.update_cached_preview();
    state.push_banner("Segment deleted", BannerSeverity::Success, BANNER_SECS);
}
