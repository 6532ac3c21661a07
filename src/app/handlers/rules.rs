//! Firewall rule form and deletion handlers
//!
//! Rules are created and deleted only; there is no edit-in-place.

use crate::app::{BANNER_SECS, BannerSeverity, RuleForm, State};
use uuid::Uuid;

pub(crate) fn handle_add_rule_clicked(state: &mut State) {
    state.segment_form = None;
    state.rule_form = Some(RuleForm::default());
    state.form_errors = None;
}

pub(crate) fn handle_cancel_rule_form(state: &mut State) {
    state.rule_form = None;
    state.form_errors = None;
}

/// Validates and submits the rule form, keeping it open on failure
pub(crate) fn handle_save_rule_form(state: &mut State) {
    let Some(form) = &state.rule_form else {
        return;
    };

    if let Some(errors) = form.validate() {
        state.push_banner(errors.summary(), BannerSeverity::Error, BANNER_SECS);
        state.form_errors = Some(errors);
        return;
    }

    let draft = form.to_draft();
    state.store.add_rule(draft);
    state.rule_form = None;
    state.form_errors = None;
    state.update_cached_preview();
    state.push_banner(
        "Firewall rule created successfully",
        BannerSeverity::Success,
        BANNER_SECS,
    );
}

pub(crate) fn handle_delete_rule(state: &mut State, id: Uuid) {
    if state.store.delete_rule(id).is_some() {
        state.update_cached_preview();
        state.push_banner("Rule deleted", BannerSeverity::Success, BANNER_SECS);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::handlers::test_utils::{create_test_state, fill_rule_form};
    use netsketch::core::network::{Action, Protocol};
    use netsketch::core::ordering::by_priority;

    #[test]
    fn test_create_rule_with_defaults() {
        let mut state = create_test_state();
        handle_add_rule_clicked(&mut state);
        fill_rule_form(&mut state, "Web", "ANY", "10.0.1.0/24", "443");
        handle_save_rule_form(&mut state);

        assert!(state.rule_form.is_none());
        let rule = &state.store.rules()[0];
        assert_eq!(rule.protocol, Protocol::Tcp);
        assert_eq!(rule.action, Action::Allow);
        assert_eq!(rule.priority, 100);
        assert_eq!(
            state.banners[0].message,
            "Firewall rule created successfully"
        );
    }

    #[test]
    fn test_missing_port_rejected() {
        let mut state = create_test_state();
        handle_add_rule_clicked(&mut state);
        fill_rule_form(&mut state, "Web", "ANY", "10.0.1.0/24", " ");
        handle_save_rule_form(&mut state);

        assert!(state.store.rules().is_empty());
        assert!(state.rule_form.is_some());
        assert_eq!(state.banners[0].message, "Please fill all fields");
    }

    #[test]
    fn test_rules_listed_by_priority() {
        let mut state = create_test_state();
        for (name, priority) in [("late", "300"), ("early", "50")] {
            handle_add_rule_clicked(&mut state);
            fill_rule_form(&mut state, name, "ANY", "ANY", "22");
            state.rule_form.as_mut().unwrap().priority = priority.to_string();
            handle_save_rule_form(&mut state);
        }
        let ordered = by_priority(state.store.rules());
        assert_eq!(ordered[0].name, "early");
        assert_eq!(state.store.rules()[0].name, "late");
    }

    #[test]
    fn test_delete_rule() {
        let mut state = create_test_state();
        handle_add_rule_clicked(&mut state);
        fill_rule_form(&mut state, "Web", "ANY", "10.0.1.0/24", "443");
        handle_save_rule_form(&mut state);
        let id = state.store.rules()[0].id;

        handle_delete_rule(&mut state, id);
        assert!(state.store.rules().is_empty());
        assert_eq!(state.banners.last().unwrap().message, "Rule deleted");
    }
}
