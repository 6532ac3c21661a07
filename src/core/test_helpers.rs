//! Shared fixtures for core tests

use crate::core::network::{FirewallRule, RuleDraft, SegmentDraft};
use uuid::Uuid;

/// Segment draft placed as the `index`-th segment
pub fn lan_draft(name: &str, index: usize) -> SegmentDraft {
    SegmentDraft::new(name, format!("192.168.{index}.0/24"), "Internal Network", index)
}

pub fn web_rule_draft(priority: i32) -> RuleDraft {
    RuleDraft::new("Allow HTTPS", "ANY", "10.0.1.0/24", "443").with_priority(priority)
}

/// Fully-formed rule with a fresh id
pub fn rule_with_priority(name: &str, priority: i32) -> FirewallRule {
    FirewallRule::from_draft(
        Uuid::new_v4(),
        RuleDraft::new(name, "ANY", "ANY", "80").with_priority(priority),
    )
}
