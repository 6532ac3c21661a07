//! Summary counts for the dashboard

use crate::core::network::{Action, FirewallRule, NetworkSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub segments: usize,
    pub rules: usize,
    /// ALLOW rules, shown as "Active Connections"
    pub allowed: usize,
    pub denied: usize,
}

impl DashboardStats {
    pub fn collect(segments: &[NetworkSegment], rules: &[FirewallRule]) -> Self {
        let allowed = rules.iter().filter(|r| r.action == Action::Allow).count();
        Self {
            segments: segments.len(),
            rules: rules.len(),
            allowed,
            denied: rules.len() - allowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::RuleDraft;
    use crate::core::test_helpers::rule_with_priority;
    use uuid::Uuid;

    #[test]
    fn test_counts_by_action() {
        let rules = vec![
            rule_with_priority("a", 1),
            rule_with_priority("b", 2),
            FirewallRule::from_draft(
                Uuid::new_v4(),
                RuleDraft::new("deny", "ANY", "ANY", "23").with_action(Action::Deny),
            ),
        ];
        let stats = DashboardStats::collect(&[], &rules);
        assert_eq!(stats.rules, 3);
        assert_eq!(stats.allowed, 2);
        assert_eq!(stats.denied, 1);
        assert_eq!(stats.segments, 0);
    }

    #[test]
    fn test_empty() {
        assert_eq!(DashboardStats::collect(&[], &[]), DashboardStats::default());
    }
}
