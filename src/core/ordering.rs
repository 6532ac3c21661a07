//! Display ordering for firewall rules
//!
//! Lower priority values are listed (and would be evaluated) first. Rules that
//! share a priority keep the order in which they were created.

use crate::core::network::FirewallRule;

/// Returns the rules sorted by ascending priority without touching `rules`
pub fn by_priority(rules: &[FirewallRule]) -> Vec<&FirewallRule> {
    let mut ordered: Vec<&FirewallRule> = rules.iter().collect();
    // slice::sort_by_key is stable
    ordered.sort_by_key(|r| r.priority);
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::test_helpers::rule_with_priority;
    use proptest::prelude::*;

    #[test]
    fn test_ties_keep_input_order() {
        let rules = vec![
            rule_with_priority("high", 300),
            rule_with_priority("first-100", 100),
            rule_with_priority("second-100", 100),
            rule_with_priority("low", 50),
        ];

        let names: Vec<&str> = by_priority(&rules).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["low", "first-100", "second-100", "high"]);

        // Stored order untouched
        assert_eq!(rules[0].name, "high");
    }

    #[test]
    fn test_negative_priorities_sort_first() {
        let rules = vec![rule_with_priority("zero", 0), rule_with_priority("neg", -10)];
        assert_eq!(by_priority(&rules)[0].name, "neg");
    }

    #[test]
    fn test_empty() {
        assert!(by_priority(&[]).is_empty());
    }

    proptest! {
        #[test]
        fn test_sorted_and_stable(priorities in proptest::collection::vec(-5i32..5, 0..30)) {
            let rules: Vec<FirewallRule> = priorities
                .iter()
                .enumerate()
                .map(|(i, p)| rule_with_priority(&i.to_string(), *p))
                .collect();
            let ordered = by_priority(&rules);

            prop_assert_eq!(ordered.len(), rules.len());
            for pair in ordered.windows(2) {
                prop_assert!(pair[0].priority <= pair[1].priority);
                if pair[0].priority == pair[1].priority {
                    let a: usize = pair[0].name.parse().unwrap();
                    let b: usize = pair[1].name.parse().unwrap();
                    prop_assert!(a < b);
                }
            }
        }
    }
}
