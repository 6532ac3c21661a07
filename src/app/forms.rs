//! Segment and rule form state with validation
//!
//! Forms hold raw text exactly as typed. `validate()` runs before anything
//! reaches the store; when it reports errors the form stays open with its
//! contents intact.

use netsketch::core::network::{
    Action, DEFAULT_RULE_PRIORITY, DEFAULT_SEGMENT_COLOR, NetworkSegment, Protocol, RuleDraft,
    SegmentDraft, SegmentPatch,
};
use uuid::Uuid;

/// Quick-pick swatches shown under the color field
pub const COLOR_PRESETS: [&str; 6] = [
    "#3b82f6", "#10b981", "#f59e0b", "#ef4444", "#8b5cf6", "#64748b",
];

const MISSING_FIELDS: &str = "Please fill all fields";

/// Form validation errors for individual fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub cidr: Option<String>,
    pub role: Option<String>,
    pub color: Option<String>,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub port: Option<String>,
    pub priority: Option<String>,
    /// At least one required field was left blank
    pub missing_required: bool,
}

impl FormErrors {
    /// Banner text for a rejected submission
    pub fn summary(&self) -> String {
        if self.missing_required {
            return MISSING_FIELDS.to_string();
        }
        [&self.color, &self.priority]
            .into_iter()
            .flatten()
            .next()
            .cloned()
            .unwrap_or_else(|| MISSING_FIELDS.to_string())
    }

    fn require(&mut self, value: &str, slot: fn(&mut Self) -> &mut Option<String>, label: &str) {
        if value.trim().is_empty() {
            *slot(self) = Some(format!("{label} is required"));
            self.missing_required = true;
        }
    }

    fn has_errors(&self) -> bool {
        *self != Self::default()
    }
}

/// `#rrggbb`, case-insensitive
pub fn is_hex_color(s: &str) -> bool {
    s.len() == 7
        && s.starts_with('#')
        && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[derive(Debug, Clone, PartialEq)]
pub struct SegmentForm {
    /// Segment being edited, `None` when creating
    pub id: Option<Uuid>,
    pub name: String,
    pub cidr: String,
    pub role: String,
    pub color: String,
}

impl Default for SegmentForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            cidr: String::new(),
            role: String::new(),
            color: DEFAULT_SEGMENT_COLOR.to_string(),
        }
    }
}

impl SegmentForm {
    pub fn from_segment(segment: &NetworkSegment) -> Self {
        Self {
            id: Some(segment.id),
            name: segment.name.clone(),
            cidr: segment.cidr.clone(),
            role: segment.role.clone(),
            color: segment.color.clone(),
        }
    }

    pub fn validate(&self) -> Option<FormErrors> {
        let mut errors = FormErrors::default();
        errors.require(&self.name, |e| &mut e.name, "Name");
        errors.require(&self.cidr, |e| &mut e.cidr, "CIDR");
        errors.require(&self.role, |e| &mut e.role, "Role");
        if !is_hex_color(self.color.trim()) {
            errors.color = Some("Color must be a hex value like #3b82f6".to_string());
        }

        if errors.has_errors() { Some(errors) } else { None }
    }

    /// Creation input, staggered after `existing` segments
    pub fn to_draft(&self, existing: usize) -> SegmentDraft {
        SegmentDraft::new(
            self.name.trim(),
            self.cidr.trim(),
            self.role.trim(),
            existing,
        )
        .with_color(self.color.trim())
    }

    /// Edit input; position is never touched from the form
    pub fn to_patch(&self) -> SegmentPatch {
        SegmentPatch {
            name: Some(self.name.trim().to_string()),
            cidr: Some(self.cidr.trim().to_string()),
            role: Some(self.role.trim().to_string()),
            color: Some(self.color.trim().to_string()),
            ..SegmentPatch::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RuleForm {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub protocol: Protocol,
    pub port: String,
    pub action: Action,
    /// Raw text; parsed as a signed integer on submit
    pub priority: String,
}

impl Default for RuleForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            source: String::new(),
            destination: String::new(),
            protocol: Protocol::Tcp,
            port: String::new(),
            action: Action::Allow,
            priority: DEFAULT_RULE_PRIORITY.to_string(),
        }
    }
}

impl RuleForm {
    pub fn validate(&self) -> Option<FormErrors> {
        let mut errors = FormErrors::default();
        errors.require(&self.name, |e| &mut e.name, "Name");
        errors.require(&self.source, |e| &mut e.source, "Source");
        errors.require(&self.destination, |e| &mut e.destination, "Destination");
        errors.require(&self.port, |e| &mut e.port, "Port");
        if self.parsed_priority().is_none() {
            errors.priority = Some("Priority must be a whole number".to_string());
        }

        if errors.has_errors() { Some(errors) } else { None }
    }

    fn parsed_priority(&self) -> Option<i32> {
        self.priority.trim().parse().ok()
    }

    pub fn to_draft(&self) -> RuleDraft {
        RuleDraft::new(
            self.name.trim(),
            self.source.trim(),
            self.destination.trim(),
            self.port.trim(),
        )
        .with_protocol(self.protocol)
        .with_action(self.action)
        .with_priority(self.parsed_priority().unwrap_or(DEFAULT_RULE_PRIORITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_segment_form() -> SegmentForm {
        SegmentForm {
            name: "DMZ".to_string(),
            cidr: "10.0.1.0/24".to_string(),
            role: "Public Zone".to_string(),
            ..SegmentForm::default()
        }
    }

    fn filled_rule_form() -> RuleForm {
        RuleForm {
            name: "Web".to_string(),
            source: "ANY".to_string(),
            destination: "10.0.1.0/24".to_string(),
            port: "443".to_string(),
            ..RuleForm::default()
        }
    }

    #[test]
    fn test_segment_form_valid() {
        assert!(filled_segment_form().validate().is_none());
    }

    #[test]
    fn test_segment_form_missing_role() {
        let form = SegmentForm {
            role: "   ".to_string(),
            ..filled_segment_form()
        };
        let errors = form.validate().unwrap();
        assert_eq!(errors.role.as_deref(), Some("Role is required"));
        assert!(errors.name.is_none());
        assert_eq!(errors.summary(), "Please fill all fields");
    }

    #[test]
    fn test_segment_form_bad_color() {
        let form = SegmentForm {
            color: "blue".to_string(),
            ..filled_segment_form()
        };
        let errors = form.validate().unwrap();
        assert!(!errors.missing_required);
        assert!(errors.summary().starts_with("Color must be"));
    }

    #[test]
    fn test_segment_form_draft_trims_and_staggers() {
        let form = SegmentForm {
            name: "  DMZ ".to_string(),
            color: "#EF4444".to_string(),
            ..filled_segment_form()
        };
        let draft = form.to_draft(2);
        assert_eq!(draft.name, "DMZ");
        assert_eq!(draft.color, "#EF4444");
        assert_eq!(draft.position_x, 200.0);
    }

    #[test]
    fn test_segment_patch_leaves_position_alone() {
        let patch = filled_segment_form().to_patch();
        assert!(patch.position_x.is_none());
        assert!(patch.position_y.is_none());
        assert_eq!(patch.name.as_deref(), Some("DMZ"));
    }

    #[test]
    fn test_rule_form_defaults() {
        let form = RuleForm::default();
        assert_eq!(form.protocol, Protocol::Tcp);
        assert_eq!(form.action, Action::Allow);
        assert_eq!(form.priority, "100");
    }

    #[test]
    fn test_rule_form_requires_port() {
        let form = RuleForm {
            port: String::new(),
            ..filled_rule_form()
        };
        let errors = form.validate().unwrap();
        assert_eq!(errors.port.as_deref(), Some("Port is required"));
        assert_eq!(errors.summary(), "Please fill all fields");
    }

    #[test]
    fn test_rule_form_priority_parsing() {
        let form = RuleForm {
            priority: "-20".to_string(),
            ..filled_rule_form()
        };
        assert!(form.validate().is_none());
        assert_eq!(form.to_draft().priority, -20);

        let bad = RuleForm {
            priority: "high".to_string(),
            ..filled_rule_form()
        };
        let errors = bad.validate().unwrap();
        assert_eq!(errors.summary(), "Priority must be a whole number");
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#3b82f6"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("3b82f6"));
        assert!(!is_hex_color("#3b82f"));
        assert!(!is_hex_color("#3b82fg"));
    }
}
