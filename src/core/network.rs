//! Network segment and firewall rule data structures
//!
//! This module defines the two record types the editor manages:
//!
//! - [`NetworkSegment`]: a named, positioned, colored network zone
//! - [`FirewallRule`]: an ALLOW/DENY statement between two free-text endpoints
//!
//! CIDR blocks, sources, destinations and ports are stored as opaque labels.
//! Nothing here checks them against each other or against real networks.
//!
//! # Example
//!
//! ```
//! use netsketch::core::network::{SegmentDraft, NetworkSegment};
//!
//! let draft = SegmentDraft::new("DMZ", "10.0.1.0/24", "Public Zone", 0);
//! let segment = NetworkSegment::from_draft(uuid::Uuid::new_v4(), draft);
//! assert_eq!(segment.color, "#3b82f6");
//! assert_eq!(segment.position_x, 100.0);
//! ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Card color assigned to new segments
pub const DEFAULT_SEGMENT_COLOR: &str = "#3b82f6";

/// Priority assigned to new rules
pub const DEFAULT_RULE_PRIORITY: i32 = 100;

/// Offset of the first segment card from the canvas origin
const STAGGER_ORIGIN: f64 = 100.0;

/// Diagonal step between consecutively created segment cards
const STAGGER_STEP: f64 = 50.0;

/// Canvas coordinates of a segment card's top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Default position for the `index`-th segment (0-based creation order)
    #[allow(clippy::cast_precision_loss)]
    pub fn staggered(index: usize) -> Self {
        let offset = STAGGER_ORIGIN + index as f64 * STAGGER_STEP;
        Self::new(offset, offset)
    }
}

/// A logical network zone drawn on the topology canvas
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSegment {
    pub id: Uuid,
    pub name: String,
    pub cidr: String,
    pub role: String,
    pub position_x: f64,
    pub position_y: f64,
    pub color: String,
}

impl NetworkSegment {
    pub fn from_draft(id: Uuid, draft: SegmentDraft) -> Self {
        Self {
            id,
            name: draft.name,
            cidr: draft.cidr,
            role: draft.role,
            position_x: draft.position_x,
            position_y: draft.position_y,
            color: draft.color,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.position_x, self.position_y)
    }

    /// Merges every field present in `patch`, leaving the rest untouched
    pub fn apply(&mut self, patch: SegmentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(cidr) = patch.cidr {
            self.cidr = cidr;
        }
        if let Some(role) = patch.role {
            self.role = role;
        }
        if let Some(x) = patch.position_x {
            self.position_x = x;
        }
        if let Some(y) = patch.position_y {
            self.position_y = y;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
    }
}

/// Segment fields supplied on creation (everything but the id)
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentDraft {
    pub name: String,
    pub cidr: String,
    pub role: String,
    pub position_x: f64,
    pub position_y: f64,
    pub color: String,
}

impl SegmentDraft {
    /// Draft with the default color, staggered by `existing` prior segments
    pub fn new(
        name: impl Into<String>,
        cidr: impl Into<String>,
        role: impl Into<String>,
        existing: usize,
    ) -> Self {
        let position = Position::staggered(existing);
        Self {
            name: name.into(),
            cidr: cidr.into(),
            role: role.into(),
            position_x: position.x,
            position_y: position.y,
            color: DEFAULT_SEGMENT_COLOR.to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

/// Partial segment update; `None` fields are left unchanged
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentPatch {
    pub name: Option<String>,
    pub cidr: Option<String>,
    pub role: Option<String>,
    pub position_x: Option<f64>,
    pub position_y: Option<f64>,
    pub color: Option<String>,
}

impl SegmentPatch {
    pub fn position(position: Position) -> Self {
        Self {
            position_x: Some(position.x),
            position_y: Some(position.y),
            ..Self::default()
        }
    }

    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

/// Transport protocol matched by a rule
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Protocol {
    #[default]
    Tcp,
    Udp,
    Icmp,
    Any,
}

impl Protocol {
    pub const ALL: [Protocol; 4] = [Protocol::Tcp, Protocol::Udp, Protocol::Icmp, Protocol::Any];
}

/// What happens to traffic matching a rule
#[derive(
    Debug,
    Clone,
    Copy,
    Serialize,
    Deserialize,
    PartialEq,
    Eq,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Action {
    #[default]
    Allow,
    Deny,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::Allow, Action::Deny];
}

/// A documented firewall policy statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FirewallRule {
    pub id: Uuid,
    pub name: String,
    pub source: String,
    pub destination: String,
    pub protocol: Protocol,
    pub port: String,
    pub action: Action,
    pub priority: i32,
}

impl FirewallRule {
    pub fn from_draft(id: Uuid, draft: RuleDraft) -> Self {
        Self {
            id,
            name: draft.name,
            source: draft.source,
            destination: draft.destination,
            protocol: draft.protocol,
            port: draft.port,
            action: draft.action,
            priority: draft.priority,
        }
    }
}

/// Rule fields supplied on creation (everything but the id)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDraft {
    pub name: String,
    pub source: String,
    pub destination: String,
    pub protocol: Protocol,
    pub port: String,
    pub action: Action,
    pub priority: i32,
}

impl RuleDraft {
    /// TCP/ALLOW draft at the default priority
    pub fn new(
        name: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
        port: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            destination: destination.into(),
            protocol: Protocol::default(),
            port: port.into(),
            action: Action::default(),
            priority: DEFAULT_RULE_PRIORITY,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.action = action;
        self
    }

    pub fn with_protocol(mut self, protocol: Protocol) -> Self {
        self.protocol = protocol;
        self
    }
}
