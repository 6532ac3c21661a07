//! In-memory segment and rule collections with write-through persistence
//!
//! [`NetworkStore`] is the single source of truth for the editor. It loads both
//! collections once at startup and re-serializes the affected collection after
//! every mutation. Persistence is best effort: a failed write is logged and the
//! in-memory state stays authoritative for the session.

use crate::core::network::{FirewallRule, NetworkSegment, RuleDraft, SegmentDraft, SegmentPatch};
use crate::core::storage::KeyValueStore;
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

/// Storage key for the segment collection
pub const SEGMENTS_KEY: &str = "network_segments";

/// Storage key for the rule collection
pub const RULES_KEY: &str = "firewall_rules";

pub struct NetworkStore {
    storage: Box<dyn KeyValueStore>,
    segments: Vec<NetworkSegment>,
    rules: Vec<FirewallRule>,
}

impl std::fmt::Debug for NetworkStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NetworkStore")
            .field("segments", &self.segments.len())
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl NetworkStore {
    /// Loads both collections from `storage`.
    ///
    /// Missing entries yield empty collections. Entries that fail to read or
    /// decode are logged and also treated as empty.
    pub fn load(storage: impl KeyValueStore + 'static) -> Self {
        Self::load_boxed(Box::new(storage))
    }

    pub fn load_boxed(storage: Box<dyn KeyValueStore>) -> Self {
        let segments = read_collection(storage.as_ref(), SEGMENTS_KEY);
        let rules = read_collection(storage.as_ref(), RULES_KEY);
        tracing::info!(
            "Loaded {} segments and {} rules",
            segments.len(),
            rules.len()
        );
        Self {
            storage,
            segments,
            rules,
        }
    }

    /// Gives the backing storage back, e.g. to reload it into a fresh store
    pub fn into_storage(self) -> Box<dyn KeyValueStore> {
        self.storage
    }

    pub fn segments(&self) -> &[NetworkSegment] {
        &self.segments
    }

    pub fn rules(&self) -> &[FirewallRule] {
        &self.rules
    }

    pub fn segment(&self, id: Uuid) -> Option<&NetworkSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// True when there is nothing to export
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.rules.is_empty()
    }

    pub fn add_segment(&mut self, draft: SegmentDraft) -> NetworkSegment {
        let segment = NetworkSegment::from_draft(Uuid::new_v4(), draft);
        tracing::info!("Added segment '{}' ({})", segment.name, segment.id);
        self.segments.push(segment.clone());
        self.save_segments();
        segment
    }

    /// Merges `patch` into the segment with `id`. Returns false (and changes
    /// nothing in memory) when no such segment exists.
    pub fn update_segment(&mut self, id: Uuid, patch: SegmentPatch) -> bool {
        let found = if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.apply(patch);
            true
        } else {
            tracing::debug!("Ignoring update for unknown segment {id}");
            false
        };
        self.save_segments();
        found
    }

    pub fn delete_segment(&mut self, id: Uuid) -> Option<NetworkSegment> {
        let removed = self
            .segments
            .iter()
            .position(|s| s.id == id)
            .map(|pos| self.segments.remove(pos));
        if let Some(segment) = &removed {
            tracing::info!("Deleted segment '{}' ({})", segment.name, segment.id);
        }
        self.save_segments();
        removed
    }

    pub fn add_rule(&mut self, draft: RuleDraft) -> FirewallRule {
        let rule = FirewallRule::from_draft(Uuid::new_v4(), draft);
        tracing::info!("Added rule '{}' ({})", rule.name, rule.id);
        self.rules.push(rule.clone());
        self.save_rules();
        rule
    }

    pub fn delete_rule(&mut self, id: Uuid) -> Option<FirewallRule> {
        let removed = self
            .rules
            .iter()
            .position(|r| r.id == id)
            .map(|pos| self.rules.remove(pos));
        if let Some(rule) = &removed {
            tracing::info!("Deleted rule '{}' ({})", rule.name, rule.id);
        }
        self.save_rules();
        removed
    }

    fn save_segments(&mut self) {
        write_collection(self.storage.as_mut(), SEGMENTS_KEY, &self.segments);
    }

    fn save_rules(&mut self) {
        write_collection(self.storage.as_mut(), RULES_KEY, &self.rules);
    }
}

fn read_collection<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    match storage.get(key) {
        Ok(Some(json)) => serde_json::from_str(&json).unwrap_or_else(|e| {
            tracing::warn!("Discarding undecodable '{key}' entry: {e}");
            Vec::new()
        }),
        Ok(None) => Vec::new(),
        Err(e) => {
            tracing::warn!("Failed to read '{key}' from storage: {e}");
            Vec::new()
        }
    }
}

fn write_collection<T: Serialize>(storage: &mut dyn KeyValueStore, key: &str, items: &[T]) {
    let result = serde_json::to_string(items)
        .map_err(crate::core::error::Error::from)
        .and_then(|json| storage.set(key, &json));
    if let Err(e) = result {
        tracing::warn!("Failed to persist '{key}': {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::network::{Action, Position, Protocol};
    use crate::core::storage::MemoryStore;
    use crate::core::test_helpers::{lan_draft, web_rule_draft};
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_load_empty_storage() {
        let store = NetworkStore::load(MemoryStore::new());
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_undecodable_entry_is_empty() {
        let storage = MemoryStore::new()
            .with_entry(SEGMENTS_KEY, "{not json")
            .with_entry(RULES_KEY, "[]");
        let store = NetworkStore::load(storage);
        assert!(store.segments().is_empty());
        assert!(store.rules().is_empty());
    }

    #[test]
    fn test_add_segment_appends_in_order() {
        let mut store = NetworkStore::load(MemoryStore::new());
        let a = store.add_segment(lan_draft("A", 0));
        let b = store.add_segment(lan_draft("B", 1));
        let ids: Vec<Uuid> = store.segments().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![a.id, b.id]);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_update_name_changes_only_name() {
        let mut store = NetworkStore::load(MemoryStore::new());
        let target = store.add_segment(lan_draft("LAN", 0));
        let other = store.add_segment(lan_draft("DMZ", 1));

        assert!(store.update_segment(target.id, SegmentPatch::name("X")));

        let updated = store.segment(target.id).unwrap();
        assert_eq!(updated.name, "X");
        assert_eq!(updated.cidr, target.cidr);
        assert_eq!(updated.role, target.role);
        assert_eq!(updated.position(), target.position());
        assert_eq!(updated.color, target.color);
        assert_eq!(store.segment(other.id).unwrap(), &other);
    }

    #[test]
    fn test_operations_after_delete_are_noops() {
        let mut store = NetworkStore::load(MemoryStore::new());
        let seg = store.add_segment(lan_draft("LAN", 0));
        store.add_segment(lan_draft("DMZ", 1));

        assert!(store.delete_segment(seg.id).is_some());
        assert_eq!(store.segments().len(), 1);

        assert!(!store.update_segment(seg.id, SegmentPatch::name("ghost")));
        assert!(store.delete_segment(seg.id).is_none());
        assert_eq!(store.segments().len(), 1);
        assert!(store.segments().iter().all(|s| s.name != "ghost"));
    }

    #[test]
    fn test_delete_rule_unknown_id() {
        let mut store = NetworkStore::load(MemoryStore::new());
        store.add_rule(web_rule_draft(100));
        assert!(store.delete_rule(Uuid::new_v4()).is_none());
        assert_eq!(store.rules().len(), 1);
    }

    #[test]
    fn test_reload_reproduces_final_state() {
        let mut store = NetworkStore::load(MemoryStore::new());
        let lan = store.add_segment(lan_draft("LAN", 0));
        let dmz = store.add_segment(lan_draft("DMZ", 1));
        store.add_segment(lan_draft("Guest", 2));
        store.update_segment(lan.id, SegmentPatch::position(Position::new(12.5, 400.0)));
        store.delete_segment(dmz.id);

        let web = store.add_rule(web_rule_draft(300));
        store.add_rule(
            RuleDraft::new("Block guest", "10.0.3.0/24", "ANY", "*")
                .with_action(Action::Deny)
                .with_protocol(Protocol::Any)
                .with_priority(-5),
        );
        store.delete_rule(web.id);

        let segments = store.segments().to_vec();
        let rules = store.rules().to_vec();

        let reloaded = NetworkStore::load_boxed(store.into_storage());
        assert_eq!(reloaded.segments(), segments.as_slice());
        assert_eq!(reloaded.rules(), rules.as_slice());
        assert_eq!(reloaded.segments()[0].position_x, 12.5);
        assert_eq!(reloaded.rules()[0].priority, -5);
    }

    #[test]
    fn test_unavailable_storage_keeps_memory_state() {
        let mut store = NetworkStore::load(MemoryStore::unavailable());
        let seg = store.add_segment(lan_draft("LAN", 0));
        store.add_rule(web_rule_draft(100));
        assert_eq!(store.segments().len(), 1);
        assert_eq!(store.rules().len(), 1);
        assert!(store.update_segment(seg.id, SegmentPatch::name("Office")));
        assert_eq!(store.segment(seg.id).unwrap().name, "Office");
    }

    #[test]
    fn test_every_mutation_persists() {
        let mut store = NetworkStore::load(MemoryStore::new());
        let seg = store.add_segment(lan_draft("LAN", 0));
        store.update_segment(seg.id, SegmentPatch::name("Office"));

        let storage = store.into_storage();
        let json = storage.get(SEGMENTS_KEY).unwrap().unwrap();
        assert!(json.contains("\"Office\""));
        assert!(storage.get(RULES_KEY).unwrap().is_none());
    }

    proptest! {
        #[test]
        fn test_add_segment_ids_unique(count in 1usize..40) {
            let mut store = NetworkStore::load(MemoryStore::new());
            let mut seen = HashSet::new();
            for i in 0..count {
                let before = store.segments().len();
                let seg = store.add_segment(lan_draft("S", i));
                prop_assert_eq!(store.segments().len(), before + 1);
                prop_assert!(seen.insert(seg.id));
            }
        }
    }
}
