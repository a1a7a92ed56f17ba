// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::map::Entry;
use indexmap::IndexMap;
use itertools::Itertools;

use crate::domain::contacts::models::{ContactAttributes, ContactEntry};
use crate::domain::shared::models::{ContactId, GroupName};

/// Holds the current attributes of every contact of a profile, keyed by identity and kept
/// in arrival order.
#[derive(Debug, Default, Clone)]
pub struct ContactEntryStore {
    entries: IndexMap<ContactId, ContactEntry>,
}

impl ContactEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the attributes of the entry identified by `id` or inserts a new entry. The
    /// transient alerting state and decoration of an existing entry survive the update.
    pub fn upsert(&mut self, id: &ContactId, attributes: ContactAttributes) -> &ContactEntry {
        match self.entries.entry(id.clone()) {
            Entry::Occupied(occupied) => {
                let entry = occupied.into_mut();
                entry.attributes = attributes;
                entry
            }
            Entry::Vacant(vacant) => vacant.insert(ContactEntry::new(id.clone(), attributes)),
        }
    }

    /// Removes the entry. Does nothing if the entry doesn't exist.
    pub fn remove(&mut self, id: &ContactId) -> Option<ContactEntry> {
        self.entries.shift_remove(id)
    }

    pub fn get(&self, id: &ContactId) -> Option<&ContactEntry> {
        self.entries.get(id)
    }

    pub fn get_mut(&mut self, id: &ContactId) -> Option<&mut ContactEntry> {
        self.entries.get_mut(id)
    }

    /// Sets the alerting flag. Returns `false` if the entry doesn't exist.
    pub fn set_alerting(&mut self, id: &ContactId, alerting: bool) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };
        entry.alerting = alerting;
        true
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.entries.contains_key(id)
    }

    /// Returns an iterator over the contained entries in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &ContactEntry> {
        self.entries.values()
    }

    /// Returns a snapshot of all identities, safe to iterate while mutating the store.
    pub fn ids(&self) -> Vec<ContactId> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear()
    }
}

impl ContactEntryStore {
    /// The number of entries whose highest priority resource is available.
    pub fn online_count(&self) -> usize {
        self.entries.values().filter(|e| e.is_available()).count()
    }

    /// All user group names in use, sorted and without duplicates.
    pub fn group_list(&self) -> Vec<GroupName> {
        self.entries
            .values()
            .flat_map(|entry| entry.attributes.groups.iter())
            .unique()
            .cloned()
            .sorted_by(|lhs, rhs| lhs.as_str().cmp(rhs.as_str()))
            .collect()
    }

    /// The members of the user group `name`. Transports are never group members. An empty
    /// `name` selects the ungrouped contacts.
    pub fn group_members(&self, name: &str) -> Vec<ContactId> {
        self.entries
            .values()
            .filter(|entry| Self::is_member(entry, name))
            .map(|entry| entry.id.clone())
            .collect()
    }

    /// The number of members of the user group `name`, see [`Self::group_members`].
    pub fn group_member_count(&self, name: &str) -> usize {
        self.entries
            .values()
            .filter(|entry| Self::is_member(entry, name))
            .count()
    }

    fn is_member(entry: &ContactEntry, name: &str) -> bool {
        if entry.attributes.is_transport {
            return false;
        }
        let groups = &entry.attributes.groups;
        if groups.is_empty() {
            return name.is_empty();
        }
        groups.contains(name)
    }
}
