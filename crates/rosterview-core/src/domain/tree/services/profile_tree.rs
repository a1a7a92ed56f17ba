// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;
use std::collections::HashMap;
use std::time::Duration;

use anyhow::Result;
use indexmap::{IndexMap, IndexSet};
use tracing::{debug, info, warn};

use crate::app::deps::{DynGroupStateRepository, TreeDependencies};
use crate::domain::contacts::models::{ContactAttributes, ContactDecoration, ContactEntry};
use crate::domain::contacts::repos::ContactEntryStore;
use crate::domain::grouping::models::GroupKey;
use crate::domain::grouping::services::desired_groups;
use crate::domain::settings::models::{profile_storage_key, FilterConfig, GroupState};
use crate::domain::shared::models::{ContactId, GroupName, ProfileId};
use crate::domain::sorting::{ChildSortKey, GroupSortKey, SortComparator};
use crate::domain::tree::models::{
    CountsNode, GroupCounts, GroupNode, GroupNodeId, ItemParent, ProfileNode, TreeChild,
    TreeEvent, ViewItem, ViewItemId,
};
use crate::util::{reorder, StringExt};

use super::CoalescingScheduler;

/// Owns the contacts of one account together with their projection into groups and keeps
/// both in sync. Every mutation returns the events needed to mirror the change in a view.
pub struct ProfileTree {
    node: ProfileNode,
    store: ContactEntryStore,
    self_entry: Option<ContactEntry>,
    self_item: Option<ViewItemId>,
    groups: HashMap<GroupNodeId, GroupNode>,
    group_ids: HashMap<GroupKey, GroupNodeId>,
    items: HashMap<ViewItemId, ViewItem>,
    contact_items: HashMap<ContactId, IndexMap<GroupKey, ViewItemId>>,
    filters: FilterConfig,
    comparator: SortComparator,
    scheduler: CoalescingScheduler,
    deps: TreeDependencies,
}

impl ProfileTree {
    pub fn new(
        id: ProfileId,
        name: impl Into<String>,
        filters: FilterConfig,
        comparator: SortComparator,
        count_refresh_delay: Duration,
        deps: TreeDependencies,
    ) -> Self {
        let name = name.into();
        let state = load_state(
            &deps.group_state_repo,
            &id,
            &profile_storage_key(&name),
        );

        ProfileTree {
            node: ProfileNode {
                id,
                name,
                children: vec![],
                counts: Default::default(),
                open: state.open,
                rank: state.rank,
                enabled: true,
            },
            store: ContactEntryStore::new(),
            self_entry: None,
            self_item: None,
            groups: HashMap::new(),
            group_ids: HashMap::new(),
            items: HashMap::new(),
            contact_items: HashMap::new(),
            filters,
            comparator,
            scheduler: CoalescingScheduler::new(count_refresh_delay),
            deps,
        }
    }
}

impl ProfileTree {
    pub fn id(&self) -> &ProfileId {
        &self.node.id
    }

    pub fn node(&self) -> &ProfileNode {
        &self.node
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn entries(&self) -> &ContactEntryStore {
        &self.store
    }

    pub fn entry(&self, id: &ContactId) -> Option<&ContactEntry> {
        self.store.get(id)
    }

    pub fn self_entry(&self) -> Option<&ContactEntry> {
        self.self_entry.as_ref()
    }

    pub fn self_item(&self) -> Option<ViewItemId> {
        self.self_item
    }

    pub fn item(&self, id: &ViewItemId) -> Option<&ViewItem> {
        self.items.get(id)
    }

    /// The entry an item is a projection of.
    pub fn entry_for_item(&self, id: &ViewItemId) -> Option<&ContactEntry> {
        let item = self.items.get(id)?;
        match item.parent {
            ItemParent::Profile => self.self_entry.as_ref(),
            ItemParent::Group(_) => self.store.get(&item.contact),
        }
    }

    pub fn group(&self, key: &GroupKey) -> Option<&GroupNode> {
        self.group_ids.get(key).and_then(|id| self.groups.get(id))
    }

    pub fn group_by_id(&self, id: &GroupNodeId) -> Option<&GroupNode> {
        self.groups.get(id)
    }

    /// The groups in display order.
    pub fn groups(&self) -> impl Iterator<Item = &GroupNode> + '_ {
        self.node.groups().filter_map(|id| self.groups.get(&id))
    }

    /// The view items of a roster contact, in the order they were created.
    pub fn items_of(&self, contact: &ContactId) -> Vec<ViewItemId> {
        self.contact_items
            .get(contact)
            .map(|items| items.values().copied().collect())
            .unwrap_or_default()
    }

    pub fn groups_of(&self, contact: &ContactId) -> Vec<GroupKey> {
        self.contact_items
            .get(contact)
            .map(|items| items.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// All view items in display order, starting with the self item.
    pub fn visible_items(&self) -> Vec<ViewItemId> {
        self.node
            .children
            .iter()
            .flat_map(|child| match child {
                TreeChild::Contact(id) => vec![*id],
                TreeChild::Group(id) => self
                    .groups
                    .get(id)
                    .map(|group| group.children.clone())
                    .unwrap_or_default(),
            })
            .collect()
    }

    /// The visible items whose name or address contains `text`, ignoring case.
    pub fn find_items(&self, text: &str) -> Vec<ViewItemId> {
        self.visible_items()
            .into_iter()
            .filter(|id| {
                self.entry_for_item(id).map_or(false, |entry| {
                    entry.display_name().contains_ignore_case(text)
                        || entry.id.to_string().contains_ignore_case(text)
                })
            })
            .collect()
    }

    pub fn group_list(&self) -> Vec<GroupName> {
        self.store.group_list()
    }

    pub fn group_members(&self, name: &str) -> Vec<ContactId> {
        self.store.group_members(name)
    }

    pub fn group_member_count(&self, name: &str) -> usize {
        self.store.group_member_count(name)
    }

    pub fn pending_count_generation(&self) -> Option<u64> {
        self.scheduler.pending_generation()
    }
}

impl ProfileTree {
    /// Stores the complete attribute set of a contact and reconciles its view items.
    pub fn update_entry(&mut self, id: &ContactId, attributes: ContactAttributes) -> Vec<TreeEvent> {
        let mut events = vec![];
        let changed = self
            .store
            .get(id)
            .map_or(true, |entry| entry.attributes != attributes);

        self.store.upsert(id, attributes);
        self.reconcile(id, changed, &mut events);
        events
    }

    pub fn remove_entry(&mut self, id: &ContactId) -> Vec<TreeEvent> {
        let mut events = vec![];
        if self.store.remove(id).is_none() {
            return events;
        }
        self.reconcile(id, false, &mut events);
        self.schedule_counts();
        events
    }

    pub fn update_self(&mut self, id: &ContactId, attributes: ContactAttributes) -> Vec<TreeEvent> {
        let mut events = vec![];

        let changed = match self.self_entry.as_mut() {
            Some(entry) if &entry.id == id => {
                let changed = entry.attributes != attributes;
                entry.attributes = attributes;
                changed
            }
            _ => {
                self.remove_self_item(&mut events);
                self.self_entry = Some(ContactEntry::new(id.clone(), attributes));
                true
            }
        };

        self.reconcile_self(changed, &mut events);
        events
    }

    pub fn remove_self(&mut self) -> Vec<TreeEvent> {
        let mut events = vec![];
        self.self_entry = None;
        self.reconcile_self(false, &mut events);
        events
    }

    pub fn set_alert(&mut self, id: &ContactId) -> Vec<TreeEvent> {
        self.set_alerting(id, true)
    }

    pub fn clear_alert(&mut self, id: &ContactId) -> Vec<TreeEvent> {
        self.set_alerting(id, false)
    }

    /// Applies data from the avatar/vCard providers. Only re-renders the affected items.
    pub fn set_decoration(&mut self, id: &ContactId, decoration: ContactDecoration) -> Vec<TreeEvent> {
        let mut items = vec![];

        if let Some(entry) = self.store.get_mut(id) {
            if entry.decoration != decoration {
                entry.decoration = decoration.clone();
                items.extend(self.items_of(id));
            }
        }

        if let Some(entry) = self.self_entry.as_mut().filter(|entry| &entry.id == id) {
            if entry.decoration != decoration {
                entry.decoration = decoration;
                items.extend(self.self_item);
            }
        }

        items
            .into_iter()
            .map(|item| TreeEvent::ItemChanged {
                profile: self.node.id.clone(),
                item,
                contact: id.clone(),
            })
            .collect()
    }

    pub fn apply_filters(&mut self, filters: FilterConfig) -> Vec<TreeEvent> {
        let mut events = vec![];
        if self.filters == filters {
            return events;
        }

        let affects_contacts = self.filters.affects_contacts(&filters);
        self.filters = filters;

        if affects_contacts {
            self.reconcile_entries(&mut events);
        }
        self.reconcile_self(false, &mut events);

        info!(
            "Applied filters to profile {}. {} changes.",
            self.node.id,
            events.len()
        );
        events
    }

    /// Re-sorts every container of the profile after the sort configuration changed.
    pub fn set_comparator(&mut self, comparator: SortComparator) -> Vec<TreeEvent> {
        let mut events = vec![];
        if self.comparator == comparator {
            return events;
        }
        self.comparator = comparator;

        for group_id in self.node.groups().collect::<Vec<_>>() {
            self.resort_group(group_id, &mut events);
        }
        self.resort_profile(&mut events);
        events
    }

    /// A disabled profile keeps its entries but projects none of them.
    pub fn set_enabled(&mut self, enabled: bool) -> Vec<TreeEvent> {
        if self.node.enabled == enabled {
            return vec![];
        }
        self.node.enabled = enabled;
        self.reconcile_all()
    }

    pub fn reconcile_all(&mut self) -> Vec<TreeEvent> {
        let mut events = vec![];
        self.reconcile_entries(&mut events);
        self.reconcile_self(false, &mut events);
        events
    }

    /// Forgets all entries. Removes every item and group.
    pub fn clear(&mut self) -> Vec<TreeEvent> {
        let mut events = vec![];
        let ids = self.store.ids();
        self.store.clear();

        for id in ids {
            self.reconcile(&id, false, &mut events);
        }

        self.self_entry = None;
        self.reconcile_self(false, &mut events);
        self.schedule_counts();
        events
    }

    pub fn set_count_refresh_delay(&mut self, delay: Duration) {
        self.scheduler.set_delay(delay)
    }
}

impl ProfileTree {
    pub fn set_group_open(&mut self, key: &GroupKey, open: bool) -> Result<()> {
        let mut state = self.group_state(key);
        state.open = open;
        self.deps
            .group_state_repo
            .set(&self.node.id, &key.storage_key(), state)?;

        if let Some(group) = self.group_mut(key) {
            group.open = open;
        }
        Ok(())
    }

    pub fn set_group_rank(&mut self, key: &GroupKey, rank: i32) -> Result<Vec<TreeEvent>> {
        let mut events = vec![];
        let mut state = self.group_state(key);
        state.rank = rank;
        self.deps
            .group_state_repo
            .set(&self.node.id, &key.storage_key(), state)?;

        let Some(group) = self.group_mut(key) else {
            return Ok(events);
        };
        group.rank = rank;
        let group_id = group.id;

        self.replace_group(group_id, &mut events);
        Ok(events)
    }

    pub fn set_open(&mut self, open: bool) -> Result<()> {
        self.node.open = open;
        self.save_profile_state()
    }

    /// Updates the manual rank of the profile. Re-placing the profile among its siblings is
    /// up to the owner of all profiles.
    pub fn set_rank(&mut self, rank: i32) -> Result<()> {
        self.node.rank = rank;
        self.save_profile_state()
    }

    fn save_profile_state(&self) -> Result<()> {
        self.deps.group_state_repo.set(
            &self.node.id,
            &profile_storage_key(&self.node.name),
            GroupState {
                open: self.node.open,
                rank: self.node.rank,
            },
        )
    }

    fn group_state(&self, key: &GroupKey) -> GroupState {
        match self.group(key) {
            Some(group) => GroupState {
                open: group.open,
                rank: group.rank,
            },
            None => load_state(
                &self.deps.group_state_repo,
                &self.node.id,
                &key.storage_key(),
            ),
        }
    }

    fn group_mut(&mut self, key: &GroupKey) -> Option<&mut GroupNode> {
        let id = self.group_ids.get(key)?;
        self.groups.get_mut(id)
    }
}

impl ProfileTree {
    /// Recomputes the counters if the coalesced refresh is due.
    pub fn flush_due_counts(&mut self) -> Vec<TreeEvent> {
        if !self.scheduler.fire_if_due(self.deps.time_provider.now()) {
            return vec![];
        }
        self.refresh_counts()
    }

    /// Recomputes the counters if `generation` still identifies the pending refresh.
    pub fn flush_counts_generation(&mut self, generation: u64) -> Vec<TreeEvent> {
        if !self.scheduler.fire_generation(generation) {
            return vec![];
        }
        self.refresh_counts()
    }

    /// Recomputes the counters immediately and drops the pending refresh.
    pub fn flush_counts(&mut self) -> Vec<TreeEvent> {
        self.scheduler.cancel();
        self.refresh_counts()
    }

    fn schedule_counts(&mut self) {
        let now = self.deps.time_provider.now();
        self.scheduler.schedule(now);
    }

    fn refresh_counts(&mut self) -> Vec<TreeEvent> {
        let mut events = vec![];

        for group_id in self.node.groups().collect::<Vec<_>>() {
            let Some(group) = self.groups.get(&group_id) else {
                continue;
            };
            let online = group
                .children
                .iter()
                .filter_map(|child| self.child_entry(child))
                .filter(|entry| entry.is_available())
                .count();
            let counts = GroupCounts::new(online, group.children.len());

            let Some(group) = self.groups.get_mut(&group_id) else {
                continue;
            };
            if group.counts == counts {
                continue;
            }
            group.counts = counts;
            events.push(TreeEvent::CountsChanged {
                profile: self.node.id.clone(),
                node: CountsNode::Group(group_id),
                counts,
            });
        }

        let counts = GroupCounts::new(self.store.online_count(), self.store.len());
        if self.node.counts != counts {
            self.node.counts = counts;
            events.push(TreeEvent::CountsChanged {
                profile: self.node.id.clone(),
                node: CountsNode::Profile,
                counts,
            });
        }

        events
    }
}

impl ProfileTree {
    fn set_alerting(&mut self, id: &ContactId, alerting: bool) -> Vec<TreeEvent> {
        let mut events = vec![];
        let Some(entry) = self.store.get(id) else {
            return events;
        };
        if entry.alerting == alerting {
            return events;
        }
        self.store.set_alerting(id, alerting);
        self.reconcile(id, true, &mut events);
        events
    }

    fn reconcile_entries(&mut self, events: &mut Vec<TreeEvent>) {
        for id in self.store.ids() {
            self.reconcile(&id, false, events);
        }
    }

    /// Converges the items of one contact towards its desired groups. Removals are applied
    /// before insertions.
    fn reconcile(&mut self, id: &ContactId, changed: bool, events: &mut Vec<TreeEvent>) {
        let event_count = events.len();

        let desired = self.desired_groups(id);
        let current = self.groups_of(id);

        for key in current.iter().filter(|key| !desired.contains(*key)) {
            self.remove_item(id, key, events);
        }

        for key in desired.iter().filter(|key| !current.contains(key)) {
            self.insert_item(id, key, events);
        }

        for key in desired.iter().filter(|key| current.contains(key)) {
            self.replace_item(id, key, events);

            if !changed {
                continue;
            }
            let Some(item) = self.contact_items.get(id).and_then(|items| items.get(key)) else {
                continue;
            };
            events.push(TreeEvent::ItemChanged {
                profile: self.node.id.clone(),
                item: *item,
                contact: id.clone(),
            });
        }

        if changed || events.len() > event_count {
            self.schedule_counts();
        }
    }

    fn desired_groups(&self, id: &ContactId) -> IndexSet<GroupKey> {
        if !self.node.enabled {
            return IndexSet::new();
        }
        self.store
            .get(id)
            .map(|entry| desired_groups(entry, &self.filters))
            .unwrap_or_default()
    }

    fn insert_item(&mut self, id: &ContactId, key: &GroupKey, events: &mut Vec<TreeEvent>) {
        if !self.store.contains(id) {
            return;
        }

        let group_id = self.ensure_group(key, events);
        let index = self.insertion_index(group_id, id);
        let item_id = self.deps.ids.next_item_id();

        let Some(group) = self.groups.get_mut(&group_id) else {
            return;
        };
        group.children.insert(index, item_id);

        self.items.insert(
            item_id,
            ViewItem {
                id: item_id,
                contact: id.clone(),
                parent: ItemParent::Group(group_id),
            },
        );
        self.contact_items
            .entry(id.clone())
            .or_default()
            .insert(key.clone(), item_id);

        events.push(TreeEvent::ItemInserted {
            profile: self.node.id.clone(),
            item: item_id,
            contact: id.clone(),
            parent: ItemParent::Group(group_id),
            index,
        });
    }

    fn remove_item(&mut self, id: &ContactId, key: &GroupKey, events: &mut Vec<TreeEvent>) {
        let Some(items) = self.contact_items.get_mut(id) else {
            return;
        };
        let Some(item_id) = items.shift_remove(key) else {
            return;
        };
        if items.is_empty() {
            self.contact_items.remove(id);
        }
        self.items.remove(&item_id);

        let Some(group_id) = self.group_ids.get(key).copied() else {
            return;
        };
        let Some(group) = self.groups.get_mut(&group_id) else {
            return;
        };

        if let Some(index) = group.position_of(&item_id) {
            group.children.remove(index);
            events.push(TreeEvent::ItemRemoved {
                profile: self.node.id.clone(),
                item: item_id,
                contact: id.clone(),
                parent: ItemParent::Group(group_id),
                index,
            });
        }

        if group.children.is_empty() {
            self.destroy_group(group_id, events);
        }
    }

    /// Moves an item whose sort keys changed so that its group stays sorted. Only the
    /// direct neighbours are compared unless the item is out of place.
    fn replace_item(&mut self, id: &ContactId, key: &GroupKey, events: &mut Vec<TreeEvent>) {
        let Some(item_id) = self
            .contact_items
            .get(id)
            .and_then(|items| items.get(key))
            .copied()
        else {
            return;
        };
        let Some(group_id) = self.group_ids.get(key).copied() else {
            return;
        };
        let Some(from) = self
            .groups
            .get(&group_id)
            .and_then(|group| group.position_of(&item_id))
        else {
            return;
        };

        if self.is_in_order(group_id, from) {
            return;
        }

        if let Some(group) = self.groups.get_mut(&group_id) {
            group.children.remove(from);
        }
        let to = self.insertion_index(group_id, id);
        if let Some(group) = self.groups.get_mut(&group_id) {
            group.children.insert(to, item_id);
        }

        if from != to {
            events.push(TreeEvent::ItemMoved {
                profile: self.node.id.clone(),
                item: item_id,
                parent: ItemParent::Group(group_id),
                from,
                to,
            });
        }
    }

    fn is_in_order(&self, group_id: GroupNodeId, index: usize) -> bool {
        let Some(group) = self.groups.get(&group_id) else {
            return true;
        };
        let entry_at = |index: usize| {
            group
                .children
                .get(index)
                .and_then(|child| self.child_entry(child))
        };
        let Some(entry) = entry_at(index) else {
            return true;
        };

        let left_in_order = index
            .checked_sub(1)
            .and_then(entry_at)
            .map_or(true, |left| {
                self.comparator.compare_contacts(left, entry) != Ordering::Greater
            });
        let right_in_order = entry_at(index + 1).map_or(true, |right| {
            self.comparator.compare_contacts(entry, right) != Ordering::Greater
        });

        left_in_order && right_in_order
    }

    fn insertion_index(&self, group_id: GroupNodeId, id: &ContactId) -> usize {
        let (Some(group), Some(entry)) = (self.groups.get(&group_id), self.store.get(id)) else {
            return 0;
        };
        group.children.partition_point(|child| {
            self.child_entry(child).map_or(true, |other| {
                self.comparator.compare_contacts(other, entry) == Ordering::Less
            })
        })
    }

    fn child_entry(&self, child: &ViewItemId) -> Option<&ContactEntry> {
        self.items
            .get(child)
            .and_then(|item| self.store.get(&item.contact))
    }
}

impl ProfileTree {
    /// Returns the node for `key`, creating it at its sorted position if needed.
    fn ensure_group(&mut self, key: &GroupKey, events: &mut Vec<TreeEvent>) -> GroupNodeId {
        if let Some(id) = self.group_ids.get(key) {
            return *id;
        }

        let state = load_state(
            &self.deps.group_state_repo,
            &self.node.id,
            &key.storage_key(),
        );
        let group = GroupNode {
            id: self.deps.ids.next_group_id(),
            key: key.clone(),
            children: vec![],
            counts: Default::default(),
            open: state.open,
            rank: state.rank,
        };
        let group_id = group.id;

        let index = self.profile_child_index(ChildSortKey::Group(GroupSortKey {
            key: &group.key,
            rank: group.rank,
        }));
        self.node.children.insert(index, TreeChild::Group(group_id));

        debug!("Created group '{}' in profile {}.", key, self.node.id);
        events.push(TreeEvent::GroupCreated {
            profile: self.node.id.clone(),
            group: group_id,
            key: key.clone(),
            index,
        });

        self.group_ids.insert(key.clone(), group_id);
        self.groups.insert(group_id, group);
        group_id
    }

    fn destroy_group(&mut self, group_id: GroupNodeId, events: &mut Vec<TreeEvent>) {
        let Some(group) = self.groups.remove(&group_id) else {
            return;
        };
        self.group_ids.remove(&group.key);

        let Some(index) = self.node.position_of(&TreeChild::Group(group_id)) else {
            return;
        };
        self.node.children.remove(index);

        debug!("Destroyed group '{}' in profile {}.", group.key, self.node.id);
        events.push(TreeEvent::GroupDestroyed {
            profile: self.node.id.clone(),
            group: group_id,
            key: group.key,
            index,
        });
    }

    fn replace_group(&mut self, group_id: GroupNodeId, events: &mut Vec<TreeEvent>) {
        let child = TreeChild::Group(group_id);
        let Some(from) = self.node.position_of(&child) else {
            return;
        };

        self.node.children.remove(from);
        let to = match self.groups.get(&group_id) {
            Some(group) => self.profile_child_index(ChildSortKey::Group(GroupSortKey {
                key: &group.key,
                rank: group.rank,
            })),
            None => from,
        };
        self.node.children.insert(to, child);

        if from != to {
            events.push(TreeEvent::GroupMoved {
                profile: self.node.id.clone(),
                group: group_id,
                from,
                to,
            });
        }
    }

    fn profile_child_index(&self, key: ChildSortKey) -> usize {
        self.node.children.partition_point(|child| {
            self.child_sort_key(child).map_or(true, |existing| {
                self.comparator.compare_children(existing, key) == Ordering::Less
            })
        })
    }

    fn child_sort_key(&self, child: &TreeChild) -> Option<ChildSortKey<'_>> {
        match child {
            TreeChild::Contact(_) => self.self_entry.as_ref().map(ChildSortKey::Contact),
            TreeChild::Group(id) => self.groups.get(id).map(|group| {
                ChildSortKey::Group(GroupSortKey {
                    key: &group.key,
                    rank: group.rank,
                })
            }),
        }
    }

    fn resort_group(&mut self, group_id: GroupNodeId, events: &mut Vec<TreeEvent>) {
        let Some(group) = self.groups.get(&group_id) else {
            return;
        };
        let mut target = group.children.clone();
        target.sort_by(|lhs, rhs| match (self.child_entry(lhs), self.child_entry(rhs)) {
            (Some(lhs), Some(rhs)) => self.comparator.compare_contacts(lhs, rhs),
            _ => Ordering::Equal,
        });

        let Some(group) = self.groups.get_mut(&group_id) else {
            return;
        };
        for (item, from, to) in reorder(&mut group.children, &target) {
            events.push(TreeEvent::ItemMoved {
                profile: self.node.id.clone(),
                item,
                parent: ItemParent::Group(group_id),
                from,
                to,
            });
        }
    }

    fn resort_profile(&mut self, events: &mut Vec<TreeEvent>) {
        let mut target = self.node.children.clone();
        target.sort_by(
            |lhs, rhs| match (self.child_sort_key(lhs), self.child_sort_key(rhs)) {
                (Some(lhs), Some(rhs)) => self.comparator.compare_children(lhs, rhs),
                _ => Ordering::Equal,
            },
        );

        for (child, from, to) in reorder(&mut self.node.children, &target) {
            events.push(match child {
                TreeChild::Group(group) => TreeEvent::GroupMoved {
                    profile: self.node.id.clone(),
                    group,
                    from,
                    to,
                },
                TreeChild::Contact(item) => TreeEvent::ItemMoved {
                    profile: self.node.id.clone(),
                    item,
                    parent: ItemParent::Profile,
                    from,
                    to,
                },
            });
        }
    }
}

impl ProfileTree {
    /// The self contact bypasses grouping and lives directly below the profile.
    fn reconcile_self(&mut self, changed: bool, events: &mut Vec<TreeEvent>) {
        let desired = self.node.enabled
            && self.self_entry.as_ref().map_or(false, |entry| {
                self.filters.show_self || entry.resource_count() > 1
            });

        match (self.self_item, desired) {
            (None, true) => self.insert_self_item(events),
            (Some(_), false) => self.remove_self_item(events),
            (Some(item), true) if changed => {
                if let Some(entry) = self.self_entry.as_ref() {
                    events.push(TreeEvent::ItemChanged {
                        profile: self.node.id.clone(),
                        item,
                        contact: entry.id.clone(),
                    });
                }
            }
            _ => (),
        }
    }

    fn insert_self_item(&mut self, events: &mut Vec<TreeEvent>) {
        let Some(entry) = self.self_entry.as_ref() else {
            return;
        };
        let contact = entry.id.clone();
        let index = self.profile_child_index(ChildSortKey::Contact(entry));
        let item_id = self.deps.ids.next_item_id();

        self.node.children.insert(index, TreeChild::Contact(item_id));
        self.items.insert(
            item_id,
            ViewItem {
                id: item_id,
                contact: contact.clone(),
                parent: ItemParent::Profile,
            },
        );
        self.self_item = Some(item_id);

        events.push(TreeEvent::ItemInserted {
            profile: self.node.id.clone(),
            item: item_id,
            contact,
            parent: ItemParent::Profile,
            index,
        });
    }

    fn remove_self_item(&mut self, events: &mut Vec<TreeEvent>) {
        let Some(item_id) = self.self_item.take() else {
            return;
        };
        let Some(item) = self.items.remove(&item_id) else {
            return;
        };
        let Some(index) = self.node.position_of(&TreeChild::Contact(item_id)) else {
            return;
        };
        self.node.children.remove(index);

        events.push(TreeEvent::ItemRemoved {
            profile: self.node.id.clone(),
            item: item_id,
            contact: item.contact,
            parent: ItemParent::Profile,
            index,
        });
    }
}

/// Reads the persisted state of a group or profile. Storage failures fall back to the
/// defaults.
fn load_state(
    repo: &DynGroupStateRepository,
    profile: &ProfileId,
    key: &str,
) -> GroupState {
    match repo.get(profile, key) {
        Ok(state) => state.unwrap_or_default(),
        Err(err) => {
            warn!("Failed to load state of '{key}' in profile {profile}. {}", err.to_string());
            GroupState::default()
        }
    }
}
