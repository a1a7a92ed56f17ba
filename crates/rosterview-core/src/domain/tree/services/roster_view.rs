// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::app::deps::TreeDependencies;
use crate::domain::contacts::models::{ContactAttributes, ContactDecoration};
use crate::domain::grouping::models::GroupKey;
use crate::domain::settings::models::{FilterConfig, RosterViewSettings, SortConfig};
use crate::domain::shared::models::{ContactId, ProfileId};
use crate::domain::sorting::{ProfileSortKey, SortComparator};
use crate::domain::tree::models::{TreeEvent, ViewItemId};

use super::ProfileTree;

/// The complete contact list: all profiles in sorted order together with the global filter
/// and sort configuration they are projected with.
pub struct RosterView {
    profiles: Vec<ProfileTree>,
    filters: FilterConfig,
    sorting: SortConfig,
    count_refresh_delay: Duration,
    deps: TreeDependencies,
}

impl RosterView {
    pub fn new(settings: &RosterViewSettings, deps: TreeDependencies) -> Self {
        RosterView {
            profiles: vec![],
            filters: settings.filters(),
            sorting: settings.sorting(),
            count_refresh_delay: settings.count_refresh_delay(),
            deps,
        }
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    pub fn sorting(&self) -> &SortConfig {
        &self.sorting
    }

    pub fn count_refresh_delay(&self) -> Duration {
        self.count_refresh_delay
    }

    /// The profiles in display order.
    pub fn profiles(&self) -> impl Iterator<Item = &ProfileTree> + '_ {
        self.profiles.iter()
    }

    pub fn profile(&self, id: &ProfileId) -> Option<&ProfileTree> {
        self.profiles.iter().find(|tree| tree.id() == id)
    }

    fn position_of(&self, id: &ProfileId) -> Option<usize> {
        self.profiles.iter().position(|tree| tree.id() == id)
    }

    fn comparator(&self) -> SortComparator {
        SortComparator::new(self.sorting)
    }

    fn with_profile(
        &mut self,
        profile: &ProfileId,
        f: impl FnOnce(&mut ProfileTree) -> Vec<TreeEvent>,
    ) -> Vec<TreeEvent> {
        match self.profiles.iter_mut().find(|tree| tree.id() == profile) {
            Some(tree) => f(tree),
            None => {
                debug!("Ignoring update for unknown profile {profile}.");
                vec![]
            }
        }
    }
}

impl RosterView {
    pub fn add_profile(&mut self, id: ProfileId, name: impl Into<String>) -> Vec<TreeEvent> {
        if self.position_of(&id).is_some() {
            return vec![];
        }

        let tree = ProfileTree::new(
            id.clone(),
            name,
            self.filters,
            self.comparator(),
            self.count_refresh_delay,
            self.deps.clone(),
        );
        let index = self.insertion_index(&tree);
        self.profiles.insert(index, tree);

        info!("Added profile {id}.");
        vec![TreeEvent::ProfileInserted { profile: id, index }]
    }

    /// Drops the profile together with its pending count refresh.
    pub fn remove_profile(&mut self, id: &ProfileId) -> Vec<TreeEvent> {
        let Some(index) = self.position_of(id) else {
            return vec![];
        };
        self.profiles.remove(index);

        info!("Removed profile {id}.");
        vec![TreeEvent::ProfileRemoved {
            profile: id.clone(),
            index,
        }]
    }

    pub fn set_profile_rank(&mut self, id: &ProfileId, rank: i32) -> Result<Vec<TreeEvent>> {
        let Some(from) = self.position_of(id) else {
            return Ok(vec![]);
        };

        let mut tree = self.profiles.remove(from);
        let result = tree.set_rank(rank);
        let to = self.insertion_index(&tree);
        self.profiles.insert(to, tree);
        result?;

        if from == to {
            return Ok(vec![]);
        }
        Ok(vec![TreeEvent::ProfileMoved {
            profile: id.clone(),
            from,
            to,
        }])
    }

    pub fn set_profile_open(&mut self, id: &ProfileId, open: bool) -> Result<()> {
        let Some(tree) = self.profiles.iter_mut().find(|tree| tree.id() == id) else {
            return Ok(());
        };
        tree.set_open(open)
    }

    pub fn set_profile_enabled(&mut self, id: &ProfileId, enabled: bool) -> Vec<TreeEvent> {
        self.with_profile(id, |tree| tree.set_enabled(enabled))
    }

    fn insertion_index(&self, tree: &ProfileTree) -> usize {
        let comparator = self.comparator();
        self.profiles.partition_point(|existing| {
            comparator.compare_profiles(profile_sort_key(existing), profile_sort_key(tree))
                == Ordering::Less
        })
    }
}

impl RosterView {
    pub fn update_entry(
        &mut self,
        profile: &ProfileId,
        id: &ContactId,
        attributes: ContactAttributes,
    ) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.update_entry(id, attributes))
    }

    pub fn remove_entry(&mut self, profile: &ProfileId, id: &ContactId) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.remove_entry(id))
    }

    pub fn update_self(
        &mut self,
        profile: &ProfileId,
        id: &ContactId,
        attributes: ContactAttributes,
    ) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.update_self(id, attributes))
    }

    pub fn set_alert(&mut self, profile: &ProfileId, id: &ContactId) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.set_alert(id))
    }

    pub fn clear_alert(&mut self, profile: &ProfileId, id: &ContactId) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.clear_alert(id))
    }

    pub fn set_decoration(
        &mut self,
        profile: &ProfileId,
        id: &ContactId,
        decoration: ContactDecoration,
    ) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.set_decoration(id, decoration))
    }

    pub fn clear_profile(&mut self, profile: &ProfileId) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.clear())
    }

    pub fn reconcile_all(&mut self) -> Vec<TreeEvent> {
        self.profiles
            .iter_mut()
            .flat_map(|tree| tree.reconcile_all())
            .collect()
    }

    pub fn set_group_open(&mut self, profile: &ProfileId, key: &GroupKey, open: bool) -> Result<()> {
        let Some(tree) = self.profiles.iter_mut().find(|tree| tree.id() == profile) else {
            return Ok(());
        };
        tree.set_group_open(key, open)
    }

    pub fn set_group_rank(
        &mut self,
        profile: &ProfileId,
        key: &GroupKey,
        rank: i32,
    ) -> Result<Vec<TreeEvent>> {
        let Some(tree) = self.profiles.iter_mut().find(|tree| tree.id() == profile) else {
            return Ok(vec![]);
        };
        tree.set_group_rank(key, rank)
    }
}

impl RosterView {
    /// Applies changed settings. Filter changes re-reconcile every entry, sort changes re-sort
    /// every container.
    pub fn apply_settings(&mut self, settings: &RosterViewSettings) -> Vec<TreeEvent> {
        let mut events = self.set_filters(settings.filters());
        events.extend(self.set_sort_config(settings.sorting()));

        let delay = settings.count_refresh_delay();
        if delay != self.count_refresh_delay {
            self.count_refresh_delay = delay;
            for tree in self.profiles.iter_mut() {
                tree.set_count_refresh_delay(delay);
            }
        }

        events
    }

    pub fn set_filters(&mut self, filters: FilterConfig) -> Vec<TreeEvent> {
        if self.filters == filters {
            return vec![];
        }
        self.filters = filters;
        self.profiles
            .iter_mut()
            .flat_map(|tree| tree.apply_filters(filters))
            .collect()
    }

    pub fn set_sort_config(&mut self, sorting: SortConfig) -> Vec<TreeEvent> {
        if self.sorting == sorting {
            return vec![];
        }
        self.sorting = sorting;

        let comparator = self.comparator();
        let mut events = self
            .profiles
            .iter_mut()
            .flat_map(|tree| tree.set_comparator(comparator))
            .collect::<Vec<_>>();

        let mut target = self
            .profiles
            .iter()
            .map(|tree| tree.id().clone())
            .collect::<Vec<_>>();
        target.sort_by(|lhs, rhs| {
            match (self.profile(lhs), self.profile(rhs)) {
                (Some(lhs), Some(rhs)) => {
                    comparator.compare_profiles(profile_sort_key(lhs), profile_sort_key(rhs))
                }
                _ => Ordering::Equal,
            }
        });

        for (to, id) in target.iter().enumerate() {
            let Some(from) = self.position_of(id) else {
                continue;
            };
            if from == to {
                continue;
            }
            let tree = self.profiles.remove(from);
            self.profiles.insert(to, tree);
            events.push(TreeEvent::ProfileMoved {
                profile: id.clone(),
                from,
                to,
            });
        }

        events
    }

    /// Makes a hidden contact visible by turning on the filters that hide it. Returns its
    /// first item, if it has one afterwards.
    pub fn ensure_visible(
        &mut self,
        profile: &ProfileId,
        contact: &ContactId,
    ) -> (Option<ViewItemId>, Vec<TreeEvent>) {
        let Some(tree) = self.profile(profile) else {
            return (None, vec![]);
        };
        if let Some(item) = tree.items_of(contact).first() {
            return (Some(*item), vec![]);
        }
        let Some(entry) = tree.entry(contact) else {
            return (None, vec![]);
        };

        let mut filters = self.filters;
        if entry.attributes.is_transport {
            filters.show_agents = true;
        } else {
            filters.show_offline |= !entry.is_available();
            filters.show_away |= entry.is_away();
            filters.show_hidden |= entry.is_hidden();
        }

        let events = self.set_filters(filters);
        let item = self
            .profile(profile)
            .and_then(|tree| tree.items_of(contact).first().copied());
        (item, events)
    }

    /// Searches the visible items of all enabled profiles.
    pub fn find_items(&self, text: &str) -> Vec<(ProfileId, ViewItemId)> {
        self.profiles
            .iter()
            .flat_map(|tree| {
                tree.find_items(text)
                    .into_iter()
                    .map(|item| (tree.id().clone(), item))
            })
            .collect()
    }
}

impl RosterView {
    pub fn pending_count_generation(&self, profile: &ProfileId) -> Option<u64> {
        self.profile(profile)
            .and_then(|tree| tree.pending_count_generation())
    }

    /// Refreshes the counters of every profile whose coalesced refresh is due.
    pub fn flush_due_counts(&mut self) -> Vec<TreeEvent> {
        self.profiles
            .iter_mut()
            .flat_map(|tree| tree.flush_due_counts())
            .collect()
    }

    pub fn flush_counts_generation(&mut self, profile: &ProfileId, generation: u64) -> Vec<TreeEvent> {
        self.with_profile(profile, |tree| tree.flush_counts_generation(generation))
    }

    pub fn flush_counts(&mut self) -> Vec<TreeEvent> {
        self.profiles
            .iter_mut()
            .flat_map(|tree| tree.flush_counts())
            .collect()
    }
}

fn profile_sort_key(tree: &ProfileTree) -> ProfileSortKey<'_> {
    ProfileSortKey {
        id: tree.id(),
        name: &tree.node().name,
        rank: tree.node().rank,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::contact_id;
    use crate::domain::settings::models::AccountSortStyle;
    use crate::infra::settings::InMemoryGroupStateRepository;
    use crate::test::{ConstantTimeProvider, ContactAttributesBuilder};

    use super::*;

    fn view(settings: RosterViewSettings) -> RosterView {
        RosterView::new(
            &settings,
            TreeDependencies::new(
                Arc::new(InMemoryGroupStateRepository::default()),
                Arc::new(ConstantTimeProvider::ymd(2023, 1, 1)),
            ),
        )
    }

    fn profile_names(view: &RosterView) -> Vec<String> {
        view.profiles()
            .map(|tree| tree.node().name.clone())
            .collect()
    }

    #[test]
    fn test_profiles_are_sorted() {
        let mut view = view(RosterViewSettings::default());
        view.add_profile(ProfileId::from("w"), "Work");
        let events = view.add_profile(ProfileId::from("h"), "Home");

        assert_eq!(
            events,
            vec![TreeEvent::ProfileInserted {
                profile: ProfileId::from("h"),
                index: 0
            }]
        );
        assert_eq!(profile_names(&view), vec!["Home", "Work"]);
        assert!(view.add_profile(ProfileId::from("h"), "Home").is_empty());
    }

    #[test]
    fn test_profile_rank() -> Result<()> {
        let mut view = view(RosterViewSettings {
            account_sort_style: AccountSortStyle::Rank,
            ..Default::default()
        });
        view.add_profile(ProfileId::from("h"), "Home");
        view.add_profile(ProfileId::from("w"), "Work");

        let events = view.set_profile_rank(&ProfileId::from("w"), -1)?;

        assert_eq!(
            events,
            vec![TreeEvent::ProfileMoved {
                profile: ProfileId::from("w"),
                from: 1,
                to: 0
            }]
        );
        assert_eq!(profile_names(&view), vec!["Work", "Home"]);
        Ok(())
    }

    #[test]
    fn test_switching_account_sort_style_moves_profiles() -> Result<()> {
        let mut view = view(RosterViewSettings::default());
        view.add_profile(ProfileId::from("h"), "Home");
        view.add_profile(ProfileId::from("w"), "Work");
        view.set_profile_rank(&ProfileId::from("w"), -1)?;
        assert_eq!(profile_names(&view), vec!["Home", "Work"]);

        let events = view.set_sort_config(SortConfig {
            account_sort_style: AccountSortStyle::Rank,
            ..Default::default()
        });

        assert_eq!(
            events,
            vec![TreeEvent::ProfileMoved {
                profile: ProfileId::from("w"),
                from: 1,
                to: 0
            }]
        );
        Ok(())
    }

    #[test]
    fn test_ensure_visible_turns_on_filters() {
        let mut view = view(RosterViewSettings::default());
        let profile = ProfileId::from("w");
        let offline = contact_id!("offline@prose.org");
        view.add_profile(profile.clone(), "Work");
        view.update_entry(&profile, &offline, ContactAttributesBuilder::new().build());
        assert!(view.profile(&profile).unwrap().items_of(&offline).is_empty());

        let (item, events) = view.ensure_visible(&profile, &offline);

        assert!(view.filters().show_offline);
        assert!(item.is_some());
        assert_eq!(
            item,
            view.profile(&profile).unwrap().items_of(&offline).first().copied()
        );
        assert!(!events.is_empty());
    }

    #[test]
    fn test_updates_for_unknown_profiles_are_ignored() {
        let mut view = view(RosterViewSettings::default());
        assert!(view
            .update_entry(
                &ProfileId::from("nope"),
                &contact_id!("a@prose.org"),
                Default::default()
            )
            .is_empty());
    }

    #[test]
    fn test_find_items_across_profiles() {
        let mut view = view(RosterViewSettings {
            show_offline: true,
            ..Default::default()
        });
        for profile in ["h", "w"] {
            view.add_profile(ProfileId::from(profile), profile);
            view.update_entry(
                &ProfileId::from(profile),
                &contact_id!("alice@prose.org"),
                ContactAttributesBuilder::new().name("Alice").build(),
            );
        }

        let results = view.find_items("ali");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].0, ProfileId::from("h"));
        assert_eq!(results[1].0, ProfileId::from("w"));
    }
}
