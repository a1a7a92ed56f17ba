// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;

use crate::domain::contacts::models::ContactEntry;
use crate::domain::grouping::models::{GroupKey, GroupKind};
use crate::domain::settings::models::{
    AccountSortStyle, ContactSortStyle, GroupSortStyle, SortConfig,
};
use crate::domain::shared::models::ProfileId;
use crate::util::StringExt;

#[derive(Debug, Clone, Copy)]
pub struct GroupSortKey<'a> {
    pub key: &'a GroupKey,
    pub rank: i32,
}

#[derive(Debug, Clone, Copy)]
pub struct ProfileSortKey<'a> {
    pub id: &'a ProfileId,
    pub name: &'a str,
    pub rank: i32,
}

/// A child of a profile node. Contacts always precede groups on the same level.
#[derive(Debug, Clone, Copy)]
pub enum ChildSortKey<'a> {
    Contact(&'a ContactEntry),
    Group(GroupSortKey<'a>),
}

/// Total order over the nodes of the contact list. Every comparison ends with an identity
/// tie-breaker so that two distinct nodes never compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortComparator {
    config: SortConfig,
}

impl SortComparator {
    pub fn new(config: SortConfig) -> Self {
        SortComparator { config }
    }

    pub fn config(&self) -> &SortConfig {
        &self.config
    }

    pub fn compare_contacts(&self, lhs: &ContactEntry, rhs: &ContactEntry) -> Ordering {
        let by_status = match self.config.contact_sort_style {
            ContactSortStyle::Status => lhs
                .attributes
                .availability
                .rank()
                .cmp(&rhs.attributes.availability.rank()),
            ContactSortStyle::Alpha => Ordering::Equal,
        };

        by_status
            .then_with(|| lhs.display_name().cmp_ignore_case(&rhs.display_name()))
            .then_with(|| lhs.id.to_string().cmp(&rhs.id.to_string()))
    }

    pub fn compare_groups(&self, lhs: GroupSortKey, rhs: GroupSortKey) -> Ordering {
        match (lhs.key.is_favorites(), rhs.key.is_favorites()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => (),
        }

        let by_rank = match self.config.group_sort_style {
            GroupSortStyle::Rank => lhs.rank.cmp(&rhs.rank),
            GroupSortStyle::Alpha => Ordering::Equal,
        };

        by_rank
            .then_with(|| kind_rank(lhs.key.kind()).cmp(&kind_rank(rhs.key.kind())))
            .then_with(|| lhs.key.label().cmp_ignore_case(rhs.key.label()))
            .then_with(|| lhs.key.label().cmp(rhs.key.label()))
    }

    pub fn compare_profiles(&self, lhs: ProfileSortKey, rhs: ProfileSortKey) -> Ordering {
        let by_rank = match self.config.account_sort_style {
            AccountSortStyle::Rank => lhs.rank.cmp(&rhs.rank),
            AccountSortStyle::Alpha => Ordering::Equal,
        };

        by_rank
            .then_with(|| lhs.name.cmp_ignore_case(rhs.name))
            .then_with(|| lhs.id.as_str().cmp(rhs.id.as_str()))
    }

    pub fn compare_children(&self, lhs: ChildSortKey, rhs: ChildSortKey) -> Ordering {
        match (lhs, rhs) {
            (ChildSortKey::Contact(lhs), ChildSortKey::Contact(rhs)) => {
                self.compare_contacts(lhs, rhs)
            }
            (ChildSortKey::Contact(_), ChildSortKey::Group(_)) => Ordering::Less,
            (ChildSortKey::Group(_), ChildSortKey::Contact(_)) => Ordering::Greater,
            (ChildSortKey::Group(lhs), ChildSortKey::Group(rhs)) => self.compare_groups(lhs, rhs),
        }
    }
}

fn kind_rank(kind: GroupKind) -> u8 {
    match kind {
        GroupKind::General => 0,
        GroupKind::User => 1,
        GroupKind::Private => 2,
        GroupKind::Agents => 3,
        GroupKind::NotInList => 4,
        GroupKind::Hidden => 5,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::contacts::models::ContactAttributes;
    use crate::domain::shared::models::{Availability, GroupName};

    use super::*;

    fn contact(jid: &str, name: &str, availability: Availability) -> ContactEntry {
        ContactEntry::new(
            jid.parse().unwrap(),
            ContactAttributes {
                name: Some(name.to_string()),
                availability,
                ..Default::default()
            },
        )
    }

    fn user(name: &str) -> GroupKey {
        GroupKey::User(GroupName::from(name))
    }

    fn sorted_groups(comparator: &SortComparator, keys: &[(GroupKey, i32)]) -> Vec<String> {
        let mut keys = keys.to_vec();
        keys.sort_by(|(lhs, lhs_rank), (rhs, rhs_rank)| {
            comparator.compare_groups(
                GroupSortKey {
                    key: lhs,
                    rank: *lhs_rank,
                },
                GroupSortKey {
                    key: rhs,
                    rank: *rhs_rank,
                },
            )
        });
        keys.into_iter().map(|(key, _)| key.to_string()).collect()
    }

    #[test]
    fn test_contacts_by_status_then_name() {
        let comparator = SortComparator::default();
        let mut contacts = vec![
            contact("c@prose.org", "carol", Availability::Unavailable),
            contact("b@prose.org", "Bob", Availability::Away),
            contact("a@prose.org", "alice", Availability::Away),
            contact("d@prose.org", "dave", Availability::Chat),
        ];
        contacts.sort_by(|lhs, rhs| comparator.compare_contacts(lhs, rhs));

        assert_eq!(
            contacts.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
            vec!["dave", "alice", "Bob", "carol"]
        );
    }

    #[test]
    fn test_contacts_alpha_ignores_status() {
        let comparator = SortComparator::new(SortConfig {
            contact_sort_style: ContactSortStyle::Alpha,
            ..Default::default()
        });
        let lhs = contact("z@prose.org", "Anna", Availability::Unavailable);
        let rhs = contact("y@prose.org", "bert", Availability::Chat);
        assert_eq!(comparator.compare_contacts(&lhs, &rhs), Ordering::Less);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let comparator = SortComparator::new(SortConfig {
            contact_sort_style: ContactSortStyle::Alpha,
            ..Default::default()
        });
        let mut contacts = vec![
            contact("z@prose.org", "zoe", Availability::Available),
            contact("e@prose.org", "Émile", Availability::Available),
            contact("p@prose.org", "Peña", Availability::Available),
            contact("a@prose.org", "adam", Availability::Available),
        ];
        contacts.sort_by(|lhs, rhs| comparator.compare_contacts(lhs, rhs));

        assert_eq!(
            contacts.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
            vec!["adam", "Émile", "Peña", "zoe"]
        );
        assert_eq!(
            sorted_groups(&comparator, &[(user("zürich"), 0), (user("Äpfel"), 0)]),
            vec!["Äpfel", "zürich"]
        );
    }

    #[test]
    fn test_equal_names_are_ordered_by_identity() {
        let comparator = SortComparator::default();
        let lhs = contact("a@prose.org", "Same", Availability::Available);
        let rhs = contact("b@prose.org", "Same", Availability::Available);
        assert_eq!(comparator.compare_contacts(&lhs, &rhs), Ordering::Less);
        assert_eq!(comparator.compare_contacts(&rhs, &lhs), Ordering::Greater);
    }

    #[test]
    fn test_groups_alpha_uses_kind_table() {
        let comparator = SortComparator::default();
        assert_eq!(
            sorted_groups(
                &comparator,
                &[
                    (GroupKey::NotInList, 0),
                    (GroupKey::Agents, 0),
                    (user("work"), 0),
                    (GroupKey::Private, 0),
                    (user("Friends"), 0),
                    (GroupKey::General, 0),
                    (user("Favorites"), 0),
                ]
            ),
            vec![
                "Favorites",
                "General",
                "Friends",
                "work",
                "Private Messages",
                "Agents/Transports",
                "Not in list"
            ]
        );
    }

    #[test]
    fn test_groups_by_rank_keep_favorites_first() {
        let comparator = SortComparator::new(SortConfig {
            group_sort_style: GroupSortStyle::Rank,
            ..Default::default()
        });
        assert_eq!(
            sorted_groups(
                &comparator,
                &[
                    (user("Work"), 2),
                    (user("Favorites"), 9),
                    (GroupKey::General, 5),
                    (user("Friends"), 1),
                ]
            ),
            vec!["Favorites", "Friends", "Work", "General"]
        );
    }

    #[test]
    fn test_contacts_precede_groups() {
        let comparator = SortComparator::default();
        let entry = contact("a@prose.org", "zed", Availability::Unavailable);
        let key = GroupKey::General;
        assert_eq!(
            comparator.compare_children(
                ChildSortKey::Contact(&entry),
                ChildSortKey::Group(GroupSortKey { key: &key, rank: 0 })
            ),
            Ordering::Less
        );
    }

    #[test]
    fn test_profiles() {
        let work = ProfileId::from("work");
        let home = ProfileId::from("home");
        let lhs = ProfileSortKey {
            id: &work,
            name: "Work",
            rank: 0,
        };
        let rhs = ProfileSortKey {
            id: &home,
            name: "Home",
            rank: 1,
        };

        assert_eq!(
            SortComparator::default().compare_profiles(lhs, rhs),
            Ordering::Greater
        );
        assert_eq!(
            SortComparator::new(SortConfig {
                account_sort_style: AccountSortStyle::Rank,
                ..Default::default()
            })
            .compare_profiles(lhs, rhs),
            Ordering::Less
        );
    }
}
