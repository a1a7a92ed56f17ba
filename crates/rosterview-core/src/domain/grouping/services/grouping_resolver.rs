// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;

use crate::domain::contacts::models::ContactEntry;
use crate::domain::grouping::models::GroupKey;

/// Maps an entry to the groups it belongs to. The special groups are exclusive and checked in
/// order of precedence, user groups are additive. A transport's own groups are ignored.
pub fn groups_for(entry: &ContactEntry) -> IndexSet<GroupKey> {
    let attributes = &entry.attributes;

    let exclusive = if attributes.is_private {
        Some(GroupKey::Private)
    } else if !attributes.in_list {
        Some(GroupKey::NotInList)
    } else if attributes.is_transport {
        Some(GroupKey::Agents)
    } else if attributes.groups.is_empty() {
        Some(GroupKey::General)
    } else {
        None
    };

    if let Some(key) = exclusive {
        return IndexSet::from([key]);
    }

    attributes
        .groups
        .iter()
        .cloned()
        .map(GroupKey::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::contacts::models::ContactAttributes;
    use crate::domain::shared::models::GroupName;

    use super::*;

    fn entry(attributes: ContactAttributes) -> ContactEntry {
        ContactEntry::new("a@prose.org".parse().unwrap(), attributes)
    }

    fn groups(names: &[&str]) -> IndexSet<GroupName> {
        names.iter().map(|n| GroupName::from(*n)).collect()
    }

    #[test]
    fn test_ungrouped_entry_lands_in_general() {
        assert_eq!(
            groups_for(&entry(ContactAttributes::default())),
            IndexSet::from([GroupKey::General])
        );
    }

    #[test]
    fn test_user_groups_are_additive() {
        let entry = entry(ContactAttributes {
            groups: groups(&["Work", "Friends"]),
            ..Default::default()
        });
        assert_eq!(
            groups_for(&entry),
            IndexSet::from([
                GroupKey::User(GroupName::from("Work")),
                GroupKey::User(GroupName::from("Friends"))
            ])
        );
    }

    #[test]
    fn test_transport_ignores_its_groups() {
        let entry = entry(ContactAttributes {
            groups: groups(&["ignored"]),
            is_transport: true,
            ..Default::default()
        });
        assert_eq!(groups_for(&entry), IndexSet::from([GroupKey::Agents]));
    }

    #[test]
    fn test_precedence_of_exclusive_groups() {
        let private = entry(ContactAttributes {
            groups: groups(&["Work"]),
            is_private: true,
            in_list: false,
            is_transport: true,
            ..Default::default()
        });
        assert_eq!(groups_for(&private), IndexSet::from([GroupKey::Private]));

        let not_in_list = entry(ContactAttributes {
            in_list: false,
            is_transport: true,
            ..Default::default()
        });
        assert_eq!(groups_for(&not_in_list), IndexSet::from([GroupKey::NotInList]));
    }

    #[test]
    fn test_hidden_membership_uses_special_group() {
        let entry = entry(ContactAttributes {
            groups: groups(&["Hidden", "Work"]),
            ..Default::default()
        });
        assert_eq!(
            groups_for(&entry),
            IndexSet::from([GroupKey::Hidden, GroupKey::User(GroupName::from("Work"))])
        );
    }
}
