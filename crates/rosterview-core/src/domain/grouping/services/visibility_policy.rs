// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;

use crate::domain::contacts::models::ContactEntry;
use crate::domain::grouping::models::GroupKey;
use crate::domain::settings::models::FilterConfig;

use super::groups_for;

/// Decides whether `entry` should have a view item in the group `key`.
pub fn is_visible(entry: &ContactEntry, key: &GroupKey, filters: &FilterConfig) -> bool {
    if entry.alerting {
        return true;
    }

    match key {
        GroupKey::Agents => filters.show_agents,
        GroupKey::NotInList | GroupKey::Private if filters.auto_delete_unlisted => false,
        _ => {
            (filters.show_offline || entry.is_available())
                && (filters.show_away || !entry.is_away())
                && (filters.show_hidden || !entry.is_hidden())
        }
    }
}

/// The groups in which `entry` should currently have a view item. Grouping and visibility
/// are always evaluated together.
pub fn desired_groups(entry: &ContactEntry, filters: &FilterConfig) -> IndexSet<GroupKey> {
    groups_for(entry)
        .into_iter()
        .filter(|key| is_visible(entry, key, filters))
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::contacts::models::ContactAttributes;
    use crate::domain::shared::models::{Availability, GroupName};

    use super::*;

    fn entry(attributes: ContactAttributes) -> ContactEntry {
        ContactEntry::new("a@prose.org".parse().unwrap(), attributes)
    }

    fn show_all() -> FilterConfig {
        FilterConfig {
            show_offline: true,
            show_away: true,
            show_hidden: true,
            show_agents: true,
            show_self: true,
            auto_delete_unlisted: false,
        }
    }

    #[test]
    fn test_offline_filter() {
        let offline = entry(ContactAttributes::default());
        let filters = FilterConfig {
            show_offline: false,
            ..show_all()
        };

        assert!(!is_visible(&offline, &GroupKey::General, &filters));
        assert!(is_visible(&offline, &GroupKey::General, &show_all()));
    }

    #[test]
    fn test_away_and_hidden_filters() {
        let away = entry(ContactAttributes {
            availability: Availability::ExtendedAway,
            ..Default::default()
        });
        let hidden = entry(ContactAttributes {
            availability: Availability::Available,
            groups: IndexSet::from([GroupName::from("Hidden")]),
            ..Default::default()
        });

        let no_away = FilterConfig {
            show_away: false,
            ..show_all()
        };
        let no_hidden = FilterConfig {
            show_hidden: false,
            ..show_all()
        };

        assert!(!is_visible(&away, &GroupKey::General, &no_away));
        assert!(is_visible(&away, &GroupKey::General, &no_hidden));
        assert!(!is_visible(&hidden, &GroupKey::Hidden, &no_hidden));
        assert!(is_visible(&hidden, &GroupKey::Hidden, &no_away));
    }

    #[test]
    fn test_agents_only_depend_on_show_agents() {
        let transport = entry(ContactAttributes {
            is_transport: true,
            ..Default::default()
        });
        let filters = FilterConfig {
            show_offline: false,
            show_agents: true,
            ..show_all()
        };

        assert!(is_visible(&transport, &GroupKey::Agents, &filters));
        assert!(!is_visible(
            &transport,
            &GroupKey::Agents,
            &FilterConfig {
                show_agents: false,
                ..filters
            }
        ));
    }

    #[test]
    fn test_alerting_bypasses_all_filters() {
        let mut unlisted = entry(ContactAttributes {
            in_list: false,
            ..Default::default()
        });
        let filters = FilterConfig {
            show_offline: false,
            show_agents: false,
            auto_delete_unlisted: true,
            ..show_all()
        };

        assert!(desired_groups(&unlisted, &filters).is_empty());

        unlisted.alerting = true;
        assert_eq!(
            desired_groups(&unlisted, &filters),
            IndexSet::from([GroupKey::NotInList])
        );
    }

    #[test]
    fn test_auto_delete_unlisted() {
        let private = entry(ContactAttributes {
            is_private: true,
            availability: Availability::Available,
            ..Default::default()
        });

        assert!(is_visible(&private, &GroupKey::Private, &show_all()));
        assert!(!is_visible(
            &private,
            &GroupKey::Private,
            &FilterConfig {
                auto_delete_unlisted: true,
                ..show_all()
            }
        ));
    }
}
