// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::domain::shared::models::GroupName;

/// Identifies a group node inside a profile. At most one node exists per key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroupKey {
    General,
    Agents,
    Private,
    NotInList,
    Hidden,
    User(GroupName),
}

/// The kind of a group without its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupKind {
    General,
    Agents,
    Private,
    NotInList,
    Hidden,
    User,
}

impl GroupKey {
    pub fn kind(&self) -> GroupKind {
        match self {
            GroupKey::General => GroupKind::General,
            GroupKey::Agents => GroupKind::Agents,
            GroupKey::Private => GroupKind::Private,
            GroupKey::NotInList => GroupKind::NotInList,
            GroupKey::Hidden => GroupKind::Hidden,
            GroupKey::User(_) => GroupKind::User,
        }
    }

    pub fn is_special(&self) -> bool {
        !matches!(self, GroupKey::User(_))
    }

    pub fn is_favorites(&self) -> bool {
        matches!(self, GroupKey::User(name) if name.is_favorites())
    }

    /// The (untranslated) label of the group.
    pub fn label(&self) -> &str {
        match self {
            GroupKey::General => "General",
            GroupKey::Agents => "Agents/Transports",
            GroupKey::Private => "Private Messages",
            GroupKey::NotInList => "Not in list",
            GroupKey::Hidden => GroupName::HIDDEN,
            GroupKey::User(name) => name.as_str(),
        }
    }

    /// The key under which the open state and rank of this group are persisted. Special
    /// groups and user groups live in separate namespaces, so a user group named like a
    /// special group keeps its own state.
    pub fn storage_key(&self) -> String {
        match self {
            GroupKey::User(name) => format!("user:{name}"),
            GroupKey::General => "special:general".to_string(),
            GroupKey::Agents => "special:agents".to_string(),
            GroupKey::Private => "special:private".to_string(),
            GroupKey::NotInList => "special:not-in-list".to_string(),
            GroupKey::Hidden => "special:hidden".to_string(),
        }
    }
}

impl Display for GroupKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<GroupName> for GroupKey {
    fn from(value: GroupName) -> Self {
        if value.is_hidden() {
            return GroupKey::Hidden;
        }
        GroupKey::User(value)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use crate::domain::settings::models::profile_storage_key;

    use super::*;

    #[test]
    fn test_storage_keys_do_not_collide_with_user_groups() {
        let special = [
            GroupKey::General,
            GroupKey::Agents,
            GroupKey::Private,
            GroupKey::NotInList,
            GroupKey::Hidden,
        ];
        let mut keys = HashSet::new();
        for key in special.iter() {
            assert!(keys.insert(key.storage_key()));
            let namesake = GroupKey::User(GroupName::from(key.label()));
            assert!(keys.insert(namesake.storage_key()));
        }
        assert!(keys.insert(profile_storage_key("Work")));
        assert!(keys.insert(GroupKey::User(GroupName::from("Work")).storage_key()));

        assert_eq!(
            GroupKey::User(GroupName::from("General")).storage_key(),
            "user:General"
        );
        assert_ne!(
            GroupKey::General.storage_key(),
            GroupKey::User(GroupName::from("General")).storage_key()
        );
    }

    #[test]
    fn test_hidden_group_name_maps_to_special_key() {
        assert_eq!(GroupKey::from(GroupName::from("Hidden")), GroupKey::Hidden);
        assert_eq!(
            GroupKey::from(GroupName::from("Work")),
            GroupKey::User(GroupName::from("Work"))
        );
    }

    #[test]
    fn test_favorites() {
        assert!(GroupKey::User(GroupName::from("Favorites")).is_favorites());
        assert!(!GroupKey::General.is_favorites());
    }
}
