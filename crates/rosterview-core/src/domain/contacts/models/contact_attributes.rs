// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::domain::shared::models::{Availability, GroupName};

/// The attributes of a roster item as delivered by the roster/presence source. Every update
/// carries the complete set, entries are never patched field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactAttributes {
    pub name: Option<String>,
    /// User-assigned groups. An empty set means "ungrouped".
    pub groups: IndexSet<GroupName>,
    pub in_list: bool,
    pub is_transport: bool,
    /// A private conversation with a room occupant.
    pub is_private: bool,
    /// The availability of the highest priority resource.
    pub availability: Availability,
    /// The currently connected resources.
    pub resources: Vec<String>,
    pub status_message: Option<String>,
}

impl Default for ContactAttributes {
    fn default() -> Self {
        ContactAttributes {
            name: None,
            groups: IndexSet::new(),
            in_list: true,
            is_transport: false,
            is_private: false,
            availability: Availability::Unavailable,
            resources: vec![],
            status_message: None,
        }
    }
}

impl ContactAttributes {
    pub fn is_available(&self) -> bool {
        self.availability.is_available()
    }

    pub fn is_away(&self) -> bool {
        self.availability.is_away()
    }

    pub fn is_hidden(&self) -> bool {
        self.groups.iter().any(GroupName::is_hidden)
    }
}
