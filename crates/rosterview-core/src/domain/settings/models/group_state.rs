// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};

/// The persisted UI state of a group or profile node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupState {
    pub open: bool,
    pub rank: i32,
}

impl Default for GroupState {
    fn default() -> Self {
        GroupState { open: true, rank: 0 }
    }
}

/// Profiles share the group state storage with their groups, so their key is wrapped in
/// markers that can't collide with a user group name.
pub fn profile_storage_key(profile_name: &str) -> String {
    format!("/\\/{profile_name}\\/\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_storage_key() {
        assert_eq!(profile_storage_key("Work"), r"/\/Work\/\");
    }
}
