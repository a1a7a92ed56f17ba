// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The role of an occupant as announced by the room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum OccupantRole {
    Moderator,
    Participant,
    Visitor,
    #[default]
    None,
}

/// One of the three fixed groups of a room's participant list, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter)]
pub enum RoleGroup {
    Moderator,
    Participant,
    Visitor,
}

impl OccupantRole {
    /// Occupants without a role are listed as visitors.
    pub fn group(&self) -> RoleGroup {
        match self {
            OccupantRole::Moderator => RoleGroup::Moderator,
            OccupantRole::Participant => RoleGroup::Participant,
            OccupantRole::Visitor | OccupantRole::None => RoleGroup::Visitor,
        }
    }
}

impl RoleGroup {
    pub fn index(&self) -> usize {
        match self {
            RoleGroup::Moderator => 0,
            RoleGroup::Participant => 1,
            RoleGroup::Visitor => 2,
        }
    }
}
