// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::shared::models::Nickname;

use super::RoleGroup;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParticipantChange {
    Inserted {
        nick: Nickname,
        group: RoleGroup,
        index: usize,
    },
    Removed {
        nick: Nickname,
        group: RoleGroup,
        index: usize,
    },
    /// A row changed its position. Source and destination may be the same group.
    Moved {
        nick: Nickname,
        from_group: RoleGroup,
        from: usize,
        to_group: RoleGroup,
        to: usize,
    },
    Updated {
        nick: Nickname,
        group: RoleGroup,
        index: usize,
    },
    RowCountChanged {
        group: RoleGroup,
        count: usize,
    },
}
