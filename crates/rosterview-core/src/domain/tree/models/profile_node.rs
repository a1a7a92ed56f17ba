// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::shared::models::ProfileId;

use super::{GroupCounts, GroupNodeId, ViewItemId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TreeChild {
    Contact(ViewItemId),
    Group(GroupNodeId),
}

/// The root node of an account.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileNode {
    pub id: ProfileId,
    pub name: String,
    /// The self item (if shown) followed by the sorted groups.
    pub children: Vec<TreeChild>,
    pub counts: GroupCounts,
    pub open: bool,
    pub rank: i32,
    pub enabled: bool,
}

impl ProfileNode {
    pub fn position_of(&self, child: &TreeChild) -> Option<usize> {
        self.children.iter().position(|c| c == child)
    }

    pub fn groups(&self) -> impl Iterator<Item = GroupNodeId> + '_ {
        self.children.iter().filter_map(|child| match child {
            TreeChild::Group(id) => Some(*id),
            TreeChild::Contact(_) => None,
        })
    }
}
