// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::grouping::models::GroupKey;

use super::{GroupCounts, GroupNodeId, ViewItemId};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupNode {
    pub id: GroupNodeId,
    pub key: GroupKey,
    /// Sorted view items.
    pub children: Vec<ViewItemId>,
    /// Refreshed by the coalesced count update, may lag behind `children`.
    pub counts: GroupCounts,
    pub open: bool,
    pub rank: i32,
}

impl GroupNode {
    pub fn position_of(&self, item: &ViewItemId) -> Option<usize> {
        self.children.iter().position(|child| child == item)
    }
}
