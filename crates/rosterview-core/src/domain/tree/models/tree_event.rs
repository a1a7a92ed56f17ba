// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::grouping::models::GroupKey;
use crate::domain::shared::models::{ContactId, ProfileId};

use super::{GroupCounts, GroupNodeId, ItemParent, ViewItemId};

/// The node whose counters changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CountsNode {
    Profile,
    Group(GroupNodeId),
}

/// The incremental updates a view needs to mirror the tree without a full repaint.
/// Indexes refer to the position inside the parent at the time the event was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TreeEvent {
    ProfileInserted {
        profile: ProfileId,
        index: usize,
    },
    ProfileRemoved {
        profile: ProfileId,
        index: usize,
    },
    ProfileMoved {
        profile: ProfileId,
        from: usize,
        to: usize,
    },
    GroupCreated {
        profile: ProfileId,
        group: GroupNodeId,
        key: GroupKey,
        index: usize,
    },
    GroupDestroyed {
        profile: ProfileId,
        group: GroupNodeId,
        key: GroupKey,
        index: usize,
    },
    GroupMoved {
        profile: ProfileId,
        group: GroupNodeId,
        from: usize,
        to: usize,
    },
    ItemInserted {
        profile: ProfileId,
        item: ViewItemId,
        contact: ContactId,
        parent: ItemParent,
        index: usize,
    },
    ItemRemoved {
        profile: ProfileId,
        item: ViewItemId,
        contact: ContactId,
        parent: ItemParent,
        index: usize,
    },
    ItemMoved {
        profile: ProfileId,
        item: ViewItemId,
        parent: ItemParent,
        from: usize,
        to: usize,
    },
    /// The item's content (status, name, avatar, ...) changed but its position didn't.
    ItemChanged {
        profile: ProfileId,
        item: ViewItemId,
        contact: ContactId,
    },
    CountsChanged {
        profile: ProfileId,
        node: CountsNode,
        counts: GroupCounts,
    },
}

impl TreeEvent {
    pub fn profile(&self) -> &ProfileId {
        match self {
            TreeEvent::ProfileInserted { profile, .. }
            | TreeEvent::ProfileRemoved { profile, .. }
            | TreeEvent::ProfileMoved { profile, .. }
            | TreeEvent::GroupCreated { profile, .. }
            | TreeEvent::GroupDestroyed { profile, .. }
            | TreeEvent::GroupMoved { profile, .. }
            | TreeEvent::ItemInserted { profile, .. }
            | TreeEvent::ItemRemoved { profile, .. }
            | TreeEvent::ItemMoved { profile, .. }
            | TreeEvent::ItemChanged { profile, .. }
            | TreeEvent::CountsChanged { profile, .. } => profile,
        }
    }

    /// Returns `true` for events that change the shape of the tree.
    pub fn is_structural(&self) -> bool {
        !matches!(
            self,
            TreeEvent::ItemChanged { .. } | TreeEvent::CountsChanged { .. }
        )
    }
}
