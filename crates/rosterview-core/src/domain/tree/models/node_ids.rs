// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ViewItemId(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupNodeId(u64);

impl ViewItemId {
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl GroupNodeId {
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl Display for ViewItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "item#{}", self.0)
    }
}

impl Display for GroupNodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "group#{}", self.0)
    }
}

/// Hands out node identities. Identities are never reused, so a node that is removed and
/// created again can be told apart from the one that survived.
#[derive(Debug, Clone, Default)]
pub struct NodeIdAllocator {
    next: Arc<AtomicU64>,
}

impl NodeIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_item_id(&self) -> ViewItemId {
        ViewItemId(self.next_value())
    }

    pub fn next_group_id(&self) -> GroupNodeId {
        GroupNodeId(self.next_value())
    }

    fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed) + 1
    }
}
