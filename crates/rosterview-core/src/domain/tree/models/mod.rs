// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use group_counts::GroupCounts;
pub use group_node::GroupNode;
pub use node_ids::{GroupNodeId, NodeIdAllocator, ViewItemId};
pub use profile_node::{ProfileNode, TreeChild};
pub use tree_event::{CountsNode, TreeEvent};
pub use view_item::{ItemParent, ViewItem};

mod group_counts;
mod group_node;
mod node_ids;
mod profile_node;
mod tree_event;
mod view_item;
