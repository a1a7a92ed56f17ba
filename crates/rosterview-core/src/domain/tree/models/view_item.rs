// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

use crate::domain::shared::models::ContactId;

use super::{GroupNodeId, ViewItemId};

/// Where a view item lives. The self contact is shown directly below its profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ItemParent {
    Profile,
    Group(GroupNodeId),
}

/// The projection of one contact into one parent node. Removing it never touches the
/// contact itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    pub id: ViewItemId,
    pub contact: ContactId,
    pub parent: ItemParent,
}
