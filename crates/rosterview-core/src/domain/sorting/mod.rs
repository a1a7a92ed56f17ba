// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use sort_comparator::{ChildSortKey, GroupSortKey, ProfileSortKey, SortComparator};

mod sort_comparator;
