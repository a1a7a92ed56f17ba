// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::Serialize;

/// The label counters of a group or profile, e.g. "Work (3/7)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GroupCounts {
    pub online: usize,
    pub total: usize,
}

impl GroupCounts {
    pub fn new(online: usize, total: usize) -> Self {
        GroupCounts { online, total }
    }
}
