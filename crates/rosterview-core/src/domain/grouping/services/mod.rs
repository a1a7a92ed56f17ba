// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use grouping_resolver::groups_for;
pub use visibility_policy::{desired_groups, is_visible};

mod grouping_resolver;
mod visibility_policy;
