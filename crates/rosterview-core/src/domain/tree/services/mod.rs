// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use coalescing_scheduler::CoalescingScheduler;
pub use profile_tree::ProfileTree;
pub use roster_view::RosterView;

mod coalescing_scheduler;
mod profile_tree;
mod roster_view;
