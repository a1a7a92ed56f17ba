// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use filter_config::FilterConfig;
pub use group_state::{profile_storage_key, GroupState};
pub use roster_view_settings::{RosterViewSettings, SettingsError};
pub use sort_config::{
    AccountSortStyle, ContactSortStyle, GroupSortStyle, ParticipantSortStyle, SortConfig,
};

mod filter_config;
mod group_state;
mod roster_view_settings;
mod sort_config;
