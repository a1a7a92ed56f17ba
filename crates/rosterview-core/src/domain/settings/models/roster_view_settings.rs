// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{
    AccountSortStyle, ContactSortStyle, FilterConfig, GroupSortStyle, ParticipantSortStyle,
    SortConfig,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("The count refresh delay must be greater than zero.")]
    InvalidRefreshDelay,
}

/// All options that influence the contact list projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct RosterViewSettings {
    pub show_offline: bool,
    pub show_away: bool,
    pub show_hidden: bool,
    pub show_agents: bool,
    pub show_self: bool,
    pub auto_delete_unlisted: bool,
    pub contact_sort_style: ContactSortStyle,
    pub group_sort_style: GroupSortStyle,
    pub account_sort_style: AccountSortStyle,
    pub participant_sort_style: ParticipantSortStyle,
    /// Delay used to coalesce group count updates.
    pub count_refresh_delay_ms: u64,
}

impl Default for RosterViewSettings {
    fn default() -> Self {
        let filters = FilterConfig::default();
        let sorting = SortConfig::default();

        RosterViewSettings {
            show_offline: filters.show_offline,
            show_away: filters.show_away,
            show_hidden: filters.show_hidden,
            show_agents: filters.show_agents,
            show_self: filters.show_self,
            auto_delete_unlisted: filters.auto_delete_unlisted,
            contact_sort_style: sorting.contact_sort_style,
            group_sort_style: sorting.group_sort_style,
            account_sort_style: sorting.account_sort_style,
            participant_sort_style: ParticipantSortStyle::default(),
            count_refresh_delay_ms: 250,
        }
    }
}

impl RosterViewSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings = serde_json::from_str::<RosterViewSettings>(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks the constraints that the type system can't express.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.count_refresh_delay_ms == 0 {
            return Err(SettingsError::InvalidRefreshDelay);
        }
        Ok(())
    }

    pub fn filters(&self) -> FilterConfig {
        FilterConfig {
            show_offline: self.show_offline,
            show_away: self.show_away,
            show_hidden: self.show_hidden,
            show_agents: self.show_agents,
            show_self: self.show_self,
            auto_delete_unlisted: self.auto_delete_unlisted,
        }
    }

    pub fn sorting(&self) -> SortConfig {
        SortConfig {
            contact_sort_style: self.contact_sort_style,
            group_sort_style: self.group_sort_style,
            account_sort_style: self.account_sort_style,
        }
    }

    pub fn count_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.count_refresh_delay_ms)
    }
}
