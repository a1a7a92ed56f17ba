// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

/// The global flags deciding which contacts get a view item. Passed explicitly into every
/// visibility decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterConfig {
    pub show_offline: bool,
    pub show_away: bool,
    pub show_hidden: bool,
    pub show_agents: bool,
    pub show_self: bool,
    /// Removes items from the "Not in list" and "Private Messages" groups as soon as they
    /// stop alerting.
    pub auto_delete_unlisted: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            show_offline: false,
            show_away: true,
            show_hidden: false,
            show_agents: true,
            show_self: false,
            auto_delete_unlisted: false,
        }
    }
}

impl FilterConfig {
    /// Returns `true` if switching from `self` to `other` can change which contact items
    /// are visible. `show_self` only affects the self item.
    pub fn affects_contacts(&self, other: &FilterConfig) -> bool {
        self.show_offline != other.show_offline
            || self.show_away != other.show_away
            || self.show_hidden != other.show_hidden
            || self.show_agents != other.show_agents
            || self.auto_delete_unlisted != other.auto_delete_unlisted
    }
}
