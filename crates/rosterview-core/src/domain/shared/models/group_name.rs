// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use rosterview_utils::id_string;

id_string!(
    /// The name of a user-assigned roster group.
    GroupName
);

impl GroupName {
    /// The group that always sorts first, regardless of the group sort style.
    pub const FAVORITES: &'static str = "Favorites";
    /// Membership in this group marks a contact as hidden.
    pub const HIDDEN: &'static str = "Hidden";

    pub fn is_favorites(&self) -> bool {
        self.as_str() == Self::FAVORITES
    }

    pub fn is_hidden(&self) -> bool {
        self.as_str() == Self::HIDDEN
    }
}
