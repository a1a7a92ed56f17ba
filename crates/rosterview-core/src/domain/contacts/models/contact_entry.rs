// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::shared::models::ContactId;

use super::ContactAttributes;

/// One known contact of a profile.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactEntry {
    pub id: ContactId,
    pub attributes: ContactAttributes,
    /// A pending event (e.g. an unread message) forces the entry to be visible.
    pub alerting: bool,
    pub decoration: ContactDecoration,
}

/// Data supplied asynchronously by avatar/vCard providers. Changing it re-renders the
/// entry's items but never re-runs grouping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContactDecoration {
    pub avatar: Option<String>,
    pub tooltip: Option<String>,
}

impl ContactEntry {
    pub fn new(id: ContactId, attributes: ContactAttributes) -> Self {
        ContactEntry {
            id,
            attributes,
            alerting: false,
            decoration: Default::default(),
        }
    }

    /// The name shown in the contact list. Falls back to the JID.
    pub fn display_name(&self) -> String {
        self.attributes
            .name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ToString::to_string)
            .unwrap_or_else(|| self.id.to_string())
    }

    pub fn is_available(&self) -> bool {
        self.attributes.is_available()
    }

    pub fn is_away(&self) -> bool {
        self.attributes.is_away()
    }

    pub fn is_hidden(&self) -> bool {
        self.attributes.is_hidden()
    }

    pub fn resource_count(&self) -> usize {
        self.attributes.resources.len()
    }
}
