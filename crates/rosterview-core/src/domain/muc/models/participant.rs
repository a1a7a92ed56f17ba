// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use crate::domain::shared::models::{Availability, Nickname};

use super::OccupantRole;

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub nick: Nickname,
    pub role: OccupantRole,
    pub availability: Availability,
    /// Only known in non-anonymous rooms or to moderators.
    pub real_jid: Option<BareJid>,
    pub status_message: Option<String>,
}

impl Participant {
    pub fn new(nick: impl Into<Nickname>, role: OccupantRole, availability: Availability) -> Self {
        Participant {
            nick: nick.into(),
            role,
            availability,
            real_jid: None,
            status_message: None,
        }
    }
}
