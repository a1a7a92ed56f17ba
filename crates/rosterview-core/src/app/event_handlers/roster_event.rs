// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use crate::domain::contacts::models::ContactAttributes;
use crate::domain::muc::models::Participant;
use crate::domain::settings::models::RosterViewSettings;
use crate::domain::shared::models::{ContactId, Nickname, ProfileId};

/// Events delivered by the roster/presence source, the room occupant source and the
/// settings store.
#[derive(Debug, Clone, PartialEq)]
pub enum RosterEvent {
    /// A contact appeared or one of its attributes changed. Always carries the complete
    /// attribute set.
    EntryUpdated {
        profile: ProfileId,
        id: ContactId,
        attributes: ContactAttributes,
    },
    EntryRemoved {
        profile: ProfileId,
        id: ContactId,
    },
    SelfUpdated {
        profile: ProfileId,
        id: ContactId,
        attributes: ContactAttributes,
    },
    AlertSet {
        profile: ProfileId,
        id: ContactId,
    },
    AlertCleared {
        profile: ProfileId,
        id: ContactId,
    },
    /// An occupant joined a room or changed its role or presence.
    ParticipantUpdated {
        room_jid: BareJid,
        participant: Participant,
    },
    ParticipantRemoved {
        room_jid: BareJid,
        nick: Nickname,
    },
    RoomLeft {
        room_jid: BareJid,
    },
    SettingsChanged {
        settings: RosterViewSettings,
    },
}
