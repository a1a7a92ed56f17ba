// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use jid::BareJid;
use tracing::info;

use crate::domain::muc::models::{Participant, ParticipantChange};
use crate::domain::settings::models::ParticipantSortStyle;

use super::RoleGroupModel;

/// The participant lists of all joined rooms. Every list shares the same ordering.
#[derive(Debug, Default)]
pub struct RoomParticipants {
    rooms: HashMap<BareJid, RoleGroupModel>,
    sort_style: ParticipantSortStyle,
}

impl RoomParticipants {
    pub fn new(sort_style: ParticipantSortStyle) -> Self {
        RoomParticipants {
            rooms: Default::default(),
            sort_style,
        }
    }

    pub fn sort_style(&self) -> ParticipantSortStyle {
        self.sort_style
    }

    pub fn room(&self, room_jid: &BareJid) -> Option<&RoleGroupModel> {
        self.rooms.get(room_jid)
    }

    pub fn room_jids(&self) -> impl Iterator<Item = &BareJid> {
        self.rooms.keys()
    }

    /// Applies an occupant presence. The room is created on its first occupant.
    pub fn update(&mut self, room_jid: &BareJid, participant: Participant) -> Vec<ParticipantChange> {
        let sort_style = self.sort_style;
        self.rooms
            .entry(room_jid.clone())
            .or_insert_with(|| RoleGroupModel::new(sort_style))
            .update(participant)
    }

    pub fn remove(&mut self, room_jid: &BareJid, nick: &str) -> Vec<ParticipantChange> {
        let Some(room) = self.rooms.get_mut(room_jid) else {
            return vec![];
        };
        room.remove(nick)
    }

    /// Drops the participant list of a room, reporting the removal of every row.
    pub fn leave(&mut self, room_jid: &BareJid) -> Vec<ParticipantChange> {
        let Some(mut room) = self.rooms.remove(room_jid) else {
            return vec![];
        };
        room.clear()
    }

    /// Re-sorts every room. Only rooms whose rows moved are returned.
    pub fn set_sort_style(
        &mut self,
        sort_style: ParticipantSortStyle,
    ) -> Vec<(BareJid, Vec<ParticipantChange>)> {
        if self.sort_style == sort_style {
            return vec![];
        }
        info!("Sorting participants by {sort_style}.");
        self.sort_style = sort_style;

        self.rooms
            .iter_mut()
            .filter_map(|(room_jid, room)| {
                let changes = room.set_sort_style(sort_style);
                (!changes.is_empty()).then(|| (room_jid.clone(), changes))
            })
            .collect()
    }
}
