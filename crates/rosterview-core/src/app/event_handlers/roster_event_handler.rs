// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::app::services::RosterService;

use super::{RosterEvent, RosterEventHandlerTrait};

/// Feeds roster events into the contact list. Contacts seen for the first time get their
/// avatar and tooltip loaded.
pub struct RosterEventHandler {
    roster: RosterService,
}

impl RosterEventHandler {
    pub fn new(roster: RosterService) -> Self {
        RosterEventHandler { roster }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl RosterEventHandlerTrait for RosterEventHandler {
    fn name(&self) -> &'static str {
        "roster"
    }

    async fn handle_event(&self, event: RosterEvent) -> Result<Option<RosterEvent>> {
        match event {
            RosterEvent::EntryUpdated {
                profile,
                id,
                attributes,
            } => {
                let is_new = self.roster.read(|view| {
                    view.profile(&profile)
                        .map_or(false, |tree| tree.entry(&id).is_none())
                });
                self.roster.update_entry(&profile, &id, attributes);
                if is_new {
                    self.roster.load_decoration(&profile, &id).await;
                }
            }
            RosterEvent::EntryRemoved { profile, id } => self.roster.remove_entry(&profile, &id),
            RosterEvent::SelfUpdated {
                profile,
                id,
                attributes,
            } => self.roster.update_self(&profile, &id, attributes),
            RosterEvent::AlertSet { profile, id } => self.roster.set_alert(&profile, &id),
            RosterEvent::AlertCleared { profile, id } => self.roster.clear_alert(&profile, &id),
            RosterEvent::ParticipantUpdated {
                room_jid,
                participant,
            } => self.roster.update_participant(&room_jid, participant),
            RosterEvent::ParticipantRemoved { room_jid, nick } => {
                self.roster.remove_participant(&room_jid, nick.as_str())
            }
            RosterEvent::RoomLeft { room_jid } => self.roster.leave_room(&room_jid),
            RosterEvent::SettingsChanged { settings } => self.roster.apply_settings(settings)?,
        }
        Ok(None)
    }
}
