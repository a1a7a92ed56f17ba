// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use anyhow::Result;
use jid::BareJid;
use parking_lot::Mutex;
use tracing::{debug, warn};

use rosterview_wasm_utils::{sleep, spawn, SendUnlessWasm, SyncUnlessWasm};

use crate::app::deps::{DynAvatarProvider, TreeDependencies};
use crate::domain::contacts::models::{ContactAttributes, ContactDecoration};
use crate::domain::contacts::services::AvatarProvider;
use crate::domain::general::services::TimeProvider;
use crate::domain::grouping::models::GroupKey;
use crate::domain::muc::models::{Participant, ParticipantChange};
use crate::domain::muc::services::RoomParticipants;
use crate::domain::settings::models::RosterViewSettings;
use crate::domain::settings::repos::GroupStateRepository;
use crate::domain::shared::models::{ContactId, GroupName, ProfileId};
use crate::domain::tree::models::{TreeEvent, ViewItemId};
use crate::domain::tree::services::RosterView;
use crate::infra::avatars::NoopAvatarProvider;

/// Receives the incremental changes of the contact list.
pub trait RosterViewDelegate: SendUnlessWasm + SyncUnlessWasm {
    fn handle_events(&self, events: Vec<TreeEvent>);

    /// Receives the row changes of a room's participant list.
    fn handle_participant_changes(&self, room_jid: &BareJid, changes: Vec<ParticipantChange>) {
        let _ = (room_jid, changes);
    }
}

/// Drives a [`RosterView`]: forwards updates, reports the resulting changes to the delegate
/// and runs the deferred count refreshes.
#[derive(Clone)]
pub struct RosterService {
    inner: Arc<RosterServiceInner>,
}

struct RosterServiceInner {
    view: Mutex<RosterView>,
    participants: Mutex<RoomParticipants>,
    settings: Mutex<RosterViewSettings>,
    scheduled_generations: Mutex<HashMap<ProfileId, u64>>,
    avatar_provider: DynAvatarProvider,
    delegate: Option<Box<dyn RosterViewDelegate>>,
}

impl RosterService {
    pub fn builder() -> RosterServiceBuilder {
        RosterServiceBuilder::new()
    }

    /// Gives read access to the current state of the contact list.
    pub fn read<T>(&self, f: impl FnOnce(&RosterView) -> T) -> T {
        f(&self.inner.view.lock())
    }

    /// Gives read access to the participant lists of all joined rooms.
    pub fn read_participants<T>(&self, f: impl FnOnce(&RoomParticipants) -> T) -> T {
        f(&self.inner.participants.lock())
    }

    pub fn settings(&self) -> RosterViewSettings {
        self.inner.settings.lock().clone()
    }
}

impl RosterService {
    pub fn add_profile(&self, id: ProfileId, name: impl Into<String>) {
        self.apply(|view| view.add_profile(id, name))
    }

    pub fn remove_profile(&self, id: &ProfileId) {
        self.inner.scheduled_generations.lock().remove(id);
        self.apply(|view| view.remove_profile(id))
    }

    pub fn set_profile_enabled(&self, id: &ProfileId, enabled: bool) {
        self.apply(|view| view.set_profile_enabled(id, enabled))
    }

    pub fn set_profile_rank(&self, id: &ProfileId, rank: i32) -> Result<()> {
        self.try_apply(|view| view.set_profile_rank(id, rank))
    }

    pub fn set_profile_open(&self, id: &ProfileId, open: bool) -> Result<()> {
        self.inner.view.lock().set_profile_open(id, open)
    }

    pub fn update_entry(&self, profile: &ProfileId, id: &ContactId, attributes: ContactAttributes) {
        self.apply(|view| view.update_entry(profile, id, attributes))
    }

    pub fn remove_entry(&self, profile: &ProfileId, id: &ContactId) {
        self.apply(|view| view.remove_entry(profile, id))
    }

    pub fn update_self(&self, profile: &ProfileId, id: &ContactId, attributes: ContactAttributes) {
        self.apply(|view| view.update_self(profile, id, attributes))
    }

    pub fn set_alert(&self, profile: &ProfileId, id: &ContactId) {
        self.apply(|view| view.set_alert(profile, id))
    }

    pub fn clear_alert(&self, profile: &ProfileId, id: &ContactId) {
        self.apply(|view| view.clear_alert(profile, id))
    }

    pub fn clear_profile(&self, profile: &ProfileId) {
        self.apply(|view| view.clear_profile(profile))
    }

    pub fn set_group_open(&self, profile: &ProfileId, key: &GroupKey, open: bool) -> Result<()> {
        self.inner.view.lock().set_group_open(profile, key, open)
    }

    pub fn set_group_rank(&self, profile: &ProfileId, key: &GroupKey, rank: i32) -> Result<()> {
        self.try_apply(|view| view.set_group_rank(profile, key, rank))
    }

    /// Validates and applies changed settings to the contact list and to every room's
    /// participant list. Invalid settings leave the current ones in place.
    pub fn apply_settings(&self, settings: RosterViewSettings) -> Result<()> {
        settings.validate()?;
        *self.inner.settings.lock() = settings.clone();
        self.apply(|view| view.apply_settings(&settings));

        let room_changes = self
            .inner
            .participants
            .lock()
            .set_sort_style(settings.participant_sort_style);
        for (room_jid, changes) in room_changes {
            self.inner.dispatch_participant_changes(&room_jid, changes);
        }
        Ok(())
    }

    pub fn apply_settings_json(&self, json: &str) -> Result<()> {
        self.apply_settings(RosterViewSettings::from_json(json)?)
    }

    pub fn update_participant(&self, room_jid: &BareJid, participant: Participant) {
        let changes = self.inner.participants.lock().update(room_jid, participant);
        self.inner.dispatch_participant_changes(room_jid, changes)
    }

    pub fn remove_participant(&self, room_jid: &BareJid, nick: &str) {
        let changes = self.inner.participants.lock().remove(room_jid, nick);
        self.inner.dispatch_participant_changes(room_jid, changes)
    }

    pub fn leave_room(&self, room_jid: &BareJid) {
        let changes = self.inner.participants.lock().leave(room_jid);
        self.inner.dispatch_participant_changes(room_jid, changes)
    }

    pub fn ensure_visible(&self, profile: &ProfileId, contact: &ContactId) -> Option<ViewItemId> {
        let mut item = None;
        self.apply(|view| {
            let (visible_item, events) = view.ensure_visible(profile, contact);
            item = visible_item;
            events
        });

        let settings = self.read(|view| *view.filters());
        let mut current = self.inner.settings.lock();
        current.show_offline = settings.show_offline;
        current.show_away = settings.show_away;
        current.show_hidden = settings.show_hidden;
        current.show_agents = settings.show_agents;

        item
    }

    pub fn find_items(&self, text: &str) -> Vec<(ProfileId, ViewItemId)> {
        self.read(|view| view.find_items(text))
    }

    pub fn group_list(&self, profile: &ProfileId) -> Vec<GroupName> {
        self.read(|view| {
            view.profile(profile)
                .map(|tree| tree.group_list())
                .unwrap_or_default()
        })
    }

    pub fn group_members(&self, profile: &ProfileId, name: &str) -> Vec<ContactId> {
        self.read(|view| {
            view.profile(profile)
                .map(|tree| tree.group_members(name))
                .unwrap_or_default()
        })
    }

    pub fn group_member_count(&self, profile: &ProfileId, name: &str) -> usize {
        self.read(|view| {
            view.profile(profile)
                .map_or(0, |tree| tree.group_member_count(name))
        })
    }

    /// Fetches the avatar and tooltip of a contact. Provider failures leave the contact
    /// without decoration.
    pub async fn load_decoration(&self, profile: &ProfileId, contact: &ContactId) {
        let provider = &self.inner.avatar_provider;

        let avatar = provider
            .load_avatar(profile, contact)
            .await
            .unwrap_or_else(|err| {
                warn!("Failed to load avatar for {contact}. {}", err.to_string());
                None
            });
        let tooltip = provider
            .load_tooltip(profile, contact)
            .await
            .unwrap_or_else(|err| {
                warn!("Failed to load tooltip for {contact}. {}", err.to_string());
                None
            });

        self.apply(|view| view.set_decoration(profile, contact, ContactDecoration { avatar, tooltip }))
    }
}

impl RosterService {
    fn try_apply(&self, f: impl FnOnce(&mut RosterView) -> Result<Vec<TreeEvent>>) -> Result<()> {
        let mut result = Ok(());
        self.apply(|view| match f(view) {
            Ok(events) => events,
            Err(err) => {
                result = Err(err);
                vec![]
            }
        });
        result
    }

    /// Runs a mutation, reports its events and arms the count refresh of every profile that
    /// requested one. The lock is released before the delegate is called.
    fn apply(&self, f: impl FnOnce(&mut RosterView) -> Vec<TreeEvent>) {
        let (events, pending, delay) = {
            let mut view = self.inner.view.lock();
            let events = f(&mut view);
            let pending = view
                .profiles()
                .filter_map(|tree| {
                    tree.pending_count_generation()
                        .map(|generation| (tree.id().clone(), generation))
                })
                .collect::<Vec<_>>();
            (events, pending, view.count_refresh_delay())
        };

        self.inner.dispatch(events);

        for (profile, generation) in pending {
            {
                let mut scheduled = self.inner.scheduled_generations.lock();
                if scheduled.get(&profile) == Some(&generation) {
                    continue;
                }
                scheduled.insert(profile.clone(), generation);
            }

            let inner = Arc::downgrade(&self.inner);
            spawn(async move {
                sleep(delay).await;
                RosterServiceInner::flush_counts(inner, profile, generation);
            });
        }
    }
}

impl RosterServiceInner {
    fn dispatch(&self, events: Vec<TreeEvent>) {
        if events.is_empty() {
            return;
        }
        let Some(delegate) = &self.delegate else {
            return;
        };
        delegate.handle_events(events);
    }

    fn dispatch_participant_changes(&self, room_jid: &BareJid, changes: Vec<ParticipantChange>) {
        if changes.is_empty() {
            return;
        }
        let Some(delegate) = &self.delegate else {
            return;
        };
        delegate.handle_participant_changes(room_jid, changes);
    }

    /// Called when the timer of `generation` elapsed. Does nothing if a later request
    /// superseded it or the service is gone.
    fn flush_counts(inner: Weak<RosterServiceInner>, profile: ProfileId, generation: u64) {
        let Some(inner) = inner.upgrade() else {
            return;
        };
        let events = inner
            .view
            .lock()
            .flush_counts_generation(&profile, generation);

        debug!(
            "Count refresh {generation} for profile {profile} produced {} changes.",
            events.len()
        );
        inner.dispatch(events);
    }
}

pub struct RosterServiceBuilder {
    avatar_provider: DynAvatarProvider,
    delegate: Option<Box<dyn RosterViewDelegate>>,
    deps: TreeDependencies,
    settings: RosterViewSettings,
}

impl RosterServiceBuilder {
    pub(crate) fn new() -> Self {
        RosterServiceBuilder {
            avatar_provider: Arc::new(NoopAvatarProvider::default()),
            delegate: None,
            deps: TreeDependencies::default(),
            settings: RosterViewSettings::default(),
        }
    }

    pub fn set_avatar_provider<P: AvatarProvider + 'static>(mut self, avatar_provider: P) -> Self {
        self.avatar_provider = Arc::new(avatar_provider);
        self
    }

    pub fn set_group_state_repository<R: GroupStateRepository + 'static>(
        mut self,
        repository: R,
    ) -> Self {
        self.deps.group_state_repo = Arc::new(repository);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.deps.time_provider = Arc::new(time_provider);
        self
    }

    pub fn set_settings(mut self, settings: RosterViewSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn RosterViewDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    pub fn build(self) -> RosterService {
        RosterService {
            inner: Arc::new(RosterServiceInner {
                view: Mutex::new(RosterView::new(&self.settings, self.deps)),
                participants: Mutex::new(RoomParticipants::new(
                    self.settings.participant_sort_style,
                )),
                settings: Mutex::new(self.settings),
                scheduled_generations: Default::default(),
                avatar_provider: self.avatar_provider,
                delegate: self.delegate,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::format_err;

    use crate::contact_id;
    use crate::domain::contacts::services::MockAvatarProvider;
    use crate::domain::muc::models::{OccupantRole, RoleGroup};
    use crate::domain::settings::models::ParticipantSortStyle;
    use crate::domain::shared::models::{Availability, Nickname};

    use super::*;

    #[derive(Default)]
    struct RecordingDelegate {
        events: Arc<Mutex<Vec<TreeEvent>>>,
        participant_changes: Arc<Mutex<Vec<(BareJid, Vec<ParticipantChange>)>>>,
    }

    impl RosterViewDelegate for RecordingDelegate {
        fn handle_events(&self, events: Vec<TreeEvent>) {
            self.events.lock().extend(events)
        }

        fn handle_participant_changes(&self, room_jid: &BareJid, changes: Vec<ParticipantChange>) {
            self.participant_changes
                .lock()
                .push((room_jid.clone(), changes))
        }
    }

    #[tokio::test]
    async fn test_failing_avatar_provider_yields_no_decoration() {
        let mut provider = MockAvatarProvider::new();
        provider
            .expect_load_avatar()
            .returning(|_, _| Box::pin(async { Err(format_err!("offline")) }));
        provider
            .expect_load_tooltip()
            .returning(|_, _| Box::pin(async { Ok(Some("Alice <alice@prose.org>".to_string())) }));

        let events = Arc::new(Mutex::new(vec![]));
        let service = RosterService::builder()
            .set_avatar_provider(provider)
            .set_settings(RosterViewSettings {
                show_offline: true,
                ..Default::default()
            })
            .set_delegate(Some(Box::new(RecordingDelegate {
                events: events.clone(),
                ..Default::default()
            })))
            .build();

        let profile = ProfileId::from("work");
        let alice = contact_id!("alice@prose.org");
        service.add_profile(profile.clone(), "Work");
        service.update_entry(&profile, &alice, Default::default());
        events.lock().clear();

        service.load_decoration(&profile, &alice).await;

        let events = events.lock().clone();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0], TreeEvent::ItemChanged { .. }));

        let decoration = service.read(|view| {
            view.profile(&profile)
                .and_then(|tree| tree.entry(&alice))
                .map(|entry| entry.decoration.clone())
        });
        assert_eq!(
            decoration,
            Some(ContactDecoration {
                avatar: None,
                tooltip: Some("Alice <alice@prose.org>".to_string()),
            })
        );
    }

    #[tokio::test]
    async fn test_invalid_settings_json_is_rejected() {
        let service = RosterService::builder().build();
        assert!(service
            .apply_settings_json(r#"{ "count-refresh-delay-ms": 0 }"#)
            .is_err());
        assert_eq!(service.settings(), RosterViewSettings::default());
    }

    #[tokio::test]
    async fn test_settings_without_refresh_delay_are_rejected() {
        let service = RosterService::builder().build();
        let result = service.apply_settings(RosterViewSettings {
            show_offline: true,
            count_refresh_delay_ms: 0,
            ..Default::default()
        });

        assert!(result.is_err());
        assert_eq!(service.settings(), RosterViewSettings::default());
        assert!(!service.read(|view| view.filters().show_offline));
    }

    #[tokio::test]
    async fn test_participant_sort_style_follows_settings() -> Result<()> {
        let changes = Arc::new(Mutex::new(vec![]));
        let service = RosterService::builder()
            .set_delegate(Some(Box::new(RecordingDelegate {
                participant_changes: changes.clone(),
                ..Default::default()
            })))
            .build();

        let lobby = "lobby@conference.prose.org".parse::<BareJid>()?;
        service.update_participant(
            &lobby,
            Participant::new("zed", OccupantRole::Participant, Availability::Chat),
        );
        service.update_participant(
            &lobby,
            Participant::new("amy", OccupantRole::Participant, Availability::Away),
        );
        changes.lock().clear();

        service.apply_settings(RosterViewSettings {
            participant_sort_style: ParticipantSortStyle::Alpha,
            ..Default::default()
        })?;

        assert_eq!(
            changes.lock().clone(),
            vec![(
                lobby.clone(),
                vec![ParticipantChange::Moved {
                    nick: "amy".into(),
                    from_group: RoleGroup::Participant,
                    from: 1,
                    to_group: RoleGroup::Participant,
                    to: 0,
                }]
            )]
        );
        let nicks = service.read_participants(|participants| {
            participants
                .room(&lobby)
                .map(|room| room.nick_list())
                .unwrap_or_default()
        });
        assert_eq!(nicks, vec![Nickname::from("amy"), Nickname::from("zed")]);
        assert_eq!(
            service.read_participants(|participants| participants.sort_style()),
            ParticipantSortStyle::Alpha
        );
        Ok(())
    }
}
