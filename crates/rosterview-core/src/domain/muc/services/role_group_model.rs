// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::cmp::Ordering;
use std::collections::HashMap;

use itertools::Itertools;
use jid::BareJid;
use strum::IntoEnumIterator;
use tracing::debug;

use crate::domain::muc::models::{Participant, ParticipantChange, RoleGroup};
use crate::domain::settings::models::ParticipantSortStyle;
use crate::domain::shared::models::Nickname;
use crate::util::StringExt;

/// The participant list of a room. Every occupant owns exactly one row in the group of
/// its role. Rows are kept sorted so that positions can be found by binary search.
#[derive(Debug, Default)]
pub struct RoleGroupModel {
    groups: [Vec<Participant>; 3],
    locations: HashMap<Nickname, RoleGroup>,
    sort_style: ParticipantSortStyle,
}

impl RoleGroupModel {
    pub fn new(sort_style: ParticipantSortStyle) -> Self {
        RoleGroupModel {
            sort_style,
            ..Default::default()
        }
    }

    pub fn sort_style(&self) -> ParticipantSortStyle {
        self.sort_style
    }

    pub fn get(&self, nick: &str) -> Option<&Participant> {
        let group = self.locations.get(nick)?;
        self.rows(*group).iter().find(|p| p.nick == *nick)
    }

    pub fn group_of(&self, nick: &str) -> Option<RoleGroup> {
        self.locations.get(nick).copied()
    }

    pub fn rows(&self, group: RoleGroup) -> &[Participant] {
        &self.groups[group.index()]
    }

    pub fn row_count(&self, group: RoleGroup) -> usize {
        self.groups[group.index()].len()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// The nicknames of all participants sorted case-insensitively.
    pub fn nick_list(&self) -> Vec<Nickname> {
        self.locations
            .keys()
            .cloned()
            .sorted_by(|lhs, rhs| {
                lhs.as_str()
                    .cmp_ignore_case(rhs.as_str())
                    .then_with(|| lhs.as_str().cmp(rhs.as_str()))
            })
            .collect()
    }

    pub fn has_real_jid(&self, jid: &BareJid) -> bool {
        self.groups
            .iter()
            .flatten()
            .any(|participant| participant.real_jid.as_ref() == Some(jid))
    }
}

impl RoleGroupModel {
    /// Inserts a new participant or applies a presence update to an existing one.
    pub fn update(&mut self, participant: Participant) -> Vec<ParticipantChange> {
        let target = participant.role.group();

        let Some(current) = self.locations.get(&participant.nick).copied() else {
            return self.insert(participant, target);
        };

        let Some(from) = self.position(current, participant.nick.as_str()) else {
            return vec![];
        };
        let nick = participant.nick.clone();

        if current == target {
            self.groups[target.index()][from] = participant;
            if self.is_in_order(target, from) {
                return vec![ParticipantChange::Updated {
                    nick,
                    group: target,
                    index: from,
                }];
            }

            let participant = self.groups[target.index()].remove(from);
            let to = self.insertion_index(target, &participant);
            self.groups[target.index()].insert(to, participant);
            return vec![ParticipantChange::Moved {
                nick,
                from_group: target,
                from,
                to_group: target,
                to,
            }];
        }

        self.groups[current.index()].remove(from);
        let to = self.insertion_index(target, &participant);
        self.groups[target.index()].insert(to, participant);
        self.locations.insert(nick.clone(), target);

        debug!("Moved {nick} from {current} to {target}.");
        vec![
            ParticipantChange::Moved {
                nick,
                from_group: current,
                from,
                to_group: target,
                to,
            },
            self.row_count_changed(current),
            self.row_count_changed(target),
        ]
    }

    pub fn remove(&mut self, nick: &str) -> Vec<ParticipantChange> {
        let Some(group) = self.locations.remove(nick) else {
            return vec![];
        };
        let Some(index) = self.position(group, nick) else {
            return vec![];
        };
        let participant = self.groups[group.index()].remove(index);

        vec![
            ParticipantChange::Removed {
                nick: participant.nick,
                group,
                index,
            },
            self.row_count_changed(group),
        ]
    }

    pub fn clear(&mut self) -> Vec<ParticipantChange> {
        let mut changes = vec![];

        for group in RoleGroup::iter() {
            let rows = std::mem::take(&mut self.groups[group.index()]);
            if rows.is_empty() {
                continue;
            }
            for (index, participant) in rows.into_iter().enumerate().rev() {
                changes.push(ParticipantChange::Removed {
                    nick: participant.nick,
                    group,
                    index,
                });
            }
            changes.push(self.row_count_changed(group));
        }

        self.locations.clear();
        changes
    }

    /// Switches the ordering and re-sorts every group.
    pub fn set_sort_style(&mut self, sort_style: ParticipantSortStyle) -> Vec<ParticipantChange> {
        if self.sort_style == sort_style {
            return vec![];
        }
        self.sort_style = sort_style;

        let mut changes = vec![];
        for group in RoleGroup::iter() {
            let mut target = self.groups[group.index()]
                .iter()
                .map(|p| p.nick.clone())
                .collect::<Vec<_>>();
            target.sort_by(|lhs, rhs| match (self.get(lhs.as_str()), self.get(rhs.as_str())) {
                (Some(lhs), Some(rhs)) => self.compare(lhs, rhs),
                _ => Ordering::Equal,
            });

            let rows = &mut self.groups[group.index()];
            for (to, nick) in target.into_iter().enumerate() {
                let Some(from) = rows.iter().position(|p| p.nick == nick) else {
                    continue;
                };
                if from == to {
                    continue;
                }
                let participant = rows.remove(from);
                rows.insert(to, participant);
                changes.push(ParticipantChange::Moved {
                    nick,
                    from_group: group,
                    from,
                    to_group: group,
                    to,
                });
            }
        }
        changes
    }
}

impl RoleGroupModel {
    fn insert(&mut self, participant: Participant, group: RoleGroup) -> Vec<ParticipantChange> {
        let nick = participant.nick.clone();
        let index = self.insertion_index(group, &participant);
        self.groups[group.index()].insert(index, participant);
        self.locations.insert(nick.clone(), group);

        vec![
            ParticipantChange::Inserted { nick, group, index },
            self.row_count_changed(group),
        ]
    }

    fn position(&self, group: RoleGroup, nick: &str) -> Option<usize> {
        self.groups[group.index()]
            .iter()
            .position(|p| p.nick == *nick)
    }

    fn insertion_index(&self, group: RoleGroup, participant: &Participant) -> usize {
        match self.groups[group.index()].binary_search_by(|row| self.compare(row, participant)) {
            Ok(index) | Err(index) => index,
        }
    }

    fn is_in_order(&self, group: RoleGroup, index: usize) -> bool {
        let rows = &self.groups[group.index()];
        let Some(participant) = rows.get(index) else {
            return true;
        };

        let left_in_order = index
            .checked_sub(1)
            .and_then(|i| rows.get(i))
            .map_or(true, |left| self.compare(left, participant) != Ordering::Greater);
        let right_in_order = rows
            .get(index + 1)
            .map_or(true, |right| self.compare(participant, right) != Ordering::Greater);

        left_in_order && right_in_order
    }

    fn compare(&self, lhs: &Participant, rhs: &Participant) -> Ordering {
        let by_status = match self.sort_style {
            ParticipantSortStyle::Status => lhs
                .availability
                .rank()
                .cmp(&rhs.availability.rank()),
            ParticipantSortStyle::Alpha => Ordering::Equal,
        };

        by_status
            .then_with(|| lhs.nick.as_str().cmp_ignore_case(rhs.nick.as_str()))
            .then_with(|| lhs.nick.as_str().cmp(rhs.nick.as_str()))
    }

    fn row_count_changed(&self, group: RoleGroup) -> ParticipantChange {
        ParticipantChange::RowCountChanged {
            group,
            count: self.row_count(group),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::domain::muc::models::OccupantRole;
    use crate::domain::shared::models::Availability;

    use super::*;

    fn nicks(model: &RoleGroupModel, group: RoleGroup) -> Vec<&str> {
        model.rows(group).iter().map(|p| p.nick.as_str()).collect()
    }

    #[test]
    fn test_sorted_insertion() {
        let mut model = RoleGroupModel::default();
        model.update(Participant::new("carol", OccupantRole::Participant, Availability::Available));
        model.update(Participant::new("alice", OccupantRole::Participant, Availability::Away));
        let changes = model.update(Participant::new(
            "Bob",
            OccupantRole::Participant,
            Availability::Available,
        ));

        assert_eq!(
            changes,
            vec![
                ParticipantChange::Inserted {
                    nick: "Bob".into(),
                    group: RoleGroup::Participant,
                    index: 0
                },
                ParticipantChange::RowCountChanged {
                    group: RoleGroup::Participant,
                    count: 3
                }
            ]
        );
        assert_eq!(nicks(&model, RoleGroup::Participant), vec!["Bob", "carol", "alice"]);
    }

    #[test]
    fn test_repeated_presence_keeps_one_row() {
        let mut model = RoleGroupModel::new(ParticipantSortStyle::Alpha);
        model.update(Participant::new("alice", OccupantRole::Participant, Availability::Away));

        let changes = model.update(Participant::new(
            "alice",
            OccupantRole::Participant,
            Availability::Available,
        ));

        assert_eq!(
            changes,
            vec![ParticipantChange::Updated {
                nick: "alice".into(),
                group: RoleGroup::Participant,
                index: 0
            }]
        );
        assert_eq!(model.len(), 1);
        assert_eq!(model.row_count(RoleGroup::Participant), 1);
    }

    #[test]
    fn test_participants_without_role_are_visitors() {
        let mut model = RoleGroupModel::default();
        model.update(Participant::new("lurker", OccupantRole::None, Availability::Available));
        assert_eq!(model.group_of("lurker"), Some(RoleGroup::Visitor));
    }

    #[test]
    fn test_status_change_in_place() {
        let mut model = RoleGroupModel::new(ParticipantSortStyle::Alpha);
        model.update(Participant::new("alice", OccupantRole::Visitor, Availability::Available));
        model.update(Participant::new("bob", OccupantRole::Visitor, Availability::Available));

        let changes = model.update(Participant::new(
            "bob",
            OccupantRole::Visitor,
            Availability::DoNotDisturb,
        ));

        assert_eq!(
            changes,
            vec![ParticipantChange::Updated {
                nick: "bob".into(),
                group: RoleGroup::Visitor,
                index: 1
            }]
        );
        assert_eq!(
            model.get("bob").map(|p| p.availability),
            Some(Availability::DoNotDisturb)
        );
    }

    #[test]
    fn test_status_change_that_breaks_order_moves_within_group() {
        let mut model = RoleGroupModel::default();
        model.update(Participant::new("alice", OccupantRole::Visitor, Availability::Available));
        model.update(Participant::new("bob", OccupantRole::Visitor, Availability::Available));

        let changes = model.update(Participant::new(
            "alice",
            OccupantRole::Visitor,
            Availability::ExtendedAway,
        ));

        assert_eq!(
            changes,
            vec![ParticipantChange::Moved {
                nick: "alice".into(),
                from_group: RoleGroup::Visitor,
                from: 0,
                to_group: RoleGroup::Visitor,
                to: 1
            }]
        );
    }

    #[test]
    fn test_remove_and_clear() {
        let mut model = RoleGroupModel::default();
        model.update(Participant::new("alice", OccupantRole::Moderator, Availability::Available));
        model.update(Participant::new("bob", OccupantRole::Visitor, Availability::Available));
        model.update(Participant::new("carol", OccupantRole::Visitor, Availability::Available));

        assert_eq!(
            model.remove("bob"),
            vec![
                ParticipantChange::Removed {
                    nick: "bob".into(),
                    group: RoleGroup::Visitor,
                    index: 0
                },
                ParticipantChange::RowCountChanged {
                    group: RoleGroup::Visitor,
                    count: 1
                }
            ]
        );
        assert!(model.remove("bob").is_empty());

        let changes = model.clear();
        assert_eq!(changes.len(), 4);
        assert!(model.is_empty());
        assert_eq!(model.row_count(RoleGroup::Moderator), 0);
    }

    #[test]
    fn test_switching_sort_style() {
        let mut model = RoleGroupModel::default();
        model.update(Participant::new("zed", OccupantRole::Participant, Availability::Chat));
        model.update(Participant::new("amy", OccupantRole::Participant, Availability::Away));
        assert_eq!(nicks(&model, RoleGroup::Participant), vec!["zed", "amy"]);

        let changes = model.set_sort_style(ParticipantSortStyle::Alpha);

        assert_eq!(nicks(&model, RoleGroup::Participant), vec!["amy", "zed"]);
        assert_eq!(
            changes,
            vec![ParticipantChange::Moved {
                nick: "amy".into(),
                from_group: RoleGroup::Participant,
                from: 1,
                to_group: RoleGroup::Participant,
                to: 0
            }]
        );
    }

    #[test]
    fn test_queries() {
        let mut model = RoleGroupModel::default();
        let mut bob = Participant::new("bob", OccupantRole::Participant, Availability::Available);
        bob.real_jid = Some("bob@prose.org".parse().unwrap());
        model.update(bob);
        model.update(Participant::new("Alice", OccupantRole::Moderator, Availability::Away));

        assert_eq!(
            model.nick_list(),
            vec![Nickname::from("Alice"), Nickname::from("bob")]
        );
        assert!(model.has_real_jid(&"bob@prose.org".parse().unwrap()));
        assert!(!model.has_real_jid(&"alice@prose.org".parse().unwrap()));
        assert_eq!(model.len(), 2);
    }
}
