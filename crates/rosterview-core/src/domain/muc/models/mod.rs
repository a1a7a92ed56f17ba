// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use occupant_role::{OccupantRole, RoleGroup};
pub use participant::Participant;
pub use participant_change::ParticipantChange;

mod occupant_role;
mod participant;
mod participant_change;
