// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use role_group_model::RoleGroupModel;
pub use room_participants::RoomParticipants;

mod role_group_model;
mod room_participants;
