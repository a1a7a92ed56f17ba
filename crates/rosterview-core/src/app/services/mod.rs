// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use roster_service::{RosterService, RosterServiceBuilder, RosterViewDelegate};

mod roster_service;
