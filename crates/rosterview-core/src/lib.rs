// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::event_handlers::{RosterEvent, RosterEventHandler, RosterEventHandlerTrait};
pub use app::services::{RosterService, RosterServiceBuilder, RosterViewDelegate};
pub use domain::tree::models::TreeEvent;

#[cfg(any(test, feature = "test"))]
pub mod test;

pub mod app;
pub mod domain;
pub mod infra;

pub(crate) mod util;
