// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use rosterview_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

pub use roster_event::RosterEvent;
pub use roster_event_handler::RosterEventHandler;

mod roster_event;
mod roster_event_handler;

/// A handler for events of the roster/presence source.
///
/// If `handle_event` returns `None` the event has been consumed. If it returns `Some(event)`
/// the event should be passed on to the next handler.
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
pub trait RosterEventHandlerTrait: SendUnlessWasm + SyncUnlessWasm {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: RosterEvent) -> Result<Option<RosterEvent>>;
}
