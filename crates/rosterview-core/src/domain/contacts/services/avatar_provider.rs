// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use rosterview_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::shared::models::{ContactId, ProfileId};

/// Supplies pictures and tooltips for contacts on demand. Implementations may hit the network
/// or a cache, callers treat every failure as "no data".
#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait AvatarProvider: SendUnlessWasm + SyncUnlessWasm {
    /// Returns a reference to the contact's picture (e.g. a file URL) if one is available.
    async fn load_avatar(&self, profile: &ProfileId, contact: &ContactId) -> Result<Option<String>>;

    /// Returns the tooltip text for the contact.
    async fn load_tooltip(&self, profile: &ProfileId, contact: &ContactId)
        -> Result<Option<String>>;
}
