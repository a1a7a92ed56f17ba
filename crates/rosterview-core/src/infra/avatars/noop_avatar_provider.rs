// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::contacts::services::AvatarProvider;
use crate::domain::shared::models::{ContactId, ProfileId};

/// Used when the host application doesn't supply avatars.
#[derive(Default)]
pub struct NoopAvatarProvider {}

#[cfg_attr(target_arch = "wasm32", async_trait(? Send))]
#[async_trait]
impl AvatarProvider for NoopAvatarProvider {
    async fn load_avatar(&self, _profile: &ProfileId, _contact: &ContactId) -> Result<Option<String>> {
        Ok(None)
    }

    async fn load_tooltip(
        &self,
        _profile: &ProfileId,
        _contact: &ContactId,
    ) -> Result<Option<String>> {
        Ok(None)
    }
}
