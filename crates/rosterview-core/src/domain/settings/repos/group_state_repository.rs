// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;

use rosterview_wasm_utils::{SendUnlessWasm, SyncUnlessWasm};

use crate::domain::settings::models::GroupState;
use crate::domain::shared::models::ProfileId;

/// Persists the open state and manual rank of groups and profiles, keyed by profile and
/// storage key (see `GroupKey::storage_key` and `profile_storage_key`).
#[cfg_attr(any(test, feature = "test"), mockall::automock)]
pub trait GroupStateRepository: SendUnlessWasm + SyncUnlessWasm {
    fn get(&self, profile: &ProfileId, key: &str) -> Result<Option<GroupState>>;
    fn set(&self, profile: &ProfileId, key: &str, state: GroupState) -> Result<()>;
}

impl<T: GroupStateRepository + ?Sized> GroupStateRepository for Arc<T> {
    fn get(&self, profile: &ProfileId, key: &str) -> Result<Option<GroupState>> {
        (**self).get(profile, key)
    }

    fn set(&self, profile: &ProfileId, key: &str, state: GroupState) -> Result<()> {
        (**self).set(profile, key, state)
    }
}
