// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::domain::tree::models::NodeIdAllocator;
use crate::infra::general::SystemTimeProvider;
use crate::infra::settings::InMemoryGroupStateRepository;

use super::{DynGroupStateRepository, DynTimeProvider};

/// The collaborators shared by all profile trees of a roster view.
#[derive(Clone)]
pub struct TreeDependencies {
    pub ids: NodeIdAllocator,
    pub group_state_repo: DynGroupStateRepository,
    pub time_provider: DynTimeProvider,
}

impl TreeDependencies {
    pub fn new(group_state_repo: DynGroupStateRepository, time_provider: DynTimeProvider) -> Self {
        TreeDependencies {
            ids: NodeIdAllocator::new(),
            group_state_repo,
            time_provider,
        }
    }
}

impl Default for TreeDependencies {
    fn default() -> Self {
        Self::new(
            Arc::new(InMemoryGroupStateRepository::default()),
            Arc::new(SystemTimeProvider::default()),
        )
    }
}
