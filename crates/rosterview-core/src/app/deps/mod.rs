// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use tree_dependencies::TreeDependencies;

mod tree_dependencies;

use std::sync::Arc;

use crate::domain::contacts::services::AvatarProvider;
use crate::domain::general::services::TimeProvider;
use crate::domain::settings::repos::GroupStateRepository;

pub type DynAvatarProvider = Arc<dyn AvatarProvider>;
pub type DynGroupStateRepository = Arc<dyn GroupStateRepository>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
