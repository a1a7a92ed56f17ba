// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use group_state_repository::GroupStateRepository;

#[cfg(any(test, feature = "test"))]
pub use group_state_repository::MockGroupStateRepository;

mod group_state_repository;
