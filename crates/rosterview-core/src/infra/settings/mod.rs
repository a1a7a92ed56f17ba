// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use in_memory_group_state_repository::InMemoryGroupStateRepository;

mod in_memory_group_state_repository;
