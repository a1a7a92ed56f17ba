// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use avatar_provider::AvatarProvider;

#[cfg(any(test, feature = "test"))]
pub use avatar_provider::MockAvatarProvider;

mod avatar_provider;
