// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use noop_avatar_provider::NoopAvatarProvider;

mod noop_avatar_provider;
