// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod contacts;
pub mod general;
pub mod grouping;
pub mod muc;
pub mod settings;
pub mod shared;
pub mod sorting;
pub mod tree;
