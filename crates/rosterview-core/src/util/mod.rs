// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub(crate) use reorder::reorder;
pub(crate) use string_ext::StringExt;

mod reorder;
mod string_ext;
