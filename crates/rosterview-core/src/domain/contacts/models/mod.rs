// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use contact_attributes::ContactAttributes;
pub use contact_entry::{ContactDecoration, ContactEntry};

mod contact_attributes;
mod contact_entry;
