// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use constant_time_provider::ConstantTimeProvider;
pub use contact_attributes_builder::ContactAttributesBuilder;


#[macro_export]
macro_rules! contact_id {
    ($jid:expr) => {
        $crate::domain::shared::models::ContactId::from($jid.parse::<jid::BareJid>().unwrap())
    };
}
