// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use availability::Availability;
pub use contact_id::ContactId;
pub use group_name::GroupName;
pub use nickname::Nickname;
pub use profile_id::ProfileId;

mod availability;
mod contact_id;
mod group_name;
mod nickname;
mod profile_id;
