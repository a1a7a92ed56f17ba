// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use rosterview_utils::id_string;

id_string!(
    /// The nickname of an occupant inside a multi-user chat room.
    Nickname
);
