// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use jid::BareJid;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Identifies a roster contact by its bare JID.
pub struct ContactId(BareJid);

impl ContactId {
    pub fn into_inner(self) -> BareJid {
        self.0
    }

    /// The local part of the JID, or the full JID for node-less entities like transports.
    pub fn username(&self) -> String {
        match self.0.node_str() {
            Some(node) => node.to_string(),
            None => self.0.to_string(),
        }
    }
}

impl From<BareJid> for ContactId {
    fn from(value: BareJid) -> Self {
        ContactId(value)
    }
}

impl Debug for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "ContactId({})", self.0)
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ContactId {
    type Err = jid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(ContactId(s.parse::<BareJid>()?))
    }
}

impl AsRef<BareJid> for ContactId {
    fn as_ref(&self) -> &BareJid {
        &self.0
    }
}
