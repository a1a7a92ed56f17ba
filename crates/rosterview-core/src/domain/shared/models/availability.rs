// rosterview/rosterview-core
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// The show-state of the highest priority resource of a contact or of a room occupant.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default, Display, EnumIter)]
pub enum Availability {
    /// Free for chat.
    Chat,
    Available,
    Away,
    ExtendedAway,
    DoNotDisturb,
    Invisible,
    #[default]
    Unavailable,
}

impl Availability {
    /// The rank used when contacts are sorted by status. Lower ranks sort first.
    pub fn rank(&self) -> u8 {
        match self {
            Availability::Chat => 0,
            Availability::Available => 1,
            Availability::Away => 2,
            Availability::ExtendedAway => 3,
            Availability::DoNotDisturb => 4,
            Availability::Invisible => 5,
            Availability::Unavailable => 6,
        }
    }

    pub fn is_available(&self) -> bool {
        self != &Availability::Unavailable
    }

    /// Away, extended away and do-not-disturb all count as "away" for filtering purposes.
    pub fn is_away(&self) -> bool {
        matches!(
            self,
            Availability::Away | Availability::ExtendedAway | Availability::DoNotDisturb
        )
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_ranks_are_strictly_increasing() {
        let ranks = Availability::iter().map(|a| a.rank()).collect::<Vec<_>>();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_away_states() {
        assert!(Availability::DoNotDisturb.is_away());
        assert!(Availability::ExtendedAway.is_away());
        assert!(!Availability::Chat.is_away());
        assert!(!Availability::Unavailable.is_away());
        assert!(!Availability::Unavailable.is_available());
        assert!(Availability::Invisible.is_available());
    }
}
