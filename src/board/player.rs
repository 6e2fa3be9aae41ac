//! Player identities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    /// First player.
    A,
    /// Second player.
    B,
}

impl PlayerId {
    /// Both players, in turn order.
    pub const ALL: [PlayerId; 2] = [PlayerId::A, PlayerId::B];

    /// The other player.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// Board symbol for a piece of this player.
    #[must_use]
    pub const fn piece_symbol(self) -> char {
        match self {
            PlayerId::A => 'A',
            PlayerId::B => 'B',
        }
    }

    /// Board symbol for an empty cell enclosed by this player.
    #[must_use]
    pub const fn territory_symbol(self) -> char {
        match self {
            PlayerId::A => 'a',
            PlayerId::B => 'b',
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.piece_symbol())
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = GridError;

    /// Numeric ids are 1-based: 1 is A, 2 is B.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PlayerId::A),
            2 => Ok(PlayerId::B),
            other => Err(GridError::invalid_player(other.to_string())),
        }
    }
}

impl TryFrom<char> for PlayerId {
    type Error = GridError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        match value.to_ascii_uppercase() {
            'A' => Ok(PlayerId::A),
            'B' => Ok(PlayerId::B),
            _ => Err(GridError::invalid_player(value.to_string())),
        }
    }
}

impl std::str::FromStr for PlayerId {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => PlayerId::try_from(c),
            _ => Err(GridError::invalid_player(s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(PlayerId::A.opponent(), PlayerId::B);
        assert_eq!(PlayerId::B.opponent(), PlayerId::A);
        for player in PlayerId::ALL {
            assert_eq!(player.opponent().opponent(), player);
        }
    }

    #[test]
    fn test_from_u8() {
        assert_eq!(PlayerId::try_from(1u8), Ok(PlayerId::A));
        assert_eq!(PlayerId::try_from(2u8), Ok(PlayerId::B));
        assert!(PlayerId::try_from(0u8).is_err());
        assert!(PlayerId::try_from(3u8).is_err());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("a".parse::<PlayerId>(), Ok(PlayerId::A));
        assert_eq!(" B ".parse::<PlayerId>(), Ok(PlayerId::B));
        assert!("AB".parse::<PlayerId>().is_err());
        assert!("".parse::<PlayerId>().is_err());
        assert!("c".parse::<PlayerId>().is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PlayerId::A.piece_symbol(), 'A');
        assert_eq!(PlayerId::B.territory_symbol(), 'b');
        assert_eq!(PlayerId::B.to_string(), "B");
    }
}
