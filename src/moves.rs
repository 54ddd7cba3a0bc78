use serde::{Deserialize, Serialize};

use crate::card::Suit;
use crate::error::DecodeError;
use crate::state::NUM_PILES;

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr")]
pub enum Location {
    /// The waste card on top of the stock; never a valid destination.
    Stock,
    // 0-based pile index
    Pile(usize),
    Foundation(Suit),
}

impl Location {
    /// Panics if `idx` is not in `0..7`.
    pub fn pile(idx: usize) -> Self {
        assert!(idx < NUM_PILES, "pile index {} out of range", idx);
        Location::Pile(idx)
    }
}

/// Deserialized moves are checked against the board's shape: pile indices
/// in range, at least one card, and a single card out of the stock or a
/// foundation.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr")]
pub enum Move {
    /// Turn cards from the stock onto the waste, or recycle the waste.
    Draw,
    Cards {
        from: Location,
        to: Location,
        count: usize,
    },
}

impl Move {
    pub fn draw() -> Self {
        Move::Draw
    }

    pub fn from_stock() -> MoveBuilder {
        MoveBuilder {
            from: Location::Stock,
            count: 1,
        }
    }

    /// Starts a move of the top `count` cards of pile `idx`.
    pub fn from_pile(idx: usize, count: usize) -> MoveBuilder {
        MoveBuilder {
            from: Location::pile(idx),
            count,
        }
    }

    pub fn from_foundation(suit: Suit) -> MoveBuilder {
        MoveBuilder {
            from: Location::Foundation(suit),
            count: 1,
        }
    }
}

#[derive(Deserialize)]
enum LocationRepr {
    Stock,
    Pile(usize),
    Foundation(Suit),
}

impl TryFrom<LocationRepr> for Location {
    type Error = DecodeError;

    fn try_from(repr: LocationRepr) -> Result<Self, Self::Error> {
        match repr {
            LocationRepr::Stock => Ok(Location::Stock),
            LocationRepr::Pile(idx) if idx < NUM_PILES => Ok(Location::Pile(idx)),
            LocationRepr::Pile(idx) => Err(DecodeError::PileOutOfRange(idx)),
            LocationRepr::Foundation(suit) => Ok(Location::Foundation(suit)),
        }
    }
}

#[derive(Deserialize)]
enum MoveRepr {
    Draw,
    Cards {
        from: Location,
        to: Location,
        count: usize,
    },
}

impl TryFrom<MoveRepr> for Move {
    type Error = DecodeError;

    fn try_from(repr: MoveRepr) -> Result<Self, Self::Error> {
        match repr {
            MoveRepr::Draw => Ok(Move::Draw),
            MoveRepr::Cards { count: 0, .. } => Err(DecodeError::NoCards),
            MoveRepr::Cards { from, count, .. }
                if count > 1 && !matches!(from, Location::Pile(_)) =>
            {
                Err(DecodeError::SingleCardSource { from, count })
            }
            MoveRepr::Cards { from, to, count } => Ok(Move::Cards { from, to, count }),
        }
    }
}

/// A move with its source chosen, waiting for a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveBuilder {
    from: Location,
    count: usize,
}

impl MoveBuilder {
    pub fn to(self, to: Location) -> Move {
        Move::Cards {
            from: self.from,
            to,
            count: self.count,
        }
    }

    pub fn to_pile(self, idx: usize) -> Move {
        self.to(Location::pile(idx))
    }

    pub fn to_foundation(self, suit: Suit) -> Move {
        self.to(Location::Foundation(suit))
    }
}
