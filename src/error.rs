use thiserror::Error;

use crate::moves::Location;

pub type Result<T> = std::result::Result<T, MoveError>;

/// The Klondike rule a refused move would have broken.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    #[error("the moved group reaches a face-down card")]
    FaceDownGroup,
    #[error("tableau cards must alternate color and descend by one")]
    PileSequence,
    #[error("a foundation starts with the ace of its own suit")]
    FoundationStart,
    #[error("foundation cards must follow suit and ascend by one")]
    FoundationSequence,
    #[error("cards cannot be placed on the stock")]
    StockDestination,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("invalid move at {at}: {rule}")]
    InvalidMove { at: Location, rule: Rule },
}

impl MoveError {
    pub fn rule(&self) -> Rule {
        match self {
            MoveError::InvalidMove { rule, .. } => *rule,
        }
    }

    pub fn location(&self) -> Location {
        match self {
            MoveError::InvalidMove { at, .. } => *at,
        }
    }
}

/// Failure part way through `Game::apply_moves`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("move #{index} was refused: {source}")]
pub struct SequenceError {
    pub index: usize,
    pub source: MoveError,
}

/// A persisted move that names a location or card count no game has.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    #[error("pile index {0} out of range")]
    PileOutOfRange(usize),
    #[error("a move must carry at least one card")]
    NoCards,
    #[error("only 1 card can leave {from}, not {count}")]
    SingleCardSource { from: Location, count: usize },
}
