//! Klondike game state and move validation.
//!
//! A [`Game`] is an immutable snapshot: [`Game::apply_move`] hands back the
//! next snapshot or a [`MoveError`], and never alters the game it was called
//! on. [`GameState::hash`] gives a digest suitable for deduplicating states
//! in a search.

pub mod card;
mod display;
pub mod error;
pub mod foundation;
pub mod game;
pub mod moves;
pub mod pile;
pub mod state;
pub mod stock;

#[cfg(test)]
mod tests;

pub use card::{Card, CardView, Color, Suit};
pub use error::{DecodeError, MoveError, Result, Rule, SequenceError};
pub use foundation::Foundation;
pub use game::Game;
pub use moves::{Location, Move, MoveBuilder};
pub use pile::Pile;
pub use state::{GameState, StateHash};
pub use stock::Stock;
