use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::rand_core::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

use crate::card::{sorted_deck, Card, NUM_CARDS_DECK};
use crate::error::{Result, SequenceError};
use crate::moves::Move;
use crate::state::GameState;

/// A dealt game and the number of cards each draw turns over.
///
/// Moves never change a `Game` in place: `apply_move` returns the next
/// game and leaves `self` as it was, whether or not the move succeeds.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize)]
pub struct Game {
    draws: usize,
    state: GameState,
}

impl Game {
    /// Shuffles a fresh deck with `rng` and deals it. Panics if `draws` is 0.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, draws: usize) -> Self {
        let mut deck = sorted_deck();
        deck.shuffle(rng);
        Self::from_deck(deck, draws)
    }

    /// Deals the game named by `seed`. The same seed gives the same deal
    /// on every platform.
    pub fn with_seed(seed: u64, draws: usize) -> Self {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        Self::new(&mut rng, draws)
    }

    /// Deals an already shuffled deck, see `GameState::deal`.
    pub fn from_deck(deck: [Card; NUM_CARDS_DECK], draws: usize) -> Self {
        assert!(draws >= 1, "draw count must be at least 1, got {}", draws);
        Game {
            draws,
            state: GameState::deal(deck),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Returns the game after `mv`, or the rule it breaks.
    ///
    /// # Panics
    ///
    /// If `mv` takes more cards than its source holds, takes from an empty
    /// waste or foundation, or takes more than one card from either. A
    /// deserialized `Move` has already been checked for pile indices and
    /// card counts.
    pub fn apply_move(&self, mv: Move) -> Result<Game> {
        let mut next = self.clone();
        match mv {
            Move::Draw => next.state.draw(self.draws),
            Move::Cards { from, to, .. } if from == to => {}
            Move::Cards { from, to, count } => {
                let moved = next.state.take(from, count)?;
                next.state.put(to, &moved)?;
            }
        }
        Ok(next)
    }

    /// Applies `moves` in order, stopping at the first one refused.
    pub fn apply_moves<I>(&self, moves: I) -> std::result::Result<Game, SequenceError>
    where
        I: IntoIterator<Item = Move>,
    {
        moves
            .into_iter()
            .enumerate()
            .try_fold(self.clone(), |game, (index, mv)| {
                game.apply_move(mv)
                    .map_err(|source| SequenceError { index, source })
            })
    }

    /// Every pile is fully face up and the stock has nothing left to draw.
    /// Cards may still be sitting in the piles or the waste.
    pub fn is_solved(&self) -> bool {
        self.state
            .piles()
            .iter()
            .all(|pile| pile.face_up_count() == pile.len())
            && self.state.stock().is_empty()
    }

    #[cfg(test)]
    pub(crate) fn from_state(state: GameState, draws: usize) -> Self {
        Game { draws, state }
    }
}
