use std::fmt;

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::card::{Card, Cards, Suit, NUM_CARDS_DECK, NUM_SUITS};
use crate::error::{MoveError, Result};
use crate::foundation::Foundation;
use crate::moves::Location;
use crate::pile::Pile;
use crate::stock::Stock;

pub const NUM_PILES: usize = 7;
pub const NUM_DEALT_TO_PILES: usize = NUM_PILES * (NUM_PILES + 1) / 2;
pub const NUM_STOCK_CARDS: usize = NUM_CARDS_DECK - NUM_DEALT_TO_PILES;

/// SHA-256 digest of a state's canonical encoding.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StateHash([u8; 32]);

impl StateHash {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for StateHash {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.iter().try_for_each(|byte| write!(f, "{:02x}", byte))
    }
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize)]
pub struct GameState {
    stock: Stock,
    piles: [Pile; NUM_PILES],
    foundations: [Foundation; NUM_SUITS],
}

impl GameState {
    /// Lays out `deck` in order: pile `i` takes the next `i + 1` cards (the
    /// first of them on top), the remaining 24 form the stock.
    ///
    /// Panics unless `deck` holds each of the 52 cards exactly once.
    pub fn deal(deck: [Card; NUM_CARDS_DECK]) -> Self {
        let mut seen = [false; NUM_CARDS_DECK];
        for card in &deck {
            let slot = &mut seen[card.deck_index()];
            assert!(!*slot, "{:?} appears twice in the deck", card);
            *slot = true;
        }

        let mut dealt = 0;
        let piles = std::array::from_fn(|i| {
            let pile = Pile::dealt(&deck[dealt..dealt + i + 1]);
            dealt += i + 1;
            pile
        });

        GameState {
            stock: Stock::dealt(&deck[NUM_DEALT_TO_PILES..]),
            piles,
            foundations: Suit::ALL.map(Foundation::new),
        }
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn piles(&self) -> &[Pile; NUM_PILES] {
        &self.piles
    }

    /// Panics if `idx` is not in `0..7`.
    pub fn pile(&self, idx: usize) -> &Pile {
        &self.piles[idx]
    }

    /// Foundations in `Suit::ALL` order.
    pub fn foundations(&self) -> &[Foundation; NUM_SUITS] {
        &self.foundations
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[suit.index()]
    }

    /// Every physical card in the game, whichever way it faces.
    pub(crate) fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.stock
            .undrawn_top_first()
            .chain(self.stock.drawn_top_first())
            .chain(self.piles.iter().flat_map(|pile| pile.top_first()))
            .chain(self.foundations.iter().flat_map(|f| f.top_first()))
            .copied()
    }

    /// Digest of the stock (pass count, undrawn cards, waste), then the
    /// piles in order, then the foundations in suit order. Every card
    /// sequence is length-prefixed and every card carries its orientation.
    pub fn hash(&self) -> StateHash {
        let mut hasher = Sha256::new();
        hasher.update(self.stock.passes().to_le_bytes());
        encode_run(&mut hasher, self.stock.undrawn_top_first());
        encode_run(&mut hasher, self.stock.drawn_top_first());
        for pile in &self.piles {
            encode_run(&mut hasher, pile.top_first());
        }
        for foundation in &self.foundations {
            encode_run(&mut hasher, foundation.top_first());
        }
        StateHash(hasher.finalize().into())
    }

    pub(crate) fn draw(&mut self, n: usize) {
        self.stock.draw(n);
    }

    pub(crate) fn take(&mut self, from: Location, count: usize) -> Result<Cards> {
        match from {
            Location::Stock => Ok(self.stock.pop(count)),
            Location::Pile(idx) => self
                .pile_mut(idx)
                .pop(count)
                .map_err(|rule| MoveError::InvalidMove { at: from, rule }),
            Location::Foundation(suit) => Ok(self.foundations[suit.index()].pop(count)),
        }
    }

    pub(crate) fn put(&mut self, to: Location, group: &[Card]) -> Result<()> {
        let placed = match to {
            Location::Stock => self.stock.place(group),
            Location::Pile(idx) => self.pile_mut(idx).place(group),
            Location::Foundation(suit) => self.foundations[suit.index()].place(group),
        };
        placed.map_err(|rule| MoveError::InvalidMove { at: to, rule })
    }

    fn pile_mut(&mut self, idx: usize) -> &mut Pile {
        assert!(idx < NUM_PILES, "pile index {} out of range", idx);
        &mut self.piles[idx]
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        stock: Stock,
        piles: [Pile; NUM_PILES],
        foundations: [Foundation; NUM_SUITS],
    ) -> Self {
        GameState {
            stock,
            piles,
            foundations,
        }
    }
}

fn encode_run<'a>(hasher: &mut Sha256, cards: impl ExactSizeIterator<Item = &'a Card>) {
    hasher.update([cards.len() as u8]);
    for card in cards {
        hasher.update(card.encode());
    }
}
