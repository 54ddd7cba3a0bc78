use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::card::{Card, CardView, Cards};
use crate::error::Rule;

/// The face-down draw pile plus its face-up waste. In both sequences the
/// front (next card to draw, most recently drawn card) is the last element.
#[derive(Clone, Default, Hash, PartialEq, Eq)]
pub struct Stock {
    passes: u32,
    cards: Cards,
    drawn: Cards,
}

impl Stock {
    pub(crate) fn dealt(front_first: &[Card]) -> Self {
        Stock {
            passes: 0,
            cards: front_first.iter().rev().map(|card| card.face_down()).collect(),
            drawn: Cards::new(),
        }
    }

    /// Cards left to draw.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// How many times the waste has been turned back into the stock.
    pub fn passes(&self) -> u32 {
        self.passes
    }

    pub fn drawn_len(&self) -> usize {
        self.drawn.len()
    }

    /// The waste, most recently drawn card first.
    pub fn drawn(&self) -> impl Iterator<Item = Card> + '_ {
        self.drawn.iter().rev().copied()
    }

    /// The waste card that can be played.
    pub fn top(&self) -> Option<Card> {
        self.drawn.last().copied()
    }

    /// The undrawn cards, which are always hidden.
    pub fn cards(&self) -> impl Iterator<Item = CardView> + '_ {
        self.cards.iter().rev().map(|card| card.view())
    }

    pub(crate) fn undrawn_top_first(
        &self,
    ) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.cards.iter().rev()
    }

    pub(crate) fn drawn_top_first(
        &self,
    ) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.drawn.iter().rev()
    }

    /// Turns up to `n` cards onto the waste, keeping their order, or
    /// recycles the waste when the stock is exhausted.
    pub(crate) fn draw(&mut self, n: usize) {
        if self.cards.is_empty() {
            self.cards = self.drawn.drain(..).rev().map(|card| card.face_down()).collect();
            self.passes += 1;
            return;
        }

        let take = n.min(self.cards.len());
        let cut = self.cards.len() - take;
        let turned: Cards = self.cards.drain(cut..).map(|card| card.face_up()).collect();
        self.drawn.extend(turned);
    }

    pub(crate) fn pop(&mut self, n: usize) -> Cards {
        assert!(n == 1, "can only pop 1 card from the stock, not {}", n);
        let card = self.drawn.pop().expect("cannot pop from an empty waste");
        let mut moved = Cards::new();
        moved.push(card);
        moved
    }

    pub(crate) fn place(&mut self, _group: &[Card]) -> Result<(), Rule> {
        Err(Rule::StockDestination)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(passes: u32, undrawn: &[Card], drawn: &[Card]) -> Self {
        Stock {
            passes,
            cards: undrawn.iter().rev().map(|card| card.face_down()).collect(),
            drawn: drawn.iter().rev().map(|card| card.face_up()).collect(),
        }
    }
}

impl fmt::Debug for Stock {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Stock")
            .field("passes", &self.passes)
            .field("undrawn", &self.cards.len())
            .field("drawn", &self.drawn().collect::<Vec<_>>())
            .finish()
    }
}

// Only the size of the undrawn pile is exported.
impl Serialize for Stock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Stock", 3)?;
        out.serialize_field("passes", &self.passes)?;
        out.serialize_field("undrawn", &self.cards.len())?;
        out.serialize_field("drawn", &self.drawn().collect::<Vec<_>>())?;
        out.end()
    }
}
