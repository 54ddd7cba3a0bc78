use std::fmt;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::card::{Card, CardView, Cards};
use crate::error::Rule;

/// One tableau column. The top of the column (index 0 in every public
/// accessor) is the last element of `cards`.
#[derive(Clone, Default, Hash, PartialEq, Eq)]
pub struct Pile {
    cards: Cards,
    face_up_count: usize,
}

impl Pile {
    /// Deals `top_first` into a fresh column with only its top card turned up.
    pub(crate) fn dealt(top_first: &[Card]) -> Self {
        let mut cards: Cards = top_first.iter().rev().map(|card| card.face_down()).collect();
        if let Some(top) = cards.last_mut() {
            *top = top.face_up();
        }
        let face_up_count = usize::from(!cards.is_empty());
        Pile {
            cards,
            face_up_count,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of face-up cards, counted down from the top.
    pub fn face_up_count(&self) -> usize {
        self.face_up_count
    }

    /// The card `idx` places below the top. Panics if `idx` is out of range.
    pub fn card(&self, idx: usize) -> CardView {
        assert!(
            idx < self.cards.len(),
            "pile index {} out of range for a pile of {}",
            idx,
            self.cards.len()
        );
        self.cards[self.cards.len() - 1 - idx].view()
    }

    pub fn top(&self) -> Option<CardView> {
        self.cards.last().map(|card| card.view())
    }

    /// Every card from the top down, face-down cards hidden.
    pub fn cards(&self) -> impl Iterator<Item = CardView> + '_ {
        self.cards.iter().rev().map(|card| card.view())
    }

    pub(crate) fn top_first(
        &self,
    ) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.cards.iter().rev()
    }

    /// Lifts the top `n` cards, returned bottom first. A newly exposed
    /// face-down card is turned up.
    pub(crate) fn pop(&mut self, n: usize) -> Result<Cards, Rule> {
        assert!(
            n >= 1 && n <= self.cards.len(),
            "cannot pop {} cards from a pile of {}",
            n,
            self.cards.len()
        );

        let cut = self.cards.len() - n;
        if !self.cards[cut].is_face_up() {
            return Err(Rule::FaceDownGroup);
        }

        let moved: Cards = self.cards.drain(cut..).collect();
        if let Some(top) = self.cards.last_mut() {
            *top = top.face_up();
        }
        self.face_up_count = self
            .cards
            .iter()
            .rev()
            .take_while(|card| card.is_face_up())
            .count();

        Ok(moved)
    }

    /// Puts `group` (bottom first) on top of the column. An empty column
    /// takes any group.
    pub(crate) fn place(&mut self, group: &[Card]) -> Result<(), Rule> {
        assert!(!group.is_empty(), "cannot place an empty group on a pile");

        if let Some(&top) = self.cards.last() {
            if !group[0].stacks_on_pile(top) {
                return Err(Rule::PileSequence);
            }
        }

        self.cards.extend(group.iter().copied());
        self.face_up_count += group.len();
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn from_parts(top_first: &[Card], face_up_count: usize) -> Self {
        let cards: Cards = top_first
            .iter()
            .rev()
            .enumerate()
            .map(|(depth, card)| {
                if depth >= top_first.len() - face_up_count {
                    card.face_up()
                } else {
                    card.face_down()
                }
            })
            .collect();
        Pile {
            cards,
            face_up_count,
        }
    }
}

impl fmt::Debug for Pile {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Pile")
            .field("cards", &self.cards().collect::<Vec<_>>())
            .field("face_up_count", &self.face_up_count)
            .finish()
    }
}

// Snapshots carry the same view a player has: face-down cards stay hidden.
impl Serialize for Pile {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Pile", 2)?;
        out.serialize_field("cards", &self.cards().collect::<Vec<_>>())?;
        out.serialize_field("face_up_count", &self.face_up_count)?;
        out.end()
    }
}
