use serde::Serialize;

use crate::card::{Card, Cards, Suit, ACE, NUM_RANKS};
use crate::error::Rule;

/// A foundation builds one suit upward from the ace. `cards` is ace first.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize)]
pub struct Foundation {
    suit: Suit,
    cards: Cards,
}

impl Foundation {
    pub(crate) fn new(suit: Suit) -> Self {
        Foundation {
            suit,
            cards: Cards::new(),
        }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cards.len() == NUM_RANKS as usize
    }

    /// Highest card placed so far.
    pub fn top(&self) -> Option<Card> {
        self.cards.last().copied()
    }

    pub(crate) fn top_first(
        &self,
    ) -> impl ExactSizeIterator<Item = &Card> + DoubleEndedIterator {
        self.cards.iter().rev()
    }

    pub(crate) fn pop(&mut self, n: usize) -> Cards {
        assert!(n == 1, "can only pop 1 card from a foundation, not {}", n);
        let card = self
            .cards
            .pop()
            .unwrap_or_else(|| panic!("cannot pop the empty {:?} foundation", self.suit));
        let mut moved = Cards::new();
        moved.push(card);
        moved
    }

    pub(crate) fn place(&mut self, group: &[Card]) -> Result<(), Rule> {
        assert!(
            group.len() == 1,
            "can only place 1 card on a foundation, not {}",
            group.len()
        );

        let card = group[0];
        match self.cards.last() {
            Some(&top) if !card.stacks_on_foundation(top) => return Err(Rule::FoundationSequence),
            None if card.suit() != self.suit || card.rank() != ACE => {
                return Err(Rule::FoundationStart)
            }
            _ => {}
        }

        self.cards.push(card);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn up(suit: Suit, rank: u8) -> Card {
        Card::new(suit, rank).face_up()
    }

    #[test]
    fn foundation_builds_from_the_ace() {
        let mut foundation = Foundation::new(Suit::Heart);

        assert_eq!(foundation.place(&[up(Suit::Heart, 2)]), Err(Rule::FoundationStart));
        assert!(foundation.is_empty());

        foundation.place(&[up(Suit::Heart, 1)]).unwrap();
        foundation.place(&[up(Suit::Heart, 2)]).unwrap();
        assert_eq!(foundation.len(), 2);
        assert_eq!(foundation.top(), Some(up(Suit::Heart, 2)));
    }

    #[test]
    fn foundation_rejects_other_suits() {
        let mut foundation = Foundation::new(Suit::Spade);
        assert_eq!(foundation.place(&[up(Suit::Club, 1)]), Err(Rule::FoundationStart));

        foundation.place(&[up(Suit::Spade, 1)]).unwrap();
        assert_eq!(foundation.place(&[up(Suit::Club, 2)]), Err(Rule::FoundationSequence));
        assert_eq!(foundation.place(&[up(Suit::Spade, 3)]), Err(Rule::FoundationSequence));
        assert_eq!(foundation.len(), 1);
    }

    #[test]
    fn pop_returns_the_top_card() {
        let mut foundation = Foundation::new(Suit::Diamond);
        foundation.place(&[up(Suit::Diamond, 1)]).unwrap();
        foundation.place(&[up(Suit::Diamond, 2)]).unwrap();

        assert_eq!(foundation.pop(1).as_slice(), &[up(Suit::Diamond, 2)]);
        assert_eq!(foundation.top(), Some(up(Suit::Diamond, 1)));
    }

    #[test]
    fn full_suit_completes_the_foundation() {
        let mut foundation = Foundation::new(Suit::Club);
        for rank in 1..=13 {
            foundation.place(&[up(Suit::Club, rank)]).unwrap();
        }
        assert!(foundation.is_complete());

        let ace_first: Vec<u8> = foundation.top_first().rev().map(|card| card.rank()).collect();
        assert_eq!(ace_first, (1..=13).collect::<Vec<u8>>());
    }

    #[test]
    #[should_panic]
    fn pop_from_empty_panics() {
        Foundation::new(Suit::Club).pop(1);
    }

    #[test]
    #[should_panic]
    fn placing_two_cards_panics() {
        let mut foundation = Foundation::new(Suit::Club);
        let _ = foundation.place(&[up(Suit::Club, 1), up(Suit::Club, 2)]);
    }
}
