use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

pub const NUM_SUITS: usize = 4;
pub const NUM_RANKS: u8 = 13;
pub const NUM_CARDS_DECK: usize = NUM_SUITS * NUM_RANKS as usize;

pub const ACE: u8 = 1;
pub const KING: u8 = NUM_RANKS;

/// A run of cards stored bottom first: the playable end is the last element.
pub type Cards = ArrayVec<Card, NUM_CARDS_DECK>;

// Discriminants start at 1 and alternate colors so that parity gives the color.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Suit {
    Heart = 1,
    Spade = 2,
    Diamond = 3,
    Club = 4,
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

impl Suit {
    pub const ALL: [Suit; NUM_SUITS] = [Suit::Heart, Suit::Spade, Suit::Diamond, Suit::Club];

    /// Position of the suit in `Suit::ALL`, which is also the foundation order.
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn color(self) -> Color {
        if self as u8 % 2 == 1 {
            Color::Red
        } else {
            Color::Black
        }
    }
}

#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    rank: u8,
    face_up: bool,
}

impl Card {
    /// Creates a face-down card. Panics if `rank` is not in `1..=13`.
    pub fn new(suit: Suit, rank: u8) -> Self {
        assert!(
            (ACE..=KING).contains(&rank),
            "card rank {} is outside {}..={}",
            rank,
            ACE,
            KING
        );
        Card {
            suit,
            rank,
            face_up: false,
        }
    }

    pub fn suit(self) -> Suit {
        self.suit
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    pub fn color(self) -> Color {
        self.suit.color()
    }

    pub fn is_red(self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_face_up(self) -> bool {
        self.face_up
    }

    pub fn face_up(self) -> Self {
        Card {
            face_up: true,
            ..self
        }
    }

    pub fn face_down(self) -> Self {
        Card {
            face_up: false,
            ..self
        }
    }

    /// Slot of this card in a sorted deck, ignoring which way it faces.
    pub fn deck_index(self) -> usize {
        self.suit.index() * NUM_RANKS as usize + (self.rank - ACE) as usize
    }

    /// What a player is allowed to see of this card.
    pub fn view(self) -> CardView {
        if self.face_up {
            CardView::FaceUp(self)
        } else {
            CardView::Hidden
        }
    }

    /// True if `self` can continue a tableau run whose current top is `target`.
    pub fn stacks_on_pile(self, target: Card) -> bool {
        self.color() != target.color() && target.rank == self.rank + 1
    }

    /// True if `self` is the next card for a foundation whose current top is `target`.
    pub fn stacks_on_foundation(self, target: Card) -> bool {
        self.suit == target.suit && self.rank == target.rank + 1
    }

    pub(crate) fn encode(self) -> [u8; 3] {
        [self.suit as u8, self.rank, self.face_up as u8]
    }
}

/// A card as reported to callers: face-down cards never reveal their identity.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize)]
pub enum CardView {
    Hidden,
    FaceUp(Card),
}

impl CardView {
    pub fn card(self) -> Option<Card> {
        match self {
            CardView::Hidden => None,
            CardView::FaceUp(card) => Some(card),
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, CardView::Hidden)
    }
}

/// The 52 cards in suit order, ace to king, all face down.
pub fn sorted_deck() -> [Card; NUM_CARDS_DECK] {
    let mut deck = [Card::new(Suit::Heart, ACE); NUM_CARDS_DECK];
    for suit in Suit::ALL {
        for rank in ACE..=KING {
            let card = Card::new(suit, rank);
            deck[card.deck_index()] = card;
        }
    }
    deck
}
