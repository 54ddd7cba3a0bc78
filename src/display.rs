use std::fmt;

use colored::{ColoredString, Colorize};

use crate::card::{Card, CardView, Color, Suit};
use crate::moves::{Location, Move};
use crate::state::GameState;

fn rank_label(rank: u8) -> String {
    match rank {
        1 => "A".to_string(),
        11 => "J".to_string(),
        12 => "Q".to_string(),
        13 => "K".to_string(),
        n => n.to_string(),
    }
}

fn paint(text: String, color: Color) -> ColoredString {
    match color {
        Color::Red => text.red().on_white(),
        Color::Black => text.black().on_white(),
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let symbol = match self {
            Suit::Heart => "♥",
            Suit::Spade => "♠",
            Suit::Diamond => "♦",
            Suit::Club => "♣",
        };
        write!(f, "{}", symbol)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.view())
    }
}

impl fmt::Display for CardView {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CardView::Hidden => write!(f, "??"),
            CardView::FaceUp(card) => {
                let label = format!("{}{}", rank_label(card.rank()), card.suit());
                write!(f, "{}", paint(label, card.color()))
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Location::Stock => write!(f, "stock"),
            Location::Pile(idx) => write!(f, "pile {}", idx + 1),
            Location::Foundation(suit) => write!(f, "{} foundation", suit),
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Move::Draw => write!(f, "draw"),
            Move::Cards { from, to, count } => write!(f, "{} from {} to {}", count, from, to),
        }
    }
}

// Foundations, then the stock and its waste (most recent card first), then
// each pile from its bottom card up to its top card.
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Foundations:")?;
        self.foundations().iter().try_for_each(|foundation| match foundation.top() {
            Some(card) => write!(f, " [{}]", card),
            None => {
                let suit = foundation.suit();
                write!(f, " [{} ]", paint(suit.to_string(), suit.color()))
            }
        })?;
        writeln!(f)?;

        let stock = self.stock();
        write!(f, "Stock: {} left, pass {} | Waste:", stock.len(), stock.passes())?;
        stock.drawn().try_for_each(|card| write!(f, " {}", card))?;
        writeln!(f)?;

        writeln!(f, "Piles:")?;
        self.piles().iter().enumerate().try_for_each(|(idx, pile)| {
            write!(f, "[{}]", idx + 1)?;
            let top_down: Vec<CardView> = pile.cards().collect();
            top_down.iter().rev().try_for_each(|view| write!(f, " {}", view))?;
            writeln!(f)
        })
    }
}
