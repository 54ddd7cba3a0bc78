use crate::card::{sorted_deck, Card, Suit, NUM_CARDS_DECK};
use crate::foundation::Foundation;
use crate::moves::Move;
use crate::pile::Pile;
use crate::state::{GameState, NUM_PILES};
use crate::stock::Stock;
use crate::Game;

pub fn is_valid_game_state(state: &GameState) -> bool {
    let mut seen = [0u8; NUM_CARDS_DECK];
    for card in state.cards() {
        seen[card.deck_index()] += 1;
    }
    seen.iter().all(|&count| count == 1)
}

pub fn assert_conserved(state: &GameState) {
    assert!(
        is_valid_game_state(state),
        "cards were lost or duplicated:\n{:?}",
        state
    );
}

/// A one-draw game with the given piles (top first, only the top card face
/// up). Every card not named sits face up in the waste, in deck order with
/// the lowest card on top, and the stock proper is empty.
pub fn layout(piles: &[&[Card]]) -> Game {
    assert!(piles.len() <= NUM_PILES);

    let mut used = [false; NUM_CARDS_DECK];
    let mut built: [Pile; NUM_PILES] = Default::default();
    for (slot, cards) in built.iter_mut().zip(piles) {
        for card in cards.iter() {
            used[card.deck_index()] = true;
        }
        *slot = Pile::from_parts(cards, usize::from(!cards.is_empty()));
    }

    let waste: Vec<Card> = sorted_deck()
        .into_iter()
        .filter(|card| !used[card.deck_index()])
        .collect();
    let state = GameState::from_parts(
        Stock::from_parts(0, &[], &waste),
        built,
        Suit::ALL.map(Foundation::new),
    );
    assert_conserved(&state);
    Game::from_state(state, 1)
}

pub fn assert_invariants(state: &GameState) {
    assert_conserved(state);

    for pile in state.piles() {
        let run = pile.cards().take_while(|view| !view.is_hidden()).count();
        assert_eq!(pile.face_up_count(), run);
        if !pile.is_empty() {
            assert!(run >= 1, "pile top left face down");
        }
    }

    let stock = state.stock();
    assert!(stock.cards().all(|view| view.is_hidden()));
    assert!(stock.drawn().all(|card| card.is_face_up()));

    for foundation in state.foundations() {
        let ace_first: Vec<Card> = foundation.top_first().rev().copied().collect();
        for (pos, card) in ace_first.iter().enumerate() {
            assert_eq!(card.suit(), foundation.suit());
            assert_eq!(usize::from(card.rank()), pos + 1);
        }
    }
}

/// Every card identity a caller can read through the public accessors.
fn visible_cards(state: &GameState) -> Vec<Card> {
    let mut cards = Vec::new();
    for pile in state.piles() {
        cards.extend(pile.cards().filter_map(|view| view.card()));
        cards.extend((0..pile.len()).filter_map(|idx| pile.card(idx).card()));
        cards.extend(pile.top().and_then(|view| view.card()));
    }
    let stock = state.stock();
    cards.extend(stock.cards().filter_map(|view| view.card()));
    cards.extend(stock.drawn());
    cards.extend(stock.top());
    cards.extend(state.foundations().iter().filter_map(|f| f.top()));
    cards
}

#[test]
fn public_accessors_never_reveal_face_down_cards() {
    let game = Game::with_seed(42, 1);
    let seen = visible_cards(game.state());
    assert!(seen.iter().all(|card| card.is_face_up()));
    // the seven pile tops, each reached three ways
    assert_eq!(seen.len(), 3 * NUM_PILES);
    assert!(game.state().pile(6).card(6).is_hidden());

    let game = game
        .apply_moves(std::iter::repeat(Move::draw()).take(5))
        .unwrap();
    let seen = visible_cards(game.state());
    assert!(seen.iter().all(|card| card.is_face_up()));
    assert_eq!(seen.len(), 3 * NUM_PILES + 5 + 1);
}

mod properties {
    use std::collections::HashSet;

    use proptest::prelude::*;
    use rayon::prelude::*;

    use super::*;
    use crate::moves::Location;

    #[derive(Clone, Copy, Debug)]
    struct Choice {
        kind: u8,
        source: usize,
        dest: usize,
        count: usize,
    }

    fn choice() -> impl Strategy<Value = Choice> {
        (0u8..4, 0usize..NUM_PILES, 0usize..12, 1usize..14).prop_map(
            |(kind, source, dest, count)| Choice {
                kind,
                source,
                dest,
                count,
            },
        )
    }

    fn destination(dest: usize) -> Location {
        match dest {
            0..=6 => Location::Pile(dest),
            7..=10 => Location::Foundation(Suit::ALL[dest - 7]),
            _ => Location::Stock,
        }
    }

    /// Turns a random choice into a move that respects every documented
    /// precondition of the current state.
    fn resolve(game: &Game, choice: Choice) -> Move {
        let state = game.state();
        let to = destination(choice.dest);
        let single = |from: Location| Move::Cards { from, to, count: 1 };

        match choice.kind {
            1 if state.stock().drawn_len() > 0 => single(Location::Stock),
            2 => {
                let pile = state.pile(choice.source);
                if pile.is_empty() {
                    return Move::Draw;
                }
                let mut count = 1 + (choice.count - 1) % pile.len();
                if matches!(to, Location::Foundation(_)) {
                    count = 1;
                }
                Move::Cards {
                    from: Location::Pile(choice.source),
                    to,
                    count,
                }
            }
            3 => {
                let suit = Suit::ALL[choice.source % Suit::ALL.len()];
                if state.foundation(suit).is_empty() {
                    Move::Draw
                } else {
                    single(Location::Foundation(suit))
                }
            }
            _ => Move::Draw,
        }
    }

    proptest! {
        #[test]
        fn moves_conserve_cards_and_never_leak_partial_state(
            seed in any::<u64>(),
            draws in 1usize..=3,
            choices in prop::collection::vec(choice(), 0..200),
        ) {
            let mut game = Game::with_seed(seed, draws);
            for choice in choices {
                let mv = resolve(&game, choice);
                let before = game.state().hash();
                match game.apply_move(mv) {
                    Ok(next) => {
                        assert_invariants(next.state());
                        game = next;
                    }
                    Err(_) => {
                        prop_assert_eq!(game.state().hash(), before);
                    }
                }
            }
        }

        #[test]
        fn seeded_deals_are_reproducible(seed in any::<u64>(), draws in 1usize..=3) {
            let a = Game::with_seed(seed, draws);
            let b = Game::with_seed(seed, draws);
            prop_assert_eq!(a.state().hash(), b.state().hash());
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn many_seeds_deal_valid_distinct_games() {
        let hashes: Vec<_> = (0..2000u64)
            .into_par_iter()
            .map(|seed| {
                let game = Game::with_seed(seed, 1);
                assert_invariants(game.state());
                assert!(!game.is_solved());
                game.state().hash()
            })
            .collect();

        let distinct: HashSet<_> = hashes.iter().collect();
        assert_eq!(distinct.len(), hashes.len());
    }
}
