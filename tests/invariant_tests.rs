//! Property tests: random operation sequences keep the game consistent.
//!
//! After every operation:
//! - a card is in the box or in the deck, never both
//! - a deck card is in exactly one pile
//! - the draw pile holds exactly the `Draw` cards, each behind one token
//! - tokens and names map one to one; always-visible cards use their name
//!
//! An operation that fails with a rule violation leaves the game unchanged.

mod common;

use std::collections::{BTreeMap, BTreeSet};

use card_table::{Game, Pile};
use common::Fixture;
use proptest::prelude::*;

const CARDS: [&str; 5] = ["ace", "bee", "cat", "dog", "elf"];

#[derive(Clone, Debug)]
enum Op {
    Discover(usize),
    Forget(usize),
    Destroy(usize),
    Play(usize),
    Discard(usize),
    Lock(usize),
    Unlock(usize),
    PutInDrawPile(usize, bool),
    PlayFirst,
    Shuffle,
    DiscardAll,
    ShuffleBack,
    Rotate(usize),
    Flip(usize),
    SetVisible(usize),
    RemoveVisible(usize),
}

fn op() -> impl Strategy<Value = Op> {
    let card = 0..CARDS.len();
    prop_oneof![
        3 => card.clone().prop_map(Op::Discover),
        1 => card.clone().prop_map(Op::Forget),
        1 => card.clone().prop_map(Op::Destroy),
        2 => card.clone().prop_map(Op::Play),
        2 => card.clone().prop_map(Op::Discard),
        1 => card.clone().prop_map(Op::Lock),
        1 => card.clone().prop_map(Op::Unlock),
        3 => (card.clone(), any::<bool>()).prop_map(|(i, top)| Op::PutInDrawPile(i, top)),
        2 => Just(Op::PlayFirst),
        1 => Just(Op::Shuffle),
        1 => Just(Op::DiscardAll),
        1 => Just(Op::ShuffleBack),
        1 => card.clone().prop_map(Op::Rotate),
        1 => card.clone().prop_map(Op::Flip),
        2 => card.clone().prop_map(Op::SetVisible),
        1 => card.prop_map(Op::RemoveVisible),
    ]
}

fn apply(game: &mut Game, op: &Op) -> card_table::Result<()> {
    match *op {
        Op::Discover(i) => game.discover_card(CARDS[i]),
        Op::Forget(i) => game.forget_card(CARDS[i]),
        Op::Destroy(i) => game.destroy_card(CARDS[i]),
        Op::Play(i) => game.play_card(CARDS[i]),
        Op::Discard(i) => game.discard(CARDS[i]),
        Op::Lock(i) => game.lock_card(CARDS[i]),
        Op::Unlock(i) => game.unlock_card(CARDS[i]),
        Op::PutInDrawPile(i, top) => game.put_card_in_draw_pile(CARDS[i], top),
        Op::PlayFirst => game.play_first_card().map(|_| ()),
        Op::Shuffle => game.shuffle_draw_pile(),
        Op::DiscardAll => game.discard_all_cards_in_play(),
        Op::ShuffleBack => game.shuffle_back_all_discarded(),
        Op::Rotate(i) => game.rotate_card(CARDS[i]),
        Op::Flip(i) => game.flip_card(CARDS[i]),
        Op::SetVisible(i) => game.set_always_visible(CARDS[i]),
        Op::RemoveVisible(i) => game.remove_always_visible(CARDS[i]),
    }
}

/// Everything observable about the piles.
#[derive(Debug, PartialEq)]
struct Snapshot {
    box_cards: Vec<String>,
    piles: BTreeMap<String, Pile>,
    draw: Vec<String>,
    visible: BTreeSet<String>,
}

fn snapshot(game: &Game) -> Snapshot {
    let piles = game
        .deck_card_names()
        .into_iter()
        .filter_map(|name| game.get_card_pile(&name).ok().map(|pile| (name, pile)))
        .collect();
    let visible = CARDS
        .iter()
        .filter(|name| game.is_always_visible(name).unwrap_or(false))
        .map(|name| name.to_string())
        .collect();
    Snapshot {
        box_cards: game.box_card_names(),
        piles,
        draw: game.draw_pile_cards().to_vec(),
        visible,
    }
}

fn check_invariants(game: &Game) -> Result<(), TestCaseError> {
    let box_cards: BTreeSet<String> = game.box_card_names().into_iter().collect();
    let deck: BTreeSet<String> = game.deck_card_names().into_iter().collect();
    prop_assert!(box_cards.is_disjoint(&deck));

    let mut in_draw = BTreeSet::new();
    for name in &deck {
        let pile = game.get_card_pile(name);
        prop_assert!(pile.is_ok(), "deck card {} has no pile", name);
        if matches!(pile, Ok(Pile::Draw)) {
            in_draw.insert(name.clone());
        }
    }
    for name in &box_cards {
        prop_assert!(game.get_card_pile(name).is_err());
        prop_assert!(game.get_draw_token(name).is_none());
    }

    let tokens = game.draw_pile_cards();
    let distinct: BTreeSet<&String> = tokens.iter().collect();
    prop_assert_eq!(distinct.len(), tokens.len());
    prop_assert_eq!(tokens.len(), in_draw.len());

    let mut named = BTreeSet::new();
    for token in tokens {
        let name = game.get_real_card_name(token);
        prop_assert!(name.is_ok(), "dangling token {}", token);
        let name = name.unwrap_or_default().to_string();
        prop_assert_eq!(game.get_draw_token(&name), Some(token.as_str()));
        if game.is_always_visible(&name).unwrap_or(false) {
            prop_assert_eq!(token, &name);
        }
        named.insert(name);
    }
    prop_assert_eq!(named, in_draw);

    match game.get_draw_pile_top_card() {
        Some(card) => {
            let top = tokens.last().map(|t| game.get_real_card_name(t).unwrap_or_default());
            prop_assert_eq!(Some(card.name()), top);
        }
        None => prop_assert!(tokens.is_empty()),
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    /// Random play never breaks the pile invariants, and refused operations
    /// change nothing.
    #[test]
    fn random_play_keeps_piles_consistent(ops in prop::collection::vec(op(), 1..40)) {
        let fx = Fixture::in_memory();
        let mut game = fx.game();
        for name in CARDS {
            let png = fx.png(&format!("{name}.png"));
            game.import_card(&png, &png, None).unwrap();
        }

        for op in &ops {
            let before = snapshot(&game);
            match apply(&mut game, op) {
                Ok(()) => {}
                Err(e) => {
                    prop_assert!(e.is_rule_violation(), "{:?} failed with {}", op, e);
                    prop_assert_eq!(&snapshot(&game), &before, "{:?} changed state before failing", op);
                }
            }
            check_invariants(&game)?;
        }

        // Everything written is what a fresh open reads back.
        let reopened = fx.game();
        prop_assert_eq!(snapshot(&reopened), snapshot(&game));
        check_invariants(&reopened)?;
    }
}
