//! Card drawing.
//!
//! Draws distinct cards uniformly from the deck. Reversal is a fair coin flip
//! per card unless the request disables reversed cards entirely.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::deck::{Card, Deck};

/// A card as it landed in a reading: the card itself plus its orientation
/// and the meaning matching that orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnCard {
    pub card: Card,
    pub reversed: bool,
    pub orientation: String,
    pub meaning: String,
}

impl DrawnCard {
    fn new(card: Card, reversed: bool) -> Self {
        let meaning = if reversed {
            card.meaning_reversed.clone()
        } else {
            card.meaning_upright.clone()
        };
        let orientation = if reversed { "Reversed" } else { "Upright" };
        Self {
            card,
            reversed,
            orientation: orientation.to_string(),
            meaning,
        }
    }
}

/// Draw `count` distinct cards from the deck using the thread-local RNG.
pub fn draw_cards(deck: &Deck, count: usize, include_reversed: bool) -> Vec<DrawnCard> {
    draw_cards_with_rng(deck, count, include_reversed, &mut rand::thread_rng())
}

/// Draw `count` distinct cards with a caller-supplied RNG.
///
/// Requests for more cards than the deck holds are clamped to the deck size
/// rather than rejected.
pub fn draw_cards_with_rng<R: Rng>(
    deck: &Deck,
    count: usize,
    include_reversed: bool,
    rng: &mut R,
) -> Vec<DrawnCard> {
    let count = if count > deck.len() {
        tracing::warn!(
            requested = count,
            available = deck.len(),
            "Requested more cards than the deck holds, drawing the whole deck"
        );
        deck.len()
    } else {
        count
    };

    deck.cards()
        .choose_multiple(rng, count)
        .map(|card| {
            let reversed = include_reversed && rng.gen_bool(0.5);
            DrawnCard::new(card.clone(), reversed)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn draws_requested_number_of_distinct_cards() {
        let deck = Deck::golden_dawn();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = draw_cards_with_rng(&deck, 10, true, &mut rng);
        assert_eq!(drawn.len(), 10);

        let names: HashSet<&str> = drawn.iter().map(|d| d.card.name.as_str()).collect();
        assert_eq!(names.len(), 10, "draws must be without replacement");
    }

    #[test]
    fn respects_include_reversed_flag() {
        let deck = Deck::golden_dawn();
        let mut rng = StdRng::seed_from_u64(7);
        let drawn = draw_cards_with_rng(&deck, 78, false, &mut rng);
        assert!(drawn.iter().all(|d| !d.reversed));
        assert!(drawn.iter().all(|d| d.orientation == "Upright"));
    }

    #[test]
    fn meaning_tracks_orientation() {
        let deck = Deck::golden_dawn();
        let mut rng = StdRng::seed_from_u64(42);
        for drawn in draw_cards_with_rng(&deck, 78, true, &mut rng) {
            if drawn.reversed {
                assert_eq!(drawn.meaning, drawn.card.meaning_reversed);
                assert_eq!(drawn.orientation, "Reversed");
            } else {
                assert_eq!(drawn.meaning, drawn.card.meaning_upright);
            }
        }
    }

    #[test]
    fn oversized_request_is_clamped_to_deck_size() {
        let deck = Deck::golden_dawn();
        let mut rng = StdRng::seed_from_u64(1);
        let drawn = draw_cards_with_rng(&deck, 500, true, &mut rng);
        assert_eq!(drawn.len(), 78);
    }
}
