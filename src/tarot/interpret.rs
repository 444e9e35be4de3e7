//! Reading interpretation.
//!
//! Generates a position-by-position interpretation for a completed draw:
//! one section per card (position, name, orientation, meaning, Golden Dawn
//! correspondence) followed by a closing paragraph.

use std::fmt::Write;

use super::draw::DrawnCard;
use super::spread::Spread;

const CLOSING: &str = "This reading suggests a journey through the archetypes and energies \
represented by these sacred symbols. Consider how each card's energy applies to your current \
situation and the guidance it offers for your path forward.";

/// Render the interpretation text for a draw laid into the given spread.
pub fn interpret(spread: &Spread, cards: &[DrawnCard], question: Option<&str>) -> String {
    let mut text = format!(
        "Reading for: {}\n",
        question.unwrap_or("General guidance")
    );

    for (i, drawn) in cards.iter().enumerate() {
        let _ = write!(
            text,
            "\n{}: {} ({})\n{}\nGolden Dawn: {}\n",
            spread.position_label(i),
            drawn.card.name,
            drawn.orientation,
            drawn.meaning,
            drawn.card.golden_dawn_correspondence,
        );
    }

    text.push('\n');
    text.push_str(CLOSING);
    text
}
