//! Tarot domain: the Golden Dawn deck, spreads, drawing, and interpretation.

pub mod deck;
pub mod draw;
pub mod interpret;
pub mod reading;
pub mod spread;

pub use deck::{Card, Deck};
pub use draw::{draw_cards, DrawnCard};
pub use reading::Reading;
pub use spread::{Spread, SpreadRegistry};
