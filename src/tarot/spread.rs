//! Tarot spread definitions.
//!
//! A spread is an ordered set of positions the drawn cards are laid into.
//! The registry holds the six spreads the service offers, keyed by the id
//! used in reading requests.

use serde::Serialize;
use std::collections::BTreeMap;

/// A named card layout with ordered position labels.
#[derive(Debug, Clone, Serialize)]
pub struct Spread {
    pub name: String,
    pub positions: Vec<String>,
    pub description: String,
    pub card_count: usize,
}

impl Spread {
    fn new(name: &str, positions: &[&str], description: &str) -> Self {
        Self {
            name: name.to_string(),
            positions: positions.iter().map(|p| p.to_string()).collect(),
            description: description.to_string(),
            card_count: positions.len(),
        }
    }

    /// Label for the card at `index`, falling back to a numbered position
    /// when a draw holds more cards than the spread defines.
    pub fn position_label(&self, index: usize) -> String {
        self.positions
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Position {}", index + 1))
    }
}

/// The spreads offered by the service, keyed by spread id.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct SpreadRegistry {
    spreads: BTreeMap<String, Spread>,
}

impl SpreadRegistry {
    /// Build the registry of the six Golden Dawn spreads.
    pub fn golden_dawn() -> Self {
        let mut spreads = BTreeMap::new();

        spreads.insert(
            "single_card".to_string(),
            Spread::new(
                "Single Card",
                &["Guidance"],
                "Simple single-card draw for quick guidance",
            ),
        );
        spreads.insert(
            "three_card".to_string(),
            Spread::new(
                "Past, Present, Future",
                &["Past/Foundation", "Present/Challenge", "Future/Outcome"],
                "Simple three-card spread for quick insight",
            ),
        );
        spreads.insert(
            "celtic_cross".to_string(),
            Spread::new(
                "Celtic Cross",
                &[
                    "Present Situation",
                    "Challenge/Cross",
                    "Distant Past/Foundation",
                    "Recent Past",
                    "Crown/Possible Outcome",
                    "Immediate Future",
                    "Your Approach",
                    "External Influences",
                    "Hopes and Fears",
                    "Final Outcome",
                ],
                "The most comprehensive spread, exploring all aspects of your situation",
            ),
        );
        spreads.insert(
            "tree_of_life".to_string(),
            Spread::new(
                "Tree of Life",
                &[
                    "Kether (Crown)",
                    "Chokmah (Wisdom)",
                    "Binah (Understanding)",
                    "Chesed (Mercy)",
                    "Geburah (Severity)",
                    "Tiphareth (Beauty)",
                    "Netzach (Victory)",
                    "Hod (Glory)",
                    "Yesod (Foundation)",
                    "Malkuth (Kingdom)",
                ],
                "Based on the Kabbalistic Tree of Life, providing deep spiritual insight",
            ),
        );
        spreads.insert(
            "golden_dawn".to_string(),
            Spread::new(
                "Golden Dawn Temple",
                &[
                    "Present Situation",
                    "Hidden Influences",
                    "Past Foundations",
                    "Future Possibilities",
                    "Higher Guidance",
                    "Practical Action",
                    "Inner Wisdom",
                    "External Forces",
                    "Final Outcome",
                ],
                "Sacred 9-card Golden Dawn spread using all available cards",
            ),
        );
        spreads.insert(
            "seven_pointed_star".to_string(),
            Spread::new(
                "Seven-Pointed Star",
                &[
                    "Self",
                    "Past",
                    "Future",
                    "Hidden Influences",
                    "External Forces",
                    "Hopes/Fears",
                    "Final Outcome",
                ],
                "Mystical 7-card spread for deep spiritual insight",
            ),
        );

        Self { spreads }
    }

    pub fn get(&self, id: &str) -> Option<&Spread> {
        self.spreads.get(id)
    }

    pub fn len(&self) -> usize {
        self.spreads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spreads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_offers_six_spreads() {
        let registry = SpreadRegistry::golden_dawn();
        assert_eq!(registry.len(), 6);
        for id in [
            "single_card",
            "three_card",
            "celtic_cross",
            "tree_of_life",
            "golden_dawn",
            "seven_pointed_star",
        ] {
            assert!(registry.get(id).is_some(), "missing spread {id}");
        }
    }

    #[test]
    fn card_count_matches_positions() {
        let registry = SpreadRegistry::golden_dawn();
        for id in [
            "single_card",
            "three_card",
            "celtic_cross",
            "tree_of_life",
            "golden_dawn",
            "seven_pointed_star",
        ] {
            let spread = registry.get(id).unwrap();
            assert_eq!(spread.card_count, spread.positions.len(), "spread {id}");
        }
    }

    #[test]
    fn position_label_falls_back_past_the_layout() {
        let registry = SpreadRegistry::golden_dawn();
        let spread = registry.get("single_card").unwrap();
        assert_eq!(spread.position_label(0), "Guidance");
        assert_eq!(spread.position_label(1), "Position 2");
    }

    #[test]
    fn unknown_spread_is_none() {
        let registry = SpreadRegistry::golden_dawn();
        assert!(registry.get("astral_projection").is_none());
    }
}
