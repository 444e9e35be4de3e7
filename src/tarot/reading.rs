//! Completed readings.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::draw::DrawnCard;

/// A completed, persistable tarot reading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub reading_id: String,
    pub spread_type: String,
    pub question: Option<String>,
    pub cards_drawn: Vec<DrawnCard>,
    pub interpretation: String,
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    pub fn new(
        spread_type: &str,
        question: Option<String>,
        cards_drawn: Vec<DrawnCard>,
        interpretation: String,
    ) -> Self {
        let now = Utc::now();
        Self {
            reading_id: new_reading_id(now, &mut rand::thread_rng()),
            spread_type: spread_type.to_string(),
            question,
            cards_drawn,
            interpretation,
            timestamp: now,
        }
    }
}

/// Reading ids look like `reading_20260829_143052_4821`: a UTC timestamp plus
/// a random 4-digit suffix to disambiguate readings within the same second.
fn new_reading_id<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    format!(
        "reading_{}_{}",
        now.format("%Y%m%d_%H%M%S"),
        rng.gen_range(1000..=9999)
    )
}
