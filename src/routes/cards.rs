//! Deck listing.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::state::AppState;

/// All 78 cards of the Golden Dawn deck.
#[instrument(name = "cards::list", skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "deck": "Golden Dawn Tarot",
        "cards": state.deck.cards(),
    }))
}
