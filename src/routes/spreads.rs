//! Spread listing.

use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::instrument;

use crate::state::AppState;

/// All available spreads, keyed by spread id.
#[instrument(name = "spreads::list", skip(state))]
pub async fn list(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "spreads": &*state.spreads }))
}
