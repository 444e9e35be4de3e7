//! Creating and retrieving readings.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;
use crate::tarot::{draw, interpret, Reading};

/// Request body for `POST /reading`.
#[derive(Debug, Deserialize)]
pub struct ReadingRequest {
    pub question: Option<String>,
    #[serde(default = "ReadingRequest::default_spread_type")]
    pub spread_type: String,
    #[serde(default = "ReadingRequest::default_include_reversed")]
    pub include_reversed: bool,
}

impl ReadingRequest {
    fn default_spread_type() -> String {
        "three_card".to_string()
    }

    fn default_include_reversed() -> bool {
        true
    }
}

/// Create a new tarot reading: draw, interpret, persist.
#[instrument(name = "reading::create", skip(state, request), fields(spread = %request.spread_type))]
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<ReadingRequest>,
) -> Result<Json<Value>, AppError> {
    let spread = state
        .spreads
        .get(&request.spread_type)
        .ok_or_else(|| AppError::SpreadNotFound(request.spread_type.clone()))?;

    let cards = draw::draw_cards(&state.deck, spread.card_count, request.include_reversed);
    let interpretation = interpret::interpret(spread, &cards, request.question.as_deref());

    let reading = Reading::new(&request.spread_type, request.question, cards, interpretation);
    state.store.save(&reading).await?;

    let message = format!("Reading completed successfully: {}", reading.reading_id);
    Ok(Json(json!({
        "success": true,
        "reading": reading,
        "message": message,
    })))
}

/// Retrieve a previously saved reading.
#[instrument(name = "reading::view", skip(state))]
pub async fn view(
    State(state): State<AppState>,
    Path(reading_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let reading = state.store.load(&reading_id).await?;
    Ok(Json(json!({ "reading": reading })))
}
