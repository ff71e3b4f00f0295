use axum::{extract::State, routing::get, Json, Router};
use roster_common::{crypto, types::Envelope};

use super::FeedState;
use crate::error::AppResult;

pub fn attendees_routes() -> Router<FeedState> {
    Router::new().route("/", get(get_attendees))
}

#[tracing::instrument(skip(state), fields(records = state.record_count()))]
async fn get_attendees(State(state): State<FeedState>) -> AppResult<Json<Envelope>> {
    let envelope = crypto::encrypt(&state.snapshot, &state.secret)?;

    if !state.response_delay.is_zero() {
        tokio::time::sleep(state.response_delay).await;
    }

    tracing::debug!(payload_len = envelope.payload.len(), "Serving encrypted snapshot");

    Ok(Json(envelope))
}
