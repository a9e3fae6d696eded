//! Router for the tokens API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use chrono::Utc;
use serde_json::Value;

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

// Register a device token so the user can receive push notifications.
// Replaces any token previously registered for the user.
async fn register_token(
    State(state): State<SharedState>,
    Json(request): Json<public::RegisterTokenRequest>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    {
        let db = state.read().expect("Unable to read shared state").db.clone();
        db.call(move |conn| {
            let mut stmt = conn.prepare(
                "REPLACE INTO device_token(user_id, fcm_token, updated_at) VALUES (?, ?, ?)",
            )?;
            stmt.execute(tokio_rusqlite::params![
                request.user_id,
                request.fcm_token,
                Utc::now().to_rfc3339(),
            ])?;
            Ok(())
        })
        .await?;
    }

    Ok(Json(serde_json::json!({ "success": true })))
}

/// Create the tokens router
pub fn router() -> Router<SharedState> {
    Router::new().route("/register", axum::routing::post(register_token))
}
