//! Router for the events API

use std::sync::{Arc, RwLock};

use axum::{Json, Router, extract::State};
use serde_json::Value;

use super::public;
use crate::api::state::AppState;
use crate::notify::{NewComment, dispatch_comment_notification};

type SharedState = Arc<RwLock<AppState>>;

/// Handle a comment-created trigger by notifying the post author
async fn comment_created(
    State(state): State<SharedState>,
    Json(event): Json<public::CommentCreatedEvent>,
) -> Result<Json<Value>, crate::api::public::ApiError> {
    let (db, config) = {
        let state = state.read().expect("Unable to read shared state");
        (state.db.clone(), state.config.clone())
    };

    let comment = NewComment {
        document_id: event.document_id,
        post_id: event.post_id,
        author_id: event.author_id,
        body: event.body,
    };
    let outcome = dispatch_comment_notification(&db, &config, &comment).await?;

    Ok(Json(serde_json::json!({ "outcome": outcome })))
}

/// Create the events router
pub fn router() -> Router<SharedState> {
    Router::new().route("/comment-created", axum::routing::post(comment_created))
}
