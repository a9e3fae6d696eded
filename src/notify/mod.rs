pub mod db;
pub mod models;
pub use db::*;
pub use models::*;

use std::time::Duration;

use anyhow::{Error, Result, anyhow};
use serde::Serialize;
use tokio_rusqlite::Connection;

use crate::core::AppConfig;

/// How a comment-created event was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// One push message was handed to the delivery service
    Sent,
    /// The event id was already handled; nothing was sent
    Duplicate,
    /// The author has no usable device token; nothing was sent
    NoToken,
}

/// FCM HTTP v1 request envelope
#[derive(Serialize)]
struct SendRequest<'a> {
    message: &'a PushMessage,
}

/// Submit one push message to the delivery service. Non-2xx responses
/// are errors carrying the status and response body.
pub async fn send_push_notification(
    api_url: &str,
    api_token: &str,
    project_id: &str,
    message: &PushMessage,
) -> Result<(), Error> {
    let url = format!(
        "{}/v1/projects/{}/messages:send",
        api_url.trim_end_matches('/'),
        project_id
    );
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_token)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(30))
        .json(&SendRequest { message })
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Push delivery failed with status {}: {}",
            status,
            body
        ));
    }

    Ok(())
}

/// Handle one comment-created event: skip events already in the
/// ledger, resolve the author's device token, send the push message,
/// and record the outcome. Delivery failures propagate without a
/// ledger entry so a redelivered event can be retried.
pub async fn dispatch_comment_notification(
    db: &Connection,
    config: &AppConfig,
    comment: &NewComment,
) -> Result<DispatchOutcome> {
    if let Some(outcome) = find_delivery_outcome(db, &comment.document_id).await? {
        tracing::info!(
            "Skipping redelivered event {} (already {})",
            comment.document_id,
            outcome
        );
        return Ok(DispatchOutcome::Duplicate);
    }

    let token = find_device_token(db, &comment.author_id).await?;
    let Some(token) = token.filter(|t| !t.is_empty()) else {
        tracing::warn!(
            "No device token for user {}, skipping notification for event {}",
            comment.author_id,
            comment.document_id
        );
        record_delivery(
            db,
            &comment.document_id,
            &comment.post_id,
            &comment.author_id,
            "no_token",
        )
        .await?;
        return Ok(DispatchOutcome::NoToken);
    };

    let message = PushMessage::new_comment(&token, &comment.post_id, &comment.body);
    send_push_notification(
        &config.fcm_api_url,
        &config.fcm_api_token,
        &config.fcm_project_id,
        &message,
    )
    .await?;

    record_delivery(
        db,
        &comment.document_id,
        &comment.post_id,
        &comment.author_id,
        "sent",
    )
    .await?;
    tracing::info!(
        "Sent comment notification for event {} to user {}",
        comment.document_id,
        comment.author_id
    );

    Ok(DispatchOutcome::Sent)
}
