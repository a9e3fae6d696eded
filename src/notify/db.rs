//! Database queries for device tokens and the delivery ledger
use anyhow::{Error, Result};
use chrono::{DateTime, Utc};
use tokio_rusqlite::Connection;

/// Look up the registered device token for a user. Returns `None`
/// when the user never registered a token.
pub async fn find_device_token(db: &Connection, user_id: &str) -> Result<Option<String>, Error> {
    let user_id = user_id.to_string();
    let token = db
        .call(move |conn| {
            let mut stmt = conn.prepare("SELECT fcm_token FROM device_token WHERE user_id = ?")?;
            let token = stmt
                .query_map([user_id], |i| i.get::<_, String>(0))?
                .filter_map(Result::ok)
                .next();
            Ok(token)
        })
        .await?;
    Ok(token)
}

/// Outcome previously recorded for an event id, if any. A `Some`
/// means the event was already handled and must not be sent again.
pub async fn find_delivery_outcome(db: &Connection, event_id: &str) -> Result<Option<String>> {
    let event_id = event_id.to_string();
    let outcome = db
        .call(move |conn| {
            let mut stmt =
                conn.prepare("SELECT outcome FROM notification_delivery WHERE event_id = ?")?;
            let outcome = stmt
                .query_map([event_id], |i| i.get::<_, String>(0))?
                .filter_map(Result::ok)
                .next();
            Ok(outcome)
        })
        .await?;
    Ok(outcome)
}

pub async fn record_delivery(
    db: &Connection,
    event_id: &str,
    post_id: &str,
    recipient: &str,
    outcome: &str,
) -> Result<()> {
    let event_id = event_id.to_string();
    let post_id = post_id.to_string();
    let recipient = recipient.to_string();
    let outcome = outcome.to_string();
    db.call(move |conn| {
        let mut stmt = conn.prepare(
            "INSERT OR IGNORE INTO notification_delivery(event_id, post_id, recipient, outcome, created_at) VALUES (?, ?, ?, ?, ?)",
        )?;
        stmt.execute(tokio_rusqlite::params![
            event_id,
            post_id,
            recipient,
            outcome,
            Utc::now().to_rfc3339(),
        ])?;
        Ok(())
    })
    .await?;
    Ok(())
}

/// Delete ledger entries older than the cutoff. Returns the number of
/// rows removed.
pub async fn prune_deliveries_before(db: &Connection, cutoff: DateTime<Utc>) -> Result<usize> {
    let cutoff = cutoff.to_rfc3339();
    let pruned = db
        .call(move |conn| {
            let n = conn.execute(
                "DELETE FROM notification_delivery WHERE created_at < ?",
                [cutoff],
            )?;
            Ok(n)
        })
        .await?;
    Ok(pruned)
}
