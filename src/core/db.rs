//! Database connection and schema management
use anyhow::Result;
use tokio_rusqlite::Connection;

/// Open the sqlite database stored under `db_path`.
pub async fn async_db(db_path: &str) -> Result<Connection> {
    let conn = Connection::open(format!("{}/notifier.db3", db_path)).await?;
    Ok(conn)
}

/// Create the schema. Safe to run repeatedly.
pub fn initialize_db(conn: &rusqlite::Connection) -> Result<()> {
    conn.execute_batch(
        r"
        CREATE TABLE IF NOT EXISTS device_token (
          user_id TEXT PRIMARY KEY,
          fcm_token TEXT NOT NULL,
          updated_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS notification_delivery (
          event_id TEXT PRIMARY KEY,
          post_id TEXT NOT NULL,
          recipient TEXT NOT NULL,
          outcome TEXT NOT NULL,
          created_at TEXT NOT NULL
        );
        ",
    )?;
    Ok(())
}

/// Migrations are additive so this is the same as initializing from
/// scratch for now.
pub fn migrate_db(conn: &rusqlite::Connection) -> Result<()> {
    initialize_db(conn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_creates_the_schema() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        initialize_db(&conn).unwrap();

        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name IN ('device_token', 'notification_delivery')",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(count, 2);
    }

    #[test]
    fn it_is_idempotent() {
        let conn = rusqlite::Connection::open_in_memory().unwrap();
        initialize_db(&conn).unwrap();
        initialize_db(&conn).unwrap();
        migrate_db(&conn).unwrap();
    }
}
