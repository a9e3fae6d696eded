//! Test utilities for integration tests
use std::env;
use std::fs;
use std::sync::{Arc, RwLock};
use std::time::SystemTime;

use axum::{Router, body::Body};

use notifier::api::AppState;
use notifier::api::app;
use notifier::core::AppConfig;
use notifier::core::db::async_db;
use notifier::core::db::initialize_db;

/// Creates a test application router with a temporary database and
/// the push delivery service pointed at `fcm_api_url` so tests can
/// stand in a fake with `mockito`.
pub async fn test_app(fcm_api_url: &str) -> Router {
    // Create a unique directory for the test with a randomly
    // generated name using a timestamp to avoid collisions and
    // vulnerabilities
    let temp_dir = env::temp_dir();
    let ts = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_nanos()
        .to_string();
    let dir = temp_dir.join(ts);
    fs::create_dir_all(&dir).expect("Failed to create base directory");

    let db_path = dir.join("db");
    fs::create_dir_all(&db_path).expect("Failed to create db directory");
    let db_path_str = db_path.to_str().unwrap();

    let db = async_db(db_path_str)
        .await
        .expect("Failed to connect to async db");
    db.call(|conn| {
        initialize_db(conn).expect("Failed to migrate db");
        Ok(())
    })
    .await
    .unwrap();

    let app_config = AppConfig {
        db_path: db_path_str.to_string(),
        fcm_api_url: fcm_api_url.to_string(),
        fcm_project_id: String::from("test-project"),
        fcm_api_token: String::from("test-api-token"),
    };
    let app_state = AppState::new(db, app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not valid utf-8")
}
