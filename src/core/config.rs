use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub db_path: String,
    pub fcm_api_url: String,
    pub fcm_project_id: String,
    pub fcm_api_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let storage_path = env::var("NOTIFIER_STORAGE_PATH").unwrap_or("./".to_string());
        let db_path = format!("{}/db", storage_path);
        let fcm_api_url = env::var("NOTIFIER_FCM_API_URL")
            .unwrap_or_else(|_| "https://fcm.googleapis.com".to_string());
        let fcm_project_id =
            env::var("NOTIFIER_FCM_PROJECT_ID").expect("Missing env var NOTIFIER_FCM_PROJECT_ID");
        let fcm_api_token =
            env::var("NOTIFIER_FCM_API_TOKEN").expect("Missing env var NOTIFIER_FCM_API_TOKEN");

        Self {
            db_path,
            fcm_api_url,
            fcm_project_id,
            fcm_api_token,
        }
    }
}
