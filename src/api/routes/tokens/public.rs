//! Public types for the tokens API
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterTokenRequest {
    pub user_id: String,
    pub fcm_token: String,
}
