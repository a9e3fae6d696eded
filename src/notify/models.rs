use serde::{Deserialize, Serialize};

/// Title shown for every comment notification.
pub const NOTIFICATION_TITLE: &str = "Nouveau commentaire";

/// Upper bound on the notification body forwarded to the push
/// service. Comment bodies are unbounded free text; anything past
/// this is cut off.
pub const MAX_BODY_CHARS: usize = 1024;

/// A comment that was just created, as reported by the trigger.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub document_id: String,
    pub post_id: String,
    pub author_id: String,
    pub body: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

/// Application data attached to the notification. The mobile client
/// reads `screen` to decide where to navigate when the notification
/// is tapped.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct NotificationData {
    pub screen: String,
    #[serde(rename = "postId")]
    pub post_id: String,
}

/// One push message addressed to a single device token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PushMessage {
    pub token: String,
    pub notification: Notification,
    pub data: NotificationData,
}

impl PushMessage {
    pub fn new_comment(token: &str, post_id: &str, body: &str) -> Self {
        Self {
            token: token.to_string(),
            notification: Notification {
                title: NOTIFICATION_TITLE.to_string(),
                body: body.chars().take(MAX_BODY_CHARS).collect(),
            },
            data: NotificationData {
                screen: "comments".to_string(),
                post_id: post_id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_builds_the_expected_wire_message() {
        let message = PushMessage::new_comment("tok-abc", "p1", "Nice post!");
        assert_eq!(
            serde_json::to_value(&message).unwrap(),
            serde_json::json!({
                "token": "tok-abc",
                "notification": {
                    "title": "Nouveau commentaire",
                    "body": "Nice post!"
                },
                "data": {
                    "screen": "comments",
                    "postId": "p1"
                }
            })
        );
    }

    #[test]
    fn it_truncates_long_bodies() {
        let body = "a".repeat(MAX_BODY_CHARS + 100);
        let message = PushMessage::new_comment("tok-abc", "p1", &body);
        assert_eq!(message.notification.body.chars().count(), MAX_BODY_CHARS);
    }

    #[test]
    fn it_truncates_on_character_boundaries() {
        // Multi-byte characters must not be split mid-codepoint
        let body = "é".repeat(MAX_BODY_CHARS + 1);
        let message = PushMessage::new_comment("tok-abc", "p1", &body);
        assert_eq!(message.notification.body.chars().count(), MAX_BODY_CHARS);
        assert!(message.notification.body.chars().all(|c| c == 'é'));
    }
}
