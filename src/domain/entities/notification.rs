use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use super::validation::validate_not_blank;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Notification {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub recipient_id: Uuid,
    pub message: String,
    pub has_read: bool,
    pub sent_at: DateTime<Utc>,
    pub received_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewNotification {
    pub sender_id: Uuid,

    pub recipient_id: Uuid,

    #[validate(
        length(min = 1, max = 300, message = "Message must be between 1 and 300 characters"),
        custom(function = "validate_not_blank")
    )]
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct InboxQuery {
    #[serde(default)]
    pub unread_only: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_length_is_bounded() {
        let mut request = NewNotification {
            sender_id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            message: "You have been selected".into(),
        };
        assert!(request.validate().is_ok());

        request.message = "m".repeat(301);
        assert!(request.validate().is_err());
    }
}
