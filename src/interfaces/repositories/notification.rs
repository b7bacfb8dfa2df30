use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::notification::{NewNotification, Notification},
    errors::AppError,
    repositories::{sqlx_repo::SqlxNotificationRepo, violated_constraint, FOREIGN_KEY_VIOLATION},
};

const NOTIFICATION_COLUMNS: &str = "id, sender_id, recipient_id, message, has_read, sent_at, received_at";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn create_notification(&self, notification: &NewNotification) -> Result<Notification, AppError>;
    async fn get_notification(&self, id: &Uuid) -> Result<Option<Notification>, AppError>;
    async fn list_inbox(&self, recipient_id: &Uuid, unread_only: bool) -> Result<Vec<Notification>, AppError>;
    /// Flags the notification as read, stamping `received_at` the first time only.
    async fn mark_read(&self, id: &Uuid) -> Result<Notification, AppError>;
    async fn delete_notification(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxNotificationRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxNotificationRepo { pool }
    }
}

#[async_trait]
impl NotificationRepository for SqlxNotificationRepo {
    async fn create_notification(&self, notification: &NewNotification) -> Result<Notification, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            r#"
            INSERT INTO notifications (sender_id, recipient_id, message)
            VALUES ($1, $2, $3)
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(notification.sender_id)
        .bind(notification.recipient_id)
        .bind(&notification.message)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if violated_constraint(&e, FOREIGN_KEY_VIOLATION).is_some() {
                AppError::NotFound("Sender or recipient profile not found".to_string())
            } else {
                AppError::from(e)
            }
        })
    }

    async fn get_notification(&self, id: &Uuid) -> Result<Option<Notification>, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            "SELECT {NOTIFICATION_COLUMNS} FROM notifications WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::from)
    }

    async fn list_inbox(&self, recipient_id: &Uuid, unread_only: bool) -> Result<Vec<Notification>, AppError> {
        let notifications = sqlx::query_as::<_, Notification>(&format!(
            r#"
            SELECT {NOTIFICATION_COLUMNS}
            FROM notifications
            WHERE recipient_id = $1 AND (NOT $2 OR has_read = FALSE)
            ORDER BY sent_at DESC
            "#
        ))
        .bind(recipient_id)
        .bind(unread_only)
        .fetch_all(&self.pool)
        .await?;

        Ok(notifications)
    }

    async fn mark_read(&self, id: &Uuid) -> Result<Notification, AppError> {
        sqlx::query_as::<_, Notification>(&format!(
            r#"
            UPDATE notifications
            SET has_read = TRUE,
                received_at = COALESCE(received_at, NOW())
            WHERE id = $1
            RETURNING {NOTIFICATION_COLUMNS}
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    async fn delete_notification(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Notification not found".to_string()));
        }

        Ok(())
    }
}
