use validator::Validate;

use crate::entities::notification::{InboxQuery, NewNotification, Notification};
use crate::errors::AppError;
use crate::repositories::notification::NotificationRepository;
use crate::utils::valid_uuid::valid_uuid;

pub struct NotificationHandler<R>
where
    R: NotificationRepository,
{
    pub notification_repo: R,
}

impl<R> NotificationHandler<R>
where
    R: NotificationRepository,
{
    pub fn new(notification_repo: R) -> Self {
        NotificationHandler { notification_repo }
    }

    pub async fn send(&self, request: NewNotification) -> Result<Notification, AppError> {
        request.validate()?;

        let notification = self.notification_repo.create_notification(&request).await?;
        tracing::info!(
            notification_id = %notification.id,
            sender_id = %notification.sender_id,
            recipient_id = %notification.recipient_id,
            "Notification sent"
        );

        Ok(notification)
    }

    pub async fn get_notification(&self, id: &str) -> Result<Notification, AppError> {
        let valid_id = valid_uuid(id)?;
        self.notification_repo.get_notification(&valid_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Notification not found".to_string()))
    }

    pub async fn inbox(&self, recipient_id: &str, query: InboxQuery) -> Result<Vec<Notification>, AppError> {
        let recipient_id = valid_uuid(recipient_id)?;
        self.notification_repo.list_inbox(&recipient_id, query.unread_only).await
    }

    pub async fn mark_read(&self, id: &str) -> Result<Notification, AppError> {
        let valid_id = valid_uuid(id)?;
        self.notification_repo.mark_read(&valid_id).await
    }

    pub async fn delete_notification(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.notification_repo.delete_notification(&valid_id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::{always, eq};
    use uuid::Uuid;

    use super::*;
    use crate::repositories::notification::MockNotificationRepository;

    #[tokio::test]
    async fn blank_messages_are_not_sent() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_create_notification().never();

        let handler = NotificationHandler::new(repo);
        let request = NewNotification {
            sender_id: Uuid::new_v4(),
            recipient_id: Uuid::new_v4(),
            message: "   ".into(),
        };
        let err = handler.send(request).await.unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));
    }

    #[tokio::test]
    async fn inbox_forwards_unread_filter() {
        let recipient = Uuid::new_v4();
        let mut repo = MockNotificationRepository::new();
        repo.expect_list_inbox()
            .with(eq(recipient), eq(true))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let handler = NotificationHandler::new(repo);
        let inbox = handler
            .inbox(&recipient.to_string(), InboxQuery { unread_only: true })
            .await
            .unwrap();
        assert!(inbox.is_empty());
    }

    #[tokio::test]
    async fn mark_read_on_unknown_notification_is_not_found() {
        let mut repo = MockNotificationRepository::new();
        repo.expect_mark_read()
            .with(always())
            .returning(|_| Err(AppError::NotFound("Notification not found".into())));

        let handler = NotificationHandler::new(repo);
        let err = handler.mark_read(&Uuid::new_v4().to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
