//! Mail service: Outlook messages, rules, and classification overrides.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Mailbox operations for the signed-in user and, with application
/// permissions, any user in the tenant.
pub struct Mail {
    session: Arc<dyn GraphSession>,
}

impl Mail {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    async fn execute(&self, request: GraphRequest) -> Result<Value> {
        self.session.execute(request).await
    }

    /// Messages in the signed-in user's mailbox, including the Deleted
    /// Items and Clutter folders.
    pub async fn list_my_messages(&self) -> Result<Value> {
        self.execute(GraphRequest::get("me/messages")).await
    }

    /// Messages in the specified user's mailbox.
    pub async fn list_user_messages(&self, user_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!("users/{}/messages", user_id)))
            .await
    }

    /// Create a draft of a new message in the signed-in user's Drafts
    /// folder.
    pub async fn create_my_message(&self, message: Value) -> Result<Value> {
        self.execute(GraphRequest::post("me/messages").with_json(message))
            .await
    }

    /// Create a draft of a new message for the specified user.
    pub async fn create_user_message(&self, user_id: &str, message: Value) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages", user_id)).with_json(message),
        )
        .await
    }

    /// Properties and relationships of one of the signed-in user's
    /// messages.
    pub async fn get_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!("me/messages/{}", message_id)))
            .await
    }

    /// Properties and relationships of a message in the specified
    /// user's mailbox.
    pub async fn get_user_message(&self, user_id: &str, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "users/{}/messages/{}",
            user_id, message_id
        )))
        .await
    }

    /// Update writable properties of a message for the signed-in user.
    pub async fn update_my_message(&self, message_id: &str, message: Value) -> Result<Value> {
        self.execute(
            GraphRequest::patch(format!("me/messages/{}", message_id)).with_json(message),
        )
        .await
    }

    /// Update writable properties of a message for the specified user.
    pub async fn update_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        message: Value,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::patch(format!("users/{}/messages/{}", user_id, message_id))
                .with_json(message),
        )
        .await
    }

    /// Delete a message from the signed-in user's mailbox.
    pub async fn delete_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::delete(format!("me/messages/{}", message_id)).expect_empty_body(),
        )
        .await
    }

    /// Delete a message from the specified user's mailbox.
    pub async fn delete_user_message(&self, user_id: &str, message_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::delete(format!("users/{}/messages/{}", user_id, message_id))
                .expect_empty_body(),
        )
        .await
    }

    /// Send an existing draft message. The message lands in the Sent
    /// Items folder.
    pub async fn send_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/send", message_id)).expect_empty_body(),
        )
        .await
    }

    /// Send an existing draft message on behalf of the specified user.
    pub async fn send_user_message(&self, user_id: &str, message_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages/{}/send", user_id, message_id))
                .expect_empty_body(),
        )
        .await
    }

    /// Copy a message to another folder in the signed-in user's
    /// mailbox.
    pub async fn copy_my_message(&self, message_id: &str, destination_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/copy", message_id))
                .with_json(serde_json::json!({ "destinationId": destination_id })),
        )
        .await
    }

    /// Copy a message to another folder in the specified user's
    /// mailbox.
    pub async fn copy_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        destination_id: &str,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages/{}/copy", user_id, message_id))
                .with_json(serde_json::json!({ "destinationId": destination_id })),
        )
        .await
    }

    /// Move a message to another folder in the signed-in user's
    /// mailbox. The original is removed.
    pub async fn move_my_message(&self, message_id: &str, destination_id: &str) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/move", message_id))
                .with_json(serde_json::json!({ "destinationId": destination_id })),
        )
        .await
    }

    /// Move a message to another folder in the specified user's
    /// mailbox.
    pub async fn move_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        destination_id: &str,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages/{}/move", user_id, message_id))
                .with_json(serde_json::json!({ "destinationId": destination_id })),
        )
        .await
    }

    /// Create a reply draft to a message for the signed-in user.
    pub async fn create_reply_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "me/messages/{}/createReply",
            message_id
        )))
        .await
    }

    /// Create a reply draft to a message for the specified user.
    pub async fn create_reply_user_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "users/{}/messages/{}/createReply",
            user_id, message_id
        )))
        .await
    }

    /// Reply to the sender of a message in one call. The reply lands
    /// in the Sent Items folder.
    pub async fn reply_to_my_message(&self, message_id: &str, message: Value) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/reply", message_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Reply to the sender of a message in the specified user's
    /// mailbox.
    pub async fn reply_to_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        message: Value,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages/{}/reply", user_id, message_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Create a reply-all draft to a message for the signed-in user.
    pub async fn create_reply_all_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "me/messages/{}/createReplyAll",
            message_id
        )))
        .await
    }

    /// Create a reply-all draft to a message for the specified user.
    pub async fn create_reply_all_user_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "users/{}/messages/{}/createReplyAll",
            user_id, message_id
        )))
        .await
    }

    /// Reply to the sender and all recipients of a message in one
    /// call.
    pub async fn reply_all_my_message(&self, message_id: &str, message: Value) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/replyAll", message_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Reply to the sender and all recipients of a message in the
    /// specified user's mailbox.
    pub async fn reply_all_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        message: Value,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!(
                "users/{}/messages/{}/replyAll",
                user_id, message_id
            ))
            .with_json(message)
            .expect_empty_body(),
        )
        .await
    }

    /// Create a forward draft of a message for the signed-in user.
    pub async fn create_forward_my_message(&self, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "me/messages/{}/createForward",
            message_id
        )))
        .await
    }

    /// Create a forward draft of a message for the specified user.
    pub async fn create_forward_user_message(
        &self,
        user_id: &str,
        message_id: &str,
    ) -> Result<Value> {
        self.execute(GraphRequest::post(format!(
            "users/{}/messages/{}/createForward",
            user_id, message_id
        )))
        .await
    }

    /// Forward a message in one call. The forwarded copy lands in the
    /// Sent Items folder.
    pub async fn forward_my_message(&self, message_id: &str, message: Value) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("me/messages/{}/forward", message_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Forward a message from the specified user's mailbox.
    pub async fn forward_user_message(
        &self,
        user_id: &str,
        message_id: &str,
        message: Value,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/messages/{}/forward", user_id, message_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Send the message specified in the request body for the
    /// signed-in user. `save_to_sent_items` controls whether a copy is
    /// kept in Sent Items.
    pub async fn send_my_mail(
        &self,
        mut message: Value,
        save_to_sent_items: bool,
    ) -> Result<Value> {
        if let Some(body) = message.as_object_mut() {
            body.insert("saveToSentItems".into(), Value::Bool(save_to_sent_items));
        }
        self.execute(
            GraphRequest::post("me/sendMail")
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Send the message specified in the request body on behalf of the
    /// specified user.
    pub async fn send_user_mail(
        &self,
        user_id: &str,
        mut message: Value,
        save_to_sent_items: bool,
    ) -> Result<Value> {
        if let Some(body) = message.as_object_mut() {
            body.insert("saveToSentItems".into(), Value::Bool(save_to_sent_items));
        }
        self.execute(
            GraphRequest::post(format!("users/{}/sendMail", user_id))
                .with_json(message)
                .expect_empty_body(),
        )
        .await
    }

    /// Attachments on one of the signed-in user's messages.
    pub async fn list_my_attachments(&self, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "me/messages/{}/attachments",
            message_id
        )))
        .await
    }

    /// Attachments on a message in the specified user's mailbox.
    pub async fn list_user_attachments(&self, user_id: &str, message_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "users/{}/messages/{}/attachments",
            user_id, message_id
        )))
        .await
    }

    /// The `messageRule` objects defined for the signed-in user's
    /// Inbox.
    pub async fn list_my_rules(&self) -> Result<Value> {
        self.execute(GraphRequest::get("me/mailFolders/inbox/messageRules"))
            .await
    }

    /// The `messageRule` objects defined for the specified user's
    /// Inbox.
    pub async fn list_rules(&self, user_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "users/{}/mailFolders/inbox/messageRules",
            user_id
        )))
        .await
    }

    /// Create an Inbox rule from a set of conditions and actions for
    /// the signed-in user.
    pub async fn create_my_message_rule(&self, rule: Value) -> Result<Value> {
        self.execute(GraphRequest::post("me/mailFolders/inbox/messageRules").with_json(rule))
            .await
    }

    /// Create an Inbox rule for the specified user.
    pub async fn create_message_rule(&self, user_id: &str, rule: Value) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!(
                "users/{}/mailFolders/inbox/messageRules",
                user_id
            ))
            .with_json(rule),
        )
        .await
    }

    /// Focused Inbox overrides the signed-in user has set up for
    /// specific senders.
    pub async fn list_my_overrides(&self) -> Result<Value> {
        self.execute(GraphRequest::get("me/inferenceClassification/overrides"))
            .await
    }

    /// Focused Inbox overrides for the specified user.
    pub async fn list_overrides(&self, user_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "users/{}/inferenceClassification/overrides",
            user_id
        )))
        .await
    }
}
