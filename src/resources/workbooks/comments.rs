//! Workbook comments and comment replies.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Comment operations on a workbook, addressed by drive item id.
pub struct Comments {
    session: Arc<dyn GraphSession>,
}

impl Comments {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Comments in the workbook.
    pub async fn list(&self, item_id: &str) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "me/drive/items/{}/workbook/comments",
                item_id
            )))
            .await
    }

    /// A single comment, by id.
    pub async fn get(&self, item_id: &str, comment_id: &str) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "me/drive/items/{}/workbook/comments/{}",
                item_id, comment_id
            )))
            .await
    }

    /// Replies to a comment.
    pub async fn list_replies(&self, item_id: &str, comment_id: &str) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "me/drive/items/{}/workbook/comments/{}/replies",
                item_id, comment_id
            )))
            .await
    }

    /// Reply to a comment. `content_type` is `plain` or `mention`.
    pub async fn create_reply(
        &self,
        item_id: &str,
        comment_id: &str,
        content: &str,
        content_type: &str,
    ) -> Result<Value> {
        self.session
            .execute(
                GraphRequest::post(format!(
                    "me/drive/items/{}/workbook/comments/{}/replies",
                    item_id, comment_id
                ))
                .with_json(serde_json::json!({
                    "content": content,
                    "contentType": content_type,
                })),
            )
            .await
    }

    /// A single comment reply, by id.
    pub async fn get_reply(
        &self,
        item_id: &str,
        comment_id: &str,
        reply_id: &str,
    ) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "me/drive/items/{}/workbook/comments/{}/replies/{}",
                item_id, comment_id, reply_id
            )))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;
    use reqwest::Method;

    #[tokio::test]
    async fn test_comment_paths() {
        let recorder = RecordingSession::new();
        let comments = Comments::new(recorder.clone());

        comments.list("item1").await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/drive/items/item1/workbook/comments");

        comments.get_reply("item1", "c2", "r3").await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/comments/c2/replies/r3"
        );
    }

    #[tokio::test]
    async fn test_create_reply_body() {
        let recorder = RecordingSession::new();
        let comments = Comments::new(recorder.clone());

        comments
            .create_reply("item1", "c2", "Looks right to me.", "plain")
            .await
            .unwrap();
        let req = recorder.last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(
            req.endpoint,
            "me/drive/items/item1/workbook/comments/c2/replies"
        );
        assert_eq!(
            req.json.unwrap(),
            serde_json::json!({"content": "Looks right to me.", "contentType": "plain"})
        );
    }
}
