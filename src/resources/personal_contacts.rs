//! Personal contacts service: Outlook contacts and contact folders.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Contact and contact-folder operations.
pub struct PersonalContacts {
    session: Arc<dyn GraphSession>,
}

impl PersonalContacts {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    async fn execute(&self, request: GraphRequest) -> Result<Value> {
        self.session.execute(request).await
    }

    /// All contacts in the signed-in user's mailbox.
    pub async fn list_my_contacts(&self) -> Result<Value> {
        self.execute(GraphRequest::get("me/contacts")).await
    }

    /// A single contact from the signed-in user's mailbox.
    pub async fn get_my_contact_by_id(&self, contact_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!("me/contacts/{}", contact_id)))
            .await
    }

    /// All contact folders in the signed-in user's mailbox.
    pub async fn list_my_contact_folders(&self) -> Result<Value> {
        self.execute(GraphRequest::get("me/contactFolders")).await
    }

    /// A contact folder from the signed-in user's mailbox.
    pub async fn get_my_contact_folder_by_id(&self, folder_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!("me/contactFolders/{}", folder_id)))
            .await
    }

    /// A contact folder from the specified user's mailbox.
    pub async fn get_contact_folder_by_id(&self, user_id: &str, folder_id: &str) -> Result<Value> {
        self.execute(GraphRequest::get(format!(
            "users/{}/contactFolders/{}",
            user_id, folder_id
        )))
        .await
    }

    /// Create a contact folder in the signed-in user's mailbox.
    pub async fn create_my_contact_folder(&self, folder_resource: Value) -> Result<Value> {
        self.execute(GraphRequest::post("me/contactFolders").with_json(folder_resource))
            .await
    }

    /// Create a contact folder in the specified user's mailbox.
    pub async fn create_user_contact_folder(
        &self,
        user_id: &str,
        folder_resource: Value,
    ) -> Result<Value> {
        self.execute(
            GraphRequest::post(format!("users/{}/contactFolders", user_id))
                .with_json(folder_resource),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;
    use reqwest::Method;

    #[tokio::test]
    async fn test_contact_paths() {
        let recorder = RecordingSession::new();
        let contacts = PersonalContacts::new(recorder.clone());

        contacts.list_my_contacts().await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/contacts");

        contacts.get_my_contact_by_id("c1").await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/contacts/c1");

        contacts.get_contact_folder_by_id("u1", "f2").await.unwrap();
        assert_eq!(recorder.last().endpoint, "users/u1/contactFolders/f2");

        contacts
            .create_user_contact_folder("u1", serde_json::json!({"displayName": "Vendors"}))
            .await
            .unwrap();
        let req = recorder.last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.endpoint, "users/u1/contactFolders");
    }
}
