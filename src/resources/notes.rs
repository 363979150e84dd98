//! OneNote service: notebooks, sections, and pages.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Notebook operations for users, groups, and sites.
pub struct Notes {
    session: Arc<dyn GraphSession>,
}

impl Notes {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    async fn get(&self, endpoint: String) -> Result<Value> {
        self.session.execute(GraphRequest::get(endpoint)).await
    }

    /// The signed-in user's notebooks.
    pub async fn list_my_notebooks(&self) -> Result<Value> {
        self.get("me/onenote/notebooks".into()).await
    }

    /// Notebooks belonging to another user.
    pub async fn list_user_notebooks(&self, user_id: &str) -> Result<Value> {
        self.get(format!("users/{}/onenote/notebooks", user_id)).await
    }

    /// Notebooks belonging to a group.
    pub async fn list_group_notebooks(&self, group_id: &str) -> Result<Value> {
        self.get(format!("groups/{}/onenote/notebooks", group_id))
            .await
    }

    /// Notebooks belonging to a SharePoint site.
    pub async fn list_site_notebooks(&self, site_id: &str) -> Result<Value> {
        self.get(format!("sites/{}/onenote/notebooks", site_id)).await
    }

    /// One of the signed-in user's notebooks, by id.
    pub async fn get_my_notebook(&self, notebook_id: &str) -> Result<Value> {
        self.get(format!("me/onenote/notebooks/{}", notebook_id)).await
    }

    /// Another user's notebook, by id.
    pub async fn get_user_notebook(&self, user_id: &str, notebook_id: &str) -> Result<Value> {
        self.get(format!(
            "users/{}/onenote/notebooks/{}",
            user_id, notebook_id
        ))
        .await
    }

    /// A group's notebook, by id.
    pub async fn get_group_notebook(&self, group_id: &str, notebook_id: &str) -> Result<Value> {
        self.get(format!(
            "groups/{}/onenote/notebooks/{}",
            group_id, notebook_id
        ))
        .await
    }

    /// A site's notebook, by id.
    pub async fn get_site_notebook(&self, site_id: &str, notebook_id: &str) -> Result<Value> {
        self.get(format!(
            "sites/{}/onenote/notebooks/{}",
            site_id, notebook_id
        ))
        .await
    }

    /// Sections within one of the signed-in user's notebooks.
    pub async fn list_my_notebook_sections(&self, notebook_id: &str) -> Result<Value> {
        self.get(format!("me/onenote/notebooks/{}/sections", notebook_id))
            .await
    }

    /// Pages within one of the signed-in user's sections.
    pub async fn list_my_section_pages(&self, section_id: &str) -> Result<Value> {
        self.get(format!("me/onenote/sections/{}/pages", section_id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;

    #[tokio::test]
    async fn test_notebook_paths() {
        let recorder = RecordingSession::new();
        let notes = Notes::new(recorder.clone());

        notes.list_my_notebooks().await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/onenote/notebooks");

        notes.get_group_notebook("g1", "n2").await.unwrap();
        assert_eq!(recorder.last().endpoint, "groups/g1/onenote/notebooks/n2");

        notes.list_my_notebook_sections("n2").await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/onenote/notebooks/n2/sections");

        notes.list_my_section_pages("s3").await.unwrap();
        assert_eq!(recorder.last().endpoint, "me/onenote/sections/s3/pages");
    }
}
