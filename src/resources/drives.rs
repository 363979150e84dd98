//! Drives service: OneDrive and SharePoint document libraries.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Drive-level operations for the signed-in user, other users, groups,
/// and sites.
pub struct Drives {
    session: Arc<dyn GraphSession>,
}

impl Drives {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    async fn get(&self, endpoint: String) -> Result<Value> {
        self.session.execute(GraphRequest::get(endpoint)).await
    }

    /// Root folder of the signed-in user's drive.
    pub async fn get_root_drive(&self) -> Result<Value> {
        self.get("drive/root".into()).await
    }

    /// Children of the root folder.
    pub async fn get_root_drive_children(&self) -> Result<Value> {
        self.get("drive/root/children".into()).await
    }

    /// Change tracking (delta) for the root folder.
    pub async fn get_root_drive_delta(&self) -> Result<Value> {
        self.get("drive/root/delta".into()).await
    }

    /// Items the signed-in user follows.
    pub async fn get_root_drive_followed(&self) -> Result<Value> {
        self.get("drive/root/followed".into()).await
    }

    /// Recently used items.
    pub async fn get_recent_files(&self) -> Result<Value> {
        self.get("me/drive/recent".into()).await
    }

    /// Items shared with the signed-in user.
    pub async fn get_shared_files(&self) -> Result<Value> {
        self.get("me/drive/sharedWithMe".into()).await
    }

    /// A well-known special folder (documents, photos, cameraroll, ...).
    pub async fn get_special_folder_by_name(&self, folder_name: &str) -> Result<Value> {
        self.get(format!("me/drive/special/{}", folder_name)).await
    }

    /// Children of a special folder.
    pub async fn get_special_folder_children_by_name(&self, folder_name: &str) -> Result<Value> {
        self.get(format!("me/drive/special/{}/children", folder_name))
            .await
    }

    /// A drive by its resource id.
    pub async fn get_drive_by_id(&self, drive_id: &str) -> Result<Value> {
        self.get(format!("drives/{}", drive_id)).await
    }

    /// The signed-in user's default drive.
    pub async fn get_my_drive(&self) -> Result<Value> {
        self.get("drive/me".into()).await
    }

    /// Children of an item on the signed-in user's drive.
    pub async fn get_my_drive_children(&self, item_id: &str) -> Result<Value> {
        self.get(format!("me/drive/items/{}/children", item_id)).await
    }

    /// All drives available to the signed-in user.
    pub async fn get_my_drives(&self) -> Result<Value> {
        self.get("drives/me".into()).await
    }

    /// Another user's default drive.
    pub async fn get_user_drive(&self, user_id: &str) -> Result<Value> {
        self.get(format!("users/{}/drive", user_id)).await
    }

    /// Children of an item on another user's drive.
    pub async fn get_user_drive_children(&self, user_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("users/{}/drive/items/{}/children", user_id, item_id))
            .await
    }

    /// All drives of another user.
    pub async fn get_user_drives(&self, user_id: &str) -> Result<Value> {
        self.get(format!("users/{}/drives", user_id)).await
    }

    /// A group's default document library.
    pub async fn get_group_drive(&self, group_id: &str) -> Result<Value> {
        self.get(format!("groups/{}/drive", group_id)).await
    }

    /// Children of an item in a group's document library.
    pub async fn get_group_drive_children(&self, group_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!(
            "groups/{}/drive/items/{}/children",
            group_id, item_id
        ))
        .await
    }

    /// All drives of a group.
    pub async fn get_group_drives(&self, group_id: &str) -> Result<Value> {
        self.get(format!("groups/{}/drives", group_id)).await
    }

    /// A site's default document library.
    pub async fn get_site_drive(&self, site_id: &str) -> Result<Value> {
        self.get(format!("sites/{}/drive", site_id)).await
    }

    /// Children of an item in a site's document library.
    pub async fn get_site_drive_children(&self, site_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("sites/{}/drive/items/{}/children", site_id, item_id))
            .await
    }

    /// All drives of a site.
    pub async fn get_site_drives(&self, site_id: &str) -> Result<Value> {
        self.get(format!("sites/{}/drives", site_id)).await
    }
}
