//! DriveItems service: files and folders addressed by id or path.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Item-level drive operations.
pub struct DriveItems {
    session: Arc<dyn GraphSession>,
}

impl DriveItems {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    async fn get(&self, endpoint: String) -> Result<Value> {
        self.session.execute(GraphRequest::get(endpoint)).await
    }

    /// An item on a specific drive, by id.
    pub async fn get_drive_item(&self, drive_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("drives/{}/items/{}", drive_id, item_id)).await
    }

    /// An item on a specific drive, by path relative to the root.
    pub async fn get_drive_item_by_path(&self, drive_id: &str, item_path: &str) -> Result<Value> {
        self.get(format!("drives/{}/root:/{}", drive_id, item_path)).await
    }

    /// An item in a group's document library, by id.
    pub async fn get_group_drive_item(&self, group_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("groups/{}/drive/items/{}", group_id, item_id))
            .await
    }

    /// An item in a group's document library, by path.
    pub async fn get_group_drive_item_by_path(
        &self,
        group_id: &str,
        item_path: &str,
    ) -> Result<Value> {
        self.get(format!("groups/{}/drive/root:/{}", group_id, item_path))
            .await
    }

    /// An item on the signed-in user's drive, by id.
    pub async fn get_my_drive_item(&self, item_id: &str) -> Result<Value> {
        self.get(format!("me/drive/items/{}", item_id)).await
    }

    /// An item on the signed-in user's drive, by path.
    pub async fn get_my_drive_item_by_path(&self, item_path: &str) -> Result<Value> {
        self.get(format!("me/drive/root:/{}", item_path)).await
    }

    /// An item in a site's document library, by id.
    pub async fn get_site_drive_item(&self, site_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("sites/{}/drive/items/{}", site_id, item_id))
            .await
    }

    /// An item in a site's document library, by path.
    pub async fn get_site_drive_item_by_path(
        &self,
        site_id: &str,
        item_path: &str,
    ) -> Result<Value> {
        self.get(format!("sites/{}/drive/root:/{}", site_id, item_path))
            .await
    }

    /// A site list item's associated drive item.
    pub async fn get_site_drive_item_from_list(
        &self,
        site_id: &str,
        list_id: &str,
        item_id: &str,
    ) -> Result<Value> {
        self.get(format!(
            "sites/{}/lists/{}/items/{}/driveItem",
            site_id, list_id, item_id
        ))
        .await
    }

    /// An item on another user's drive, by id.
    pub async fn get_user_drive_item(&self, user_id: &str, item_id: &str) -> Result<Value> {
        self.get(format!("users/{}/drive/items/{}", user_id, item_id))
            .await
    }

    /// An item on another user's drive, by path.
    pub async fn get_user_drive_item_by_path(
        &self,
        user_id: &str,
        item_path: &str,
    ) -> Result<Value> {
        self.get(format!("users/{}/drive/root:/{}", user_id, item_path))
            .await
    }
}
