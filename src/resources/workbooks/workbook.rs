//! Workbook-level operations: sessions and top-level collections.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

use super::{with_workbook_session, ItemLocator};

/// Workbook session management and top-level collection listings.
pub struct Workbook {
    session: Arc<dyn GraphSession>,
}

impl Workbook {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Open a workbook session. The returned `workbookSessionInfo`
    /// carries the id to pass to subsequent calls.
    pub async fn create_session(&self, item: &ItemLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::post(format!(
                "{}/createSession",
                item.workbook_prefix()
            )))
            .await
    }

    /// Keep an existing workbook session alive.
    pub async fn refresh_session(
        &self,
        item: &ItemLocator,
        workbook_session_id: &str,
    ) -> Result<Value> {
        let request = GraphRequest::post(format!("{}/refreshSession", item.workbook_prefix()))
            .expect_empty_body();
        self.session
            .execute(with_workbook_session(request, Some(workbook_session_id))?)
            .await
    }

    /// Close an existing workbook session.
    pub async fn close_session(
        &self,
        item: &ItemLocator,
        workbook_session_id: &str,
    ) -> Result<Value> {
        let request = GraphRequest::post(format!("{}/closeSession", item.workbook_prefix()))
            .expect_empty_body();
        self.session
            .execute(with_workbook_session(request, Some(workbook_session_id))?)
            .await
    }

    /// Tables in the workbook.
    pub async fn list_tables(&self, item: &ItemLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!("{}/tables", item.workbook_prefix())))
            .await
    }

    /// Worksheets in the workbook.
    pub async fn list_worksheets(&self, item: &ItemLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "{}/worksheets",
                item.workbook_prefix()
            )))
            .await
    }

    /// Named items in the workbook.
    pub async fn list_names(&self, item: &ItemLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!("{}/names", item.workbook_prefix())))
            .await
    }

    /// Result of an asynchronous table-row creation, by the operation
    /// id returned from the original request.
    pub async fn get_operation_result(&self, operation_id: &str) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "driveItem/workbook/tableRowOperationResult(key={})",
                operation_id
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
    async fn test_session_lifecycle_paths() {
        let recorder = RecordingSession::new();
        let workbook = Workbook::new(recorder.clone());
        let item = ItemLocator::id("item1");

        workbook.create_session(&item).await.unwrap();
        let req = recorder.last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.endpoint, "me/drive/items/item1/workbook/createSession");
        assert!(!req.expect_empty_body);

        workbook.refresh_session(&item, "sess-1").await.unwrap();
        let req = recorder.last();
        assert_eq!(req.endpoint, "me/drive/items/item1/workbook/refreshSession");
        assert!(req.expect_empty_body);
        assert_eq!(req.headers.get("workbook-session-id").unwrap(), "sess-1");

        workbook.close_session(&item, "sess-1").await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/closeSession"
        );
    }

    #[tokio::test]
    async fn test_collection_paths_by_item_path() {
        let recorder = RecordingSession::new();
        let workbook = Workbook::new(recorder.clone());
        let item = ItemLocator::path("Reports/Q1.xlsx");

        workbook.list_tables(&item).await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/root:/Reports/Q1.xlsx:/workbook/tables"
        );

        workbook.list_names(&item).await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/root:/Reports/Q1.xlsx:/workbook/names"
        );

        workbook.get_operation_result("op7").await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "driveItem/workbook/tableRowOperationResult(key=op7)"
        );
    }
}
