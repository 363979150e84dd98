//! Table operations.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

use super::ItemLocator;

/// Excel table (list object) operations.
pub struct Table {
    session: Arc<dyn GraphSession>,
}

/// Writable table properties for [`Table::update`]. Unset fields are
/// left untouched on the table.
#[derive(Debug, Default, Clone)]
pub struct TableUpdate {
    name: Option<String>,
    show_headers: Option<bool>,
    show_totals: Option<bool>,
    style: Option<String>,
}

impl TableUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Show or remove the header row.
    pub fn show_headers(mut self, show: bool) -> Self {
        self.show_headers = Some(show);
        self
    }

    /// Show or remove the total row.
    pub fn show_totals(mut self, show: bool) -> Self {
        self.show_totals = Some(show);
        self
    }

    /// A built-in style name (`TableStyleLight1` through
    /// `TableStyleDark11`) or a custom style present in the workbook.
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.style = Some(style.into());
        self
    }

    fn into_value(self) -> Value {
        let mut body = Map::new();
        if let Some(name) = self.name {
            body.insert("name".into(), Value::String(name));
        }
        if let Some(show) = self.show_headers {
            body.insert("showHeaders".into(), Value::Bool(show));
        }
        if let Some(show) = self.show_totals {
            body.insert("showTotals".into(), Value::Bool(show));
        }
        if let Some(style) = self.style {
            body.insert("style".into(), Value::String(style));
        }
        Value::Object(body)
    }
}

impl Table {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    fn table_path(
        item: &ItemLocator,
        worksheet_id_or_name: Option<&str>,
        table_name_or_id: &str,
    ) -> String {
        match worksheet_id_or_name {
            Some(worksheet) => format!(
                "{}/worksheets/{}/tables/{}",
                item.workbook_prefix(),
                worksheet,
                table_name_or_id
            ),
            None => format!("{}/tables/{}", item.workbook_prefix(), table_name_or_id),
        }
    }

    /// Properties and relationships of a table, optionally scoped to a
    /// worksheet.
    pub async fn get(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: Option<&str>,
        table_name_or_id: &str,
    ) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(Self::table_path(
                item,
                worksheet_id_or_name,
                table_name_or_id,
            )))
            .await
    }

    /// Create a table over the given source range. The range address
    /// determines the worksheet the table is added to.
    pub async fn add(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: Option<&str>,
        table_name_or_id: &str,
        address: &str,
        has_headers: bool,
    ) -> Result<Value> {
        let endpoint = format!(
            "{}/add",
            Self::table_path(item, worksheet_id_or_name, table_name_or_id)
        );
        self.session
            .execute(GraphRequest::post(endpoint).with_json(serde_json::json!({
                "address": address,
                "hasHeaders": has_headers,
            })))
            .await
    }

    /// Update writable properties of a table.
    pub async fn update(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: Option<&str>,
        table_name_or_id: &str,
        update: TableUpdate,
    ) -> Result<Value> {
        let endpoint = Self::table_path(item, worksheet_id_or_name, table_name_or_id);
        self.session
            .execute(GraphRequest::patch(endpoint).with_json(update.into_value()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;
    use reqwest::Method;

    #[tokio::test]
    async fn test_get_scoped_and_unscoped() {
        let recorder = RecordingSession::new();
        let table = Table::new(recorder.clone());
        let item = ItemLocator::id("item1");

        table.get(&item, None, "Table1").await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/tables/Table1"
        );

        table.get(&item, Some("Sheet1"), "Table1").await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/worksheets/Sheet1/tables/Table1"
        );
    }

    #[tokio::test]
    async fn test_add_posts_source_range() {
        let recorder = RecordingSession::new();
        let table = Table::new(recorder.clone());
        let item = ItemLocator::id("item1");

        table
            .add(&item, None, "Table1", "Sheet1!A1:D4", true)
            .await
            .unwrap();
        let req = recorder.last();
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.endpoint, "me/drive/items/item1/workbook/tables/Table1/add");
        assert_eq!(
            req.json.unwrap(),
            serde_json::json!({"address": "Sheet1!A1:D4", "hasHeaders": true})
        );
    }

    #[tokio::test]
    async fn test_update_serializes_set_fields_only() {
        let recorder = RecordingSession::new();
        let table = Table::new(recorder.clone());
        let item = ItemLocator::id("item1");

        let update = TableUpdate::new().name("Sales").show_totals(true);
        table.update(&item, None, "Table1", update).await.unwrap();
        let req = recorder.last();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(
            req.json.unwrap(),
            serde_json::json!({"name": "Sales", "showTotals": true})
        );
    }
}
