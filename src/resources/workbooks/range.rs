//! Range operations: contiguous blocks of cells addressed by worksheet
//! address, named range, or table column.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

use super::{ItemLocator, RangeLocator, RangeShift};

/// Range read and write operations.
pub struct Range {
    session: Arc<dyn GraphSession>,
}

/// Writable range properties for [`Range::update`]. Unset fields are
/// left untouched on the range.
#[derive(Debug, Default, Clone)]
pub struct RangeProperties {
    column_hidden: Option<bool>,
    row_hidden: Option<bool>,
    formulas: Option<Value>,
    formulas_local: Option<Value>,
    formulas_r1c1: Option<Value>,
    number_format: Option<String>,
    values: Option<Value>,
}

impl RangeProperties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hide or show all columns of the range.
    pub fn column_hidden(mut self, hidden: bool) -> Self {
        self.column_hidden = Some(hidden);
        self
    }

    /// Hide or show all rows of the range.
    pub fn row_hidden(mut self, hidden: bool) -> Self {
        self.row_hidden = Some(hidden);
        self
    }

    /// Formulas in A1-style notation, one row per inner array.
    pub fn formulas(mut self, formulas: Value) -> Self {
        self.formulas = Some(formulas);
        self
    }

    /// Formulas in the user's language and number-formatting locale.
    pub fn formulas_local(mut self, formulas: Value) -> Self {
        self.formulas_local = Some(formulas);
        self
    }

    /// Formulas in R1C1-style notation.
    pub fn formulas_r1c1(mut self, formulas: Value) -> Self {
        self.formulas_r1c1 = Some(formulas);
        self
    }

    /// Excel number format code for the cells.
    pub fn number_format(mut self, format: impl Into<String>) -> Self {
        self.number_format = Some(format.into());
        self
    }

    /// Raw cell values, one row per inner array.
    pub fn values(mut self, values: Value) -> Self {
        self.values = Some(values);
        self
    }

    fn into_value(self) -> Value {
        let mut body = Map::new();
        if let Some(hidden) = self.column_hidden {
            body.insert("columnHidden".into(), Value::Bool(hidden));
        }
        if let Some(hidden) = self.row_hidden {
            body.insert("rowHidden".into(), Value::Bool(hidden));
        }
        if let Some(formulas) = self.formulas {
            body.insert("formulas".into(), formulas);
        }
        if let Some(formulas) = self.formulas_local {
            body.insert("formulasLocal".into(), formulas);
        }
        if let Some(formulas) = self.formulas_r1c1 {
            body.insert("formulasR1C1".into(), formulas);
        }
        if let Some(format) = self.number_format {
            body.insert("numberFormat".into(), Value::String(format));
        }
        if let Some(values) = self.values {
            body.insert("values".into(), values);
        }
        Value::Object(body)
    }
}

impl Range {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    fn endpoint(item: &ItemLocator, range: &RangeLocator) -> String {
        format!("{}/{}", item.workbook_prefix(), range.range_path())
    }

    /// Properties and relationships of the range.
    pub async fn get(&self, item: &ItemLocator, range: &RangeLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(Self::endpoint(item, range)))
            .await
    }

    /// Update writable properties of the range.
    pub async fn update(
        &self,
        item: &ItemLocator,
        range: &RangeLocator,
        properties: RangeProperties,
    ) -> Result<Value> {
        self.session
            .execute(
                GraphRequest::patch(Self::endpoint(item, range))
                    .with_json(properties.into_value()),
            )
            .await
    }

    /// Insert a blank range, shifting existing cells `Down` or
    /// `Right`.
    pub async fn insert(
        &self,
        item: &ItemLocator,
        range: &RangeLocator,
        shift: RangeShift,
    ) -> Result<Value> {
        self.session
            .execute(
                GraphRequest::post(format!("{}/insert", Self::endpoint(item, range)))
                    .with_json(serde_json::json!({ "shift": shift.as_str() })),
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
    async fn test_get_by_each_locator() {
        let recorder = RecordingSession::new();
        let range = Range::new(recorder.clone());
        let item = ItemLocator::id("item1");

        range
            .get(&item, &RangeLocator::worksheet("Sheet1", "A1:C3"))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/worksheets/Sheet1/range(address='A1:C3')"
        );

        range.get(&item, &RangeLocator::named("Totals")).await.unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/names/Totals/range"
        );

        range
            .get(&item, &RangeLocator::table_column("Table1", "Amount"))
            .await
            .unwrap();
        assert_eq!(
            recorder.last().endpoint,
            "me/drive/items/item1/workbook/tables/Table1/columns/Amount/range"
        );
    }

    #[tokio::test]
    async fn test_update_serializes_set_fields_only() {
        let recorder = RecordingSession::new();
        let range = Range::new(recorder.clone());
        let item = ItemLocator::id("item1");

        let properties = RangeProperties::new()
            .values(serde_json::json!([[1, 2], [3, 4]]))
            .number_format("0.00")
            .row_hidden(false);
        range
            .update(&item, &RangeLocator::worksheet("Sheet1", "A1:B2"), properties)
            .await
            .unwrap();

        let req = recorder.last();
        assert_eq!(req.method, Method::PATCH);
        assert_eq!(
            req.json.unwrap(),
            serde_json::json!({
                "values": [[1, 2], [3, 4]],
                "numberFormat": "0.00",
                "rowHidden": false,
            })
        );
    }

    #[tokio::test]
    async fn test_insert_posts_shift() {
        let recorder = RecordingSession::new();
        let range = Range::new(recorder.clone());
        let item = ItemLocator::path("Book.xlsx");

        range
            .insert(&item, &RangeLocator::named("Totals"), RangeShift::Down)
            .await
            .unwrap();
        let req = recorder.last();
        assert_eq!(
            req.endpoint,
            "me/drive/root:/Book.xlsx:/workbook/names/Totals/range/insert"
        );
        assert_eq!(req.json.unwrap(), serde_json::json!({"shift": "Down"}));
    }
}
