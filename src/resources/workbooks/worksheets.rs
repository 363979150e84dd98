//! Worksheet operations.

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::transport::{GraphRequest, GraphSession};

use super::{with_workbook_session, ItemLocator, WorksheetVisibility};

/// Worksheet operations within a workbook.
pub struct Worksheets {
    session: Arc<dyn GraphSession>,
}

/// Writable worksheet properties for [`Worksheets::update`]. Unset
/// fields are left untouched on the worksheet.
#[derive(Debug, Default, Clone)]
pub struct WorksheetUpdate {
    name: Option<String>,
    position: Option<u32>,
    visibility: Option<WorksheetVisibility>,
}

impl WorksheetUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Zero-based position of the worksheet within the workbook.
    pub fn position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    pub fn visibility(mut self, visibility: WorksheetVisibility) -> Self {
        self.visibility = Some(visibility);
        self
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.visibility.is_none()
    }

    fn into_value(self) -> Value {
        let mut body = Map::new();
        if let Some(name) = self.name {
            body.insert("name".into(), Value::String(name));
        }
        if let Some(position) = self.position {
            body.insert("position".into(), Value::from(position));
        }
        if let Some(visibility) = self.visibility {
            body.insert("visibility".into(), Value::String(visibility.as_str().into()));
        }
        Value::Object(body)
    }
}

impl Worksheets {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Add a worksheet at the end of the existing worksheets. When
    /// `name` is omitted the provider picks one.
    pub async fn add(
        &self,
        item: &ItemLocator,
        name: Option<&str>,
        workbook_session_id: Option<&str>,
    ) -> Result<Value> {
        let body = name.map(|name| serde_json::json!({ "name": name }));
        let request = GraphRequest::post(format!("{}/worksheets/add", item.workbook_prefix()))
            .with_optional_json(body);
        self.session
            .execute(with_workbook_session(request, workbook_session_id)?)
            .await
    }

    /// Properties and relationships of a worksheet, by id or name.
    pub async fn get(&self, item: &ItemLocator, worksheet_id_or_name: &str) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "{}/worksheets/{}",
                item.workbook_prefix(),
                worksheet_id_or_name
            )))
            .await
    }

    /// The smallest range encompassing any cells with a value or
    /// formatting. Blank worksheets return the top-left cell. With
    /// `values_only`, cells that only carry formatting are ignored.
    pub async fn get_used_range(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: &str,
        values_only: bool,
    ) -> Result<Value> {
        let mut request = GraphRequest::get(format!(
            "{}/worksheets/{}/usedRange",
            item.workbook_prefix(),
            worksheet_id_or_name
        ));
        if values_only {
            request = request.with_param("valuesOnly", true);
        }
        self.session.execute(request).await
    }

    /// Update worksheet properties. At least one property must be set
    /// on the update.
    pub async fn update(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: &str,
        update: WorksheetUpdate,
        workbook_session_id: Option<&str>,
    ) -> Result<Value> {
        if update.is_empty() {
            return Err(Error::Config(
                "worksheet update has no properties to apply".into(),
            ));
        }
        let request = GraphRequest::patch(format!(
            "{}/worksheets/{}",
            item.workbook_prefix(),
            worksheet_id_or_name
        ))
        .with_json(update.into_value());
        self.session
            .execute(with_workbook_session(request, workbook_session_id)?)
            .await
    }

    /// Delete a worksheet from the workbook.
    pub async fn delete(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: &str,
        workbook_session_id: Option<&str>,
    ) -> Result<Value> {
        let request = GraphRequest::delete(format!(
            "{}/worksheets/{}",
            item.workbook_prefix(),
            worksheet_id_or_name
        ))
        .expect_empty_body();
        self.session
            .execute(with_workbook_session(request, workbook_session_id)?)
            .await
    }

    /// The range containing a single cell by zero-indexed row and
    /// column. The cell may lie outside its parent range as long as it
    /// stays within the worksheet grid.
    pub async fn get_cell(
        &self,
        item: &ItemLocator,
        worksheet_id_or_name: &str,
        row: u32,
        column: u32,
    ) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "{}/worksheets/{}/cell(row={},column={})",
                item.workbook_prefix(),
                worksheet_id_or_name,
                row,
                column
            )))
            .await
    }
}
