//! Workbook application: the Excel instance managing the workbook.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

use super::{CalculationType, ItemLocator};

/// Application-level operations on a workbook.
pub struct Application {
    session: Arc<dyn GraphSession>,
}

impl Application {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Properties of the `workbookApplication` object.
    pub async fn get(&self, item: &ItemLocator) -> Result<Value> {
        self.session
            .execute(GraphRequest::get(format!(
                "{}/application",
                item.workbook_prefix()
            )))
            .await
    }

    /// Recalculate the workbook with the given calculation mode.
    pub async fn calculate(
        &self,
        item: &ItemLocator,
        calculation_type: CalculationType,
    ) -> Result<Value> {
        self.session
            .execute(
                GraphRequest::post(format!("{}/application/calculate", item.workbook_prefix()))
                    .with_json(serde_json::json!({
                        "calculationType": calculation_type.as_str(),
                    }))
                    .expect_empty_body(),
            )
            .await
    }
}
