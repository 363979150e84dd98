//! Users service.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// User directory operations.
pub struct Users {
    session: Arc<dyn GraphSession>,
}

impl Users {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Retrieve the collection of user objects.
    pub async fn list_users(&self) -> Result<Value> {
        self.session.execute(GraphRequest::get("users")).await
    }
}
