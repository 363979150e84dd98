//! Groups service.
//!
//! All group operations require administrator consent on the
//! application registration.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Group directory operations.
pub struct Groups {
    session: Arc<dyn GraphSession>,
}

impl Groups {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// List all groups in the organization, including but not limited
    /// to Microsoft 365 groups.
    pub async fn list_groups(&self) -> Result<Value> {
        self.session.execute(GraphRequest::get("groups")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;

    #[tokio::test]
    async fn test_list_groups_path() {
        let recorder = RecordingSession::new();
        Groups::new(recorder.clone()).list_groups().await.unwrap();
        assert_eq!(recorder.last().endpoint, "groups");
    }
}
