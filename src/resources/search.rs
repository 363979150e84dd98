//! Microsoft Search service.
//!
//! Queries run in the context of the signed-in user.

use std::sync::Arc;

use serde_json::Value;

use crate::error::Result;
use crate::transport::{GraphRequest, GraphSession};

/// Search query operations.
pub struct Search {
    session: Arc<dyn GraphSession>,
}

impl Search {
    pub(crate) fn new(session: Arc<dyn GraphSession>) -> Self {
        Self { session }
    }

    /// Run the query specified in the request body and return the
    /// `SearchResponse` collection.
    pub async fn query(&self, search_request: Value) -> Result<Value> {
        self.session
            .execute(GraphRequest::post("search/query").with_json(search_request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::testing::RecordingSession;

    #[tokio::test]
    async fn test_query_posts_body() {
        let recorder = RecordingSession::new();
        let body = serde_json::json!({"requests": [{"entityTypes": ["message"]}]});
        Search::new(recorder.clone()).query(body.clone()).await.unwrap();
        let req = recorder.last();
        assert_eq!(req.method, reqwest::Method::POST);
        assert_eq!(req.endpoint, "search/query");
        assert_eq!(req.json.unwrap(), body);
    }
}
