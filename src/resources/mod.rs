//! Resource services: static catalogues of Graph endpoints.
//!
//! Every method maps to exactly one [`GraphRequest`](crate::transport::GraphRequest);
//! there is no branching beyond path assembly. Services hold the
//! [`GraphSession`](crate::transport::GraphSession) capability, not a
//! concrete client.

pub mod drive_items;
pub mod drives;
pub mod groups;
pub mod mail;
pub mod notes;
pub mod personal_contacts;
pub mod search;
pub mod users;
pub mod workbooks;

pub use drive_items::DriveItems;
pub use drives::Drives;
pub use groups::Groups;
pub use mail::Mail;
pub use notes::Notes;
pub use personal_contacts::PersonalContacts;
pub use search::Search;
pub use users::Users;

#[cfg(test)]
pub(crate) mod testing {
    //! Recording session double for path-assembly tests.

    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::error::Result;
    use crate::transport::{GraphRequest, GraphSession};

    /// Captures every executed request and answers with `{}`.
    #[derive(Default)]
    pub struct RecordingSession {
        requests: Mutex<Vec<GraphRequest>>,
    }

    impl RecordingSession {
        pub fn new() -> Arc<Self> {
            Arc::new(Self::default())
        }

        pub fn last(&self) -> GraphRequest {
            self.requests
                .lock()
                .unwrap()
                .last()
                .cloned()
                .expect("no request recorded")
        }
    }

    #[async_trait]
    impl GraphSession for RecordingSession {
        async fn execute(&self, request: GraphRequest) -> Result<Value> {
            self.requests.lock().unwrap().push(request);
            Ok(json!({}))
        }
    }
}
