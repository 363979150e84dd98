//! Excel workbook services.
//!
//! A workbook is reached through the drive API, addressed either by the
//! drive item id or by the item path relative to the drive root. Every
//! service in this family takes an [`ItemLocator`] naming the file to
//! operate on.

mod application;
mod comments;
mod enums;
mod range;
mod table;
mod workbook;
mod worksheets;

pub use application::Application;
pub use comments::Comments;
pub use enums::{
    ApplyTo, BorderStyle, BorderWeight, CalculationType, HorizontalAlignment, RangeShift,
    Underline, VerticalAlignment, WorksheetVisibility,
};
pub use range::{Range, RangeProperties};
pub use table::{Table, TableUpdate};
pub use workbook::Workbook;
pub use worksheets::{WorksheetUpdate, Worksheets};

use reqwest::header::{HeaderName, HeaderValue};

use crate::error::{Error, Result};
use crate::transport::GraphRequest;

/// Identifies the workbook file on the signed-in user's drive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemLocator {
    /// Drive item resource id.
    Id(String),
    /// Item path relative to the drive root, for example
    /// `TestFolder/TestFile.xlsx`.
    Path(String),
}

impl ItemLocator {
    pub fn id(item_id: impl Into<String>) -> Self {
        Self::Id(item_id.into())
    }

    pub fn path(item_path: impl Into<String>) -> Self {
        Self::Path(item_path.into())
    }

    /// The workbook URL prefix for this item.
    pub(crate) fn workbook_prefix(&self) -> String {
        match self {
            Self::Id(item_id) => format!("me/drive/items/{}/workbook", item_id),
            Self::Path(item_path) => {
                format!("me/drive/root:/{}:/workbook", item_path.trim_start_matches('/'))
            }
        }
    }
}

/// Identifies a range within a workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeLocator {
    /// An A1-style address on a worksheet.
    Worksheet { worksheet: String, address: String },
    /// A named range.
    Named(String),
    /// The data body range of a table column.
    TableColumn { table: String, column: String },
}

impl RangeLocator {
    pub fn worksheet(worksheet: impl Into<String>, address: impl Into<String>) -> Self {
        Self::Worksheet {
            worksheet: worksheet.into(),
            address: address.into(),
        }
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    pub fn table_column(table: impl Into<String>, column: impl Into<String>) -> Self {
        Self::TableColumn {
            table: table.into(),
            column: column.into(),
        }
    }

    /// The range path under the workbook prefix.
    pub(crate) fn range_path(&self) -> String {
        match self {
            Self::Worksheet { worksheet, address } => {
                format!("worksheets/{}/range(address='{}')", worksheet, address)
            }
            Self::Named(name) => format!("names/{}/range", name),
            Self::TableColumn { table, column } => {
                format!("tables/{}/columns/{}/range", table, column)
            }
        }
    }
}

/// Attaches the `workbook-session-id` header when a session id is
/// provided. Changes made inside a workbook session are persisted or
/// discarded according to how the session was created.
pub(crate) fn with_workbook_session(
    request: GraphRequest,
    workbook_session_id: Option<&str>,
) -> Result<GraphRequest> {
    match workbook_session_id {
        Some(session_id) => {
            let value = HeaderValue::from_str(session_id).map_err(|_| {
                Error::Config("workbook session id is not a valid header value".into())
            })?;
            Ok(request.with_header(HeaderName::from_static("workbook-session-id"), value))
        }
        None => Ok(request),
    }
}
