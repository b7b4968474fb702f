use serde::{Deserialize, Serialize};

use crate::types::SearchCursor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub start_cursor: Option<SearchCursor>,
    pub end_cursor: Option<SearchCursor>,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PageInfo {
    /// Cursor to pass back for the following page, if there is one
    pub fn next_cursor(&self) -> Option<&SearchCursor> {
        if self.has_next_page {
            self.end_cursor.as_ref()
        } else {
            None
        }
    }
}
