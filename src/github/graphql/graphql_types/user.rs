use serde::{Deserialize, Serialize};

/// Discussion author. GitHub returns `null` for deleted accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorNode {
    pub login: String,
    pub url: String,
    pub avatar_url: String,
}
