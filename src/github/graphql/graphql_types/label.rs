use serde::{Deserialize, Serialize};

use super::{Connection, null_as_default};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelNode {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// `repository` selection of the `AllLabels` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelsRepository {
    /// Empty when GitHub returns a null connection
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Connection<LabelNode>,
}
