mod category;
mod discussion;
mod label;
pub mod pager;
mod search;
mod user;

use serde::{Deserialize, Deserializer, Serialize};

pub use category::*;
pub use discussion::*;
pub use label::*;
pub use pager::*;
pub use search::*;
pub use user::*;

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLQuery(pub String);

#[derive(Debug, Clone, Serialize)]
pub struct GraphQLPayload<T: serde::Serialize> {
    pub query: GraphQLQuery,
    pub variables: Option<T>,
}

/// Raw GraphQL response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<serde_json::Value>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

impl std::fmt::Display for GraphQLError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Top-level shape of every repository-scoped query.
///
/// `repository` is `None` when the repository does not exist or is not visible
/// to the authenticated token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryResponse<T> {
    pub repository: Option<T>,
}

/// Connection selected without pagination metadata.
///
/// GitHub types `nodes` as a nullable list of nullable items; null entries are
/// dropped and a null list reads as empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Connection<T> {
    #[serde(default, deserialize_with = "non_null_nodes")]
    pub nodes: Vec<T>,
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

/// One page of a paginated connection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedConnection<T> {
    #[serde(default, deserialize_with = "non_null_nodes")]
    pub nodes: Vec<T>,
    pub page_info: PageInfo,
    pub total_count: u64,
}

fn non_null_nodes<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let nodes: Option<Vec<Option<T>>> = Option::deserialize(deserializer)?;
    Ok(nodes.unwrap_or_default().into_iter().flatten().collect())
}

/// Reads a nullable field as its default value
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_drops_null_nodes() {
        let connection: Connection<LabelNode> = serde_json::from_value(serde_json::json!({
            "nodes": [null, {"id": "LA_1", "name": "bug", "color": "d73a4a"}, null]
        }))
        .unwrap();

        assert_eq!(connection.nodes.len(), 1);
        assert_eq!(connection.nodes[0].name, "bug");
    }

    #[test]
    fn test_connection_with_null_or_missing_node_list() {
        let connection: Connection<LabelNode> =
            serde_json::from_value(serde_json::json!({"nodes": null})).unwrap();
        assert!(connection.nodes.is_empty());

        let connection: Connection<LabelNode> =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(connection.nodes.is_empty());
    }

    #[test]
    fn test_paginated_connection_drops_null_nodes() {
        let page: PaginatedConnection<LabelNode> = serde_json::from_value(serde_json::json!({
            "nodes": [{"id": "LA_1", "name": "bug", "color": "d73a4a"}, null],
            "pageInfo": {
                "startCursor": null,
                "endCursor": null,
                "hasNextPage": false,
                "hasPreviousPage": false
            },
            "totalCount": 2
        }))
        .unwrap();

        assert_eq!(page.nodes.len(), 1);
        assert_eq!(page.total_count, 2);
    }
}
