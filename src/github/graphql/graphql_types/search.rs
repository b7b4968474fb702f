use serde::{Deserialize, Serialize};

use super::{DiscussionNode, PaginatedConnection};

/// GraphQL response structure of the `DiscussionsSearch` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionsSearchResponse {
    pub search: PaginatedConnection<SearchResultNode>,
}

impl DiscussionsSearchResponse {
    /// The discussion nodes of this page, in result order
    pub fn discussions(&self) -> impl Iterator<Item = &DiscussionNode> {
        self.search.nodes.iter().filter_map(|node| match node {
            SearchResultNode::Discussion(discussion) => Some(discussion),
            SearchResultNode::Other => None,
        })
    }
}

/// Search results are a union; only the Discussion member is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum SearchResultNode {
    #[serde(rename = "Discussion")]
    Discussion(DiscussionNode),
    #[serde(other)]
    Other,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_discussion_nodes_are_skipped() {
        let response: DiscussionsSearchResponse = serde_json::from_value(serde_json::json!({
            "search": {
                "nodes": [
                    {
                        "__typename": "Discussion",
                        "author": null,
                        "number": 3,
                        "title": "Performance tips",
                        "createdAt": "2024-01-05T00:00:00Z",
                        "updatedAt": "2024-01-06T00:00:00Z",
                        "url": "https://github.com/acme/widgets/discussions/3",
                        "labels": {"nodes": []}
                    },
                    {"__typename": "Issue"}
                ],
                "pageInfo": {
                    "startCursor": "Y3Vyc29yOjE=",
                    "endCursor": "Y3Vyc29yOjI=",
                    "hasNextPage": false,
                    "hasPreviousPage": false
                },
                "totalCount": 1
            }
        }))
        .unwrap();

        assert_eq!(response.search.nodes.len(), 2);
        let numbers: Vec<i32> = response.discussions().map(|d| d.number).collect();
        assert_eq!(numbers, vec![3]);
        assert_eq!(response.search.total_count, 1);
    }

    #[test]
    fn test_null_search_nodes_are_skipped() {
        let response: DiscussionsSearchResponse = serde_json::from_value(serde_json::json!({
            "search": {
                "nodes": [null],
                "pageInfo": {
                    "startCursor": null,
                    "endCursor": null,
                    "hasNextPage": false,
                    "hasPreviousPage": false
                },
                "totalCount": 1
            }
        }))
        .unwrap();

        assert!(response.search.nodes.is_empty());
        assert_eq!(response.discussions().count(), 0);
    }
}
