use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{AuthorNode, Connection, LabelNode, PaginatedConnection, null_as_default};

/// Discussion fields shared by the list, single and search queries.
///
/// The body fields are only present when requested through the matching
/// content flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionNode {
    pub author: Option<AuthorNode>,
    pub number: i32,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(
        rename = "bodyHTML",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub body_html: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_text: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub labels: Connection<LabelNode>,
}

/// `repository` selection of the `Discussions` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionsRepository {
    pub discussions: PaginatedConnection<DiscussionNode>,
}

/// `repository` selection of the `Discussion` query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscussionRepository {
    pub discussion: Option<DiscussionNode>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_without_body_fields() {
        let node: DiscussionNode = serde_json::from_value(serde_json::json!({
            "author": null,
            "number": 7,
            "title": "Roadmap",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-02T11:30:00Z",
            "url": "https://github.com/acme/widgets/discussions/7",
            "labels": {"nodes": []}
        }))
        .unwrap();

        assert!(node.author.is_none());
        assert_eq!(node.number, 7);
        assert!(node.body.is_none());
        assert!(node.body_html.is_none());
        assert!(node.body_text.is_none());
        assert!(node.labels.nodes.is_empty());
    }

    #[test]
    fn test_deserialize_with_body_fields_and_labels() {
        let node: DiscussionNode = serde_json::from_value(serde_json::json!({
            "author": {
                "login": "octocat",
                "url": "https://github.com/octocat",
                "avatarUrl": "https://avatars.githubusercontent.com/u/583231"
            },
            "number": 12,
            "title": "Build is slow",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z",
            "url": "https://github.com/acme/widgets/discussions/12",
            "body": "It takes *ages*",
            "bodyHTML": "<p>It takes <em>ages</em></p>",
            "bodyText": "It takes ages",
            "labels": {"nodes": [{"id": "LA_1", "name": "bug", "color": "d73a4a"}]}
        }))
        .unwrap();

        assert_eq!(node.author.as_ref().unwrap().login, "octocat");
        assert_eq!(node.body.as_deref(), Some("It takes *ages*"));
        assert_eq!(node.body_html.as_deref(), Some("<p>It takes <em>ages</em></p>"));
        assert_eq!(node.body_text.as_deref(), Some("It takes ages"));
        assert_eq!(node.labels.nodes[0].name, "bug");
    }

    #[test]
    fn test_null_labels_read_as_empty() {
        let node: DiscussionNode = serde_json::from_value(serde_json::json!({
            "author": null,
            "number": 9,
            "title": "Unlabelled",
            "createdAt": "2024-03-01T10:00:00Z",
            "updatedAt": "2024-03-01T10:00:00Z",
            "url": "https://github.com/acme/widgets/discussions/9",
            "labels": null
        }))
        .unwrap();

        assert_eq!(node.number, 9);
        assert!(node.labels.nodes.is_empty());
    }
}
