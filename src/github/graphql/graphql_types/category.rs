use serde::{Deserialize, Serialize};

use super::{Connection, RepositoryResponse};
use crate::types::DiscussionCategoryId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscussionCategoryNode {
    pub id: DiscussionCategoryId,
    pub name: String,
}

/// `repository` selection of the `DiscussionCategories` query
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesRepository {
    pub discussion_categories: Connection<DiscussionCategoryNode>,
}

impl RepositoryResponse<CategoriesRepository> {
    /// First category whose name matches exactly (case-sensitive)
    pub fn find_by_name(&self, name: &str) -> Option<&DiscussionCategoryNode> {
        self.repository
            .as_ref()?
            .discussion_categories
            .nodes
            .iter()
            .find(|category| category.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> RepositoryResponse<CategoriesRepository> {
        serde_json::from_value(serde_json::json!({
            "repository": {
                "discussionCategories": {
                    "nodes": [
                        {"id": "DIC_1", "name": "Announcements"},
                        {"id": "DIC_2", "name": "Q&A"},
                        {"id": "DIC_3", "name": "Q&A"}
                    ]
                }
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_find_by_name_returns_first_exact_match() {
        let response = categories();
        let found = response.find_by_name("Q&A").unwrap();
        assert_eq!(found.id.as_str(), "DIC_2");
    }

    #[test]
    fn test_find_by_name_is_case_sensitive() {
        let response = categories();
        assert!(response.find_by_name("q&a").is_none());
        assert!(response.find_by_name("Ideas").is_none());
    }

    #[test]
    fn test_find_by_name_without_repository() {
        let response: RepositoryResponse<CategoriesRepository> =
            serde_json::from_value(serde_json::json!({"repository": null})).unwrap();
        assert!(response.find_by_name("Q&A").is_none());
    }

    #[test]
    fn test_find_by_name_skips_null_categories() {
        let response: RepositoryResponse<CategoriesRepository> =
            serde_json::from_value(serde_json::json!({
                "repository": {
                    "discussionCategories": {
                        "nodes": [null, {"id": "DIC_2", "name": "Q&A"}]
                    }
                }
            }))
            .unwrap();

        assert_eq!(response.find_by_name("Q&A").unwrap().id.as_str(), "DIC_2");
    }
}
