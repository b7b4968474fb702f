//! Discussion identifiers and query parameters

use serde::{Deserialize, Serialize};

use super::SearchCursor;

/// Repository-scoped discussion sequence number, a GraphQL `Int`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
pub struct DiscussionNumber(pub i32);

impl DiscussionNumber {
    pub fn new(number: i32) -> Self {
        Self(number)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

impl std::fmt::Display for DiscussionNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque GraphQL node id of a discussion category
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscussionCategoryId(pub String);

impl DiscussionCategoryId {
    pub fn new<T: Into<String>>(id: T) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DiscussionCategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Selects which body representations are fetched for each discussion.
///
/// Serialized directly as the `$body`, `$bodyHTML` and `$bodyText` variables that
/// drive the `@include(if: ...)` directives, so unused content is never transferred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentOptions {
    pub body: bool,
    #[serde(rename = "bodyHTML")]
    pub body_html: bool,
    #[serde(rename = "bodyText")]
    pub body_text: bool,
}

impl ContentOptions {
    /// Requests every body representation
    pub fn all() -> Self {
        Self {
            body: true,
            body_html: true,
            body_text: true,
        }
    }
}

/// Parameters for listing the discussions of one category by its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryByCategoryIdParams {
    /// Page size, 100 when unset
    pub first: Option<u32>,
    pub category_id: DiscussionCategoryId,
    pub content: ContentOptions,
    /// Continue after the `endCursor` of a previous page
    pub cursor: Option<SearchCursor>,
}

impl QueryByCategoryIdParams {
    pub fn new(category_id: DiscussionCategoryId) -> Self {
        Self {
            first: None,
            category_id,
            content: ContentOptions::default(),
            cursor: None,
        }
    }
}

/// Parameters for listing the discussions of one category by its display name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryByCategoryNameParams {
    /// Exact, case-sensitive category name
    pub name: String,
    pub first: Option<u32>,
    pub content: ContentOptions,
    pub cursor: Option<SearchCursor>,
}

impl QueryByCategoryNameParams {
    pub fn new<T: Into<String>>(name: T) -> Self {
        Self {
            name: name.into(),
            first: None,
            content: ContentOptions::default(),
            cursor: None,
        }
    }

    /// Converts into by-id parameters once the category has been resolved
    pub fn with_category_id(self, category_id: DiscussionCategoryId) -> QueryByCategoryIdParams {
        QueryByCategoryIdParams {
            first: self.first,
            category_id,
            content: self.content,
            cursor: self.cursor,
        }
    }
}

/// Parameters for fetching a single discussion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryByNumberParams {
    pub number: DiscussionNumber,
    pub content: ContentOptions,
}

impl QueryByNumberParams {
    pub fn new(number: DiscussionNumber) -> Self {
        Self {
            number,
            content: ContentOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_options_default_to_false() {
        let content = ContentOptions::default();
        let value = serde_json::to_value(content).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"body": false, "bodyHTML": false, "bodyText": false})
        );
    }

    #[test]
    fn test_with_category_id_keeps_remaining_params() {
        let params = QueryByCategoryNameParams {
            name: "Q&A".to_string(),
            first: Some(10),
            content: ContentOptions {
                body: true,
                ..Default::default()
            },
            cursor: Some(SearchCursor::new("Y3Vyc29y")),
        };

        let by_id = params.with_category_id(DiscussionCategoryId::new("DIC_kwDO"));
        assert_eq!(by_id.category_id.as_str(), "DIC_kwDO");
        assert_eq!(by_id.first, Some(10));
        assert!(by_id.content.body);
        assert!(!by_id.content.body_html);
        assert_eq!(by_id.cursor, Some(SearchCursor::new("Y3Vyc29y")));
    }

    #[test]
    fn test_discussion_number_stays_within_graphql_int() {
        assert_eq!(
            serde_json::to_value(DiscussionNumber::new(12)).unwrap(),
            serde_json::json!(12)
        );
        let too_large = serde_json::json!(2_147_483_648u64);
        assert!(serde_json::from_value::<DiscussionNumber>(too_large).is_err());
    }
}
