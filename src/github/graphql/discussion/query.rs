use serde::Serialize;

use crate::types::{
    ContentOptions, DiscussionCategoryId, DiscussionNumber, Owner, RepositoryName, SearchCursor,
};

/// Number of labels selected per discussion
pub const DISCUSSION_LABEL_LIMIT: u8 = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscussionsVariable {
    pub first: u32,
    pub owner: Owner,
    pub name: RepositoryName,
    pub category_id: DiscussionCategoryId,
    #[serde(flatten)]
    pub content: ContentOptions,
    pub cursor: Option<SearchCursor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DiscussionVariable {
    pub owner: Owner,
    pub name: RepositoryName,
    pub number: DiscussionNumber,
    #[serde(flatten)]
    pub content: ContentOptions,
}

/// Field selection of a single discussion. Body fields are gated by the
/// `$body`, `$bodyHTML` and `$bodyText` variables.
pub fn discussion_query_body() -> String {
    format!(
        r#"author {{
                login
                url
                avatarUrl
              }}
              number
              title
              createdAt
              updatedAt
              url
              body @include(if: $body)
              bodyHTML @include(if: $bodyHTML)
              bodyText @include(if: $bodyText)
              labels(first: {}) {{
                nodes {{
                  id
                  name
                  color
                }}
              }}"#,
        DISCUSSION_LABEL_LIMIT
    )
}

pub fn page_info_query_body() -> &'static str {
    r#"pageInfo {
              startCursor
              hasPreviousPage
              hasNextPage
              endCursor
            }"#
}

/// Discussions of one category, newest first
pub fn discussions_query() -> String {
    format!(
        r#"
      query Discussions(
        $first: Int!
        $owner: String!
        $name: String!
        $categoryId: ID!
        $body: Boolean!
        $bodyHTML: Boolean!
        $bodyText: Boolean!
        $cursor: String
      ) {{
        repository(owner: $owner, name: $name) {{
          discussions(
            first: $first
            orderBy: {{ field: CREATED_AT, direction: DESC }}
            after: $cursor
            categoryId: $categoryId
          ) {{
            nodes {{
              {}
            }}
            {}
            totalCount
          }}
        }}
      }}
    "#,
        discussion_query_body(),
        page_info_query_body()
    )
}

pub fn discussion_query() -> String {
    format!(
        r#"
      query Discussion(
        $owner: String!
        $name: String!
        $number: Int!
        $body: Boolean!
        $bodyHTML: Boolean!
        $bodyText: Boolean!
      ) {{
        repository(owner: $owner, name: $name) {{
          discussion(number: $number) {{
            {}
          }}
        }}
      }}
    "#,
        discussion_query_body()
    )
}
