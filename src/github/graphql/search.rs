use serde::Serialize;

use super::discussion::{discussion_query_body, page_info_query_body};
use crate::types::{ContentOptions, SearchCursor, SearchQuery};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVariable {
    pub query_str: SearchQuery,
    pub first: u32,
    #[serde(flatten)]
    pub content: ContentOptions,
    pub cursor: Option<SearchCursor>,
}

/// Discussion search. The node union is narrowed to `Discussion` and each node
/// carries `__typename` so anything else deserializes as `Other`.
pub fn discussions_search_query() -> String {
    format!(
        r#"
      query DiscussionsSearch(
        $queryStr: String!
        $first: Int!
        $body: Boolean!
        $bodyHTML: Boolean!
        $bodyText: Boolean!
        $cursor: String
      ) {{
        search(first: $first, type: DISCUSSION, query: $queryStr, after: $cursor) {{
          nodes {{
            __typename
            ... on Discussion {{
              {}
            }}
          }}
          {}
          totalCount: discussionCount
        }}
      }}
    "#,
        discussion_query_body(),
        page_info_query_body()
    )
}
