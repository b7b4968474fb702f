use serde::Serialize;

use crate::types::{Owner, RepositoryName};

/// Categories are assumed to fit in a single page of this size
pub const CATEGORY_LIMIT: u8 = 100;

/// Variables of the queries that only need the repository coordinate
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryVariable {
    pub owner: Owner,
    pub name: RepositoryName,
}

pub fn discussion_categories_query() -> String {
    format!(
        r#"
      query DiscussionCategories($owner: String!, $name: String!) {{
        repository(owner: $owner, name: $name) {{
          discussionCategories(first: {}) {{
            nodes {{
              id
              name
            }}
          }}
        }}
      }}
    "#,
        CATEGORY_LIMIT
    )
}
