//! Search and pagination types

use serde::{Deserialize, Serialize};

use super::{ContentOptions, RepositoryId};

/// Represents an assembled GitHub search query string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(pub String);

impl SearchQuery {
    pub fn new<T: Into<String>>(query: T) -> Self {
        Self(query.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the discussion search string for a repository.
    ///
    /// The query always starts with `repo:"owner/name"`. Free text is appended
    /// verbatim. Label and category filters are appended as `label:"..."` and
    /// `category:"..."` in that order, skipping unset or empty values. Qualifier
    /// values are wrapped in double quotes as-is; nothing is escaped.
    pub fn for_discussions(repository_id: &RepositoryId, filter: &SearchFilter) -> Self {
        let mut query = format!("repo:\"{}\"", repository_id.full_name());

        match filter {
            SearchFilter::Query(text) => {
                query.push(' ');
                query.push_str(text);
            }
            SearchFilter::LabelAndCategory { label, category } => {
                if let Some(label) = label.as_deref().filter(|l| !l.is_empty()) {
                    query.push_str(&format!(" label:\"{}\"", label));
                }
                if let Some(category) = category.as_deref().filter(|c| !c.is_empty()) {
                    query.push_str(&format!(" category:\"{}\"", category));
                }
            }
        }

        Self(query)
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque pagination token, only valid for the query shape that produced it
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchCursor(pub String);

impl SearchCursor {
    pub fn new<T: Into<String>>(cursor: T) -> Self {
        Self(cursor.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a discussion search filters on. Exactly one shape applies per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchFilter {
    /// Free text in GitHub search syntax, appended to the repository scope unchanged
    Query(String),
    /// Optional label and category qualifiers
    LabelAndCategory {
        label: Option<String>,
        category: Option<String>,
    },
}

impl Default for SearchFilter {
    fn default() -> Self {
        Self::LabelAndCategory {
            label: None,
            category: None,
        }
    }
}

/// Parameters for a discussion search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub filter: SearchFilter,
    /// Page size, 100 when unset
    pub first: Option<u32>,
    pub content: ContentOptions,
    pub cursor: Option<SearchCursor>,
}

impl SearchParams {
    pub fn query<T: Into<String>>(text: T) -> Self {
        Self {
            filter: SearchFilter::Query(text.into()),
            ..Default::default()
        }
    }

    pub fn label_and_category(label: Option<String>, category: Option<String>) -> Self {
        Self {
            filter: SearchFilter::LabelAndCategory { label, category },
            ..Default::default()
        }
    }
}
