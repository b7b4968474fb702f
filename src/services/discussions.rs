//! The discussion operation set.
//!
//! Every operation takes the configuration explicitly, runs the guard check
//! before touching the transport, submits one fixed GraphQL document and hands
//! the typed response back unchanged.

use serde::Serialize;
use tracing::{info, warn};

use super::configuration::Configuration;
use crate::github::graphql::category::{RepositoryVariable, discussion_categories_query};
use crate::github::graphql::discussion::{
    DiscussionVariable, DiscussionsVariable, discussion_query, discussions_query,
};
use crate::github::graphql::graphql_types::{
    CategoriesRepository, DiscussionRepository, DiscussionsRepository, DiscussionsSearchResponse,
    GraphQLPayload, GraphQLQuery, GraphQLResponse, LabelsRepository, RepositoryResponse,
};
use crate::github::graphql::label::all_labels_query;
use crate::github::graphql::search::{SearchVariable, discussions_search_query};
use crate::github::{DiscussionError, GraphQLExecutor};
use crate::types::{
    QueryByCategoryIdParams, QueryByCategoryNameParams, QueryByNumberParams, RepositoryId,
    SearchParams, SearchQuery,
};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PAGE_SIZE: u32 = 100;

pub type CategoriesResponse = RepositoryResponse<CategoriesRepository>;
pub type DiscussionsResponse = RepositoryResponse<DiscussionsRepository>;
pub type DiscussionResponse = RepositoryResponse<DiscussionRepository>;
pub type LabelsResponse = RepositoryResponse<LabelsRepository>;

/// Outcome of resolving a category by name before listing its discussions
#[derive(Debug, Clone)]
pub enum CategoryLookup {
    Found(DiscussionsResponse),
    /// No category has exactly the requested name
    NotFound,
}

impl CategoryLookup {
    pub fn found(self) -> Option<DiscussionsResponse> {
        match self {
            Self::Found(response) => Some(response),
            Self::NotFound => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// Lists up to 100 discussion categories of the configured repository
pub async fn query_categories<E: GraphQLExecutor>(
    config: &Configuration<E>,
) -> Result<CategoriesResponse, DiscussionError> {
    let required = config.check()?;

    let variables = RepositoryVariable {
        owner: required.owner.clone(),
        name: required.repository_name.clone(),
    };

    execute(
        required.executor,
        "DiscussionCategories",
        discussion_categories_query(),
        variables,
    )
    .await
}

/// Lists one page of discussions in a category, newest first
pub async fn query_by_category_id<E: GraphQLExecutor>(
    config: &Configuration<E>,
    params: QueryByCategoryIdParams,
) -> Result<DiscussionsResponse, DiscussionError> {
    let required = config.check()?;

    let variables = DiscussionsVariable {
        first: params.first.unwrap_or(DEFAULT_PAGE_SIZE),
        owner: required.owner.clone(),
        name: required.repository_name.clone(),
        category_id: params.category_id,
        content: params.content,
        cursor: params.cursor,
    };

    execute(required.executor, "Discussions", discussions_query(), variables).await
}

/// Resolves a category by exact name, then lists its discussions.
///
/// The second request is only issued when the category exists; otherwise the
/// result is `CategoryLookup::NotFound`.
pub async fn query_by_category_name<E: GraphQLExecutor>(
    config: &Configuration<E>,
    params: QueryByCategoryNameParams,
) -> Result<CategoryLookup, DiscussionError> {
    let categories = query_categories(config).await?;

    let Some(category) = categories.find_by_name(&params.name) else {
        info!("Discussion category not found: {}", params.name);
        return Ok(CategoryLookup::NotFound);
    };

    let category_id = category.id.clone();
    info!("Resolved category {} to {}", params.name, category_id);

    let response = query_by_category_id(config, params.with_category_id(category_id)).await?;
    Ok(CategoryLookup::Found(response))
}

/// Fetches a single discussion by its number; `discussion` is `None` when absent
pub async fn query_by_number<E: GraphQLExecutor>(
    config: &Configuration<E>,
    params: QueryByNumberParams,
) -> Result<DiscussionResponse, DiscussionError> {
    let required = config.check()?;

    let variables = DiscussionVariable {
        owner: required.owner.clone(),
        name: required.repository_name.clone(),
        number: params.number,
        content: params.content,
    };

    execute(required.executor, "Discussion", discussion_query(), variables).await
}

/// Lists up to 100 labels ordered by name
pub async fn query_labels<E: GraphQLExecutor>(
    config: &Configuration<E>,
) -> Result<LabelsResponse, DiscussionError> {
    let required = config.check()?;

    let variables = RepositoryVariable {
        owner: required.owner.clone(),
        name: required.repository_name.clone(),
    };

    execute(required.executor, "AllLabels", all_labels_query(), variables).await
}

/// Searches the configured repository's discussions
pub async fn search<E: GraphQLExecutor>(
    config: &Configuration<E>,
    params: SearchParams,
) -> Result<DiscussionsSearchResponse, DiscussionError> {
    let required = config.check()?;

    let repository_id = RepositoryId {
        owner: required.owner.clone(),
        repository_name: required.repository_name.clone(),
    };
    let query = SearchQuery::for_discussions(&repository_id, &params.filter);
    info!("Searching discussions with query: {}", query);

    let variables = SearchVariable {
        query_str: query,
        first: params.first.unwrap_or(DEFAULT_PAGE_SIZE),
        content: params.content,
        cursor: params.cursor,
    };

    execute(
        required.executor,
        "DiscussionsSearch",
        discussions_search_query(),
        variables,
    )
    .await
}

async fn execute<E, T, R>(
    executor: &E,
    query_name: &str,
    query: String,
    variables: T,
) -> Result<R, DiscussionError>
where
    E: GraphQLExecutor,
    T: Serialize,
    R: for<'de> serde::Deserialize<'de>,
{
    let payload = GraphQLPayload {
        query: GraphQLQuery(query),
        variables: Some(variables),
    };

    let response: GraphQLResponse<R> = executor.execute_graphql(query_name, payload).await?;
    into_data(query_name, response)
}

/// GraphQL `errors` win over any partial `data`
fn into_data<R>(query_name: &str, response: GraphQLResponse<R>) -> Result<R, DiscussionError> {
    if let Some(errors) = response.errors.filter(|errors| !errors.is_empty()) {
        warn!("GraphQL {} returned {} error(s)", query_name, errors.len());
        return Err(DiscussionError::GraphQL {
            query_name: query_name.to_string(),
            errors,
        });
    }

    response.data.ok_or_else(|| DiscussionError::MissingData {
        query_name: query_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::graphql::graphql_types::GraphQLError;

    #[test]
    fn test_into_data_prefers_errors() {
        let response = GraphQLResponse {
            data: Some(1u8),
            errors: Some(vec![GraphQLError {
                message: "Something went wrong".to_string(),
                locations: Vec::new(),
                path: Vec::new(),
            }]),
        };

        let error = into_data("AllLabels", response).unwrap_err();
        assert!(matches!(error, DiscussionError::GraphQL { ref query_name, .. } if query_name == "AllLabels"));
    }

    #[test]
    fn test_into_data_ignores_empty_error_list() {
        let response = GraphQLResponse {
            data: Some(1u8),
            errors: Some(Vec::new()),
        };
        assert_eq!(into_data("AllLabels", response).unwrap(), 1);
    }

    #[test]
    fn test_into_data_without_data() {
        let response: GraphQLResponse<u8> = GraphQLResponse {
            data: None,
            errors: None,
        };
        assert!(matches!(
            into_data("AllLabels", response),
            Err(DiscussionError::MissingData { .. })
        ));
    }
}
