//! Process-wide singleton façade.
//!
//! Call [`auth`] once, then use the free functions. The configuration sits
//! behind a lock; `auth` swaps it in one write and each operation works on a
//! snapshot taken when it starts.

use std::sync::{PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::github::graphql::graphql_types::DiscussionsSearchResponse;
use crate::github::{DiscussionError, GitHubClient};
use crate::services::{
    self, AuthParams, CategoriesResponse, CategoryLookup, Configuration, DiscussionResponse,
    DiscussionsResponse, LabelsResponse,
};
use crate::types::{
    Owner, QueryByCategoryIdParams, QueryByCategoryNameParams, QueryByNumberParams,
    RepositoryName, SearchParams,
};

static CONFIG: Lazy<RwLock<Configuration<GitHubClient>>> =
    Lazy::new(|| RwLock::new(Configuration::new()));

fn snapshot() -> Configuration<GitHubClient> {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Authenticates the process-wide client, replacing any previous configuration
pub fn auth(params: AuthParams) -> Result<(), DiscussionError> {
    CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .auth(params)
}

pub fn is_authenticated() -> bool {
    CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .is_authenticated()
}

/// Installs an already built client, e.g. one pointing at GitHub Enterprise
pub fn configure(client: GitHubClient, owner: Owner, repository_name: RepositoryName) {
    CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .set(client, owner, repository_name);
}

pub async fn query_categories() -> Result<CategoriesResponse, DiscussionError> {
    services::query_categories(&snapshot()).await
}

pub async fn query_by_category_id(
    params: QueryByCategoryIdParams,
) -> Result<DiscussionsResponse, DiscussionError> {
    services::query_by_category_id(&snapshot(), params).await
}

pub async fn query_by_category_name(
    params: QueryByCategoryNameParams,
) -> Result<CategoryLookup, DiscussionError> {
    services::query_by_category_name(&snapshot(), params).await
}

pub async fn query_by_number(
    params: QueryByNumberParams,
) -> Result<DiscussionResponse, DiscussionError> {
    services::query_by_number(&snapshot(), params).await
}

pub async fn query_labels() -> Result<LabelsResponse, DiscussionError> {
    services::query_labels(&snapshot()).await
}

pub async fn search(params: SearchParams) -> Result<DiscussionsSearchResponse, DiscussionError> {
    services::search(&snapshot(), params).await
}
