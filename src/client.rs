//! Object-style façade over the discussion operations.

use std::sync::{PoisonError, RwLock};

use crate::github::graphql::graphql_types::DiscussionsSearchResponse;
use crate::github::{DiscussionError, GitHubClient, GraphQLExecutor};
use crate::services::{
    self, AuthParams, CategoriesResponse, CategoryLookup, Configuration, DiscussionResponse,
    DiscussionsResponse, LabelsResponse,
};
use crate::types::{
    Owner, QueryByCategoryIdParams, QueryByCategoryNameParams, QueryByNumberParams,
    RepositoryName, SearchParams,
};

/// A discussions client bound to one repository.
///
/// Each call takes a snapshot of the configuration when it starts, so a
/// concurrent `auth` is observed either completely or not at all.
///
/// ```rust,no_run
/// use github_discussions::{AuthParams, DiscussionsClient};
/// use github_discussions::types::SearchParams;
///
/// # async fn example() -> Result<(), github_discussions::DiscussionError> {
/// let client = DiscussionsClient::new(AuthParams::new("ghp_token", "acme", "widgets"))?;
/// let page = client.search(SearchParams::query("performance")).await?;
/// for discussion in page.discussions() {
///     println!("#{} {}", discussion.number, discussion.title);
/// }
/// # Ok(())
/// # }
/// ```
pub struct DiscussionsClient<E = GitHubClient> {
    config: RwLock<Configuration<E>>,
}

impl DiscussionsClient<GitHubClient> {
    pub fn new(params: AuthParams) -> Result<Self, DiscussionError> {
        let client = Self::default();
        client.auth(params)?;
        Ok(client)
    }

    /// Re-authenticates, replacing the transport and repository coordinates
    pub fn auth(&self, params: AuthParams) -> Result<(), DiscussionError> {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .auth(params)
    }
}

impl<E> DiscussionsClient<E> {
    /// Whether a transport and repository are configured
    pub fn is_authenticated(&self) -> bool {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_authenticated()
    }
}

impl<E: GraphQLExecutor + Clone> DiscussionsClient<E> {
    /// Builds a client around an already configured transport
    pub fn with_executor(executor: E, owner: Owner, repository_name: RepositoryName) -> Self {
        let mut config = Configuration::new();
        config.set(executor, owner, repository_name);
        Self {
            config: RwLock::new(config),
        }
    }

    pub fn set_executor(&self, executor: E, owner: Owner, repository_name: RepositoryName) {
        self.config
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .set(executor, owner, repository_name);
    }

    fn snapshot(&self) -> Configuration<E> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub async fn query_categories(&self) -> Result<CategoriesResponse, DiscussionError> {
        services::query_categories(&self.snapshot()).await
    }

    pub async fn query_by_category_id(
        &self,
        params: QueryByCategoryIdParams,
    ) -> Result<DiscussionsResponse, DiscussionError> {
        services::query_by_category_id(&self.snapshot(), params).await
    }

    pub async fn query_by_category_name(
        &self,
        params: QueryByCategoryNameParams,
    ) -> Result<CategoryLookup, DiscussionError> {
        services::query_by_category_name(&self.snapshot(), params).await
    }

    pub async fn query_by_number(
        &self,
        params: QueryByNumberParams,
    ) -> Result<DiscussionResponse, DiscussionError> {
        services::query_by_number(&self.snapshot(), params).await
    }

    pub async fn query_labels(&self) -> Result<LabelsResponse, DiscussionError> {
        services::query_labels(&self.snapshot()).await
    }

    pub async fn search(
        &self,
        params: SearchParams,
    ) -> Result<DiscussionsSearchResponse, DiscussionError> {
        services::search(&self.snapshot(), params).await
    }
}

impl<E> Default for DiscussionsClient<E> {
    /// An unauthenticated client; every operation fails until a transport is set
    fn default() -> Self {
        Self {
            config: RwLock::new(Configuration::new()),
        }
    }
}
