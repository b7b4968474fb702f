use super::error::DiscussionError;
use super::graphql::graphql_types::{GraphQLPayload, GraphQLResponse};

use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use tokio::time::Duration;
use tracing::{debug, info};

/// Default request timeout applied to GitHub API calls
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Executes GraphQL documents against a GitHub-compatible endpoint.
///
/// Implementations return the raw response envelope; GraphQL `errors` are
/// interpreted by the caller. Retries, timeouts and cancellation are entirely
/// the implementation's business.
pub trait GraphQLExecutor {
    #[allow(async_fn_in_trait)]
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>, DiscussionError>;
}

/// GraphQL transport backed by octocrab
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient").finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Builds a client for api.github.com authenticated with a personal token
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self, DiscussionError> {
        Self::build(token, timeout, None)
    }

    /// Builds a client against another API root, such as GitHub Enterprise Server
    /// (`https://ghe.example.com/api`) or a local test server
    pub fn with_base_uri(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: &str,
    ) -> Result<Self, DiscussionError> {
        Self::build(token, timeout, Some(base_uri))
    }

    fn build(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: Option<&str>,
    ) -> Result<Self, DiscussionError> {
        let mut builder = Octocrab::builder();

        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri)?;
        }

        let timeout_duration = timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT);
        let connection_timeout = if timeout_duration < Duration::from_secs(10) {
            std::cmp::max(timeout_duration, Duration::from_secs(1))
        } else {
            Duration::from_secs(30)
        };

        let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));

        builder = builder
            .set_connect_timeout(Some(connection_timeout))
            .set_read_timeout(Some(read_write_timeout))
            .set_write_timeout(Some(read_write_timeout));

        let client = builder.build()?;

        Ok(Self { client })
    }
}

impl GraphQLExecutor for GitHubClient {
    async fn execute_graphql<T: Serialize, R: for<'de> Deserialize<'de>>(
        &self,
        query_name: &str,
        payload: GraphQLPayload<T>,
    ) -> Result<GraphQLResponse<R>, DiscussionError> {
        debug!(
            "Starting GraphQL {} request with variables: {}",
            query_name,
            serde_json::to_string(&payload.variables).unwrap_or_else(|_| "Invalid JSON".to_string())
        );

        let start_time = std::time::Instant::now();

        let response: GraphQLResponse<R> = self.client.graphql(&payload).await?;

        info!(
            "GraphQL {} request completed in {:?}",
            query_name,
            start_time.elapsed()
        );

        Ok(response)
    }
}
