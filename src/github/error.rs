use thiserror::Error;

use super::graphql::graphql_types::GraphQLError;

/// Errors returned by the discussion operations.
///
/// Only `NotAuthenticated` originates locally; everything else comes from the
/// transport and is passed through without retries.
#[derive(Debug, Error)]
pub enum DiscussionError {
    /// The configuration has not been populated by `auth`
    #[error("Please call auth() first to configure the client")]
    NotAuthenticated,

    /// Network, HTTP or authorization failure reported by octocrab
    #[error("GitHub transport error: {0}")]
    Transport(#[from] octocrab::Error),

    /// The GraphQL endpoint answered with an `errors` array
    #[error("GraphQL error in {query_name}: {}", join_messages(.errors))]
    GraphQL {
        query_name: String,
        errors: Vec<GraphQLError>,
    },

    /// The response carried neither `data` nor `errors`
    #[error("No data in GraphQL {query_name} response")]
    MissingData { query_name: String },
}

impl DiscussionError {
    pub fn is_not_authenticated(&self) -> bool {
        matches!(self, Self::NotAuthenticated)
    }
}

fn join_messages(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
