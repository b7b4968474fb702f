/// Object-style client bound to a single repository
pub mod client;

/// Markdown rendering of discussions, categories and labels for terminal output
pub mod formatter;

/// GitHub GraphQL transport, query documents and response types
pub mod github;

/// Process-wide singleton façade with free functions
pub mod global;

/// Configuration store and the discussion operation set shared by both façades
pub mod services;

/// Core type definitions used throughout the library
pub mod types;

pub use client::DiscussionsClient;
pub use github::{DiscussionError, GitHubClient, GraphQLExecutor};
pub use services::{AuthParams, CategoryLookup, Configuration};
