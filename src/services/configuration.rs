use crate::github::{DiscussionError, GitHubClient};
use crate::types::{Owner, RepositoryName};

/// Credentials and target coordinates passed to `auth`
#[derive(Clone)]
pub struct AuthParams {
    pub token: String,
    pub owner: Owner,
    pub repository_name: RepositoryName,
    /// API root other than api.github.com, e.g. `https://ghe.example.com/api`
    pub base_uri: Option<String>,
}

impl AuthParams {
    pub fn new<O: Into<Owner>, N: Into<RepositoryName>>(
        token: impl Into<String>,
        owner: O,
        repository_name: N,
    ) -> Self {
        Self {
            token: token.into(),
            owner: owner.into(),
            repository_name: repository_name.into(),
            base_uri: None,
        }
    }

    pub fn with_base_uri(mut self, base_uri: impl Into<String>) -> Self {
        self.base_uri = Some(base_uri.into());
        self
    }
}

impl std::fmt::Debug for AuthParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthParams")
            .field("token", &"<redacted>")
            .field("owner", &self.owner)
            .field("repository_name", &self.repository_name)
            .field("base_uri", &self.base_uri)
            .finish()
    }
}

/// Transport plus repository coordinates every operation runs against.
///
/// Either all fields are set or none is: the only mutators replace the whole
/// record at once.
#[derive(Debug, Clone)]
pub struct Configuration<E> {
    executor: Option<E>,
    owner: Option<Owner>,
    repository_name: Option<RepositoryName>,
}

/// Borrowed view of a populated configuration
#[derive(Debug, Clone, Copy)]
pub struct RequiredConfiguration<'a, E> {
    pub executor: &'a E,
    pub owner: &'a Owner,
    pub repository_name: &'a RepositoryName,
}

impl<E> Default for Configuration<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Configuration<E> {
    /// A fresh, unauthenticated configuration
    pub const fn new() -> Self {
        Self {
            executor: None,
            owner: None,
            repository_name: None,
        }
    }

    /// Replaces the whole configuration with the given transport and coordinates
    pub fn set(&mut self, executor: E, owner: Owner, repository_name: RepositoryName) {
        *self = Self {
            executor: Some(executor),
            owner: Some(owner),
            repository_name: Some(repository_name),
        };
    }

    pub fn is_authenticated(&self) -> bool {
        self.check().is_ok()
    }

    /// Fails with `NotAuthenticated` unless every field is populated
    pub fn check(&self) -> Result<RequiredConfiguration<'_, E>, DiscussionError> {
        match (&self.executor, &self.owner, &self.repository_name) {
            (Some(executor), Some(owner), Some(repository_name)) => Ok(RequiredConfiguration {
                executor,
                owner,
                repository_name,
            }),
            _ => Err(DiscussionError::NotAuthenticated),
        }
    }
}

impl Configuration<GitHubClient> {
    /// Builds a token-authenticated GitHub client and stores it with the
    /// repository coordinates. A failed build leaves the configuration unchanged.
    pub fn auth(&mut self, params: AuthParams) -> Result<(), DiscussionError> {
        let client = match params.base_uri.as_deref() {
            Some(base_uri) => GitHubClient::with_base_uri(Some(params.token), None, base_uri)?,
            None => GitHubClient::new(Some(params.token), None)?,
        };
        tracing::debug!(
            "Configured GitHub client for {}/{}",
            params.owner,
            params.repository_name
        );
        self.set(client, params.owner, params.repository_name);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_configuration_is_not_authenticated() {
        let config: Configuration<()> = Configuration::new();
        assert!(!config.is_authenticated());
        assert!(matches!(
            config.check(),
            Err(DiscussionError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_set_populates_every_field() {
        let mut config = Configuration::new();
        config.set(42u8, Owner::from("acme"), RepositoryName::from("widgets"));

        let required = config.check().unwrap();
        assert_eq!(*required.executor, 42);
        assert_eq!(required.owner.as_str(), "acme");
        assert_eq!(required.repository_name.as_str(), "widgets");
    }

    #[test]
    fn test_set_replaces_previous_configuration() {
        let mut config = Configuration::new();
        config.set(1u8, Owner::from("acme"), RepositoryName::from("widgets"));
        config.set(2u8, Owner::from("globex"), RepositoryName::from("gadgets"));

        let required = config.check().unwrap();
        assert_eq!(*required.executor, 2);
        assert_eq!(required.owner.as_str(), "globex");
        assert_eq!(required.repository_name.as_str(), "gadgets");
    }

    #[test]
    fn test_auth_params_debug_hides_token() {
        let params = AuthParams::new("ghp_secret", "acme", "widgets");
        let debug = format!("{:?}", params);
        assert!(!debug.contains("ghp_secret"));
        assert!(debug.contains("acme"));
    }

    #[test]
    fn test_auth_with_invalid_base_uri_keeps_previous_configuration() {
        let mut config: Configuration<GitHubClient> = Configuration::new();
        let params = AuthParams::new("ghp_secret", "acme", "widgets").with_base_uri("not a uri");

        assert!(config.auth(params).is_err());
        assert!(!config.is_authenticated());
    }
}
