//! Configuration for Git forge platform connections.
use secrecy::SecretString;

/// Default GitHub REST API url.
pub const DEFAULT_API_URL: &str = "https://api.github.com";
/// Page size for pull request queries. A single page is always enough to
/// tell "none", "one" and "more than one" apart.
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Remote API connection configuration.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base url of the forge REST API (e.g. "https://api.github.com").
    pub api_url: String,
    /// Access token for authentication. Unauthenticated when absent.
    pub token: Option<SecretString>,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}
