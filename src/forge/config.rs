//! Configuration for the remote forge connection.
use secrecy::SecretString;

/// Page size for paginated commit-range queries.
pub const DEFAULT_PAGE_SIZE: u64 = 100;

/// Remote repository connection configuration for authenticating and
/// interacting with the forge API.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Repository owner.
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// API base URL (e.g., "https://api.github.com").
    pub api_base_url: String,
    /// Access token for authentication.
    pub token: SecretString,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            owner: "".to_string(),
            repo: "".to_string(),
            api_base_url: "https://api.github.com".to_string(),
            token: SecretString::from("".to_string()),
        }
    }
}
