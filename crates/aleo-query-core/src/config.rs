use reqwest::Url;

use crate::error::QueryError;

/// Public Aleo API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://vm.aleo.org/api";

/// Network served by [`DEFAULT_ENDPOINT`].
pub const DEFAULT_NETWORK: &str = "testnet3";

/// Immutable endpoint configuration owned by a single client.
///
/// Both parts are validated once in [`ClientConfig::new`] and never touched
/// again, so several clients pointed at different nodes can coexist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    network: String,
}

impl ClientConfig {
    /// Validate a base URL and network name.
    ///
    /// The base must be an absolute `http://` or `https://` URL; a trailing
    /// `/` is dropped so that `{base}/{network}` never doubles the separator.
    /// The network must be a single non-empty path segment.
    pub fn new(base_url: &str, network: &str) -> Result<Self, QueryError> {
        let base_url = parse_base_url(base_url)?;

        let network = network.trim();
        if network.is_empty() {
            return Err(QueryError::InvalidConfig(
                "network name must not be empty".to_owned(),
            ));
        }
        if network.contains('/') {
            return Err(QueryError::InvalidConfig(format!(
                "network name `{network}` must be a single path segment"
            )));
        }

        Ok(Self {
            base_url,
            network: network.to_owned(),
        })
    }

    pub fn testnet3() -> Self {
        Self {
            base_url: DEFAULT_ENDPOINT.to_owned(),
            network: DEFAULT_NETWORK.to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn network(&self) -> &str {
        &self.network
    }

    /// `{base}/{network}`, the prefix every endpoint path is appended to.
    pub fn root(&self) -> String {
        format!("{}/{}", self.base_url, self.network)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::testnet3()
    }
}

fn parse_base_url(base_url: &str) -> Result<String, QueryError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(QueryError::InvalidConfig(
            "base URL must not be empty".to_owned(),
        ));
    }

    let parsed = Url::parse(trimmed).map_err(|e| {
        QueryError::InvalidConfig(format!(
            "invalid base URL `{trimmed}`: expected HTTP(S) URL ({e})"
        ))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_owned()),
        other => Err(QueryError::InvalidConfig(format!(
            "unsupported base URL scheme `{other}`; expected http or https"
        ))),
    }
}
