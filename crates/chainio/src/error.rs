//! Errors surfaced by chain data sources.
use thiserror::Error;
use url::Url;

/// A single read from the chain data source failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request for a block failed in transport or was rejected by the node.
    #[error("rpc request for block {height} failed: {reason}")]
    Rpc {
        /// Requested height
        height: u64,
        /// Transport or node error message
        reason: String,
    },
    /// The node does not know the block.
    #[error("block {0} not found")]
    NotFound(u64),
    /// Full transaction bodies were requested but only hashes came back.
    #[error("block {0} returned transaction hashes instead of bodies")]
    MissingBodies(u64),
    /// Reading the chain head failed.
    #[error("failed to read chain head: {0}")]
    Head(String),
}

/// The chain data source cannot be reached at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("chain data source unreachable at {endpoint}: {reason}")]
pub struct ConnectionUnavailable {
    /// Scheme and host of the endpoint. The path is dropped since it may hold
    /// an access credential.
    pub endpoint: String,
    /// Underlying failure
    pub reason: String,
}

impl ConnectionUnavailable {
    /// Build the error for `url`, keeping only its scheme and host.
    pub fn new(url: &Url, reason: &str) -> Self {
        Self { endpoint: redact(url), reason: scrub(reason, url) }
    }
}

/// `scheme://host[:port]` of `url`.
pub fn redact(url: &Url) -> String {
    let host = url.host_str().unwrap_or("<unknown>");
    match url.port() {
        Some(port) => format!("{}://{host}:{port}", url.scheme()),
        None => format!("{}://{host}", url.scheme()),
    }
}

/// Replace every occurrence of the full `url` in `message` by its redacted
/// form. HTTP client errors quote the request URL verbatim.
pub fn scrub(message: &str, url: &Url) -> String {
    message.replace(url.as_str(), &redact(url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_drops_credential_path() {
        let url = Url::parse("https://mainnet.infura.io/v3/abcdef1234567890").unwrap();
        let err = ConnectionUnavailable::new(&url, "timed out");
        assert_eq!(err.endpoint, "https://mainnet.infura.io");
        assert!(!err.to_string().contains("abcdef"));
    }

    #[test]
    fn scrub_removes_full_url_from_messages() {
        let url = Url::parse("https://mainnet.infura.io/v3/abcdef1234567890").unwrap();
        let message = format!("error sending request for url ({url})");
        assert_eq!(scrub(&message, &url), "error sending request for url (https://mainnet.infura.io)");
    }

    #[test]
    fn redact_keeps_explicit_port() {
        let url = Url::parse("http://127.0.0.1:8545/").unwrap();
        assert_eq!(redact(&url), "http://127.0.0.1:8545");
    }
}
