//! Error taxonomy for Contents API operations.

use thiserror::Error;

/// Everything that can go wrong talking to the Contents API.
///
/// `NotConnected` is raised before any request is issued when no client has
/// been constructed yet; the remaining variants carry enough context
/// (method, URL, server status/body) to show the user a useful message.
#[derive(Debug, Error)]
pub enum ContentsError {
    #[error("not connected to Jupyter Server")]
    NotConnected,

    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{method} {url} returned {status}: {body}")]
    Api {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },

    #[error("unexpected response from {url}: {reason}")]
    Malformed { url: String, reason: String },
}

impl ContentsError {
    /// True if the server answered with a 404 for the requested path.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api { status: 404, .. })
    }
}
