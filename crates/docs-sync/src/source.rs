use std::path::Path;

use crate::entry::RemoteEntry;

/// Errors from listing a remote directory.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    /// Non-2xx response from the listing endpoint, with whatever diagnostic
    /// the server supplied in its error body.
    #[error("remote listing failed with HTTP {status}: {}", .message.as_deref().unwrap_or("no further detail"))]
    Status {
        status: u16,
        message: Option<String>,
        documentation_url: Option<String>,
    },

    #[error("network error: {0}")]
    Network(String),

    /// The endpoint answered, but not with a directory listing (e.g. the
    /// path names a single file, which the contents API returns as an
    /// object instead of an array).
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl ListError {
    /// True for 404-class failures, where remediation hints (check the
    /// repository, branch, and path) are worth showing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}

/// Errors from downloading a single file.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("download returned HTTP {0}")]
    Status(u16),

    #[error("network error: {0}")]
    Network(String),

    #[error("too many redirects ({0} hops)")]
    TooManyRedirects(u32),

    #[error("redirect response missing a Location header")]
    MissingLocation,

    #[error("write failed: {0}")]
    Io(String),
}

/// A remote repository that can list a docs directory and hand over file
/// contents.
///
/// Implemented by the GitHub transport crate and by in-memory fakes in
/// tests; the sync orchestrator only ever talks to this trait.
#[async_trait::async_trait]
pub trait DocsSource: Send + Sync {
    /// Human-readable label identifying the repository (e.g. "owner/repo").
    fn label(&self) -> &str;

    /// List the entries directly under `path` on the remote.
    async fn list(&self, path: &str) -> Result<Vec<RemoteEntry>, ListError>;

    /// Download `url` into the local file at `dest`, creating or replacing
    /// it. A failed write must not leave a partial file behind.
    async fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError>;
}
