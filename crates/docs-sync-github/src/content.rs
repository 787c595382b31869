use docs_sync::{EntryKind, RemoteEntry};
use serde::Deserialize;

/// One item from GitHub's contents API.
/// `GET /repos/{owner}/{repo}/contents/{path}?ref={branch}`
#[derive(Debug, Deserialize)]
pub struct ContentEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub entry_type: String,
    pub download_url: Option<String>,
}

impl ContentEntry {
    pub fn into_remote(self) -> RemoteEntry {
        RemoteEntry {
            kind: EntryKind::parse(&self.entry_type),
            name: self.name,
            download_url: self.download_url,
        }
    }
}

/// Error body GitHub attaches to non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub documentation_url: Option<String>,
}
