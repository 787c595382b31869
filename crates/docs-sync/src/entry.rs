/// Classification of one item in a remote directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
}

impl EntryKind {
    /// Parse the `type` field of a contents-API item.
    ///
    /// Anything that is not a regular file (directories, but also symlinks
    /// and submodules) is treated as `Dir` and therefore never synced.
    pub fn parse(s: &str) -> Self {
        match s {
            "file" => Self::File,
            _ => Self::Dir,
        }
    }
}

/// One item from a remote directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteEntry {
    /// File or directory name, without any path components.
    pub name: String,
    pub kind: EntryKind,
    /// Direct download URL. The contents API leaves this null for
    /// directories.
    pub download_url: Option<String>,
}

impl RemoteEntry {
    /// Convenience constructor for a regular file entry.
    pub fn file(name: impl Into<String>, download_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            download_url: Some(download_url.into()),
        }
    }

    /// Convenience constructor for a directory entry.
    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Dir,
            download_url: None,
        }
    }
}
