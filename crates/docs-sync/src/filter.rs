use crate::entry::{EntryKind, RemoteEntry};

/// Selects the directory entries worth syncing.
///
/// Keeps regular files whose name ends with one of the allowed suffixes,
/// in listing order. Directories and files with other extensions drop out.
#[derive(Debug, Clone)]
pub struct FileFilter {
    allowed_suffixes: Vec<String>,
}

impl FileFilter {
    pub fn new<I, S>(allowed_suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_suffixes: allowed_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    /// Markdown files only.
    pub fn markdown() -> Self {
        Self::new([".md"])
    }

    pub fn filter(&self, entries: Vec<RemoteEntry>) -> Vec<RemoteEntry> {
        entries.into_iter().filter(|e| self.keeps(e)).collect()
    }

    fn keeps(&self, entry: &RemoteEntry) -> bool {
        entry.kind == EntryKind::File
            && self
                .allowed_suffixes
                .iter()
                .any(|suffix| entry.name.ends_with(suffix.as_str()))
    }
}

impl Default for FileFilter {
    fn default() -> Self {
        Self::markdown()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_markdown_files_and_drops_the_rest() {
        let entries = vec![
            RemoteEntry::file("a.md", "U1"),
            RemoteEntry::file("b.txt", "U2"),
            RemoteEntry {
                name: "c.md".into(),
                kind: EntryKind::Dir,
                download_url: Some("U3".into()),
            },
        ];

        let kept = FileFilter::markdown().filter(entries);

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "a.md");
    }

    #[test]
    fn preserves_listing_order() {
        let entries = vec![
            RemoteEntry::file("zebra.md", "U1"),
            RemoteEntry::file("skip.json", "U2"),
            RemoteEntry::file("apple.md", "U3"),
            RemoteEntry::file("middle.md", "U4"),
        ];

        let names: Vec<String> = FileFilter::markdown()
            .filter(entries)
            .into_iter()
            .map(|e| e.name)
            .collect();

        assert_eq!(names, ["zebra.md", "apple.md", "middle.md"]);
    }

    #[test]
    fn excludes_directories_even_with_matching_suffix() {
        let entries = vec![RemoteEntry::dir("notes.md")];
        assert!(FileFilter::markdown().filter(entries).is_empty());
    }

    #[test]
    fn multiple_suffixes() {
        let entries = vec![
            RemoteEntry::file("readme.md", "U1"),
            RemoteEntry::file("notes.markdown", "U2"),
            RemoteEntry::file("data.json", "U3"),
        ];

        let kept = FileFilter::new([".md", ".markdown"]).filter(entries);

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "readme.md");
        assert_eq!(kept[1].name, "notes.markdown");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(FileFilter::default().filter(vec![]).is_empty());
    }
}
