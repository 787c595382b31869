use std::path::PathBuf;

use crate::entry::RemoteEntry;
use crate::feedback::Feedback;
use crate::filter::FileFilter;
use crate::policy::OverwritePolicy;
use crate::report::SyncReport;
use crate::source::{DocsSource, ListError};

/// Per-invocation sync parameters.
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Local directory the files land in. Created recursively if absent.
    pub target_dir: PathBuf,
    /// Directory path within the remote repository.
    pub remote_path: String,
    /// Overwrite files that already exist locally.
    pub force: bool,
}

/// Fatal, run-aborting failures.
///
/// Per-file download failures are not errors at this level; they are
/// recorded in the report and the run keeps going.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("failed to create {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    List(#[from] ListError),
}

/// Run one sync pass: list the remote directory, filter it, and bring the
/// surviving files into the target directory one at a time, in listing
/// order.
pub async fn sync(
    source: &dyn DocsSource,
    filter: &FileFilter,
    options: &SyncOptions,
) -> Result<SyncReport, SyncError> {
    std::fs::create_dir_all(&options.target_dir).map_err(|err| SyncError::CreateDir {
        path: options.target_dir.clone(),
        source: err,
    })?;

    let entries = source.list(&options.remote_path).await?;
    let files = filter.filter(entries);

    let policy = OverwritePolicy::for_force_flag(options.force);
    let mut report = SyncReport::new();
    report.feedback.push(Feedback::info(format!(
        "{} file(s) to sync from {}",
        files.len(),
        source.label()
    )));

    for entry in &files {
        process_entry(source, policy, options, entry, &mut report).await;
    }

    Ok(report)
}

async fn process_entry(
    source: &dyn DocsSource,
    policy: OverwritePolicy,
    options: &SyncOptions,
    entry: &RemoteEntry,
    report: &mut SyncReport,
) {
    let dest = options.target_dir.join(&entry.name);
    let exists = dest.exists();

    if !policy.should_sync(exists, options.force) {
        report.feedback.push(Feedback::warning(format!(
            "{} (already exists, use --force to overwrite)",
            entry.name
        )));
        report.record_skip();
        return;
    }

    // The filter only lets files through, and the contents API gives every
    // file a download URL; a missing one is still a per-file failure, not
    // a crash.
    let Some(url) = entry.download_url.as_deref() else {
        let message = "no download URL in listing";
        report
            .feedback
            .push(Feedback::error(format!("{} ({message})", entry.name)));
        report.record_failure(&entry.name, message);
        return;
    };

    match source.download(url, &dest).await {
        Ok(()) => {
            report.feedback.push(Feedback::info(format!(
                "{} ({})",
                entry.name,
                policy.status_label(exists)
            )));
            report.record_download();
        }
        Err(err) => {
            report
                .feedback
                .push(Feedback::error(format!("{} ({err})", entry.name)));
            report.record_failure(&entry.name, err.to_string());
        }
    }
}
