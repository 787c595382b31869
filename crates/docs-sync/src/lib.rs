pub mod entry;
pub mod feedback;
pub mod filter;
pub mod policy;
pub mod report;
pub mod source;
pub mod sync;

pub use entry::{EntryKind, RemoteEntry};
pub use feedback::Feedback;
pub use filter::FileFilter;
pub use policy::OverwritePolicy;
pub use report::{FileFailure, SyncOutcome, SyncReport};
pub use source::{DocsSource, FetchError, ListError};
pub use sync::{SyncError, SyncOptions, sync};
