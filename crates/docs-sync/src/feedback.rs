/// A presentable message produced while syncing.
///
/// The library never prints. Messages accumulate in the sync report in the
/// order they happened and the caller decides where each level goes (the
/// CLI sends info to stdout, warnings and errors to stderr).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Info(String),
    Warning(String),
    Error(String),
}

impl Feedback {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn warning(msg: impl Into<String>) -> Self {
        Self::Warning(msg.into())
    }

    pub fn error(msg: impl Into<String>) -> Self {
        Self::Error(msg.into())
    }

    pub fn is_info(&self) -> bool {
        matches!(self, Self::Info(_))
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Info(msg) | Self::Warning(msg) | Self::Error(msg) => msg,
        }
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info(msg) => write!(f, "{msg}"),
            Self::Warning(msg) => write!(f, "warning: {msg}"),
            Self::Error(msg) => write!(f, "error: {msg}"),
        }
    }
}
