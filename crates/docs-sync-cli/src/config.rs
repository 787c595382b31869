use std::path::PathBuf;

/// Where the docs come from and where they land.
///
/// Everything is sourced from environment variables with built-in defaults;
/// there is no config file. The target directory is fixed relative to the
/// working directory.
#[derive(Debug, Clone)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    /// Directory path within the remote repository.
    pub docs_path: String,
    pub token: Option<String>,
    pub target_dir: PathBuf,
    pub extensions: Vec<String>,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults.
    /// Tests pass closures over maps instead of touching the environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            owner: lookup("REPO_OWNER").unwrap_or_else(|| "JacuXx".to_owned()),
            repo: lookup("REPO_NAME").unwrap_or_else(|| "Prompt-Copilot-Shopify".to_owned()),
            branch: lookup("REPO_BRANCH").unwrap_or_else(|| "main".to_owned()),
            docs_path: lookup("DOCS_PATH").unwrap_or_else(|| "docs/copilot".to_owned()),
            token: lookup("GITHUB_TOKEN").or_else(|| lookup("GH_TOKEN")),
            target_dir: PathBuf::from("docs/copilot"),
            extensions: vec![".md".to_owned()],
        }
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Browser URL of the repository, for user-facing messages.
    pub fn repo_url(&self) -> String {
        format!("https://github.com/{}/{}", self.owner, self.repo)
    }
}
