use std::path::Path;

use docs_sync::{DocsSource, FetchError, ListError, RemoteEntry};
use reqwest::StatusCode;
use reqwest::header::LOCATION;

use crate::content::{ApiErrorBody, ContentEntry};

const USER_AGENT: &str = "docs-sync";
const ACCEPT: &str = "application/vnd.github.v3+json";

/// Redirect chains longer than this abort the download.
const MAX_REDIRECT_HOPS: u32 = 5;

/// Configuration for a GitHub-hosted docs directory.
#[derive(Debug, Clone)]
pub struct GitHubDocsConfig {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub token: Option<String>,
    pub api_base_url: Option<String>,
}

/// Talks to the GitHub contents API for directory listings and downloads
/// files through the URLs the listing hands out.
pub struct GitHubDocsClient {
    config: GitHubDocsConfig,
    client: reqwest::Client,
    label: String,
}

impl GitHubDocsClient {
    pub fn new(config: GitHubDocsConfig) -> Self {
        // Redirects are followed by hand in `download` so the auth header
        // survives every hop; reqwest's built-in policy strips it when a
        // redirect crosses origins.
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("TLS backend initialization");

        let label = format!("{}/{}", config.owner, config.repo);

        Self {
            config,
            client,
            label,
        }
    }

    fn api_base(&self) -> &str {
        self.config
            .api_base_url
            .as_deref()
            .unwrap_or("https://api.github.com")
    }

    fn get(&self, url: &str) -> reqwest::RequestBuilder {
        let mut req = self
            .client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", ACCEPT);

        if let Some(token) = &self.config.token {
            req = req.header("Authorization", format!("token {token}"));
        }

        req
    }

    async fn list_contents(&self, path: &str) -> Result<Vec<RemoteEntry>, ListError> {
        let url = format!(
            "{}/repos/{}/{}/contents/{}?ref={}",
            self.api_base(),
            self.config.owner,
            self.config.repo,
            path,
            self.config.branch,
        );

        let response = self
            .get(&url)
            .send()
            .await
            .map_err(|e| ListError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ListError::Network(e.to_string()))?;

        if !status.is_success() {
            let detail: ApiErrorBody = serde_json::from_str(&body).unwrap_or_default();
            return Err(ListError::Status {
                status: status.as_u16(),
                message: detail.message,
                documentation_url: detail.documentation_url,
            });
        }

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|e| ListError::UnexpectedResponse(e.to_string()))?;

        // The contents API answers with an object when the path names a
        // single file. Only an array is a directory listing.
        if !value.is_array() {
            return Err(ListError::UnexpectedResponse(
                "expected a directory listing, got a single object".into(),
            ));
        }

        let entries: Vec<ContentEntry> = serde_json::from_value(value)
            .map_err(|e| ListError::UnexpectedResponse(e.to_string()))?;

        Ok(entries.into_iter().map(ContentEntry::into_remote).collect())
    }

    async fn download_to(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        let mut url = url.to_owned();

        for _ in 0..MAX_REDIRECT_HOPS {
            let response = self
                .get(&url)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            let status = response.status();

            if status == StatusCode::MOVED_PERMANENTLY || status == StatusCode::FOUND {
                url = response
                    .headers()
                    .get(LOCATION)
                    .and_then(|v| v.to_str().ok())
                    .ok_or(FetchError::MissingLocation)?
                    .to_owned();
                continue;
            }

            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;

            if let Err(err) = std::fs::write(dest, &bytes) {
                // A truncated file must not pass the next run's existence
                // check as already synced.
                let _ = std::fs::remove_file(dest);
                return Err(FetchError::Io(err.to_string()));
            }

            return Ok(());
        }

        Err(FetchError::TooManyRedirects(MAX_REDIRECT_HOPS))
    }
}

#[async_trait::async_trait]
impl DocsSource for GitHubDocsClient {
    fn label(&self) -> &str {
        &self.label
    }

    async fn list(&self, path: &str) -> Result<Vec<RemoteEntry>, ListError> {
        self.list_contents(path).await
    }

    async fn download(&self, url: &str, dest: &Path) -> Result<(), FetchError> {
        self.download_to(url, dest).await
    }
}
