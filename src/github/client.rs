use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};

use crate::error::{Error, Result};
use crate::github::host::IssueHost;
use crate::github::paginator::Paginator;
use crate::models::{Comment, Issue, IssueRecord, RepoId};

pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    pub fn new(token: &str, timeout_secs: u64) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", token))?,
        );
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            header::HeaderValue::from_static("2022-11-28"),
        );
        headers.insert(
            header::USER_AGENT,
            header::HeaderValue::from_static("cfpimport/0.1.0"),
        );

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: "https://api.github.com".to_string(),
        })
    }
}

#[async_trait]
impl IssueHost for GitHubClient {
    async fn list_issues(&self, repo: &RepoId) -> Result<Vec<IssueRecord>> {
        let url = format!(
            "{}/repos/{}/{}/issues?state=open",
            self.base_url, repo.owner, repo.name
        );
        tracing::info!("Reading issues | {}", repo);

        let paginator = Paginator::new(&self.client);
        let issues: Vec<Issue> = paginator
            .fetch_all(&url, 100)
            .await
            .map_err(|e| Error::List(format!("{}: {}", repo, e)))?;

        Ok(issues
            .into_iter()
            .map(|issue| IssueRecord::new(issue, repo.clone()))
            .collect())
    }

    async fn list_comments(&self, repo: &RepoId, number: u64) -> Result<Vec<Comment>> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base_url, repo.owner, repo.name, number
        );
        tracing::debug!("Fetching comments for #{}", number);

        let paginator = Paginator::new(&self.client);
        paginator
            .fetch_all(&url, 100)
            .await
            .map_err(|e| Error::Fetch(format!("#{}: {}", number, e)))
    }

    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()> {
        let url = format!(
            "{}/repos/{}/{}/issues/{}/comments",
            self.base_url, repo.owner, repo.name, number
        );

        let response = self
            .client
            .post(&url)
            .json(&serde_json::json!({ "body": body }))
            .send()
            .await
            .map_err(|e| Error::Create(format!("#{}: {}", number, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Create(format!("#{}: {} - {}", number, status, body)));
        }

        Ok(())
    }
}
