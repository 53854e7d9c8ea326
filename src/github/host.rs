use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Comment, IssueRecord, RepoId};

/// The three issue-tracker operations the importer depends on.
#[async_trait]
pub trait IssueHost: Send + Sync {
    async fn list_issues(&self, repo: &RepoId) -> Result<Vec<IssueRecord>>;
    async fn list_comments(&self, repo: &RepoId, number: u64) -> Result<Vec<Comment>>;
    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()>;
}
