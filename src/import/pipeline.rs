use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::ImportConfig;
use crate::error::{Error, Result};
use crate::github::IssueHost;
use crate::import::matcher::match_reviews;
use crate::models::{EligibleIssue, IssueRecord, Review};
use crate::spreadsheet;

/// Counts for the final log line. A failed run returns an error instead of
/// a partial report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportReport {
    pub matched: usize,
    pub added: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommentOutcome {
    Added,
    Skipped,
}

pub struct ImportPipeline {
    host: Arc<dyn IssueHost>,
    config: ImportConfig,
}

impl ImportPipeline {
    pub fn new(host: impl IssueHost + 'static, config: ImportConfig) -> Self {
        Self {
            host: Arc::new(host),
            config,
        }
    }

    /// Runs the whole import: reads the spreadsheet and lists issues
    /// concurrently, joins them by title, then posts comments with bounded
    /// concurrency. The first error from any stage fails the run.
    pub async fn run(&self) -> Result<ImportReport> {
        let (reviews, issues) = tokio::try_join!(
            load_reviews(self.config.spreadsheet.clone()),
            self.host.list_issues(&self.config.repo),
        )?;
        tracing::info!(
            "Loaded {} reviews and {} open issues",
            reviews.len(),
            issues.len()
        );

        self.import(reviews, issues).await
    }

    async fn import(
        &self,
        reviews: HashMap<String, Review>,
        issues: Vec<IssueRecord>,
    ) -> Result<ImportReport> {
        let eligible = match_reviews(issues, &reviews);
        let matched = eligible.len();
        tracing::info!("Adding comments for {} issues", matched);

        let pb = ProgressBar::new(matched as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} issues")
                .unwrap()
                .progress_chars("#>-"),
        );

        let outcomes: Vec<CommentOutcome> = stream::iter(eligible)
            .map(|issue| {
                let pb = pb.clone();
                async move {
                    let outcome = self.try_add_comment(&issue).await?;
                    pb.inc(1);
                    Ok::<_, Error>(outcome)
                }
            })
            .buffer_unordered(self.config.concurrency_limit)
            .try_collect()
            .await?;

        pb.finish_with_message("Comments imported");

        let added = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, CommentOutcome::Added))
            .count();

        Ok(ImportReport {
            matched,
            added,
            skipped: matched - added,
        })
    }

    /// Posts the rendered review unless the configured commenter already
    /// commented on the issue. An existing comment is a skip, not an error.
    async fn try_add_comment(&self, issue: &EligibleIssue) -> Result<CommentOutcome> {
        let comments = self
            .host
            .list_comments(&issue.issue.source, issue.issue.number)
            .await?;

        if comments
            .iter()
            .any(|comment| comment.user.login == self.config.commenter)
        {
            tracing::info!(
                "Ignoring comment on #{}, {}",
                issue.issue.number,
                issue.issue.title
            );
            return Ok(CommentOutcome::Skipped);
        }

        tracing::info!(
            "Adding comment on #{}, {}",
            issue.issue.number,
            issue.issue.title
        );
        self.host
            .create_comment(&issue.issue.source, issue.issue.number, &issue.comment)
            .await?;

        Ok(CommentOutcome::Added)
    }
}

async fn load_reviews(path: PathBuf) -> Result<HashMap<String, Review>> {
    tokio::task::spawn_blocking(move || spreadsheet::read_reviews(&path))
        .await
        .map_err(|e| Error::Parse(format!("spreadsheet reader task failed: {}", e)))?
}
