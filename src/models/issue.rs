use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::review::Review;
use crate::error::Error;

/// Repository coordinates in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for RepoId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name)) if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(Error::Config(format!(
                "repository must be owner/name, got {:?}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: u64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A listed issue tagged with the repository it came from.
#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub number: u64,
    pub title: String,
    pub source: RepoId,
}

impl IssueRecord {
    pub fn new(issue: Issue, source: RepoId) -> Self {
        Self {
            number: issue.number,
            title: issue.title,
            source,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub body: String,
    pub user: CommentAuthor,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentAuthor {
    pub login: String,
}

/// An issue whose title matched a review, carrying the pre-rendered comment.
#[derive(Debug, Clone)]
pub struct EligibleIssue {
    pub issue: IssueRecord,
    pub review: Review,
    pub comment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_id_parses_owner_and_name() {
        let repo: RepoId = "empirejs/empirejs-cfp-2015".parse().unwrap();
        assert_eq!(repo.owner, "empirejs");
        assert_eq!(repo.name, "empirejs-cfp-2015");
    }

    #[test]
    fn test_repo_id_rejects_malformed_input() {
        assert!("empirejs".parse::<RepoId>().is_err());
        assert!("/cfp".parse::<RepoId>().is_err());
        assert!("empirejs/".parse::<RepoId>().is_err());
    }
}
