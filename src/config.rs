use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::RepoId;

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        Ok(Self { github_token })
    }
}

/// Everything one import run needs. Built once in `main`, never mutated.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    pub commenter: String,
    pub spreadsheet: PathBuf,
    pub repo: RepoId,
    pub concurrency_limit: usize,
    pub timeout_secs: u64,
}
