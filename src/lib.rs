pub mod config;
pub mod error;
pub mod models;
pub mod spreadsheet;
pub mod github;
pub mod import;

pub use config::{Config, ImportConfig};
pub use error::{Error, Result};
pub use github::{GitHubClient, IssueHost};
pub use import::{ImportPipeline, ImportReport};
