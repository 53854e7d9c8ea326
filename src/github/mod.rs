pub mod client;
pub mod host;
pub mod paginator;

pub use client::GitHubClient;
pub use host::IssueHost;
pub use paginator::Paginator;
