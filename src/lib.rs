//! # jipdate
//!
//! Batch-update Jira issue comments from a single locally edited status file.

pub mod app;
pub mod cli;
pub mod config;
pub mod draft;
pub mod editor;
pub mod error;
pub mod fetch;
pub mod issue;
pub mod jira;
pub mod logging;
pub mod publish;
pub mod status;
pub mod tracker;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use issue::{Issue, IssueComment, IssueType};
pub use tracker::Tracker;
