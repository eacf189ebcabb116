//! Issue records exchanged between the tracker, the draft file and the publisher.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::Error;

lazy_static! {
    static ref KEY_PATTERN: Regex = Regex::new(r"^[A-Z]+-[0-9]+$").unwrap();
}

/// Returns true if `key` looks like a Jira issue key (e.g. "SWG-28")
pub fn is_valid_key(key: &str) -> bool {
    KEY_PATTERN.is_match(key)
}

/// The kinds of work items the tool knows how to report on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueType {
    Epic,
    Initiative,
    Story,
}

impl IssueType {
    /// Name as used by Jira in JQL and in issue payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueType::Epic => "Epic",
            IssueType::Initiative => "Initiative",
            IssueType::Story => "Story",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Epic" => Ok(IssueType::Epic),
            "Initiative" => Ok(IssueType::Initiative),
            "Story" => Ok(IssueType::Story),
            other => Err(Error::InvalidIssue(format!("unsupported issue type '{}'", other))),
        }
    }
}

/// A validated issue as returned by the tracker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    /// The issue key (e.g., "SWG-28")
    pub key: String,
    /// The issue title
    pub summary: String,
    pub issue_type: IssueType,
    /// Workflow status name (e.g., "In Progress")
    pub status: String,
}

impl Issue {
    /// Builds an issue, rejecting keys that would not survive a trip through the draft file
    pub fn new(
        key: impl Into<String>,
        summary: impl Into<String>,
        issue_type: IssueType,
        status: impl Into<String>,
    ) -> Result<Self, Error> {
        let key = key.into();
        if !is_valid_key(&key) {
            return Err(Error::InvalidIssue(format!("malformed issue key '{}'", key)));
        }

        Ok(Self {
            key,
            summary: summary.into(),
            issue_type,
            status: status.into(),
        })
    }
}

/// One comment to post, as parsed from the draft file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    pub issue_key: String,
    pub comment: String,
}

impl IssueComment {
    pub fn new(issue_key: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            issue_key: issue_key.into(),
            comment: comment.into(),
        }
    }
}
