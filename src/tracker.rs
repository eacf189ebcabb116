use crate::error::Result;
use crate::issue::Issue;

/// Operations the tool needs from an issue tracker
pub trait Tracker {
    /// Run a JQL search and return matching issues in tracker order
    fn search_issues(&self, jql: &str) -> Result<Vec<Issue>>;

    /// Post a comment on the given issue
    fn add_comment(&self, issue_key: &str, body: &str) -> Result<()>;
}
