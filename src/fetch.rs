//! Issue lookup: turns the command-line filter flags into a JQL search.

use crate::error::Result;
use crate::issue::{Issue, IssueType};
use crate::tracker::Tracker;

/// Which of the user's issues to include in the draft
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IssueFilter {
    pub exclude_stories: bool,
    pub epics_only: bool,
    pub all_statuses: bool,
}

impl IssueFilter {
    /// Issue types to search for. Epics are always included.
    pub fn issue_types(&self) -> Vec<IssueType> {
        let mut types = vec![IssueType::Epic];

        if self.epics_only {
            return types;
        }

        types.push(IssueType::Initiative);
        if !self.exclude_stories {
            types.push(IssueType::Story);
        }

        types
    }

    /// JQL restricted to issues assigned to the authenticated user
    pub fn to_jql(&self) -> String {
        let types = self
            .issue_types()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let status = if self.all_statuses {
            "status not in (Resolved, Closed)"
        } else {
            "status = \"In Progress\""
        };

        format!(
            "issuetype in ({}) AND assignee = currentUser() AND {}",
            types, status
        )
    }
}

/// Search the tracker for the issues matching `filter`
pub fn fetch<T: Tracker + ?Sized>(tracker: &T, filter: &IssueFilter) -> Result<Vec<Issue>> {
    let jql = filter.to_jql();
    tracing::info!("fetching issues with: {}", jql);

    let issues = tracker.search_issues(&jql)?;
    tracing::info!("found {} issues", issues.len());

    Ok(issues)
}
