use std::path::PathBuf;

use clap::Parser;

use crate::error::{Error, Result};
use crate::fetch::IssueFilter;

/// Update Jira comments from a single status file
#[derive(Parser, Debug, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Gather the Jira issues assigned to you into the status file
    #[clap(short, long, value_parser, default_value_t = false)]
    pub query: bool,

    /// Edit the status file in $EDITOR before updating
    #[clap(short, long, value_parser, default_value_t = false)]
    pub editor: bool,

    /// Exclude stories from the query (requires --query)
    #[clap(short = 'x', long, value_parser, default_value_t = false)]
    pub exclude_stories: bool,

    /// Only query epics (requires --query)
    #[clap(long, value_parser, default_value_t = false)]
    pub epics_only: bool,

    /// Include every unresolved issue, not only those in progress (requires --query)
    #[clap(short, long, value_parser, default_value_t = false)]
    pub all_statuses: bool,

    /// Status file to write or read
    #[clap(short, long, value_parser)]
    pub file: Option<PathBuf>,

    /// Jira server URL
    #[clap(long, value_parser, env = "JIRA_SERVER")]
    pub server: Option<String>,

    /// Configuration file (defaults to ~/.config/jipdate/config.yaml)
    #[clap(long, value_parser)]
    pub config: Option<PathBuf>,

    /// Show what would be posted without updating Jira
    #[clap(short, long, value_parser, default_value_t = false)]
    pub dry_run: bool,

    /// Enable debug logging
    #[clap(short, long, value_parser, default_value_t = false)]
    pub verbose: bool,
}

impl Args {
    /// Reject flags that only make sense together with --query
    pub fn validate(&self) -> Result<()> {
        if self.query {
            return Ok(());
        }

        let misplaced = [
            (self.exclude_stories, "--exclude-stories"),
            (self.epics_only, "--epics-only"),
            (self.all_statuses, "--all-statuses"),
        ];

        match misplaced.iter().find(|(set, _)| *set) {
            Some((_, flag)) => Err(Error::InvalidArguments(format!(
                "'{}' can only be used together with '--query'",
                flag
            ))),
            None => Ok(()),
        }
    }

    pub fn filter(&self) -> IssueFilter {
        IssueFilter {
            exclude_stories: self.exclude_stories,
            epics_only: self.epics_only,
            all_statuses: self.all_statuses,
        }
    }
}
