use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::{set_global_render_config, Text};

use crate::error::Result;
use crate::issue::{Issue, IssueComment};
use crate::publish::{Prompt, PublishResult};

pub const RULE: &str =
    "================================================================================";

const CUT_START: &str =
    "-- 8< --------------------------------------------------------------------------";
const CUT_END: &str =
    "-- >8 --------------------------------------------------------------------------";

/// Initialize the global render configuration for inquire prompts
pub fn init_render_config() {
    let mut style = RenderConfig::default_colored();
    style.prompt_prefix = Styled::new(">").with_fg(Color::LightGreen);
    set_global_render_config(style);
}

/// Interactive prompt reading answers from the terminal
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        Ok(Text::new(question).prompt()?)
    }
}

/// List the issues written to the draft
pub fn print_found_issues(issues: &[Issue]) {
    if issues.is_empty() {
        println!("{} No matching issues found.", ">".bright_green());
        return;
    }

    println!("{} Found issues:", ">".bright_green());
    for issue in issues {
        println!("  {} : {}", issue.key.bright_cyan(), issue.summary);
    }
}

/// Tell the user what to do after a query without the editor
pub fn print_draft_hint(path: &Path) {
    println!(
        "\n{} has been prepared with all of your open issues.\n\
         Manually edit the file, then re-run without '--query' to update your issues.",
        path.display().to_string().bright_cyan()
    );
}

/// Shown when the user declines the update: echo the untouched status file
pub fn print_declined<W: Write>(out: &mut W, original: &str) -> io::Result<()> {
    writeln!(out, "{} No change, nothing has been updated!", ">".bright_green())?;
    writeln!(out, "{}", RULE)?;
    write!(out, "{}", original)?;
    if !original.ends_with('\n') {
        writeln!(out)?;
    }
    writeln!(out, "{}", RULE)?;
    out.flush()
}

pub fn print_update<W: Write>(out: &mut W, issue_key: &str, comment: &str) -> io::Result<()> {
    writeln!(
        out,
        "{} Updating Jira issue: {} with comment:",
        ">".bright_green(),
        issue_key.bright_cyan()
    )?;
    writeln!(out, "{}", CUT_START)?;
    writeln!(out, "{}", comment)?;
    writeln!(out, "{}\n", CUT_END)
}

pub fn print_outcome<W: Write>(
    out: &mut W,
    issue_key: &str,
    error: Option<&str>,
) -> io::Result<()> {
    match error {
        None => writeln!(out, "{} Updated {}", "+".bright_green(), issue_key),
        Some(detail) => writeln!(out, "{} Update {} failed: {}", "x".red(), issue_key, detail),
    }
}

/// Shown instead of publishing when --dry-run is set
pub fn print_dry_run<W: Write>(out: &mut W, entries: &[IssueComment]) -> io::Result<()> {
    for entry in entries {
        print_update(out, &entry.issue_key, &entry.comment)?;
    }
    writeln!(
        out,
        "{} Dry run - {} comments not posted",
        ">".bright_green(),
        entries.len()
    )?;
    out.flush()
}

/// Final line after publishing, listing any failures again
pub fn print_summary<W: Write>(out: &mut W, results: &[PublishResult]) -> io::Result<()> {
    let failed: Vec<&PublishResult> = results.iter().filter(|r| !r.ok).collect();
    if failed.is_empty() {
        writeln!(
            out,
            "{} Successfully updated your Jira tickets! ({} comments)",
            ">".bright_green(),
            results.len()
        )?;
        return out.flush();
    }

    writeln!(
        out,
        "{} Updated {} of {} Jira tickets. Failed:",
        "x".red(),
        results.len() - failed.len(),
        results.len()
    )?;
    for result in failed {
        writeln!(
            out,
            "  {} {}",
            result.issue_key.bright_cyan(),
            result.error_detail.as_deref().unwrap_or("unknown error")
        )?;
    }
    out.flush()
}
