use std::io;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::cli::Args;
use crate::config::Config;
use crate::draft;
use crate::editor;
use crate::error::{Error, Result};
use crate::fetch;
use crate::issue::IssueComment;
use crate::jira::JiraClient;
use crate::publish::{self, Prompt, PublishResult};
use crate::status;
use crate::tracker::Tracker;
use crate::ui;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Issues were written to the draft for the user to edit
    DraftWritten(PathBuf),
    /// The status file contained no issue headers
    NothingToUpdate,
    /// The user answered "n"
    Declined,
    /// --dry-run: the entries were shown but never sent
    DryRun(Vec<IssueComment>),
    /// Comments were posted; individual failures are recorded per issue
    Published(Vec<PublishResult>),
}

/// Main application entry point
pub fn run(args: Args) -> Result<Outcome> {
    args.validate()?;
    ui::init_render_config();

    let config = Config::load(&args)?;
    let editor = if args.editor {
        Some(editor::from_env()?)
    } else {
        None
    };
    let client = JiraClient::new(&config.server, config.credentials.clone())?;

    run_with(
        &args,
        &config,
        editor.as_deref(),
        &client,
        &mut ui::TerminalPrompt,
    )
}

/// Run the pipeline against an explicit tracker and prompt
pub fn run_with<T, P>(
    args: &Args,
    config: &Config,
    editor: Option<&Path>,
    tracker: &T,
    prompt: &mut P,
) -> Result<Outcome>
where
    T: Tracker + ?Sized,
    P: Prompt + ?Sized,
{
    let mut path = config.file.clone();

    if args.query {
        let issues = fetch::fetch(tracker, &args.filter())?;
        ui::print_found_issues(&issues);

        match (editor, &args.file) {
            (Some(_), None) => path = draft::write_temp(&config.signature, &issues)?,
            (Some(_), Some(_)) => draft::write_to(&path, &config.signature, &issues)?,
            (None, _) => {
                draft::write_to(&path, &config.signature, &issues)?;
                ui::print_draft_hint(&path);
                return Ok(Outcome::DraftWritten(path));
            }
        }
    }

    if let Some(editor) = editor {
        editor::open(editor, &path)?;
    }

    update_from_file(&path, config, tracker, prompt)
}

/// Parse the status file, confirm with the user and post the comments
pub fn update_from_file<T, P>(
    path: &Path,
    config: &Config,
    tracker: &T,
    prompt: &mut P,
) -> Result<Outcome>
where
    T: Tracker + ?Sized,
    P: Prompt + ?Sized,
{
    if !path.exists() {
        return Err(Error::Config(format!(
            "status file {} not found (run with --query to create it)",
            path.display()
        )));
    }

    let contents = std::fs::read_to_string(path)?;
    let entries = status::parse_str(&contents);
    tracing::info!("parsed {} entries from {}", entries.len(), path.display());

    if entries.is_empty() {
        println!(
            "{} No issues found in {}, nothing to update.",
            ">".bright_green(),
            path.display()
        );
        return Ok(Outcome::NothingToUpdate);
    }

    let mut out = io::stdout();

    if !publish::confirm(&entries, prompt, &mut out)? {
        ui::print_declined(&mut out, &contents)?;
        return Ok(Outcome::Declined);
    }

    if config.dry_run {
        ui::print_dry_run(&mut out, &entries)?;
        return Ok(Outcome::DryRun(entries));
    }

    let results = publish::publish(tracker, &entries, &mut out)?;
    ui::print_summary(&mut out, &results)?;

    Ok(Outcome::Published(results))
}
