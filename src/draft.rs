//! Draft file generation
//!
//! The draft opens with a short greeting (ignored when parsed back, since it
//! precedes the first header) followed by one block per issue.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::issue::Issue;
use crate::status::DIRECTIVE_MARKER;

const GREETING: &str = "Hi,

This is the status update from me for the last week.

Cheers!
";

/// Body placed under every header until the user edits it. Left blank so an
/// untouched block parses to an empty comment.
pub const PLACEHOLDER: &str = "";

/// Turn a login such as "john.doe@example.com" into "John Doe"
pub fn display_name(username: &str) -> String {
    let local = username.split('@').next().unwrap_or_default();

    local
        .split('.')
        .filter(|part| !part.is_empty())
        .map(title_case)
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Render the full draft for the given issues
pub fn render(signature: &str, issues: &[Issue]) -> String {
    let mut out = format!("{}{}\n\n", GREETING, signature);

    for issue in issues {
        out.push_str(&render_block(issue));
    }

    out
}

fn render_block(issue: &Issue) -> String {
    format!(
        "[{key}]\n{m} Header: {summary}\n{m} Type: {kind}\n{m} Status: {status}\n{placeholder}\n\n",
        key = issue.key,
        m = DIRECTIVE_MARKER,
        summary = issue.summary,
        kind = issue.issue_type,
        status = issue.status,
        placeholder = PLACEHOLDER,
    )
}

/// Write the draft to `path`, replacing any existing file
pub fn write_to<P: AsRef<Path>>(path: P, signature: &str, issues: &[Issue]) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_into(file, signature, issues)?;
    tracing::debug!("wrote draft to {}", path.as_ref().display());
    Ok(())
}

/// Write the draft to a fresh temporary file that outlives the process
pub fn write_temp(signature: &str, issues: &[Issue]) -> Result<PathBuf> {
    let temp = tempfile::Builder::new()
        .prefix("jipdate-")
        .suffix(".txt")
        .tempfile()?;
    let (file, path) = temp.keep().map_err(|e| e.error)?;
    write_into(file, signature, issues)?;
    tracing::debug!("wrote draft to {}", path.display());
    Ok(path)
}

fn write_into(file: File, signature: &str, issues: &[Issue]) -> Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(render(signature, issues).as_bytes())?;
    writer.flush()?;
    Ok(())
}
