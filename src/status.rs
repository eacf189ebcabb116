//! Status file parsing
//!
//! Turns a hand-edited draft into the list of comments to post. A draft is a
//! sequence of blocks, each opened by a header line of the exact form
//! `[KEY-123]`. Lines starting with `#` are directives and never end up in a
//! comment. Anything before the first header is ignored.

use lazy_static::lazy_static;
use regex::Regex;

use crate::issue::IssueComment;

lazy_static! {
    static ref HEADER: Regex = Regex::new(r"^\[([A-Z]+-[0-9]+)\]\n?$").unwrap();
}

/// Marker starting a line that is never part of a comment
pub const DIRECTIVE_MARKER: char = '#';

/// Classification of a single draft line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftLine<'a> {
    /// `[KEY]` on its own line
    IssueHeader(&'a str),
    /// A `#` line
    Directive,
    /// Anything else, without its trailing newline
    Body(&'a str),
}

impl<'a> DraftLine<'a> {
    /// Classify one line. A trailing `\n` is allowed and ignored.
    pub fn classify(line: &'a str) -> Self {
        if let Some(caps) = HEADER.captures(line) {
            if let Some(key) = caps.get(1) {
                return DraftLine::IssueHeader(key.as_str());
            }
        }

        if line.starts_with(DIRECTIVE_MARKER) {
            return DraftLine::Directive;
        }

        DraftLine::Body(line.strip_suffix('\n').unwrap_or(line))
    }
}

/// Parse draft lines into one comment per header, in file order.
///
/// Repeated headers for the same key produce separate entries. Blank lines at
/// either end of a comment are dropped; blank lines inside it are kept.
pub fn parse<I, S>(lines: I) -> Vec<IssueComment>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut entries: Vec<(String, String)> = Vec::new();

    for line in lines {
        match DraftLine::classify(line.as_ref()) {
            DraftLine::IssueHeader(key) => {
                tracing::debug!("found header for {}", key);
                entries.push((key.to_string(), String::new()));
            }
            DraftLine::Directive => {}
            DraftLine::Body(text) => match entries.last_mut() {
                Some((_, body)) => {
                    body.push_str(text);
                    body.push('\n');
                }
                None => tracing::debug!("dropping text before first header: {:?}", text),
            },
        }
    }

    entries
        .into_iter()
        .map(|(key, body)| IssueComment::new(key, trim_blank_lines(&body)))
        .collect()
}

/// Drop whitespace-only lines at both ends, keeping the indentation of the
/// first remaining line
fn trim_blank_lines(body: &str) -> &str {
    let is_blank = |line: &&str| line.trim().is_empty();

    let start = body
        .split_inclusive('\n')
        .take_while(is_blank)
        .map(str::len)
        .sum::<usize>();

    body[start..].trim_end()
}

/// Parse the full contents of a draft file
pub fn parse_str(contents: &str) -> Vec<IssueComment> {
    parse(contents.split_inclusive('\n'))
}
