//! Confirmation and publishing of parsed comments
//!
//! Publishing is best-effort: every entry is attempted in order and each
//! outcome is recorded, so one rejected comment never stops the rest.

use std::io::Write;

use crate::error::Result;
use crate::issue::IssueComment;
use crate::tracker::Tracker;
use crate::ui;

pub const CONFIRM_QUESTION: &str =
    "Sure you want to update Jira with the information above? [y/n]";

/// Source of answers for the confirmation question
pub trait Prompt {
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Outcome of posting one comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishResult {
    pub issue_key: String,
    pub ok: bool,
    pub error_detail: Option<String>,
}

impl PublishResult {
    fn success(issue_key: &str) -> Self {
        Self {
            issue_key: issue_key.to_string(),
            ok: true,
            error_detail: None,
        }
    }

    fn failure(issue_key: &str, detail: String) -> Self {
        Self {
            issue_key: issue_key.to_string(),
            ok: false,
            error_detail: Some(detail),
        }
    }
}

/// Interpret a confirmation answer; only "y" and "n" are accepted
pub fn parse_answer(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" => Some(true),
        "n" => Some(false),
        _ => None,
    }
}

/// Render entries as `[KEY]` followed by the indented comment
pub fn render_entries(entries: &[IssueComment]) -> String {
    let mut out = String::new();

    for entry in entries {
        out.push_str(&format!("[{}]\n", entry.issue_key));
        for line in entry.comment.lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
    }

    out
}

/// Show the entries and ask until the answer is exactly "y" or "n"
pub fn confirm<P, W>(entries: &[IssueComment], prompt: &mut P, out: &mut W) -> Result<bool>
where
    P: Prompt + ?Sized,
    W: Write,
{
    writeln!(out, "Information to update is as follows:")?;
    writeln!(out, "{}", ui::RULE)?;
    write!(out, "{}", render_entries(entries))?;
    writeln!(out, "{}", ui::RULE)?;
    out.flush()?;

    loop {
        let answer = prompt.ask(CONFIRM_QUESTION)?;
        match parse_answer(&answer) {
            Some(accepted) => return Ok(accepted),
            None => {
                writeln!(out, "Incorrect input: {}", answer.trim())?;
                out.flush()?;
            }
        }
    }
}

/// Post every entry in order, recording each outcome
pub fn publish<T, W>(
    tracker: &T,
    entries: &[IssueComment],
    out: &mut W,
) -> Result<Vec<PublishResult>>
where
    T: Tracker + ?Sized,
    W: Write,
{
    let mut results = Vec::with_capacity(entries.len());

    for entry in entries {
        ui::print_update(out, &entry.issue_key, &entry.comment)?;

        let result = match tracker.add_comment(&entry.issue_key, &entry.comment) {
            Ok(()) => {
                ui::print_outcome(out, &entry.issue_key, None)?;
                PublishResult::success(&entry.issue_key)
            }
            Err(err) => {
                let detail = err.to_string();
                tracing::warn!("updating {} failed: {}", entry.issue_key, detail);
                ui::print_outcome(out, &entry.issue_key, Some(&detail))?;
                PublishResult::failure(&entry.issue_key, detail)
            }
        };
        results.push(result);
    }

    out.flush()?;
    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use crate::error::Error;
    use crate::issue::Issue;

    struct ScriptedPrompt {
        answers: VecDeque<&'static str>,
        asked: usize,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                asked: 0,
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, _question: &str) -> Result<String> {
            self.asked += 1;
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or(Error::Cancelled)
        }
    }

    #[derive(Default)]
    struct FakeTracker {
        failing: Vec<&'static str>,
        posted: RefCell<Vec<(String, String)>>,
    }

    impl Tracker for FakeTracker {
        fn search_issues(&self, _jql: &str) -> Result<Vec<Issue>> {
            Ok(vec![])
        }

        fn add_comment(&self, issue_key: &str, body: &str) -> Result<()> {
            self.posted
                .borrow_mut()
                .push((issue_key.to_string(), body.to_string()));
            if self.failing.iter().any(|k| *k == issue_key) {
                return Err(Error::Http {
                    status: 404,
                    message: "Issue does not exist".into(),
                });
            }
            Ok(())
        }
    }

    fn entries() -> Vec<IssueComment> {
        vec![
            IssueComment::new("AB-1", "Hello\n\nWorld"),
            IssueComment::new("CD-2", ""),
            IssueComment::new("EF-3", "Done"),
        ]
    }

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y"), Some(true));
        assert_eq!(parse_answer(" Y \n"), Some(true));
        assert_eq!(parse_answer("n"), Some(false));
        assert_eq!(parse_answer("N"), Some(false));
        assert_eq!(parse_answer("yes"), None);
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("no"), None);
    }

    #[test]
    fn test_render_entries() {
        assert_eq!(
            render_entries(&entries()),
            "[AB-1]\n    Hello\n    \n    World\n[CD-2]\n[EF-3]\n    Done\n"
        );
    }

    #[test]
    fn test_confirm_reprompts_until_valid() {
        let mut prompt = ScriptedPrompt::new(&["yes", "", "maybe", " n "]);
        let mut out = Vec::new();

        let accepted = confirm(&entries(), &mut prompt, &mut out).unwrap();

        assert!(!accepted);
        assert_eq!(prompt.asked, 4);
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("[AB-1]\n    Hello"));
        assert_eq!(out.matches("Incorrect input").count(), 3);
    }

    #[test]
    fn test_confirm_accepts() {
        let mut prompt = ScriptedPrompt::new(&["Y"]);
        let mut out = Vec::new();
        assert!(confirm(&entries(), &mut prompt, &mut out).unwrap());
    }

    #[test]
    fn test_confirm_never_decides_on_invalid_input() {
        let mut prompt = ScriptedPrompt::new(&["a", "b", "c"]);
        let mut out = Vec::new();

        assert!(matches!(
            confirm(&entries(), &mut prompt, &mut out),
            Err(Error::Cancelled)
        ));
        assert_eq!(prompt.asked, 4);
    }

    #[test]
    fn test_publish_all_in_order() {
        let tracker = FakeTracker::default();

        let results = publish(&tracker, &entries(), &mut std::io::sink()).unwrap();

        assert!(results.iter().all(|r| r.ok));
        let posted = tracker.posted.borrow();
        assert_eq!(posted.len(), 3);
        assert_eq!(posted[0], ("AB-1".to_string(), "Hello\n\nWorld".to_string()));
        assert_eq!(posted[1], ("CD-2".to_string(), String::new()));
        assert_eq!(posted[2].0, "EF-3");
    }

    #[test]
    fn test_publish_continues_after_failure() {
        let tracker = FakeTracker {
            failing: vec!["AB-1"],
            ..Default::default()
        };

        let results = publish(&tracker, &entries(), &mut std::io::sink()).unwrap();

        assert_eq!(results.len(), 3);
        assert!(!results[0].ok);
        assert!(results[0]
            .error_detail
            .as_deref()
            .unwrap()
            .contains("Issue does not exist"));
        assert_eq!(results[1], PublishResult::success("CD-2"));
        assert!(results[2].ok);
        assert_eq!(tracker.posted.borrow().len(), 3);
    }

    #[test]
    fn test_publish_reports_each_outcome() {
        let tracker = FakeTracker {
            failing: vec!["CD-2"],
            ..Default::default()
        };
        let mut out = Vec::new();

        publish(&tracker, &entries(), &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Updated AB-1"));
        assert!(out.contains("Update CD-2 failed: Jira request failed with status 404"));
        assert!(out.contains("Updated EF-3"));
    }
}
