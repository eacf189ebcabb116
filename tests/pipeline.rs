use std::cell::RefCell;

use jipdate::fetch::{self, IssueFilter};
use jipdate::publish;
use jipdate::{draft, status};
use jipdate::{Error, Issue, IssueType, Result, Tracker};

struct FakeJira {
    issues: Vec<Issue>,
    rejected: &'static str,
    queries: RefCell<Vec<String>>,
    comments: RefCell<Vec<(String, String)>>,
}

impl Tracker for FakeJira {
    fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        self.queries.borrow_mut().push(jql.to_string());
        Ok(self.issues.clone())
    }

    fn add_comment(&self, issue_key: &str, body: &str) -> Result<()> {
        if issue_key == self.rejected {
            return Err(Error::Http {
                status: 403,
                message: "You do not have permission to comment".into(),
            });
        }
        self.comments
            .borrow_mut()
            .push((issue_key.to_string(), body.to_string()));
        Ok(())
    }
}

fn fake_jira() -> FakeJira {
    FakeJira {
        issues: vec![
            Issue::new("SWG-28", "Secure boot", IssueType::Epic, "In Progress").unwrap(),
            Issue::new("LITE-32", "Kernel work", IssueType::Initiative, "In Progress").unwrap(),
            Issue::new("KWG-7", "Toolchain", IssueType::Story, "In Progress").unwrap(),
        ],
        rejected: "KWG-7",
        queries: RefCell::new(vec![]),
        comments: RefCell::new(vec![]),
    }
}

#[test]
fn test_fetch_edit_parse_publish() {
    let jira = fake_jira();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("status_update.txt");

    let issues = fetch::fetch(&jira, &IssueFilter::default()).unwrap();
    draft::write_to(&path, "John Doe", &issues).unwrap();
    assert_eq!(jira.queries.borrow().len(), 1);

    // Untouched draft: one empty comment per issue
    let untouched = status::parse_str(&std::fs::read_to_string(&path).unwrap());
    assert_eq!(untouched.len(), 3);
    assert!(untouched.iter().all(|e| e.comment.is_empty()));

    // Simulate the user filling in the first block
    let edited = std::fs::read_to_string(&path).unwrap().replacen(
        "# Status: In Progress\n",
        "# Status: In Progress\nFirst paragraph.\n\nSecond paragraph.\n",
        1,
    );
    std::fs::write(&path, edited).unwrap();

    let entries = status::parse_str(&std::fs::read_to_string(&path).unwrap());
    assert_eq!(entries[0].issue_key, "SWG-28");
    assert_eq!(entries[0].comment, "First paragraph.\n\nSecond paragraph.");

    let results = publish::publish(&jira, &entries, &mut std::io::sink()).unwrap();

    assert_eq!(results.len(), 3);
    assert!(results[0].ok && results[1].ok);
    assert!(!results[2].ok);
    assert_eq!(results[2].issue_key, "KWG-7");

    let comments = jira.comments.borrow();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[1], ("LITE-32".to_string(), String::new()));
}

#[test]
fn test_repeated_header_posts_twice() {
    let jira = fake_jira();
    let entries = status::parse_str("[LITE-32]\nmorning\n[LITE-32]\nevening\n");

    let results = publish::publish(&jira, &entries, &mut std::io::sink()).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(
        *jira.comments.borrow(),
        vec![
            ("LITE-32".to_string(), "morning".to_string()),
            ("LITE-32".to_string(), "evening".to_string()),
        ]
    );
}
