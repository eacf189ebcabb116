//! Jira REST integration
//!
//! Talks to the Jira REST API (v2) using basic authentication:
//! - `GET /rest/api/2/search` to find the user's issues
//! - `POST /rest/api/2/issue/{key}/comment` to add status comments
//!
//! Raw JSON is converted into validated [`Issue`] values before it leaves
//! this module.

use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::config::Credentials;
use crate::error::{Error, Result};
use crate::issue::{Issue, IssueType};
use crate::tracker::Tracker;

const SEARCH_FIELDS: &str = "summary,issuetype,status";
const PAGE_SIZE: u32 = 50;

// Response types for the search endpoint

#[derive(Deserialize, Debug)]
struct Named {
    name: String,
}

#[derive(Deserialize, Debug)]
struct Fields {
    summary: String,
    #[serde(alias = "issuetype")]
    issue_type: Named,
    status: Named,
}

#[derive(Deserialize, Debug)]
struct RawIssue {
    key: String,
    fields: Fields,
}

#[derive(Deserialize, Debug)]
struct SearchResponse {
    #[serde(alias = "startAt")]
    start_at: u32,
    total: u32,
    issues: Vec<RawIssue>,
}

#[derive(Serialize, Debug)]
struct CommentRequest<'a> {
    body: &'a str,
}

impl TryFrom<RawIssue> for Issue {
    type Error = Error;

    fn try_from(raw: RawIssue) -> Result<Self> {
        let issue_type: IssueType = raw.fields.issue_type.name.parse()?;
        Issue::new(
            raw.key,
            raw.fields.summary,
            issue_type,
            raw.fields.status.name,
        )
    }
}

/// Blocking Jira client
pub struct JiraClient {
    server: String,
    credentials: Credentials,
    http: Client,
}

impl JiraClient {
    pub fn new(server: impl Into<String>, credentials: Credentials) -> Result<Self> {
        let http = Client::builder()
            .build()
            .map_err(|e| Error::Network(format!("failed to configure HTTP client: {}", e)))?;

        Ok(Self {
            server: server.into().trim_end_matches('/').to_string(),
            credentials,
            http,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/rest/api/2/{}", self.server, path)
    }

    fn search_page(&self, jql: &str, start_at: u32) -> Result<SearchResponse> {
        let start = start_at.to_string();
        let page_size = PAGE_SIZE.to_string();

        let response = self
            .http
            .get(self.endpoint("search"))
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .query(&[
                ("jql", jql),
                ("fields", SEARCH_FIELDS),
                ("startAt", start.as_str()),
                ("maxResults", page_size.as_str()),
            ])
            .send()?;

        let response = check_status(response)?;
        Ok(response.json()?)
    }
}

impl Tracker for JiraClient {
    fn search_issues(&self, jql: &str) -> Result<Vec<Issue>> {
        tracing::debug!("searching jira: {}", jql);

        let mut issues = Vec::new();
        loop {
            let page = self.search_page(jql, issues.len() as u32)?;
            let received = page.issues.len();
            tracing::debug!(
                "received {} issues (start {}, total {})",
                received,
                page.start_at,
                page.total
            );

            for raw in page.issues {
                issues.push(Issue::try_from(raw)?);
            }

            if received == 0 || issues.len() as u32 >= page.total {
                break;
            }
        }

        Ok(issues)
    }

    fn add_comment(&self, issue_key: &str, body: &str) -> Result<()> {
        tracing::debug!("adding comment to {} ({} bytes)", issue_key, body.len());

        let response = self
            .http
            .post(self.endpoint(&format!("issue/{}/comment", issue_key)))
            .basic_auth(&self.credentials.username, Some(&self.credentials.password))
            .json(&CommentRequest { body })
            .send()?;

        check_status(response)?;
        Ok(())
    }
}

/// Map non-success responses onto the error taxonomy
fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response
        .text()
        .unwrap_or_else(|_| "(failed to read error response body)".to_string());

    Err(status_error(status, body))
}

fn status_error(status: StatusCode, body: String) -> Error {
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Error::Authentication(format!(
            "{} (check JIRA_USERNAME and JIRA_PASSWORD)",
            status
        )),
        StatusCode::BAD_REQUEST => Error::Query(body),
        other => Error::Http {
            status: other.as_u16(),
            message: body,
        },
    }
}
