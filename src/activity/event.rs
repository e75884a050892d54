// src/activity/event.rs
// =============================================================================
// Decodes GitHub event records into something we can render.
//
// The API returns a JSON array like:
//   [{ "type": "PushEvent", "repo": { "name": "octocat/Hello-World" },
//      "payload": { "commits": [...] }, ... }, ...]
//
// Decoding happens in two steps:
// 1. ActivityEvent: the raw record (type, repo name, untyped payload)
// 2. EventKind: a closed enum with one variant per event we know how to
//    describe, holding only the payload fields that variant needs
//
// Each array element is decoded on its own, so one broken record only
// costs us that record.
// =============================================================================

use serde::Deserialize;
use serde_json::Value;

use crate::error::{ActivityError, EventError};

/// A single record from the user's event feed.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEvent {
    /// "PushEvent", "WatchEvent", ...
    #[serde(rename = "type")]
    pub event_type: String,
    pub repo: Repository,
    /// Per-type details. Left untyped because every event type has its own shape.
    #[serde(default)]
    pub payload: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Repository {
    /// "owner/repo"
    pub name: String,
}

/// The event kinds the renderer knows about.
///
/// Anything not listed here ends up in `Other` with its raw type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    Push { commits: usize },
    CreateBranch { git_ref: String },
    CreateRepository,
    CreateRef { ref_type: String },
    PullRequest { action: String },
    Delete { ref_type: String },
    Release,
    Watch,
    Fork,
    Other { event_type: String },
}

impl ActivityEvent {
    /// Decodes one element of the feed array.
    pub fn from_value(value: Value) -> Result<Self, EventError> {
        let event: ActivityEvent =
            serde_json::from_value(value).map_err(|e| EventError::Malformed(e.to_string()))?;

        if event.event_type.is_empty() {
            return Err(EventError::Malformed("event type is empty".to_string()));
        }

        Ok(event)
    }

    pub fn repository_name(&self) -> &str {
        &self.repo.name
    }

    /// Classifies the event, pulling out the payload fields its variant needs.
    pub fn kind(&self) -> Result<EventKind, EventError> {
        let kind = match self.event_type.as_str() {
            "PushEvent" => {
                // Older feeds always carry the commit list; when it's gone we
                // assume a single commit
                let commits = match self.payload.get("commits") {
                    None | Some(Value::Null) => 1,
                    Some(Value::Array(commits)) => commits.len(),
                    Some(_) => return Err(self.invalid_field("commits")),
                };
                EventKind::Push { commits }
            }
            "CreateEvent" => match self.str_field("ref_type")? {
                "branch" => EventKind::CreateBranch {
                    git_ref: self.str_field("ref")?.to_string(),
                },
                "repository" => EventKind::CreateRepository,
                other => EventKind::CreateRef {
                    ref_type: other.to_string(),
                },
            },
            "PullRequestEvent" => EventKind::PullRequest {
                action: self.str_field("action")?.to_string(),
            },
            "DeleteEvent" => EventKind::Delete {
                ref_type: self.str_field("ref_type")?.to_string(),
            },
            "ReleaseEvent" => EventKind::Release,
            "WatchEvent" => EventKind::Watch,
            "ForkEvent" => EventKind::Fork,
            other => EventKind::Other {
                event_type: other.to_string(),
            },
        };

        Ok(kind)
    }

    // Looks up a string field in the payload
    // null counts as missing, since that's how GitHub spells "not set"
    fn str_field(&self, field: &'static str) -> Result<&str, EventError> {
        match self.payload.get(field) {
            None | Some(Value::Null) => Err(EventError::MissingField {
                event_type: self.event_type.clone(),
                field,
            }),
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(_) => Err(self.invalid_field(field)),
        }
    }

    fn invalid_field(&self, field: &'static str) -> EventError {
        EventError::InvalidField {
            event_type: self.event_type.clone(),
            field,
        }
    }
}

/// Splits a response body into its individual event records.
///
/// Fails only when the body as a whole is not a JSON array; the elements are
/// left undecoded so each can succeed or fail on its own.
pub fn parse_feed(body: &str) -> Result<Vec<Value>, ActivityError> {
    let records: Vec<Value> = serde_json::from_str(body)?;
    Ok(records)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is serde_json::Value?
//    - An enum that can hold any JSON value (object, array, string, ...)
//    - Useful when the shape depends on data, like our per-type payloads
//    - value.get("field") returns Option<&Value> and works on any variant
//
// 2. What does #[serde(rename = "type")] do?
//    - `type` is a Rust keyword, so the field is called event_type
//    - serde still reads it from the "type" key in JSON
//
// 3. Why does kind() borrow &self?
//    - Classifying doesn't need to consume the event
//    - The caller still needs repository_name() afterwards
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: Value) -> ActivityEvent {
        ActivityEvent::from_value(value).unwrap()
    }

    #[test]
    fn test_push_counts_commits() {
        let e = event(json!({
            "type": "PushEvent",
            "repo": { "name": "octocat/Hello-World" },
            "payload": { "commits": [{}, {}, {}] }
        }));
        assert_eq!(e.kind().unwrap(), EventKind::Push { commits: 3 });
        assert_eq!(e.repository_name(), "octocat/Hello-World");
    }

    #[test]
    fn test_push_without_commits_defaults_to_one() {
        let e = event(json!({
            "type": "PushEvent",
            "repo": { "name": "a/b" },
            "payload": { "ref": "refs/heads/main" }
        }));
        assert_eq!(e.kind().unwrap(), EventKind::Push { commits: 1 });
    }

    #[test]
    fn test_push_with_non_array_commits_is_invalid() {
        let e = event(json!({
            "type": "PushEvent",
            "repo": { "name": "a/b" },
            "payload": { "commits": 4 }
        }));
        assert!(matches!(
            e.kind(),
            Err(EventError::InvalidField { field: "commits", .. })
        ));
    }

    #[test]
    fn test_create_variants() {
        let branch = event(json!({
            "type": "CreateEvent",
            "repo": { "name": "a/b" },
            "payload": { "ref_type": "branch", "ref": "feature" }
        }));
        assert_eq!(
            branch.kind().unwrap(),
            EventKind::CreateBranch {
                git_ref: "feature".to_string()
            }
        );

        let repo = event(json!({
            "type": "CreateEvent",
            "repo": { "name": "a/b" },
            "payload": { "ref_type": "repository", "ref": null }
        }));
        assert_eq!(repo.kind().unwrap(), EventKind::CreateRepository);

        let tag = event(json!({
            "type": "CreateEvent",
            "repo": { "name": "a/b" },
            "payload": { "ref_type": "tag", "ref": "v1.0" }
        }));
        assert_eq!(
            tag.kind().unwrap(),
            EventKind::CreateRef {
                ref_type: "tag".to_string()
            }
        );
    }

    #[test]
    fn test_create_branch_without_ref_fails() {
        let e = event(json!({
            "type": "CreateEvent",
            "repo": { "name": "a/b" },
            "payload": { "ref_type": "branch" }
        }));
        assert_eq!(
            e.kind().unwrap_err(),
            EventError::MissingField {
                event_type: "CreateEvent".to_string(),
                field: "ref"
            }
        );
    }

    #[test]
    fn test_pull_request_without_payload_fails() {
        let e = event(json!({
            "type": "PullRequestEvent",
            "repo": { "name": "a/b" }
        }));
        assert!(matches!(
            e.kind(),
            Err(EventError::MissingField { field: "action", .. })
        ));
    }

    #[test]
    fn test_unknown_type_is_other() {
        let e = event(json!({
            "type": "FooEvent",
            "repo": { "name": "a/b" },
            "payload": {}
        }));
        assert_eq!(
            e.kind().unwrap(),
            EventKind::Other {
                event_type: "FooEvent".to_string()
            }
        );
    }

    #[test]
    fn test_record_without_repo_is_malformed() {
        let result = ActivityEvent::from_value(json!({ "type": "WatchEvent" }));
        assert!(matches!(result, Err(EventError::Malformed(_))));
    }

    #[test]
    fn test_empty_type_is_malformed() {
        let result = ActivityEvent::from_value(json!({
            "type": "",
            "repo": { "name": "a/b" }
        }));
        assert!(matches!(result, Err(EventError::Malformed(_))));
    }

    #[test]
    fn test_parse_feed_requires_array() {
        assert_eq!(parse_feed("[]").unwrap().len(), 0);
        assert!(matches!(
            parse_feed(r#"{"message": "nope"}"#),
            Err(ActivityError::Parse(_))
        ));
        assert!(matches!(parse_feed("not json"), Err(ActivityError::Parse(_))));
    }
}
