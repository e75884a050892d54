// src/error.rs
// =============================================================================
// Error types shared by the fetcher and the renderer.
//
// Two levels of failure exist:
// - ActivityError: aborts the whole run (network down, bad JSON, HTTP 500...)
// - EventError: a single malformed event; the rest of the feed still prints
//
// main.rs wraps ActivityError in anyhow so it can attach context, then
// prints the whole chain with describe_chain().
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Fatal errors. Any of these terminates the run with exit code 2.
#[derive(Debug, Error)]
pub enum ActivityError {
    /// DNS failure, connection reset, timeout, TLS problems...
    #[error("Request to GitHub failed")]
    Transport(#[from] reqwest::Error),

    /// GitHub answered with something other than 200 or 404
    #[error("GitHub API returned HTTP {status}")]
    Http { status: StatusCode },

    /// The response body was not a JSON array of events
    #[error("Could not parse the event feed")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Could not write {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Joins an error and its causes into one line, "outer: inner: root".
///
/// Some errors (reqwest's among them) already append their cause to their
/// own message, so a cause whose text is already on the line is skipped.
pub fn describe_chain(err: &anyhow::Error) -> String {
    let mut line = String::new();

    for cause in err.chain() {
        let text = cause.to_string();
        if text.is_empty() || line.contains(&text) {
            continue;
        }
        if !line.is_empty() {
            line.push_str(": ");
        }
        line.push_str(&text);
    }

    line
}

/// Why one event in the feed could not be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    /// The record itself is not shaped like an event (no type, no repo.name)
    #[error("malformed event record: {0}")]
    Malformed(String),

    /// A payload field the dispatch table needs is absent
    #[error("{event_type} is missing payload field '{field}'")]
    MissingField {
        event_type: String,
        field: &'static str,
    },

    /// A payload field is present but has the wrong JSON type
    #[error("{event_type} has an unexpected value for payload field '{field}'")]
    InvalidField {
        event_type: String,
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_mentions_status() {
        let err = ActivityError::Http {
            status: StatusCode::FORBIDDEN,
        };
        assert_eq!(err.to_string(), "GitHub API returned HTTP 403 Forbidden");
    }

    #[test]
    fn test_parse_cause_printed_once() {
        let cause = serde_json::from_str::<Vec<u8>>("{}").unwrap_err();
        let cause_text = cause.to_string();
        let err = anyhow::Error::new(ActivityError::Parse(cause)).context("Could not render");

        let line = describe_chain(&err);
        assert_eq!(
            line,
            format!("Could not render: Could not parse the event feed: {}", cause_text)
        );
        assert_eq!(line.matches(&cause_text).count(), 1);
    }

    #[test]
    fn test_chain_skips_cause_already_in_message() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
        let err = anyhow::Error::new(io)
            .context("write failed: disk full")
            .context("Could not dump");

        assert_eq!(describe_chain(&err), "Could not dump: write failed: disk full");
    }

    #[test]
    fn test_io_error_message_omits_source() {
        let err = ActivityError::Io {
            path: "file.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Could not write file.json");
    }

    #[test]
    fn test_missing_field_message() {
        let err = EventError::MissingField {
            event_type: "PullRequestEvent".to_string(),
            field: "action",
        };
        assert_eq!(
            err.to_string(),
            "PullRequestEvent is missing payload field 'action'"
        );
    }
}
