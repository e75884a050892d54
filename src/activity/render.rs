// src/activity/render.rs
// =============================================================================
// Turns decoded events into the lines we print.
//
// One event = one line, in the order GitHub returned them (newest first).
// No grouping, no deduplication.
//
// Rust concepts:
// - match on enums: every EventKind variant gets exactly one arm, and the
//   compiler complains if we forget one
// - Iterators: chars() / to_uppercase() for Unicode-safe capitalization
// =============================================================================

use serde_json::Value;

use super::event::{parse_feed, ActivityEvent, EventKind};
use crate::error::{ActivityError, EventError};

/// Outcome of rendering one element of the feed.
pub type RenderedEvent = Result<String, EventError>;

/// Formats a single classified event.
pub fn render_line(kind: &EventKind, repo: &str) -> String {
    match kind {
        EventKind::Push { commits } => format!("- Pushed {} commits to {}", commits, repo),
        EventKind::CreateBranch { git_ref } => {
            format!("- Created a new branch '{}' in {}", git_ref, repo)
        }
        // Repository creation deliberately prints an empty line
        EventKind::CreateRepository => String::new(),
        EventKind::CreateRef { ref_type } => {
            format!("- Created a new '{}' in {}", ref_type, repo)
        }
        EventKind::PullRequest { action } => {
            format!("- {} pull request in {}", capitalize(action), repo)
        }
        EventKind::Delete { ref_type } => format!("- Deleted {} in {}", ref_type, repo),
        EventKind::Release => format!("- Published release in {}", repo),
        EventKind::Watch => format!("- Starred {}", repo),
        EventKind::Fork => format!("- Forked {}", repo),
        EventKind::Other { event_type } => format!("- Event {} on {}", event_type, repo),
    }
}

/// Decodes and formats one raw feed element.
pub fn render_event(value: Value) -> RenderedEvent {
    let event = ActivityEvent::from_value(value)?;
    let kind = event.kind()?;
    Ok(render_line(&kind, event.repository_name()))
}

/// Renders a whole response body.
///
/// Returns Err only if the body is not a JSON array. Otherwise every element
/// gets its own entry, successful or not, in feed order.
pub fn render_feed(body: &str) -> Result<Vec<RenderedEvent>, ActivityError> {
    let records = parse_feed(body)?;
    Ok(records.into_iter().map(render_event).collect())
}

/// Uppercases the first character and leaves the rest alone.
///
/// "closed" -> "Closed", "" -> "". Callers holding an `Option<&str>` can use
/// `.map(capitalize)`, which leaves `None` as `None`.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
