// src/activity/mod.rs
// =============================================================================
// Everything that happens after the HTTP response arrives.
//
// Submodules:
// - event: decodes raw JSON records into EventKind values
// - render: turns EventKind values into printable lines
// =============================================================================

mod event;
mod render;

pub use event::parse_feed;
pub use render::render_feed;
