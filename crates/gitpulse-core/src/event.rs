//! GitHub activity event model.
//!
//! Events arrive as loosely-structured JSON whose payload shape varies by
//! event type, and no field is guaranteed present. Rather than a rigid
//! struct, `Event` wraps the raw document and exposes accessors that fall
//! back to a documented default when a field is absent or mis-shaped.

use serde::Deserialize;
use serde_json::Value;

/// One unit of activity as returned by `GET /users/{handle}/events`.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Event {
    raw: Value,
}

/// The closed set of event types the formatter handles, plus a fallback for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Push,
    Create,
    Issues,
    PullRequest,
    Watch,
    Other,
}

impl EventKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "PushEvent" => Self::Push,
            "CreateEvent" => Self::Create,
            "IssuesEvent" => Self::Issues,
            "PullRequestEvent" => Self::PullRequest,
            "WatchEvent" => Self::Watch,
            _ => Self::Other,
        }
    }
}

impl Event {
    /// The event's `type` tag, or `"Unknown Event"` if absent.
    pub fn type_tag(&self) -> &str {
        self.raw
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("Unknown Event")
    }

    pub fn kind(&self) -> EventKind {
        EventKind::from_tag(self.type_tag())
    }

    /// Fully-qualified repository name, or `"Unknown Repository"`.
    pub fn repo_name(&self) -> &str {
        self.str_at("/repo/name", "Unknown Repository")
    }

    /// Number of commits in a push payload; an absent or non-array
    /// `payload.commits` counts as zero.
    pub fn commit_count(&self) -> usize {
        self.raw
            .pointer("/payload/commits")
            .and_then(Value::as_array)
            .map_or(0, Vec::len)
    }

    pub fn ref_type(&self) -> &str {
        self.str_at("/payload/ref_type", "unknown")
    }

    pub fn ref_name(&self) -> &str {
        self.str_at("/payload/ref", "unknown")
    }

    pub fn action(&self) -> &str {
        self.str_at("/payload/action", "unknown")
    }

    pub fn issue_title(&self) -> &str {
        self.str_at("/payload/issue/title", "Untitled")
    }

    pub fn pull_request_title(&self) -> &str {
        self.str_at("/payload/pull_request/title", "Untitled")
    }

    fn str_at<'a>(&'a self, pointer: &str, default: &'a str) -> &'a str {
        self.raw
            .pointer(pointer)
            .and_then(Value::as_str)
            .unwrap_or(default)
    }
}
