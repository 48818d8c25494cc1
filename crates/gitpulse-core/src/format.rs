use crate::event::{Event, EventKind};

/// Maximum number of events shown in a summary.
pub const DISPLAY_LIMIT: usize = 10;

/// Renders one event as a single display line. Total function: every event,
/// however sparse, produces exactly one line.
pub fn format_event(event: &Event) -> String {
    let repo = event.repo_name();
    match event.kind() {
        EventKind::Push => {
            let count = event.commit_count();
            let plural = if count == 1 { "" } else { "s" };
            format!("- Pushed {count} commit{plural} to {repo}")
        }
        EventKind::Create => format!(
            "- Created a new {} '{}' in {repo}",
            event.ref_type(),
            event.ref_name()
        ),
        EventKind::Issues => format!(
            "- {} an issue '{}' in {repo}",
            capitalize(event.action()),
            event.issue_title()
        ),
        EventKind::PullRequest => format!(
            "- {} a pull request '{}' in {repo}",
            capitalize(event.action()),
            event.pull_request_title()
        ),
        EventKind::Watch => format!("- Starred {repo}"),
        EventKind::Other => format!("- {} in {repo}", event.type_tag()),
    }
}

/// Header line plus one formatted line per event, truncated to
/// [`DISPLAY_LIMIT`], original order preserved.
pub fn summary_lines(handle: &str, events: &[Event]) -> Vec<String> {
    let mut lines = Vec::with_capacity(events.len().min(DISPLAY_LIMIT) + 1);
    lines.push(format!("Recent GitHub Activity for {handle}:"));
    lines.extend(events.iter().take(DISPLAY_LIMIT).map(format_event));
    lines
}

/// Uppercases the first character only; the rest is left unchanged.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(value: serde_json::Value) -> Event {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_push_pluralization() {
        let commits = |n: usize| {
            event(json!({
                "type": "PushEvent",
                "repo": { "name": "acme/repo" },
                "payload": { "commits": vec![json!({}); n] }
            }))
        };
        assert_eq!(format_event(&commits(1)), "- Pushed 1 commit to acme/repo");
        assert_eq!(format_event(&commits(3)), "- Pushed 3 commits to acme/repo");
    }

    #[test]
    fn test_push_without_commits_reports_zero() {
        let event = event(json!({
            "type": "PushEvent",
            "repo": { "name": "acme/repo" }
        }));
        assert_eq!(format_event(&event), "- Pushed 0 commits to acme/repo");
    }

    #[test]
    fn test_create_branch() {
        let event = event(json!({
            "type": "CreateEvent",
            "repo": { "name": "acme/repo" },
            "payload": { "ref_type": "branch", "ref": "feature/login" }
        }));
        assert_eq!(
            format_event(&event),
            "- Created a new branch 'feature/login' in acme/repo"
        );
    }

    #[test]
    fn test_issue_opened() {
        let event = event(json!({
            "type": "IssuesEvent",
            "repo": { "name": "a/b" },
            "payload": { "action": "opened", "issue": { "title": "Bug X" } }
        }));
        assert_eq!(format_event(&event), "- Opened an issue 'Bug X' in a/b");
    }

    #[test]
    fn test_pull_request_action_capitalized_first_char_only() {
        let event = event(json!({
            "type": "PullRequestEvent",
            "repo": { "name": "a/b" },
            "payload": { "action": "reopened", "pull_request": { "title": "Add CI" } }
        }));
        assert_eq!(
            format_event(&event),
            "- Reopened a pull request 'Add CI' in a/b"
        );
    }

    #[test]
    fn test_watch_ignores_extra_fields() {
        let event = event(json!({
            "type": "WatchEvent",
            "repo": { "name": "acme/repo" },
            "payload": { "action": "started", "extra": [1, 2, 3] }
        }));
        assert_eq!(format_event(&event), "- Starred acme/repo");
    }

    #[test]
    fn test_unrecognized_type_uses_raw_tag() {
        let event = event(json!({
            "type": "ForkEvent",
            "repo": { "name": "acme/repo" }
        }));
        assert_eq!(format_event(&event), "- ForkEvent in acme/repo");
    }

    #[test]
    fn test_empty_event_uses_all_defaults() {
        let event = event(json!({}));
        assert_eq!(format_event(&event), "- Unknown Event in Unknown Repository");
    }

    #[test]
    fn test_summary_truncates_to_ten_in_order() {
        let events: Vec<Event> = (0..15)
            .map(|i| {
                event(json!({
                    "type": "WatchEvent",
                    "repo": { "name": format!("acme/repo-{i}") }
                }))
            })
            .collect();
        let lines = summary_lines("octocat", &events);
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "Recent GitHub Activity for octocat:");
        assert_eq!(lines[1], "- Starred acme/repo-0");
        assert_eq!(lines[10], "- Starred acme/repo-9");
    }

    #[test]
    fn test_summary_with_no_events_is_header_only() {
        let lines = summary_lines("octocat", &[]);
        assert_eq!(lines, vec!["Recent GitHub Activity for octocat:"]);
    }
}
