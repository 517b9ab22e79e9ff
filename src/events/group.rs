// src/events/group.rs
// =============================================================================
// This module partitions a decoded event list into the two collections the
// summary cares about: pushes and stars.
//
// Classification rules (one pass, first match wins):
// - "PushEvent"                          -> a PushSummary with the commit count
// - "WatchEvent" with action "started"   -> the starred repository's name
// - anything else                        -> ignored (not an error)
//
// Grouping is a pure function: same input, same output, no side effects.
//
// Rust concepts:
// - Iteration by reference: We read the events, we don't consume them
// - Pattern matching on &str: Comparing event kinds
// - Serialize: The grouped result can be printed as JSON with --json
// =============================================================================

use serde::{Deserialize, Serialize};

use super::model::Event;

// One push of commits to a repository
//
// The serde renames keep the JSON output in camelCase, matching the wire
// style of the feed itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PushSummary {
    #[serde(rename = "repoName")]
    pub repo_name: String,
    #[serde(rename = "commitCount")]
    pub commit_count: i64,
}

// The grouped, render-ready view of a user's activity
//
// Both vectors keep the original feed order (most recent first). Repeated
// pushes to the same repository stay separate entries - no deduplication.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventGroup {
    pub pushes: Vec<PushSummary>,
    pub stars: Vec<String>,
}

impl EventGroup {
    /// True when there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.pushes.is_empty() && self.stars.is_empty()
    }
}

// Partitions events into pushes and stars
//
// Parameters:
//   events: the decoded feed, in API order
//
// Returns: an EventGroup. Every event lands in at most one collection;
// events of other kinds (or WatchEvents with a different action) are
// silently skipped.
pub fn group_events(events: &[Event]) -> EventGroup {
    let mut group = EventGroup::default();

    for event in events {
        if event.kind == "PushEvent" {
            // payload.size is the number of commits in this push
            group.pushes.push(PushSummary {
                repo_name: event.repo.name.clone(),
                commit_count: event.payload.size,
            });
        } else if event.kind == "WatchEvent" && event.payload.action == "started" {
            group.stars.push(event.repo.name.clone());
        }
        // Everything else: issues, forks, comments, ... not summarized
    }

    group
}
