// src/events/model.rs
// =============================================================================
// This module defines the Event data structures and decodes them from JSON.
//
// We use the `serde` crate which:
// - Maps JSON objects onto Rust structs with derive macros
// - Ignores unknown fields by default (forward compatible)
// - Fills missing fields with defaults when we ask it to
//
// The GitHub events endpoint returns many event kinds with wildly different
// payloads. We only model the handful of fields we actually read and let
// serde skip the rest.
//
// Rust concepts:
// - Derive macros: #[derive(Deserialize)] generates the decoding code
// - Default values: #[serde(default)] instead of failing on missing fields
// - Newtype errors: A small wrapper that carries the parser's diagnostic
// =============================================================================

use serde::{Deserialize, Serialize};
use thiserror::Error;

// The response body was not a well-formed list of event records
//
// Wraps the serde_json diagnostic so the user sees what actually went wrong
// (line/column and a description of the mismatch).
#[derive(Debug, Error)]
#[error("could not decode events: {0}")]
pub struct DecodeError(#[from] serde_json::Error);

// One activity record from the feed
//
// #[serde(default)] on the struct means every missing field takes its
// Default value: empty string for strings, zero for integers. The feed
// omits fields freely depending on the event kind, so decoding must not
// fail on absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub id: String,
    /// The event kind, e.g. "PushEvent" or "WatchEvent"
    /// ("type" is a reserved word in Rust, so we rename the field)
    #[serde(rename = "type")]
    pub kind: String,
    pub repo: Repo,
    pub payload: Payload,
}

// The repository an event happened in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repo {
    pub id: i64,
    pub name: String,
}

// The kind-dependent part of an event
//
// Only the two fields we inspect are modeled here:
// - action: "started" marks a star on WatchEvents
// - size: the number of commits in a PushEvent
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Payload {
    pub action: String,
    pub size: i64,
}

// Decodes a raw response body into an ordered list of events
//
// Parameters:
//   bytes: the raw JSON bytes from the fetcher
//
// Returns: Result<Vec<Event>, DecodeError>
//   Success: the events in feed order (most recent first, as the API sends them)
//   Error: the body was not a well-formed JSON list of records
//
// An empty list `[]` is a valid feed and decodes to an empty Vec.
pub fn decode_events(bytes: &[u8]) -> Result<Vec<Event>, DecodeError> {
    let events = serde_json::from_slice(bytes)?;
    Ok(events)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What does #[serde(default)] do?
//    - Normally serde fails if a non-Option field is missing from the JSON
//    - With default, a missing field takes Default::default() instead
//    - For String that's "", for i64 that's 0
//    - We want this because the feed omits payload fields per event kind
//
// 2. Why rename "type" to kind?
//    - `type` is a Rust keyword, so it can't be a plain field name
//    - #[serde(rename = "type")] keeps the wire name while the Rust
//      field gets a name we can actually use
//
// 3. What about fields we don't model?
//    - serde ignores unknown JSON fields unless told otherwise
//    - The real feed has dozens of fields per event; we keep the four
//      we read and decoding stays stable when GitHub adds more
//
// 4. Why i64 for size?
//    - JSON numbers in the feed are integers
//    - i64 comfortably covers any realistic commit count
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_push_event() {
        let body = br#"[
            {
                "id": "41175982679",
                "type": "PushEvent",
                "repo": {"id": 912, "name": "acme/widgets"},
                "payload": {"size": 3}
            }
        ]"#;
        let events = decode_events(body).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, "41175982679");
        assert_eq!(events[0].kind, "PushEvent");
        assert_eq!(events[0].repo.name, "acme/widgets");
        assert_eq!(events[0].payload.size, 3);
        // action wasn't present, so it defaulted to empty
        assert_eq!(events[0].payload.action, "");
    }

    #[test]
    fn test_decode_empty_list() {
        let events = decode_events(b"[]").unwrap();
        assert!(events.is_empty());
    }

    #[test]
    fn test_decode_missing_fields_use_defaults() {
        // A record with nothing we recognize still decodes
        let events = decode_events(b"[{}]").unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, "");
        assert_eq!(events[0].repo.id, 0);
        assert_eq!(events[0].repo.name, "");
        assert_eq!(events[0].payload.size, 0);
    }

    #[test]
    fn test_decode_ignores_unknown_fields() {
        let body = br#"[
            {
                "type": "WatchEvent",
                "public": true,
                "actor": {"login": "someone"},
                "created_at": "2024-01-01T00:00:00Z",
                "payload": {"action": "started", "ref_type": "branch"},
                "repo": {"id": 1, "name": "foo/bar", "url": "https://api.github.com/repos/foo/bar"}
            }
        ]"#;
        let events = decode_events(body).unwrap();
        assert_eq!(events[0].kind, "WatchEvent");
        assert_eq!(events[0].payload.action, "started");
        assert_eq!(events[0].repo.name, "foo/bar");
    }

    #[test]
    fn test_decode_rejects_malformed_body() {
        // An object is not a list of records
        let err = decode_events(br#"{"message": "Not Found"}"#).unwrap_err();
        assert!(err.to_string().starts_with("could not decode events:"));
    }

    #[test]
    fn test_decode_preserves_order() {
        let body = br#"[
            {"id": "2", "type": "PushEvent", "repo": {"name": "a/b"}, "payload": {"size": 1}},
            {"id": "1", "type": "PushEvent", "repo": {"name": "c/d"}, "payload": {"size": 2}}
        ]"#;
        let events = decode_events(body).unwrap();
        assert_eq!(events[0].id, "2");
        assert_eq!(events[1].id, "1");
    }
}
