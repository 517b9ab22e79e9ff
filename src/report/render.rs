// src/report/render.rs
// =============================================================================
// This module formats the grouped events as human-readable summary lines.
//
// Output format:
//   - Pushed 3 commits into acme/widgets
//   - Starred foo/bar
//
// All pushes come first, then all stars, regardless of how the kinds were
// interleaved in the feed. Within each section the feed order is kept.
//
// Rust concepts:
// - Building Strings with format! instead of printing directly
// - Returning Vec<String> so tests can assert on lines without capturing
//   stdout
// =============================================================================

use crate::events::EventGroup;

// Formats the group as a list of summary lines
//
// Parameters:
//   group: the grouped events to render
//
// Returns: one String per line, pushes before stars. An empty group
// produces an empty Vec.
pub fn render_lines(group: &EventGroup) -> Vec<String> {
    let mut lines = Vec::with_capacity(group.pushes.len() + group.stars.len());

    for push in &group.pushes {
        lines.push(format!(
            "- Pushed {} commits into {}",
            push.commit_count, push.repo_name
        ));
    }

    for starred_repo_name in &group.stars {
        lines.push(format!("- Starred {}", starred_repo_name));
    }

    lines
}

// Prints the summary lines to stdout, one per line
pub fn print_summary(group: &EventGroup) {
    for line in render_lines(group) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::PushSummary;

    fn group_with(pushes: Vec<(&str, i64)>, stars: Vec<&str>) -> EventGroup {
        EventGroup {
            pushes: pushes
                .into_iter()
                .map(|(name, count)| PushSummary {
                    repo_name: name.to_string(),
                    commit_count: count,
                })
                .collect(),
            stars: stars.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_push_line_format() {
        let lines = render_lines(&group_with(vec![("acme/widgets", 3)], vec![]));
        assert_eq!(lines, vec!["- Pushed 3 commits into acme/widgets"]);
    }

    #[test]
    fn test_star_line_format() {
        let lines = render_lines(&group_with(vec![], vec!["foo/bar"]));
        assert_eq!(lines, vec!["- Starred foo/bar"]);
    }

    #[test]
    fn test_pushes_render_before_stars() {
        let lines = render_lines(&group_with(
            vec![("a/b", 1), ("c/d", 2)],
            vec!["e/f", "g/h"],
        ));
        assert_eq!(
            lines,
            vec![
                "- Pushed 1 commits into a/b",
                "- Pushed 2 commits into c/d",
                "- Starred e/f",
                "- Starred g/h",
            ]
        );
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let lines = render_lines(&EventGroup::default());
        assert!(lines.is_empty());
    }
}
