// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Fetch the user's public event feed from the GitHub API
// 3. Decode and group the events into pushes and stars
// 4. Print the summary (or the grouped JSON with --json)
//
// Error reporting is deliberately gentle: a missing username prints a usage
// line, and any fetch/decode failure prints a single "Error: ..." line.
// Both paths end the process on the normal exit code - this tool reports
// problems through its output text, not through exit status.
//
// Rust concepts used:
// - async/await: The one network request runs on the tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - The ? operator: Propagates errors up to one place that reports them
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod events; // src/events/ - event model, decoding, and grouping
mod github; // src/github/ - GitHub API access
mod report; // src/report/ - summary output

// Import items we need from our modules
use clap::Parser; // Parser trait enables the parse() method
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    // Any error that bubbles up here gets the "Error: " prefix and goes to
    // stdout. The process still exits normally afterwards.
    if let Err(e) = run().await {
        println!("Error: {}", e);
    }
}

// This is the main application logic
async fn run() -> Result<()> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let args = Cli::parse();

    // No username? Print the usage line and stop - quietly, on the
    // success path, before any network traffic happens.
    let username = match args.username {
        Some(name) => name,
        None => {
            println!("{}", cli::USAGE);
            return Ok(());
        }
    };

    // One immutable configuration value for the whole run:
    // the real GitHub API base URL and the fixed 10-second timeout
    let config = github::ApiConfig::default();

    // Fetch -> decode -> group, each step handing its output to the next
    let body = github::fetch_user_events(&config, &username).await?;
    let events = events::decode_events(&body)?;
    let group = events::group_events(&events);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        report::print_summary(&group);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Full decode -> group -> render chains over realistic feed bodies,
    // exercising the same path run() takes after the fetch.

    fn summarize(body: &[u8]) -> Vec<String> {
        let decoded = events::decode_events(body).unwrap();
        report::render_lines(&events::group_events(&decoded))
    }

    #[test]
    fn test_push_feed_end_to_end() {
        let body = br#"[{"type":"PushEvent","repo":{"name":"acme/widgets"},"payload":{"size":3}}]"#;
        assert_eq!(summarize(body), vec!["- Pushed 3 commits into acme/widgets"]);
    }

    #[test]
    fn test_star_feed_end_to_end() {
        let body = br#"[{"type":"WatchEvent","payload":{"action":"started"},"repo":{"name":"foo/bar"}}]"#;
        assert_eq!(summarize(body), vec!["- Starred foo/bar"]);
    }

    #[test]
    fn test_unstarred_watch_feed_renders_nothing() {
        let body = br#"[{"type":"WatchEvent","payload":{"action":"deleted"},"repo":{"name":"x/y"}}]"#;
        assert!(summarize(body).is_empty());
    }

    #[test]
    fn test_empty_feed_renders_nothing() {
        assert!(summarize(b"[]").is_empty());
    }
}
