// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Option<T>: A value that may or may not be present
// - Derive macros: Automatically generate code for our types
// =============================================================================

use clap::Parser;

// The usage line we print when no username was given.
// We print this ourselves (instead of letting clap error out) so that a
// missing argument stays on the normal exit path, like simply returning.
pub const USAGE: &str = "Usage: gh-activity <github_username>";

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "gh-activity",
    version = "0.1.0",
    about = "Summarize a GitHub user's recent public activity",
    long_about = "gh-activity fetches a user's public event feed from the GitHub API \
                  and prints a short summary of their recent pushes and starred repositories."
)]
pub struct Cli {
    /// GitHub username whose public activity to summarize
    ///
    /// This is a positional argument. It's an Option so that running the
    /// tool with no arguments prints a friendly usage line instead of a
    /// clap error with a non-zero exit code.
    pub username: Option<String>,

    /// Output the grouped events as JSON instead of summary lines
    ///
    /// This is an optional flag: --json
    /// #[arg(long)] creates a flag from the field name
    #[arg(long)]
    pub json: bool,
}
