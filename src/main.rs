//! PreToolUse hook that reviews Swift edits for common SwiftUI/iOS
//! anti-patterns and attaches best-practice reminders.
//!
//! Never blocks: every request is approved, with a `message` listing the
//! reminders when any rule fires. Bad input is logged to stderr and approved.

mod hook;
mod rules;

use std::io::{self, Read, Write};
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    // stdout is reserved for the JSON response.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_target(false)
        .with_ansi(false)
        .with_writer(io::stderr)
        .try_init();

    let mut input = String::new();
    let response = match io::stdin().read_to_string(&mut input) {
        Ok(_) => hook::run(&input),
        Err(e) => hook::recover(e.into()),
    };

    let _ = writeln!(io::stdout(), "{}", response.to_json());
    process::exit(0);
}
