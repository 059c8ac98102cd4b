//! Workspace chore runner: `cargo run -p xtask -- <task>`.

use std::process::{Command, exit};

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "Workspace chores")]
struct Cli {
    #[command(subcommand)]
    command: Task,
}

#[derive(Subcommand)]
enum Task {
    /// Check formatting.
    Fmt,
    /// Run clippy over all targets.
    Clippy,
    /// Run the test suite.
    Test,
    /// Everything CI runs: fmt, clippy, test.
    Ci,
}

/// Run a cargo invocation, reporting whether it succeeded.
fn cargo(args: &[&str]) -> bool {
    let status = Command::new("cargo").args(args).status();
    matches!(status, Ok(s) if s.success())
}

fn fmt() -> bool {
    cargo(&["fmt", "--all", "--check"])
}

fn clippy() -> bool {
    cargo(&["clippy", "--workspace", "--all-targets"])
}

fn test() -> bool {
    cargo(&["test", "--workspace"])
}

fn main() {
    let cli = Cli::parse();
    let ok = match cli.command {
        Task::Fmt => fmt(),
        Task::Clippy => clippy(),
        Task::Test => test(),
        Task::Ci => fmt() && clippy() && test(),
    };
    if !ok {
        exit(1);
    }
}
