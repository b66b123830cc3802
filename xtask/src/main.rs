use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process::Command;

#[derive(Parser)]
#[command(name = "xtask", about = "Workspace automation for pathforge")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run fmt, clippy, tests and doc
    Check,
    /// Check formatting
    Fmt,
    /// Lint every target with warnings denied
    Clippy,
    /// Run all tests
    Test,
    /// Run the level generation benchmark
    Bench,
    /// Build rustdoc for the workspace
    Doc,
    /// Build the entire workspace
    Build,
}

impl Commands {
    fn cargo_args(&self) -> &'static [&'static str] {
        match self {
            Commands::Check => &[],
            Commands::Fmt => &["fmt", "--all", "--", "--check"],
            Commands::Clippy => &[
                "clippy",
                "--workspace",
                "--all-targets",
                "--",
                "-D",
                "warnings",
            ],
            Commands::Test => &["test", "--workspace"],
            Commands::Bench => &[
                "bench",
                "-p",
                "pathforge-level",
                "--bench",
                "bench_level_build",
            ],
            Commands::Doc => &["doc", "--workspace", "--no-deps"],
            Commands::Build => &["build", "--workspace"],
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check => {
            for step in [
                Commands::Fmt,
                Commands::Clippy,
                Commands::Test,
                Commands::Doc,
            ] {
                cargo(step.cargo_args())?;
            }
        }
        other => cargo(other.cargo_args())?,
    }

    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    println!("==> cargo {}", args.join(" "));
    let status = Command::new("cargo").args(args).status()?;
    if !status.success() {
        anyhow::bail!("cargo {} failed ({status})", args[0]);
    }
    Ok(())
}
