// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! CLI argument parsing with clap derive.

use clap::{Parser, Subcommand, ValueEnum};

/// Robots exclusion matching for web crawlers
#[derive(Parser)]
#[command(name = "scurry")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Check a URL against one or more directive patterns
    Check(CheckArgs),
    /// Print the path, params, and query portion of a URL
    Path(PathArgs),
    /// Print the canonical percent-escaped form of a value
    Escape(EscapeArgs),
    /// Resolve a relative reference against a base URL
    Resolve(ResolveArgs),
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Target URL (or bare path)
    #[arg(long, value_name = "URL")]
    pub url: String,

    /// Directive patterns as authored in robots.txt
    #[arg(value_name = "PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct PathArgs {
    /// URL to extract from
    #[arg(value_name = "URL")]
    pub url: String,
}

#[derive(clap::Args)]
pub struct EscapeArgs {
    /// Path or pattern to canonicalize
    #[arg(value_name = "VALUE")]
    pub value: String,
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Base URL the reference was found on
    #[arg(long, value_name = "URL")]
    pub base: String,

    /// Relative (or absolute) reference
    #[arg(value_name = "REF")]
    pub reference: String,
}

/// Output format for check results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
