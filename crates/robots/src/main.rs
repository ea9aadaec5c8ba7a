// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Scurry Contributors

//! Scurry CLI entry point.

use clap::{CommandFactory, Parser};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use scurry::cli::{CheckArgs, Cli, Command, EscapeArgs, OutputFormat, PathArgs, ResolveArgs};
use scurry::error::ExitCode;
use scurry::{escape, matcher, url as target};

fn init_logging() {
    let filter = EnvFilter::try_from_env("SCURRY_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("scurry: {}", e);
            match e.downcast_ref::<scurry::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Check(args)) => cmd_check(args),
        Some(Command::Path(args)) => {
            cmd_path(args);
            Ok(ExitCode::Success)
        }
        Some(Command::Escape(args)) => {
            cmd_escape(args);
            Ok(ExitCode::Success)
        }
        Some(Command::Resolve(args)) => {
            cmd_resolve(args)?;
            Ok(ExitCode::Success)
        }
    }
}

/// Match decision for one target URL.
#[derive(Serialize)]
struct Decision<'a> {
    url: &'a str,
    path: &'a str,
    matched: bool,
    /// The first pattern that matched, as authored.
    pattern: Option<&'a str>,
}

fn cmd_check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let raw_path = target::path_params_query(&args.url);
    let path = escape::maybe_escape(&raw_path);

    let mut matched = None;
    for pattern in &args.patterns {
        let canonical = escape::maybe_escape(pattern);
        debug!(pattern = %canonical, path = %path, "evaluating directive");
        if matcher::matches(&path, &canonical) {
            matched = Some(pattern.as_str());
            break;
        }
    }

    match args.output {
        OutputFormat::Json => {
            let decision = Decision {
                url: &args.url,
                path: path.as_ref(),
                matched: matched.is_some(),
                pattern: matched,
            };
            println!("{}", serde_json::to_string(&decision)?);
        }
        OutputFormat::Text => match matched {
            Some(pattern) => println!("match: {}", pattern),
            None => println!("no match"),
        },
    }

    Ok(if matched.is_some() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

fn cmd_path(args: &PathArgs) {
    println!("{}", target::path_params_query(&args.url));
}

fn cmd_escape(args: &EscapeArgs) {
    println!("{}", escape::maybe_escape(&args.value));
}

fn cmd_resolve(args: &ResolveArgs) -> anyhow::Result<()> {
    let base = Url::parse(&args.base)
        .map_err(|e| scurry::Error::Argument(format!("invalid base url {:?}: {}", args.base, e)))?;
    let combined = target::combine(&base, &args.reference)?;
    println!("{}", combined);
    Ok(())
}
