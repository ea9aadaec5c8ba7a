#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn parse_bare_invocation() {
    let cli = Cli::parse_from(["scurry"]);
    assert!(cli.command.is_none());
}

#[test]
fn parse_check_command() {
    let cli = Cli::parse_from(["scurry", "check", "--url", "http://example.com/a", "/a"]);
    if let Some(Command::Check(args)) = cli.command {
        assert_eq!(args.url, "http://example.com/a");
        assert_eq!(args.patterns, vec!["/a".to_string()]);
        assert!(matches!(args.output, OutputFormat::Text));
    } else {
        panic!("expected check command");
    }
}

#[test]
fn parse_check_with_multiple_patterns() {
    let cli = Cli::parse_from(["scurry", "check", "--url", "/x", "/a", "/b*", "/c$"]);
    if let Some(Command::Check(args)) = cli.command {
        assert_eq!(args.patterns.len(), 3);
    } else {
        panic!("expected check command");
    }
}

#[test]
fn check_requires_at_least_one_pattern() {
    let result = Cli::try_parse_from(["scurry", "check", "--url", "/x"]);
    assert!(result.is_err());
}

#[test]
fn parse_check_with_json_output() {
    let cli = Cli::parse_from(["scurry", "check", "--url", "/x", "-o", "json", "/a"]);
    if let Some(Command::Check(args)) = cli.command {
        assert!(matches!(args.output, OutputFormat::Json));
    } else {
        panic!("expected check command");
    }
}

#[test]
fn parse_path_command() {
    let cli = Cli::parse_from(["scurry", "path", "http://example.com/a?b=c"]);
    if let Some(Command::Path(args)) = cli.command {
        assert_eq!(args.url, "http://example.com/a?b=c");
    } else {
        panic!("expected path command");
    }
}

#[test]
fn parse_escape_command() {
    let cli = Cli::parse_from(["scurry", "escape", "%aa"]);
    assert!(matches!(cli.command, Some(Command::Escape(_))));
}

#[test]
fn parse_resolve_command() {
    let cli = Cli::parse_from(["scurry", "resolve", "--base", "http://example.com/a", "../b"]);
    if let Some(Command::Resolve(args)) = cli.command {
        assert_eq!(args.base, "http://example.com/a");
        assert_eq!(args.reference, "../b");
    } else {
        panic!("expected resolve command");
    }
}
