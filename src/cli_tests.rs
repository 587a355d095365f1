use clap::Parser;

use super::*;

#[test]
fn audit_defaults_to_current_directory() {
    let cli = Cli::parse_from(["a11y-guard", "audit"]);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit subcommand");
    };
    assert_eq!(args.path, PathBuf::from("."));
    assert!(args.rules.is_none());
    assert!(!args.warn_only);
}

#[test]
fn audit_accepts_comma_separated_rules() {
    let cli = Cli::parse_from(["a11y-guard", "audit", "--rules", "1.1.1,keyboard"]);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit subcommand");
    };
    assert_eq!(
        args.rules,
        Some(vec!["1.1.1".to_string(), "keyboard".to_string()])
    );
}

#[test]
fn audit_collects_repeated_excludes() {
    let cli = Cli::parse_from([
        "a11y-guard",
        "audit",
        "-x",
        "**/node_modules/**",
        "-x",
        "**/dist/**",
    ]);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit subcommand");
    };
    assert_eq!(args.exclude.len(), 2);
}

#[test]
fn verbose_flag_counts_occurrences() {
    let cli = Cli::parse_from(["a11y-guard", "-vv", "audit"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn verbose_is_global_after_the_subcommand() {
    let cli = Cli::parse_from(["a11y-guard", "audit", "-v"]);
    assert_eq!(cli.verbose, 1);
}

#[test]
fn format_parses_known_values() {
    let cli = Cli::parse_from(["a11y-guard", "audit", "--format", "json"]);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit subcommand");
    };
    assert_eq!(args.format, Some(OutputFormat::Json));
}

#[test]
fn unknown_format_is_rejected() {
    let result = Cli::try_parse_from(["a11y-guard", "audit", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn min_conformity_parses_as_float() {
    let cli = Cli::parse_from(["a11y-guard", "audit", "--min-conformity", "87.5"]);
    let Commands::Audit(args) = cli.command else {
        panic!("expected audit subcommand");
    };
    assert_eq!(args.min_conformity, Some(87.5));
}

#[test]
fn init_has_a_default_output_path() {
    let cli = Cli::parse_from(["a11y-guard", "init"]);
    let Commands::Init(args) = cli.command else {
        panic!("expected init subcommand");
    };
    assert_eq!(args.output, PathBuf::from(".a11y-guard.toml"));
    assert!(!args.force);
}

#[test]
fn missing_subcommand_is_an_error() {
    let result = Cli::try_parse_from(["a11y-guard"]);
    assert!(result.is_err());
}
