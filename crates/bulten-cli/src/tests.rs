//! CLI tests
//!
//! Argument parsing and shared helper tests.

use clap::Parser;

use crate::cli::{Cli, Commands};
use crate::commands::{load_config, truncate};

#[test]
fn test_cli_verifies() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}

#[test]
fn test_parse_fetch_defaults() {
    let cli = Cli::try_parse_from(["bulten", "fetch"]).unwrap();
    assert!(!cli.verbose);
    assert!(cli.config.is_none());
    match cli.command {
        Commands::Fetch { top, no_heat } => {
            assert!(top.is_none());
            assert!(!no_heat);
        }
        _ => panic!("expected fetch command"),
    }
}

#[test]
fn test_parse_fetch_with_options() {
    let cli = Cli::try_parse_from(["bulten", "fetch", "--top", "5", "--no-heat"]).unwrap();
    match cli.command {
        Commands::Fetch { top, no_heat } => {
            assert_eq!(top, Some(5));
            assert!(no_heat);
        }
        _ => panic!("expected fetch command"),
    }
}

#[test]
fn test_parse_export_with_dir() {
    let cli = Cli::try_parse_from(["bulten", "export", "--dir", "/tmp/out"]).unwrap();
    match cli.command {
        Commands::Export { dir, top } => {
            assert_eq!(dir.unwrap().to_str().unwrap(), "/tmp/out");
            assert!(top.is_none());
        }
        _ => panic!("expected export command"),
    }
}

#[test]
fn test_parse_global_flags() {
    let cli = Cli::try_parse_from(["bulten", "config", "--verbose"]).unwrap();
    assert!(cli.verbose);
    assert!(matches!(cli.command, Commands::Config));
}

#[test]
fn test_load_config_top_override() {
    let config = load_config(None, Some(7)).unwrap();
    assert_eq!(config.scoring.top_n, 7);
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("a very long headline here", 10), "a very ...");
    // Multi-byte Turkish text truncates on character boundaries.
    assert_eq!(truncate("Sanayi üretiminde büyüme", 10), "Sanayi ...");
}
