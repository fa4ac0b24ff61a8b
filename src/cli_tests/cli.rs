//! CLI argument parsing tests.

use crate::{Cli, Commands, ConfigAction, Toggle};
use clap::{CommandFactory, Parser};
use layout_ordering::{Column, Section};
use search_widget_layout::LayoutMode;
use std::path::PathBuf;

const FILES: [&str; 4] = ["--form", "form.json", "--site", "site.json"];

fn parse_move(extra: &[&str]) -> Result<Cli, clap::Error> {
    let mut args = vec![
        "swl",
        "move",
        "--from-column",
        "columnTwo",
        "--from-section",
        "sectionOne",
        "--id",
        "p2",
        "--to-column",
        "columnTwo",
        "--to-section",
        "suggestedTerms",
    ];
    args.extend(FILES);
    args.extend(extra);
    Cli::try_parse_from(args)
}

#[test]
fn verify_cli() {
    Cli::command().debug_assert();
}

#[test]
fn test_show_parses_files_and_width() {
    let mut args = vec!["swl", "show", "--width", "100"];
    args.extend(FILES);
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command {
        Commands::Show { files, width } => {
            assert_eq!(files.form, PathBuf::from("form.json"));
            assert_eq!(files.site, PathBuf::from("site.json"));
            assert_eq!(width, Some(100));
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_show_requires_site() {
    let result = Cli::try_parse_from(["swl", "show", "--form", "form.json"]);
    assert!(result.is_err());
}

#[test]
fn test_move_with_index() {
    let cli = parse_move(&["--index", "0"]).unwrap();
    match cli.command {
        Commands::Move {
            from_column,
            from_section,
            id,
            to_column,
            to_section,
            position,
            ..
        } => {
            assert_eq!(from_column, Column::ColumnTwo);
            assert_eq!(from_section, Section::SectionOne);
            assert_eq!(id, "p2");
            assert_eq!(to_column, Column::ColumnTwo);
            assert_eq!(to_section, Section::SuggestedTerms);
            assert_eq!(position.index, Some(0));
            assert_eq!(position.pointer_y, None);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_move_with_pointer_accepts_negative_values() {
    let cli = parse_move(&["--pointer-y", "-20", "--container-top", "-100"]).unwrap();
    match cli.command {
        Commands::Move {
            position,
            container_top,
            ..
        } => {
            assert_eq!(position.pointer_y, Some(-20.0));
            assert_eq!(container_top, -100.0);
        }
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_move_container_top_defaults_to_zero() {
    let cli = parse_move(&["--pointer-y", "75"]).unwrap();
    match cli.command {
        Commands::Move { container_top, .. } => assert_eq!(container_top, 0.0),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_move_requires_a_position() {
    assert!(parse_move(&[]).is_err());
}

#[test]
fn test_move_rejects_index_and_pointer_together() {
    assert!(parse_move(&["--index", "1", "--pointer-y", "10"]).is_err());
}

#[test]
fn test_container_top_requires_pointer() {
    assert!(parse_move(&["--index", "1", "--container-top", "10"]).is_err());
}

#[test]
fn test_move_rejects_unknown_column() {
    let mut args = vec![
        "swl",
        "move",
        "--from-column",
        "columnThree",
        "--from-section",
        "sectionOne",
        "--id",
        "p2",
        "--to-column",
        "columnTwo",
        "--to-section",
        "sectionOne",
        "--index",
        "0",
    ];
    args.extend(FILES);
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_terms_on_and_off() {
    for (word, expected) in [("on", Toggle::On), ("off", Toggle::Off)] {
        let mut args = vec!["swl", "terms", word];
        args.extend(FILES);
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Commands::Terms { state, .. } => assert_eq!(state, expected),
            _ => panic!("unexpected command variant"),
        }
    }
}

#[test]
fn test_terms_rejects_other_values() {
    let mut args = vec!["swl", "terms", "maybe"];
    args.extend(FILES);
    assert!(Cli::try_parse_from(args).is_err());
}

#[test]
fn test_layout_modes() {
    for mode in LayoutMode::ALL {
        let cli =
            Cli::try_parse_from(["swl", "layout", mode.as_str(), "--form", "form.json"]).unwrap();
        match cli.command {
            Commands::Layout { mode: parsed, form } => {
                assert_eq!(parsed, mode);
                assert_eq!(form, PathBuf::from("form.json"));
            }
            _ => panic!("unexpected command variant"),
        }
    }
}

#[test]
fn test_layout_rejects_unknown_mode() {
    let result = Cli::try_parse_from(["swl", "layout", "three-column", "--form", "form.json"]);
    assert!(result.is_err());
}

#[test]
fn test_config_init_force() {
    let cli = Cli::try_parse_from(["swl", "config", "init", "--force"]).unwrap();
    match cli.command {
        Commands::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("unexpected command variant"),
    }
}

#[test]
fn test_global_config_flag() {
    let cli = Cli::try_parse_from(["swl", "config", "path", "--config", "/tmp/swl.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/swl.toml")));
    assert!(matches!(
        cli.command,
        Commands::Config {
            action: ConfigAction::Path
        }
    ));
}
