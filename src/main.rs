//! Search widget layout editor - CLI entry point
//!
//! Every mutating command loads the form, applies one editor event and writes
//! the form back only if the editor reports a change.

use clap::{Args, Parser, Subcommand, ValueEnum};
use layout_ordering::{Column, Destination, Section, Source};
use search_widget_layout::config::{
    default, error::ConfigError, loader::ConfigLoader, schema::Config, xdg,
};
use search_widget_layout::form::load_site_data;
use search_widget_layout::{logging, render_to_lines, Editor, FormStore, LayoutMode, Result};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[cfg(test)]
mod cli_tests;

/// Search widget layout editor
#[derive(Parser)]
#[command(name = "swl")]
#[command(version, about = "Edit the default/no-result layout of a search widget")]
struct Cli {
    /// Config file to use instead of the XDG location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Form and site data files
#[derive(Args, Debug, Clone, PartialEq)]
struct Files {
    /// Form document (JSON)
    #[arg(long)]
    form: PathBuf,

    /// Site data with collections, products, pages and suggested terms (JSON)
    #[arg(long)]
    site: PathBuf,
}

/// Where a moved item lands: an explicit index or a pointer position
#[derive(Args, Debug, Clone, PartialEq)]
#[group(required = true, multiple = false)]
struct Position {
    /// Insert index in the destination section
    #[arg(long)]
    index: Option<usize>,

    /// Pointer height of the drop, in pixels
    #[arg(long, allow_negative_numbers = true)]
    pointer_y: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the layout preview
    Show {
        #[command(flatten)]
        files: Files,

        /// Preview width in columns (defaults to `preview_width` from config)
        #[arg(long)]
        width: Option<u16>,
    },

    /// Move one item to another position, section or column
    Move {
        #[command(flatten)]
        files: Files,

        /// Column the item is in
        #[arg(long, value_parser = parse_column)]
        from_column: Column,

        /// Section the item is in
        #[arg(long, value_parser = parse_section)]
        from_section: Section,

        /// Item id
        #[arg(long)]
        id: String,

        /// Destination column
        #[arg(long, value_parser = parse_column)]
        to_column: Column,

        /// Destination section
        #[arg(long, value_parser = parse_section)]
        to_section: Section,

        #[command(flatten)]
        position: Position,

        /// Top edge of the destination section, in pixels
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true, requires = "pointer_y")]
        container_top: f64,
    },

    /// Switch suggested search terms on or off
    Terms {
        state: Toggle,

        #[command(flatten)]
        files: Files,
    },

    /// Choose the panel layout
    Layout {
        #[arg(value_parser = parse_layout)]
        mode: LayoutMode,

        /// Form document (JSON)
        #[arg(long)]
        form: PathBuf,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Write the default config file (to `--config` when given)
    Init {
        /// Overwrite an existing file, keeping a backup
        #[arg(long)]
        force: bool,
    },
    /// Print the config file path
    Path,
    /// Check that the config file parses
    Validate,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Toggle {
    On,
    Off,
}

fn parse_column(s: &str) -> std::result::Result<Column, String> {
    Column::ALL
        .into_iter()
        .find(|c| c.as_str() == s)
        .ok_or_else(|| format!("unknown column '{}' (expected columnOne or columnTwo)", s))
}

fn parse_section(s: &str) -> std::result::Result<Section, String> {
    Section::ALL
        .into_iter()
        .find(|c| c.as_str() == s)
        .ok_or_else(|| format!("unknown section '{}' (expected suggestedTerms or sectionOne)", s))
}

fn parse_layout(s: &str) -> std::result::Result<LayoutMode, String> {
    LayoutMode::known(s).ok_or_else(|| {
        let names: Vec<String> = LayoutMode::ALL
            .into_iter()
            .map(String::from)
            .collect();
        format!("unknown layout '{}' (expected one of {})", s, names.join(", "))
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Config commands must work even when the file is broken
    let config = match &cli.command {
        Commands::Config { .. } => Config::default(),
        _ => match load_config(cli.config.as_deref()) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Config error: {e}");
                return ExitCode::FAILURE;
            }
        },
    };
    logging::init(config.log.level);

    if let Err(e) = run(cli.command, cli.config.as_deref(), &config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn load_config(path: Option<&Path>) -> std::result::Result<Config, ConfigError> {
    match path {
        Some(path) => ConfigLoader::load_from_path(path),
        None => ConfigLoader::load_default(),
    }
}

fn run(command: Commands, config_path: Option<&Path>, config: &Config) -> Result<()> {
    let row_height = f64::from(config.editor.row_height);

    match command {
        Commands::Show { files, width } => {
            let editor = open(&files, row_height)?;
            let width = width.unwrap_or(config.editor.preview_width);
            let default_layout = config.editor.default_layout.clone();
            for line in render_to_lines(&editor, default_layout, width, 0) {
                println!("{line}");
            }
        }
        Commands::Move {
            files,
            from_column,
            from_section,
            id,
            to_column,
            to_section,
            position,
            container_top,
        } => {
            let mut editor = open(&files, row_height)?;
            let source = Source::new(from_column, from_section, id.clone());
            let index = match (position.index, position.pointer_y) {
                (Some(index), _) => {
                    editor.move_to(&source, Destination::new(to_column, to_section, index))?;
                    index
                }
                (None, Some(pointer_y)) => {
                    editor.drop_at(&source, to_column, to_section, pointer_y, container_top)?
                }
                (None, None) => unreachable!("clap requires --index or --pointer-y"),
            };
            save_if_dirty(&files.form, editor)?;
            println!("Moved {id} to {to_column}/{to_section} at index {index}");
        }
        Commands::Terms { state, files } => {
            let mut editor = open(&files, row_height)?;
            editor.set_suggested_terms(state == Toggle::On);
            save_if_dirty(&files.form, editor)?;
        }
        Commands::Layout { mode, form } => {
            let name = mode.as_str().to_string();
            let mut editor = Editor::new(FormStore::load(&form)?, Default::default(), row_height);
            editor.set_layout(mode);
            save_if_dirty(&form, editor)?;
            println!("Layout set to {name}");
        }
        Commands::Config { action } => match action {
            ConfigAction::Init { force } => {
                let path = default::create_default_config(config_path, force)?;
                println!("Created configuration at {}", path.display());
            }
            ConfigAction::Path => {
                let path = config_path.map_or_else(xdg::config_path, Path::to_path_buf);
                println!("{}", path.display());
            }
            ConfigAction::Validate => {
                let config = load_config(config_path)?;
                println!("Configuration is valid");
                println!("{config:#?}");
            }
        },
    }
    Ok(())
}

fn open(files: &Files, row_height: f64) -> Result<Editor> {
    let form = FormStore::load(&files.form)?;
    let site = load_site_data(&files.site)?;
    Ok(Editor::new(form, site, row_height))
}

fn save_if_dirty(path: &Path, editor: Editor) -> Result<()> {
    if editor.is_dirty() {
        FormStore::save(path, &editor.into_form())?;
    } else {
        tracing::debug!("No changes, {} left as is", path.display());
    }
    Ok(())
}
