//! NetSketch - network segment and firewall rule sketchpad
//!
//! A desktop editor for laying out network segments on a topology canvas and
//! documenting the firewall rules between them.
//!
//! # Architecture
//!
//! - `netsketch` (library): data model, persistence, export
//! - `app`: GUI application state, handlers and views
//! - `theme`: color palette shared by the views and the canvas
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! netsketch
//!
//! # Throwaway session, nothing is written to disk
//! netsketch --ephemeral
//!
//! # CLI commands
//! netsketch list                          # Print segments and rules
//! netsketch export --format yaml          # Write an export into the current dir
//! netsketch export --output net.json      # Write an export to a given path
//! ```

mod app;
mod theme;

use clap::{Parser, Subcommand};
use iced::Size;
use netsketch::core::export::{self, ExportFormat};
use netsketch::core::ordering::by_priority;
use netsketch::core::storage::{FileStore, KeyValueStore, MemoryStore};
use netsketch::core::store::NetworkStore;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

shadow_rs::shadow!(build);

#[derive(Parser)]
#[command(name = "netsketch")]
#[command(version = build::CLAP_LONG_VERSION)]
#[command(about = "Sketch network segments and document firewall rules", long_about = None)]
struct Cli {
    /// Directory holding segments, rules and preferences
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Log filter (e.g. "debug", "netsketch=trace"); overrides the saved preference
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Start with empty in-memory data and save nothing
    #[arg(long, global = true)]
    ephemeral: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all segments and the rules in evaluation order
    List,
    /// Export segments and rules to a JSON or YAML file
    Export {
        /// Output format (json, yaml)
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,
        /// Destination file; defaults to a timestamped name in the current directory
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let data_dir = cli.data_dir.clone().or_else(netsketch::utils::get_data_dir);
    if let Some(dir) = &data_dir
        && let Err(e) = netsketch::utils::ensure_dir(dir)
    {
        eprintln!("Warning: cannot create {}: {e}", dir.display());
    }

    let config = data_dir
        .as_deref()
        .map(netsketch::config::load_config)
        .unwrap_or_default();
    let filter = cli
        .log_level
        .clone()
        .unwrap_or_else(|| config.log_level.clone());

    if let Some(command) = cli.command {
        init_stderr_logging(&filter);
        let result = cli_storage(data_dir.as_deref(), cli.ephemeral)
            .map_err(Into::into)
            .and_then(|storage| handle_cli(command, storage));
        match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        init_file_logging(&filter, data_dir.as_deref());
        launch_gui(app::LaunchOptions {
            data_dir,
            ephemeral: cli.ephemeral,
            config,
        })
    }
}

fn env_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|e| {
        eprintln!("Warning: invalid log filter '{directive}': {e}");
        EnvFilter::new("info")
    })
}

fn init_stderr_logging(directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(directive))
        .with_writer(std::io::stderr)
        .init();
}

/// Logs go to `netsketch.log` in the state dir, then the data dir, then stderr
fn init_file_logging(directive: &str, data_dir: Option<&Path>) {
    let log_dir = netsketch::utils::get_state_dir()
        .filter(|dir| netsketch::utils::ensure_dir(dir).is_ok())
        .or_else(|| data_dir.map(Path::to_path_buf));

    let file = log_dir.and_then(|dir| std::fs::File::create(dir.join("netsketch.log")).ok());
    match file {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(env_filter(directive))
            .with_ansi(false)
            .with_writer(file)
            .init(),
        None => init_stderr_logging(directive),
    }
}

/// Storage for a CLI run: the data directory, or an empty map with `--ephemeral`
fn cli_storage(
    data_dir: Option<&Path>,
    ephemeral: bool,
) -> netsketch::Result<Box<dyn KeyValueStore>> {
    if ephemeral {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = match data_dir {
        Some(dir) => FileStore::new(dir),
        None => FileStore::in_data_dir()?,
    };
    tracing::debug!("Using data directory {}", store.dir().display());
    Ok(Box::new(store))
}

fn handle_cli(
    command: Commands,
    storage: Box<dyn KeyValueStore>,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = NetworkStore::load_boxed(storage);

    match command {
        Commands::List => {
            println!("Segments ({}):", store.segments().len());
            for segment in store.segments() {
                println!(
                    "  {:<20} {:<18} {}",
                    segment.name, segment.cidr, segment.role
                );
            }
            println!();
            println!("Firewall rules ({}):", store.rules().len());
            for rule in by_priority(store.rules()) {
                println!(
                    "  [{:>4}] {:<6} {} -> {} {}/{}  {}",
                    rule.priority,
                    rule.action,
                    rule.source,
                    rule.destination,
                    rule.protocol,
                    rule.port,
                    rule.name
                );
            }
        }
        Commands::Export { format, output } => {
            let file = export::prepare(
                store.segments(),
                store.rules(),
                format,
                chrono::Utc::now(),
            )?;
            let path = match output {
                Some(path) => {
                    std::fs::write(&path, &file.contents)?;
                    path
                }
                None => export::write_to_dir(Path::new("."), &file)?,
            };
            tracing::info!("Exported {} to {}", file.format, path.display());
            println!("✓ Exported {} to {}", file.format, path.display());
        }
    }
    Ok(())
}

fn launch_gui(options: app::LaunchOptions) -> ExitCode {
    tracing::info!(
        "Starting NetSketch {} (ephemeral: {})",
        env!("CARGO_PKG_VERSION"),
        options.ephemeral
    );

    let result = iced::application(
        move || app::State::new(options.clone()),
        app::State::update,
        app::State::view,
    )
    .subscription(app::State::subscription)
    .window(iced::window::Settings {
        size: Size::new(1200.0, 800.0),
        ..Default::default()
    })
    .title("NetSketch")
    .theme(|_state: &app::State| iced::Theme::Dark)
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("GUI exited with error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netsketch::core::store::SEGMENTS_KEY;

    #[test]
    fn test_ephemeral_accepted_after_subcommand() {
        let cli = Cli::try_parse_from(["netsketch", "list", "--ephemeral"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(cli.command, Some(Commands::List)));

        let cli =
            Cli::try_parse_from(["netsketch", "--ephemeral", "export", "-f", "yaml"]).unwrap();
        assert!(cli.ephemeral);
        assert!(matches!(
            cli.command,
            Some(Commands::Export {
                format: ExportFormat::Yaml,
                output: None
            })
        ));
    }

    #[test]
    fn test_ephemeral_cli_ignores_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(format!("{SEGMENTS_KEY}.json")), "[]").unwrap();

        let storage = cli_storage(Some(dir.path()), true).unwrap();
        assert!(storage.get(SEGMENTS_KEY).unwrap().is_none());

        let storage = cli_storage(Some(dir.path()), false).unwrap();
        assert_eq!(storage.get(SEGMENTS_KEY).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_ephemeral_export_refuses_empty_data() {
        let storage = cli_storage(None, true).unwrap();
        let command = Commands::Export {
            format: ExportFormat::Json,
            output: None,
        };
        let err = handle_cli(command, storage).unwrap_err();
        assert_eq!(err.to_string(), "No data to export");
    }
}
