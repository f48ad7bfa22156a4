//! rulelens - Rules Package Lens
//!
//! A small desktop viewer for rule target app metadata. It loads a
//! pre-generated rules dataset, offers a dropdown of the apps named in it,
//! and shows the package name and description derived for the selected app.
//! The selection persists across runs.
//!
//! # Architecture
//!
//! - `core`: Dataset model, derived app list, lookup rules, and loading
//! - `app`: GUI application state and event handling
//! - `config`: Selection persistence
//! - `utils`: XDG directory helpers
//!
//! # Usage
//!
//! ```bash
//! # Run the GUI application
//! rulelens
//!
//! # CLI commands
//! rulelens list                    # List apps in the dataset
//! rulelens show "OPT Portal"       # Show package metadata for one app
//! rulelens status                  # Show the persisted selection
//! rulelens --data other.json list  # Use a different dataset file
//! ```

mod app;
mod config;
mod core;
mod utils;

use clap::{Parser, Subcommand};
use iced::Size;
use shadow_rs::shadow;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::core::dataset::EMPTY_FIELD;

shadow!(build);

#[derive(Parser)]
#[command(name = "rulelens")]
#[command(about = "Rules Package Lens - a viewer for rule target app metadata", long_about = None)]
#[command(version = build::CLAP_LONG_VERSION)]
struct Cli {
    /// Path to the rules dataset JSON file
    #[arg(
        long,
        value_name = "FILE",
        global = true,
        default_value = core::source::DEFAULT_DATA_PATH
    )]
    data: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all apps named in the dataset
    List,
    /// Show package name and description for one app
    Show {
        /// Name of the app to look up
        app: String,
    },
    /// Show the persisted selection
    Status,
}

fn main() -> ExitCode {
    let _ = crate::utils::ensure_dirs();
    let cli = Cli::parse();

    if let Some(command) = cli.command {
        // Create Tokio runtime only for CLI commands
        let runtime = tokio::runtime::Runtime::new().expect("Failed to create Tokio runtime");
        match runtime.block_on(handle_cli(command, &cli.data)) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Error: {e}");
                ExitCode::FAILURE
            }
        }
    } else {
        // GUI runs in normal sync context (Iced has its own async runtime)
        launch_gui(cli.data)
    }
}

async fn handle_cli(command: Commands, data_path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::List => {
            let dataset = core::source::load_dataset(data_path).await?;
            let config = config::load_config().await;
            let selected = config.selected_app.unwrap_or_default();
            println!("Apps (* = selected):");
            for app in dataset.app_names() {
                if app == selected {
                    println!("  * {app}");
                } else {
                    println!("    {app}");
                }
            }
        }
        Commands::Show { app } => {
            let dataset = core::source::load_dataset(data_path).await?;
            let details = dataset.details(&app);
            println!("App:         {app}");
            println!(
                "Package:     {}",
                details.package_name.as_deref().unwrap_or(EMPTY_FIELD)
            );
            println!(
                "Description: {}",
                details.description.as_deref().unwrap_or(EMPTY_FIELD)
            );
        }
        Commands::Status => {
            let config = config::load_config().await;
            match config.selected_app.filter(|s| !s.is_empty()) {
                Some(app) => {
                    let dataset = core::source::load_dataset(data_path).await?;
                    if dataset.contains_app(&app) {
                        println!("Selected app: {app}");
                    } else {
                        println!("Selected app: {app} (not in current dataset)");
                    }
                }
                None => println!("No app selected."),
            }
        }
    }
    Ok(())
}

fn launch_gui(data_path: PathBuf) -> ExitCode {
    // Set up logging to file
    if let Some(mut log_path) = crate::utils::get_state_dir() {
        log_path.push("rulelens.log");
        if let Ok(file) = std::fs::File::create(log_path) {
            tracing_subscriber::fmt().with_writer(file).init();
        } else {
            tracing_subscriber::fmt::init();
        }
    } else {
        tracing_subscriber::fmt::init();
    }

    let result = iced::application(
        move || app::State::new(data_path.clone()),
        app::State::update,
        app::State::view,
    )
    .window(iced::window::Settings {
        size: Size::new(560.0, 460.0),
        ..Default::default()
    })
    .title("Rules Package Lens")
    .theme(|_state: &app::State| iced::Theme::Dark)
    .run();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
