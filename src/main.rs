//! Dockwatch - BIXI Montréal station occupancy from the terminal
//!
//! Runs the fetch-or-cache pipeline once and prints the projected panel.
//! Diagnostics go to stderr so the panel output stays clean.

mod app;
mod cache;
mod cli;
mod data;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::StationPanel;
use cli::{Cli, StartupConfig};

/// Prints the display-ready panel to stdout
fn render_panel(panel: &StationPanel, show_ebikes: bool) {
    for row in &panel.rows {
        if show_ebikes {
            println!(
                "{}: {} bikes, {} e-bikes, {} docks free",
                row.label, row.classic_bikes, row.ebikes, row.free_docks
            );
        } else {
            println!(
                "{}: {} bikes, {} docks free",
                row.label, row.classic_bikes, row.free_docks
            );
        }
    }

    let offline_marker = if panel.online { "" } else { " (offline)" };
    println!(
        "Updated at {}{}",
        panel.updated_at.format("%H:%M:%S"),
        offline_marker
    );
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dockwatch=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(2);
        }
    };

    match app::run(&config).await {
        Ok(panel) => render_panel(&panel, config.stations.show_ebikes),
        Err(error) => {
            eprintln!("Error: {}", error);
            std::process::exit(1);
        }
    }
}
