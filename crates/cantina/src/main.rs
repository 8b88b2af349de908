// SPDX-FileCopyrightText: 2026 Cantina Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cantina - a restaurant ordering client.
//!
//! Binary entry point: each subcommand corresponds to one screen of the
//! ordering flow, with navigation and order state persisted between
//! invocations.

mod app;

use std::path::PathBuf;

use cantina_client::MenuClient;
use cantina_order::OrderCoordinator;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::app::App;

/// Cantina - browse a restaurant menu and submit orders.
#[derive(Parser, Debug)]
#[command(name = "cantina", version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the XDG hierarchy).
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the menu categories.
    Categories,
    /// List the items of one category.
    Menu { category: String },
    /// Show the detail of one item.
    Item { category: String, id: i64 },
    /// Add an item to the order.
    Add { category: String, id: i64 },
    /// Remove the order entry at an index.
    Remove { index: usize },
    /// Show the current order.
    Show,
    /// Submit the current order.
    Submit {
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// Print the navigation path a relaunch would restore.
    Resume,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => cantina_config::load_config_from_path(path),
        None => cantina_config::load_config(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            eprintln!("cantina: invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.app.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    let coordinator = OrderCoordinator::new(MenuClient::new(config.api.base_url.clone()));
    let app = App::new(coordinator, &config.app.state_path);

    let result = match cli.command {
        Commands::Categories => app.categories().await,
        Commands::Menu { category } => app.menu(&category).await,
        Commands::Item { category, id } => app.item(&category, id).await,
        Commands::Add { category, id } => app.add(&category, id).await,
        Commands::Remove { index } => app.remove(index),
        Commands::Show => {
            app.show();
            Ok(())
        }
        Commands::Submit { yes } => app.submit(yes).await,
        Commands::Resume => {
            app.resume();
            Ok(())
        }
    };

    app.save();

    if let Err(e) = result {
        eprintln!("cantina: {e}");
        std::process::exit(1);
    }
}
