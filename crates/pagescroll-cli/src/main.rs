use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pagescroll_core::WidgetConfig;

mod commands;
mod sim;

#[derive(Parser)]
#[command(name = "pagescroll")]
#[command(author, version, about = "Drive the scroll-button widget against a simulated page")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ~/.config/pagescroll/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Press the button a number of times and report every frame
    Simulate {
        /// Total document height in pixels
        #[arg(long, default_value_t = 5000.0)]
        page_height: f64,
        #[arg(long, default_value_t = 1000.0)]
        viewport_width: f64,
        #[arg(long, default_value_t = 800.0)]
        viewport_height: f64,
        /// Number of button presses
        #[arg(short = 'n', long, default_value_t = 1)]
        presses: u32,
        /// Simulate a manual scroll of 200px this many milliseconds into each animation
        #[arg(long)]
        interrupt_at: Option<u64>,
    },
    /// Drag the button to a horizontal position and let it snap
    Drag {
        /// Pointer X where the drag is released
        #[arg(long)]
        to: f64,
        #[arg(long, default_value_t = 1000.0)]
        viewport_width: f64,
        /// Never deliver the transition-end event (exercises the fallback timer)
        #[arg(long)]
        no_transition_end: bool,
    },
    /// Fetch a shortcuts document and print it as a tree
    Shortcuts {
        /// Document URL (defaults to the configured `shortcuts`)
        url: Option<String>,
    },
    /// Print the effective configuration
    Config {
        /// Write it to the configuration file
        #[arg(long)]
        write: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.unwrap_or_else(WidgetConfig::config_path);
    let config = WidgetConfig::load_or_default(&config_path);

    match cli.command {
        Commands::Simulate {
            page_height,
            viewport_width,
            viewport_height,
            presses,
            interrupt_at,
        } => commands::simulate::run(
            config,
            commands::simulate::Page {
                height: page_height,
                viewport_width,
                viewport_height,
            },
            presses,
            interrupt_at,
        ),
        Commands::Drag {
            to,
            viewport_width,
            no_transition_end,
        } => commands::drag::run(config, to, viewport_width, !no_transition_end).await,
        Commands::Shortcuts { url } => commands::shortcuts::run(&config, url.as_deref()).await,
        Commands::Config { write } => commands::config::run(&config, &config_path, write),
    }
}
