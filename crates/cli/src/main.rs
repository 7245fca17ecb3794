//! Headless launcher for the osvis engines.
//!
//! This binary stands in for the desktop shell. It performs:
//! 1. **Banker's run:** Replays key presses (arrows, `r`) against the safety checker and prints every step.
//! 2. **Paging run:** Advances the page-replacement simulator on a timer until the reference string is exhausted.
//! 3. **Full run:** Both demonstrations, one after the other.

mod render;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use osvis_core::config::Config;
use osvis_core::{Controller, Renderer, Target};

use crate::render::TextRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "osvis",
    author,
    version,
    about = "Step through the Banker's safety check and FIFO/LRU/Optimal page replacement",
    long_about = "Step through the Banker's safety check and FIFO/LRU/Optimal page replacement.\n\nExamples:\n  osvis bankers\n  osvis bankers --keys right,right,left,r\n  osvis paging --interval-ms 500\n  osvis --json run"
)]
struct Cli {
    /// JSON configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log every step, fault and eviction.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print snapshots as line-delimited JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Walk the Banker's safe sequence.
    Bankers {
        /// Key presses to replay (right/down, left/up, r). Defaults to advancing to the end.
        #[arg(long, value_delimiter = ',')]
        keys: Vec<String>,
    },

    /// Run the page-replacement simulator on a timer.
    Paging {
        /// Milliseconds between steps; overrides the config file.
        #[arg(long)]
        interval_ms: Option<u64>,
    },

    /// Run both demonstrations in turn.
    Run {
        /// Milliseconds between page-replacement steps; overrides the config file.
        #[arg(long)]
        interval_ms: Option<u64>,
    },
}

type App = Controller<TextRenderer<Stdout>>;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => Config::default(),
    };
    init_tracing(cli.verbose || config.general.trace);

    let renderer = TextRenderer::new(io::stdout(), cli.json);
    let mut app = Controller::from_config(&config, renderer).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    match cli.command {
        Some(Commands::Bankers { keys }) => run_bankers(&mut app, &keys),
        Some(Commands::Paging { interval_ms }) => run_paging(&mut app, &config, interval_ms),
        Some(Commands::Run { interval_ms }) => {
            run_bankers(&mut app, &[]);
            run_paging(&mut app, &config, interval_ms);
        }
        None => {
            eprintln!("osvis: pass a subcommand");
            eprintln!();
            eprintln!("  osvis bankers              Walk the Banker's safe sequence");
            eprintln!("  osvis paging               Timer-driven page replacement");
            eprintln!("  osvis run                  Both, one after the other");
            eprintln!();
            eprintln!("  osvis --help  for full options");
            process::exit(1);
        }
    }
}

/// Installs the fmt subscriber; `RUST_LOG` wins over the default level.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Renders the initial Banker's state, then replays `keys` (or advances to the end).
fn run_bankers(app: &mut App, keys: &[String]) {
    let initial = app.checker().snapshot();
    app.renderer_mut().render_safety(&initial);

    if keys.is_empty() {
        while !app.checker().is_complete() && !app.renderer().is_closed() {
            let _ = app.handle_key(Target::Bankers, "right");
        }
    } else {
        for key in keys {
            if app.renderer().is_closed() {
                break;
            }
            if !app.handle_key(Target::Bankers, key) {
                warn!(key = %key, "unbound key ignored");
            }
        }
    }
    info!(step = app.checker().step(), "banker's walk finished");
}

/// Renders the initial paging state, then ticks until the reference string is exhausted
/// or the output is closed.
fn run_paging(app: &mut App, config: &Config, interval_ms: Option<u64>) {
    let interval = if config.controller.auto_advance {
        Duration::from_millis(interval_ms.unwrap_or(config.controller.tick_interval_ms))
    } else {
        Duration::ZERO
    };

    let initial = app.simulator().snapshot();
    app.renderer_mut().render_paging(&initial);

    while !app.renderer().is_closed() {
        thread::sleep(interval);
        if !app.tick() {
            break;
        }
    }

    let last = app.simulator().snapshot();
    app.renderer_mut().print_statistics(&last);
}
