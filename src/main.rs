mod app;
mod console;
mod demo;
mod logging;
mod render;
mod selection;
mod web;

use std::net::SocketAddr;

use clap::Parser;

use app::{App, AppConfig, Mode};

/// Optimal Urinal Position Finder
///
/// Given the number of urinals and the occupied ones, recommends the free
/// position farthest from everybody else. Runs as an interactive prompt by
/// default, answers once with --total, or serves a web form with --serve.
#[derive(Parser, Debug)]
#[command(name = "urinal-finder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Total number of urinals (1-20); answers once instead of prompting
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    total: Option<i64>,

    /// Occupied positions, comma-separated (used with --total)
    #[arg(short, long, value_name = "LIST", requires = "total", allow_hyphen_values = true)]
    occupied: Option<String>,

    /// Serve the web form and JSON endpoint
    #[arg(long, conflicts_with_all = ["total", "demo"])]
    serve: bool,

    /// Address to listen on with --serve
    #[arg(long, value_name = "ADDR", default_value = web::DEFAULT_BIND, requires = "serve")]
    bind: SocketAddr,

    /// Show a random scenario
    #[arg(long, conflicts_with = "total")]
    demo: bool,

    /// Seed for --demo
    #[arg(long, requires = "demo")]
    seed: Option<u64>,

    /// Use ASCII glyphs instead of emoji
    #[arg(long)]
    ascii: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.serve {
            Mode::Serve
        } else if self.demo {
            Mode::Demo
        } else if let Some(total) = self.total {
            Mode::OneShot {
                total,
                occupied: self.occupied.clone().unwrap_or_default(),
            }
        } else {
            Mode::Interactive
        }
    }

    fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.serve {
            "info"
        } else {
            "warn"
        }
    }

    fn into_config(self) -> AppConfig {
        AppConfig {
            mode: self.mode(),
            bind: self.bind,
            seed: self.seed,
            appearance: render::Appearance::detect(self.ascii),
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_level());

    let app = App::new(cli.into_config());

    if let Err(e) = app.run().await {
        eprintln!("An error occurred: {e:#}");
        std::process::exit(1);
    }
}
