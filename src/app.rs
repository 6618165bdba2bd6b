use std::io::{self, Write};
use std::net::SocketAddr;

use tracing::debug;

use crate::console::{report, Console, Outcome};
use crate::demo::run_demo;
use crate::render::Appearance;
use crate::selection::{parse_occupied, Capacity, Layout};
use crate::web;

/// Which front-end to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Prompt for input on the terminal
    Interactive,
    /// Answer once from command-line values
    OneShot { total: i64, occupied: String },
    /// Serve the web form and JSON endpoint
    Serve,
    /// Show a random scenario
    Demo,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub mode: Mode,
    pub bind: SocketAddr,
    pub seed: Option<u64>,
    pub appearance: Appearance,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Interactive,
            bind: SocketAddr::from(([127, 0, 0, 1], 5000)),
            seed: None,
            appearance: Appearance::plain(),
        }
    }
}

pub struct App {
    config: AppConfig,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Run the configured front-end to completion
    pub async fn run(&self) -> anyhow::Result<()> {
        debug!(mode = ?self.config.mode, "starting");
        let appearance = self.config.appearance;

        match &self.config.mode {
            Mode::Interactive => {
                let outcome = tokio::task::spawn_blocking(move || {
                    Console::new(io::stdin().lock(), io::stdout(), appearance).run()
                })
                .await??;
                if let Outcome::Completed(layout) = outcome {
                    debug!(optimal = layout.optimal, "session completed");
                }
            }
            Mode::OneShot { total, occupied } => {
                one_shot(&mut io::stdout(), *total, occupied, appearance)?;
            }
            Mode::Serve => web::serve(self.config.bind).await?,
            Mode::Demo => {
                run_demo(&mut io::stdout(), self.config.seed, appearance)?;
            }
        }

        Ok(())
    }
}

/// Validate command-line values and print the report.
pub fn one_shot<W: Write>(
    out: &mut W,
    total: i64,
    occupied: &str,
    appearance: Appearance,
) -> anyhow::Result<Layout> {
    let capacity = Capacity::new(total)?;
    let occupied = parse_occupied(occupied, capacity)?;
    let layout = Layout::resolve(capacity, occupied)?;
    report(out, &layout, appearance)?;
    Ok(layout)
}
