//! Klondike session runner (default binary).
//!
//! Reads line-delimited JSON requests from stdin and answers each on stdout.
//! Logs go to stderr so they never interleave with protocol lines.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use klondike::adapter::{Session, SessionConfig};
use klondike::core::Seed;
use klondike::types::DrawMode;

/// Command-line flags; each one overrides its `KLONDIKE_*` variable
#[derive(Parser, Debug)]
#[command(name = "klondike")]
#[command(about = "Klondike solitaire engine driven by JSON lines on stdin")]
struct Args {
    /// Seed for the first deal: digits or any text
    #[arg(long)]
    seed: Option<String>,

    /// Cards turned per draw (1 or 3)
    #[arg(long)]
    draw: Option<u8>,

    /// Maximum number of waste recycles
    #[arg(long)]
    recycle_limit: Option<u32>,

    /// Forbid moving cards from the foundations back to the tableau
    #[arg(long)]
    no_reverse_moves: bool,

    /// Play safe foundation moves after every move
    #[arg(long)]
    autoplay: bool,

    /// Log filter (tracing `EnvFilter` syntax)
    #[arg(long, env = "KLONDIKE_LOG", default_value = "warn")]
    log: String,
}

impl Args {
    fn session_config(&self) -> Result<SessionConfig> {
        let mut config = SessionConfig::from_env();
        if let Some(seed) = &self.seed {
            config.seed = Seed::parse(seed);
        }
        if let Some(count) = self.draw {
            let Some(mode) = DrawMode::from_count(count) else {
                bail!("--draw must be 1 or 3, got {count}");
            };
            config.rules.draw_mode = mode;
        }
        if self.recycle_limit.is_some() {
            config.rules.recycle_limit = self.recycle_limit;
        }
        if self.no_reverse_moves {
            config.rules.allow_foundation_to_tableau = false;
        }
        if self.autoplay {
            config.autoplay = true;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    fmt()
        .with_env_filter(EnvFilter::try_new(&args.log).unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = args.session_config()?;
    let mut session = Session::new(config);
    info!(
        seed = ?session.game().board().seed(),
        draw = session.config().rules.draw_mode.count(),
        "session started"
    );

    let stdin = io::stdin();
    session.serve(stdin.lock(), io::stdout().lock())
}
