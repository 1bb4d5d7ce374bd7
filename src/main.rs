//! Blackout Bargain - Entry Point
//!
//! Sets up logging and the async runtime for narrator calls, then runs a
//! blocking line loop: read a line, submit it, narrate if asked, redraw.

use blackout_bargain::core::config::GameConfig;
use blackout_bargain::core::error::{BargainError, Result};
use blackout_bargain::llm::{narrate, LlmClient, NARRATOR_UNAVAILABLE};
use blackout_bargain::session::{Session, Turn};
use blackout_bargain::ui::{render_frame, Styles};
use blackout_bargain::world::WorldState;

use clap::Parser;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tokio::runtime::Runtime;

/// Blackout Bargain - escape the dark Superstore
#[derive(Parser, Debug)]
#[command(name = "blackout-bargain")]
#[command(about = "A text adventure with deterministic puzzles and optional LLM narration")]
struct Args {
    /// Path to the TOML config file
    #[arg(long, default_value = "data/blackout.toml")]
    config: PathBuf,

    /// Never call the narrator, even if an API key is set
    #[arg(long, default_value_t = false)]
    no_narrator: bool,

    /// No colours and no screen clearing
    #[arg(long, default_value_t = false)]
    plain: bool,

    /// Override the log file location
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut config = GameConfig::load(&args.config)?;
    if args.no_narrator {
        config.narrator.enabled = false;
    }
    if args.plain {
        config.display.color = false;
        config.display.clear_screen = false;
    }

    let log_path = args
        .log_file
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.logging.file));
    init_logging(&log_path, &config.logging.filter)?;

    tracing::info!("Blackout Bargain starting...");

    // Create the async runtime for narrator calls
    let rt = Runtime::new()?;

    // Try to create the narrator (optional - works without it)
    let llm_client = match LlmClient::from_config(&config.narrator) {
        Ok(client) => Some(client),
        Err(BargainError::NarratorDisabled) => {
            tracing::info!("Narrator disabled by configuration");
            None
        }
        Err(e) => {
            tracing::warn!("Running without narrator: {}", e);
            None
        }
    };
    let timeout = Duration::from_secs(config.narrator.timeout_secs);

    let styles = Styles::new(config.display.color);
    let mut world = WorldState::new();
    if config.narrator.enabled && llm_client.is_none() {
        world.say(NARRATOR_UNAVAILABLE);
    }
    let mut session = Session::with_state(world, llm_client.is_some());
    let mut stdout = io::stdout();

    loop {
        redraw(&mut stdout, &session, &styles, config.display.clear_screen)?;
        if session.is_over() {
            break;
        }

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if wants_quit(&session, trimmed) {
            break;
        }

        let turn = match session.submit_line(trimmed) {
            Ok(turn) => turn,
            Err(e) => {
                tracing::error!("Rejected input: {}", e);
                continue;
            }
        };

        if let Turn::Narrate(request) = turn {
            let Some(client) = llm_client.as_ref() else {
                session.abandon_narration()?;
                continue;
            };

            redraw(&mut stdout, &session, &styles, config.display.clear_screen)?;

            let result = rt.block_on(async {
                match tokio::time::timeout(timeout, narrate(client, &request)).await {
                    Ok(result) => result,
                    Err(_) => Err(BargainError::LlmError(format!(
                        "narration timed out after {}s",
                        timeout.as_secs()
                    ))),
                }
            });
            session.complete_narration(result)?;
        }
    }

    tracing::info!(session = %session.id(), escaped = session.is_over(), "Blackout Bargain finished");
    Ok(())
}

/// `quit` or `q` ends the game, except as the answer to a code prompt
fn wants_quit(session: &Session, line: &str) -> bool {
    session.state().input_mode.is_none() && (line == "quit" || line == "q")
}

/// Route tracing output to a log file so it never mixes with the game screen
fn init_logging(path: &Path, default_filter: &str) -> Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

fn redraw(stdout: &mut io::Stdout, session: &Session, styles: &Styles, clear: bool) -> Result<()> {
    if clear {
        execute!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;
    } else {
        writeln!(stdout)?;
    }
    write!(stdout, "{}", render_frame(session, styles))?;
    stdout.flush()?;
    Ok(())
}
