//! Terminal runner (default binary).
//!
//! Wires the board model to crossterm input, a gravity timer and the
//! framebuffer canvas. Logging goes to stderr through `env_logger` and is off
//! below `warn` unless `RUST_LOG` says otherwise; redirect stderr to read it
//! while playing.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use melt_tetris::core::{BoardModel, GridSize, KindRandomizer};
use melt_tetris::engine::{GameConfig, RandomizerKind, Session, TickTimer};
use melt_tetris::input::{handle_key_event, should_quit};
use melt_tetris::term::{BoardCanvas, TerminalRenderer};
use melt_tetris::types::{
    BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_CELL_SIZE, DEFAULT_SPEED, MAX_CELL_SIZE,
};

#[derive(Parser, Debug)]
#[command(name = "melt-tetris")]
#[command(about = "Falling-block puzzle in the terminal")]
struct Cli {
    /// Board width in cells
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: u8,
    /// Board height in cells
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: u8,
    /// Gravity speed, 1..=100 ticks per second
    #[arg(long, default_value_t = DEFAULT_SPEED)]
    speed: u32,
    /// Seed for a reproducible piece sequence
    #[arg(long)]
    seed: Option<u64>,
    /// Draw kinds from a shuffled pool instead of uniformly
    #[arg(long, default_value_t = false)]
    pool: bool,
    /// Terminal columns per board cell, 1..=8
    #[arg(
        long,
        default_value_t = DEFAULT_CELL_SIZE,
        value_parser = clap::value_parser!(u16).range(1..=MAX_CELL_SIZE as i64)
    )]
    cell_size: u16,
    /// Let the computer place every piece
    #[arg(long, short = 'a', default_value_t = false)]
    auto: bool,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let grid = GridSize::new(self.width, self.height).context("invalid board size")?;
        Ok(GameConfig {
            grid,
            speed: self.speed,
            seed: self.seed,
            randomizer: if self.pool {
                RandomizerKind::Pool
            } else {
                RandomizerKind::Uniform
            },
            auto: self.auto,
        })
    }
}

/// Input wait while no ticks are due (paused, stopped or game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

type TermSession = Session<BoardCanvas, Box<dyn KindRandomizer>>;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    log::info!("starting with {:?}", config);

    let model = BoardModel::new(config.grid, config.build_randomizer());
    let canvas = BoardCanvas::new(config.grid.width(), config.grid.height(), cli.cell_size);
    let mut session = Session::new(model, canvas, TickTimer::new(config.speed, Instant::now()));
    session.set_auto(config.auto);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, session: &mut TermSession) -> Result<()> {
    session.start();
    present(term, session)?;

    loop {
        let timeout = if session.is_playable() {
            session.timer().time_until_fire(Instant::now())
        } else {
            IDLE_POLL
        };
        let mut dirty = false;

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= session.apply(action);
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if session.poll(Instant::now()).is_some() {
            dirty = true;
        }

        if dirty {
            present(term, session)?;
        }
    }
}

fn present(term: &mut TerminalRenderer, session: &mut TermSession) -> Result<()> {
    let model = session.model();
    let state = if session.is_stopped() {
        "stopped"
    } else if model.is_game_over() {
        "game over"
    } else if session.is_paused() {
        "paused"
    } else {
        "playing"
    };
    let line0 = format!(
        "next {} pcs {} rows {}",
        model.next_kind().as_str(),
        model.piece_count(),
        model.rows_completed()
    );
    let line1 = format!(
        "speed {}{}  {}",
        session.timer().speed(),
        if session.is_auto() { " auto" } else { "" },
        state
    );
    let line2 = "spc drop a auto q quit";

    let canvas = session.renderer_mut();
    canvas.set_status(0, &line0);
    canvas.set_status(1, &line1);
    canvas.set_status(2, line2);
    term.draw(session.renderer().framebuffer())
}
