use std::io;
use std::time::{Duration, Instant};

use clap::{Parser, ValueEnum};
use grid_snake::config::{self, Theme, DEFAULT_GRID, THEME_CLASSIC, THEME_OCEAN};
use grid_snake::engine::GameEngine;
use grid_snake::input::{self, GameInput};
use grid_snake::renderer::{self, ViewContext};
use grid_snake::score::{FileScoreStore, MemoryScoreStore, ScoreStore};
use grid_snake::speed::SpeedControl;
use grid_snake::terminal::TerminalGuard;
use grid_snake::ticker::Ticker;

/// Input poll timeout; also paces the render loop.
const INPUT_POLL: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Classic,
    Ocean,
}

impl ThemeArg {
    fn theme(self) -> &'static Theme {
        match self {
            Self::Classic => &THEME_CLASSIC,
            Self::Ocean => &THEME_OCEAN,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Initial tick interval in milliseconds, clamped to 50..=200.
    #[arg(long)]
    interval: Option<u64>,

    /// Seed for apple placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Color theme.
    #[arg(long, value_enum, default_value = "classic")]
    theme: ThemeArg,

    /// Keep the high score in memory only.
    #[arg(long = "no-persist")]
    no_persist: bool,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let mut session = TerminalGuard::enter()?;
    run(&cli, &mut session)
}

fn run(cli: &Cli, session: &mut TerminalGuard) -> io::Result<()> {
    let store: Box<dyn ScoreStore> = if cli.no_persist {
        Box::new(MemoryScoreStore::default())
    } else {
        Box::new(FileScoreStore::open())
    };

    let mut engine = match cli.seed {
        Some(seed) => GameEngine::new_with_seed(DEFAULT_GRID, store, seed),
        None => GameEngine::new(DEFAULT_GRID, store),
    };

    let mut speed = match cli.interval {
        Some(ms) => SpeedControl::with_interval(ms),
        None => SpeedControl::new(),
    };
    let mut ticker = Ticker::new(speed.interval());
    let mut reference_high_score = engine.high_score();

    loop {
        let snapshot = engine.snapshot();
        let view = ViewContext {
            theme: cli.theme.theme(),
            high_score: engine.high_score(),
            reference_high_score,
            speed_rating: speed.rating(),
            running: ticker.is_active(),
        };
        session
            .frame_target()
            .draw(|frame| renderer::render(frame, &snapshot, engine.bounds(), &view))?;

        match input::poll_input(INPUT_POLL)? {
            Some(GameInput::Quit) => break,
            Some(GameInput::Confirm) => {
                reference_high_score = engine.high_score();
                engine.reset(
                    config::initial_snake(),
                    config::INITIAL_APPLE,
                    config::INITIAL_DIRECTION,
                );
                ticker.set_interval(speed.interval());
                ticker.start(Instant::now());
            }
            Some(GameInput::Direction(direction)) => engine.set_direction(direction),
            Some(GameInput::SpeedUp) => {
                speed.speed_up();
                ticker.set_interval(speed.interval());
            }
            Some(GameInput::SlowDown) => {
                speed.slow_down();
                ticker.set_interval(speed.interval());
            }
            None => {}
        }

        if ticker.should_tick(Instant::now()) {
            engine.step();
            if engine.game_over {
                ticker.stop();
            }
        }
    }

    Ok(())
}
