//! Terminal Greed runner (default binary).
//!
//! Stages the opening cast and hands it to the director, with crossterm for
//! input and the framebuffer renderer for output.
//!
//! Environment:
//! - `GREED_*`: game configuration, see `greed::core::config`
//! - `GREED_SEED`: play a reproducible game with this seed
//! - `GREED_LOG_PATH`: log file (default: `greed.log`)
//! - `RUST_LOG`: log filter (default: `info`)

use std::fs::OpenOptions;

use anyhow::{Context, Result};

use greed::core::{stage_cast, Director, GameConfig, RandomSource, SimpleRng, ThreadRandom};
use greed::input::KeyboardService;
use greed::term::TerminalVideoService;
use greed::types::CloseSignal;

fn main() -> Result<()> {
    init_logging()?;
    log::info!("starting Greed v{}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::from_env();
    config.validate().context("invalid GREED_* configuration")?;

    let seed = std::env::var("GREED_SEED")
        .ok()
        .and_then(|s| s.trim().parse::<u32>().ok());

    let result = match seed {
        Some(seed) => {
            log::info!("using fixed seed {}", seed);
            run(&config, SimpleRng::new(seed))
        }
        None => run(&config, ThreadRandom::new()),
    };

    match result {
        Ok(score) => {
            log::info!("Greed shut down cleanly");
            println!("Final score: {}", score);
            Ok(())
        }
        Err(e) => {
            log::error!("game exited with error: {:#}", e);
            Err(e)
        }
    }
}

fn run<R: RandomSource>(config: &GameConfig, mut rng: R) -> Result<i32> {
    let mut cast = stage_cast(config, &mut rng);

    let close = CloseSignal::new();
    let keyboard = KeyboardService::new(config.cell_size, close.clone());
    let video = TerminalVideoService::new(config, close);

    let mut director = Director::new(keyboard, video, rng, config);
    let played = director.start_game(&mut cast);

    let score = director.score();
    // Dropping the video service restores the terminal.
    drop(director);

    played.map(|()| score)
}

fn init_logging() -> Result<()> {
    // Log to a file: the terminal belongs to the renderer.
    let path = std::env::var("GREED_LOG_PATH").unwrap_or_else(|_| "greed.log".to_string());
    let log_file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)
        .with_context(|| format!("cannot open log file {}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();
    Ok(())
}
