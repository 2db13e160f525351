//! Memory Pairs entry point
//!
//! Native builds run a headless demo: the bot plays one session at the
//! configured frame rate and the outcome is logged. Set `RUST_LOG=debug` to
//! follow every pair.

use std::path::Path;

use memory_pairs::Settings;
use memory_pairs::assets::load_identities;
use memory_pairs::sim::{AutoPlayer, Session, SessionStatus, tick};

/// Settings file read from the working directory
const SETTINGS_FILE: &str = "settings.json";

fn main() {
    env_logger::init();
    log::info!("Memory Pairs (headless) starting...");

    if let Err(err) = run() {
        log::error!("{err}");
        std::process::exit(1);
    }
}

fn run() -> memory_pairs::Result<()> {
    let settings = Settings::load_from(Path::new(SETTINGS_FILE))?;
    let config = settings.session_config()?;
    let identities = load_identities(&settings)?;
    let seed = settings.seed.unwrap_or_else(rand::random);

    log::info!(
        "Difficulty {}: {} tiles, repeat {}, {}s",
        settings.difficulty.as_str(),
        config.tile_count,
        config.repeat_count,
        config.time_limit_secs
    );
    let mut session = Session::new(&config, &identities, seed)?;

    let dt = settings.frame_dt();
    let mut player = AutoPlayer::default();
    let mut last_shown = session.seconds_left();
    while !session.is_over() {
        let input = player.next_input(&session, dt);
        tick(&mut session, &input, dt);

        let shown = session.seconds_left();
        if shown != last_shown {
            log::debug!("time last: {} ({} tiles left)", shown, session.remaining_tiles());
            last_shown = shown;
        }
    }

    let snapshot = session.snapshot();
    match snapshot.status {
        SessionStatus::Won => log::info!(
            "Board cleared with {}s left ({} pairs, {} misses)",
            snapshot.seconds_left,
            snapshot.moves,
            snapshot.misses
        ),
        SessionStatus::TimedOut => log::info!(
            "Time up with {} tiles left",
            snapshot.visible_slots().count()
        ),
        SessionStatus::Quit | SessionStatus::Playing => {}
    }
    log::info!("Replay this board with seed {}", seed);
    Ok(())
}
