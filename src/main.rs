//! Terminal runner (default binary).
//!
//! Frames are paced with `crossterm::event::poll`; input is applied as soon
//! as it arrives and gravity runs once per frame. Logging is off unless
//! `RUST_LOG` is set; redirect stderr to keep it off the game screen.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::{event, terminal};
use log::{debug, error, info};

use tui_blocks::core::GameState;
use tui_blocks::engine::{MonotonicClock, Runner};
use tui_blocks::input::{map_event, Command, TouchButton, TouchPad};
use tui_blocks::term::{GameView, Layout, TerminalPresenter, Viewport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("off")).init();

    let (w, h) = terminal::size().unwrap_or((80, 24));
    let mut presenter = TerminalPresenter::new(GameView::new(), Viewport::new(w, h));
    presenter.enter()?;

    let result = run(&mut presenter, seed_from_clock());

    // Always try to restore terminal state.
    let _ = presenter.exit();
    if let Err(err) = &result {
        error!("game loop failed: {err:#}");
    }
    result
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn sync_buttons(pad: &mut TouchPad, layout: &Layout) {
    pad.set_buttons(
        layout
            .buttons
            .iter()
            .map(|&(rect, action)| TouchButton { rect, action }),
    );
}

fn run(presenter: &mut TerminalPresenter, seed: u32) -> Result<()> {
    info!("starting session with seed {seed}");
    let mut runner = Runner::new(GameState::new(seed), MonotonicClock::new());
    let mut pad = TouchPad::new();

    runner.redraw(presenter)?;
    sync_buttons(&mut pad, presenter.layout());

    loop {
        let timeout = Duration::from_millis(runner.until_next_frame_ms());
        if event::poll(timeout)? {
            let ev = event::read()?;
            match map_event(&ev, &pad) {
                Some(Command::Quit) => {
                    info!(
                        "quit after {} frames, score {}",
                        runner.frames(),
                        runner.state().score()
                    );
                    return Ok(());
                }
                Some(Command::Action(action)) => {
                    runner.dispatch(action, presenter)?;
                }
                Some(Command::Resize { width, height }) => {
                    debug!("resize to {width}x{height}");
                    presenter.resize(width, height);
                    runner.redraw(presenter)?;
                    sync_buttons(&mut pad, presenter.layout());
                }
                None => {}
            }
        }

        if runner.until_next_frame_ms() == 0 {
            runner.frame(presenter)?;
        }
    }
}
