//! Crossterm-backed keyboard input source.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::core::InputSource;
use crate::held::HeldKeys;
use crate::map::{direction_for_key, should_quit};
use crate::types::{CloseSignal, Point};

/// Polls the terminal for key events once per frame.
///
/// Quit keys raise the shared [`CloseSignal`], which the video service reports
/// as the window closing. Release events are honoured when the terminal sends
/// them; otherwise held keys time out.
pub struct KeyboardService {
    cell_size: i32,
    keys: HeldKeys,
    close: CloseSignal,
    started: Instant,
}

impl KeyboardService {
    pub fn new(cell_size: i32, close: CloseSignal) -> Self {
        Self {
            cell_size,
            keys: HeldKeys::new(),
            close,
            started: Instant::now(),
        }
    }

    pub fn close_signal(&self) -> &CloseSignal {
        &self.close
    }

    /// Feed one key event into the held-key state.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        if key.kind == KeyEventKind::Press && should_quit(key) {
            log::info!("quit requested");
            self.close.raise();
            return;
        }

        let Some(dir) = direction_for_key(key.code) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.keys.press(dir, now_ms),
            KeyEventKind::Release => self.keys.release(dir),
        }
    }

    /// Direction for the keys held at `now_ms`, without touching the terminal.
    pub fn direction_at(&mut self, now_ms: u64) -> Point {
        self.keys.direction(now_ms, self.cell_size)
    }

    fn now_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn drain_events(&mut self) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    let now = self.now_ms();
                    self.handle_key(key, now);
                }
                Event::FocusLost => self.keys.clear(),
                _ => {}
            }
        }
        Ok(())
    }
}

impl InputSource for KeyboardService {
    fn direction(&mut self) -> Point {
        if let Err(e) = self.drain_events() {
            log::warn!("failed to read terminal events: {}", e);
        }
        let now = self.now_ms();
        self.direction_at(now)
    }
}
