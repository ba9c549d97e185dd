//! Terminal-backed video service.
//!
//! The "window" is the terminal's alternate screen. It is open between
//! `open_window` and `close_window`, and reports itself closed as soon as the
//! shared [`CloseSignal`] is raised (quit key).

use std::thread;
use std::time::Instant;

use anyhow::Result;

use crate::core::{Actor, GameConfig, VideoService};
use crate::fb::FrameBuffer;
use crate::field_view::{FieldView, Viewport};
use crate::pacer::FramePacer;
use crate::renderer::TerminalRenderer;
use crate::types::CloseSignal;

pub struct TerminalVideoService {
    renderer: TerminalRenderer,
    view: FieldView,
    fb: FrameBuffer,
    viewport: Viewport,
    pacer: FramePacer,
    close: CloseSignal,
    caption: String,
    width: i32,
    height: i32,
    open: bool,
    started: Instant,
}

impl TerminalVideoService {
    pub fn new(config: &GameConfig, close: CloseSignal) -> Self {
        let view = FieldView::new(config.field_width, config.field_height, config.cell_size)
            .with_caption(config.caption.clone());
        let viewport = view.frame_size();
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(viewport.width, viewport.height),
            viewport,
            view,
            pacer: FramePacer::from_frame_rate(config.frame_rate),
            close,
            caption: config.caption.clone(),
            width: config.field_width,
            height: config.field_height,
            open: false,
            started: Instant::now(),
        }
    }

    /// Start a new frame: empty bordered field sized to `viewport`.
    fn clear_to(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.view.render_frame(viewport, &mut self.fb);
    }

    fn terminal_viewport(&self) -> Viewport {
        match crossterm::terminal::size() {
            Ok((w, h)) => Viewport::new(w, h),
            Err(_) => self.view.frame_size(),
        }
    }
}

impl VideoService for TerminalVideoService {
    fn open_window(&mut self) -> Result<()> {
        self.renderer.enter(&self.caption)?;
        self.pacer.reset();
        self.open = true;

        let vp = self.terminal_viewport();
        let need = self.view.frame_size();
        if vp.width < need.width || vp.height < need.height {
            log::warn!(
                "terminal is {}x{}, field needs {}x{}; output will be clipped",
                vp.width,
                vp.height,
                need.width,
                need.height
            );
        }
        log::info!("window open ({} fps pacing)", 1000 / self.pacer.interval_ms().max(1));
        Ok(())
    }

    fn close_window(&mut self) -> Result<()> {
        self.open = false;
        self.renderer.exit()?;
        log::info!("window closed");
        Ok(())
    }

    fn is_window_open(&self) -> bool {
        self.open && !self.close.is_raised()
    }

    fn width(&self) -> i32 {
        self.width
    }

    fn height(&self) -> i32 {
        self.height
    }

    fn clear_buffer(&mut self) -> Result<()> {
        let viewport = self.terminal_viewport();
        self.clear_to(viewport);
        Ok(())
    }

    fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()> {
        self.view.draw_actors(actors, self.viewport, &mut self.fb);
        Ok(())
    }

    fn flush_buffer(&mut self) -> Result<()> {
        self.renderer.draw_swap(&mut self.fb)?;
        let now_ms = self.started.elapsed().as_millis() as u64;
        let delay = self.pacer.delay(now_ms);
        if !delay.is_zero() {
            thread::sleep(delay);
        }
        Ok(())
    }
}

impl Drop for TerminalVideoService {
    fn drop(&mut self) {
        // Always try to restore terminal state.
        let _ = self.renderer.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn service() -> TerminalVideoService {
        let config = GameConfig {
            field_width: 150,
            field_height: 60,
            ..GameConfig::default()
        };
        TerminalVideoService::new(&config, CloseSignal::new())
    }

    fn contains(fb: &FrameBuffer, ch: char) -> bool {
        fb.cells().iter().any(|c| c.ch == ch)
    }

    #[test]
    fn draw_actors_adds_to_the_frame() {
        let mut video = service();
        video.clear_to(Viewport::new(12, 6));

        let robot = Actor::new("#").with_position(Point::new(45, 30));
        let gem = Actor::new("*").with_position(Point::new(0, 0));
        video.draw_actors(&[&robot]).unwrap();
        video.draw_actors(&[&gem]).unwrap();

        assert_eq!(video.fb.get(4, 3).unwrap().ch, '#');
        assert_eq!(video.fb.get(1, 1).unwrap().ch, '*');
    }

    #[test]
    fn clear_starts_an_empty_bordered_frame() {
        let mut video = service();
        video.clear_to(Viewport::new(12, 6));
        let robot = Actor::new("#").with_position(Point::new(45, 30));
        video.draw_actors(&[&robot]).unwrap();

        video.clear_to(Viewport::new(14, 6));
        assert!(!contains(&video.fb, '#'));
        assert_eq!((video.fb.width(), video.fb.height()), (14, 6));
        assert_eq!(video.fb.get(1, 0).unwrap().ch, '┌');
        assert!(!video.is_window_open());
    }
}
