//! FieldView: maps the cast's actors into a terminal framebuffer.
//!
//! One terminal cell stands for one grid cell: an actor at pixel `(x, y)` is
//! drawn at column `x / cell_size`, row `y / cell_size` of the field, inside a
//! one-character border. This module is pure (no I/O).

use crate::core::Actor;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Color;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Renders a field of `columns x rows` grid cells.
#[derive(Debug, Clone)]
pub struct FieldView {
    columns: u16,
    rows: u16,
    cell_size: i32,
    caption: String,
}

impl FieldView {
    /// View for a `field_width x field_height` pixel field.
    pub fn new(field_width: i32, field_height: i32, cell_size: i32) -> Self {
        let cell = cell_size.max(1);
        Self {
            columns: to_u16(field_width / cell),
            rows: to_u16(field_height / cell),
            cell_size: cell,
            caption: String::new(),
        }
    }

    /// Title shown in the top border.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn columns(&self) -> u16 {
        self.columns
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Terminal size needed to show the whole field with its border
    pub fn frame_size(&self) -> Viewport {
        Viewport::new(
            self.columns.saturating_add(2),
            self.rows.saturating_add(2),
        )
    }

    /// Terminal cell of a pixel position, relative to the field origin.
    ///
    /// `None` when the position lies outside the field.
    pub fn grid_cell(&self, x: i32, y: i32) -> Option<(u16, u16)> {
        let gx = x.div_euclid(self.cell_size);
        let gy = y.div_euclid(self.cell_size);
        if gx < 0 || gy < 0 || gx >= self.columns as i32 || gy >= self.rows as i32 {
            return None;
        }
        Some((gx as u16, gy as u16))
    }

    /// Render `actors` (in order, later ones on top) into an existing framebuffer.
    ///
    /// Equivalent to [`FieldView::render_frame`] followed by
    /// [`FieldView::draw_actors`].
    pub fn render_into(&self, actors: &[&Actor], viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_frame(viewport, fb);
        self.draw_actors(actors, viewport, fb);
    }

    /// Resize `fb` to the viewport, clear it and draw the empty bordered field.
    ///
    /// The field is centered; anything that does not fit the viewport is
    /// clipped.
    pub fn render_frame(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let frame = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle {
            fg: Color::new(120, 120, 130),
            ..CellStyle::default()
        };
        self.draw_border(fb, start_x, start_y, frame.width, frame.height, border);

        if !self.caption.is_empty() && frame.width > 4 {
            let text_w = self.caption.chars().count() as u16;
            let x = start_x + frame.width.saturating_sub(text_w) / 2;
            let title = CellStyle {
                bold: true,
                ..CellStyle::default()
            };
            fb.put_str(x, start_y, &self.caption, title);
        }
    }

    /// Plot `actors` over whatever `fb` already holds.
    ///
    /// `viewport` must be the one last passed to [`FieldView::render_frame`].
    pub fn draw_actors(&self, actors: &[&Actor], viewport: Viewport, fb: &mut FrameBuffer) {
        let (start_x, start_y) = self.frame_origin(viewport);
        let origin_x = start_x.saturating_add(1);
        let origin_y = start_y.saturating_add(1);
        for actor in actors {
            self.draw_actor(fb, origin_x, origin_y, actor);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, actors: &[&Actor], viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(actors, viewport, &mut fb);
        fb
    }

    /// Top-left corner of the bordered frame within the viewport.
    fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let frame = self.frame_size();
        (
            viewport.width.saturating_sub(frame.width) / 2,
            viewport.height.saturating_sub(frame.height) / 2,
        )
    }

    fn draw_actor(&self, fb: &mut FrameBuffer, origin_x: u16, origin_y: u16, actor: &Actor) {
        let pos = actor.position();
        let Some((gx, gy)) = self.grid_cell(pos.x, pos.y) else {
            return;
        };

        let style = CellStyle::fg(actor.color());
        // Text stops at the right edge of the field, not the viewport.
        let room = (self.columns - gx) as usize;
        for (i, ch) in actor.text().chars().take(room).enumerate() {
            fb.put_char(origin_x + gx + i as u16, origin_y + gy, ch, style);
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }
}

fn to_u16(v: i32) -> u16 {
    v.clamp(0, u16::MAX as i32) as u16
}
