//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental value types used throughout the game.
//! All types are plain data with no external dependencies, so they can be used
//! from the simulation, the input layer and the terminal renderer alike.
//!
//! # Coordinates
//!
//! Every position and velocity is expressed in *pixel* units that are always a
//! multiple of the cell size. Grid coordinates are converted exactly once with
//! [`Point::scale`].
//!
//! # Default Configuration
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAME_RATE` | 12 | Frames per second |
//! | `DEFAULT_FIELD_WIDTH` | 900 | Play-field width in pixels |
//! | `DEFAULT_FIELD_HEIGHT` | 600 | Play-field height in pixels |
//! | `DEFAULT_CELL_SIZE` | 15 | Pixel quantum for positions and velocities |
//! | `DEFAULT_FONT_SIZE` | 15 | Glyph size |
//! | `DEFAULT_COLUMNS` | 60 | Grid columns |
//! | `DEFAULT_ROWS` | 40 | Grid rows |
//! | `DEFAULT_ROCK_COUNT` | 25 | Rocks staged at startup |
//! | `DEFAULT_GEM_COUNT` | 25 | Gems staged at startup |
//!
//! # Examples
//!
//! ```
//! use greed_types::{Point, DEFAULT_CELL_SIZE};
//!
//! let cell = Point::new(3, 0).scale(DEFAULT_CELL_SIZE);
//! assert_eq!(cell, Point::new(45, 0));
//! assert_eq!(cell.add(Point::new(0, 15)), Point::new(45, 15));
//! ```

use std::cell::Cell;
use std::ops::Add;
use std::rc::Rc;

/// Frames per second
pub const DEFAULT_FRAME_RATE: u32 = 12;

/// Play-field width in pixels
pub const DEFAULT_FIELD_WIDTH: i32 = 900;

/// Play-field height in pixels
pub const DEFAULT_FIELD_HEIGHT: i32 = 600;

/// Pixel quantum for every position and velocity
pub const DEFAULT_CELL_SIZE: i32 = 15;

/// Glyph size used for every actor
pub const DEFAULT_FONT_SIZE: u16 = 15;

/// Grid columns (field width / cell size)
pub const DEFAULT_COLUMNS: i32 = 60;

/// Grid rows (field height / cell size)
pub const DEFAULT_ROWS: i32 = 40;

/// Window caption
pub const DEFAULT_CAPTION: &str = "Greed";

/// Rocks staged at startup
pub const DEFAULT_ROCK_COUNT: usize = 25;

/// Gems staged at startup
pub const DEFAULT_GEM_COUNT: usize = 25;

/// Score delta charged for hitting a rock
pub const ROCK_POINTS: i32 = -5;

/// Score delta awarded for collecting a gem
pub const GEM_POINTS: i32 = 10;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_field_is_whole_number_of_cells() {
        assert_eq!(DEFAULT_FIELD_WIDTH, DEFAULT_COLUMNS * DEFAULT_CELL_SIZE);
        assert_eq!(DEFAULT_FIELD_HEIGHT, DEFAULT_ROWS * DEFAULT_CELL_SIZE);
    }

    #[test]
    fn point_add_and_scale() {
        let p = Point::new(2, -3);
        assert_eq!(p.add(Point::new(1, 1)), Point::new(3, -2));
        assert_eq!(p + Point::new(1, 1), Point::new(3, -2));
        assert_eq!(p.scale(15), Point::new(30, -45));
        assert_eq!(Point::ZERO.scale(15), Point::ZERO);
    }

    #[test]
    fn close_signal_is_shared_between_clones() {
        let a = CloseSignal::new();
        let b = a.clone();
        assert!(!b.is_raised());
        a.raise();
        assert!(b.is_raised());
    }
}

/// An immutable 2D integer coordinate.
///
/// Used both as a position and as a velocity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// The zero vector (no movement)
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise sum
    pub const fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    /// Multiply both components by `factor`.
    ///
    /// Grid units become pixel units with `factor = cell_size`.
    pub const fn scale(self, factor: i32) -> Point {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::add(self, rhs)
    }
}

/// 24-bit RGB color. No alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const BLACK: Color = Color::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn r(&self) -> u8 {
        self.r
    }

    pub const fn g(&self) -> u8 {
        self.g
    }

    pub const fn b(&self) -> u8 {
        self.b
    }
}

/// Shared "window closed" flag.
///
/// A terminal has no close button, so the keyboard raises this when a quit key
/// is pressed and the video service reports the window as closed. Clones share
/// the same flag. Single-threaded only.
#[derive(Debug, Clone, Default)]
pub struct CloseSignal(Rc<Cell<bool>>);

impl CloseSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.0.set(true);
    }

    pub fn is_raised(&self) -> bool {
        self.0.get()
    }
}
