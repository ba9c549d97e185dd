//! Actor module - drawable, movable entities
//!
//! An [`Actor`] is anything drawn on the field: the banner, the robot, and the
//! actor half of every [`FallingObject`]. Positions and velocities are in
//! pixel units; [`Actor::move_next`] wraps both axes toroidally.

use std::ops::{Deref, DerefMut};

use crate::types::{Color, Point, DEFAULT_FONT_SIZE};

/// A visible thing on the play field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    text: String,
    font_size: u16,
    color: Color,
    position: Point,
    velocity: Point,
}

impl Default for Actor {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            color: Color::WHITE,
            position: Point::ZERO,
            velocity: Point::ZERO,
        }
    }
}

impl Actor {
    /// Create an actor showing `text`, white, at the origin, at rest.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_font_size(mut self, font_size: u16) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    pub fn with_velocity(mut self, velocity: Point) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn velocity(&self) -> Point {
        self.velocity
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_font_size(&mut self, font_size: u16) {
        self.font_size = font_size;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// No bounds check; callers keep the position inside the field.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    pub fn set_velocity(&mut self, velocity: Point) {
        self.velocity = velocity;
    }

    /// Advance by one velocity step and wrap into `[0, max_x) x [0, max_y)`.
    ///
    /// Wrapping uses the euclidean remainder, so a velocity whose magnitude
    /// meets or exceeds the bound still lands inside the field.
    pub fn move_next(&mut self, max_x: i32, max_y: i32) {
        let next = self.position + self.velocity;
        self.position = Point::new(wrap(next.x, max_x), wrap(next.y, max_y));
    }
}

#[inline]
fn wrap(v: i32, bound: i32) -> i32 {
    if bound <= 0 {
        return v;
    }
    v.rem_euclid(bound)
}

/// An actor worth points when the robot touches it.
///
/// Whether it is a rock or a gem is decided by the cast group it lives in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FallingObject {
    actor: Actor,
    point: i32,
}

impl FallingObject {
    pub fn new(actor: Actor, point: i32) -> Self {
        Self { actor, point }
    }

    /// Score delta applied on collision (negative for penalties)
    pub fn point(&self) -> i32 {
        self.point
    }

    pub fn set_point(&mut self, point: i32) {
        self.point = point;
    }

    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}

impl Deref for FallingObject {
    type Target = Actor;

    fn deref(&self) -> &Actor {
        &self.actor
    }
}

impl DerefMut for FallingObject {
    fn deref_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_X: i32 = 900;
    const MAX_Y: i32 = 600;

    #[test]
    fn test_move_next_adds_velocity() {
        let mut a = Actor::new("#")
            .with_position(Point::new(300, 300))
            .with_velocity(Point::new(15, -15));
        a.move_next(MAX_X, MAX_Y);
        assert_eq!(a.position(), Point::new(315, 285));
    }

    #[test]
    fn test_move_next_wraps_each_edge() {
        let mut a = Actor::new("#").with_velocity(Point::new(-15, -15));
        a.move_next(MAX_X, MAX_Y);
        assert_eq!(a.position(), Point::new(885, 585));

        let mut b = Actor::new("#")
            .with_position(Point::new(885, 585))
            .with_velocity(Point::new(15, 15));
        b.move_next(MAX_X, MAX_Y);
        assert_eq!(b.position(), Point::ZERO);
    }

    #[test]
    fn test_move_next_wraps_velocity_larger_than_bound() {
        let mut a = Actor::new("0")
            .with_position(Point::new(30, 45))
            .with_velocity(Point::new(MAX_X * 2 + 15, -(MAX_Y * 3) - 15));
        a.move_next(MAX_X, MAX_Y);
        assert_eq!(a.position(), Point::new(45, 30));

        let mut b = Actor::new("0").with_velocity(Point::new(MAX_X, MAX_Y));
        b.move_next(MAX_X, MAX_Y);
        assert_eq!(b.position(), Point::ZERO);
    }

    #[test]
    fn test_move_next_only_wraps_the_overflowing_axis() {
        let mut a = Actor::new("*")
            .with_position(Point::new(450, 585))
            .with_velocity(Point::new(0, 30));
        a.move_next(MAX_X, MAX_Y);
        assert_eq!(a.position(), Point::new(450, 15));
    }

    #[test]
    fn test_setters_are_unconditional() {
        let mut a = Actor::default();
        a.set_text("hello");
        a.set_font_size(30);
        a.set_color(Color::new(1, 2, 3));
        a.set_position(Point::new(-100, 5000));
        a.set_velocity(Point::new(7, 8));
        assert_eq!(a.text(), "hello");
        assert_eq!(a.font_size(), 30);
        assert_eq!(a.color(), Color::new(1, 2, 3));
        assert_eq!(a.position(), Point::new(-100, 5000));
        assert_eq!(a.velocity(), Point::new(7, 8));
    }

    #[test]
    fn test_falling_object_derefs_to_actor() {
        let mut rock = FallingObject::new(Actor::new("0"), -5);
        assert_eq!(rock.point(), -5);
        assert_eq!(rock.text(), "0");

        rock.set_velocity(Point::new(0, 15));
        rock.move_next(MAX_X, MAX_Y);
        assert_eq!(rock.actor().position(), Point::new(0, 15));

        rock.set_point(10);
        assert_eq!(rock.point(), 10);
    }
}
