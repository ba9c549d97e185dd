//! Setup module - spawning falling objects and staging the opening cast
//!
//! Rocks and gems are always spawned on the top row at a random column with a
//! random color. The same factory is used when the game starts and when the
//! director replaces a consumed object, so both look alike.

use crate::actor::{Actor, FallingObject};
use crate::cast::{Cast, BANNER, GEM, ROBOT, ROCK};
use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::types::{Color, Point, GEM_POINTS, ROCK_POINTS};

/// The two kinds of falling object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallingKind {
    Rock,
    Gem,
}

impl FallingKind {
    /// Cast group holding this kind
    pub fn group(&self) -> &'static str {
        match self {
            FallingKind::Rock => ROCK,
            FallingKind::Gem => GEM,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            FallingKind::Rock => "0",
            FallingKind::Gem => "*",
        }
    }

    pub fn points(&self) -> i32 {
        match self {
            FallingKind::Rock => ROCK_POINTS,
            FallingKind::Gem => GEM_POINTS,
        }
    }
}

/// Geometry needed to place a new falling object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnRules {
    pub cell_size: i32,
    /// Spawn columns are drawn from `[1, columns)`.
    pub columns: i32,
    pub font_size: u16,
}

impl SpawnRules {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            cell_size: config.cell_size,
            columns: config.columns,
            font_size: config.font_size,
        }
    }

    /// Build a rock or gem on row 0 of a random column.
    ///
    /// Draw order: column, red, green, blue.
    pub fn spawn(&self, kind: FallingKind, rng: &mut impl RandomSource) -> FallingObject {
        let column = rng.next_range(1, self.columns);
        let position = Point::new(column, 0).scale(self.cell_size);
        let color = random_color(rng);

        let actor = Actor::new(kind.glyph())
            .with_font_size(self.font_size)
            .with_color(color)
            .with_position(position);
        FallingObject::new(actor, kind.points())
    }
}

pub fn random_color(rng: &mut impl RandomSource) -> Color {
    let r = rng.next_range(0, 256) as u8;
    let g = rng.next_range(0, 256) as u8;
    let b = rng.next_range(0, 256) as u8;
    Color::new(r, g, b)
}

/// Build the opening cast: banner, robot, then the configured rocks and gems.
pub fn stage_cast(config: &GameConfig, rng: &mut impl RandomSource) -> Cast {
    let mut cast = Cast::new();

    let banner = Actor::new("")
        .with_font_size(config.font_size)
        .with_color(config.banner_color)
        .with_position(Point::new(config.cell_size, 0));
    cast.add_actor(BANNER, banner);

    let robot = Actor::new("#")
        .with_font_size(config.font_size)
        .with_color(Color::WHITE)
        .with_position(Point::new(config.field_width / 2, config.field_height / 2));
    cast.add_actor(ROBOT, robot);

    let rules = SpawnRules::from_config(config);
    for _ in 0..config.default_rock_count {
        cast.add_falling(ROCK, rules.spawn(FallingKind::Rock, rng));
    }
    for _ in 0..config.default_gem_count {
        cast.add_falling(GEM, rules.spawn(FallingKind::Gem, rng));
    }

    log::debug!(
        "staged {} rocks and {} gems",
        config.default_rock_count,
        config.default_gem_count
    );
    cast
}
