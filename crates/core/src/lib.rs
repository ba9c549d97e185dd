//! Core game logic - the Greed simulation
//!
//! Everything that decides what happens in a frame lives here: entities, the
//! cast registry, spawning and the director's game loop. Input and output are
//! reached only through the [`InputSource`] and [`VideoService`] traits, so
//! the whole loop runs headless in tests.
//!
//! # Module Structure
//!
//! - [`actor`]: `Actor` and `FallingObject`, with toroidal movement
//! - [`cast`]: named groups of entities, typed per group
//! - [`config`]: `GameConfig` with `GREED_*` environment overrides
//! - [`director`]: input → update → output loop, collisions, scoring, respawn
//! - [`rng`]: injectable random sources
//! - [`services`]: the input/video collaborator traits
//! - [`setup`]: spawn rules and the opening cast
//!
//! # Game Rules
//!
//! - The robot moves one cell per frame in the held direction(s).
//! - Rocks (`0`, -5 points) and gems (`*`, +10 points) fall 0-2 cells per frame.
//! - Everything wraps around the field edges.
//! - A rock or gem landing exactly on the robot is scored and replaced by a new
//!   one at a random column of the top row.
//!
//! # Example
//!
//! ```
//! use greed_core::{stage_cast, GameConfig, SimpleRng, ROBOT};
//!
//! let config = GameConfig::default();
//! let cast = stage_cast(&config, &mut SimpleRng::new(7));
//! assert_eq!(cast.first_actor(ROBOT).unwrap().text(), "#");
//! ```

pub mod actor;
pub mod cast;
pub mod config;
pub mod director;
pub mod rng;
pub mod services;
pub mod setup;

pub use greed_types as types;

// Re-export commonly used types for convenience
pub use actor::{Actor, FallingObject};
pub use cast::{Cast, BANNER, GEM, ROBOT, ROCK};
pub use config::GameConfig;
pub use director::{score_text, Director, FALL_CELLS};
pub use rng::{RandomSource, SimpleRng, ThreadRandom};
pub use services::{InputSource, VideoService};
pub use setup::{random_color, stage_cast, FallingKind, SpawnRules};
