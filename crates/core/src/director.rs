//! Director module - the game loop and the collision/spawn state machine
//!
//! Each frame runs three phases against the [`Cast`]:
//!
//! 1. **Inputs**: the robot's velocity becomes the input source's direction.
//! 2. **Updates**: the robot moves; every rock and gem falls 0-2 cells and is
//!    tested against the robot. A hit applies the object's points to the
//!    score and replaces the object with a fresh one on the top row.
//! 3. **Outputs**: the whole cast is handed to the video service.
//!
//! The loop runs until the video service reports the window closed.
//!
//! # Example
//!
//! ```ignore
//! let cast = stage_cast(&config, &mut rng);
//! let mut director = Director::new(keyboard, video, rng, &config);
//! director.start_game(&mut cast)?;
//! println!("final score: {}", director.score());
//! ```

use anyhow::{anyhow, bail, Result};

use crate::actor::FallingObject;
use crate::cast::{Cast, BANNER, ROBOT};
use crate::config::GameConfig;
use crate::rng::RandomSource;
use crate::services::{InputSource, VideoService};
use crate::setup::{FallingKind, SpawnRules};
use crate::types::Point;

/// Falling speed is drawn from `[0, FALL_CELLS)` cells per frame.
pub const FALL_CELLS: i32 = 3;

/// Banner text for a score.
pub fn score_text(score: i32) -> String {
    format!("Score: {}", score)
}

/// Runs the game for one session.
pub struct Director<I, V, R> {
    input: I,
    video: V,
    rng: R,
    rules: SpawnRules,
    score: i32,
    frames: u64,
}

impl<I, V, R> Director<I, V, R>
where
    I: InputSource,
    V: VideoService,
    R: RandomSource,
{
    pub fn new(input: I, video: V, rng: R, config: &GameConfig) -> Self {
        Self {
            input,
            video,
            rng,
            rules: SpawnRules::from_config(config),
            score: 0,
            frames: 0,
        }
    }

    /// Start from a score other than zero.
    pub fn with_score(mut self, score: i32) -> Self {
        self.score = score;
        self
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Frames completed by [`Director::start_game`]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn video(&self) -> &V {
        &self.video
    }

    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_parts(self) -> (I, V, R) {
        (self.input, self.video, self.rng)
    }

    /// Open the window and play until it closes.
    ///
    /// The cast must contain a `robot` and a `banner`. The window is closed
    /// even if a frame fails; the frame's error is returned in that case.
    pub fn start_game(&mut self, cast: &mut Cast) -> Result<()> {
        check_cast(cast)?;

        self.video.open_window()?;
        log::info!(
            "game started with {} actors on a {}x{} field",
            cast.len(),
            self.video.width(),
            self.video.height()
        );

        let played = self.play(cast);
        let closed = self.video.close_window();

        log::info!(
            "game ended after {} frames with score {}",
            self.frames,
            self.score
        );
        played.and(closed)
    }

    fn play(&mut self, cast: &mut Cast) -> Result<()> {
        while self.video.is_window_open() {
            self.get_inputs(cast)?;
            self.do_updates(cast)?;
            self.do_outputs(cast)?;
            self.frames += 1;
        }
        Ok(())
    }

    /// Copy the input direction onto the robot's velocity.
    pub fn get_inputs(&mut self, cast: &mut Cast) -> Result<()> {
        let velocity = self.input.direction();
        let robot = cast
            .first_actor_mut(ROBOT)
            .ok_or_else(|| missing(ROBOT))?;
        robot.set_velocity(velocity);
        Ok(())
    }

    /// Advance the simulation by one frame.
    pub fn do_updates(&mut self, cast: &mut Cast) -> Result<()> {
        self.set_banner(cast)?;

        let max_x = self.video.width();
        let max_y = self.video.height();

        let robot = cast
            .first_actor_mut(ROBOT)
            .ok_or_else(|| missing(ROBOT))?;
        robot.move_next(max_x, max_y);
        let robot_at = robot.position();

        for kind in [FallingKind::Rock, FallingKind::Gem] {
            let hits = self.fall_and_collide(cast, kind, robot_at, max_x, max_y);
            if hits > 0 {
                self.set_banner(cast)?;
            }
        }
        Ok(())
    }

    /// Clear, draw every actor, present.
    pub fn do_outputs(&mut self, cast: &Cast) -> Result<()> {
        self.video.clear_buffer()?;
        self.video.draw_actors(&cast.all_actors())?;
        self.video.flush_buffer()
    }

    /// Move every member of one falling group and resolve its collisions.
    ///
    /// Each member moves exactly once. Consumed members are removed after the
    /// pass and their replacements appended, so replacements neither move nor
    /// collide until the next frame. Returns the number of collisions.
    fn fall_and_collide(
        &mut self,
        cast: &mut Cast,
        kind: FallingKind,
        robot_at: Point,
        max_x: i32,
        max_y: i32,
    ) -> usize {
        let group = kind.group();
        let cell_size = self.rules.cell_size;
        let mut hits: Vec<usize> = Vec::new();
        let mut replacements: Vec<FallingObject> = Vec::new();

        for (i, object) in cast.falling_mut(group).iter_mut().enumerate() {
            let fall = self.rng.next_range(0, FALL_CELLS);
            object.set_velocity(Point::new(0, fall).scale(cell_size));
            object.move_next(max_x, max_y);

            if object.position() != robot_at {
                continue;
            }

            self.score += object.point();
            log::debug!(
                "{} at {:?} worth {} collected, score now {}",
                group,
                robot_at,
                object.point(),
                self.score
            );
            hits.push(i);
            replacements.push(self.rules.spawn(kind, &mut self.rng));
        }

        for &i in hits.iter().rev() {
            cast.remove_falling(group, i);
        }
        for replacement in replacements {
            log::debug!("respawned {} at {:?}", group, replacement.position());
            cast.add_falling(group, replacement);
        }
        hits.len()
    }

    fn set_banner(&self, cast: &mut Cast) -> Result<()> {
        let banner = cast
            .first_actor_mut(BANNER)
            .ok_or_else(|| missing(BANNER))?;
        banner.set_text(score_text(self.score));
        Ok(())
    }
}

fn check_cast(cast: &Cast) -> Result<()> {
    for group in [ROBOT, BANNER] {
        if cast.first_actor(group).is_none() {
            bail!("cast has no {} actor", group);
        }
    }
    Ok(())
}

fn missing(group: &str) -> anyhow::Error {
    anyhow!("cast has no {} actor", group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor::Actor;
    use crate::cast::{GEM, ROCK};
    use crate::rng::SimpleRng;

    struct Still;

    impl InputSource for Still {
        fn direction(&mut self) -> Point {
            Point::ZERO
        }
    }

    /// Video that stays open for a fixed number of frames.
    struct Frames {
        left: u32,
        open: bool,
        drawn: usize,
    }

    impl VideoService for Frames {
        fn open_window(&mut self) -> Result<()> {
            self.open = true;
            Ok(())
        }
        fn close_window(&mut self) -> Result<()> {
            self.open = false;
            Ok(())
        }
        fn is_window_open(&self) -> bool {
            self.open && self.left > 0
        }
        fn width(&self) -> i32 {
            900
        }
        fn height(&self) -> i32 {
            600
        }
        fn clear_buffer(&mut self) -> Result<()> {
            Ok(())
        }
        fn draw_actors(&mut self, actors: &[&Actor]) -> Result<()> {
            self.drawn = actors.len();
            Ok(())
        }
        fn flush_buffer(&mut self) -> Result<()> {
            self.left -= 1;
            Ok(())
        }
    }

    fn frames(n: u32) -> Frames {
        Frames {
            left: n,
            open: false,
            drawn: 0,
        }
    }

    fn minimal_cast() -> Cast {
        let mut cast = Cast::new();
        cast.add_actor(BANNER, Actor::new(""));
        cast.add_actor(ROBOT, Actor::new("#").with_position(Point::new(450, 300)));
        cast
    }

    #[test]
    fn test_score_text() {
        assert_eq!(score_text(0), "Score: 0");
        assert_eq!(score_text(-15), "Score: -15");
    }

    #[test]
    fn test_start_game_runs_until_window_closes() {
        let mut cast = minimal_cast();
        cast.add_falling(ROCK, FallingObject::new(Actor::new("0"), -5));
        cast.add_falling(GEM, FallingObject::new(Actor::new("*"), 10));

        let config = GameConfig::default();
        let mut director = Director::new(Still, frames(3), SimpleRng::new(1), &config);
        director.start_game(&mut cast).unwrap();

        assert_eq!(director.frames(), 3);
        assert!(!director.video().is_window_open());
        assert_eq!(director.video().drawn, 4);
        assert_eq!(cast.first_actor(BANNER).unwrap().text(), "Score: 0");
    }

    #[test]
    fn test_start_game_rejects_cast_without_robot() {
        let mut cast = Cast::new();
        cast.add_actor(BANNER, Actor::new(""));

        let config = GameConfig::default();
        let mut director = Director::new(Still, frames(1), SimpleRng::new(1), &config);
        let err = director.start_game(&mut cast).unwrap_err();
        assert!(err.to_string().contains("robot"));
        assert!(!director.video().open, "window must not open for a bad cast");
    }

    #[test]
    fn test_do_updates_reports_missing_banner() {
        let mut cast = Cast::new();
        cast.add_actor(ROBOT, Actor::new("#"));

        let config = GameConfig::default();
        let mut director = Director::new(Still, frames(1), SimpleRng::new(1), &config);
        assert!(director.do_updates(&mut cast).is_err());
    }

    #[test]
    fn test_falling_objects_only_fall_straight_down() {
        let mut cast = minimal_cast();
        for x in 1..20 {
            let rock = Actor::new("0").with_position(Point::new(x * 15, 0));
            cast.add_falling(ROCK, FallingObject::new(rock, -5));
        }

        let config = GameConfig::default();
        let mut director = Director::new(Still, frames(1), SimpleRng::new(5), &config);
        director.do_updates(&mut cast).unwrap();

        for (i, rock) in cast.falling(ROCK).iter().enumerate() {
            let v = rock.velocity();
            assert_eq!(v.x, 0);
            assert!([0, 15, 30].contains(&v.y), "unexpected fall {:?}", v);
            assert_eq!(rock.position(), Point::new((i as i32 + 1) * 15, v.y));
        }
    }
}
