//! Cast module - named groups of live entities
//!
//! Every group has a fixed element type: plain groups hold [`Actor`]s and
//! falling groups hold [`FallingObject`]s. A group name belongs to exactly one
//! of the two kinds, so the director never has to narrow an actor into a
//! falling object at runtime.
//!
//! Groups and their members keep insertion order. Order only matters for
//! [`Cast::first_actor`] (used for the `robot` and `banner` singletons) and
//! for draw order.

use crate::actor::{Actor, FallingObject};

/// Score banner group (singleton)
pub const BANNER: &str = "banner";

/// Player group (singleton)
pub const ROBOT: &str = "robot";

/// Penalty falling objects
pub const ROCK: &str = "rock";

/// Reward falling objects
pub const GEM: &str = "gem";

/// Registry that owns every entity in the game.
#[derive(Debug, Clone, Default)]
pub struct Cast {
    actors: Vec<(String, Vec<Actor>)>,
    falling: Vec<(String, Vec<FallingObject>)>,
}

impl Cast {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a plain actor to `group`, creating the group if needed.
    ///
    /// # Panics
    ///
    /// If `group` already exists as a falling group.
    pub fn add_actor(&mut self, group: &str, actor: Actor) {
        assert!(
            find(&self.falling, group).is_none(),
            "group {:?} holds falling objects, not actors",
            group
        );
        group_entry(&mut self.actors, group).push(actor);
    }

    /// Add a falling object to `group`, creating the group if needed.
    ///
    /// # Panics
    ///
    /// If `group` already exists as a plain actor group.
    pub fn add_falling(&mut self, group: &str, object: FallingObject) {
        assert!(
            find(&self.actors, group).is_none(),
            "group {:?} holds actors, not falling objects",
            group
        );
        group_entry(&mut self.falling, group).push(object);
    }

    /// Members of a plain group (empty if the group does not exist).
    pub fn actors(&self, group: &str) -> &[Actor] {
        find(&self.actors, group).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Members of a falling group (empty if the group does not exist).
    pub fn falling(&self, group: &str) -> &[FallingObject] {
        find(&self.falling, group).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn falling_mut(&mut self, group: &str) -> &mut [FallingObject] {
        match find_mut(&mut self.falling, group) {
            Some(members) => members.as_mut_slice(),
            None => &mut [],
        }
    }

    pub fn first_actor(&self, group: &str) -> Option<&Actor> {
        self.actors(group).first()
    }

    pub fn first_actor_mut(&mut self, group: &str) -> Option<&mut Actor> {
        find_mut(&mut self.actors, group).and_then(|members| members.first_mut())
    }

    /// Remove the `index`-th member of a plain group.
    pub fn remove_actor(&mut self, group: &str, index: usize) -> Option<Actor> {
        let members = find_mut(&mut self.actors, group)?;
        (index < members.len()).then(|| members.remove(index))
    }

    /// Remove the `index`-th member of a falling group.
    ///
    /// Later members shift down by one.
    pub fn remove_falling(&mut self, group: &str, index: usize) -> Option<FallingObject> {
        let members = find_mut(&mut self.falling, group)?;
        (index < members.len()).then(|| members.remove(index))
    }

    /// Every entity, flattened in draw order: plain groups first, then
    /// falling groups, each in insertion order.
    pub fn all_actors(&self) -> Vec<&Actor> {
        let plain = self.actors.iter().flat_map(|(_, members)| members.iter());
        let falling = self
            .falling
            .iter()
            .flat_map(|(_, members)| members.iter().map(FallingObject::actor));
        plain.chain(falling).collect()
    }

    pub fn group_len(&self, group: &str) -> usize {
        self.actors(group).len() + self.falling(group).len()
    }

    /// Total number of entities across all groups
    pub fn len(&self) -> usize {
        let plain: usize = self.actors.iter().map(|(_, m)| m.len()).sum();
        let falling: usize = self.falling.iter().map(|(_, m)| m.len()).sum();
        plain + falling
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn find<'a, T>(groups: &'a [(String, Vec<T>)], group: &str) -> Option<&'a Vec<T>> {
    groups
        .iter()
        .find(|(name, _)| name == group)
        .map(|(_, members)| members)
}

fn find_mut<'a, T>(groups: &'a mut [(String, Vec<T>)], group: &str) -> Option<&'a mut Vec<T>> {
    groups
        .iter_mut()
        .find(|(name, _)| name == group)
        .map(|(_, members)| members)
}

fn group_entry<'a, T>(groups: &'a mut Vec<(String, Vec<T>)>, group: &str) -> &'a mut Vec<T> {
    let idx = match groups.iter().position(|(name, _)| name == group) {
        Some(idx) => idx,
        None => {
            groups.push((group.to_string(), Vec::new()));
            groups.len() - 1
        }
    };
    &mut groups[idx].1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn rock_at(x: i32) -> FallingObject {
        FallingObject::new(Actor::new("0").with_position(Point::new(x, 0)), -5)
    }

    #[test]
    fn test_first_actor_of_singleton_groups() {
        let mut cast = Cast::new();
        cast.add_actor(BANNER, Actor::new(""));
        cast.add_actor(ROBOT, Actor::new("#"));

        assert_eq!(cast.first_actor(ROBOT).map(Actor::text), Some("#"));
        assert_eq!(cast.first_actor(BANNER).map(Actor::text), Some(""));
        assert!(cast.first_actor("missing").is_none());

        cast.first_actor_mut(BANNER).unwrap().set_text("Score: 0");
        assert_eq!(cast.first_actor(BANNER).unwrap().text(), "Score: 0");
    }

    #[test]
    fn test_groups_preserve_insertion_order() {
        let mut cast = Cast::new();
        for x in [30, 15, 45] {
            cast.add_falling(ROCK, rock_at(x));
        }
        let xs: Vec<i32> = cast.falling(ROCK).iter().map(|r| r.position().x).collect();
        assert_eq!(xs, vec![30, 15, 45]);
    }

    #[test]
    fn test_remove_falling_by_index() {
        let mut cast = Cast::new();
        for x in [15, 30, 45] {
            cast.add_falling(ROCK, rock_at(x));
        }

        let removed = cast.remove_falling(ROCK, 1).unwrap();
        assert_eq!(removed.position().x, 30);
        assert_eq!(cast.group_len(ROCK), 2);
        assert_eq!(cast.falling(ROCK)[1].position().x, 45);

        assert!(cast.remove_falling(ROCK, 5).is_none());
        assert!(cast.remove_falling(GEM, 0).is_none());
    }

    #[test]
    fn test_remove_actor_by_index() {
        let mut cast = Cast::new();
        cast.add_actor(ROBOT, Actor::new("#"));
        assert_eq!(cast.remove_actor(ROBOT, 0).map(|a| a.text().to_string()), Some("#".into()));
        assert!(cast.first_actor(ROBOT).is_none());
        assert!(cast.remove_actor(ROBOT, 0).is_none());
    }

    #[test]
    fn test_all_actors_flattens_in_draw_order() {
        let mut cast = Cast::new();
        cast.add_actor(BANNER, Actor::new("Score: 0"));
        cast.add_actor(ROBOT, Actor::new("#"));
        cast.add_falling(ROCK, rock_at(15));
        cast.add_falling(GEM, FallingObject::new(Actor::new("*"), 10));

        let texts: Vec<&str> = cast.all_actors().iter().map(|a| a.text()).collect();
        assert_eq!(texts, vec!["Score: 0", "#", "0", "*"]);
        assert_eq!(cast.len(), 4);
        assert!(!cast.is_empty());
    }

    #[test]
    fn test_missing_groups_are_empty() {
        let mut cast = Cast::new();
        assert!(cast.actors(ROBOT).is_empty());
        assert!(cast.falling(GEM).is_empty());
        assert!(cast.falling_mut(GEM).is_empty());
        assert_eq!(cast.group_len(ROCK), 0);
        assert!(cast.is_empty());
    }

    #[test]
    #[should_panic(expected = "holds actors")]
    fn test_group_kind_is_fixed() {
        let mut cast = Cast::new();
        cast.add_actor(ROCK, Actor::new("0"));
        cast.add_falling(ROCK, rock_at(0));
    }
}
