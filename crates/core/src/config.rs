//! Game configuration
//!
//! Defaults come from `greed_types`. [`GameConfig::from_env`] lets each knob be
//! overridden with a `GREED_*` environment variable:
//!
//! - `GREED_FRAME_RATE`: frames per second (default: 12)
//! - `GREED_FIELD_WIDTH` / `GREED_FIELD_HEIGHT`: field size in pixels (default: 900x600)
//! - `GREED_CELL_SIZE`: pixel quantum (default: 15)
//! - `GREED_FONT_SIZE`: glyph size (default: 15)
//! - `GREED_COLUMNS` / `GREED_ROWS`: grid size (default: 60x40)
//! - `GREED_CAPTION`: window title (default: "Greed")
//! - `GREED_ROCKS` / `GREED_GEMS`: falling objects staged at startup (default: 25 each)

use std::env;
use std::str::FromStr;

use anyhow::{bail, Result};

use crate::director::FALL_CELLS;
use crate::types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub frame_rate: u32,
    pub field_width: i32,
    pub field_height: i32,
    pub cell_size: i32,
    pub font_size: u16,
    pub columns: i32,
    pub rows: i32,
    pub caption: String,
    pub default_rock_count: usize,
    pub default_gem_count: usize,
    pub banner_color: Color,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            field_width: DEFAULT_FIELD_WIDTH,
            field_height: DEFAULT_FIELD_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            font_size: DEFAULT_FONT_SIZE,
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            caption: DEFAULT_CAPTION.to_string(),
            default_rock_count: DEFAULT_ROCK_COUNT,
            default_gem_count: DEFAULT_GEM_COUNT,
            banner_color: Color::WHITE,
        }
    }
}

impl GameConfig {
    /// Create from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`GameConfig::from_env`] but with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let d = Self::default();

        let caption = lookup("GREED_CAPTION")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(d.caption);

        Self {
            frame_rate: parse_or(&lookup, "GREED_FRAME_RATE", d.frame_rate),
            field_width: parse_or(&lookup, "GREED_FIELD_WIDTH", d.field_width),
            field_height: parse_or(&lookup, "GREED_FIELD_HEIGHT", d.field_height),
            cell_size: parse_or(&lookup, "GREED_CELL_SIZE", d.cell_size),
            font_size: parse_or(&lookup, "GREED_FONT_SIZE", d.font_size),
            columns: parse_or(&lookup, "GREED_COLUMNS", d.columns),
            rows: parse_or(&lookup, "GREED_ROWS", d.rows),
            caption,
            default_rock_count: parse_or(&lookup, "GREED_ROCKS", d.default_rock_count),
            default_gem_count: parse_or(&lookup, "GREED_GEMS", d.default_gem_count),
            banner_color: d.banner_color,
        }
    }

    /// Reject configurations the simulation cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.frame_rate == 0 {
            bail!("frame_rate must be positive");
        }
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        if self.field_width <= 0 || self.field_height <= 0 {
            bail!(
                "field must be non-empty, got {}x{}",
                self.field_width,
                self.field_height
            );
        }
        if self.field_width % self.cell_size != 0 || self.field_height % self.cell_size != 0 {
            bail!(
                "field {}x{} is not a whole number of {}px cells",
                self.field_width,
                self.field_height,
                self.cell_size
            );
        }
        if self.columns < 2 {
            bail!("columns must be at least 2, got {}", self.columns);
        }
        if !fits(self.columns, self.cell_size, self.field_width) {
            bail!(
                "{} columns of {}px do not fit a {}px wide field",
                self.columns,
                self.cell_size,
                self.field_width
            );
        }
        if self.rows <= 0 {
            bail!("rows must be positive, got {}", self.rows);
        }
        if !fits(self.rows, self.cell_size, self.field_height) {
            bail!(
                "{} rows of {}px do not fit a {}px high field",
                self.rows,
                self.cell_size,
                self.field_height
            );
        }
        // A position on the far edge must survive one step of up to
        // FALL_CELLS cells before it wraps.
        let max_step = self.cell_size.checked_mul(FALL_CELLS);
        let far_edge = self.field_width.max(self.field_height);
        if max_step.and_then(|step| far_edge.checked_add(step)).is_none() {
            bail!(
                "field {}x{} with {}px cells is too large",
                self.field_width,
                self.field_height,
                self.cell_size
            );
        }
        Ok(())
    }

    /// Milliseconds per frame
    pub fn frame_interval_ms(&self) -> u64 {
        1000 / u64::from(self.frame_rate.max(1))
    }
}

/// Whether `count` cells of `cell_size` px fit in `extent` px, without
/// overflowing.
fn fits(count: i32, cell_size: i32, extent: i32) -> bool {
    count
        .checked_mul(cell_size)
        .is_some_and(|span| span <= extent)
}

fn parse_or<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    match lookup(key) {
        Some(raw) => match raw.trim().parse() {
            Ok(v) => v,
            Err(_) => {
                log::warn!("ignoring unparsable {}={:?}", key, raw);
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_match_classic_greed() {
        let c = GameConfig::default();
        assert_eq!(c.frame_rate, 12);
        assert_eq!((c.field_width, c.field_height), (900, 600));
        assert_eq!(c.cell_size, 15);
        assert_eq!(c.font_size, 15);
        assert_eq!((c.columns, c.rows), (60, 40));
        assert_eq!(c.caption, "Greed");
        assert_eq!((c.default_rock_count, c.default_gem_count), (25, 25));
        assert_eq!(c.banner_color, Color::WHITE);
        assert!(c.validate().is_ok());
        assert_eq!(c.frame_interval_ms(), 83);
    }

    #[test]
    fn test_lookup_overrides() {
        let c = GameConfig::from_lookup(lookup_from(&[
            ("GREED_FRAME_RATE", "30"),
            ("GREED_ROCKS", " 3 "),
            ("GREED_GEMS", "0"),
            ("GREED_CAPTION", "Greedier"),
        ]));
        assert_eq!(c.frame_rate, 30);
        assert_eq!(c.default_rock_count, 3);
        assert_eq!(c.default_gem_count, 0);
        assert_eq!(c.caption, "Greedier");
        assert_eq!(c.cell_size, DEFAULT_CELL_SIZE);
    }

    #[test]
    fn test_unparsable_values_fall_back() {
        let c = GameConfig::from_lookup(lookup_from(&[
            ("GREED_CELL_SIZE", "big"),
            ("GREED_FONT_SIZE", "-1"),
            ("GREED_CAPTION", "   "),
        ]));
        assert_eq!(c, GameConfig::default());
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let zero_cell = GameConfig {
            cell_size: 0,
            ..GameConfig::default()
        };
        assert!(zero_cell.validate().is_err());

        let ragged = GameConfig {
            field_width: 901,
            ..GameConfig::default()
        };
        assert!(ragged.validate().is_err());

        let too_many_columns = GameConfig {
            columns: 61,
            ..GameConfig::default()
        };
        assert!(too_many_columns.validate().is_err());

        let too_many_rows = GameConfig {
            rows: 41,
            ..GameConfig::default()
        };
        assert!(too_many_rows.validate().is_err());

        let no_frames = GameConfig {
            frame_rate: 0,
            ..GameConfig::default()
        };
        assert!(no_frames.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_overflowing_grid() {
        let huge_columns = GameConfig {
            columns: 286_331_154,
            ..GameConfig::default()
        };
        let err = huge_columns.validate().unwrap_err();
        assert!(err.to_string().contains("columns"), "{}", err);

        let huge_rows = GameConfig::from_lookup(lookup_from(&[("GREED_ROWS", "2147483647")]));
        assert!(huge_rows.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_field_that_overflows_when_stepping() {
        let cell = 1 << 20;
        let columns = (i32::MAX / cell) - 1;
        let edge = columns * cell;
        let config = GameConfig {
            field_width: edge,
            field_height: edge,
            cell_size: cell,
            columns,
            rows: columns,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
