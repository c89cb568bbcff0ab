//! Generator configuration
//!
//! Loaded from JSON. Missing fields fall back to their defaults, so a config
//! file only needs to name what it changes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::geometry::Coord;
use crate::{
    CORRIDOR_STEP_COST, DEFAULT_HEIGHT, DEFAULT_ROOM_COUNT, DEFAULT_ROOM_MAX_SIZE, DEFAULT_WIDTH,
    EMPTY_STEP_COST, EXTRA_EDGE_CHANCE, MAX_PLACEMENT_ATTEMPTS, ROOM_STEP_COST,
};

/// Per-step surcharges by the category of the cell being entered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorridorCosts {
    pub room: f32,
    pub empty: f32,
    pub corridor: f32,
}

impl Default for CorridorCosts {
    fn default() -> Self {
        Self {
            room: ROOM_STEP_COST,
            empty: EMPTY_STEP_COST,
            corridor: CORRIDOR_STEP_COST,
        }
    }
}

/// Everything one generation run needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub seed: u64,
    pub width: i32,
    pub height: i32,
    pub room_count: u32,
    pub room_max_width: i32,
    pub room_max_height: i32,
    pub max_placement_attempts: u32,
    pub extra_edge_chance: f64,
    pub costs: CorridorCosts,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            room_count: DEFAULT_ROOM_COUNT,
            room_max_width: DEFAULT_ROOM_MAX_SIZE,
            room_max_height: DEFAULT_ROOM_MAX_SIZE,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            extra_edge_chance: EXTRA_EDGE_CHANCE,
            costs: CorridorCosts::default(),
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl GeneratorConfig {
    /// Load and validate a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Parse and validate a JSON config string
    pub fn from_json(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Grid dimensions
    pub fn size(&self) -> Coord {
        Coord::new(self.width, self.height)
    }

    /// Largest room the placer may produce
    pub fn room_max_size(&self) -> Coord {
        Coord::new(self.room_max_width, self.room_max_height)
    }

    /// Check that the values describe a level that can be generated
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width <= 0 {
            return Err(invalid("width", format!("must be positive, got {}", self.width)));
        }
        if self.height <= 0 {
            return Err(invalid("height", format!("must be positive, got {}", self.height)));
        }
        if self.room_max_width < 1 || self.room_max_width >= self.width {
            return Err(invalid(
                "room_max_width",
                format!("must be in 1..{}, got {}", self.width, self.room_max_width),
            ));
        }
        if self.room_max_height < 1 || self.room_max_height >= self.height {
            return Err(invalid(
                "room_max_height",
                format!("must be in 1..{}, got {}", self.height, self.room_max_height),
            ));
        }
        if !(0.0..=1.0).contains(&self.extra_edge_chance) {
            return Err(invalid(
                "extra_edge_chance",
                format!("must be within [0, 1], got {}", self.extra_edge_chance),
            ));
        }
        for (field, value) in [
            ("costs.room", self.costs.room),
            ("costs.empty", self.costs.empty),
            ("costs.corridor", self.costs.corridor),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(
                    field,
                    format!("must be a finite non-negative number, got {value}"),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extra_edge_chance, 0.125);
        assert_eq!(config.max_placement_attempts, 50_000);
        assert_eq!(config.costs.room, 10.0);
        assert_eq!(config.costs.empty, 5.0);
        assert_eq!(config.costs.corridor, 1.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            GeneratorConfig::from_json(r#"{ "seed": 7, "costs": { "room": 20 } }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.costs.room, 20.0);
        assert_eq!(config.costs.empty, 5.0);
    }

    #[test]
    fn test_rejects_oversized_rooms() {
        let err =
            GeneratorConfig::from_json(r#"{ "width": 10, "room_max_width": 10 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "room_max_width", .. }));
    }

    #[test]
    fn test_rejects_bad_chance() {
        let err = GeneratorConfig::from_json(r#"{ "extra_edge_chance": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "extra_edge_chance", .. }));
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = GeneratorConfig::from_json(r#"{ "costs": { "corridor": -1 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "costs.corridor", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = GeneratorConfig::from_json("{ seed: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load(Path::new("/nonexistent/dg-core.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
