//! Battle configuration with documented defaults
//!
//! Values are passed explicitly into the engine. There is no global
//! config; a front-end loads one (or uses `Default`) and hands it over.

use crate::core::error::{BattleError, Result};
use crate::core::types::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Enemy starting health per difficulty tier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyHealthConfig {
    pub easy: u32,
    pub normal: u32,
    pub hard: u32,
}

impl Default for EnemyHealthConfig {
    fn default() -> Self {
        Self {
            easy: 50,
            normal: 80,
            hard: 120,
        }
    }
}

impl EnemyHealthConfig {
    /// Health for a tier, never below 1
    pub fn for_difficulty(&self, difficulty: Difficulty) -> u32 {
        let hp = match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Normal => self.normal,
            Difficulty::Hard => self.hard,
        };
        hp.max(1)
    }
}

/// Configuration for a duel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Starting (and maximum) health of the player, regardless of class
    #[serde(default = "default_player_health")]
    pub player_health: u32,

    /// Display name of the enemy
    #[serde(default = "default_enemy_name")]
    pub enemy_name: String,

    /// Fixed amount restored by the player's heal action
    #[serde(default = "default_heal_amount")]
    pub heal_amount: u32,

    /// Enemy health by difficulty tier
    #[serde(default)]
    pub enemy_health: EnemyHealthConfig,
}

fn default_player_health() -> u32 {
    100
}

fn default_enemy_name() -> String {
    "Goblin".to_string()
}

fn default_heal_amount() -> u32 {
    10
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_health: default_player_health(),
            enemy_name: default_enemy_name(),
            heal_amount: default_heal_amount(),
            enemy_health: EnemyHealthConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: BattleConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.player_health == 0 {
            return Err(BattleError::InvalidConfig(
                "player_health must be positive".into(),
            ));
        }

        if self.enemy_name.trim().is_empty() {
            return Err(BattleError::InvalidConfig(
                "enemy_name must not be empty".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tiers() {
        let config = BattleConfig::default();
        assert_eq!(config.enemy_health.for_difficulty(Difficulty::Easy), 50);
        assert_eq!(config.enemy_health.for_difficulty(Difficulty::Normal), 80);
        assert_eq!(config.enemy_health.for_difficulty(Difficulty::Hard), 120);
        assert_eq!(config.player_health, 100);
        assert_eq!(config.heal_amount, 10);
    }

    #[test]
    fn test_zero_tier_clamped_to_one() {
        let tiers = EnemyHealthConfig {
            easy: 0,
            normal: 80,
            hard: 120,
        };
        assert_eq!(tiers.for_difficulty(Difficulty::Easy), 1);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BattleConfig::from_toml_str(
            r#"
            enemy_name = "Orc"

            [enemy_health]
            easy = 30
            normal = 60
            hard = 90
            "#,
        )
        .unwrap();

        assert_eq!(config.enemy_name, "Orc");
        assert_eq!(config.player_health, 100);
        assert_eq!(config.enemy_health.for_difficulty(Difficulty::Hard), 90);
    }

    #[test]
    fn test_zero_player_health_rejected() {
        let err = BattleConfig::from_toml_str("player_health = 0").unwrap_err();
        assert!(matches!(err, BattleError::InvalidConfig(_)));
    }

    #[test]
    fn test_load_shipped_config() {
        let config = BattleConfig::load("data/battle.toml").expect("Should load data/battle.toml");
        assert_eq!(config, BattleConfig::default());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = BattleConfig::load("data/does_not_exist.toml").unwrap_err();
        assert!(matches!(err, BattleError::IoError(_)));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = BattleConfig::from_toml_str("player_health = \"lots\"").unwrap_err();
        assert!(matches!(err, BattleError::TomlError(_)));
    }
}
