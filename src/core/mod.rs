pub mod config;
pub mod error;
pub mod types;

pub use config::{BattleConfig, EnemyHealthConfig};
pub use error::{BattleError, Result};
pub use types::{BattleOutcome, CharacterClass, Difficulty, Side};
