//! Battle system - one duel, two combatants, strict turn order
//!
//! The engine is the facade front-ends talk to; the turn machine decides
//! what each call means. Everything runs synchronously:
//! - A player action and the enemy's answer both resolve inside one call
//! - Player events always precede enemy events
//! - No background work, no locking

pub mod engine;
pub mod turn;

pub use engine::BattleEngine;
pub use turn::{
    PlayerIntent, TurnState, BATTLE_ALREADY_OVER, ENEMY_TURN_ANNOUNCEMENT, NOT_YOUR_TURN,
    PLAYER_TURN_ANNOUNCEMENT,
};
