//! Turn state machine
//!
//! Each state decides what player input means and which state follows.
//! The enemy turn is never waited on: it resolves synchronously inside the
//! player's call, so callers only ever observe `PlayerTurn` or `GameOver`
//! between actions.
//!
//! ```text
//! PlayerTurn --action--> (battle over?) --yes--> GameOver
//!                              |no
//!                              v
//!                          EnemyTurn --enemy attacks--> (battle over?) --yes--> GameOver
//!                                                              |no
//!                                                              v
//!                                                          PlayerTurn
//! ```

use crate::battle::engine::BattleEngine;
use crate::command::ActionCommand;
use crate::core::types::Side;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOT_YOUR_TURN: &str = "It is not your turn.";
pub const BATTLE_ALREADY_OVER: &str = "The battle is already over.";
pub const ENEMY_TURN_ANNOUNCEMENT: &str = "Enemy turn:";
pub const PLAYER_TURN_ANNOUNCEMENT: &str = "Your turn.";

/// Whose move it is, or whether the battle has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnState {
    PlayerTurn,
    EnemyTurn,
    GameOver,
}

/// What the player asked to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerIntent {
    /// Run the player's active strategy against the enemy
    Attack,
    /// Recover the configured fixed heal amount
    Heal,
}

impl TurnState {
    pub fn name(&self) -> &'static str {
        match self {
            TurnState::PlayerTurn => "Player Turn",
            TurnState::EnemyTurn => "Enemy Turn",
            TurnState::GameOver => "Game Over",
        }
    }

    /// Only `GameOver` has no way out
    pub fn is_terminal(&self) -> bool {
        matches!(self, TurnState::GameOver)
    }

    pub(crate) fn on_attack(self, engine: &mut BattleEngine) {
        self.handle(engine, PlayerIntent::Attack);
    }

    pub(crate) fn on_heal(self, engine: &mut BattleEngine) {
        self.handle(engine, PlayerIntent::Heal);
    }

    fn handle(self, engine: &mut BattleEngine, intent: PlayerIntent) {
        match self {
            TurnState::PlayerTurn => player_turn(engine, intent),
            TurnState::EnemyTurn => engine.announce(NOT_YOUR_TURN),
            TurnState::GameOver => engine.announce(BATTLE_ALREADY_OVER),
        }
    }
}

impl fmt::Display for TurnState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn player_turn(engine: &mut BattleEngine, intent: PlayerIntent) {
    let command = match intent {
        PlayerIntent::Attack => ActionCommand::attack(Side::Player),
        PlayerIntent::Heal => ActionCommand::heal(Side::Player, engine.config().heal_amount),
    };
    engine.commit(command);

    if engine.is_battle_over() {
        engine.finish();
        return;
    }

    engine.set_state(TurnState::EnemyTurn);
    enemy_turn(engine);
}

/// Fixed enemy policy: always attack
fn enemy_turn(engine: &mut BattleEngine) {
    engine.announce(ENEMY_TURN_ANNOUNCEMENT);
    engine.commit(ActionCommand::strike(Side::Enemy));

    if engine.is_battle_over() {
        engine.finish();
        return;
    }

    engine.set_state(TurnState::PlayerTurn);
    engine.announce(PLAYER_TURN_ANNOUNCEMENT);
}
