//! The two combatants of a duel, addressed by side

use crate::combat::combatant::Combatant;
use crate::core::types::{BattleOutcome, Side};

/// Player and enemy of one battle
#[derive(Debug)]
pub struct Roster {
    pub player: Combatant,
    pub enemy: Combatant,
}

impl Roster {
    pub fn new(player: Combatant, enemy: Combatant) -> Self {
        Self { player, enemy }
    }

    pub fn get_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Enemy => &mut self.enemy,
        }
    }

    /// Split into `(side, side.opponent())`, both mutable
    pub fn pair_mut(&mut self, side: Side) -> (&mut Combatant, &mut Combatant) {
        match side {
            Side::Player => (&mut self.player, &mut self.enemy),
            Side::Enemy => (&mut self.enemy, &mut self.player),
        }
    }

    /// Over once either side is down
    pub fn is_over(&self) -> bool {
        !self.player.is_alive() || !self.enemy.is_alive()
    }

    /// Result from the player's perspective, if the battle has ended
    pub fn outcome(&self) -> Option<BattleOutcome> {
        if !self.player.is_alive() {
            Some(BattleOutcome::Defeat)
        } else if !self.enemy.is_alive() {
            Some(BattleOutcome::Victory)
        } else {
            None
        }
    }
}
