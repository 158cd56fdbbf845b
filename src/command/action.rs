//! Deferred combat actions

use crate::combat::dice::Dice;
use crate::combat::roster::Roster;
use crate::combat::strategy::Aggressive;
use crate::core::types::Side;

/// A single queued intent
///
/// Commands name sides rather than holding combatants, so they can be
/// built before the roster is borrowed and run against it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    /// `attacker` runs its strategy against its opponent
    Attack { attacker: Side },
    /// `attacker` hits its opponent with plain `Aggressive`, whatever it holds
    Strike { attacker: Side },
    /// `target` recovers a fixed amount
    Heal { target: Side, amount: u32 },
}

impl ActionCommand {
    pub fn attack(attacker: Side) -> Self {
        ActionCommand::Attack { attacker }
    }

    pub fn strike(attacker: Side) -> Self {
        ActionCommand::Strike { attacker }
    }

    pub fn heal(target: Side, amount: u32) -> Self {
        ActionCommand::Heal { target, amount }
    }

    /// Run the command. Consumes it: a command executes at most once.
    pub fn execute(self, roster: &mut Roster, dice: &mut dyn Dice) {
        match self {
            ActionCommand::Attack { attacker } => {
                let (actor, target) = roster.pair_mut(attacker);
                actor.perform_action(Some(target), dice);
            }
            ActionCommand::Strike { attacker } => {
                let (actor, target) = roster.pair_mut(attacker);
                actor.perform_with(&Aggressive, Some(target), dice);
            }
            ActionCommand::Heal { target, amount } => {
                roster.get_mut(target).apply_heal(amount);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Combatant, Defensive, LoadedDice};
    use std::sync::Arc;

    fn roster() -> Roster {
        let mut enemy = Combatant::new("Goblin", 80);
        enemy.set_strategy(Arc::new(Aggressive));
        let player = Combatant::builder().name("Hero").max_health(100).health(70).build();
        Roster::new(player, enemy)
    }

    #[test]
    fn test_attack_targets_opponent() {
        let mut roster = roster();
        ActionCommand::attack(Side::Enemy).execute(&mut roster, &mut LoadedDice::new([13]));
        assert_eq!(roster.player.health(), 57);
        assert_eq!(roster.enemy.health(), 80);
    }

    #[test]
    fn test_strike_ignores_held_strategy() {
        let mut roster = roster();
        roster.enemy.set_strategy(Arc::new(Defensive));
        ActionCommand::strike(Side::Enemy).execute(&mut roster, &mut LoadedDice::new([13]));
        assert_eq!(roster.player.health(), 57);
        assert_eq!(roster.enemy.health(), 80);
    }

    #[test]
    fn test_heal_fixed_amount() {
        let mut roster = roster();
        ActionCommand::heal(Side::Player, 10).execute(&mut roster, &mut LoadedDice::default());
        assert_eq!(roster.player.health(), 80);
    }
}
