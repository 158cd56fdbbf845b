//! Behavior strategies
//!
//! A strategy is what a combatant does on its turn. Strategies carry no
//! per-combatant state, so one instance can be shared by any number of
//! combatants behind an `Arc`.

use crate::combat::combatant::Combatant;
use crate::combat::decorator::CriticalStrike;
use crate::combat::dice::Dice;
use crate::core::error::{BattleError, Result};
use std::ops::RangeInclusive;
use std::sync::Arc;

/// Damage dealt by an aggressive attack
pub const AGGRESSIVE_DAMAGE: RangeInclusive<u32> = 10..=20;

/// Health restored by a defensive stance
pub const DEFENSIVE_HEAL: RangeInclusive<u32> = 8..=14;

/// Pluggable turn behavior
pub trait BehaviorStrategy: Send + Sync {
    /// Act as `actor` against `target`
    fn execute(&self, actor: &mut Combatant, target: &mut Combatant, dice: &mut dyn Dice);

    /// Display name, e.g. `"Aggressive"` or `"Aggressive+Crit"`
    fn name(&self) -> String;
}

/// Hit the target for 10-20 damage
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggressive;

impl BehaviorStrategy for Aggressive {
    fn execute(&self, actor: &mut Combatant, target: &mut Combatant, dice: &mut dyn Dice) {
        let damage = dice.roll(AGGRESSIVE_DAMAGE);
        target.apply_damage(damage);
        actor.broadcast(&format!(
            "{} attacked {} for {} damage!",
            actor.name(),
            target.name(),
            damage
        ));
    }

    fn name(&self) -> String {
        "Aggressive".to_string()
    }
}

/// Ignore the target and heal self for 8-14
#[derive(Debug, Clone, Copy, Default)]
pub struct Defensive;

impl BehaviorStrategy for Defensive {
    fn execute(&self, actor: &mut Combatant, _target: &mut Combatant, dice: &mut dyn Dice) {
        if !actor.is_alive() {
            return;
        }
        let amount = dice.roll(DEFENSIVE_HEAL);
        actor.apply_heal(amount);
        actor.broadcast(&format!(
            "{} focused defensively and healed {} HP!",
            actor.name(),
            amount
        ));
    }

    fn name(&self) -> String {
        "Defensive".to_string()
    }
}

/// Resolve a display name back into a strategy
///
/// Accepts `Aggressive` or `Defensive` (any case) followed by any number of
/// `+Crit` layers, e.g. `"aggressive+crit"`.
pub fn strategy_from_name(name: &str) -> Result<Arc<dyn BehaviorStrategy>> {
    let mut parts = name.split('+').map(str::trim);
    let base = parts.next().unwrap_or_default();

    let mut strategy: Box<dyn BehaviorStrategy> = match base.to_ascii_lowercase().as_str() {
        "aggressive" => Box::new(Aggressive),
        "defensive" => Box::new(Defensive),
        _ => return Err(BattleError::UnknownStrategy(name.to_string())),
    };

    for layer in parts {
        if !layer.eq_ignore_ascii_case("crit") {
            return Err(BattleError::UnknownStrategy(name.to_string()));
        }
        strategy = Box::new(CriticalStrike::new(strategy));
    }

    Ok(Arc::from(strategy))
}
