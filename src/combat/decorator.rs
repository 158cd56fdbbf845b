//! Strategy decorators
//!
//! A decorator wraps any strategy, including another decorator, and adds
//! to its effect without changing the `BehaviorStrategy` interface.

use crate::combat::combatant::Combatant;
use crate::combat::dice::Dice;
use crate::combat::strategy::BehaviorStrategy;

/// Percent chance of a critical strike after the inner strategy resolves
pub const CRIT_CHANCE_PERCENT: u32 = 30;

/// Flat bonus damage dealt by a critical strike
pub const CRIT_BONUS_DAMAGE: u32 = 5;

/// Adds a chance of bonus damage on top of the inner strategy
pub struct CriticalStrike {
    inner: Box<dyn BehaviorStrategy>,
}

impl CriticalStrike {
    pub fn new(inner: Box<dyn BehaviorStrategy>) -> Self {
        Self { inner }
    }

    /// Convenience for wrapping a concrete strategy value
    pub fn wrap(inner: impl BehaviorStrategy + 'static) -> Self {
        Self::new(Box::new(inner))
    }

    pub fn inner(&self) -> &dyn BehaviorStrategy {
        self.inner.as_ref()
    }
}

impl BehaviorStrategy for CriticalStrike {
    fn execute(&self, actor: &mut Combatant, target: &mut Combatant, dice: &mut dyn Dice) {
        self.inner.execute(actor, target, dice);

        // No roll at all if the inner strategy already finished the target.
        if !target.is_alive() {
            return;
        }

        if dice.chance(CRIT_CHANCE_PERCENT) {
            target.apply_damage(CRIT_BONUS_DAMAGE);
            actor.broadcast(&format!(
                "Critical strike! {} dealt extra {} damage!",
                actor.name(),
                CRIT_BONUS_DAMAGE
            ));
        }
    }

    fn name(&self) -> String {
        format!("{}+Crit", self.inner.name())
    }
}
