//! Combatant entity
//!
//! Health only ever changes through `apply_damage` / `apply_heal`, so the
//! `0 <= health <= max_health` bound is enforced in exactly two places.
//! A combatant at zero health is defeated for good.

use crate::combat::dice::Dice;
use crate::combat::events::{notify_all, ListenerHandle};
use crate::combat::strategy::BehaviorStrategy;
use std::fmt;
use std::sync::Arc;

/// One side of a duel
pub struct Combatant {
    name: String,
    health: u32,
    max_health: u32,
    strategy: Option<Arc<dyn BehaviorStrategy>>,
    listeners: Vec<ListenerHandle>,
}

impl Combatant {
    /// New combatant at full health. `max_health` is raised to 1 if zero.
    pub fn new(name: impl Into<String>, max_health: u32) -> Self {
        let max_health = max_health.max(1);
        Self {
            name: name.into(),
            health: max_health,
            max_health,
            strategy: None,
            listeners: Vec::new(),
        }
    }

    pub fn builder() -> CombatantBuilder {
        CombatantBuilder::new()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Display name of the active strategy, `"None"` when unset
    pub fn strategy_name(&self) -> String {
        self.strategy
            .as_ref()
            .map(|s| s.name())
            .unwrap_or_else(|| "None".to_string())
    }

    pub fn set_strategy(&mut self, strategy: Arc<dyn BehaviorStrategy>) {
        self.strategy = Some(strategy);
    }

    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    // === EVENTS ===

    pub fn subscribe(&mut self, listener: ListenerHandle) {
        self.listeners.push(listener);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver a message to every listener, in registration order
    ///
    /// Whatever state change the message reports has already happened.
    /// A listener that panics is skipped and cannot undo it.
    pub fn broadcast(&self, message: &str) {
        notify_all(&self.listeners, message);
    }

    // === HEALTH ===

    /// Take damage, flooring at zero. Defeated combatants ignore this.
    pub fn apply_damage(&mut self, amount: u32) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.saturating_sub(amount);
        tracing::debug!(combatant = %self.name, amount, health = self.health, "damage applied");
        self.broadcast(&format!(
            "{} took {} damage! (HP: {})",
            self.name, amount, self.health
        ));
    }

    /// Restore health, capped at `max_health`. Defeated combatants ignore this.
    pub fn apply_heal(&mut self, amount: u32) {
        if !self.is_alive() {
            return;
        }
        self.health = self.health.saturating_add(amount).min(self.max_health);
        tracing::debug!(combatant = %self.name, amount, health = self.health, "heal applied");
        self.broadcast(&format!(
            "{} healed {} HP! (HP: {})",
            self.name, amount, self.health
        ));
    }

    // === ACTIONS ===

    /// Run the active strategy against `target`
    ///
    /// Degenerate cases (self defeated, no strategy, target missing or
    /// defeated) produce an advisory message and change nothing.
    pub fn perform_action(&mut self, target: Option<&mut Combatant>, dice: &mut dyn Dice) {
        if !self.is_alive() {
            self.broadcast(&format!(
                "{} is already defeated and cannot act!",
                self.name
            ));
            return;
        }

        let Some(strategy) = self.strategy.clone() else {
            self.broadcast(&format!("{} has no behavior strategy set!", self.name));
            return;
        };

        self.perform_with(strategy.as_ref(), target, dice);
    }

    /// Like `perform_action`, but with `behavior` in place of the held strategy
    pub fn perform_with(
        &mut self,
        behavior: &dyn BehaviorStrategy,
        target: Option<&mut Combatant>,
        dice: &mut dyn Dice,
    ) {
        if !self.is_alive() {
            self.broadcast(&format!(
                "{} is already defeated and cannot act!",
                self.name
            ));
            return;
        }

        let target = match target {
            Some(t) if t.is_alive() => t,
            _ => {
                self.broadcast(&format!(
                    "{} tried to act, but the target is already defeated!",
                    self.name
                ));
                return;
            }
        };

        tracing::debug!(actor = %self.name, strategy = %behavior.name(), "performing action");
        behavior.execute(self, target, dice);
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("name", &self.name)
            .field("health", &self.health)
            .field("max_health", &self.max_health)
            .field("strategy", &self.strategy_name())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Fluent construction of a combatant
pub struct CombatantBuilder {
    name: String,
    max_health: u32,
    health: Option<u32>,
    strategy: Option<Arc<dyn BehaviorStrategy>>,
}

impl Default for CombatantBuilder {
    fn default() -> Self {
        Self {
            name: "Unnamed".to_string(),
            max_health: 100,
            health: None,
            strategy: None,
        }
    }
}

impl CombatantBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn max_health(mut self, max_health: u32) -> Self {
        self.max_health = max_health;
        self
    }

    /// Start below full health (clamped to `max_health`)
    pub fn health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    pub fn strategy(mut self, strategy: Arc<dyn BehaviorStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Combatant {
        let mut combatant = Combatant::new(self.name, self.max_health);
        if let Some(health) = self.health {
            combatant.health = health.min(combatant.max_health);
        }
        combatant.strategy = self.strategy;
        combatant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::dice::LoadedDice;
    use crate::combat::events::EventLog;
    use crate::combat::strategy::Aggressive;

    fn watched(name: &str, hp: u32) -> (Combatant, Arc<EventLog>) {
        let log = Arc::new(EventLog::new());
        let mut c = Combatant::new(name, hp);
        c.subscribe(log.clone());
        (c, log)
    }

    #[test]
    fn test_starts_at_full_health() {
        let c = Combatant::new("Hero", 100);
        assert_eq!(c.health(), 100);
        assert_eq!(c.max_health(), 100);
        assert!(c.is_alive());
        assert_eq!(c.strategy_name(), "None");
    }

    #[test]
    fn test_zero_max_health_raised_to_one() {
        let c = Combatant::new("Wisp", 0);
        assert_eq!(c.max_health(), 1);
        assert!(c.is_alive());
    }

    #[test]
    fn test_damage_floors_at_zero() {
        let (mut c, log) = watched("Goblin", 15);
        c.apply_damage(20);
        assert_eq!(c.health(), 0);
        assert!(!c.is_alive());
        assert_eq!(log.messages(), vec!["Goblin took 20 damage! (HP: 0)"]);
    }

    #[test]
    fn test_heal_caps_at_max() {
        let (mut c, log) = watched("Hero", 100);
        c.apply_damage(5);
        c.apply_heal(14);
        assert_eq!(c.health(), 100);
        assert!(log.contains("Hero healed 14 HP! (HP: 100)"));
    }

    #[test]
    fn test_defeat_is_final() {
        let (mut c, log) = watched("Goblin", 10);
        c.apply_damage(10);
        log.take();

        c.apply_damage(5);
        c.apply_heal(50);
        assert_eq!(c.health(), 0);
        assert!(log.messages().is_empty());
    }

    #[test]
    fn test_action_without_strategy_is_advisory() {
        let (mut hero, log) = watched("Hero", 100);
        let mut goblin = Combatant::new("Goblin", 50);
        let mut dice = LoadedDice::default();

        hero.perform_action(Some(&mut goblin), &mut dice);

        assert_eq!(goblin.health(), 50);
        assert_eq!(log.messages(), vec!["Hero has no behavior strategy set!"]);
    }

    #[test]
    fn test_action_against_missing_or_defeated_target() {
        let (mut hero, log) = watched("Hero", 100);
        hero.set_strategy(Arc::new(Aggressive));
        let mut dice = LoadedDice::new([20]);

        hero.perform_action(None, &mut dice);

        let mut corpse = Combatant::builder().name("Goblin").max_health(50).health(0).build();
        hero.perform_action(Some(&mut corpse), &mut dice);

        assert_eq!(dice.remaining(), 1);
        assert_eq!(log.messages().len(), 2);
        assert!(log
            .messages()
            .iter()
            .all(|m| m == "Hero tried to act, but the target is already defeated!"));
    }

    #[test]
    fn test_defeated_actor_cannot_act() {
        let (mut hero, log) = watched("Hero", 100);
        hero.set_strategy(Arc::new(Aggressive));
        hero.apply_damage(100);
        log.take();

        let mut goblin = Combatant::new("Goblin", 50);
        hero.perform_action(Some(&mut goblin), &mut LoadedDice::new([20]));

        assert_eq!(goblin.health(), 50);
        assert_eq!(log.messages(), vec!["Hero is already defeated and cannot act!"]);
    }

    #[test]
    fn test_listeners_called_in_registration_order() {
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));
        let mut c = Combatant::new("Hero", 100);
        for tag in ["a", "b", "c"] {
            let order = Arc::clone(&order);
            c.subscribe(Arc::new(move |_: &str| order.lock().unwrap().push(tag)));
        }

        c.broadcast("hello");
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_panicking_listener_keeps_health_change() {
        let log = Arc::new(EventLog::new());
        let mut c = Combatant::new("Goblin", 80);
        c.subscribe(Arc::new(|_: &str| panic!("listener failure")));
        c.subscribe(log.clone());

        c.apply_damage(12);

        assert_eq!(c.health(), 68);
        assert_eq!(log.messages(), vec!["Goblin took 12 damage! (HP: 68)"]);
    }

    #[test]
    fn test_perform_with_ignores_held_strategy() {
        let (mut hero, log) = watched("Hero", 100);
        hero.set_strategy(Arc::new(crate::combat::strategy::Defensive));
        let mut goblin = Combatant::new("Goblin", 50);

        hero.perform_with(&Aggressive, Some(&mut goblin), &mut LoadedDice::new([12]));

        assert_eq!(goblin.health(), 38);
        assert_eq!(hero.strategy_name(), "Defensive");
        assert!(log.contains("Hero attacked Goblin for 12 damage!"));
    }

    #[test]
    fn test_clear_strategy() {
        let mut c = Combatant::builder().strategy(Arc::new(Aggressive)).build();
        assert_eq!(c.strategy_name(), "Aggressive");
        c.clear_strategy();
        assert_eq!(c.strategy_name(), "None");
    }

    #[test]
    fn test_builder_clamps_health() {
        let c = Combatant::builder().name("Hero").max_health(100).health(250).build();
        assert_eq!(c.name(), "Hero");
        assert_eq!(c.health(), 100);

        let default = CombatantBuilder::new().build();
        assert_eq!(default.name(), "Unnamed");
        assert_eq!(default.max_health(), 100);
    }
}
