pub mod combatant;
pub mod decorator;
pub mod dice;
pub mod events;
pub mod roster;
pub mod strategy;

pub use combatant::{Combatant, CombatantBuilder};
pub use decorator::{CriticalStrike, CRIT_BONUS_DAMAGE, CRIT_CHANCE_PERCENT};
pub use dice::{Dice, LoadedDice, RandomDice};
pub use events::{EventListener, EventLog, ListenerHandle, TracingListener};
pub use roster::Roster;
pub use strategy::{
    strategy_from_name, Aggressive, BehaviorStrategy, Defensive, AGGRESSIVE_DAMAGE,
    DEFENSIVE_HEAL,
};
