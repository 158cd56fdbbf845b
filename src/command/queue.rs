//! Command queue - captures intents now, executes them as a batch later

use crate::combat::dice::Dice;
use crate::combat::roster::Roster;
use crate::command::action::ActionCommand;

/// Ordered, append-only batch of commands
#[derive(Debug, Default)]
pub struct CommandQueue {
    pending: Vec<ActionCommand>,
}

impl CommandQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, command: ActionCommand) {
        self.pending.push(command);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Execute every queued command in insertion order
    ///
    /// The queue is emptied before the first command runs, so nothing can
    /// execute twice and callers never see a half-flushed queue.
    pub fn flush_all(&mut self, roster: &mut Roster, dice: &mut dyn Dice) -> usize {
        let batch = std::mem::take(&mut self.pending);
        let count = batch.len();
        tracing::debug!(count, "flushing command queue");
        for command in batch {
            command.execute(roster, dice);
        }
        count
    }

    /// Drop queued commands without running them
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::{Aggressive, Combatant, EventLog, LoadedDice};
    use crate::core::types::Side;
    use std::sync::Arc;

    #[test]
    fn test_flush_runs_in_order_then_empties() {
        let log = Arc::new(EventLog::new());
        let mut player = Combatant::builder().name("Hero").max_health(100).health(50).build();
        let mut enemy = Combatant::new("Goblin", 80);
        player.set_strategy(Arc::new(Aggressive));
        player.subscribe(log.clone());
        enemy.subscribe(log.clone());
        let mut roster = Roster::new(player, enemy);

        let mut queue = CommandQueue::new();
        queue.enqueue(ActionCommand::heal(Side::Player, 10));
        queue.enqueue(ActionCommand::attack(Side::Player));
        assert_eq!(queue.len(), 2);

        let ran = queue.flush_all(&mut roster, &mut LoadedDice::new([11]));

        assert_eq!(ran, 2);
        assert!(queue.is_empty());
        assert_eq!(
            log.messages(),
            vec![
                "Hero healed 10 HP! (HP: 60)",
                "Goblin took 11 damage! (HP: 69)",
                "Hero attacked Goblin for 11 damage!",
            ]
        );

        // second flush is a no-op
        assert_eq!(queue.flush_all(&mut roster, &mut LoadedDice::default()), 0);
        assert_eq!(roster.enemy.health(), 69);
    }

    #[test]
    fn test_clear_discards() {
        let mut queue = CommandQueue::new();
        queue.enqueue(ActionCommand::attack(Side::Enemy));
        queue.clear();
        assert!(queue.is_empty());
    }
}
