//! Battle engine facade
//!
//! Owns everything one duel needs (roster, strategies, command queue,
//! turn state, dice, listeners) and is the only entry point for
//! front-ends. Every call runs to completion, enemy counter-turn included,
//! before it returns.

use crate::battle::turn::TurnState;
use crate::combat::{
    strategy_from_name, Aggressive, BehaviorStrategy, Combatant, CriticalStrike, Dice,
    ListenerHandle, RandomDice, Roster,
};
use crate::combat::events::notify_all;
use crate::command::{ActionCommand, CommandQueue};
use crate::core::config::BattleConfig;
use crate::core::error::{BattleError, Result};
use crate::core::types::{BattleOutcome, CharacterClass, Difficulty};
use std::sync::Arc;

pub struct BattleEngine {
    config: BattleConfig,
    roster: Option<Roster>,
    state: TurnState,
    queue: CommandQueue,
    dice: Box<dyn Dice>,
    listeners: Vec<ListenerHandle>,
    difficulty: Option<Difficulty>,
    player_class: Option<CharacterClass>,
}

impl Default for BattleEngine {
    fn default() -> Self {
        Self::new(BattleConfig::default())
    }
}

impl BattleEngine {
    /// Engine with OS-seeded dice
    pub fn new(config: BattleConfig) -> Self {
        Self::with_dice(config, RandomDice::from_entropy())
    }

    /// Engine whose rolls are reproducible for `seed`
    pub fn seeded(config: BattleConfig, seed: u64) -> Self {
        Self::with_dice(config, RandomDice::seeded(seed))
    }

    pub fn with_dice(config: BattleConfig, dice: impl Dice + 'static) -> Self {
        Self {
            config,
            roster: None,
            // Nothing to play until a game starts.
            state: TurnState::GameOver,
            queue: CommandQueue::new(),
            dice: Box::new(dice),
            listeners: Vec::new(),
            difficulty: None,
            player_class: None,
        }
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    /// Register a listener for engine and combatant narration
    ///
    /// Takes effect immediately for a battle in progress and is carried
    /// over to every later `start_new_game`.
    pub fn subscribe(&mut self, listener: ListenerHandle) {
        if let Some(roster) = self.roster.as_mut() {
            roster.player.subscribe(Arc::clone(&listener));
            roster.enemy.subscribe(Arc::clone(&listener));
        }
        self.listeners.push(listener);
    }

    // === GAME SETUP ===

    /// Reset and begin a fresh duel
    ///
    /// `difficulty` outside 1..=3 plays as Normal. The class is recorded but
    /// does not change stats yet.
    pub fn start_new_game(&mut self, name: &str, class: &str, difficulty: i64) {
        let difficulty = Difficulty::from_level(difficulty);
        let class = CharacterClass::from_name(class);
        let enemy_hp = self.config.enemy_health.for_difficulty(difficulty);

        let player_strategy: Arc<dyn BehaviorStrategy> = Arc::new(CriticalStrike::wrap(Aggressive));
        let mut player = Combatant::builder()
            .name(name)
            .max_health(self.config.player_health)
            .strategy(player_strategy)
            .build();
        let mut enemy = Combatant::builder()
            .name(self.config.enemy_name.clone())
            .max_health(enemy_hp)
            .strategy(Arc::new(Aggressive))
            .build();

        for listener in &self.listeners {
            player.subscribe(Arc::clone(listener));
            enemy.subscribe(Arc::clone(listener));
        }

        self.queue.clear();
        self.roster = Some(Roster::new(player, enemy));
        self.difficulty = Some(difficulty);
        self.player_class = Some(class);
        self.state = TurnState::PlayerTurn;

        tracing::info!(
            player = name,
            %class,
            ?difficulty,
            enemy_hp,
            "new game started"
        );
        self.announce(&format!(
            "New game started: {} vs {}",
            name, self.config.enemy_name
        ));
        self.announce(&format!(
            "Difficulty: {} | {} HP: {}",
            difficulty.level(),
            self.config.enemy_name,
            enemy_hp
        ));
    }

    // === PLAYER INPUT ===

    pub fn player_attack(&mut self) -> Result<()> {
        self.require_started()?;
        let state = self.state;
        state.on_attack(self);
        Ok(())
    }

    pub fn player_heal(&mut self) -> Result<()> {
        self.require_started()?;
        let state = self.state;
        state.on_heal(self);
        Ok(())
    }

    /// Swap the player's strategy. Allowed at any point in the turn cycle.
    pub fn change_strategy(&mut self, strategy: Arc<dyn BehaviorStrategy>) -> Result<()> {
        let roster = self.roster.as_mut().ok_or(BattleError::NotStarted)?;
        tracing::debug!(strategy = %strategy.name(), "player strategy changed");
        roster.player.set_strategy(strategy);
        Ok(())
    }

    /// Swap the player's strategy by display name, e.g. `"Defensive"`
    pub fn change_strategy_by_name(&mut self, name: &str) -> Result<()> {
        self.require_started()?;
        let strategy = strategy_from_name(name)?;
        self.change_strategy(strategy)
    }

    // === QUERIES ===

    /// True when no battle is running or either side is down
    pub fn is_battle_over(&self) -> bool {
        self.roster.as_ref().map_or(true, Roster::is_over)
    }

    pub fn outcome(&self) -> Option<BattleOutcome> {
        self.roster.as_ref().and_then(Roster::outcome)
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn player(&self) -> Result<&Combatant> {
        self.roster
            .as_ref()
            .map(|r| &r.player)
            .ok_or(BattleError::NotStarted)
    }

    pub fn enemy(&self) -> Result<&Combatant> {
        self.roster
            .as_ref()
            .map(|r| &r.enemy)
            .ok_or(BattleError::NotStarted)
    }

    /// Direct access for scripted setups (tests, tutorials)
    ///
    /// The enemy's counter-turn always strikes with `Aggressive`, so a
    /// strategy set through `enemy_mut` only shows up in its display name.
    pub fn player_mut(&mut self) -> Result<&mut Combatant> {
        self.roster
            .as_mut()
            .map(|r| &mut r.player)
            .ok_or(BattleError::NotStarted)
    }

    pub fn enemy_mut(&mut self) -> Result<&mut Combatant> {
        self.roster
            .as_mut()
            .map(|r| &mut r.enemy)
            .ok_or(BattleError::NotStarted)
    }

    pub fn difficulty(&self) -> Option<Difficulty> {
        self.difficulty
    }

    pub fn player_class(&self) -> Option<CharacterClass> {
        self.player_class
    }

    // === STATE MACHINE HOOKS ===

    pub(crate) fn set_state(&mut self, next: TurnState) {
        tracing::debug!(from = %self.state, to = %next, "turn state transition");
        self.state = next;
    }

    /// Queue a command and flush the batch immediately
    pub(crate) fn commit(&mut self, command: ActionCommand) {
        let Some(roster) = self.roster.as_mut() else {
            return;
        };
        self.queue.enqueue(command);
        self.queue.flush_all(roster, self.dice.as_mut());
    }

    /// Enter `GameOver` and name the winner
    pub(crate) fn finish(&mut self) {
        self.set_state(TurnState::GameOver);

        let Some(roster) = self.roster.as_ref() else {
            return;
        };
        let (player, enemy) = (roster.player.name(), roster.enemy.name());
        let message = match roster.outcome() {
            Some(BattleOutcome::Victory) => format!("{} defeated {}!", player, enemy),
            Some(BattleOutcome::Defeat) => format!("{} was defeated by {}!", player, enemy),
            None => return,
        };
        tracing::info!(outcome = ?roster.outcome(), "battle finished");
        self.announce(&message);
    }

    /// Send an engine-level message to every registered listener
    pub(crate) fn announce(&self, message: &str) {
        notify_all(&self.listeners, message);
    }

    fn require_started(&self) -> Result<()> {
        if self.roster.is_none() {
            return Err(BattleError::NotStarted);
        }
        Ok(())
    }
}
