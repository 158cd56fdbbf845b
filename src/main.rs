//! Duel Engine - Console Entry Point
//!
//! A thin front-end: reads menu choices, calls into the engine, and prints
//! whatever narration the engine broadcasts. No battle rules live here.

use clap::Parser;
use duel_engine::battle::{BattleEngine, TurnState};
use duel_engine::combat::{EventListener, TracingListener};
use duel_engine::core::config::BattleConfig;
use duel_engine::core::error::Result;
use duel_engine::core::types::BattleOutcome;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

/// Turn-based duel against a goblin
#[derive(Parser, Debug)]
#[command(name = "duel")]
#[command(about = "Fight a turn-based duel in the terminal")]
struct Args {
    /// Hero name
    #[arg(long, default_value = "Hero")]
    name: String,

    /// Character class: warrior, mage, ...
    #[arg(long, default_value = "warrior")]
    class: String,

    /// Difficulty 1-3 (anything else plays as 2)
    #[arg(long, short = 'd', default_value_t = 2)]
    difficulty: i64,

    /// Random seed for reproducible fights
    #[arg(long)]
    seed: Option<u64>,

    /// Battle config TOML (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Attack every turn without prompting, then print a JSON summary
    #[arg(long)]
    auto: bool,
}

/// JSON output for `--auto`
#[derive(Serialize)]
struct DuelSummary {
    outcome: Option<BattleOutcome>,
    turns: u32,
    player: String,
    player_hp: u32,
    enemy: String,
    enemy_hp: u32,
    seed: Option<u64>,
}

/// Prints narration to stdout, tagged with the logger name
struct ConsoleLogger {
    name: &'static str,
}

impl EventListener for ConsoleLogger {
    fn on_event(&self, message: &str) {
        println!("[{}] {}", self.name, message);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("duel_engine=info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BattleConfig::load(path)?,
        None => BattleConfig::default(),
    };

    let mut engine = match args.seed {
        Some(seed) => BattleEngine::seeded(config, seed),
        None => BattleEngine::new(config),
    };

    if args.auto {
        engine.subscribe(Arc::new(TracingListener));
        engine.start_new_game(&args.name, &args.class, args.difficulty);
        return run_auto(&mut engine, args.seed);
    }

    engine.subscribe(Arc::new(ConsoleLogger { name: "GameLogger" }));
    engine.start_new_game(&args.name, &args.class, args.difficulty);
    run_interactive(&mut engine)
}

/// Always attack until someone drops
fn run_auto(engine: &mut BattleEngine, seed: Option<u64>) -> Result<()> {
    let mut turns = 0;
    while !engine.is_battle_over() {
        engine.player_attack()?;
        turns += 1;
    }

    let player = engine.player()?;
    let enemy = engine.enemy()?;
    let summary = DuelSummary {
        outcome: engine.outcome(),
        turns,
        player: player.name().to_string(),
        player_hp: player.health(),
        enemy: enemy.name().to_string(),
        enemy_hp: enemy.health(),
        seed,
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => tracing::error!("failed to serialize summary: {}", e),
    }
    Ok(())
}

fn run_interactive(engine: &mut BattleEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while engine.state() != TurnState::GameOver {
        display_menu(engine)?;

        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        match line.trim() {
            "1" | "a" | "act" => engine.player_attack()?,
            "2" | "h" | "heal" => engine.player_heal()?,
            "3" | "s" | "switch" => switch_strategy(engine)?,
            "4" | "q" | "quit" => {
                println!("Exiting game...");
                break;
            }
            "" => continue,
            other => println!("Unknown choice '{}'. Pick 1-4.", other),
        }
    }

    println!("=== GAME OVER ===");
    Ok(())
}

/// Toggle between the two base stances, keeping the crit layer
fn switch_strategy(engine: &mut BattleEngine) -> Result<()> {
    let current = engine.player()?.strategy_name();
    let next = if current.starts_with("Aggressive") {
        "Defensive+Crit"
    } else {
        "Aggressive+Crit"
    };
    engine.change_strategy_by_name(next)?;
    println!("Strategy changed to [{}]", next);
    Ok(())
}

fn display_menu(engine: &BattleEngine) -> Result<()> {
    let player = engine.player()?;
    let enemy = engine.enemy()?;
    let strategy = player.strategy_name();
    let act = if strategy.starts_with("Defensive") {
        "Heal Yourself (strategy)"
    } else {
        "Attack Enemy"
    };

    println!();
    println!("===========================================");
    println!("                 BATTLE MENU               ");
    println!("===========================================");
    println!("Turn             : {}", engine.state());
    println!("Current Strategy : [{}]", strategy);
    let player_label = format!("{} HP", player.name());
    let enemy_label = format!("{} HP", enemy.name());
    println!("{:<17}: {}/{}", player_label, player.health(), player.max_health());
    println!("{:<17}: {}/{}", enemy_label, enemy.health(), enemy.max_health());
    println!("-------------------------------------------");
    println!("  1. {}", act);
    println!("  2. Heal (+{} HP)", engine.config().heal_amount);
    println!("  3. Change Strategy");
    println!("  4. Quit Game");
    Ok(())
}
