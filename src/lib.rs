//! Duel Engine - turn-based combat between a player and one enemy

pub mod battle;
pub mod combat;
pub mod command;
pub mod core;
