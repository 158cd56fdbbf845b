//! Command pipeline
//!
//! Player intents become `ActionCommand`s, are queued, and run as a batch:
//! intent -> CommandQueue::enqueue -> CommandQueue::flush_all -> Combatant

pub mod action;
pub mod queue;

pub use action::ActionCommand;
pub use queue::CommandQueue;
