//! Process Implementations
//!
//! Spawning the compiler and keeping track of what was spawned.

mod invoker;
mod tracker;

pub use invoker::{ProcessInvoker, ProcessOutcome};
pub use tracker::{terminate, ProcessTracker};
