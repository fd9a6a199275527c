//! AI opponent.
//!
//! - `AiPolicy`: Picks the next action (`GreedyPolicy`, `RandomPolicy`)
//! - `Pacer`: Pauses between steps (`SleepPacer`, `NoDelay`)
//! - `AiController`: Runs a full AI turn through the normal rules path

pub mod controller;
pub mod pacer;
pub mod policy;

pub use controller::{AiController, AiTurnReport};
pub use pacer::{NoDelay, Pacer, SleepPacer};
pub use policy::{AiPolicy, GreedyPolicy, RandomPolicy};
