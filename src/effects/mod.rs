//! Effect system for card abilities.
//!
//! ## Key Types
//!
//! - `Amount`: Fixed or timeline-scaled magnitude
//! - `Effect`: Tagged card effect (damage, heal, draw, plays, composites)
//! - `EffectResolver`: Applies effects to a `MatchState`
//! - `EffectReport`: What a resolution did

pub mod effect;
pub mod resolver;

pub use effect::{Amount, Effect};
pub use resolver::{EffectEvent, EffectReport, EffectResolver};
