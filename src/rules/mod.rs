//! Match rules: the turn/phase state machine and rejected actions.

pub mod error;
pub mod turn;

pub use error::InvalidAction;
pub use turn::{ActionOutcome, Phase, PlayOutcome, TurnChange, TurnRules};
pub use crate::core::MatchOutcome;
