//! Effect resolution - executing effects on match state.
//!
//! The `EffectResolver` walks an `Effect` tree and applies each leaf through
//! the `MatchState` primitives, so win detection fires from inside
//! resolution exactly as it would from any other health change.
//!
//! Timeline-scaled amounts read the timeline length at the moment the leaf
//! resolves.

use smallvec::SmallVec;

use crate::core::{MatchOutcome, MatchState, PlayerId};

use super::Effect;

/// Something a resolved effect did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectEvent {
    Damaged { target: PlayerId, amount: i64 },
    Healed { target: PlayerId, amount: i64 },
    Drew { player: PlayerId, count: usize },
    PlaysGranted { player: PlayerId, amount: u32 },
    /// A timeline gate was closed.
    Skipped { threshold: usize, timeline_len: usize },
    /// A leaf decided the match.
    MatchDecided(MatchOutcome),
}

/// Everything one effect did, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EffectReport {
    pub events: SmallVec<[EffectEvent; 4]>,
}

impl EffectReport {
    /// Total damage dealt.
    #[must_use]
    pub fn damage_dealt(&self) -> i64 {
        self.events
            .iter()
            .map(|e| match e {
                EffectEvent::Damaged { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }

    /// Total health actually gained.
    #[must_use]
    pub fn health_gained(&self) -> i64 {
        self.events
            .iter()
            .map(|e| match e {
                EffectEvent::Healed { amount, .. } => *amount,
                _ => 0,
            })
            .sum()
    }

    #[must_use]
    pub fn cards_drawn(&self) -> usize {
        self.events
            .iter()
            .map(|e| match e {
                EffectEvent::Drew { count, .. } => *count,
                _ => 0,
            })
            .sum()
    }

    /// The outcome, if this effect decided the match.
    #[must_use]
    pub fn decided(&self) -> Option<MatchOutcome> {
        self.events.iter().find_map(|e| match e {
            EffectEvent::MatchDecided(outcome) => Some(*outcome),
            _ => None,
        })
    }
}

/// Resolves effects on match state.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve `effect` with `actor` as the acting player.
    ///
    /// Resolution never fails: a draw with no supply draws nothing, and a
    /// closed gate is reported as `Skipped`. Effects keep resolving after the
    /// match is decided; the outcome itself cannot change.
    pub fn resolve(state: &mut MatchState, actor: PlayerId, effect: &Effect) -> EffectReport {
        let mut report = EffectReport::default();
        Self::resolve_into(state, actor, effect, &mut report);
        report
    }

    fn resolve_into(
        state: &mut MatchState,
        actor: PlayerId,
        effect: &Effect,
        report: &mut EffectReport,
    ) {
        match effect {
            Effect::Damage { amount } => {
                let target = actor.opponent();
                let amount = amount.evaluate(state.timeline().len()).max(0);
                let decided = state.damage(target, amount);
                tracing::debug!(%actor, %target, amount, "damage");
                report.events.push(EffectEvent::Damaged { target, amount });
                if let Some(outcome) = decided {
                    report.events.push(EffectEvent::MatchDecided(outcome));
                }
            }

            Effect::Heal { amount } => {
                let amount = amount.evaluate(state.timeline().len()).max(0);
                let gained = state.heal(actor, amount);
                tracing::debug!(%actor, amount, gained, "heal");
                report.events.push(EffectEvent::Healed {
                    target: actor,
                    amount: gained,
                });
            }

            Effect::Draw { count } => {
                let drawn = state.draw_cards(actor, *count);
                tracing::debug!(%actor, requested = count, drawn, "draw");
                report.events.push(EffectEvent::Drew {
                    player: actor,
                    count: drawn,
                });
            }

            Effect::GrantPlays { amount } => {
                state.grant_plays(actor, *amount);
                report.events.push(EffectEvent::PlaysGranted {
                    player: actor,
                    amount: *amount,
                });
            }

            Effect::Composite(effects) => {
                for sub_effect in effects {
                    Self::resolve_into(state, actor, sub_effect, report);
                }
            }

            Effect::WhenTimelineExceeds { threshold, effect } => {
                let timeline_len = state.timeline().len();
                if timeline_len > *threshold {
                    Self::resolve_into(state, actor, effect, report);
                } else {
                    report.events.push(EffectEvent::Skipped {
                        threshold: *threshold,
                        timeline_len,
                    });
                }
            }
        }
    }
}
