//! Player identification and per-player match data.
//!
//! ## PlayerId
//!
//! A match always seats exactly two players: `PlayerId::P1` (the local
//! player) and `PlayerId::P2` (the opponent).
//!
//! ## PlayerPair
//!
//! Fixed two-slot storage indexed by `PlayerId`.
//!
//! ## Player
//!
//! Health, plays budget, progression stats and the card piles.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::zones::Piles;

/// Player identifier. Index 0 is `p1`, index 1 is `p2`.
///
/// Deserialization rejects anything outside the two seats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerId(pub u8);

/// A raw seat index that names no player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[error("no player seat {0}")]
pub struct InvalidPlayerId(pub u8);

impl PlayerId {
    /// The first player (acts on turn 1).
    pub const P1: PlayerId = PlayerId(0);
    /// The second player.
    pub const P2: PlayerId = PlayerId(1);

    /// Create a player ID, returning `None` outside the two seats.
    #[must_use]
    pub const fn new(id: u8) -> Option<Self> {
        if id < 2 {
            Some(Self(id))
        } else {
            None
        }
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The other seat.
    ///
    /// ```
    /// use recursion_ccg::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::P1.opponent(), PlayerId::P2);
    /// assert_eq!(PlayerId::P2.opponent(), PlayerId::P1);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(1 - (self.0 & 1))
    }

    /// Both seats in turn order.
    #[must_use]
    pub const fn both() -> [PlayerId; 2] {
        [Self::P1, Self::P2]
    }

    /// Short key used in persisted data (`"p1"`, `"p2"`).
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self.0 {
            0 => "p1",
            _ => "p2",
        }
    }
}

impl TryFrom<u8> for PlayerId {
    type Error = InvalidPlayerId;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        PlayerId::new(raw).ok_or(InvalidPlayerId(raw))
    }
}

impl From<PlayerId> for u8 {
    fn from(id: PlayerId) -> Self {
        id.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-player storage for the two seats of a match.
///
/// ## Example
///
/// ```
/// use recursion_ccg::core::{PlayerId, PlayerPair};
///
/// let mut health: PlayerPair<i64> = PlayerPair::new(|_| 20);
/// health[PlayerId::P2] -= 2;
///
/// assert_eq!(health[PlayerId::P1], 20);
/// assert_eq!(health[PlayerId::P2], 18);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(mut factory: impl FnMut(PlayerId) -> T) -> Self {
        Self {
            data: [factory(PlayerId::P1), factory(PlayerId::P2)],
        }
    }

    /// Create a pair from explicit values.
    pub fn from_parts(p1: T, p2: T) -> Self {
        Self { data: [p1, p2] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::both().into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::both().into_iter().zip(self.data.iter_mut())
    }

    /// Map each entry into a new pair.
    pub fn map<U>(&self, mut f: impl FnMut(PlayerId, &T) -> U) -> PlayerPair<U> {
        PlayerPair {
            data: [
                f(PlayerId::P1, &self.data[0]),
                f(PlayerId::P2, &self.data[1]),
            ],
        }
    }
}

impl<T> Index<PlayerId> for PlayerPair<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerPair<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// A seated player.
///
/// Health is signed: damage may drive it below zero, which is what win
/// detection looks for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub health: i64,
    pub max_health: i64,
    /// Remaining plays this turn.
    pub plays: u32,
    pub max_plays: u32,
    pub is_ai: bool,
    pub xp: u32,
    pub level: u32,
    /// Hand, deck and discard.
    pub piles: Piles,
}

impl Player {
    /// Create a player at full health with an empty set of piles.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, max_health: i64, max_plays: u32) -> Self {
        Self {
            id,
            name: name.into(),
            health: max_health,
            max_health,
            plays: max_plays,
            max_plays,
            is_ai: false,
            xp: 0,
            level: 1,
            piles: Piles::default(),
        }
    }

    /// Mark this player as AI-controlled.
    #[must_use]
    pub fn ai(mut self) -> Self {
        self.is_ai = true;
        self
    }

    /// Replace the piles with a fresh deck.
    #[must_use]
    pub fn with_piles(mut self, piles: Piles) -> Self {
        self.piles = piles;
        self
    }

    /// A player is defeated once health reaches zero.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_bounds() {
        assert_eq!(PlayerId::new(0), Some(PlayerId::P1));
        assert_eq!(PlayerId::new(1), Some(PlayerId::P2));
        assert_eq!(PlayerId::new(2), None);
    }

    #[test]
    fn test_player_id_rejects_unknown_seat() {
        assert_eq!(serde_json::from_str::<PlayerId>("1").unwrap(), PlayerId::P2);
        assert!(serde_json::from_str::<PlayerId>("5").is_err());

        let bytes = bincode::serialize(&5u8).unwrap();
        assert!(bincode::deserialize::<PlayerId>(&bytes).is_err());
        assert_eq!(PlayerId::try_from(7), Err(InvalidPlayerId(7)));
    }

    #[test]
    fn test_player_id_display() {
        assert_eq!(format!("{}", PlayerId::P1), "p1");
        assert_eq!(format!("{}", PlayerId::P2), "p2");
    }

    #[test]
    fn test_pair_iter_order() {
        let pair = PlayerPair::from_parts("a", "b");
        let collected: Vec<_> = pair.iter().collect();
        assert_eq!(collected, vec![(PlayerId::P1, &"a"), (PlayerId::P2, &"b")]);
    }

    #[test]
    fn test_pair_map() {
        let pair = PlayerPair::new(|p| p.index() as i64 * 10);
        let doubled = pair.map(|_, v| v * 2);
        assert_eq!(doubled[PlayerId::P2], 20);
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new(PlayerId::P2, "Enemy", 25, 3).ai();

        assert_eq!(player.health, 25);
        assert_eq!(player.max_health, 25);
        assert_eq!(player.plays, 3);
        assert_eq!(player.level, 1);
        assert!(player.is_ai);
        assert!(!player.is_defeated());
        assert_eq!(player.piles.total(), 0);
    }
}
