//! Which pre- or post-match screen presentation code should show.

use serde::{Deserialize, Serialize};

/// Top-level screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Screen {
    #[default]
    Menu,
    Game,
    DeckBuilder,
    /// Shown after the human wins a match.
    Loot,
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Screen::Menu => "menu",
            Screen::Game => "game",
            Screen::DeckBuilder => "deckbuilder",
            Screen::Loot => "loot",
        };
        f.write_str(name)
    }
}
