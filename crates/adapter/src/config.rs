//! Session configuration from the environment

use crate::core::{Rules, Seed};
use crate::types::DrawMode;

/// Process-level settings for a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub rules: Rules,
    /// Seed for the first deal; `None` draws one at random.
    pub seed: Option<Seed>,
    /// Apply safe foundation plays after every move.
    pub autoplay: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            seed: None,
            autoplay: false,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl SessionConfig {
    /// Read `KLONDIKE_*` variables; unset or unparsable values keep defaults
    ///
    /// - `KLONDIKE_DRAW`: 1 or 3
    /// - `KLONDIKE_SEED`: digits or any text
    /// - `KLONDIKE_RECYCLE_LIMIT`: passes through the waste; empty means unlimited
    /// - `KLONDIKE_REVERSE_MOVES`: allow foundation to tableau
    /// - `KLONDIKE_AUTOPLAY`: safe autoplay after each move
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(mode) = lookup("KLONDIKE_DRAW")
            .and_then(|s| s.trim().parse().ok())
            .and_then(DrawMode::from_count)
        {
            config.rules.draw_mode = mode;
        }
        config.seed = lookup("KLONDIKE_SEED").and_then(|s| Seed::parse(&s));
        config.rules.recycle_limit = lookup("KLONDIKE_RECYCLE_LIMIT").and_then(|s| s.trim().parse().ok());
        if let Some(allow) = lookup("KLONDIKE_REVERSE_MOVES").as_deref().and_then(parse_flag) {
            config.rules.allow_foundation_to_tableau = allow;
        }
        if let Some(autoplay) = lookup("KLONDIKE_AUTOPLAY").as_deref().and_then(parse_flag) {
            config.autoplay = autoplay;
        }
        config
    }
}
