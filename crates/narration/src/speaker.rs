use std::fmt;

/// The story's three characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Speaker {
    Jeff,
    Mom,
    Sister,
}

/// Voice preset used when no speaker-specific mapping applies.
pub const DEFAULT_VOICE: &str = "Puck";

impl Speaker {
    /// Remote voice preset for this character.
    ///
    /// The mapping is fixed and total: every speaker resolves to a preset,
    /// with [`DEFAULT_VOICE`] covering Sister and anything else the service
    /// might be asked for. Available presets on the service: Puck, Charon,
    /// Kore, Fenrir, Zephyr. The assignment is purely for distinction
    /// between characters, not a gender/age match.
    pub fn voice_name(self) -> &'static str {
        match self {
            Speaker::Jeff => "Kore",
            Speaker::Mom => "Fenrir",
            Speaker::Sister => DEFAULT_VOICE,
        }
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Speaker::Jeff => "Jeff",
            Speaker::Mom => "Mom",
            Speaker::Sister => "Sister",
        };
        f.write_str(name)
    }
}
