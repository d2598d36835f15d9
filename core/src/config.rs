use crate::constants::DEFAULT_SCALE;

/// How the key latch answers "is this key pressed?".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyQuery {
    /// A query that finds its key pressed clears every key in the latch,
    /// so a held key triggers a skip instruction only once.
    ConsumeAll,
    /// Queries leave the latch alone; keys stay pressed until released.
    PerKey,
}

impl Default for KeyQuery {
    fn default() -> Self {
        KeyQuery::ConsumeAll
    }
}

/// Per-machine settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Pixel multiplier handed to the display sink with every frame.
    pub scale: u32,
    pub key_query: KeyQuery,
    /// Seed for `RND`; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Config {
    pub fn with_scale(self, scale: u32) -> Self {
        Config { scale, ..self }
    }

    pub fn with_key_query(self, key_query: KeyQuery) -> Self {
        Config { key_query, ..self }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        Config {
            seed: Some(seed),
            ..self
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            scale: DEFAULT_SCALE,
            key_query: KeyQuery::default(),
            seed: None,
        }
    }
}
