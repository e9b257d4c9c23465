use serde::{Deserialize, Serialize};

/// Operating mode of an adapter instance.
///
/// The mode is fixed when the adapter is constructed. Switching modes means
/// constructing a new adapter under a new cache key, never mutating an
/// existing instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Canned fixture responses, no network I/O.
    Test,
    /// Real provider API calls.
    Live,
}

impl Mode {
    /// The other mode. Mode switching reads prior configuration from here.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Test => Self::Live,
            Self::Live => Self::Test,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::Live => "live",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_serde() {
        let json = serde_json::to_string(&Mode::Test).unwrap();
        assert_eq!(json, format!("\"{}\"", Mode::Test));
        let json = serde_json::to_string(&Mode::Live).unwrap();
        assert_eq!(json, format!("\"{}\"", Mode::Live));
    }

    #[test]
    fn deserialize_lowercase() {
        let mode: Mode = serde_json::from_str("\"live\"").unwrap();
        assert_eq!(mode, Mode::Live);
    }

    #[test]
    fn opposite_is_involutive() {
        assert_eq!(Mode::Test.opposite(), Mode::Live);
        assert_eq!(Mode::Live.opposite(), Mode::Test);
        assert_eq!(Mode::Test.opposite().opposite(), Mode::Test);
    }
}
