//! Header record options.

/// Default procedure tag of a dunning container.
pub const DEFAULT_PROCEDURE: &str = "MAHNV.EDA";
/// Default format version tag.
pub const DEFAULT_VERSION: &str = "V04";
/// Default sequence tag.
pub const DEFAULT_SEQUENCE: &str = "01";

/// Values written into the `AA` header record.
///
/// Each value is left-justified in its slot and truncated when longer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOptions {
    /// Procedure tag (15 characters).
    pub procedure: String,
    /// Version tag (3 characters).
    pub version: String,
    /// Sequence tag (2 characters).
    pub sequence: String,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            procedure: DEFAULT_PROCEDURE.to_string(),
            version: DEFAULT_VERSION.to_string(),
            sequence: DEFAULT_SEQUENCE.to_string(),
        }
    }
}

impl FrameOptions {
    /// Create options with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = procedure.into();
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    #[must_use]
    pub fn with_sequence(mut self, sequence: impl Into<String>) -> Self {
        self.sequence = sequence.into();
        self
    }
}
