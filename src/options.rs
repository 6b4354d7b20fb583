//! Configuration options for date guessing.
//!
//! ## Example
//!
//! ```rust
//! use pubdate::{DateGuesser, GuessOptions};
//!
//! // Using default options
//! let guesser = DateGuesser::new();
//! # let _ = guesser;
//!
//! // Using builder for custom options
//! let options = GuessOptions::builder()
//!     .debug(true)
//!     .disable_json_ld(true)
//!     .build();
//!
//! let guesser = DateGuesser::with_options(options);
//! # let _ = guesser;
//! ```

/// Configuration options for [`DateGuesser`](crate::DateGuesser).
///
/// The arbitration policy itself (signal order, plausibility windows) is a
/// fixed behavioral contract and is deliberately not configurable.
#[derive(Debug, Clone, Default)]
pub struct GuessOptions {
    /// Enable debug logging to stderr.
    ///
    /// When enabled, the guesser prints each adopted guess and the signal
    /// that produced it. Useful for understanding why a page resolved to a
    /// particular date.
    ///
    /// Default: `false`
    pub debug: bool,

    /// Disable JSON-LD metadata scanning.
    ///
    /// When `true`, skips the `datePublished` JSON-LD checker. This can
    /// improve throughput on pages with large structured-data payloads.
    ///
    /// Default: `false`
    pub disable_json_ld: bool,
}

impl GuessOptions {
    /// Creates a new builder for GuessOptions
    pub fn builder() -> GuessOptionsBuilder {
        GuessOptionsBuilder::default()
    }
}

/// Builder for [`GuessOptions`].
#[derive(Default)]
pub struct GuessOptionsBuilder {
    debug: Option<bool>,
    disable_json_ld: Option<bool>,
}

impl GuessOptionsBuilder {
    /// Enable or disable debug logging
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Disable JSON-LD scanning
    pub fn disable_json_ld(mut self, disable: bool) -> Self {
        self.disable_json_ld = Some(disable);
        self
    }

    /// Build the GuessOptions
    pub fn build(self) -> GuessOptions {
        let defaults = GuessOptions::default();
        GuessOptions {
            debug: self.debug.unwrap_or(defaults.debug),
            disable_json_ld: self.disable_json_ld.unwrap_or(defaults.disable_json_ld),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_off() {
        let options = GuessOptions::default();
        assert!(!options.debug);
        assert!(!options.disable_json_ld);
    }

    #[test]
    fn test_builder_overrides() {
        let options = GuessOptions::builder().debug(true).build();
        assert!(options.debug);
        assert!(!options.disable_json_ld);
    }
}
