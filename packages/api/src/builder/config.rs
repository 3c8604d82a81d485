//! Builder configuration

/// Behaviour switches for a [`RequestBuilder`](crate::RequestBuilder).
///
/// None of these change how a request is assembled. They control logging
/// and the default scheduling hint stamped on the finished descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Log every configuration call at `debug` level
    pub debug: bool,
    /// Warn at finalize when a `{placeholder}` survives in the URL
    pub warn_unresolved_placeholders: bool,
    /// Priority copied into the descriptor at finalize
    pub default_priority: i32,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            debug: false,
            warn_unresolved_placeholders: true,
            default_priority: 0,
        }
    }
}

impl BuilderConfig {
    /// Defaults: no debug logging, placeholder warnings on, priority 0
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle debug logging of configuration calls
    #[must_use]
    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    /// Toggle the finalize-time warning for leftover `{placeholders}`
    #[must_use]
    pub fn warn_unresolved_placeholders(mut self, enabled: bool) -> Self {
        self.warn_unresolved_placeholders = enabled;
        self
    }

    /// Priority stamped on descriptors this builder produces
    #[must_use]
    pub fn default_priority(mut self, priority: i32) -> Self {
        self.default_priority = priority;
        self
    }
}
