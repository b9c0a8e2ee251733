//! Batch evaluation options.

/// What to do when a line fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ErrorPolicy {
    /// Yield the failure and stop.
    #[default]
    Abort,
    /// Log the failure and move on to the next line.
    Skip,
    /// Yield the failure and keep going.
    Report,
}

/// Configuration options for evaluating a sequence of lines.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use pokerface::{ErrorPolicy, EvaluateOptions};
///
/// let options = EvaluateOptions::default()
///     .with_error_policy(ErrorPolicy::Report)
///     .with_skip_blank_lines(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluateOptions {
    /// How parse failures are handled.
    pub error_policy: ErrorPolicy,
    /// Whether blank lines are ignored instead of reported as invalid.
    pub skip_blank_lines: bool,
}

impl Default for EvaluateOptions {
    fn default() -> Self {
        Self {
            error_policy: ErrorPolicy::Abort,
            skip_blank_lines: true,
        }
    }
}

impl EvaluateOptions {
    /// Sets the error policy.
    ///
    /// # Example
    ///
    /// ```
    /// use pokerface::{ErrorPolicy, EvaluateOptions};
    ///
    /// let options = EvaluateOptions::default().with_error_policy(ErrorPolicy::Skip);
    /// assert_eq!(options.error_policy, ErrorPolicy::Skip);
    /// ```
    #[must_use]
    pub const fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Sets whether blank lines are ignored.
    #[must_use]
    pub const fn with_skip_blank_lines(mut self, skip: bool) -> Self {
        self.skip_blank_lines = skip;
        self
    }
}
