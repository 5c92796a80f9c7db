//! Pass/fail outcome of a single check.

/// The outcome of one check: a verdict plus a human-readable message.
///
/// A failed result describes a defect in the data under test; it is a
/// normal, expected outcome and never an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    passed: bool,
    message: String,
}

impl CheckResult {
    /// A pass with no message.
    pub fn pass() -> Self {
        Self {
            passed: true,
            message: String::new(),
        }
    }

    /// A pass with an informational message.
    pub fn pass_with(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    /// A failure describing the defect found.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }

    /// Returns the verdict.
    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Returns the message, which may be empty for a plain pass.
    pub fn message(&self) -> &str {
        &self.message
    }
}
