//! Pass/fail accumulation.

use std::fmt;

/// Status returned by the check entry point when every case behaved as documented.
pub const PASSED: i32 = 0;

/// Status returned by the check entry point on any failure.
pub const STATUS_FAILED: i32 = 2;

/// Accumulated outcome of a probe.
///
/// A verdict only ever moves from [`Verdict::Passed`] to [`Verdict::Failed`]. Once failed it
/// stays failed for the lifetime of the context holding it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// No violation observed so far.
    #[default]
    Passed,
    /// At least one violation or setup failure observed.
    Failed,
}

impl Verdict {
    /// Record a failure.
    pub fn fail(&mut self) {
        *self = Verdict::Failed;
    }

    /// Returns `true` for [`Verdict::Failed`].
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Verdict::Failed)
    }

    /// Integer status for the embedding harness: [`PASSED`] or [`STATUS_FAILED`].
    #[must_use]
    pub fn status(&self) -> i32 {
        match self {
            Verdict::Passed => PASSED,
            Verdict::Failed => STATUS_FAILED,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Passed => f.write_str("PASSED"),
            Verdict::Failed => f.write_str("FAILED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fail_is_sticky() {
        let mut verdict = Verdict::default();
        assert_eq!(verdict, Verdict::Passed);

        verdict.fail();
        assert!(verdict.is_failed());

        verdict.fail();
        assert_eq!(verdict, Verdict::Failed);
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(Verdict::Passed.status(), 0);
        assert_eq!(Verdict::Failed.status(), 2);
        assert_eq!(Verdict::Failed.to_string(), "FAILED");
    }
}
