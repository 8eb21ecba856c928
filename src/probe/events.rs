//! Diagnostics emitted by a probe.
//!
//! Every line the probe reports is a [`ProbeEvent`]. Events are kept in the context, in
//! emission order, and mirrored to the [`log`] facade at [`ProbeEvent::level`]. The rendered
//! text of an event is its [`Display`](std::fmt::Display) output.

use std::fmt;

use log::Level;

use crate::{host::ErrorCode, probe::ProbeCase};

/// A case whose observed error differed from the expected one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Finding {
    /// The case that misbehaved.
    pub case: ProbeCase,
    /// Error the interface documents for this case.
    pub expected: ErrorCode,
    /// Error the host returned, [`ErrorCode::NONE`] if the call succeeded.
    pub actual: ErrorCode,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = crate::host::translate_error(self.expected);
        match self.case.argument() {
            Some(argument) => write!(f, "({argument}) error expected: {expected}, ")?,
            None => write!(f, "Error expected: {expected}, ")?,
        }
        write!(f, "actual: {}", self.actual)
    }
}

/// One diagnostic line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProbeEvent {
    /// The host did not grant `CAN_GET_LINE_NUMBERS`; checks will pass vacuously.
    CapabilityMissing,
    /// Checking could not start.
    SetupFailure {
        /// What went wrong.
        message: String,
    },
    /// A case is about to run. Only emitted with `printdump`.
    Trace {
        /// The case.
        case: ProbeCase,
    },
    /// A case returned the wrong error.
    Mismatch(Finding),
    /// All cases ran. Only emitted with `printdump`.
    Done,
}

impl ProbeEvent {
    /// Log level the event is mirrored at.
    #[must_use]
    pub fn level(&self) -> Level {
        match self {
            ProbeEvent::CapabilityMissing => Level::Warn,
            ProbeEvent::SetupFailure { .. } | ProbeEvent::Mismatch(_) => Level::Error,
            ProbeEvent::Trace { .. } | ProbeEvent::Done => Level::Info,
        }
    }

    /// The finding carried by a mismatch event.
    #[must_use]
    pub fn finding(&self) -> Option<&Finding> {
        match self {
            ProbeEvent::Mismatch(finding) => Some(finding),
            _ => None,
        }
    }
}

impl fmt::Display for ProbeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeEvent::CapabilityMissing => {
                f.write_str("Warning: GetLineNumberTable is not implemented")
            }
            ProbeEvent::SetupFailure { message } => f.write_str(message),
            ProbeEvent::Trace { case } => f.write_str(case.trace_line()),
            ProbeEvent::Mismatch(finding) => write!(f, "{finding}"),
            ProbeEvent::Done => f.write_str(">>> ... done"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finding_text() {
        let finding = Finding {
            case: ProbeCase::InvalidMethod,
            expected: ErrorCode::INVALID_METHODID,
            actual: ErrorCode::NONE,
        };
        assert_eq!(
            finding.to_string(),
            "Error expected: JVMTI_ERROR_INVALID_METHODID, actual: JVMTI_ERROR_NONE (0)"
        );

        let finding = Finding {
            case: ProbeCase::NullTable,
            expected: ErrorCode::NULL_POINTER,
            actual: ErrorCode::ABSENT_INFORMATION,
        };
        assert_eq!(
            finding.to_string(),
            "(tablePtr) error expected: JVMTI_ERROR_NULL_POINTER, \
             actual: JVMTI_ERROR_ABSENT_INFORMATION (101)"
        );
    }

    #[test]
    fn test_event_text_and_levels() {
        let trace = ProbeEvent::Trace {
            case: ProbeCase::NullEntryCount,
        };
        assert_eq!(trace.to_string(), ">>> (entryCountPtr) null pointer check ...");
        assert_eq!(trace.level(), Level::Info);
        assert!(trace.finding().is_none());

        assert_eq!(ProbeEvent::Done.to_string(), ">>> ... done");
        assert_eq!(ProbeEvent::CapabilityMissing.level(), Level::Warn);

        let mismatch = ProbeEvent::Mismatch(Finding {
            case: ProbeCase::NullEntryCount,
            expected: ErrorCode::NULL_POINTER,
            actual: ErrorCode(4242),
        });
        assert_eq!(mismatch.level(), Level::Error);
        assert!(mismatch.to_string().ends_with("actual: unknown error (4242)"));
        assert_eq!(mismatch.finding().unwrap().actual, ErrorCode(4242));
    }
}
