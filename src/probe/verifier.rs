//! Contract verification.
//!
//! A check resolves the target class's no-argument constructor as the valid reference method,
//! then runs every [`ProbeCase`] in order. Cases never short-circuit each other: a mismatch is
//! recorded, the verdict is failed, and the next case runs anyway, so one check surfaces every
//! violation.

use crate::{
    host::{ClassRef, ErrorCode, MethodId, MethodResolver, ToolInterface},
    probe::{
        cases::IntoEnumIterator, Finding, ProbeCase, ProbeContext, ProbeEvent, Verdict,
        STATUS_FAILED,
    },
    Error, Result,
};

/// Name of the reference method resolved on the target class.
pub const TARGET_METHOD_NAME: &str = "<init>";

/// Descriptor of the reference method resolved on the target class.
pub const TARGET_METHOD_SIGNATURE: &str = "()V";

impl<I: ToolInterface> ProbeContext<I> {
    /// Run the contract checks against `class`.
    ///
    /// Returns the accumulated verdict. Without the line number capability no case runs and the
    /// current verdict is returned unchanged. If the reference method cannot be resolved, a
    /// setup failure is emitted and this call returns [`Verdict::Failed`] without running any
    /// case; the accumulated verdict is not touched by setup failures.
    pub fn check<R>(&mut self, resolver: &R, class: &ClassRef) -> Verdict
    where
        R: MethodResolver + ?Sized,
    {
        if !self.can_get_line_numbers() {
            return self.verdict;
        }

        let method = match resolve_target(resolver, class) {
            Ok(method) => method,
            Err(error) => {
                self.emit(ProbeEvent::SetupFailure {
                    message: error.to_string(),
                });
                return Verdict::Failed;
            }
        };

        for case in ProbeCase::iter() {
            self.run_case(case, method);
        }

        if self.options().printdump {
            self.emit(ProbeEvent::Done);
        }

        self.verdict
    }

    /// Run one case, returning the finding if the host answered with the wrong error.
    pub(crate) fn run_case(&mut self, case: ProbeCase, method: MethodId) -> Option<Finding> {
        if self.options().printdump {
            self.emit(ProbeEvent::Trace { case });
        }

        let request = case.request(method);
        let actual = match self.interface().line_number_table(&request) {
            Ok(_) => ErrorCode::NONE,
            Err(code) => code,
        };

        let expected = case.expected();
        if actual == expected {
            return None;
        }

        let finding = Finding {
            case,
            expected,
            actual,
        };
        self.verdict.fail();
        self.emit(ProbeEvent::Mismatch(finding));
        Some(finding)
    }
}

fn resolve_target<R>(resolver: &R, class: &ClassRef) -> Result<MethodId>
where
    R: MethodResolver + ?Sized,
{
    resolver
        .method_id(class, TARGET_METHOD_NAME, TARGET_METHOD_SIGNATURE)
        .filter(|method| !method.is_null())
        .ok_or_else(|| Error::MethodLookup {
            class: class.name().to_string(),
            name: TARGET_METHOD_NAME,
            signature: TARGET_METHOD_SIGNATURE,
        })
}

/// Integer-status entry point for the embedding harness.
///
/// `context` is `None` when initialization failed or never ran. Returns
/// [`crate::probe::PASSED`] or [`STATUS_FAILED`].
pub fn check_entry<I, R>(
    context: Option<&mut ProbeContext<I>>,
    resolver: &R,
    class: &ClassRef,
) -> i32
where
    I: ToolInterface,
    R: MethodResolver + ?Sized,
{
    match context {
        Some(context) => context.check(resolver, class).status(),
        None => {
            log::error!("{}", Error::NotLoaded);
            STATUS_FAILED
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        host::{
            sim::{SimulatedHost, SimulatedInterface},
            Capabilities, LineTableRequest,
        },
        probe::{initialize, PASSED},
        test::{fault_on, ready, TARGET_CLASS},
    };

    #[test]
    fn test_conforming_host_passes() {
        let host = SimulatedHost::conforming(TARGET_CLASS);
        let mut context = ready(&host, None);

        assert_eq!(context.check(&host, &ClassRef::new(TARGET_CLASS)), Verdict::Passed);
        assert_eq!(context.findings().count(), 0);
        assert_eq!(context.interface().call_count(), 3);
    }

    #[test]
    fn test_cases_run_in_order_with_expected_shapes() {
        let host = SimulatedHost::conforming(TARGET_CLASS);
        let class = ClassRef::new(TARGET_CLASS);
        let ctor = host
            .method_id(&class, TARGET_METHOD_NAME, TARGET_METHOD_SIGNATURE)
            .unwrap();
        let mut context = ready(&host, None);
        context.check(&host, &class);

        assert_eq!(
            context.interface().calls(),
            vec![
                LineTableRequest::new(MethodId::NULL),
                LineTableRequest::new(ctor).without_entry_count(),
                LineTableRequest::new(ctor).without_table(),
            ]
        );
    }

    #[test]
    fn test_case_failures_do_not_short_circuit() {
        let host = fault_on(ProbeCase::InvalidMethod, ErrorCode::NONE)
            .with_line_table_hook(|request| {
                (ProbeCase::classify(request) == Some(ProbeCase::NullTable))
                    .then_some(ErrorCode::ILLEGAL_ARGUMENT)
            });
        let mut context = ready(&host, None);

        assert_eq!(context.check(&host, &ClassRef::new(TARGET_CLASS)), Verdict::Failed);
        assert_eq!(context.interface().call_count(), 3);

        let findings: Vec<Finding> = context.findings().copied().collect();
        assert_eq!(
            findings,
            vec![
                Finding {
                    case: ProbeCase::InvalidMethod,
                    expected: ErrorCode::INVALID_METHODID,
                    actual: ErrorCode::NONE,
                },
                Finding {
                    case: ProbeCase::NullTable,
                    expected: ErrorCode::NULL_POINTER,
                    actual: ErrorCode::ILLEGAL_ARGUMENT,
                },
            ]
        );
    }

    #[test]
    fn test_run_case_reports_single_finding() {
        let host = fault_on(ProbeCase::NullEntryCount, ErrorCode::INVALID_METHODID);
        let class = ClassRef::new(TARGET_CLASS);
        let ctor = host
            .method_id(&class, TARGET_METHOD_NAME, TARGET_METHOD_SIGNATURE)
            .unwrap();
        let mut context = ready(&host, None);

        assert!(context.run_case(ProbeCase::InvalidMethod, ctor).is_none());
        assert!(!context.verdict().is_failed());

        let finding = context.run_case(ProbeCase::NullEntryCount, ctor).unwrap();
        assert_eq!(finding.actual, ErrorCode::INVALID_METHODID);
        assert!(context.verdict().is_failed());
    }

    #[test]
    fn test_verdict_stays_failed_across_checks() {
        let host = fault_on(ProbeCase::NullEntryCount, ErrorCode::INTERNAL);
        let class = ClassRef::new(TARGET_CLASS);
        let mut context = ready(&host, None);

        assert_eq!(context.check(&host, &class), Verdict::Failed);

        let conforming = SimulatedHost::conforming(TARGET_CLASS);
        assert_eq!(context.check(&conforming, &class), Verdict::Failed);
        assert_eq!(check_entry(Some(&mut context), &conforming, &class), STATUS_FAILED);
    }

    #[test]
    fn test_missing_capability_skips_cases() {
        let host = fault_on(ProbeCase::InvalidMethod, ErrorCode::NONE)
            .without_capability(Capabilities::CAN_GET_LINE_NUMBERS);
        let mut context = ready(&host, Some("printdump"));

        assert_eq!(context.check(&host, &ClassRef::new(TARGET_CLASS)), Verdict::Passed);
        assert_eq!(context.interface().call_count(), 0);
        assert_eq!(context.events(), &[ProbeEvent::CapabilityMissing]);
    }

    #[test]
    fn test_method_lookup_failure_is_setup_failure() {
        let host = SimulatedHost::conforming(TARGET_CLASS);
        let mut context = ready(&host, None);
        let missing = ClassRef::new("probe.NotLoaded");

        assert_eq!(context.check(&host, &missing), Verdict::Failed);
        assert_eq!(context.interface().call_count(), 0);
        assert!(!context.verdict().is_failed());
        assert_eq!(context.findings().count(), 0);
        assert!(matches!(
            context.events(),
            [ProbeEvent::SetupFailure { message }] if message.starts_with("Cannot get method ID!")
        ));

        let class = ClassRef::new(TARGET_CLASS);
        assert_eq!(check_entry(Some(&mut context), &host, &class), PASSED);
    }

    #[test]
    fn test_check_entry_without_context() {
        let host = SimulatedHost::conforming(TARGET_CLASS);
        let status =
            check_entry::<SimulatedInterface, _>(None, &host, &ClassRef::new(TARGET_CLASS));
        assert_eq!(status, STATUS_FAILED);
    }

    #[test]
    fn test_printdump_traces_each_case() {
        let host = SimulatedHost::conforming(TARGET_CLASS);
        let mut context = initialize(&host, Some("printdump")).unwrap();
        context.check(&host, &ClassRef::new(TARGET_CLASS));

        let lines: Vec<String> = context.events().iter().map(ToString::to_string).collect();
        assert_eq!(
            lines,
            vec![
                ">>> invalid method check ...",
                ">>> (entryCountPtr) null pointer check ...",
                ">>> (tablePtr) null pointer check ...",
                ">>> ... done",
            ]
        );
    }

    #[test]
    fn test_trace_precedes_mismatch() {
        let host = fault_on(ProbeCase::NullTable, ErrorCode::NONE);
        let mut context = ready(&host, Some("printdump"));
        context.check(&host, &ClassRef::new(TARGET_CLASS));

        let events = context.events();
        assert_eq!(events.len(), 5);
        assert_eq!(
            events[2],
            ProbeEvent::Trace {
                case: ProbeCase::NullTable
            }
        );
        assert!(matches!(
            events[3],
            ProbeEvent::Mismatch(Finding {
                case: ProbeCase::NullTable,
                ..
            })
        ));
        assert_eq!(events[4], ProbeEvent::Done);
    }
}
