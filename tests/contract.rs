//! Integration tests for the probe's observable contract.
//!
//! Every test drives the public API against the in-memory reference host, configured either
//! to conform or to misbehave in one specific way.

use lineprobe::{prelude::*, probe::PRINTDUMP};

const CLASS: &str = "integration.LineTableTarget";

/// A host that answers `case` with `code` and conforms otherwise.
fn answering(case: ProbeCase, code: ErrorCode) -> SimulatedHost {
    SimulatedHost::conforming(CLASS).with_line_table_hook(move |request| {
        (ProbeCase::classify(request) == Some(case)).then_some(code)
    })
}

fn class() -> ClassRef {
    ClassRef::new(CLASS)
}

#[test]
fn test_conforming_host_passes() -> Result<()> {
    let host = SimulatedHost::conforming(CLASS);
    let mut context = initialize(&host, None)?;

    assert_eq!(check_entry(Some(&mut context), &host, &class()), PASSED);
    assert!(context.events().is_empty());
    Ok(())
}

#[test]
fn test_success_for_null_method_fails_once() -> Result<()> {
    let host = answering(ProbeCase::InvalidMethod, ErrorCode::NONE);
    let mut context = initialize(&host, None)?;

    assert_eq!(check_entry(Some(&mut context), &host, &class()), STATUS_FAILED);
    assert_eq!(context.events().len(), 1);

    let findings: Vec<&Finding> = context.findings().collect();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0].case, ProbeCase::InvalidMethod);
    assert_eq!(
        findings[0].to_string(),
        "Error expected: JVMTI_ERROR_INVALID_METHODID, actual: JVMTI_ERROR_NONE (0)"
    );
    Ok(())
}

#[test]
fn test_without_capability_nothing_is_checked() -> Result<()> {
    let host = answering(ProbeCase::InvalidMethod, ErrorCode::NONE)
        .without_capability(Capabilities::CAN_GET_LINE_NUMBERS);
    let mut context = initialize(&host, None)?;
    let before = context.events().len();

    for _ in 0..3 {
        assert_eq!(check_entry(Some(&mut context), &host, &class()), PASSED);
    }
    assert_eq!(context.events().len(), before);
    assert_eq!(context.findings().count(), 0);
    assert_eq!(context.interface().call_count(), 0);
    Ok(())
}

#[test]
fn test_printdump_traces_every_case_before_it_runs() -> Result<()> {
    let host = answering(ProbeCase::NullEntryCount, ErrorCode::ILLEGAL_ARGUMENT);
    let mut context = initialize(&host, Some(PRINTDUMP))?;
    context.check(&host, &class());

    let lines: Vec<String> = context.events().iter().map(ToString::to_string).collect();
    assert_eq!(
        lines,
        vec![
            ">>> invalid method check ...".to_string(),
            ">>> (entryCountPtr) null pointer check ...".to_string(),
            "(entryCountPtr) error expected: JVMTI_ERROR_NULL_POINTER, actual: \
             JVMTI_ERROR_ILLEGAL_ARGUMENT (103)"
                .to_string(),
            ">>> (tablePtr) null pointer check ...".to_string(),
            ">>> ... done".to_string(),
        ]
    );
    Ok(())
}

#[test]
fn test_option_string_must_match_exactly() -> Result<()> {
    let host = SimulatedHost::conforming(CLASS);
    for options in [None, Some(""), Some("printdump,verbose"), Some("PRINTDUMP")] {
        assert!(!initialize(&host, options)?.options().printdump);
    }
    Ok(())
}

#[test]
fn test_every_case_runs_regardless_of_earlier_failures() -> Result<()> {
    for failing in ProbeCase::iter() {
        let host = answering(failing, ErrorCode::INTERNAL);
        let mut context = initialize(&host, None)?;

        assert_eq!(context.check(&host, &class()), Verdict::Failed);
        assert_eq!(context.interface().call_count(), 3);

        let cases: Vec<ProbeCase> = context.findings().map(|finding| finding.case).collect();
        assert_eq!(cases, vec![failing]);
    }
    Ok(())
}

#[test]
fn test_one_failure_fails_every_later_check() -> Result<()> {
    let host = answering(ProbeCase::NullTable, ErrorCode::NONE);
    let mut context = initialize(&host, None)?;
    assert_eq!(context.check(&host, &class()), Verdict::Failed);

    let conforming = SimulatedHost::conforming(CLASS);
    for _ in 0..3 {
        assert_eq!(check_entry(Some(&mut context), &conforming, &class()), STATUS_FAILED);
    }
    Ok(())
}

#[test]
fn test_expected_codes_are_literal() -> Result<()> {
    // A related but wrong code is still a mismatch
    let host = answering(ProbeCase::InvalidMethod, ErrorCode::INVALID_CLASS);
    let mut context = initialize(&host, None)?;
    assert_eq!(context.check(&host, &class()), Verdict::Failed);

    let host = answering(ProbeCase::NullTable, ErrorCode::INVALID_METHODID);
    let mut context = initialize(&host, None)?;
    assert_eq!(context.check(&host, &class()), Verdict::Failed);
    Ok(())
}

#[test]
fn test_unknown_code_is_reported_raw() -> Result<()> {
    let host = answering(ProbeCase::NullTable, ErrorCode::new(4242));
    let mut context = initialize(&host, None)?;
    context.check(&host, &class());

    let finding = context.findings().next().copied();
    assert_eq!(finding.map(|finding| finding.actual.value()), Some(4242));
    assert_eq!(translate_error(ErrorCode::new(4242)), "unknown error");
    Ok(())
}

#[test]
fn test_negotiation_failures_abort_initialize() {
    let faults = [
        HostFaults {
            attach: Some(LoaderCode::EVERSION),
            ..Default::default()
        },
        HostFaults {
            missing_interface: true,
            ..Default::default()
        },
        HostFaults {
            potential_capabilities: Some(ErrorCode::WRONG_PHASE),
            ..Default::default()
        },
        HostFaults {
            add_capabilities: Some(ErrorCode::NOT_AVAILABLE),
            ..Default::default()
        },
        HostFaults {
            get_capabilities: Some(ErrorCode::INVALID_ENVIRONMENT),
            ..Default::default()
        },
    ];

    for faults in faults {
        let host = SimulatedHost::conforming(CLASS).with_faults(faults);
        let result = initialize(&host, None);
        assert!(result.is_err());
        assert_eq!(LoaderCode::of(&result), LoaderCode::ERR);
    }
}

#[test]
fn test_unloaded_probe_fails() {
    let host = SimulatedHost::conforming(CLASS);
    let status =
        check_entry::<lineprobe::host::sim::SimulatedInterface, _>(None, &host, &class());
    assert_eq!(status, STATUS_FAILED);
}

#[test]
fn test_missing_reference_method_makes_no_calls() -> Result<()> {
    let host = SimulatedHost::new().with_class(SimClass::new(CLASS));
    let mut context = initialize(&host, None)?;

    assert_eq!(check_entry(Some(&mut context), &host, &class()), STATUS_FAILED);
    assert_eq!(context.interface().call_count(), 0);
    Ok(())
}

#[test]
fn test_any_host_can_be_probed() -> Result<()> {
    use std::cell::Cell;

    // A host that gets the null table pointer wrong, written from scratch
    struct Handle {
        calls: Cell<usize>,
    }

    impl ToolInterface for Handle {
        fn potential_capabilities(&self) -> HostResult<Capabilities> {
            Ok(Capabilities::CAN_GET_LINE_NUMBERS)
        }

        fn add_capabilities(&self, _: Capabilities) -> HostResult<()> {
            Ok(())
        }

        fn capabilities(&self) -> HostResult<Capabilities> {
            Ok(Capabilities::CAN_GET_LINE_NUMBERS)
        }

        fn line_number_table(&self, request: &LineTableRequest) -> HostResult<LineNumberTable> {
            self.calls.set(self.calls.get() + 1);
            if request.method.is_null() {
                Err(ErrorCode::INVALID_METHODID)
            } else if request.entry_count.is_absent() {
                Err(ErrorCode::NULL_POINTER)
            } else {
                Ok(LineNumberTable::default())
            }
        }
    }

    struct Runtime;

    impl AttachmentProvider for Runtime {
        type Interface = Handle;

        fn get_interface(
            &self,
            _: lineprobe::host::InterfaceVersion,
        ) -> std::result::Result<Option<Handle>, LoaderCode> {
            Ok(Some(Handle {
                calls: Cell::new(0),
            }))
        }
    }

    impl MethodResolver for Runtime {
        fn method_id(&self, _: &ClassRef, name: &str, signature: &str) -> Option<MethodId> {
            (name == "<init>" && signature == "()V").then(|| MethodId::new(7))
        }
    }

    let mut context = initialize(&Runtime, None)?;
    assert_eq!(context.check(&Runtime, &class()), Verdict::Failed);
    assert_eq!(context.interface().calls.get(), 3);

    let finding = context.findings().next().copied();
    assert_eq!(finding.map(|finding| finding.case), Some(ProbeCase::NullTable));
    Ok(())
}
