use std::str::FromStr;

use anyhow::{anyhow, bail, Context};
use lineprobe::{
    host::{
        sim::{SimulatedHost, SimulatedInterface},
        Capabilities, ClassRef, ErrorCode, KNOWN_CODES,
    },
    probe::{self, check_entry, IntoEnumIterator, ProbeCase, ProbeOptions},
};
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

/// Class loaded into the reference host when `--class` is not given.
pub const DEFAULT_CLASS: &str = "probe.LineTableTarget";

#[derive(Debug, Serialize)]
pub struct FindingInfo {
    pub case: &'static str,
    pub expected: String,
    pub actual: String,
    pub actual_code: u32,
}

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub class: String,
    pub printdump: bool,
    pub line_numbers: bool,
    pub status: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub setup_error: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub events: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub findings: Vec<FindingInfo>,
}

pub fn run(
    options: Option<&str>,
    class: &str,
    withhold_line_numbers: bool,
    faults: &[String],
    opts: &GlobalOptions,
) -> anyhow::Result<i32> {
    let mut host = SimulatedHost::conforming(class);
    if withhold_line_numbers {
        host = host.without_capability(Capabilities::CAN_GET_LINE_NUMBERS);
    }
    for fault in faults {
        let (case, code) = parse_fault(fault)?;
        log::debug!("Host answers {} with {code}", case.name());
        host = host.with_line_table_hook(move |request| {
            (ProbeCase::classify(request) == Some(case)).then_some(code)
        });
    }

    let class_ref = ClassRef::new(class);
    let mut report = RunReport {
        class: class.to_string(),
        printdump: ProbeOptions::from_agent_options(options).printdump,
        line_numbers: false,
        status: probe::STATUS_FAILED,
        setup_error: None,
        events: Vec::new(),
        findings: Vec::new(),
    };

    match probe::initialize(&host, options) {
        Ok(mut context) => {
            report.status = check_entry(Some(&mut context), &host, &class_ref);
            report.line_numbers = context.can_get_line_numbers();
            report.events = context.events().iter().map(ToString::to_string).collect();
            report.findings = context
                .findings()
                .map(|finding| FindingInfo {
                    case: finding.case.name(),
                    expected: finding.expected.to_string(),
                    actual: finding.actual.to_string(),
                    actual_code: finding.actual.value(),
                })
                .collect();
        }
        Err(error) => {
            report.setup_error = Some(error.to_string());
            report.status = check_entry::<SimulatedInterface, _>(None, &host, &class_ref);
        }
    }

    print_output(&report, opts, |r| {
        let verdict = if r.status == probe::PASSED {
            "PASS"
        } else {
            "FAIL"
        };
        println!("{verdict}  {}  (status {})", r.class, r.status);
        if let Some(err) = &r.setup_error {
            println!("  Error: {err}");
        } else if !r.line_numbers {
            println!("  CAN_GET_LINE_NUMBERS not granted, no case ran");
        }
        if !r.findings.is_empty() {
            println!();
            let mut tw = TabWriter::new(
                "  ",
                &[
                    ("Case", Align::Left),
                    ("Expected", Align::Left),
                    ("Actual", Align::Left),
                ],
            );
            for f in &r.findings {
                tw.row(vec![f.case.to_string(), f.expected.clone(), f.actual.clone()]);
            }
            tw.print();
        }
    })?;

    Ok(report.status)
}

/// Parse `CASE=CODE`, where `CODE` is a number or an error name with or without the
/// `JVMTI_ERROR_` prefix.
fn parse_fault(text: &str) -> anyhow::Result<(ProbeCase, ErrorCode)> {
    let Some((case, code)) = text.split_once('=') else {
        bail!("malformed fault: {text} (expected CASE=CODE)");
    };

    let case = ProbeCase::from_str(case.trim()).map_err(|_| {
        let known: Vec<&str> = ProbeCase::iter().map(|case| case.name()).collect();
        anyhow!("unknown case: {case} (expected one of {})", known.join(", "))
    })?;

    Ok((case, parse_code(code.trim())?))
}

fn parse_code(text: &str) -> anyhow::Result<ErrorCode> {
    if let Ok(value) = text.parse::<u32>() {
        return Ok(ErrorCode::new(value));
    }

    let name = text.to_ascii_uppercase();
    let name = if name.starts_with("JVMTI_ERROR_") {
        name
    } else {
        format!("JVMTI_ERROR_{name}")
    };

    KNOWN_CODES
        .iter()
        .find(|(_, known)| *known == name)
        .map(|(code, _)| *code)
        .with_context(|| format!("unknown error code: {text}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fault() {
        assert_eq!(
            parse_fault("null_table=0").unwrap(),
            (ProbeCase::NullTable, ErrorCode::NONE)
        );
        assert_eq!(
            parse_fault("invalid_method=JVMTI_ERROR_INVALID_CLASS").unwrap(),
            (ProbeCase::InvalidMethod, ErrorCode::INVALID_CLASS)
        );
        assert_eq!(
            parse_fault("null_entry_count = internal").unwrap(),
            (ProbeCase::NullEntryCount, ErrorCode::INTERNAL)
        );
    }

    #[test]
    fn test_parse_fault_rejects_garbage() {
        assert!(parse_fault("null_table").is_err());
        assert!(parse_fault("null_frame=0").is_err());
        assert!(parse_fault("null_table=NOT_A_CODE").is_err());
    }

    #[test]
    fn test_run_exit_status() {
        let opts = GlobalOptions {
            json: true,
            verbose: false,
        };
        assert_eq!(run(None, DEFAULT_CLASS, false, &[], &opts).unwrap(), 0);
        assert_eq!(
            run(None, DEFAULT_CLASS, false, &["null_table=0".to_string()], &opts).unwrap(),
            2
        );
        assert_eq!(
            run(None, DEFAULT_CLASS, true, &["null_table=0".to_string()], &opts).unwrap(),
            0
        );
        assert_eq!(run(None, "my.Class", false, &[], &opts).unwrap(), 0);
        assert_eq!(
            run(None, "my.Class", false, &["invalid_method=0".to_string()], &opts).unwrap(),
            2
        );
    }
}
