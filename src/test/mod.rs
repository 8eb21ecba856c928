use crate::{
    host::{
        sim::{SimulatedHost, SimulatedInterface},
        ErrorCode,
    },
    probe::{self, ProbeCase, ProbeContext},
};

/// Class every fixture host loads, declaring the default constructor.
pub const TARGET_CLASS: &str = "probe.LineTableTarget";

// Helper function to create a conforming host that answers `case` with `code`
pub fn fault_on(case: ProbeCase, code: ErrorCode) -> SimulatedHost {
    SimulatedHost::conforming(TARGET_CLASS).with_line_table_hook(move |request| {
        (ProbeCase::classify(request) == Some(case)).then_some(code)
    })
}

// Helper function to negotiate a probe against a host that must accept it
pub fn ready(host: &SimulatedHost, options: Option<&str>) -> ProbeContext<SimulatedInterface> {
    probe::initialize(host, options).expect("fixture host must negotiate")
}
