#![no_main]

use libfuzzer_sys::fuzz_target;
use lineprobe::prelude::*;

const CLASS: &str = "fuzz.Target";

// Each case is answered with a code taken from the input; the verdict must fail exactly when
// one of them differs from the documented code.
fuzz_target!(|data: &[u8]| {
    let mut host = SimulatedHost::conforming(CLASS);
    let mut deviates = false;

    for (case, chunk) in ProbeCase::iter().zip(data.chunks(4)) {
        let mut bytes = [0u8; 4];
        bytes[..chunk.len()].copy_from_slice(chunk);
        let code = ErrorCode::new(u32::from_le_bytes(bytes));
        deviates |= code != case.expected();
        host = host.with_line_table_hook(move |request| {
            (ProbeCase::classify(request) == Some(case)).then_some(code)
        });
    }

    let Ok(mut context) = initialize(&host, None) else {
        return;
    };
    let verdict = context.check(&host, &ClassRef::new(CLASS));
    assert_eq!(verdict.is_failed(), deviates);
    assert_eq!(context.findings().count() > 0, deviates);
});
