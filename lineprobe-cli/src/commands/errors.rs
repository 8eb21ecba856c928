use lineprobe::host::KNOWN_CODES;
use serde::Serialize;

use crate::{
    app::GlobalOptions,
    output::{print_output, Align, TabWriter},
};

#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub code: u32,
    pub name: &'static str,
}

fn entries() -> Vec<ErrorEntry> {
    KNOWN_CODES
        .iter()
        .map(|&(code, name)| ErrorEntry {
            code: code.value(),
            name,
        })
        .collect()
}

pub fn run(opts: &GlobalOptions) -> anyhow::Result<i32> {
    print_output(&entries(), opts, |entries| {
        let mut tw = TabWriter::new("", &[("Code", Align::Right), ("Name", Align::Left)]);
        for entry in entries {
            tw.row(vec![entry.code.to_string(), entry.name.to_string()]);
        }
        tw.print();
    })?;

    Ok(0)
}
