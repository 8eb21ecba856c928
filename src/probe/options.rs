//! Agent option parsing.
//!
//! The probe accepts a single option string at initialization, passed verbatim by the
//! loader. The only recognized value is [`PRINTDUMP`], which turns on per-case trace lines.
//! Anything else, including an absent string, leaves the probe silent.

/// Option string enabling verbose tracing.
pub const PRINTDUMP: &str = "printdump";

/// Options of one probe instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProbeOptions {
    /// Emit a trace line before each case and after the last one.
    pub printdump: bool,
}

impl ProbeOptions {
    /// Parse the raw option string handed to the agent.
    ///
    /// Matching is exact: `"printdump"` enables tracing, every other value is ignored.
    #[must_use]
    pub fn from_agent_options(options: Option<&str>) -> Self {
        Self {
            printdump: options == Some(PRINTDUMP),
        }
    }
}
