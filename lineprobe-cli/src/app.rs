use clap::{Parser, Subcommand};

/// lineprobe - contract probe for the GetLineNumberTable tool interface operation
#[derive(Debug, Parser)]
#[command(name = "lineprobe", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOptions,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared across all subcommands.
#[derive(Debug, Parser)]
pub struct GlobalOptions {
    /// Emit output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable verbose (debug-level) logging output.
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Negotiate capabilities with the reference host and run the contract checks.
    Run {
        /// Agent option string, passed through verbatim (e.g. "printdump").
        #[arg(long, value_name = "OPTIONS")]
        options: Option<String>,

        /// Class loaded into the reference host; its no-argument constructor is the valid method.
        #[arg(long, value_name = "NAME", default_value = crate::commands::run::DEFAULT_CLASS)]
        class: String,

        /// Leave CAN_GET_LINE_NUMBERS out of the host's potential capabilities.
        #[arg(long)]
        withhold_line_numbers: bool,

        /// Make the host answer a case with a different code (e.g. null_table=0,
        /// invalid_method=JVMTI_ERROR_NONE). Repeatable.
        #[arg(long, value_name = "CASE=CODE")]
        fault: Vec<String>,
    },

    /// Print the error code translation table.
    Errors,
}
