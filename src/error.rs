use thiserror::Error;

use crate::host::{ErrorCode, InterfaceVersion, LoaderCode};

/// The generic Error type, covering every setup failure this library can report.
///
/// These errors mean the probe could not run: the embedding harness attached it wrongly, or the
/// tool interface is broken below the level the probe tests. They are distinct from contract
/// violations of the operation under test, which are never errors. Those are recorded as
/// [`crate::probe::Finding`]s and folded into the [`crate::probe::Verdict`].
///
/// # Examples
///
/// ```rust
/// use lineprobe::{host::sim::SimulatedHost, probe, Error};
///
/// match probe::initialize(&SimulatedHost::conforming("demo.Target"), None) {
///     Ok(context) => println!("ready, line numbers: {}", context.can_get_line_numbers()),
///     Err(Error::Capability { operation, code }) => eprintln!("({operation}) {code}"),
///     Err(e) => eprintln!("{e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The attachment provider refused to hand out an interface handle.
    #[error("Wrong result of a valid call to GetEnv! (version {version}: {code})")]
    Attach {
        /// Requested interface version
        version: InterfaceVersion,
        /// Status returned by the provider
        code: LoaderCode,
    },

    /// The attachment provider reported success without producing a handle.
    #[error("Wrong result of a valid call to GetEnv! (version {0}: no interface)")]
    InterfaceAbsent(InterfaceVersion),

    /// A capability negotiation call failed.
    ///
    /// `operation` names the failing interface function.
    #[error("({operation}) unexpected error: {code}")]
    Capability {
        /// The interface function that failed
        operation: &'static str,
        /// The error it returned
        code: ErrorCode,
    },

    /// Checking was requested without a negotiated interface.
    #[error("JVMTI client was not properly loaded!")]
    NotLoaded,

    /// The reference method used by the null pointer cases could not be resolved.
    #[error("Cannot get method ID! ({class}.{name}{signature})")]
    MethodLookup {
        /// Class searched
        class: String,
        /// Method name searched
        name: &'static str,
        /// Method descriptor searched
        signature: &'static str,
    },
}
