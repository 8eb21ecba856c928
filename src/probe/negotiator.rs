//! Capability negotiation.
//!
//! Runs once when the probe is loaded or attached. The sequence mirrors what the host's
//! negotiation protocol requires: take the full potential set, request all of it in one
//! batch, then read back what was actually granted. Asking for everything rather than just
//! `CAN_GET_LINE_NUMBERS` also exercises the negotiation path itself.
//!
//! Any failure up to and including the read-back is fatal. A missing line number capability
//! is not: the probe comes up degraded and its checks pass without running.

use crate::{
    host::{AttachmentProvider, ErrorCode, InterfaceVersion, ToolInterface},
    probe::{ProbeContext, ProbeEvent, ProbeOptions},
    Error, Result,
};

/// Interface version requested from the attachment provider.
pub const INTERFACE_VERSION: InterfaceVersion = InterfaceVersion::V1_1;

/// Negotiate capabilities and build the probe context.
///
/// `options` is the raw agent option string; see [`ProbeOptions::from_agent_options`].
///
/// # Errors
///
/// - [`Error::Attach`] or [`Error::InterfaceAbsent`] if no interface handle is obtained.
/// - [`Error::Capability`] if `GetPotentialCapabilities`, `AddCapabilities` or
///   `GetCapabilities` fails.
///
/// # Examples
///
/// ```rust
/// use lineprobe::{host::{sim::SimulatedHost, LoaderCode}, probe};
///
/// let host = SimulatedHost::conforming("demo.Target");
/// let result = probe::initialize(&host, Some("printdump"));
/// assert_eq!(LoaderCode::of(&result), LoaderCode::OK);
///
/// let context = result?;
/// assert!(context.options().printdump);
/// assert!(context.can_get_line_numbers());
/// # Ok::<(), lineprobe::Error>(())
/// ```
pub fn initialize<P>(provider: &P, options: Option<&str>) -> Result<ProbeContext<P::Interface>>
where
    P: AttachmentProvider + ?Sized,
{
    let options = ProbeOptions::from_agent_options(options);

    let interface = match provider.get_interface(INTERFACE_VERSION) {
        Ok(Some(interface)) => interface,
        Ok(None) => return Err(fatal(Error::InterfaceAbsent(INTERFACE_VERSION))),
        Err(code) => {
            return Err(fatal(Error::Attach {
                version: INTERFACE_VERSION,
                code,
            }))
        }
    };

    let potential = interface
        .potential_capabilities()
        .map_err(|code| capability_error("GetPotentialCapabilities", code))?;

    interface
        .add_capabilities(potential)
        .map_err(|code| capability_error("AddCapabilities", code))?;

    let granted = interface
        .capabilities()
        .map_err(|code| capability_error("GetCapabilities", code))?;

    log::debug!(
        "Granted {} of {} potential capabilities",
        granted.iter().count(),
        potential.iter().count()
    );

    let mut context = ProbeContext::new(interface, granted, options);
    if !context.can_get_line_numbers() {
        context.emit(ProbeEvent::CapabilityMissing);
    }

    Ok(context)
}

fn capability_error(operation: &'static str, code: ErrorCode) -> Error {
    fatal(Error::Capability { operation, code })
}

fn fatal(error: Error) -> Error {
    log::error!("{error}");
    error
}
