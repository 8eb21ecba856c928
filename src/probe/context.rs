//! State of one probe instance.

use crate::{
    host::{Capabilities, ToolInterface},
    probe::{Finding, ProbeEvent, ProbeOptions, Verdict},
};

/// Everything a probe carries from negotiation into checking.
///
/// Created by [`crate::probe::initialize`], which is the only way to obtain one, so holding a
/// context means the interface handle exists and negotiation completed. The granted
/// capabilities are fixed at that point.
#[derive(Debug)]
pub struct ProbeContext<I> {
    interface: I,
    capabilities: Capabilities,
    options: ProbeOptions,
    pub(crate) verdict: Verdict,
    events: Vec<ProbeEvent>,
}

impl<I: ToolInterface> ProbeContext<I> {
    pub(crate) fn new(interface: I, capabilities: Capabilities, options: ProbeOptions) -> Self {
        Self {
            interface,
            capabilities,
            options,
            verdict: Verdict::Passed,
            events: Vec::new(),
        }
    }

    /// The negotiated interface handle.
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Capabilities granted during negotiation.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }

    /// Whether the operation under test is available. When `false`, checks pass without
    /// calling it.
    pub fn can_get_line_numbers(&self) -> bool {
        self.capabilities.can_get_line_numbers()
    }

    /// Options parsed at initialization.
    pub fn options(&self) -> ProbeOptions {
        self.options
    }

    /// The accumulated verdict.
    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    /// Every event emitted so far, oldest first.
    pub fn events(&self) -> &[ProbeEvent] {
        &self.events
    }

    /// Every contract violation observed so far, oldest first.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> + '_ {
        self.events.iter().filter_map(ProbeEvent::finding)
    }

    pub(crate) fn emit(&mut self, event: ProbeEvent) {
        log::log!(event.level(), "{event}");
        self.events.push(event);
    }
}
