//! The host runtime as seen by the probe.
//!
//! Everything the probe needs from the runtime it is testing lives behind three traits, one
//! per external collaborator:
//!
//! | Trait | Collaborator |
//! |-------|--------------|
//! | [`AttachmentProvider`] | Hands out the tool interface handle |
//! | [`ToolInterface`] | Capability negotiation and the operation under test |
//! | [`MethodResolver`] | The object model's method lookup |
//!
//! Host calls return [`HostResult`], carrying the interface's [`ErrorCode`] on failure. A
//! host never reports [`ErrorCode::NONE`] through the `Err` side; success is `Ok`.
//!
//! [`sim::SimulatedHost`] implements all three traits in memory and is the reference host
//! used by the command-line runner and the test suites.

mod attach;
mod capabilities;
mod errors;
mod method;
pub mod sim;

pub use attach::{AttachmentProvider, InterfaceVersion, LoaderCode};
pub use capabilities::Capabilities;
pub use errors::{translate_error, ErrorCode, KNOWN_CODES};
pub use method::{
    ClassRef, LineNumberEntry, LineNumberTable, LineTableRequest, MethodId, OutSlot,
};

/// Result of a call into the tool interface.
pub type HostResult<T> = std::result::Result<T, ErrorCode>;

/// Capability-negotiated handle to the host's tool interface.
pub trait ToolInterface {
    /// Capabilities the host could grant to this environment.
    ///
    /// # Errors
    ///
    /// Returns the host's error code if the query fails.
    fn potential_capabilities(&self) -> HostResult<Capabilities>;

    /// Request that `requested` be granted, as a single batch.
    ///
    /// # Errors
    ///
    /// Returns the host's error code if any requested capability cannot be granted.
    fn add_capabilities(&self, requested: Capabilities) -> HostResult<()>;

    /// Capabilities currently granted to this environment.
    ///
    /// # Errors
    ///
    /// Returns the host's error code if the query fails.
    fn capabilities(&self) -> HostResult<Capabilities>;

    /// The `GetLineNumberTable` operation.
    ///
    /// # Errors
    ///
    /// Returns the code the host assigns to a malformed or unsupported request.
    fn line_number_table(&self, request: &LineTableRequest) -> HostResult<LineNumberTable>;
}

/// Method lookup facility of the runtime's object model.
pub trait MethodResolver {
    /// Look up a method of `class` by name and descriptor.
    ///
    /// Returns `None` when the class has no such method.
    fn method_id(&self, class: &ClassRef, name: &str, signature: &str) -> Option<MethodId>;
}
