//! # lineprobe Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the lineprobe library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all lineprobe operations
pub use crate::Error;

/// The result type used throughout lineprobe
pub use crate::Result;

// ================================================================================================
// Host Interfaces
// ================================================================================================

/// Traits through which the probe reaches the host runtime
pub use crate::host::{AttachmentProvider, MethodResolver, ToolInterface};

/// Values exchanged with the host
pub use crate::host::{
    translate_error, Capabilities, ClassRef, ErrorCode, HostResult, LineNumberTable,
    LineTableRequest, LoaderCode, MethodId, OutSlot,
};

/// In-memory reference host
pub use crate::host::sim::{HostFaults, SimClass, SimMethod, SimulatedHost};

// ================================================================================================
// Probe
// ================================================================================================

/// Negotiation and the integer status entry point
pub use crate::probe::{check_entry, initialize, PASSED, STATUS_FAILED};

/// Probe state and results
pub use crate::probe::{
    Finding, IntoEnumIterator, ProbeCase, ProbeContext, ProbeEvent, ProbeOptions, Verdict,
};
