//! The contract probe for `GetLineNumberTable`.
//!
//! A probe runs in two strictly sequential phases:
//!
//! 1. **Negotiation** ([`initialize`]): obtain the tool interface handle, request every
//!    potential capability, and record whether line numbers were granted. Produces a
//!    [`ProbeContext`] or a fatal [`crate::Error`].
//! 2. **Verification** ([`ProbeContext::check`]): invoke the operation with each malformed
//!    argument combination of [`ProbeCase`] and compare the returned code to the documented
//!    one, accumulating a [`Verdict`].
//!
//! ```text
//! initialize ──► ProbeContext ──► check ──► InvalidMethod ──► NullEntryCount ──► NullTable
//!     │               │             │
//!     ▼               ▼             ▼
//!   Error      degraded (no     setup failure
//!             line numbers):    (no <init>):
//!             check = verdict   Failed, no cases
//! ```
//!
//! The context replaces process-wide state: it owns the interface handle, the granted
//! capabilities, the options, the verdict, and the event log. `check` takes `&mut self`, so a
//! context is checked from one place at a time.
//!
//! # Examples
//!
//! ```rust
//! use lineprobe::host::{sim::SimulatedHost, ClassRef};
//! use lineprobe::probe::{self, Verdict};
//!
//! let host = SimulatedHost::conforming("demo.Target");
//! let mut context = probe::initialize(&host, None)?;
//!
//! let verdict = context.check(&host, &ClassRef::new("demo.Target"));
//! assert_eq!(verdict, Verdict::Passed);
//! assert_eq!(verdict.status(), probe::PASSED);
//! # Ok::<(), lineprobe::Error>(())
//! ```

mod cases;
mod context;
mod events;
mod negotiator;
mod options;
mod verdict;
mod verifier;

pub use cases::{IntoEnumIterator, ProbeCase};
pub use context::ProbeContext;
pub use events::{Finding, ProbeEvent};
pub use negotiator::{initialize, INTERFACE_VERSION};
pub use options::{ProbeOptions, PRINTDUMP};
pub use verdict::{Verdict, PASSED, STATUS_FAILED};
pub use verifier::{check_entry, TARGET_METHOD_NAME, TARGET_METHOD_SIGNATURE};
