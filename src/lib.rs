// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # lineprobe
//!
//! A negative-path conformance probe for the JVM Tool Interface operation that returns a
//! method's line number table (`GetLineNumberTable`).
//!
//! The probe guards the documented error contract of a public debugging API: handed a
//! malformed invocation, a conforming host must answer with one specific error code, never
//! crash, never hand back data, never report success. It is also a template for any
//! "API contract probe": attach, negotiate the capability under test, call the operation
//! with invalid argument combinations, and check each returned code.
//!
//! ## Features
//!
//! - **Capability negotiation** - Requests every potential capability in one batch and gates
//!   checking on `CAN_GET_LINE_NUMBERS`
//! - **Exhaustive case reporting** - All malformed invocations run on every check; each
//!   mismatch is reported with expected and actual codes
//! - **Monotonic verdict** - A failed probe stays failed
//! - **Host abstraction** - The runtime is reached only through traits, so any host can be
//!   probed, including the bundled in-memory reference host
//!
//! ## Quick Start
//!
//! ```rust
//! use lineprobe::prelude::*;
//!
//! // A conforming in-memory host with one loaded class
//! let host = SimulatedHost::conforming("demo.Target");
//!
//! // Negotiate, then check
//! let mut context = initialize(&host, Some("printdump"))?;
//! let status = check_entry(Some(&mut context), &host, &ClassRef::new("demo.Target"));
//! assert_eq!(status, PASSED);
//! # Ok::<(), lineprobe::Error>(())
//! ```
//!
//! ### Probing a Misbehaving Host
//!
//! ```rust
//! use lineprobe::prelude::*;
//!
//! // This host reports success for a null method handle
//! let host = SimulatedHost::conforming("demo.Target")
//!     .with_line_table_hook(|request| request.method.is_null().then_some(ErrorCode::NONE));
//!
//! let mut context = initialize(&host, None)?;
//! assert_eq!(context.check(&host, &ClassRef::new("demo.Target")), Verdict::Failed);
//!
//! let finding = context.findings().next().unwrap();
//! assert_eq!(finding.case, ProbeCase::InvalidMethod);
//! assert_eq!(finding.actual, ErrorCode::NONE);
//! # Ok::<(), lineprobe::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Two kinds of failure are kept apart. Setup failures (no interface handle, failed
//! capability negotiation, unresolvable reference method) mean the probe cannot run; they are
//! returned as [`Error`] from [`probe::initialize`], or reported as a failed check. Contract
//! violations are never errors: they are [`probe::Finding`]s folded into the verdict.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. Mismatches and setup failures log at `error`,
//! a missing capability at `warn`, and `printdump` trace lines at `info`. Install any logger
//! to see them.

#[macro_use]
pub(crate) mod macros;

pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use lineprobe::prelude::*;
///
/// let host = SimulatedHost::conforming("demo.Target");
/// let context = initialize(&host, None)?;
/// assert!(context.can_get_line_numbers());
/// # Ok::<(), lineprobe::Error>(())
/// ```
pub mod prelude;

/// The host runtime interfaces the probe talks to, and an in-memory reference host.
///
/// # Key Types
///
/// - [`host::ToolInterface`] - Capability negotiation and `GetLineNumberTable`
/// - [`host::AttachmentProvider`] - Source of the interface handle
/// - [`host::MethodResolver`] - Method lookup by name and descriptor
/// - [`host::ErrorCode`] - Interface error codes and [`host::translate_error`]
/// - [`host::Capabilities`] - Capability flags
/// - [`host::sim::SimulatedHost`] - Conforming in-memory host with fault injection
pub mod host;

/// Capability negotiation, contract verification, and verdict accumulation.
///
/// # Key Types
///
/// - [`probe::initialize`] - Negotiate and create a [`probe::ProbeContext`]
/// - [`probe::ProbeContext::check`] - Run the malformed invocations
/// - [`probe::check_entry`] - Integer status entry point
/// - [`probe::ProbeCase`] - The malformed invocations and their expected errors
/// - [`probe::Verdict`] - Monotonic pass/fail
pub mod probe;

/// `lineprobe` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `lineprobe` Error type
///
/// Setup failures that prevent the probe from running.
pub use error::Error;
