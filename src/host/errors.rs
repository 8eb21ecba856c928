//! Tool interface error codes and their translation to display names.
//!
//! Every call into the tool interface reports its outcome as a numeric error code. The codes
//! are part of the interface contract: a conforming host must return the documented code for
//! each malformed invocation, and that is exactly what the probe checks. [`ErrorCode`] keeps
//! the raw value so that codes a host invents (or a broken host returns by accident) survive
//! intact into diagnostics.
//!
//! [`translate_error`] is the error-translation facility: it maps a code to the symbolic name
//! used in diagnostics. It is never used for control flow.
//!
//! # Examples
//!
//! ```rust
//! use lineprobe::host::{translate_error, ErrorCode};
//!
//! assert_eq!(translate_error(ErrorCode::NULL_POINTER), "JVMTI_ERROR_NULL_POINTER");
//! assert_eq!(translate_error(ErrorCode::new(9999)), "unknown error");
//! assert_eq!(ErrorCode::INVALID_METHODID.to_string(), "JVMTI_ERROR_INVALID_METHODID (23)");
//! ```

use std::fmt;

/// A raw tool interface error code.
///
/// Wraps the numeric value returned by the host. The associated constants name the codes
/// defined by the interface; any other value is carried through as-is and translates to
/// `"unknown error"`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(pub u32);

impl ErrorCode {
    /// No error has occurred.
    pub const NONE: Self = Self(0);
    /// The passed thread is not a valid thread.
    pub const INVALID_THREAD: Self = Self(10);
    /// Thread group invalid.
    pub const INVALID_THREAD_GROUP: Self = Self(11);
    /// Invalid priority.
    pub const INVALID_PRIORITY: Self = Self(12);
    /// Thread was not suspended.
    pub const THREAD_NOT_SUSPENDED: Self = Self(13);
    /// Thread already suspended.
    pub const THREAD_SUSPENDED: Self = Self(14);
    /// The thread is not live (has not been started or is now dead).
    pub const THREAD_NOT_ALIVE: Self = Self(15);
    /// Invalid object.
    pub const INVALID_OBJECT: Self = Self(20);
    /// Invalid class.
    pub const INVALID_CLASS: Self = Self(21);
    /// The class has been loaded but not yet prepared.
    pub const CLASS_NOT_PREPARED: Self = Self(22);
    /// Invalid method.
    pub const INVALID_METHODID: Self = Self(23);
    /// Invalid location.
    pub const INVALID_LOCATION: Self = Self(24);
    /// Invalid field.
    pub const INVALID_FIELDID: Self = Self(25);
    /// Invalid module.
    pub const INVALID_MODULE: Self = Self(26);
    /// There are no Java programming language or JNI stack frames at the specified depth.
    pub const NO_MORE_FRAMES: Self = Self(31);
    /// Information about the frame is not available.
    pub const OPAQUE_FRAME: Self = Self(32);
    /// The variable is not an appropriate type for the function used.
    pub const TYPE_MISMATCH: Self = Self(34);
    /// Invalid slot.
    pub const INVALID_SLOT: Self = Self(35);
    /// Item already set.
    pub const DUPLICATE: Self = Self(40);
    /// Desired element not found.
    pub const NOT_FOUND: Self = Self(41);
    /// Invalid raw monitor.
    pub const INVALID_MONITOR: Self = Self(50);
    /// This thread doesn't own the raw monitor.
    pub const NOT_MONITOR_OWNER: Self = Self(51);
    /// The call has been interrupted before completion.
    pub const INTERRUPT: Self = Self(52);
    /// A new class file is malformed.
    pub const INVALID_CLASS_FORMAT: Self = Self(60);
    /// The new class file definitions would lead to a circular definition.
    pub const CIRCULAR_CLASS_DEFINITION: Self = Self(61);
    /// The class bytes fail verification.
    pub const FAILS_VERIFICATION: Self = Self(62);
    /// A new class file would require adding a method.
    pub const UNSUPPORTED_REDEFINITION_METHOD_ADDED: Self = Self(63);
    /// A new class version changes fields.
    pub const UNSUPPORTED_REDEFINITION_SCHEMA_CHANGED: Self = Self(64);
    /// The thread state has been modified, and is now inconsistent.
    pub const INVALID_TYPESTATE: Self = Self(65);
    /// A direct superclass is different or the set of implemented interfaces changed.
    pub const UNSUPPORTED_REDEFINITION_HIERARCHY_CHANGED: Self = Self(66);
    /// A new class version does not declare a method declared in the old class version.
    pub const UNSUPPORTED_REDEFINITION_METHOD_DELETED: Self = Self(67);
    /// A new class file has a version number not supported by this VM.
    pub const UNSUPPORTED_VERSION: Self = Self(68);
    /// The class name defined in the new class file differs from the old class object.
    pub const NAMES_DONT_MATCH: Self = Self(69);
    /// A new class version has different modifiers.
    pub const UNSUPPORTED_REDEFINITION_CLASS_MODIFIERS_CHANGED: Self = Self(70);
    /// A method in the new class version has different modifiers than its old counterpart.
    pub const UNSUPPORTED_REDEFINITION_METHOD_MODIFIERS_CHANGED: Self = Self(71);
    /// A new class version has unsupported differences in class attributes.
    pub const UNSUPPORTED_REDEFINITION_CLASS_ATTRIBUTE_CHANGED: Self = Self(72);
    /// Functionality is not supported in this virtual machine.
    pub const UNSUPPORTED_OPERATION: Self = Self(73);
    /// The class cannot be modified.
    pub const UNMODIFIABLE_CLASS: Self = Self(79);
    /// The module cannot be modified.
    pub const UNMODIFIABLE_MODULE: Self = Self(80);
    /// The functionality is not available in this virtual machine.
    pub const NOT_AVAILABLE: Self = Self(98);
    /// The environment does not possess the capability needed to use this function.
    pub const MUST_POSSESS_CAPABILITY: Self = Self(99);
    /// Pointer is unexpectedly null.
    pub const NULL_POINTER: Self = Self(100);
    /// The requested information is not available.
    pub const ABSENT_INFORMATION: Self = Self(101);
    /// The specified event type ID is not recognized.
    pub const INVALID_EVENT_TYPE: Self = Self(102);
    /// Illegal argument.
    pub const ILLEGAL_ARGUMENT: Self = Self(103);
    /// The requested information is not available for native method.
    pub const NATIVE_METHOD: Self = Self(104);
    /// The class loader does not support this operation.
    pub const CLASS_LOADER_UNSUPPORTED: Self = Self(106);
    /// The function attempted to allocate memory and no more memory was available.
    pub const OUT_OF_MEMORY: Self = Self(110);
    /// The desired functionality has not been enabled in this virtual machine.
    pub const ACCESS_DENIED: Self = Self(111);
    /// The desired functionality is not available in the current phase.
    pub const WRONG_PHASE: Self = Self(112);
    /// An unexpected internal error has occurred.
    pub const INTERNAL: Self = Self(113);
    /// The thread being used to call this function is not attached to the virtual machine.
    pub const UNATTACHED_THREAD: Self = Self(115);
    /// The environment provided is no longer connected or is not an environment.
    pub const INVALID_ENVIRONMENT: Self = Self(116);

    /// Create an error code from its raw value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Returns `true` for [`ErrorCode::NONE`].
    #[must_use]
    pub const fn is_none(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErrorCode({}, {})", self.0, translate_error(*self))
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", translate_error(*self), self.0)
    }
}

/// Every error code the interface defines, paired with its symbolic name, in ascending order.
pub const KNOWN_CODES: &[(ErrorCode, &str)] = &[
    (ErrorCode::NONE, "JVMTI_ERROR_NONE"),
    (ErrorCode::INVALID_THREAD, "JVMTI_ERROR_INVALID_THREAD"),
    (ErrorCode::INVALID_THREAD_GROUP, "JVMTI_ERROR_INVALID_THREAD_GROUP"),
    (ErrorCode::INVALID_PRIORITY, "JVMTI_ERROR_INVALID_PRIORITY"),
    (ErrorCode::THREAD_NOT_SUSPENDED, "JVMTI_ERROR_THREAD_NOT_SUSPENDED"),
    (ErrorCode::THREAD_SUSPENDED, "JVMTI_ERROR_THREAD_SUSPENDED"),
    (ErrorCode::THREAD_NOT_ALIVE, "JVMTI_ERROR_THREAD_NOT_ALIVE"),
    (ErrorCode::INVALID_OBJECT, "JVMTI_ERROR_INVALID_OBJECT"),
    (ErrorCode::INVALID_CLASS, "JVMTI_ERROR_INVALID_CLASS"),
    (ErrorCode::CLASS_NOT_PREPARED, "JVMTI_ERROR_CLASS_NOT_PREPARED"),
    (ErrorCode::INVALID_METHODID, "JVMTI_ERROR_INVALID_METHODID"),
    (ErrorCode::INVALID_LOCATION, "JVMTI_ERROR_INVALID_LOCATION"),
    (ErrorCode::INVALID_FIELDID, "JVMTI_ERROR_INVALID_FIELDID"),
    (ErrorCode::INVALID_MODULE, "JVMTI_ERROR_INVALID_MODULE"),
    (ErrorCode::NO_MORE_FRAMES, "JVMTI_ERROR_NO_MORE_FRAMES"),
    (ErrorCode::OPAQUE_FRAME, "JVMTI_ERROR_OPAQUE_FRAME"),
    (ErrorCode::TYPE_MISMATCH, "JVMTI_ERROR_TYPE_MISMATCH"),
    (ErrorCode::INVALID_SLOT, "JVMTI_ERROR_INVALID_SLOT"),
    (ErrorCode::DUPLICATE, "JVMTI_ERROR_DUPLICATE"),
    (ErrorCode::NOT_FOUND, "JVMTI_ERROR_NOT_FOUND"),
    (ErrorCode::INVALID_MONITOR, "JVMTI_ERROR_INVALID_MONITOR"),
    (ErrorCode::NOT_MONITOR_OWNER, "JVMTI_ERROR_NOT_MONITOR_OWNER"),
    (ErrorCode::INTERRUPT, "JVMTI_ERROR_INTERRUPT"),
    (ErrorCode::INVALID_CLASS_FORMAT, "JVMTI_ERROR_INVALID_CLASS_FORMAT"),
    (
        ErrorCode::CIRCULAR_CLASS_DEFINITION,
        "JVMTI_ERROR_CIRCULAR_CLASS_DEFINITION",
    ),
    (ErrorCode::FAILS_VERIFICATION, "JVMTI_ERROR_FAILS_VERIFICATION"),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_METHOD_ADDED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_METHOD_ADDED",
    ),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_SCHEMA_CHANGED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_SCHEMA_CHANGED",
    ),
    (ErrorCode::INVALID_TYPESTATE, "JVMTI_ERROR_INVALID_TYPESTATE"),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_HIERARCHY_CHANGED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_HIERARCHY_CHANGED",
    ),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_METHOD_DELETED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_METHOD_DELETED",
    ),
    (ErrorCode::UNSUPPORTED_VERSION, "JVMTI_ERROR_UNSUPPORTED_VERSION"),
    (ErrorCode::NAMES_DONT_MATCH, "JVMTI_ERROR_NAMES_DONT_MATCH"),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_CLASS_MODIFIERS_CHANGED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_CLASS_MODIFIERS_CHANGED",
    ),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_METHOD_MODIFIERS_CHANGED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_METHOD_MODIFIERS_CHANGED",
    ),
    (
        ErrorCode::UNSUPPORTED_REDEFINITION_CLASS_ATTRIBUTE_CHANGED,
        "JVMTI_ERROR_UNSUPPORTED_REDEFINITION_CLASS_ATTRIBUTE_CHANGED",
    ),
    (ErrorCode::UNSUPPORTED_OPERATION, "JVMTI_ERROR_UNSUPPORTED_OPERATION"),
    (ErrorCode::UNMODIFIABLE_CLASS, "JVMTI_ERROR_UNMODIFIABLE_CLASS"),
    (ErrorCode::UNMODIFIABLE_MODULE, "JVMTI_ERROR_UNMODIFIABLE_MODULE"),
    (ErrorCode::NOT_AVAILABLE, "JVMTI_ERROR_NOT_AVAILABLE"),
    (
        ErrorCode::MUST_POSSESS_CAPABILITY,
        "JVMTI_ERROR_MUST_POSSESS_CAPABILITY",
    ),
    (ErrorCode::NULL_POINTER, "JVMTI_ERROR_NULL_POINTER"),
    (ErrorCode::ABSENT_INFORMATION, "JVMTI_ERROR_ABSENT_INFORMATION"),
    (ErrorCode::INVALID_EVENT_TYPE, "JVMTI_ERROR_INVALID_EVENT_TYPE"),
    (ErrorCode::ILLEGAL_ARGUMENT, "JVMTI_ERROR_ILLEGAL_ARGUMENT"),
    (ErrorCode::NATIVE_METHOD, "JVMTI_ERROR_NATIVE_METHOD"),
    (
        ErrorCode::CLASS_LOADER_UNSUPPORTED,
        "JVMTI_ERROR_CLASS_LOADER_UNSUPPORTED",
    ),
    (ErrorCode::OUT_OF_MEMORY, "JVMTI_ERROR_OUT_OF_MEMORY"),
    (ErrorCode::ACCESS_DENIED, "JVMTI_ERROR_ACCESS_DENIED"),
    (ErrorCode::WRONG_PHASE, "JVMTI_ERROR_WRONG_PHASE"),
    (ErrorCode::INTERNAL, "JVMTI_ERROR_INTERNAL"),
    (ErrorCode::UNATTACHED_THREAD, "JVMTI_ERROR_UNATTACHED_THREAD"),
    (ErrorCode::INVALID_ENVIRONMENT, "JVMTI_ERROR_INVALID_ENVIRONMENT"),
];

/// Translate an error code to its symbolic name.
///
/// Unknown values translate to `"unknown error"`.
#[must_use]
pub fn translate_error(code: ErrorCode) -> &'static str {
    KNOWN_CODES
        .binary_search_by_key(&code, |(known, _)| *known)
        .map_or("unknown error", |index| KNOWN_CODES[index].1)
}
