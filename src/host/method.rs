//! Method handles, class references, and the line number table request shape.
//!
//! The tool interface identifies a method by an opaque id that only the host can mint. The
//! id `0` is the null sentinel: it never names a method, and passing it to any method-taking
//! operation must yield [`crate::host::ErrorCode::INVALID_METHODID`].
//!
//! [`LineTableRequest`] replaces the native out-parameter convention of `GetLineNumberTable`.
//! The native call takes a pointer for the entry count and a pointer for the table; either
//! can be null. The request carries the method plus an [`OutSlot`] for each of those
//! pointers, so that malformed calls remain expressible without raw pointers.

use std::fmt;

/// Opaque handle to a method of a loaded class.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MethodId(pub u64);

impl MethodId {
    /// The runtime's null method handle.
    pub const NULL: Self = Self(0);

    /// Create a method id from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }

    /// Returns `true` for [`MethodId::NULL`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "MethodId(null)")
        } else {
            write!(f, "MethodId(0x{:x})", self.0)
        }
    }
}

impl fmt::Display for MethodId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:016x}", self.0)
    }
}

/// Reference to a loaded class, by fully qualified binary name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ClassRef(String);

impl ClassRef {
    /// Create a class reference from a binary name (`pkg.sub.Name`).
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the class name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClassRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One row of a line number table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineNumberEntry {
    /// Bytecode index where the line begins.
    pub start_location: i64,
    /// Source line number.
    pub line_number: i32,
}

/// Line number table of a method, as returned by a successful request.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LineNumberTable(pub Vec<LineNumberEntry>);

impl LineNumberTable {
    /// Number of entries, the value the native call writes through its entry count pointer.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Presence of one output argument of the native call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OutSlot {
    /// A valid, writable output location was supplied.
    Present,
    /// A null pointer was supplied.
    Absent,
}

impl OutSlot {
    /// Returns `true` for [`OutSlot::Absent`].
    #[must_use]
    pub fn is_absent(&self) -> bool {
        matches!(self, OutSlot::Absent)
    }
}

/// Arguments of one `GetLineNumberTable` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LineTableRequest {
    /// Method whose table is requested.
    pub method: MethodId,
    /// The entry count output argument.
    pub entry_count: OutSlot,
    /// The table output argument.
    pub table: OutSlot,
}

impl LineTableRequest {
    /// A well-formed request for `method` with both output slots supplied.
    #[must_use]
    pub fn new(method: MethodId) -> Self {
        Self {
            method,
            entry_count: OutSlot::Present,
            table: OutSlot::Present,
        }
    }

    /// Drop the entry count output argument.
    #[must_use]
    pub fn without_entry_count(mut self) -> Self {
        self.entry_count = OutSlot::Absent;
        self
    }

    /// Drop the table output argument.
    #[must_use]
    pub fn without_table(mut self) -> Self {
        self.table = OutSlot::Absent;
        self
    }
}
