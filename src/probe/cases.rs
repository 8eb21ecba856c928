//! The three malformed invocations and the error each must produce.
//!
//! | Case | Method | Entry count | Table | Expected |
//! |------|--------|-------------|-------|----------|
//! | [`ProbeCase::InvalidMethod`] | null | present | present | `INVALID_METHODID` |
//! | [`ProbeCase::NullEntryCount`] | valid | absent | present | `NULL_POINTER` |
//! | [`ProbeCase::NullTable`] | valid | present | absent | `NULL_POINTER` |
//!
//! Cases run in declaration order, which is also the order of [`ProbeCase::iter`].

use strum::{EnumIter, EnumString, IntoStaticStr};

use crate::host::{ErrorCode, LineTableRequest, MethodId};

pub use strum::IntoEnumIterator;

/// One malformed `GetLineNumberTable` invocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ProbeCase {
    /// Null method handle with both output slots supplied.
    InvalidMethod,
    /// Valid method, null entry count pointer.
    NullEntryCount,
    /// Valid method, null table pointer.
    NullTable,
}

impl ProbeCase {
    /// The error a conforming host must return.
    #[must_use]
    pub fn expected(&self) -> ErrorCode {
        match self {
            ProbeCase::InvalidMethod => ErrorCode::INVALID_METHODID,
            ProbeCase::NullEntryCount | ProbeCase::NullTable => ErrorCode::NULL_POINTER,
        }
    }

    /// Build the request for this case around the resolved, valid method.
    ///
    /// [`ProbeCase::InvalidMethod`] ignores `valid` and substitutes [`MethodId::NULL`].
    #[must_use]
    pub fn request(&self, valid: MethodId) -> LineTableRequest {
        match self {
            ProbeCase::InvalidMethod => LineTableRequest::new(MethodId::NULL),
            ProbeCase::NullEntryCount => LineTableRequest::new(valid).without_entry_count(),
            ProbeCase::NullTable => LineTableRequest::new(valid).without_table(),
        }
    }

    /// Recognize which case a request belongs to.
    ///
    /// Returns `None` for well-formed requests and for shapes no case produces.
    #[must_use]
    pub fn classify(request: &LineTableRequest) -> Option<ProbeCase> {
        let count_absent = request.entry_count.is_absent();
        let table_absent = request.table.is_absent();

        match (request.method.is_null(), count_absent, table_absent) {
            (true, false, false) => Some(ProbeCase::InvalidMethod),
            (false, true, false) => Some(ProbeCase::NullEntryCount),
            (false, false, true) => Some(ProbeCase::NullTable),
            _ => None,
        }
    }

    /// Short name, as accepted on the command line.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.into()
    }

    /// Trace line emitted before the case runs.
    #[must_use]
    pub fn trace_line(&self) -> &'static str {
        match self {
            ProbeCase::InvalidMethod => ">>> invalid method check ...",
            ProbeCase::NullEntryCount => ">>> (entryCountPtr) null pointer check ...",
            ProbeCase::NullTable => ">>> (tablePtr) null pointer check ...",
        }
    }

    /// The output argument a case nulls out, if any.
    #[must_use]
    pub fn argument(&self) -> Option<&'static str> {
        match self {
            ProbeCase::InvalidMethod => None,
            ProbeCase::NullEntryCount => Some("entryCountPtr"),
            ProbeCase::NullTable => Some("tablePtr"),
        }
    }
}
