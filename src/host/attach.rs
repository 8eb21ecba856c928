//! Attachment to the host runtime.
//!
//! Bootstrapping and attaching to a running VM is owned by the embedder. The probe only sees
//! the result through [`AttachmentProvider`]: asked for an interface version, the provider
//! hands back a tool interface handle, no handle at all, or a loader status code.

use std::fmt;

use crate::host::ToolInterface;

/// A tool interface version number, encoded as the interface encodes it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterfaceVersion(pub u32);

impl InterfaceVersion {
    /// Interface type tag carried in the high byte of every version.
    pub const INTERFACE_TAG: u32 = 0x3000_0000;

    /// Version 1.1, the version this probe requests.
    pub const V1_1: Self = Self(0x3001_0100);

    /// Major version component.
    #[must_use]
    pub const fn major(&self) -> u32 {
        (self.0 & 0x0FFF_0000) >> 16
    }

    /// Minor version component.
    #[must_use]
    pub const fn minor(&self) -> u32 {
        (self.0 & 0x0000_FF00) >> 8
    }
}

impl fmt::Debug for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InterfaceVersion(0x{:08x})", self.0)
    }
}

impl fmt::Display for InterfaceVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major(), self.minor())
    }
}

/// Status code of the native loader and attach protocol.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoaderCode(pub i32);

impl LoaderCode {
    /// Success.
    pub const OK: Self = Self(0);
    /// Unknown error.
    pub const ERR: Self = Self(-1);
    /// Thread detached from the VM.
    pub const EDETACHED: Self = Self(-2);
    /// Requested version is not supported.
    pub const EVERSION: Self = Self(-3);

    /// Map an initialization outcome to the status reported back to the loader.
    #[must_use]
    pub fn of<T, E>(result: &std::result::Result<T, E>) -> Self {
        if result.is_ok() {
            Self::OK
        } else {
            Self::ERR
        }
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.0
    }

    /// Symbolic name of the code.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self.0 {
            0 => "JNI_OK",
            -1 => "JNI_ERR",
            -2 => "JNI_EDETACHED",
            -3 => "JNI_EVERSION",
            -4 => "JNI_ENOMEM",
            -5 => "JNI_EEXIST",
            -6 => "JNI_EINVAL",
            _ => "unknown status",
        }
    }
}

impl fmt::Debug for LoaderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LoaderCode({}, {})", self.0, self.name())
    }
}

impl fmt::Display for LoaderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

/// Supplies the tool interface handle.
pub trait AttachmentProvider {
    /// Handle type produced by this provider.
    type Interface: ToolInterface;

    /// Obtain an interface handle for `version`.
    ///
    /// `Ok(None)` means the call reported success but produced no handle.
    ///
    /// # Errors
    ///
    /// Returns the loader status code when the host refuses the request.
    fn get_interface(
        &self,
        version: InterfaceVersion,
    ) -> std::result::Result<Option<Self::Interface>, LoaderCode>;
}
