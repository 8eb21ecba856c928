//! In-memory reference host.
//!
//! [`SimulatedHost`] stands in for a running VM: it owns a small set of loaded classes, answers
//! method lookups against them, and hands out [`SimulatedInterface`] handles that implement the
//! tool interface with the documented semantics. Out of the box it is conforming, so a probe run
//! against it passes.
//!
//! Non-conforming behavior is injected in two ways:
//!
//! - [`HostFaults`] makes the attach and capability negotiation steps fail.
//! - Line table hooks ([`SimulatedHost::with_line_table_hook`]) inspect each request before the
//!   host validates it and may replace the outcome with any error code, or with success by
//!   returning [`ErrorCode::NONE`].
//!
//! Every `line_number_table` call is recorded, well-formed or not, and can be read back through
//! [`SimulatedInterface::calls`].
//!
//! # Examples
//!
//! ```rust
//! use lineprobe::host::sim::SimulatedHost;
//! use lineprobe::host::{ClassRef, ErrorCode, MethodResolver};
//!
//! let host = SimulatedHost::conforming("demo.Target")
//!     .with_line_table_hook(|request| request.method.is_null().then_some(ErrorCode::NONE));
//!
//! let class = ClassRef::new("demo.Target");
//! assert!(host.method_id(&class, "<init>", "()V").is_some());
//! ```

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use crate::host::{
    AttachmentProvider, Capabilities, ClassRef, ErrorCode, HostResult, InterfaceVersion,
    LineNumberEntry, LineNumberTable, LineTableRequest, LoaderCode, MethodId, MethodResolver,
    ToolInterface,
};

/// A method of a simulated class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimMethod {
    /// Method name, `<init>` for constructors.
    pub name: String,
    /// Method descriptor, e.g. `()V`.
    pub signature: String,
    /// Native methods have no line number table.
    pub native: bool,
    /// Line data, `None` when the class was compiled without it.
    pub lines: Option<LineNumberTable>,
}

impl SimMethod {
    /// A bytecode method with the given line table.
    pub fn new(
        name: impl Into<String>,
        signature: impl Into<String>,
        lines: Vec<LineNumberEntry>,
    ) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            native: false,
            lines: Some(LineNumberTable(lines)),
        }
    }

    /// A native method.
    pub fn native(name: impl Into<String>, signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signature: signature.into(),
            native: true,
            lines: None,
        }
    }

    /// Strip the line data, as compiling without debug information would.
    #[must_use]
    pub fn without_lines(mut self) -> Self {
        self.lines = None;
        self
    }
}

/// A loaded class of the simulated host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimClass {
    /// Binary class name.
    pub name: String,
    /// Declared methods, in declaration order.
    pub methods: Vec<SimMethod>,
}

impl SimClass {
    /// An empty class.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    /// A class declaring only the implicit no-argument constructor.
    pub fn with_default_constructor(name: impl Into<String>) -> Self {
        Self::new(name).method(SimMethod::new(
            "<init>",
            "()V",
            vec![LineNumberEntry {
                start_location: 0,
                line_number: 1,
            }],
        ))
    }

    /// Add a method.
    #[must_use]
    pub fn method(mut self, method: SimMethod) -> Self {
        self.methods.push(method);
        self
    }
}

/// Failures injected into attach and capability negotiation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostFaults {
    /// Status returned by `GetEnv` instead of a handle.
    pub attach: Option<LoaderCode>,
    /// `GetEnv` reports success but produces no handle.
    pub missing_interface: bool,
    /// Error returned by `GetPotentialCapabilities`.
    pub potential_capabilities: Option<ErrorCode>,
    /// Error returned by `AddCapabilities`.
    pub add_capabilities: Option<ErrorCode>,
    /// Error returned by `GetCapabilities`.
    pub get_capabilities: Option<ErrorCode>,
}

type LineTableHook = Arc<dyn Fn(&LineTableRequest) -> Option<ErrorCode> + Send + Sync>;

/// The simulated VM.
#[derive(Clone)]
pub struct SimulatedHost {
    classes: Vec<SimClass>,
    potential: Capabilities,
    faults: HostFaults,
    hooks: Vec<LineTableHook>,
}

impl SimulatedHost {
    /// A conforming host with no classes loaded and every capability available.
    #[must_use]
    pub fn new() -> Self {
        Self {
            classes: Vec::new(),
            potential: Capabilities::all(),
            faults: HostFaults::default(),
            hooks: Vec::new(),
        }
    }

    /// A conforming host with `class_name` loaded, declaring a default constructor.
    pub fn conforming(class_name: impl Into<String>) -> Self {
        Self::new().with_class(SimClass::with_default_constructor(class_name))
    }

    /// Load a class.
    #[must_use]
    pub fn with_class(mut self, class: SimClass) -> Self {
        self.classes.push(class);
        self
    }

    /// Remove `capabilities` from the potential set.
    #[must_use]
    pub fn without_capability(mut self, capabilities: Capabilities) -> Self {
        self.potential.remove(capabilities);
        self
    }

    /// Inject negotiation failures.
    #[must_use]
    pub fn with_faults(mut self, faults: HostFaults) -> Self {
        self.faults = faults;
        self
    }

    /// Register a hook consulted before each line table request is validated.
    ///
    /// Hooks run in registration order and the first one returning `Some` decides the outcome.
    /// Requests reach hooks only once `CAN_GET_LINE_NUMBERS` has been granted.
    #[must_use]
    pub fn with_line_table_hook<F>(mut self, hook: F) -> Self
    where
        F: Fn(&LineTableRequest) -> Option<ErrorCode> + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SimulatedHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedHost")
            .field("classes", &self.classes.len())
            .field("potential", &self.potential)
            .field("faults", &self.faults)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

fn encode_method_id(class_index: usize, method_index: usize) -> MethodId {
    MethodId::new(((class_index as u64 + 1) << 32) | (method_index as u64 + 1))
}

fn find_method(classes: &[SimClass], id: MethodId) -> Option<&SimMethod> {
    if id.is_null() {
        return None;
    }
    let class_index = usize::try_from(id.value() >> 32).ok()?.checked_sub(1)?;
    let method_index = usize::try_from(id.value() & 0xFFFF_FFFF)
        .ok()?
        .checked_sub(1)?;
    classes.get(class_index)?.methods.get(method_index)
}

impl MethodResolver for SimulatedHost {
    fn method_id(&self, class: &ClassRef, name: &str, signature: &str) -> Option<MethodId> {
        let (class_index, sim_class) = self
            .classes
            .iter()
            .enumerate()
            .find(|(_, candidate)| candidate.name == class.name())?;
        let method_index = sim_class
            .methods
            .iter()
            .position(|method| method.name == name && method.signature == signature)?;
        Some(encode_method_id(class_index, method_index))
    }
}

impl AttachmentProvider for SimulatedHost {
    type Interface = SimulatedInterface;

    fn get_interface(
        &self,
        version: InterfaceVersion,
    ) -> std::result::Result<Option<SimulatedInterface>, LoaderCode> {
        if let Some(code) = self.faults.attach {
            return Err(code);
        }
        if version.0 & 0xF000_0000 != InterfaceVersion::INTERFACE_TAG || version.major() != 1 {
            return Err(LoaderCode::EVERSION);
        }
        if self.faults.missing_interface {
            return Ok(None);
        }

        Ok(Some(SimulatedInterface {
            classes: Arc::new(self.classes.clone()),
            potential: self.potential,
            faults: self.faults.clone(),
            hooks: self.hooks.clone(),
            granted: Mutex::new(Capabilities::empty()),
            calls: Mutex::new(Vec::new()),
        }))
    }
}

/// Tool interface handle of a [`SimulatedHost`].
pub struct SimulatedInterface {
    classes: Arc<Vec<SimClass>>,
    potential: Capabilities,
    faults: HostFaults,
    hooks: Vec<LineTableHook>,
    granted: Mutex<Capabilities>,
    calls: Mutex<Vec<LineTableRequest>>,
}

impl SimulatedInterface {
    /// Every line table request received so far, in order.
    #[must_use]
    pub fn calls(&self) -> Vec<LineTableRequest> {
        lock!(self.calls).clone()
    }

    /// Number of line table requests received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        lock!(self.calls).len()
    }

    fn validate(&self, request: &LineTableRequest) -> HostResult<LineNumberTable> {
        let method =
            find_method(&self.classes, request.method).ok_or(ErrorCode::INVALID_METHODID)?;

        if request.entry_count.is_absent() || request.table.is_absent() {
            return Err(ErrorCode::NULL_POINTER);
        }
        if method.native {
            return Err(ErrorCode::NATIVE_METHOD);
        }

        method.lines.clone().ok_or(ErrorCode::ABSENT_INFORMATION)
    }
}

impl fmt::Debug for SimulatedInterface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimulatedInterface")
            .field("potential", &self.potential)
            .field("granted", &*lock!(self.granted))
            .field("calls", &self.call_count())
            .finish_non_exhaustive()
    }
}

impl ToolInterface for SimulatedInterface {
    fn potential_capabilities(&self) -> HostResult<Capabilities> {
        match self.faults.potential_capabilities {
            Some(code) => Err(code),
            None => Ok(self.potential),
        }
    }

    fn add_capabilities(&self, requested: Capabilities) -> HostResult<()> {
        if let Some(code) = self.faults.add_capabilities {
            return Err(code);
        }
        if !self.potential.contains(requested) {
            return Err(ErrorCode::NOT_AVAILABLE);
        }

        lock!(self.granted).insert(requested);
        Ok(())
    }

    fn capabilities(&self) -> HostResult<Capabilities> {
        match self.faults.get_capabilities {
            Some(code) => Err(code),
            None => Ok(*lock!(self.granted)),
        }
    }

    fn line_number_table(&self, request: &LineTableRequest) -> HostResult<LineNumberTable> {
        lock!(self.calls).push(*request);

        if !lock!(self.granted).can_get_line_numbers() {
            return Err(ErrorCode::MUST_POSSESS_CAPABILITY);
        }

        if let Some(code) = self.hooks.iter().find_map(|hook| hook(request)) {
            return if code.is_none() {
                Ok(LineNumberTable::default())
            } else {
                Err(code)
            };
        }

        self.validate(request)
    }
}
