//! Optional tool interface capabilities.
//!
//! A capability must be requested and granted before the functionality it guards can be used.
//! The host reports a *potential* set (what it could grant), the agent requests a subset, and
//! the host then reports the *granted* set. [`Capabilities`] models all three as the same flag
//! set, one bit per capability in the order the interface declares them.

use bitflags::bitflags;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    /// Set of tool interface capabilities
    pub struct Capabilities: u64 {
        /// Can set and get tags
        const CAN_TAG_OBJECTS = 1 << 0;
        /// Can set watchpoints on field modification
        const CAN_GENERATE_FIELD_MODIFICATION_EVENTS = 1 << 1;
        /// Can set watchpoints on field access
        const CAN_GENERATE_FIELD_ACCESS_EVENTS = 1 << 2;
        /// Can get bytecodes of a method
        const CAN_GET_BYTECODES = 1 << 3;
        /// Can test if a field or method is synthetic
        const CAN_GET_SYNTHETIC_ATTRIBUTE = 1 << 4;
        /// Can get information about ownership of monitors
        const CAN_GET_OWNED_MONITOR_INFO = 1 << 5;
        /// Can get the current contended monitor
        const CAN_GET_CURRENT_CONTENDED_MONITOR = 1 << 6;
        /// Can get information about a monitor
        const CAN_GET_MONITOR_INFO = 1 << 7;
        /// Can pop frames off the stack
        const CAN_POP_FRAME = 1 << 8;
        /// Can redefine classes
        const CAN_REDEFINE_CLASSES = 1 << 9;
        /// Can send stop or interrupt to threads
        const CAN_SIGNAL_THREAD = 1 << 10;
        /// Can get the source file name of a class
        const CAN_GET_SOURCE_FILE_NAME = 1 << 11;
        /// Can get the line number table of a method
        const CAN_GET_LINE_NUMBERS = 1 << 12;
        /// Can get the source debug extension of a class
        const CAN_GET_SOURCE_DEBUG_EXTENSION = 1 << 13;
        /// Can set and get local variables
        const CAN_ACCESS_LOCAL_VARIABLES = 1 << 14;
        /// Can return methods in the order they occur in the class file
        const CAN_MAINTAIN_ORIGINAL_METHOD_ORDER = 1 << 15;
        /// Can get single step events
        const CAN_GENERATE_SINGLE_STEP_EVENTS = 1 << 16;
        /// Can get exception thrown and exception catch events
        const CAN_GENERATE_EXCEPTION_EVENTS = 1 << 17;
        /// Can set and thus get frame pop events
        const CAN_GENERATE_FRAME_POP_EVENTS = 1 << 18;
        /// Can set and thus get breakpoint events
        const CAN_GENERATE_BREAKPOINT_EVENTS = 1 << 19;
        /// Can suspend and resume threads
        const CAN_SUSPEND = 1 << 20;
        /// Can modify (retransform or redefine) any modifiable class
        const CAN_REDEFINE_ANY_CLASS = 1 << 21;
        /// Can get current thread CPU time
        const CAN_GET_CURRENT_THREAD_CPU_TIME = 1 << 22;
        /// Can get thread CPU time
        const CAN_GET_THREAD_CPU_TIME = 1 << 23;
        /// Can generate method entry events on entering a method
        const CAN_GENERATE_METHOD_ENTRY_EVENTS = 1 << 24;
        /// Can generate method exit events on leaving a method
        const CAN_GENERATE_METHOD_EXIT_EVENTS = 1 << 25;
        /// Can generate class file load hook events for every loaded class
        const CAN_GENERATE_ALL_CLASS_HOOK_EVENTS = 1 << 26;
        /// Can generate events when a method is compiled or unloaded
        const CAN_GENERATE_COMPILED_METHOD_LOAD_EVENTS = 1 << 27;
        /// Can generate events on monitor activity
        const CAN_GENERATE_MONITOR_EVENTS = 1 << 28;
        /// Can generate events on VM allocation of an object
        const CAN_GENERATE_VM_OBJECT_ALLOC_EVENTS = 1 << 29;
        /// Can generate events when a native method is bound to its implementation
        const CAN_GENERATE_NATIVE_METHOD_BIND_EVENTS = 1 << 30;
        /// Can generate events when garbage collection begins or ends
        const CAN_GENERATE_GARBAGE_COLLECTION_EVENTS = 1 << 31;
        /// Can generate events when the garbage collector frees an object
        const CAN_GENERATE_OBJECT_FREE_EVENTS = 1 << 32;
        /// Can return early from a method
        const CAN_FORCE_EARLY_RETURN = 1 << 33;
        /// Can get information about owned monitors with stack depth
        const CAN_GET_OWNED_MONITOR_STACK_DEPTH_INFO = 1 << 34;
        /// Can get the constant pool of a class
        const CAN_GET_CONSTANT_POOL = 1 << 35;
        /// Can set prefix to be applied when native method cannot be resolved
        const CAN_SET_NATIVE_METHOD_PREFIX = 1 << 36;
        /// Can retransform classes
        const CAN_RETRANSFORM_CLASSES = 1 << 37;
        /// Can retransform any modifiable class
        const CAN_RETRANSFORM_ANY_CLASS = 1 << 38;
        /// Can generate events when the VM is unable to allocate heap memory
        const CAN_GENERATE_RESOURCE_EXHAUSTION_HEAP_EVENTS = 1 << 39;
        /// Can generate events when the VM is unable to create a thread
        const CAN_GENERATE_RESOURCE_EXHAUSTION_THREADS_EVENTS = 1 << 40;
        /// Can generate events in the primordial phase
        const CAN_GENERATE_EARLY_VMSTART = 1 << 41;
        /// Can generate class load hook events in the primordial phase
        const CAN_GENERATE_EARLY_CLASS_HOOK_EVENTS = 1 << 42;
        /// Can generate sampled allocation events
        const CAN_GENERATE_SAMPLED_OBJECT_ALLOC_EVENTS = 1 << 43;
        /// Can support virtual threads
        const CAN_SUPPORT_VIRTUAL_THREADS = 1 << 44;
    }
}

impl Capabilities {
    /// Returns `true` if line number tables may be requested.
    #[must_use]
    pub fn can_get_line_numbers(&self) -> bool {
        self.contains(Capabilities::CAN_GET_LINE_NUMBERS)
    }
}
