use bitflags::bitflags;

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct FieldFlags: u8 {
		/// The field can be read.
		const READABLE = 0x1;
		/// The field can be written.
		const WRITABLE = 0x2;
	}
}

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct PropertyFlags: u8 {
		/// The property can be read.
		const READABLE = 0x1;
		/// The property can be written.
		const WRITABLE = 0x2;
		/// The property's value is set at construction time.
		const CONSTRUCT = 0x4;
		/// The property's value can only be set at construction time.
		const CONSTRUCT_ONLY = 0x8;
	}
}

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct SignalFlags: u16 {
		/// Handlers run before the default handler.
		const RUN_FIRST = 0x1;
		/// Handlers run after the default handler.
		const RUN_LAST = 0x2;
		/// Handlers run after the default handler, during the cleanup stage.
		const RUN_CLEANUP = 0x4;
		/// Emission stops on the first handler that returns a falsy value;
		/// no further handlers run for this emission.
		const NO_RECURSE = 0x8;
		/// The signal takes a detail argument (`"signal::detail"`).
		const DETAILED = 0x10;
		/// The signal is an "action" signal, invokable as an ordinary method.
		const ACTION = 0x20;
		/// The signal has no hooks attached that would need cleanup.
		const NO_HOOKS = 0x40;
		/// Emission stops as soon as a handler returns true.
		const TRUE_STOPS_EMIT = 0x80;
		/// The signal has a class closure (an implementing vfunc).
		const HAS_CLASS_CLOSURE = 0x100;
	}
}

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	pub struct VFuncFlags: u8 {
		/// Implementations must chain up to the parent implementation.
		const MUST_CHAIN_UP = 0x1;
		/// Implementors are required to override this virtual function.
		const MUST_BE_IMPLEMENTED = 0x2;
		/// Implementors are forbidden from overriding this virtual function.
		const MUST_NOT_BE_IMPLEMENTED = 0x4;
		/// The virtual function may raise an error.
		const THROWS = 0x8;
		/// This virtual function is the class closure of a signal; its
		/// `signal` field names which one.
		const CLASS_CLOSURE = 0x10;
	}
}
