use std::fmt::Debug;
use std::sync::Arc;

use crate::blob::Typelib;
use crate::handle::InfoHandle;

/// A type-init symbol, as looked up by [`Repository::lookup_symbol`]. Calling
/// it happens inside `registered_type::g_type`, since whether the call is
/// actually safe depends on the dynamic library that provided it —
/// something this crate has no way to verify.
pub type GTypeInitFn = unsafe extern "C" fn() -> usize;

/// The external collaborators this crate consumes but does not implement:
/// the string table, the cross-typelib directory, and symbol resolution for
/// runtime type registration. A caller plugs in its own loader/repository by
/// implementing this trait; everything in this crate is generic over it.
pub trait Repository: Debug {
	/// Looks up a NUL-terminated string stored in `typelib`'s string table
	/// at `offset`.
	fn string_at(&self, typelib: &Arc<Typelib>, offset: u32) -> Arc<str>;

	/// Resolves a directory entry index to the handle it names. The entry
	/// may live in a different typelib than `typelib`; returns `None` if the
	/// entry no longer exists (a dangling cross-reference).
	fn resolve(&self, typelib: &Arc<Typelib>, entry: u16) -> Option<InfoHandle>;

	/// Looks up a type-init symbol by name. Returns `None` if the dynamic
	/// library backing `typelib` does not export a symbol with this name.
	fn lookup_symbol(&self, typelib: &Arc<Typelib>, name: &str) -> Option<GTypeInitFn>;
}
