//! `get_type_name`/`get_type_init`/`get_g_type` are shared by every entity
//! kind that registers a runtime type (Enum, Object, Interface) — these
//! three accessors are a capability of a common "RegisteredType" base, not
//! a per-kind reimplementation. Each `*_info` module calls into these free
//! functions with the byte offset of its own `gtype_name`/`gtype_init`
//! fields rather than duplicating the symbol-lookup and interning logic.

use std::sync::Arc;

use crate::gtype::{intern_fundamental, GType};
use crate::handle::InfoHandle;

const INTERN_SENTINEL: &str = "intern";

pub(crate) fn type_name(handle: &InfoHandle, name_offset: u32) -> Arc<str> {
	let offset = handle.read_u32(name_offset);
	handle.string_at(offset)
}

pub(crate) fn type_init(handle: &InfoHandle, init_offset: u32) -> Option<Arc<str>> {
	let offset = handle.read_u32(init_offset);
	if offset == 0 {
		None
	} else {
		Some(handle.string_at(offset))
	}
}

#[cfg_attr(feature = "tracing", tracing::instrument(skip(handle)))]
pub(crate) fn g_type(handle: &InfoHandle, init_offset: u32, name_offset: u32) -> GType {
	let Some(init) = type_init(handle, init_offset) else {
		return GType::NONE;
	};
	if &*init == INTERN_SENTINEL {
		return intern_fundamental(&type_name(handle, name_offset));
	}
	match handle
		.repository()
		.lookup_symbol(handle.typelib(), &init)
	{
		// Safety: the caller's `Repository` implementation is responsible
		// for only handing back symbols that match this signature.
		Some(init_fn) => GType(unsafe { init_fn() }),
		None => GType::NONE,
	}
}
