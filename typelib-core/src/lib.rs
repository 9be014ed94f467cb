//! A read-side navigator for compiled object-introspection metadata blobs.
//!
//! A [`Typelib`] wraps a loaded blob and its [`Header`]; an [`InfoHandle`]
//! is an offset into that blob tagged with a [`Kind`], mirroring the
//! uniform "base info" model real introspection repositories use instead
//! of a distinct Rust type per entity. Cross-references between entries
//! (parents, interfaces, field types, ...) are resolved through a
//! caller-supplied [`Repository`], since the blob alone cannot see across
//! namespaces.

mod blob;
mod constant_info;
mod enum_info;
mod error;
mod error_domain_info;
mod field_info;
mod flags;
mod function_info;
mod gtype;
mod handle;
mod header;
mod interface_info;
mod namecache;
mod object_info;
mod offsets;
mod property_info;
mod registered_type;
mod repository;
mod signal_info;
mod struct_info;
mod tags;
mod type_info;
mod union_info;
mod value_info;
mod vfunc_info;

#[cfg(feature = "capi")]
pub mod ffi;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

pub use blob::Typelib;
pub use constant_info::ConstantValue;
pub use error::DecodeError;
pub use flags::{FieldFlags, PropertyFlags, SignalFlags, VFuncFlags};
pub use gtype::GType;
pub use handle::{InfoHandle, Kind};
pub use header::Header;
pub use repository::{GTypeInitFn, Repository};
pub use tags::{ArrayType, TypeTag};
pub use vfunc_info::NO_INVOKER;
