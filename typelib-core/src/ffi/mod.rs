//! A thin C ABI over [`InfoHandle`], gated behind the `capi` feature.
//!
//! Handles cross this boundary as raw pointers produced by
//! [`handle::leak`]/[`handle::leak_opt`] and must be released with
//! [`handle::typelib_core_info_free`]. Strings cross as NUL-terminated,
//! heap-owned `char*` the caller must free with
//! [`typelib_core_string_free`].

mod handle;

pub use handle::typelib_core_info_free;

use std::ffi::CString;
use std::os::raw::{c_char, c_int};

use crate::handle::{InfoHandle, Kind};

fn into_c_string(s: std::sync::Arc<str>) -> *mut c_char {
	CString::new(&*s).map(CString::into_raw).unwrap_or(std::ptr::null_mut())
}

/// Frees a string previously returned by one of this module's accessors.
#[no_mangle]
pub unsafe extern "C" fn typelib_core_string_free(s: *mut c_char) {
	if !s.is_null() {
		drop(CString::from_raw(s));
	}
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_info_kind(info: *const InfoHandle) -> c_int {
	(*info).kind() as c_int
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_enum_n_values(info: *const InfoHandle) -> u32 {
	(*info).enum_n_values()
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_enum_value(info: *const InfoHandle, n: u32) -> *mut InfoHandle {
	handle::leak_opt((*info).enum_value(n))
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_value_name(info: *const InfoHandle) -> *mut c_char {
	into_c_string((*info).value_name())
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_value_value(info: *const InfoHandle) -> i64 {
	(*info).value_value()
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_object_find_method(
	info: *const InfoHandle,
	name: *const c_char,
) -> *mut InfoHandle {
	let Ok(name) = std::ffi::CStr::from_ptr(name).to_str() else {
		return std::ptr::null_mut();
	};
	match (*info).kind() {
		Kind::Object => handle::leak_opt((*info).object_find_method(name)),
		Kind::Interface => handle::leak_opt((*info).interface_find_method(name)),
		_ => std::ptr::null_mut(),
	}
}

#[no_mangle]
pub unsafe extern "C" fn typelib_core_function_symbol(info: *const InfoHandle) -> *mut c_char {
	match (*info).function_symbol() {
		Some(sym) => into_c_string(sym),
		None => std::ptr::null_mut(),
	}
}
