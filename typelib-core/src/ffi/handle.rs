use crate::handle::InfoHandle;

/// Releases a handle obtained from any `typelib_core_*` accessor that
/// returns an owned pointer. Passing a pointer obtained any other way, or
/// freeing the same pointer twice, is undefined behavior.
#[no_mangle]
pub unsafe extern "C" fn typelib_core_info_free(handle: *mut InfoHandle) {
	if !handle.is_null() {
		drop(Box::from_raw(handle));
	}
}

pub(crate) unsafe fn leak(handle: InfoHandle) -> *mut InfoHandle {
	Box::into_raw(Box::new(handle))
}

pub(crate) unsafe fn leak_opt(handle: Option<InfoHandle>) -> *mut InfoHandle {
	match handle {
		Some(handle) => leak(handle),
		None => std::ptr::null_mut(),
	}
}
