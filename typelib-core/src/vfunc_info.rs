use crate::flags::VFuncFlags;
use crate::handle::{InfoHandle, Kind};

mod layout {
	pub const FLAGS: u32 = 0;
	pub const STRUCT_OFFSET: u32 = 2;
	pub const SIGNAL: u32 = 4;
	pub const INVOKER: u32 = 6;
	pub const NAME: u32 = 8;
}

pub const VFUNC_BLOB_SIZE: u32 = 12;

/// Sentinel value of the `invoker` field meaning "no invoking method".
pub const NO_INVOKER: u16 = 1023;

impl InfoHandle {
	pub fn vfunc_flags(&self) -> VFuncFlags {
		debug_assert_eq!(self.kind(), Kind::VFunc);
		VFuncFlags::from_bits_truncate(self.read_u8(layout::FLAGS))
	}

	pub fn vfunc_offset(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::VFunc);
		self.read_u16(layout::STRUCT_OFFSET)
	}

	pub fn vfunc_name(&self) -> std::sync::Arc<str> {
		debug_assert_eq!(self.kind(), Kind::VFunc);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	/// The signal this vfunc is the class closure of, when
	/// [`VFuncFlags::CLASS_CLOSURE`] is set.
	pub fn vfunc_signal(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::VFunc);
		if !self.vfunc_flags().contains(VFuncFlags::CLASS_CLOSURE) {
			return None;
		}
		let index = self.read_u16(layout::SIGNAL) as u32;
		let container = self.container()?;
		match container.kind() {
			Kind::Object => container.object_signal(index),
			Kind::Interface => container.interface_signal(index),
			_ => None,
		}
	}

	/// The concrete method implementing this virtual function slot, if any
	/// (`invoker == 1023` means none).
	pub fn vfunc_invoker(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::VFunc);
		let invoker = self.read_u16(layout::INVOKER) & 0x3FF;
		if invoker == NO_INVOKER {
			return None;
		}
		let container = self.container()?;
		match container.kind() {
			Kind::Object => container.object_method(invoker as u32),
			Kind::Interface => container.interface_method(invoker as u32),
			Kind::Struct => container.struct_method(invoker as u32),
			Kind::Union => container.union_method(invoker as u32),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::fixtures::object_with_vfunc_fixture;

	#[test]
	fn invoker_sentinel_means_none() {
		let object = object_with_vfunc_fixture(NO_INVOKER);
		let vfunc = object.object_vfunc(0).unwrap();
		assert!(vfunc.vfunc_invoker().is_none());
	}
}
