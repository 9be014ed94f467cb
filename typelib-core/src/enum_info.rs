use std::sync::Arc;

use crate::handle::{InfoHandle, Kind};
use crate::gtype::GType;
use crate::offsets;
use crate::registered_type;
use crate::tags::TypeTag;

mod layout {
	pub const N_VALUES: u32 = 0;
	pub const STORAGE_TYPE: u32 = 2;
	pub const GTYPE_NAME: u32 = 4;
	pub const GTYPE_INIT: u32 = 8;
}

pub const ENUM_BLOB_SIZE: u32 = 12;

impl InfoHandle {
	pub fn enum_n_values(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Enum);
		self.read_u16(layout::N_VALUES) as u32
	}

	pub fn enum_value(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Enum);
		if n >= self.enum_n_values() {
			return None;
		}
		let offset = offsets::enum_value_offset(self.offset(), self.header(), n);
		Some(self.child(Kind::Value, offset))
	}

	/// Raw storage-type tag, exactly as stored. Per the design notes, this
	/// is never sign-normalized — a C compiler's choice of signed vs.
	/// unsigned backing type for the enum is preserved verbatim.
	pub fn enum_storage_type(&self) -> TypeTag {
		debug_assert_eq!(self.kind(), Kind::Enum);
		let raw = self.read_u8(layout::STORAGE_TYPE);
		TypeTag::from_repr(raw as usize)
			.unwrap_or_else(|| panic!("malformed blob: unknown enum storage type tag {raw}"))
	}

	pub fn enum_type_name(&self) -> Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Enum);
		registered_type::type_name(self, layout::GTYPE_NAME)
	}

	pub fn enum_type_init(&self) -> Option<Arc<str>> {
		debug_assert_eq!(self.kind(), Kind::Enum);
		registered_type::type_init(self, layout::GTYPE_INIT)
	}

	pub fn enum_get_g_type(&self) -> GType {
		debug_assert_eq!(self.kind(), Kind::Enum);
		registered_type::g_type(self, layout::GTYPE_INIT, layout::GTYPE_NAME)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::fixtures::enum_fixture;

	#[test]
	fn walks_values_in_order() {
		let handle = enum_fixture(
			"E",
			TypeTag::Int8,
			&[("A", 0), ("B", 1), ("C", -2)],
		);
		assert_eq!(handle.enum_n_values(), 3);
		assert_eq!(handle.enum_storage_type(), TypeTag::Int8);
		let c = handle.enum_value(2).unwrap();
		assert_eq!(&*c.value_name(), "C");
		assert_eq!(c.value_value(), -2);
		assert!(handle.enum_value(3).is_none());
	}
}
