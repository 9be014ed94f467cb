use bitflags::bitflags;

use crate::field_info;
use crate::handle::{InfoHandle, Kind};
use crate::namecache;
use crate::offsets;

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	struct StructFlags: u8 {
		const FOREIGN = 0x1;
		const GTYPE_STRUCT = 0x2;
	}
}

mod layout {
	pub const FLAGS: u32 = 0;
	pub const SIZE: u32 = 2;
	pub const ALIGNMENT: u32 = 4;
	pub const N_FIELDS: u32 = 6;
	pub const N_METHODS: u32 = 8;
}

pub const STRUCT_BLOB_SIZE: u32 = 12;

impl InfoHandle {
	pub fn struct_size(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::Struct);
		self.read_u16(layout::SIZE)
	}

	pub fn struct_alignment(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::Struct);
		self.read_u16(layout::ALIGNMENT)
	}

	pub fn struct_is_foreign(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Struct);
		StructFlags::from_bits_truncate(self.read_u8(layout::FLAGS)).contains(StructFlags::FOREIGN)
	}

	pub fn struct_is_gtype_struct(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Struct);
		StructFlags::from_bits_truncate(self.read_u8(layout::FLAGS)).contains(StructFlags::GTYPE_STRUCT)
	}

	pub fn struct_n_fields(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Struct);
		self.read_u16(layout::N_FIELDS) as u32
	}

	pub fn struct_n_methods(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Struct);
		self.read_u16(layout::N_METHODS) as u32
	}

	fn struct_field_has_embedded(&self, i: u32) -> bool {
		let offset = offsets::struct_field_offset(self.offset(), self.header(), i, |j| {
			self.struct_field_has_embedded(j)
		});
		crate::blob::read_u8(self.data(), offset + field_info::layout::HAS_EMBEDDED_TYPE) != 0
	}

	pub fn struct_field(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Struct);
		if n >= self.struct_n_fields() {
			return None;
		}
		let offset = offsets::struct_field_offset(self.offset(), self.header(), n, |i| {
			self.struct_field_has_embedded(i)
		});
		Some(self.child(Kind::Field, offset))
	}

	pub fn struct_method(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Struct);
		if n >= self.struct_n_methods() {
			return None;
		}
		let offset = offsets::struct_method_offset(
			self.offset(),
			self.header(),
			self.struct_n_fields(),
			|i| self.struct_field_has_embedded(i),
			n,
		);
		Some(self.child(Kind::Function, offset))
	}

	pub fn struct_find_method(&self, name: &str) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Struct);
		let n_fields = self.struct_n_fields();
		let fields_end = offsets::struct_field_offset(self.offset(), self.header(), n_fields, |i| {
			self.struct_field_has_embedded(i)
		});
		let size = self.header().function_blob_size as u32;
		let found = namecache::find_by_name(
			self,
			self.struct_n_methods(),
			|i| fields_end + i * size,
			|i| self.child(Kind::Function, fields_end + i * size).function_name(),
			name,
		)?;
		Some(self.child(Kind::Function, found))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::fixtures::struct_fixture;
	use crate::tags::TypeTag;

	#[test]
	fn embedded_callback_pushes_method_section() {
		let handle = struct_fixture(
			&[("x", TypeTag::Int32, false), ("cb", TypeTag::Interface, true)],
			&["m"],
		);
		let method = handle.struct_find_method("m").unwrap();
		assert_eq!(&*method.function_name(), "m");
		assert!(handle.struct_find_method("nope").is_none());

		let cb_field = handle.struct_field(1).unwrap();
		assert!(cb_field.field_has_embedded_type());
		assert_eq!(cb_field.field_type().get_tag(), TypeTag::Interface);
	}
}
