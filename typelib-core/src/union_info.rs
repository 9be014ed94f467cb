use bitflags::bitflags;

use crate::handle::{InfoHandle, Kind};
use crate::namecache;
use crate::offsets::{self, UNION_DISCRIMINATOR_TYPE_OFFSET};

bitflags! {
	#[derive(Debug, Copy, Clone, Eq, PartialEq)]
	struct UnionFlags: u8 {
		const DISCRIMINATED = 0x1;
	}
}

mod layout {
	pub const FLAGS: u32 = 0;
	pub const SIZE: u32 = 2;
	pub const ALIGNMENT: u32 = 4;
	pub const N_FIELDS: u32 = 6;
	pub const N_FUNCTIONS: u32 = 8;
	pub const DISCRIMINATOR_OFFSET: u32 = 12;
}

pub const UNION_BLOB_SIZE: u32 = 28;

impl InfoHandle {
	pub fn union_size(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.read_u16(layout::SIZE)
	}

	pub fn union_alignment(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.read_u16(layout::ALIGNMENT)
	}

	pub fn union_is_discriminated(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Union);
		UnionFlags::from_bits_truncate(self.read_u8(layout::FLAGS)).contains(UnionFlags::DISCRIMINATED)
	}

	pub fn union_discriminator_offset(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.read_u32(layout::DISCRIMINATOR_OFFSET)
	}

	pub fn union_discriminator_type(&self) -> InfoHandle {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.child_type(self.offset() + UNION_DISCRIMINATOR_TYPE_OFFSET)
	}

	pub fn union_n_fields(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.read_u16(layout::N_FIELDS) as u32
	}

	pub fn union_n_methods(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Union);
		self.read_u16(layout::N_FUNCTIONS) as u32
	}

	pub fn union_field(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Union);
		if n >= self.union_n_fields() {
			return None;
		}
		let offset = offsets::union_field_offset(self.offset(), self.header(), n);
		Some(self.child(Kind::Field, offset))
	}

	pub fn union_method(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Union);
		if n >= self.union_n_methods() {
			return None;
		}
		let offset = offsets::union_method_offset(self.offset(), self.header(), self.union_n_fields(), n);
		Some(self.child(Kind::Function, offset))
	}

	pub fn union_find_method(&self, name: &str) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Union);
		let n_fields = self.union_n_fields();
		let base = self.offset();
		let header = self.header();
		let size = header.function_blob_size as u32;
		let methods_start = offsets::union_method_offset(base, header, n_fields, 0);
		let found = namecache::find_by_name(
			self,
			self.union_n_methods(),
			|i| methods_start + i * size,
			|i| self.child(Kind::Function, methods_start + i * size).function_name(),
			name,
		)?;
		Some(self.child(Kind::Function, found))
	}

	/// The `n`th discriminator constant; only meaningful when
	/// [`InfoHandle::union_is_discriminated`] is true.
	pub fn union_discriminator(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Union);
		if !self.union_is_discriminated() || n >= self.union_n_fields() {
			return None;
		}
		let offset = offsets::union_discriminator_offset(
			self.offset(),
			self.header(),
			self.union_n_fields(),
			self.union_n_methods(),
			n,
		);
		Some(self.child(Kind::Constant, offset))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::tags::TypeTag;
	use crate::testing::fixtures::union_fixture;

	#[test]
	fn discriminated_union_exposes_discriminator_constants() {
		let handle = union_fixture(2, 0, TypeTag::Int32, &[10, 20]);
		assert!(handle.union_is_discriminated());
		let second = handle.union_discriminator(1).unwrap();
		assert_eq!(second.constant_value().unwrap().as_i64(), Some(20));
		assert_eq!(handle.union_discriminator_type().get_tag(), TypeTag::Int32);
	}
}
