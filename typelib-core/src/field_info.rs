use crate::flags::FieldFlags;
use crate::handle::{InfoHandle, Kind};

pub(crate) mod layout {
	pub const FLAGS: u32 = 0;
	pub const HAS_EMBEDDED_TYPE: u32 = 1;
	pub const BITS: u32 = 2;
	pub const STRUCT_OFFSET: u32 = 4;
	pub const NAME: u32 = 8;
	pub const TYPE: u32 = 12;
}

pub const FIELD_BLOB_SIZE: u32 = 16;
pub const CALLBACK_BLOB_SIZE: u32 = 12;

impl InfoHandle {
	pub fn field_flags(&self) -> FieldFlags {
		debug_assert_eq!(self.kind(), Kind::Field);
		FieldFlags::from_bits_truncate(self.read_u8(layout::FLAGS))
	}

	pub fn field_has_embedded_type(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Field);
		self.read_u8(layout::HAS_EMBEDDED_TYPE) != 0
	}

	/// Size of the field, in bits.
	pub fn field_size(&self) -> u16 {
		debug_assert_eq!(self.kind(), Kind::Field);
		self.read_u16(layout::BITS)
	}

	/// Byte offset of the field within its containing C struct.
	pub fn field_offset(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Field);
		self.read_u32(layout::STRUCT_OFFSET)
	}

	pub fn field_name(&self) -> std::sync::Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Field);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	/// The field's type. When [`InfoHandle::field_has_embedded_type`] is
	/// true, the returned handle addresses the embedded Callback record
	/// trailing this Field rather than an ordinary type slot.
	pub fn field_type(&self) -> InfoHandle {
		debug_assert_eq!(self.kind(), Kind::Field);
		if self.field_has_embedded_type() {
			let offset = self.offset() + self.header().field_blob_size as u32;
			self.child_type(offset).with_embedded_type(true)
		} else {
			self.child_type(self.offset() + layout::TYPE)
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use crate::blob::Typelib;
	use crate::handle::Kind;
	use crate::header::Header;
	use crate::testing::{handle_at, test_header, TestRepository};

	/// `field_blob_size` padded well past the module's own `FIELD_BLOB_SIZE`
	/// constant: the embedded callback must be located via the header, not
	/// via the hard-coded constant, or this read lands in the padding.
	#[test]
	fn embedded_type_offset_follows_header_field_blob_size() {
		let padded_field_size = FIELD_BLOB_SIZE + 8;
		let header = Header { field_blob_size: padded_field_size as u16, ..test_header() };

		let mut data = vec![0u8; padded_field_size as usize + 4];
		data[1] = 1; // has_embedded_type
		data[padded_field_size as usize] = 32; // embedded callback blob_type

		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), header));
		let repo = TestRepository::build(Vec::new(), Vec::new());
		let field = handle_at(&repo, &typelib, Kind::Field, 0);

		let ty = field.field_type();
		assert!(ty.type_is_embedded());
		assert_eq!(ty.offset(), padded_field_size);
	}
}
