//! The type-slot discriminator: deciding whether a "type" field is an
//! inline SimpleTypeBlob or a pointer to a larger TypeBlob, and dispatching
//! on the destination's own tag once it is.

use crate::handle::{InfoHandle, Kind};
use crate::tags::{ArrayType, TypeTag};

/// Byte layout of the larger TypeBlob shapes a type slot may point to, all
/// sharing a leading `tag: u8` at offset 0.
mod layout {
	pub const TAG: u32 = 0;

	// ArrayTypeBlob
	pub const ARRAY_FLAGS: u32 = 1;
	pub const ARRAY_ARRAY_TYPE: u32 = 2;
	pub const ARRAY_LENGTH: u32 = 4;
	pub const ARRAY_FIXED_SIZE: u32 = 8;
	pub const ARRAY_PARAM: u32 = 12;

	pub const ARRAY_FLAG_HAS_LENGTH: u8 = 0x1;
	pub const ARRAY_FLAG_HAS_SIZE: u8 = 0x2;
	pub const ARRAY_FLAG_ZERO_TERMINATED: u8 = 0x4;

	// ParamTypeBlob (GList, GSList, GHash)
	pub const PARAM_HEADER_SIZE: u32 = 4;

	// InterfaceTypeBlob
	pub const INTERFACE_ENTRY: u32 = 2;

	// ErrorTypeBlob
	pub const ERROR_N_DOMAINS: u32 = 1;
	pub const ERROR_DOMAINS: u32 = 4;
}

/// The blob-type tag a Field's embedded type record is expected to carry.
/// Lives in its own namespace from [`TypeTag`] — it tags a *record kind*
/// (there is currently only one: Callback), not a value type.
const EMBEDDED_CALLBACK_BLOB_TYPE: u8 = 32;

enum Shape {
	/// `bool` is the SimpleTypeBlob's own `pointer` bit — set for
	/// pointer-like scalars such as Utf8/Filename/GType even though they
	/// take the inline (non-indirected) shape.
	Simple(TypeTag, bool),
	Array(u32),
	Param(TypeTag, u32),
	Interface(u32),
	Error(u32),
	EmbeddedCallback,
}

impl InfoHandle {
	fn shape(&self) -> Shape {
		if self.type_is_embedded() {
			let blob_type = self.read_u8(layout::TAG) & 0x1F;
			if blob_type != EMBEDDED_CALLBACK_BLOB_TYPE {
				panic!("malformed blob: embedded type slot names unsupported blob_type {blob_type}");
			}
			return Shape::EmbeddedCallback;
		}

		let word = self.read_u32(0);
		let reserved = word & 0xFF;
		let reserved2 = (word >> 8) & 0xFFFF;

		if reserved == 0 && reserved2 == 0 {
			let tag_bits = ((word >> 25) & 0x1F) as u8;
			let pointer_bit = (word >> 24) & 0x1 != 0;
			let tag = TypeTag::from_repr(tag_bits as usize)
				.unwrap_or_else(|| panic!("malformed blob: unknown simple type tag {tag_bits}"));
			return Shape::Simple(tag, pointer_bit);
		}

		let dest = word;
		let tag_byte = crate::blob::read_u8(self.data(), dest + layout::TAG) & 0x1F;
		let tag = TypeTag::from_repr(tag_byte as usize)
			.unwrap_or_else(|| panic!("malformed blob: unknown type-blob tag {tag_byte}"));

		match tag {
			TypeTag::Array => Shape::Array(dest),
			TypeTag::GList | TypeTag::GSList | TypeTag::GHash => Shape::Param(tag, dest),
			TypeTag::Interface => Shape::Interface(dest),
			TypeTag::Error => Shape::Error(dest),
			other => panic!("malformed blob: type-blob pointer names non-boxed tag {other:?}"),
		}
	}

	/// Whether this type slot names a pointer-typed value: either a boxed
	/// shape (Array/Interface/GList/GSList/GHash/Error), or an inline
	/// SimpleTypeBlob whose own `pointer` bit is set (Utf8, Filename, GType).
	pub fn is_pointer(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Type);
		!matches!(self.shape(), Shape::Simple(_, false))
	}

	pub fn get_tag(&self) -> TypeTag {
		debug_assert_eq!(self.kind(), Kind::Type);
		match self.shape() {
			Shape::Simple(tag, _) => tag,
			Shape::Array(_) => TypeTag::Array,
			Shape::Param(tag, _) => tag,
			Shape::Interface(_) => TypeTag::Interface,
			Shape::Error(_) => TypeTag::Error,
			Shape::EmbeddedCallback => TypeTag::Interface,
		}
	}

	/// Parameter type `n` of an array/list/hash type; `None` for any other
	/// shape or out-of-range `n`.
	pub fn get_param_type(&self, n: u32) -> Option<InfoHandle> {
		match self.shape() {
			Shape::Array(dest) if n == 0 => Some(self.child_type(dest + layout::ARRAY_PARAM)),
			Shape::Param(TypeTag::GHash, dest) if n < 2 => {
				Some(self.child_type(dest + layout::PARAM_HEADER_SIZE + n * 4))
			}
			Shape::Param(_, dest) if n == 0 => {
				Some(self.child_type(dest + layout::PARAM_HEADER_SIZE))
			}
			_ => None,
		}
	}

	/// The referenced interface, for an Interface-tagged type slot.
	pub fn get_interface(&self) -> Option<InfoHandle> {
		match self.shape() {
			Shape::Interface(dest) => {
				let entry = crate::blob::read_u16(self.data(), dest + layout::INTERFACE_ENTRY);
				self.resolve_entry(entry)
			}
			_ => None,
		}
	}

	pub fn get_array_length(&self) -> i32 {
		match self.shape() {
			Shape::Array(dest) => {
				let flags = crate::blob::read_u8(self.data(), dest + layout::ARRAY_FLAGS);
				if flags & layout::ARRAY_FLAG_HAS_LENGTH != 0 {
					crate::blob::read_i32(self.data(), dest + layout::ARRAY_LENGTH)
				} else {
					-1
				}
			}
			_ => -1,
		}
	}

	pub fn get_array_fixed_size(&self) -> i32 {
		match self.shape() {
			Shape::Array(dest) => {
				let flags = crate::blob::read_u8(self.data(), dest + layout::ARRAY_FLAGS);
				if flags & layout::ARRAY_FLAG_HAS_SIZE != 0 {
					crate::blob::read_i32(self.data(), dest + layout::ARRAY_FIXED_SIZE)
				} else {
					-1
				}
			}
			_ => -1,
		}
	}

	pub fn is_zero_terminated(&self) -> bool {
		match self.shape() {
			Shape::Array(dest) => {
				let flags = crate::blob::read_u8(self.data(), dest + layout::ARRAY_FLAGS);
				flags & layout::ARRAY_FLAG_ZERO_TERMINATED != 0
			}
			_ => false,
		}
	}

	pub fn get_array_type(&self) -> Option<ArrayType> {
		match self.shape() {
			Shape::Array(dest) => {
				let raw = crate::blob::read_u8(self.data(), dest + layout::ARRAY_ARRAY_TYPE);
				ArrayType::from_repr(raw as usize)
			}
			_ => None,
		}
	}

	pub fn get_n_error_domains(&self) -> u32 {
		match self.shape() {
			Shape::Error(dest) => crate::blob::read_u8(self.data(), dest + layout::ERROR_N_DOMAINS) as u32,
			_ => 0,
		}
	}

	pub fn get_error_domain(&self, n: u32) -> Option<InfoHandle> {
		match self.shape() {
			Shape::Error(dest) if n < self.get_n_error_domains() => {
				let entry = crate::blob::read_u16(self.data(), dest + layout::ERROR_DOMAINS + n * 2);
				self.resolve_entry(entry)
			}
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use crate::tags::ArrayType;
	use crate::testing::fixtures::array_type_field_fixture;

	#[test]
	fn array_type_reports_length_and_element() {
		let field = array_type_field_fixture();
		let ty = field.field_type();
		assert!(ty.is_pointer());
		assert_eq!(ty.get_array_type(), Some(ArrayType::C));
		assert_eq!(ty.get_array_length(), 2);
		assert_eq!(ty.get_array_fixed_size(), -1);
		assert!(!ty.is_zero_terminated());
		let elem = ty.get_param_type(0).unwrap();
		assert_eq!(elem.get_tag(), crate::tags::TypeTag::UInt8);
	}
}
