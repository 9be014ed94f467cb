use std::sync::Arc;

use crate::error::DecodeError;
use crate::handle::{InfoHandle, Kind};
use crate::offsets::CONSTANT_TYPE_OFFSET;
use crate::tags::TypeTag;

mod layout {
	pub const NAME: u32 = 0;
	pub const SIZE: u32 = 4;
	pub const VALUE_OFFSET: u32 = 12;
}

pub const CONSTANT_BLOB_SIZE: u32 = 16;

/// A materialized constant value. Pointer-typed constants (boxed shapes, or
/// pointer-flagged simple scalars such as Utf8) are returned as the raw
/// bytes copied out of the blob rather than interpreted further — decoding
/// e.g. a UTF-8 string out of those bytes is left to the caller, which
/// knows the encoding the surrounding format actually uses.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
	Boolean(bool),
	Int8(i8),
	UInt8(u8),
	Int16(i16),
	UInt16(u16),
	Int32(i32),
	UInt32(u32),
	Int64(i64),
	UInt64(u64),
	Float(f32),
	Double(f64),
	/// `TypeTag::TimeT`, stored as the platform-independent 8-byte on-disk
	/// width documented on [`TypeTag`].
	TimeT(i64),
	Short(i16),
	UShort(u16),
	Int(i32),
	UInt(u32),
	Long(i64),
	ULong(u64),
	Pointer(Vec<u8>),
}

impl ConstantValue {
	/// Convenience accessor for the common case of a signed integral
	/// constant, widened to `i64`. `None` for floating-point or
	/// pointer-typed values.
	pub fn as_i64(&self) -> Option<i64> {
		match *self {
			ConstantValue::Boolean(v) => Some(v as i64),
			ConstantValue::Int8(v) => Some(v as i64),
			ConstantValue::UInt8(v) => Some(v as i64),
			ConstantValue::Int16(v) => Some(v as i64),
			ConstantValue::UInt16(v) => Some(v as i64),
			ConstantValue::Int32(v) => Some(v as i64),
			ConstantValue::UInt32(v) => Some(v as i64),
			ConstantValue::Int64(v) => Some(v),
			ConstantValue::UInt64(v) => Some(v as i64),
			ConstantValue::TimeT(v) => Some(v),
			ConstantValue::Short(v) => Some(v as i64),
			ConstantValue::UShort(v) => Some(v as i64),
			ConstantValue::Int(v) => Some(v as i64),
			ConstantValue::UInt(v) => Some(v as i64),
			ConstantValue::Long(v) => Some(v),
			ConstantValue::ULong(v) => Some(v as i64),
			_ => None,
		}
	}
}

impl InfoHandle {
	pub fn constant_name(&self) -> Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Constant);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	pub fn constant_type(&self) -> InfoHandle {
		debug_assert_eq!(self.kind(), Kind::Constant);
		self.child_type(self.offset() + CONSTANT_TYPE_OFFSET)
	}

	pub fn constant_size(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Constant);
		self.read_u32(layout::SIZE)
	}

	fn constant_value_offset(&self) -> u32 {
		self.read_u32(layout::VALUE_OFFSET)
	}

	/// Decodes the constant's value according to its inline type slot.
	/// Returns [`DecodeError::UnsupportedConstantType`] for a non-basic
	/// (interface/boxed) constant type, per the design notes.
	pub fn constant_value(&self) -> Result<ConstantValue, DecodeError> {
		debug_assert_eq!(self.kind(), Kind::Constant);
		let ty = self.constant_type();
		let tag = ty.get_tag();
		let data = self.data();
		let offset = self.constant_value_offset();

		if ty.is_pointer() && !tag.is_basic() {
			return Err(DecodeError::UnsupportedConstantType(tag));
		}
		if ty.is_pointer() {
			let size = self.constant_size();
			return Ok(ConstantValue::Pointer(
				crate::blob::read_bytes(data, offset, size).to_vec(),
			));
		}

		Ok(match tag {
			TypeTag::Boolean => ConstantValue::Boolean(crate::blob::read_u8(data, offset) != 0),
			TypeTag::Int8 => ConstantValue::Int8(crate::blob::read_i8(data, offset)),
			TypeTag::UInt8 => ConstantValue::UInt8(crate::blob::read_u8(data, offset)),
			TypeTag::Int16 => ConstantValue::Int16(crate::blob::read_i16(data, offset)),
			TypeTag::UInt16 => ConstantValue::UInt16(crate::blob::read_u16(data, offset)),
			TypeTag::Int32 => ConstantValue::Int32(crate::blob::read_i32(data, offset)),
			TypeTag::UInt32 => ConstantValue::UInt32(crate::blob::read_u32(data, offset)),
			TypeTag::Int64 => ConstantValue::Int64(crate::blob::read_i64(data, offset)),
			TypeTag::UInt64 => ConstantValue::UInt64(crate::blob::read_u64(data, offset)),
			TypeTag::Float => ConstantValue::Float(crate::blob::read_f32(data, offset)),
			TypeTag::Double => ConstantValue::Double(crate::blob::read_f64(data, offset)),
			TypeTag::TimeT => ConstantValue::TimeT(crate::blob::read_i64(data, offset)),
			TypeTag::Short => ConstantValue::Short(crate::blob::read_i16(data, offset)),
			TypeTag::UShort => ConstantValue::UShort(crate::blob::read_u16(data, offset)),
			TypeTag::Int => ConstantValue::Int(crate::blob::read_i32(data, offset)),
			TypeTag::UInt => ConstantValue::UInt(crate::blob::read_u32(data, offset)),
			TypeTag::Long => ConstantValue::Long(crate::blob::read_i64(data, offset)),
			TypeTag::ULong => ConstantValue::ULong(crate::blob::read_u64(data, offset)),
			other => return Err(DecodeError::UnsupportedConstantType(other)),
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::fixtures::constant_fixture;
	use assert_matches::assert_matches;

	#[test]
	fn decodes_basic_scalar() {
		let handle = constant_fixture("MAX", TypeTag::Int32, &42i32.to_le_bytes());
		assert_eq!(&*handle.constant_name(), "MAX");
		assert_matches!(handle.constant_value(), Ok(ConstantValue::Int32(42)));
	}

	#[test]
	fn decodes_native_c_width_tags() {
		let handle = constant_fixture("SIZE", TypeTag::Long, &7i64.to_le_bytes());
		assert_matches!(handle.constant_value(), Ok(ConstantValue::Long(7)));

		let handle = constant_fixture("WHEN", TypeTag::TimeT, &123i64.to_le_bytes());
		assert_matches!(handle.constant_value(), Ok(ConstantValue::TimeT(123)));

		let handle = constant_fixture("N", TypeTag::Int, &9i32.to_le_bytes());
		assert_matches!(handle.constant_value(), Ok(ConstantValue::Int(9)));
	}
}
