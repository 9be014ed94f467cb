//! Centralizes every piece of layout arithmetic so the rest of the crate can
//! stay layout-agnostic: decoders never hard-code a record size, they ask
//! this module (driven by the [`Header`]) where something starts.

use crate::header::Header;

/// Fixed, record-local offset of a Constant's inline type slot. Not derived
/// from the header — this is a literal position within the Constant record
/// itself, carried over from the format this layout is grounded on.
pub const CONSTANT_TYPE_OFFSET: u32 = 8;

/// Fixed, record-local offset of a Union's inline discriminator type slot.
pub const UNION_DISCRIMINATOR_TYPE_OFFSET: u32 = 24;

/// Size, in bytes, of a SimpleTypeBlob / pointer-to-TypeBlob type slot.
pub const TYPE_SLOT_SIZE: u32 = 4;

/// Rounds `n` up to the next even number. Object and Interface blobs pad
/// their leading reference-array section to an even count.
#[inline]
pub const fn pad2(n: u32) -> u32 {
	n + (n % 2)
}

pub fn enum_value_offset(base: u32, header: &Header, n: u32) -> u32 {
	base + header.enum_blob_size as u32 + n * header.value_blob_size as u32
}

/// Offset of field `n` within a Struct, accounting for any embedded callback
/// blobs attached to earlier fields.
pub fn struct_field_offset(
	base: u32,
	header: &Header,
	n: u32,
	has_embedded_type: impl Fn(u32) -> bool,
) -> u32 {
	let mut offset = base + header.struct_blob_size as u32;
	for i in 0..n {
		offset += header.field_blob_size as u32;
		if has_embedded_type(i) {
			offset += header.callback_blob_size as u32;
		}
	}
	offset
}

pub fn struct_method_offset(
	base: u32,
	header: &Header,
	n_fields: u32,
	has_embedded_type: impl Fn(u32) -> bool,
	k: u32,
) -> u32 {
	let fields_end = struct_field_offset(base, header, n_fields, has_embedded_type);
	fields_end + k * header.function_blob_size as u32
}

pub fn union_field_offset(base: u32, header: &Header, n: u32) -> u32 {
	base + header.union_blob_size as u32 + n * header.field_blob_size as u32
}

pub fn union_method_offset(base: u32, header: &Header, n_fields: u32, k: u32) -> u32 {
	base + header.union_blob_size as u32
		+ n_fields * header.field_blob_size as u32
		+ k * header.function_blob_size as u32
}

pub fn union_discriminator_offset(
	base: u32,
	header: &Header,
	n_fields: u32,
	n_functions: u32,
	k: u32,
) -> u32 {
	let methods_end = union_method_offset(base, header, n_fields, n_functions);
	methods_end + k * header.constant_blob_size as u32
}

/// First byte past an Object's leading (padded) interface-reference array.
pub fn object_sections_start(base: u32, header: &Header, n_interfaces: u32) -> u32 {
	base + header.object_blob_size as u32 + pad2(n_interfaces) * 2
}

#[allow(clippy::too_many_arguments)]
pub fn object_section_offset(
	base: u32,
	header: &Header,
	n_interfaces: u32,
	n_fields: u32,
	n_properties: u32,
	n_methods: u32,
	n_signals: u32,
	n_vfuncs: u32,
	section: ObjectSection,
	n: u32,
) -> u32 {
	let mut offset = object_sections_start(base, header, n_interfaces);
	if section == ObjectSection::Field {
		return offset + n * header.field_blob_size as u32;
	}
	offset += n_fields * header.field_blob_size as u32;
	if section == ObjectSection::Property {
		return offset + n * header.property_blob_size as u32;
	}
	offset += n_properties * header.property_blob_size as u32;
	if section == ObjectSection::Method {
		return offset + n * header.function_blob_size as u32;
	}
	offset += n_methods * header.function_blob_size as u32;
	if section == ObjectSection::Signal {
		return offset + n * header.signal_blob_size as u32;
	}
	offset += n_signals * header.signal_blob_size as u32;
	if section == ObjectSection::VFunc {
		return offset + n * header.vfunc_blob_size as u32;
	}
	offset += n_vfuncs * header.vfunc_blob_size as u32;
	// Constant
	offset + n * header.constant_blob_size as u32
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectSection {
	Field,
	Property,
	Method,
	Signal,
	VFunc,
	Constant,
}

/// First byte past an Interface's leading (padded) prerequisite array.
pub fn interface_sections_start(base: u32, header: &Header, n_prerequisites: u32) -> u32 {
	base + header.interface_blob_size as u32 + pad2(n_prerequisites) * 2
}

#[allow(clippy::too_many_arguments)]
pub fn interface_section_offset(
	base: u32,
	header: &Header,
	n_prerequisites: u32,
	n_properties: u32,
	n_methods: u32,
	n_signals: u32,
	n_vfuncs: u32,
	section: ObjectSection,
	n: u32,
) -> u32 {
	let mut offset = interface_sections_start(base, header, n_prerequisites);
	if section == ObjectSection::Property {
		return offset + n * header.property_blob_size as u32;
	}
	offset += n_properties * header.property_blob_size as u32;
	if section == ObjectSection::Method {
		return offset + n * header.function_blob_size as u32;
	}
	offset += n_methods * header.function_blob_size as u32;
	if section == ObjectSection::Signal {
		return offset + n * header.signal_blob_size as u32;
	}
	offset += n_signals * header.signal_blob_size as u32;
	if section == ObjectSection::VFunc {
		return offset + n * header.vfunc_blob_size as u32;
	}
	offset += n_vfuncs * header.vfunc_blob_size as u32;
	offset + n * header.constant_blob_size as u32
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn pad2_rounds_up_odd_counts() {
		assert_eq!(pad2(0), 0);
		assert_eq!(pad2(2), 2);
		assert_eq!(pad2(3), 4);
		assert_eq!(pad2(7), 8);
	}

	fn header() -> Header {
		Header {
			enum_blob_size: 12,
			value_blob_size: 12,
			struct_blob_size: 20,
			union_blob_size: 32,
			object_blob_size: 32,
			interface_blob_size: 32,
			field_blob_size: 12,
			property_blob_size: 16,
			signal_blob_size: 16,
			vfunc_blob_size: 16,
			constant_blob_size: 20,
			function_blob_size: 20,
			callback_blob_size: 12,
		}
	}

	#[test]
	fn struct_field_offset_accounts_for_embedded_callbacks() {
		let h = header();
		// field 0 has no embedded type, field 1 does.
		let offset = struct_field_offset(0, &h, 2, |i| i == 0);
		assert_eq!(offset, h.struct_blob_size as u32 + 2 * h.field_blob_size as u32 + h.callback_blob_size as u32);
	}

	#[test]
	fn object_section_offset_pads_interface_array() {
		let h = header();
		let offset =
			object_section_offset(0, &h, 3, 0, 0, 0, 0, 0, ObjectSection::Property, 0);
		assert_eq!(offset, h.object_blob_size as u32 + pad2(3) * 2);
	}
}
