use std::sync::Arc;

use crate::gtype::GType;
use crate::handle::{InfoHandle, Kind};
use crate::namecache;
use crate::offsets::{self, ObjectSection};
use crate::registered_type;

mod layout {
	pub const ABSTRACT: u32 = 0;
	pub const N_INTERFACES: u32 = 2;
	pub const N_FIELDS: u32 = 4;
	pub const N_PROPERTIES: u32 = 6;
	pub const N_METHODS: u32 = 8;
	pub const N_SIGNALS: u32 = 10;
	pub const N_VFUNCS: u32 = 12;
	pub const N_CONSTANTS: u32 = 14;
	pub const PARENT: u32 = 16;
	pub const GTYPE_STRUCT: u32 = 18;
	pub const GTYPE_NAME: u32 = 20;
	pub const GTYPE_INIT: u32 = 24;
	pub const INTERFACES: u32 = 28;
}

pub const OBJECT_BLOB_SIZE: u32 = 28;

impl InfoHandle {
	pub fn object_is_abstract(&self) -> bool {
		debug_assert_eq!(self.kind(), Kind::Object);
		self.read_u8(layout::ABSTRACT) != 0
	}

	pub fn object_n_interfaces(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Object);
		self.read_u16(layout::N_INTERFACES) as u32
	}

	pub fn object_n_fields(&self) -> u32 {
		self.read_u16(layout::N_FIELDS) as u32
	}
	pub fn object_n_properties(&self) -> u32 {
		self.read_u16(layout::N_PROPERTIES) as u32
	}
	pub fn object_n_methods(&self) -> u32 {
		self.read_u16(layout::N_METHODS) as u32
	}
	pub fn object_n_signals(&self) -> u32 {
		self.read_u16(layout::N_SIGNALS) as u32
	}
	pub fn object_n_vfuncs(&self) -> u32 {
		self.read_u16(layout::N_VFUNCS) as u32
	}
	pub fn object_n_constants(&self) -> u32 {
		self.read_u16(layout::N_CONSTANTS) as u32
	}

	pub fn object_parent(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Object);
		let entry = self.read_u16(layout::PARENT);
		if entry == 0 {
			None
		} else {
			self.resolve_entry(entry)
		}
	}

	pub fn object_class_struct(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Object);
		let entry = self.read_u16(layout::GTYPE_STRUCT);
		if entry == 0 {
			None
		} else {
			self.resolve_entry(entry)
		}
	}

	pub fn object_interface(&self, n: u32) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Object);
		if n >= self.object_n_interfaces() {
			return None;
		}
		let entry = self.read_u16(layout::INTERFACES + n * 2);
		self.resolve_entry(entry)
	}

	pub fn object_type_name(&self) -> Arc<str> {
		registered_type::type_name(self, layout::GTYPE_NAME)
	}

	pub fn object_type_init(&self) -> Option<Arc<str>> {
		registered_type::type_init(self, layout::GTYPE_INIT)
	}

	pub fn object_get_g_type(&self) -> GType {
		registered_type::g_type(self, layout::GTYPE_INIT, layout::GTYPE_NAME)
	}

	fn object_section_offset(&self, section: ObjectSection, n: u32) -> u32 {
		offsets::object_section_offset(
			self.offset(),
			self.header(),
			self.object_n_interfaces(),
			self.object_n_fields(),
			self.object_n_properties(),
			self.object_n_methods(),
			self.object_n_signals(),
			self.object_n_vfuncs(),
			section,
			n,
		)
	}

	pub fn object_field(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_fields())
			.then(|| self.child(Kind::Field, self.object_section_offset(ObjectSection::Field, n)))
	}

	pub fn object_property(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_properties())
			.then(|| self.child(Kind::Property, self.object_section_offset(ObjectSection::Property, n)))
	}

	pub fn object_method(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_methods())
			.then(|| self.child(Kind::Function, self.object_section_offset(ObjectSection::Method, n)))
	}

	pub fn object_signal(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_signals())
			.then(|| self.child(Kind::Signal, self.object_section_offset(ObjectSection::Signal, n)))
	}

	pub fn object_vfunc(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_vfuncs())
			.then(|| self.child(Kind::VFunc, self.object_section_offset(ObjectSection::VFunc, n)))
	}

	pub fn object_constant(&self, n: u32) -> Option<InfoHandle> {
		(n < self.object_n_constants())
			.then(|| self.child(Kind::Constant, self.object_section_offset(ObjectSection::Constant, n)))
	}

	pub fn object_find_method(&self, name: &str) -> Option<InfoHandle> {
		let start = self.object_section_offset(ObjectSection::Method, 0);
		let size = self.header().function_blob_size as u32;
		let found = namecache::find_by_name(
			self,
			self.object_n_methods(),
			|i| start + i * size,
			|i| self.child(Kind::Function, start + i * size).function_name(),
			name,
		)?;
		Some(self.child(Kind::Function, found))
	}

	pub fn object_find_vfunc(&self, name: &str) -> Option<InfoHandle> {
		let start = self.object_section_offset(ObjectSection::VFunc, 0);
		let size = self.header().vfunc_blob_size as u32;
		let found = namecache::find_by_name(
			self,
			self.object_n_vfuncs(),
			|i| start + i * size,
			|i| self.child(Kind::VFunc, start + i * size).vfunc_name(),
			name,
		)?;
		Some(self.child(Kind::VFunc, found))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::testing::fixtures::object_fixture;

	#[test]
	fn odd_interface_count_pads_before_properties() {
		let handle = object_fixture(3, 0, 1, 2);
		assert_eq!(handle.object_n_interfaces(), 3);
		let prop = handle.object_property(0).unwrap();
		assert_eq!(prop.offset(), handle.offset() + OBJECT_BLOB_SIZE + 8);
		assert!(handle.object_interface(2).is_some());
	}
}
