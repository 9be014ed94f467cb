use std::sync::Arc;

use crate::gtype::GType;
use crate::handle::{InfoHandle, Kind};
use crate::namecache;
use crate::offsets::{self, ObjectSection};
use crate::registered_type;

mod layout {
	pub const N_PREREQUISITES: u32 = 2;
	pub const N_PROPERTIES: u32 = 4;
	pub const N_METHODS: u32 = 6;
	pub const N_SIGNALS: u32 = 8;
	pub const N_VFUNCS: u32 = 10;
	pub const N_CONSTANTS: u32 = 12;
	pub const GTYPE_STRUCT: u32 = 14;
	pub const GTYPE_NAME: u32 = 16;
	pub const GTYPE_INIT: u32 = 20;
	pub const PREREQUISITES: u32 = 24;
}

pub const INTERFACE_BLOB_SIZE: u32 = 24;

impl InfoHandle {
	pub fn interface_n_prerequisites(&self) -> u32 {
		debug_assert_eq!(self.kind(), Kind::Interface);
		self.read_u16(layout::N_PREREQUISITES) as u32
	}
	pub fn interface_n_properties(&self) -> u32 {
		self.read_u16(layout::N_PROPERTIES) as u32
	}
	pub fn interface_n_methods(&self) -> u32 {
		self.read_u16(layout::N_METHODS) as u32
	}
	pub fn interface_n_signals(&self) -> u32 {
		self.read_u16(layout::N_SIGNALS) as u32
	}
	pub fn interface_n_vfuncs(&self) -> u32 {
		self.read_u16(layout::N_VFUNCS) as u32
	}
	pub fn interface_n_constants(&self) -> u32 {
		self.read_u16(layout::N_CONSTANTS) as u32
	}

	pub fn interface_prerequisite(&self, n: u32) -> Option<InfoHandle> {
		if n >= self.interface_n_prerequisites() {
			return None;
		}
		let entry = self.read_u16(layout::PREREQUISITES + n * 2);
		self.resolve_entry(entry)
	}

	pub fn interface_iface_struct(&self) -> Option<InfoHandle> {
		let entry = self.read_u16(layout::GTYPE_STRUCT);
		if entry == 0 {
			None
		} else {
			self.resolve_entry(entry)
		}
	}

	pub fn interface_type_name(&self) -> Arc<str> {
		registered_type::type_name(self, layout::GTYPE_NAME)
	}

	pub fn interface_type_init(&self) -> Option<Arc<str>> {
		registered_type::type_init(self, layout::GTYPE_INIT)
	}

	pub fn interface_get_g_type(&self) -> GType {
		registered_type::g_type(self, layout::GTYPE_INIT, layout::GTYPE_NAME)
	}

	fn interface_section_offset(&self, section: ObjectSection, n: u32) -> u32 {
		offsets::interface_section_offset(
			self.offset(),
			self.header(),
			self.interface_n_prerequisites(),
			self.interface_n_properties(),
			self.interface_n_methods(),
			self.interface_n_signals(),
			self.interface_n_vfuncs(),
			section,
			n,
		)
	}

	pub fn interface_property(&self, n: u32) -> Option<InfoHandle> {
		(n < self.interface_n_properties()).then(|| {
			self.child(Kind::Property, self.interface_section_offset(ObjectSection::Property, n))
		})
	}

	pub fn interface_method(&self, n: u32) -> Option<InfoHandle> {
		(n < self.interface_n_methods()).then(|| {
			self.child(Kind::Function, self.interface_section_offset(ObjectSection::Method, n))
		})
	}

	pub fn interface_signal(&self, n: u32) -> Option<InfoHandle> {
		(n < self.interface_n_signals()).then(|| {
			self.child(Kind::Signal, self.interface_section_offset(ObjectSection::Signal, n))
		})
	}

	pub fn interface_vfunc(&self, n: u32) -> Option<InfoHandle> {
		(n < self.interface_n_vfuncs()).then(|| {
			self.child(Kind::VFunc, self.interface_section_offset(ObjectSection::VFunc, n))
		})
	}

	pub fn interface_constant(&self, n: u32) -> Option<InfoHandle> {
		(n < self.interface_n_constants()).then(|| {
			self.child(Kind::Constant, self.interface_section_offset(ObjectSection::Constant, n))
		})
	}

	pub fn interface_find_method(&self, name: &str) -> Option<InfoHandle> {
		let start = self.interface_section_offset(ObjectSection::Method, 0);
		let size = self.header().function_blob_size as u32;
		let found = namecache::find_by_name(
			self,
			self.interface_n_methods(),
			|i| start + i * size,
			|i| self.child(Kind::Function, start + i * size).function_name(),
			name,
		)?;
		Some(self.child(Kind::Function, found))
	}

	pub fn interface_find_vfunc(&self, name: &str) -> Option<InfoHandle> {
		let start = self.interface_section_offset(ObjectSection::VFunc, 0);
		let size = self.header().vfunc_blob_size as u32;
		let found = namecache::find_by_name(
			self,
			self.interface_n_vfuncs(),
			|i| start + i * size,
			|i| self.child(Kind::VFunc, start + i * size).vfunc_name(),
			name,
		)?;
		Some(self.child(Kind::VFunc, found))
	}
}
