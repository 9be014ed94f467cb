use std::sync::Arc;

use crate::handle::{InfoHandle, Kind};

mod layout {
	pub const GET_QUARK: u32 = 4;
	pub const ERROR_CODES: u32 = 8;
}

impl InfoHandle {
	pub fn error_domain_quark(&self) -> Arc<str> {
		debug_assert_eq!(self.kind(), Kind::ErrorDomain);
		let offset = self.read_u32(layout::GET_QUARK);
		self.string_at(offset)
	}

	/// The Enum describing this domain's error codes.
	pub fn error_domain_codes(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::ErrorDomain);
		let entry = self.read_u16(layout::ERROR_CODES);
		self.resolve_entry(entry)
	}
}
