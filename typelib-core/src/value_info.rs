//! Accessors for `Kind::Value` handles — the individual named members of an
//! [`crate::enum_info`] enumeration.

use std::sync::Arc;

use crate::handle::{InfoHandle, Kind};

mod layout {
	pub const NAME: u32 = 0;
	pub const VALUE: u32 = 4;
}

pub const VALUE_BLOB_SIZE: u32 = 8;

impl InfoHandle {
	pub fn value_name(&self) -> Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Value);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	/// The member's value, sign-extended to a platform-width integer.
	pub fn value_value(&self) -> i64 {
		debug_assert_eq!(self.kind(), Kind::Value);
		self.read_i32(layout::VALUE) as i64
	}
}
