use crate::flags::PropertyFlags;
use crate::handle::{InfoHandle, Kind};

mod layout {
	pub const FLAGS: u32 = 0;
	pub const NAME: u32 = 4;
	pub const TYPE: u32 = 8;
}

pub const PROPERTY_BLOB_SIZE: u32 = 12;

impl InfoHandle {
	pub fn property_flags(&self) -> PropertyFlags {
		debug_assert_eq!(self.kind(), Kind::Property);
		PropertyFlags::from_bits_truncate(self.read_u8(layout::FLAGS))
	}

	pub fn property_name(&self) -> std::sync::Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Property);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	pub fn property_type(&self) -> InfoHandle {
		debug_assert_eq!(self.kind(), Kind::Property);
		self.child_type(self.offset() + layout::TYPE)
	}
}
