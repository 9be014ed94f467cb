use crate::flags::SignalFlags;
use crate::handle::{InfoHandle, Kind};

mod layout {
	pub const FLAGS: u32 = 0;
	pub const CLASS_CLOSURE: u32 = 2;
	pub const NAME: u32 = 4;
}

pub const SIGNAL_BLOB_SIZE: u32 = 8;

impl InfoHandle {
	pub fn signal_flags(&self) -> SignalFlags {
		debug_assert_eq!(self.kind(), Kind::Signal);
		SignalFlags::from_bits_truncate(self.read_u16(layout::FLAGS))
	}

	pub fn signal_true_stops_emit(&self) -> bool {
		self.signal_flags().contains(SignalFlags::TRUE_STOPS_EMIT)
	}

	pub fn signal_name(&self) -> std::sync::Arc<str> {
		debug_assert_eq!(self.kind(), Kind::Signal);
		let offset = self.read_u32(layout::NAME);
		self.string_at(offset)
	}

	/// The vfunc implementing this signal's class closure, resolved via the
	/// container this signal was reached through.
	pub fn signal_class_closure(&self) -> Option<InfoHandle> {
		debug_assert_eq!(self.kind(), Kind::Signal);
		if !self.signal_flags().contains(SignalFlags::HAS_CLASS_CLOSURE) {
			return None;
		}
		let index = self.read_u16(layout::CLASS_CLOSURE) as u32;
		let container = self.container()?;
		match container.kind() {
			Kind::Object => container.object_vfunc(index),
			Kind::Interface => container.interface_vfunc(index),
			_ => None,
		}
	}
}
