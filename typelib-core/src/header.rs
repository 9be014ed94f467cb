/// Per-blob-kind record sizes, in bytes.
///
/// These are read once by the external loader (parsing and validating the
/// file header is out of scope here, see the crate-level documentation) and
/// handed to us as plain data. Every offset formula in [`crate::offsets`]
/// is driven by these fields; nothing in this crate hard-codes a record
/// size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
	pub enum_blob_size: u16,
	pub value_blob_size: u16,
	pub struct_blob_size: u16,
	pub union_blob_size: u16,
	pub object_blob_size: u16,
	pub interface_blob_size: u16,
	pub field_blob_size: u16,
	pub property_blob_size: u16,
	pub signal_blob_size: u16,
	pub vfunc_blob_size: u16,
	pub constant_blob_size: u16,
	pub function_blob_size: u16,
	pub callback_blob_size: u16,
}
