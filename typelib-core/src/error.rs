use std::fmt::{Display, Formatter};

use crate::tags::TypeTag;

/// Errors surfaced across the public API.
///
/// Most invalid usage described by the blob layout (calling an accessor on
/// the wrong kind of handle, a dangling cross-reference, a missing type-init
/// symbol) is reported through sentinel return values instead of this type —
/// see the crate-level documentation for the full policy. `DecodeError` is
/// reserved for the handful of seams where a sentinel would silently mask a
/// caller mistake: constructing a handle from a blob too short to hold its
/// declared record, and materializing the value of a non-basic constant.
#[derive(Debug)]
pub enum DecodeError {
	/// The blob is too short to contain a record of the declared kind at the
	/// given offset, or the offset arithmetic for a container's trailing
	/// sections would read past the end of the blob.
	MalformedBlob { offset: u32, needed: u32, len: u32 },
	/// A constant's inline type slot names something other than a basic
	/// scalar tag; decoding such a value is unsupported.
	UnsupportedConstantType(TypeTag),
}

impl Display for DecodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			DecodeError::MalformedBlob { offset, needed, len } => write!(
				f,
				"malformed blob: offset {offset} needs {needed} more byte(s) but blob is only {len} byte(s) long"
			),
			DecodeError::UnsupportedConstantType(tag) => {
				write!(f, "unsupported constant type: {tag:?}")
			}
		}
	}
}

impl std::error::Error for DecodeError {}
