use std::sync::Arc;

use derivative::Derivative;
use paste::paste;

use crate::blob::{self, Typelib};
use crate::error::DecodeError;
use crate::header::Header;
use crate::repository::Repository;

macro_rules! define_kind {
	($($id: ident),* $(,)?) => {
		/// Which on-disk record an [`InfoHandle`] addresses.
		#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
		pub enum Kind {
			$($id),*
		}

		paste! {
			impl InfoHandle {
				$(
					#[doc = "Whether this handle's kind is `Kind::" $id "`."]
					pub fn [<is_ $id:snake>](&self) -> bool {
						self.kind == Kind::$id
					}
				)*
			}
		}
	};
}

define_kind!(
	Type,
	ErrorDomain,
	Enum,
	Value,
	Field,
	Struct,
	Union,
	Object,
	Interface,
	Property,
	Signal,
	VFunc,
	Constant,
	Function,
	Callback,
);

fn blob_size(kind: Kind, header: &Header) -> Option<u32> {
	Some(match kind {
		Kind::Enum => header.enum_blob_size as u32,
		Kind::Value => header.value_blob_size as u32,
		Kind::Struct => header.struct_blob_size as u32,
		Kind::Union => header.union_blob_size as u32,
		Kind::Object => header.object_blob_size as u32,
		Kind::Interface => header.interface_blob_size as u32,
		Kind::Field => header.field_blob_size as u32,
		Kind::Property => header.property_blob_size as u32,
		Kind::Signal => header.signal_blob_size as u32,
		Kind::VFunc => header.vfunc_blob_size as u32,
		Kind::Constant => header.constant_blob_size as u32,
		Kind::Function | Kind::Callback => header.function_blob_size as u32,
		Kind::Type | Kind::ErrorDomain => return None,
	})
}

/// A uniform, opaque reference to one decoded entity within a typelib.
///
/// Every accessor on every entity kind (Enum, Struct, Object, ...) is a
/// method gated on this single handle type rather than a distinct Rust type
/// per entity kind — calling an accessor on a handle of the wrong kind
/// returns a sentinel (`None`, `-1`, empty) rather than panicking or
/// returning a `Result`; see the crate-level error-handling policy.
#[derive(Clone, Derivative)]
#[derivative(Debug)]
pub struct InfoHandle {
	#[derivative(Debug = "ignore")]
	repository: Arc<dyn Repository>,
	typelib: Arc<Typelib>,
	kind: Kind,
	offset: u32,
	container: Option<Arc<InfoHandle>>,
	type_is_embedded: bool,
}

impl InfoHandle {
	#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(?kind, offset)))]
	pub fn new_info(
		kind: Kind,
		repository: Arc<dyn Repository>,
		typelib: Arc<Typelib>,
		offset: u32,
		container: Option<Arc<InfoHandle>>,
	) -> Self {
		Self {
			repository,
			typelib,
			kind,
			offset,
			container,
			type_is_embedded: false,
		}
	}

	/// Root entry point for constructing a handle directly from an offset
	/// supplied by a caller (as opposed to [`InfoHandle::child`], which
	/// inherits an already-validated container). Checks the blob is long
	/// enough to hold a record of `kind`'s declared size before trusting
	/// `offset`; every accessor reached from the resulting handle still
	/// panics on its own out-of-bounds reads, but a short blob is rejected
	/// here instead of panicking on whichever field happens to be read first.
	pub fn try_new_info(
		kind: Kind,
		repository: Arc<dyn Repository>,
		typelib: Arc<Typelib>,
		offset: u32,
		container: Option<Arc<InfoHandle>>,
	) -> Result<Self, DecodeError> {
		if let Some(size) = blob_size(kind, typelib.header()) {
			let len = typelib.len() as u32;
			if offset.saturating_add(size) > len {
				return Err(DecodeError::MalformedBlob { offset, needed: size, len });
			}
		}
		Ok(Self::new_info(kind, repository, typelib, offset, container))
	}

	/// Constructs a handle addressing a type slot. `type_is_embedded` should
	/// be set afterwards by the caller when the slot is known to point at an
	/// embedded callback blob rather than an ordinary SimpleType/TypeBlob.
	pub fn new_type(
		repository: Arc<dyn Repository>,
		typelib: Arc<Typelib>,
		offset: u32,
		container: Option<Arc<InfoHandle>>,
	) -> Self {
		Self::new_info(Kind::Type, repository, typelib, offset, container)
	}

	pub fn with_embedded_type(mut self, embedded: bool) -> Self {
		self.type_is_embedded = embedded;
		self
	}

	#[inline]
	pub fn kind(&self) -> Kind {
		self.kind
	}

	#[inline]
	pub fn offset(&self) -> u32 {
		self.offset
	}

	#[inline]
	pub fn type_is_embedded(&self) -> bool {
		self.type_is_embedded
	}

	#[inline]
	pub fn typelib(&self) -> &Arc<Typelib> {
		&self.typelib
	}

	#[inline]
	pub fn repository(&self) -> &Arc<dyn Repository> {
		&self.repository
	}

	#[inline]
	pub fn container(&self) -> Option<&Arc<InfoHandle>> {
		self.container.as_ref()
	}

	#[inline]
	pub fn data(&self) -> &[u8] {
		self.typelib.data()
	}

	#[inline]
	pub fn header(&self) -> &Header {
		self.typelib.header()
	}

	/// Mints a fresh handle at `offset` sharing this handle's typelib and
	/// repository, with `self` as its container.
	pub fn child(&self, kind: Kind, offset: u32) -> InfoHandle {
		InfoHandle::new_info(
			kind,
			Arc::clone(&self.repository),
			Arc::clone(&self.typelib),
			offset,
			Some(Arc::new(self.clone())),
		)
	}

	pub fn child_type(&self, offset: u32) -> InfoHandle {
		InfoHandle::new_type(
			Arc::clone(&self.repository),
			Arc::clone(&self.typelib),
			offset,
			Some(Arc::new(self.clone())),
		)
	}

	#[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
	pub fn resolve_entry(&self, entry: u16) -> Option<InfoHandle> {
		self.repository.resolve(&self.typelib, entry)
	}

	pub fn string_at(&self, offset: u32) -> Arc<str> {
		self.repository.string_at(&self.typelib, offset)
	}

	#[inline]
	pub fn read_u8(&self, rel: u32) -> u8 {
		blob::read_u8(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_i8(&self, rel: u32) -> i8 {
		blob::read_i8(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_u16(&self, rel: u32) -> u16 {
		blob::read_u16(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_i16(&self, rel: u32) -> i16 {
		blob::read_i16(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_u32(&self, rel: u32) -> u32 {
		blob::read_u32(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_i32(&self, rel: u32) -> i32 {
		blob::read_i32(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_u64(&self, rel: u32) -> u64 {
		blob::read_u64(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_f32(&self, rel: u32) -> f32 {
		blob::read_f32(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_f64(&self, rel: u32) -> f64 {
		blob::read_f64(self.data(), self.offset + rel)
	}

	#[inline]
	pub fn read_bytes(&self, rel: u32, len: u32) -> &[u8] {
		blob::read_bytes(self.data(), self.offset + rel, len)
	}
}

#[cfg(test)]
mod tests {
	use crate::testing::{test_header, TestRepository};
	use crate::{blob::Typelib, handle::Kind};
	use std::sync::Arc;

	use super::InfoHandle;

	#[test]
	fn try_new_info_rejects_blob_shorter_than_declared_kind() {
		let repo = TestRepository::build(vec![], vec![]);
		let header = test_header();
		let typelib = Arc::new(Typelib::new(Arc::from(vec![0u8; 4].into_boxed_slice()), header));
		let err = InfoHandle::try_new_info(Kind::Object, repo as Arc<dyn crate::repository::Repository>, typelib, 0, None)
			.unwrap_err();
		assert!(matches!(err, crate::error::DecodeError::MalformedBlob { .. }));
	}
}
