//! Fixture-building helpers shared by this crate's inline unit tests and by
//! the integration tests under `tests/`. Not part of the public API proper
//! — gated behind `cfg(test)` or the `test-util` feature, the way a crate
//! exposes test-only scaffolding without shipping it in ordinary builds.

use std::sync::{Arc, Mutex, OnceLock, Weak};

use crate::blob::Typelib;
use crate::header::Header;
use crate::handle::{InfoHandle, Kind};
use crate::repository::{GTypeInitFn, Repository};

/// Appends little-endian scalars to a byte buffer at growing offsets; the
/// in-memory equivalent of the packed records this crate decodes.
#[derive(Default)]
pub struct BlobBuilder {
	bytes: Vec<u8>,
}

impl BlobBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn position(&self) -> u32 {
		self.bytes.len() as u32
	}

	pub fn pad_to(&mut self, offset: u32) -> &mut Self {
		while self.position() < offset {
			self.bytes.push(0);
		}
		self
	}

	pub fn u8(&mut self, v: u8) -> &mut Self {
		self.bytes.push(v);
		self
	}

	pub fn u16(&mut self, v: u16) -> &mut Self {
		self.bytes.extend_from_slice(&v.to_le_bytes());
		self
	}

	pub fn u32(&mut self, v: u32) -> &mut Self {
		self.bytes.extend_from_slice(&v.to_le_bytes());
		self
	}

	pub fn i32(&mut self, v: i32) -> &mut Self {
		self.bytes.extend_from_slice(&v.to_le_bytes());
		self
	}

	pub fn bytes(&mut self, b: &[u8]) -> &mut Self {
		self.bytes.extend_from_slice(b);
		self
	}

	pub fn finish(self) -> Vec<u8> {
		self.bytes
	}
}

/// An in-memory [`Repository`] for tests: `string_at`'s offset is an index
/// into a flat string table, and `resolve`'s entry is an index into a flat
/// directory of `(Kind, byte offset)` pairs within the same typelib.
#[derive(Debug, Default)]
pub struct TestRepository {
	strings: Vec<String>,
	entries: Vec<(Kind, u32)>,
	this: OnceLock<Weak<dyn Repository>>,
	symbols: Mutex<Vec<(String, GTypeInitFn)>>,
}

impl TestRepository {
	pub fn build(strings: Vec<String>, entries: Vec<(Kind, u32)>) -> Arc<Self> {
		let repo = Arc::new(Self {
			strings,
			entries,
			this: OnceLock::new(),
			symbols: Mutex::new(Vec::new()),
		});
		let weak: Weak<dyn Repository> = Arc::downgrade(&repo) as Weak<dyn Repository>;
		let _ = repo.this.set(weak);
		repo
	}

	pub fn register_symbol(&self, name: &str, f: GTypeInitFn) {
		self.symbols.lock().unwrap().push((name.to_string(), f));
	}

	fn self_arc(&self) -> Arc<dyn Repository> {
		self.this.get().unwrap().upgrade().unwrap()
	}
}

impl Repository for TestRepository {
	fn string_at(&self, _typelib: &Arc<Typelib>, offset: u32) -> Arc<str> {
		Arc::from(self.strings[offset as usize].as_str())
	}

	fn resolve(&self, typelib: &Arc<Typelib>, entry: u16) -> Option<InfoHandle> {
		let (kind, offset) = *self.entries.get(entry as usize)?;
		Some(InfoHandle::new_info(kind, self.self_arc(), Arc::clone(typelib), offset, None))
	}

	fn lookup_symbol(&self, _typelib: &Arc<Typelib>, name: &str) -> Option<GTypeInitFn> {
		self.symbols
			.lock()
			.unwrap()
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, f)| *f)
	}
}

/// A header whose per-kind sizes match the fixed record layouts this crate
/// actually decodes (see each `*_info` module's `*_BLOB_SIZE` constant).
pub fn test_header() -> Header {
	Header {
		enum_blob_size: crate::enum_info::ENUM_BLOB_SIZE as u16,
		value_blob_size: crate::value_info::VALUE_BLOB_SIZE as u16,
		struct_blob_size: crate::struct_info::STRUCT_BLOB_SIZE as u16,
		union_blob_size: crate::union_info::UNION_BLOB_SIZE as u16,
		object_blob_size: crate::object_info::OBJECT_BLOB_SIZE as u16,
		interface_blob_size: crate::interface_info::INTERFACE_BLOB_SIZE as u16,
		field_blob_size: crate::field_info::FIELD_BLOB_SIZE as u16,
		property_blob_size: crate::property_info::PROPERTY_BLOB_SIZE as u16,
		signal_blob_size: crate::signal_info::SIGNAL_BLOB_SIZE as u16,
		vfunc_blob_size: crate::vfunc_info::VFUNC_BLOB_SIZE as u16,
		constant_blob_size: crate::constant_info::CONSTANT_BLOB_SIZE as u16,
		function_blob_size: crate::function_info::FUNCTION_BLOB_SIZE as u16,
		callback_blob_size: crate::field_info::CALLBACK_BLOB_SIZE as u16,
	}
}

pub fn handle_at(repository: &Arc<TestRepository>, typelib: &Arc<Typelib>, kind: Kind, offset: u32) -> InfoHandle {
	InfoHandle::new_info(
		kind,
		Arc::clone(repository) as Arc<dyn Repository>,
		Arc::clone(typelib),
		offset,
		None,
	)
}

/// Concrete fixtures for the scenarios described in the crate's testable
/// properties (enumerated S1-S6).
pub mod fixtures {
	use super::*;
	use crate::constant_info::CONSTANT_BLOB_SIZE;
	use crate::field_info::FIELD_BLOB_SIZE;
	use crate::object_info::OBJECT_BLOB_SIZE;
	use crate::offsets::{pad2, UNION_DISCRIMINATOR_TYPE_OFFSET};
	use crate::struct_info::STRUCT_BLOB_SIZE;
	use crate::tags::TypeTag;
	use crate::union_info::UNION_BLOB_SIZE;

	fn simple_type_word(tag: TypeTag, pointer: bool) -> u32 {
		((pointer as u32) << 24) | ((tag as u32) << 25)
	}

	/// S1: an Enum with 3 ordinary values.
	pub fn enum_fixture(name: &str, storage: TypeTag, values: &[(&str, i32)]) -> InfoHandle {
		let mut strings = vec![name.to_string()];
		let mut b = BlobBuilder::new();
		b.u16(values.len() as u16);
		b.u8(storage as u8);
		b.u8(0);
		b.u32(0); // gtype_name, filled below
		b.u32(0); // gtype_init

		for (value_name, value) in values {
			strings.push(value_name.to_string());
			let idx = strings.len() as u32 - 1;
			b.u32(idx);
			b.i32(*value);
		}

		let mut data = b.finish();
		data[4..8].copy_from_slice(&0u32.to_le_bytes());

		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Enum, 0)
	}

	/// S2: a Struct with one plain field, one field with an embedded
	/// callback type, and `method_names.len()` methods.
	pub fn struct_fixture(fields: &[(&str, TypeTag, bool)], method_names: &[&str]) -> InfoHandle {
		let mut strings = Vec::new();
		let mut b = BlobBuilder::new();
		b.u8(0); // flags
		b.u8(0);
		b.u16(0); // size
		b.u16(0); // alignment
		b.u16(fields.len() as u16);
		b.u16(method_names.len() as u16);
		assert_eq!(b.position(), STRUCT_BLOB_SIZE);

		for (field_name, tag, embedded) in fields {
			strings.push(field_name.to_string());
			let name_idx = strings.len() as u32 - 1;
			b.u8(0x3); // readable | writable
			b.u8(*embedded as u8);
			b.u16(32); // bits
			b.u32(0); // struct_offset
			b.u32(name_idx);
			b.u32(simple_type_word(*tag, false)); // inline type slot (unused when embedded)
			if *embedded {
				b.u8(32); // blob_type = callback marker
				b.u8(0);
				b.u16(0);
				strings.push(format!("{field_name}_cb"));
				b.u32(strings.len() as u32 - 1);
				b.u32(0);
			}
		}

		for method_name in method_names {
			strings.push(method_name.to_string());
			let name_idx = strings.len() as u32 - 1;
			b.u8(0);
			b.u8(0);
			b.u16(0);
			b.u32(name_idx);
			b.u32(0);
		}

		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Struct, 0)
	}

	/// S3: a discriminated Union with `n_fields` plain fields and
	/// `discriminator_values.len()` discriminator constants (also
	/// `n_fields`-many, one per field).
	pub fn union_fixture(n_fields: u32, n_methods: u32, discriminator_tag: TypeTag, discriminator_values: &[i32]) -> InfoHandle {
		let mut strings = Vec::new();
		let mut b = BlobBuilder::new();
		b.u8(0x1); // discriminated
		b.u8(0);
		b.u16(0);
		b.u16(0);
		b.u16(n_fields as u16);
		b.u16(n_methods as u16);
		b.u16(0);
		b.u32(0); // discriminator_offset
		b.pad_to(UNION_DISCRIMINATOR_TYPE_OFFSET);
		b.u32(simple_type_word(discriminator_tag, false));
		assert_eq!(b.position(), UNION_BLOB_SIZE);

		for i in 0..n_fields {
			strings.push(format!("field{i}"));
			let name_idx = strings.len() as u32 - 1;
			b.u8(0x3);
			b.u8(0);
			b.u16(32);
			b.u32(0);
			b.u32(name_idx);
			b.u32(simple_type_word(TypeTag::Int32, false));
		}
		for i in 0..n_methods {
			strings.push(format!("method{i}"));
			let name_idx = strings.len() as u32 - 1;
			b.u8(0);
			b.u8(0);
			b.u16(0);
			b.u32(name_idx);
			b.u32(0);
		}
		for value in discriminator_values {
			strings.push(String::new());
			let name_idx = strings.len() as u32 - 1;
			b.u32(name_idx);
			b.u32(4);
			b.u32(simple_type_word(discriminator_tag, false));
			let value_offset = b.position() + 4;
			b.u32(value_offset);
			b.i32(*value);
		}

		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Union, 0)
	}

	/// S4: an Object with `n_interfaces` (possibly odd) implemented
	/// interfaces, `n_fields` fields, `n_properties` properties and
	/// `n_methods` methods.
	pub fn object_fixture(n_interfaces: u32, n_fields: u32, n_properties: u32, n_methods: u32) -> InfoHandle {
		let mut strings = Vec::new();
		let mut entries = Vec::new();
		let mut b = BlobBuilder::new();
		b.u8(0);
		b.u8(0);
		b.u16(n_interfaces as u16);
		b.u16(n_fields as u16);
		b.u16(n_properties as u16);
		b.u16(n_methods as u16);
		b.u16(0); // n_signals
		b.u16(0); // n_vfuncs
		b.u16(0); // n_constants
		b.u16(0); // parent
		b.u16(0); // gtype_struct
		b.u32(0); // gtype_name
		b.u32(0); // gtype_init
		assert_eq!(b.position(), OBJECT_BLOB_SIZE);

		for i in 0..n_interfaces {
			// Fabricate a directory entry for each implemented interface so
			// `object_interface` has something to resolve.
			entries.push((Kind::Interface, 0));
			b.u16(i as u16 + 1);
		}
		b.pad_to(OBJECT_BLOB_SIZE + pad2(n_interfaces) * 2);

		for i in 0..n_fields {
			strings.push(format!("field{i}"));
			let idx = strings.len() as u32 - 1;
			b.u8(0x3);
			b.u8(0);
			b.u16(32);
			b.u32(0);
			b.u32(idx);
			b.u32(simple_type_word(TypeTag::Int32, false));
		}
		for i in 0..n_properties {
			strings.push(format!("prop{i}"));
			let idx = strings.len() as u32 - 1;
			b.u8(0x3);
			b.u8(0);
			b.u16(0);
			b.u32(idx);
			b.u32(simple_type_word(TypeTag::Int32, false));
		}
		for i in 0..n_methods {
			strings.push(format!("method{i}"));
			let idx = strings.len() as u32 - 1;
			b.u8(0);
			b.u8(0);
			b.u16(0);
			b.u32(idx);
			b.u32(0);
		}

		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, entries);
		handle_at(&repo, &typelib, Kind::Object, 0)
	}

	/// An Object with a single vfunc whose `invoker` field is `invoker`.
	pub fn object_with_vfunc_fixture(invoker: u16) -> InfoHandle {
		let mut strings = Vec::new();
		let mut b = BlobBuilder::new();
		b.u8(0);
		b.u8(0);
		b.u16(0); // n_interfaces
		b.u16(0); // n_fields
		b.u16(0); // n_properties
		b.u16(0); // n_methods
		b.u16(0); // n_signals
		b.u16(1); // n_vfuncs
		b.u16(0); // n_constants
		b.u16(0);
		b.u16(0);
		b.u32(0);
		b.u32(0);
		assert_eq!(b.position(), OBJECT_BLOB_SIZE);

		strings.push("do_thing".to_string());
		b.u8(0); // flags
		b.u8(0);
		b.u16(0); // struct_offset
		b.u16(0); // signal
		b.u16(invoker);
		b.u32(0); // name index into strings[0]

		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Object, 0)
	}

	/// A Constant of a basic scalar type with pre-encoded little-endian
	/// `value` bytes.
	pub fn constant_fixture(name: &str, tag: TypeTag, value: &[u8]) -> InfoHandle {
		let strings = vec![name.to_string()];
		let mut b = BlobBuilder::new();
		b.u32(0); // name idx
		b.u32(value.len() as u32); // size
		b.u32(simple_type_word(tag, false));
		let value_offset = CONSTANT_BLOB_SIZE;
		b.u32(value_offset);
		b.bytes(value);

		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Constant, 0)
	}

	/// A Field whose type slot is pointer-indirected to an ArrayTypeBlob
	/// (S5): `has_length=true, length=2, zero_terminated=false`.
	pub fn array_type_field_fixture() -> InfoHandle {
		let strings = vec!["items".to_string()];
		let mut b = BlobBuilder::new();
		// Field record.
		b.u8(0x3);
		b.u8(0); // has_embedded_type = false
		b.u16(0);
		b.u32(0);
		b.u32(0); // name idx
		let type_slot_offset = b.position();
		let array_blob_offset = FIELD_BLOB_SIZE;
		b.u32(array_blob_offset); // pointer to ArrayTypeBlob

		assert_eq!(b.position(), FIELD_BLOB_SIZE);

		// ArrayTypeBlob at `array_blob_offset`.
		b.u8(TypeTag::Array as u8);
		b.u8(0x1); // has_length
		b.u8(0); // array_type = C
		b.u8(0);
		b.i32(2); // length
		b.i32(-1); // fixed_size (unused, has_size unset)
		b.u32(simple_type_word(TypeTag::UInt8, false)); // element param type

		let _ = type_slot_offset;
		let data = b.finish();
		let typelib = Arc::new(Typelib::new(Arc::from(data.into_boxed_slice()), test_header()));
		let repo = TestRepository::build(strings, Vec::new());
		handle_at(&repo, &typelib, Kind::Field, 0)
	}
}
