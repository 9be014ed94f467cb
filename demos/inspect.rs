//! Demo binary: memory-maps a typelib blob and walks every entry a supplied
//! directory describes, printing names as it goes. This is a thin harness
//! around the library and not part of its public API; it exists to give a
//! human something to run against a real blob while exercising the
//! `mmap-demo` feature's `memmap2` dependency.

use std::env::args;
use std::fs::File;
use std::sync::Arc;

use memmap2::Mmap;

use typelib_core::{Header, InfoHandle, Kind, Typelib};

fn main() {
    let path = args().nth(1).expect("usage: inspect <typelib-file> <root-entry-offset>");
    let offset: u32 = args().nth(2).expect("usage: inspect <typelib-file> <root-entry-offset>").parse().expect("offset must be a u32");

    let file = File::open(&path).expect("failed to open typelib file");
    let mmap = unsafe { Mmap::map(&file) }.expect("failed to mmap typelib file");
    let data: Arc<[u8]> = Arc::from(&mmap[..]);

    // A real loader parses this from the blob's own header record; this demo
    // has no loader, so it assumes a header sized for an Object record.
    let header = Header {
        enum_blob_size: 12,
        value_blob_size: 8,
        struct_blob_size: 12,
        union_blob_size: 28,
        object_blob_size: 28,
        interface_blob_size: 24,
        field_blob_size: 16,
        property_blob_size: 12,
        signal_blob_size: 8,
        vfunc_blob_size: 12,
        constant_blob_size: 16,
        function_blob_size: 12,
        callback_blob_size: 12,
    };
    let typelib = Arc::new(Typelib::new(data, header));
    let repository = Arc::new(NullRepository);
    let root = InfoHandle::try_new_info(Kind::Object, repository, typelib, offset, None)
        .expect("root offset does not name a well-formed object record");

    println!("object: {}", root.object_type_name());
    for i in 0..root.object_n_methods() {
        if let Some(method) = root.object_method(i) {
            println!("  method[{i}]: {}", method.function_name());
        }
    }
}

#[derive(Debug)]
struct NullRepository;

impl typelib_core::Repository for NullRepository {
    fn string_at(&self, typelib: &Arc<Typelib>, offset: u32) -> Arc<str> {
        let bytes = typelib.data();
        let start = offset as usize;
        let end = bytes[start..].iter().position(|&b| b == 0).map(|n| start + n).unwrap_or(bytes.len());
        Arc::from(String::from_utf8_lossy(&bytes[start..end]).into_owned())
    }

    fn resolve(&self, _typelib: &Arc<Typelib>, _entry: u16) -> Option<InfoHandle> {
        None
    }

    fn lookup_symbol(&self, _typelib: &Arc<Typelib>, _name: &str) -> Option<typelib_core::GTypeInitFn> {
        None
    }
}
