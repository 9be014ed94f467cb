//! Resolves the source format's deferred-hashing TODO (`/* FIXME hash */`
//! in the implementation this crate is grounded on): `find_method` and
//! `find_vfunc` are documented as a linear scan, but nothing stops a
//! container from memoizing a `name -> offset` index the first time one of
//! its sections is searched. The index is keyed by the identity of the
//! typelib plus the container's own offset, not by anything global or
//! thread-local, so it never outlives the blob it was built from and two
//! containers at different offsets never collide.

use std::sync::{Arc, Mutex, OnceLock};

use fxhash::FxHashMap;

use crate::handle::InfoHandle;

type CacheKey = (usize, u32);
type NameMap = FxHashMap<Box<str>, u32>;

fn registry() -> &'static Mutex<FxHashMap<CacheKey, Arc<NameMap>>> {
	static REGISTRY: OnceLock<Mutex<FxHashMap<CacheKey, Arc<NameMap>>>> = OnceLock::new();
	REGISTRY.get_or_init(|| Mutex::new(FxHashMap::default()))
}

fn cache_key(container: &InfoHandle) -> CacheKey {
	(Arc::as_ptr(container.typelib()) as *const u8 as usize, container.offset())
}

/// Looks up `name` among `count` elements of a container's section, each
/// addressed by `element_offset(i)` and named by `element_name(i)`. Builds
/// and memoizes the full `name -> offset` map on first use; later lookups
/// against the same container/section reuse it.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(name)))]
pub(crate) fn find_by_name(
	container: &InfoHandle,
	count: u32,
	element_offset: impl Fn(u32) -> u32,
	element_name: impl Fn(u32) -> Arc<str>,
	name: &str,
) -> Option<u32> {
	let key = cache_key(container);

	if let Some(map) = registry().lock().unwrap().get(&key) {
		return map.get(name).copied();
	}

	let mut map = NameMap::default();
	for i in 0..count {
		let offset = element_offset(i);
		let element = element_name(i);
		// Insertion order wins on duplicate names, matching the semantics
		// of a first-match linear scan.
		map.entry(element.as_ref().into()).or_insert(offset);
	}

	let result = map.get(name).copied();
	registry().lock().unwrap().insert(key, Arc::new(map));
	result
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn first_match_wins_on_duplicate_names() {
		let mut map = NameMap::default();
		map.entry("a".into()).or_insert(10);
		map.entry("a".into()).or_insert(20);
		assert_eq!(map.get("a").copied(), Some(10));
	}
}
