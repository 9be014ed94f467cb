//! The handful of fundamental type identifiers a `RegisteredType` resolves
//! to without calling into a dynamic library, plus the generic "no type"
//! sentinel returned when a type-init symbol is absent or unresolvable.

/// An opaque runtime type identifier. The crate never interprets the
/// numeric value beyond the reserved sentinels below; any other value is
/// whatever the resolved type-init symbol returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GType(pub usize);

impl GType {
	/// Returned when a registered type has no type-init symbol, or the
	/// symbol could not be found.
	pub const NONE: GType = GType(0);
	pub const OBJECT: GType = GType(1);
	pub const INTERFACE: GType = GType(2);
	pub const ENUM: GType = GType(3);
	pub const FLAGS: GType = GType(4);
	pub const BOXED: GType = GType(5);
	/// A name was interned (its `type_init` is the literal string
	/// `"intern"`) but does not match any of the well-known fundamental
	/// names this crate recognizes.
	pub const INTERNED_UNKNOWN: GType = GType(6);
}

/// Resolves the well-known fundamental types a `type_init` of `"intern"`
/// may name. This is a deliberately small table (`GObject`, `GInterface`,
/// `GEnum`, `GFlags`, `GBoxed`), not the full fundamental-type registry a
/// real running library would carry; anything else interned falls back to
/// [`GType::INTERNED_UNKNOWN`]. See the design notes for the rationale.
pub fn intern_fundamental(type_name: &str) -> GType {
	match type_name {
		"GObject" => GType::OBJECT,
		"GInterface" => GType::INTERFACE,
		"GEnum" => GType::ENUM,
		"GFlags" => GType::FLAGS,
		"GBoxed" => GType::BOXED,
		_ => GType::INTERNED_UNKNOWN,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_fundamental_names_resolve() {
		assert_eq!(intern_fundamental("GObject"), GType::OBJECT);
		assert_eq!(intern_fundamental("GEnum"), GType::ENUM);
	}

	#[test]
	fn unknown_interned_name_falls_back() {
		assert_eq!(intern_fundamental("GWidget"), GType::INTERNED_UNKNOWN);
	}
}
