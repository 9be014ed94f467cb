//! End-to-end scenario coverage exercised through the public API only,
//! using the fixture builders shared via the `test-util` feature.

use typelib_core::testing::fixtures::{
    constant_fixture, enum_fixture, object_fixture, object_with_vfunc_fixture, struct_fixture,
    union_fixture,
};
use typelib_core::{ConstantValue, TypeTag, NO_INVOKER};

#[test]
fn s1_enum_walk() {
    let e = enum_fixture("Color", TypeTag::Int32, &[("Red", 0), ("Green", 1), ("Blue", 2)]);
    assert_eq!(e.enum_n_values(), 3);
    let names: Vec<_> = (0..e.enum_n_values())
        .map(|i| e.enum_value(i).unwrap().value_name().to_string())
        .collect();
    assert_eq!(names, vec!["Red", "Green", "Blue"]);
    assert_eq!(e.enum_value(1).unwrap().value_value(), 1);
}

#[test]
fn s2_struct_with_embedded_callback_field() {
    let s = struct_fixture(&[("plain", TypeTag::Int32, false), ("cb", TypeTag::Void, true)], &["do_it"]);
    assert_eq!(s.struct_n_fields(), 2);
    assert_eq!(s.struct_n_methods(), 1);
    let method = s.struct_method(0).unwrap();
    assert_eq!(method.function_name().as_ref(), "do_it");
    let cb_field = s.struct_field(1).unwrap();
    assert!(cb_field.field_has_embedded_type());
    assert!(cb_field.field_type().is_pointer());
}

#[test]
fn s3_discriminated_union() {
    let u = union_fixture(2, 1, TypeTag::Int32, &[0, 1]);
    assert!(u.union_is_discriminated());
    assert_eq!(u.union_n_fields(), 2);
    assert_eq!(u.union_n_methods(), 1);
    let discriminator = u.union_discriminator(0).unwrap();
    assert_eq!(discriminator.constant_value().unwrap().as_i64(), Some(0));
}

#[test]
fn s4_object_with_odd_interface_count() {
    let o = object_fixture(3, 0, 1, 2);
    assert_eq!(o.object_n_interfaces(), 3);
    for i in 0..3 {
        assert!(o.object_interface(i).is_some());
    }
    assert!(o.object_property(0).is_some());
    assert_eq!(o.object_n_methods(), 2);
}

#[test]
fn s5_constant_decodes_basic_scalar() {
    let c = constant_fixture("MAX", TypeTag::Int32, &42i32.to_le_bytes());
    assert_eq!(c.constant_name().as_ref(), "MAX");
    assert_eq!(c.constant_value().unwrap(), ConstantValue::Int32(42));
}

#[test]
fn s6_vfunc_with_no_invoker() {
    let o = object_with_vfunc_fixture(NO_INVOKER);
    let vfunc = o.object_vfunc(0).unwrap();
    assert_eq!(vfunc.vfunc_name().as_ref(), "do_thing");
    assert!(vfunc.vfunc_invoker().is_none());
}
