//! Tests for the hash-consed type universe.

use vela_analyzer::types::{PrimitiveTag, TypeUniverse};
use vela_ast::nodes::ModifierToken;

#[test]
fn test_primitive_interning_returns_same_handle() {
    let mut universe = TypeUniverse::new();
    let a = universe.get_primitive(PrimitiveTag::I32);
    let b = universe.get_primitive(PrimitiveTag::I32);
    assert_eq!(a, b);

    let c = universe.get_primitive(PrimitiveTag::U8);
    assert_ne!(a, c);
}

#[test]
fn test_pointer_interning_is_keyed_by_pointee() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let u8_ty = universe.get_primitive(PrimitiveTag::U8);

    let p1 = universe.get_pointer(i32_ty);
    let p2 = universe.get_pointer(i32_ty);
    let p3 = universe.get_pointer(u8_ty);

    assert_eq!(p1, p2);
    assert_ne!(p1, p3);
}

#[test]
fn test_array_interning_is_keyed_by_inner_and_length() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);

    let a = universe.get_array(i32_ty, 4);
    let b = universe.get_array(i32_ty, 4);
    let c = universe.get_array(i32_ty, 8);

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_tuple_interning_is_order_sensitive() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let u8_ty = universe.get_primitive(PrimitiveTag::U8);

    let t1 = universe.get_tuple(vec![i32_ty, u8_ty]);
    let t2 = universe.get_tuple(vec![i32_ty, u8_ty]);
    let t3 = universe.get_tuple(vec![u8_ty, i32_ty]);

    assert_eq!(t1, t2);
    assert_ne!(t1, t3);
}

#[test]
fn test_function_interning_is_keyed_by_params_and_return() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let bool_ty = universe.get_primitive(PrimitiveTag::Bool);

    let f1 = universe.get_function(vec![i32_ty], bool_ty);
    let f2 = universe.get_function(vec![i32_ty], bool_ty);
    let f3 = universe.get_function(vec![i32_ty], i32_ty);

    assert_eq!(f1, f2);
    assert_ne!(f1, f3);
}

#[test]
fn test_type_var_interning_is_keyed_by_name() {
    let mut universe = TypeUniverse::new();
    let a = universe.get_type_var("a");
    let b = universe.get_type_var("a");
    let c = universe.get_type_var("b");

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_named_type_stub_then_create() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);

    let stub = universe.get_named("List");
    let same_stub = universe.get_named("List");
    assert_eq!(stub, same_stub, "get_named must always return the same handle for a name");

    assert_eq!(universe.size_in_bits(stub, false), None, "an unresolved named type can't be sized");

    universe.create_named(stub, vec![i32_ty], false);
    assert_eq!(universe.size_in_bits(stub, false), Some(32));

    let still_same = universe.get_named("List");
    assert_eq!(stub, still_same, "create_named must not mint a new handle");
}

#[test]
#[should_panic(expected = "non-named")]
fn test_create_named_panics_on_non_named_handle() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    universe.create_named(i32_ty, vec![], false);
}

#[test]
fn test_modifier_interning_deduplicates_and_sorts_tokens() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);

    let m1 = universe.get_modifier(vec![ModifierToken::Mut, ModifierToken::Ante], i32_ty);
    let m2 = universe.get_modifier(vec![ModifierToken::Ante, ModifierToken::Mut], i32_ty);
    let m3 = universe.get_modifier(vec![ModifierToken::Mut, ModifierToken::Mut], i32_ty);

    assert_eq!(m1, m2, "modifier order should not affect identity");
    assert_ne!(m1, m3, "a different modifier set should mint a distinct handle");
}

#[test]
fn test_size_in_bits_primitives() {
    let mut universe = TypeUniverse::new();
    let cases = [
        (PrimitiveTag::I8, 8),
        (PrimitiveTag::U8, 8),
        (PrimitiveTag::Bool, 8),
        (PrimitiveTag::I16, 16),
        (PrimitiveTag::F16, 16),
        (PrimitiveTag::I32, 32),
        (PrimitiveTag::Char, 32),
        (PrimitiveTag::F32, 32),
        (PrimitiveTag::I64, 64),
        (PrimitiveTag::F64, 64),
        (PrimitiveTag::Void, 0),
    ];
    for (tag, expected) in cases {
        let id = universe.get_primitive(tag);
        assert_eq!(universe.size_in_bits(id, false), Some(expected), "{tag:?} should be {expected} bits");
    }
}

#[test]
fn test_size_in_bits_pointer_and_function_are_word_sized() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let ptr = universe.get_pointer(i32_ty);
    let func = universe.get_function(vec![i32_ty], i32_ty);

    assert_eq!(universe.size_in_bits(ptr, false), Some(usize::BITS));
    assert_eq!(universe.size_in_bits(func, false), Some(usize::BITS));
}

#[test]
fn test_size_in_bits_array() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);

    let empty = universe.get_array(i32_ty, 0);
    assert_eq!(universe.size_in_bits(empty, false), Some(0));

    let four = universe.get_array(i32_ty, 4);
    assert_eq!(universe.size_in_bits(four, false), Some(128));
}

#[test]
fn test_size_in_bits_tuple_sums_fields() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let u8_ty = universe.get_primitive(PrimitiveTag::U8);

    let tuple = universe.get_tuple(vec![i32_ty, u8_ty]);
    assert_eq!(universe.size_in_bits(tuple, false), Some(40));
}

#[test]
fn test_size_in_bits_type_var_is_none_unless_forced() {
    let mut universe = TypeUniverse::new();
    let var = universe.get_type_var("a");

    assert_eq!(universe.size_in_bits(var, false), None);
    assert_eq!(universe.size_in_bits(var, true), Some(usize::BITS));
}

#[test]
fn test_size_in_bits_tuple_containing_unresolved_var_is_none() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let var = universe.get_type_var("a");

    let tuple = universe.get_tuple(vec![i32_ty, var]);
    assert_eq!(universe.size_in_bits(tuple, false), None);
    assert_eq!(universe.size_in_bits(tuple, true), Some(32 + usize::BITS));
}

#[test]
fn test_size_in_bits_modifier_delegates_to_inner() {
    let mut universe = TypeUniverse::new();
    let i32_ty = universe.get_primitive(PrimitiveTag::I32);
    let wrapped = universe.get_modifier(vec![ModifierToken::Mut], i32_ty);

    assert_eq!(universe.size_in_bits(wrapped, false), Some(32));
}

#[test]
fn test_resolve_panics_on_foreign_type_id() {
    let universe = TypeUniverse::new();
    let other_universe_id = {
        let mut scratch = TypeUniverse::new();
        scratch.get_primitive(PrimitiveTag::I32)
    };

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
        universe.resolve(other_universe_id);
    }));
    assert!(result.is_err(), "resolving a TypeId from an empty universe should panic");
}
