use kstruct_core::{Value, ValueTypeError};

#[test]
fn value_string_creates_arc_str_value() {
    let value = Value::string("hello");
    match value {
        Value::String(s) => assert_eq!(&*s, "hello"),
        other => panic!("unexpected value variant: {:?}", other),
    }
}

#[test]
fn typed_accessors_treat_null_as_absent() {
    assert_eq!(Value::Null.try_i32(), Ok(None));
    assert_eq!(Value::I32(5).try_i32(), Ok(Some(5)));
    assert_eq!(
        Value::I16(5).try_i32(),
        Err(ValueTypeError::new("I32", "I16"))
    );
}

#[test]
fn integer_widening_covers_every_integer_variant() {
    assert_eq!(Value::I8(-1).as_integer(), Some(-1));
    assert_eq!(Value::U32(u32::MAX).as_integer(), Some(i64::from(u32::MAX)));
    assert_eq!(Value::F64(1.0).as_integer(), None);
}

#[test]
fn integers_compare_by_numeric_value_across_widths() {
    assert_eq!(Value::I32(7), Value::U32(7));
    assert_eq!(Value::I8(-1), Value::I64(-1));
    assert_eq!(
        Value::Array(vec![Value::I32(1), Value::I32(3)]),
        Value::Array(vec![Value::I32(1), Value::I16(3)])
    );
    assert_ne!(Value::I32(-1), Value::U32(u32::MAX));
    assert_ne!(Value::I32(1), Value::F64(1.0));
    assert_ne!(Value::I32(1), Value::Bool(true));
}

#[test]
fn floats_compare_by_bits() {
    assert_eq!(Value::F64(f64::NAN), Value::F64(f64::NAN));
    assert_ne!(Value::F64(0.0), Value::F64(-0.0));
}

#[test]
fn display_is_a_generic_textual_form() {
    assert_eq!(Value::Null.to_string(), "null");
    assert_eq!(Value::string("a\"b").to_string(), "\"a\\\"b\"");
    assert_eq!(Value::bytes([0x41u8, 0x00]).to_string(), "b\"A\\x00\"");
    assert_eq!(
        Value::Array(vec![Value::I32(1), Value::Bool(true)]).to_string(),
        "[1, true]"
    );
    assert_eq!(Value::F64(2.0).to_string(), "2.0");
}

#[test]
fn option_conversion_maps_none_to_null() {
    assert_eq!(Value::from(None::<i32>), Value::Null);
    assert_eq!(Value::from(Some("x")), Value::string("x"));
}
