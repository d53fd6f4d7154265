//! Records built from the Kafka field types.

use std::sync::{Arc, LazyLock};

use kstruct_core::{Field, Schema, StructType, Value};
use kstruct_types::{Array, Int16, Int32, KString, TaggedFields, UInt32};
use pretty_assertions::assert_eq;

static ID_NAME: LazyLock<StructType> = LazyLock::new(|| {
    let schema = Schema::new(vec![Field::new("id", UInt32), Field::new("name", KString)])
        .expect("schema");
    StructType::new("IdName", Arc::new(schema))
});

#[test]
fn id_and_name_encode_to_known_bytes() {
    let record = ID_NAME
        .named([("id", Value::U32(7)), ("name", Value::string("kafka"))])
        .expect("construct");
    let wire = record.encode().expect("encode");
    assert_eq!(wire, b"\x00\x00\x00\x07\x00\x05kafka");

    let decoded = ID_NAME.decode_bytes(&wire).expect("decode");
    assert_eq!(decoded, record);
    assert_eq!(decoded.to_string(), "IdName(id=7, name=\"kafka\")");
}

#[test]
fn integer_literals_round_trip_through_a_wider_field() {
    // `7` is an `i32` literal; the field is `UInt32`.
    let record = ID_NAME
        .named([("id", Value::from(7)), ("name", Value::from("kafka"))])
        .expect("construct");
    let wire = record.encode().expect("encode");
    assert_eq!(wire, b"\x00\x00\x00\x07\x00\x05kafka");

    let decoded = ID_NAME.decode_bytes(&wire).expect("decode");
    assert_eq!(decoded.get("id").expect("id"), &Value::U32(7));
    assert_eq!(decoded, record);
}

#[test]
fn unknown_keyword_against_id_name_fails() {
    let err = ID_NAME
        .named([("foo", Value::I32(1))])
        .expect_err("construct should fail");
    assert_eq!(
        err.to_string(),
        "IdName: keyword(s) not in schema [\"id\", \"name\"]: foo"
    );
}

#[test]
fn omitted_nullable_field_encodes_as_null() {
    let record = ID_NAME.named([("id", 1u32)]).expect("construct");
    assert_eq!(record.encode().expect("encode"), [0, 0, 0, 1, 0xff, 0xff]);
}

#[test]
fn omitted_non_nullable_field_fails_at_encode_time() {
    let record = ID_NAME.named([("name", "x")]).expect("construct");
    let err = record.encode().expect_err("encode should fail");
    assert!(err.to_string().starts_with("field 'id'"));
}

#[test]
fn request_like_record_with_nested_array_of_records() {
    let partition = StructType::new(
        "Partition",
        Arc::new(
            Schema::new(vec![
                Field::new("partition", Int32),
                Field::new("error_code", Int16),
            ])
            .expect("schema"),
        ),
    );
    let topic = StructType::new(
        "Topic",
        Arc::new(
            Schema::new(vec![
                Field::new("name", KString),
                Field::new("partitions", Array::new(partition.clone())),
                Field::new("tags", TaggedFields),
            ])
            .expect("schema"),
        ),
    );

    let p0 = partition.positional(vec![Value::I32(0), Value::I16(0)]).expect("p0");
    let p1 = partition.positional(vec![Value::I32(1), Value::I16(3)]).expect("p1");
    let record = topic
        .positional(vec![
            Value::string("t"),
            Value::Array(vec![
                Value::Struct(p0),
                Value::Struct(p1),
            ]),
            Value::Array(vec![]),
        ])
        .expect("construct");

    let wire = record.encode().expect("encode");
    assert_eq!(
        wire,
        [
            0, 1, b't', // name
            0, 0, 0, 2, // partitions count
            0, 0, 0, 0, 0, 0, // p0
            0, 0, 0, 1, 0, 3, // p1
            0, // tags
        ]
    );

    let decoded = topic.decode_bytes(&wire).expect("decode");
    assert_eq!(decoded, record);
    let partitions = decoded
        .get("partitions")
        .expect("partitions")
        .try_array()
        .expect("array")
        .expect("non-null");
    let second = partitions[1].try_struct().expect("struct").expect("non-null");
    assert_eq!(second.get("error_code").expect("error_code"), &Value::I16(3));
    assert_eq!(
        decoded.to_string(),
        "Topic(name=\"t\", partitions=[Partition(partition=0, error_code=0), \
         Partition(partition=1, error_code=3)], tags=[])"
    );
}

#[test]
fn nested_record_field_requires_an_instance() {
    let partition = StructType::new(
        "Partition",
        Arc::new(
            Schema::new(vec![
                Field::new("partition", Int32),
                Field::new("error_code", Int16),
            ])
            .expect("schema"),
        ),
    );
    let holder = StructType::new(
        "Holder",
        Arc::new(
            Schema::new(vec![Field::new("partitions", Array::new(partition))])
                .expect("schema"),
        ),
    );
    let record = holder
        .positional(vec![Value::Array(vec![Value::Array(vec![
            Value::I32(1),
            Value::I16(3),
        ])])])
        .expect("construct");
    let err = record.encode().expect_err("encode should fail");
    assert_eq!(
        err.to_string(),
        "field 'partitions': field '[0]': expected Struct Partition value, found Array"
    );
}
