use arkbridge_buf::{ByteReader, ByteWriter};
use arkbridge_codec::{
    serde::{Serializer, SerializerOptions},
    value::{List, Map, Value},
};

fn roundtrip(value: &Value) -> Value {
    let data = arkbridge_codec::to_vec(value).expect("failed to encode value");
    arkbridge_codec::from_slice(&data).expect("failed to decode value")
}

#[test]
fn scalars() {
    let values = [
        Value::Null,
        Value::Bool(true),
        Value::Bool(false),
        Value::Int32(i32::MIN),
        Value::Int32(i32::MAX),
        Value::Int64(i64::MIN),
        Value::Int64(-1),
        Value::Double(3.141592653589793),
        Value::Double(f64::INFINITY),
        Value::Double(f64::MIN_POSITIVE),
        Value::from(""),
        Value::from("grüße, 世界"),
    ];

    for value in values {
        assert_eq!(roundtrip(&value), value);
    }
}

#[test]
fn special_doubles_keep_their_bits() {
    for v in [f64::NAN, -0.0, 0.0, f64::NEG_INFINITY] {
        match roundtrip(&Value::Double(v)) {
            Value::Double(out) => assert_eq!(out.to_bits(), v.to_bits()),
            other => panic!("expected double, got {other:?}"),
        }
    }

    let list = Value::ListDouble(vec![f64::NAN, -0.0, 1e300]);
    assert_eq!(roundtrip(&list), list);
}

#[test]
fn homogeneous_lists() {
    let values = [
        Value::ListUInt8((0..=255).collect()),
        Value::ListBool(vec![false, true, true, false]),
        Value::ListInt32(vec![0, -7, i32::MAX]),
        Value::ListInt64(vec![i64::MIN, 0, 1 << 40]),
        Value::ListDouble(vec![0.25, -2.0]),
        Value::ListString(vec!["".into(), "x".into(), "yz".into()]),
        Value::ListInt32(Vec::new()),
        Value::ListString(Vec::new()),
    ];

    for value in values {
        assert_eq!(roundtrip(&value), value);
    }
}

#[test]
fn long_string_uses_wide_prefix() {
    let short = "a".repeat(300);
    let long = "b".repeat(70_000);

    assert_eq!(roundtrip(&Value::from(short.as_str())), Value::from(short));
    assert_eq!(roundtrip(&Value::from(long.as_str())), Value::from(long));
}

#[test]
fn nested_containers() {
    let mut inner = Map::new();
    inner.insert(Value::Double(0.5), Value::ListInt64(vec![3]));
    inner.insert(Value::ListBool(vec![true]), Value::Null);

    let mut outer = Map::new();
    outer.insert(Value::from("inner"), Value::Map(inner));
    outer.insert(
        Value::from("list"),
        Value::CompositeList(List::from(vec![
            Value::Int32(1),
            Value::Double(1.5),
            Value::CompositeList(List::new()),
            Value::Map(Map::new()),
        ])),
    );

    let value = Value::from_args([Value::Map(outer), Value::Bool(false), Value::Double(-8.0)]);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn map_keys_of_every_kind() {
    let keys = [
        Value::Null,
        Value::Bool(false),
        Value::Int32(1),
        Value::Int64(1),
        Value::Double(1.0),
        Value::from("1"),
        Value::ListUInt8(vec![1]),
        Value::CompositeList(List::from(vec![Value::Int32(1)])),
    ];

    let map: Map = keys
        .iter()
        .cloned()
        .zip((0..).map(Value::Int32))
        .collect();
    assert_eq!(map.len(), keys.len());

    let value = Value::Map(map);
    assert_eq!(roundtrip(&value), value);
}

#[test]
fn values_in_a_shared_buffer() {
    let serializer = Serializer::default();
    let values = [
        Value::from("head"),
        Value::Double(9.75),
        Value::ListInt64(vec![5, 6]),
        Value::Int32(3),
        Value::ListDouble(vec![1.0]),
    ];

    let mut writer = ByteWriter::new();
    for value in &values {
        serializer.serialize_into(value, &mut writer).unwrap();
    }

    let data = writer.into_inner();
    let mut reader = ByteReader::new(&data);
    for value in &values {
        assert_eq!(&serializer.deserialize_from(&mut reader).unwrap(), value);
    }
    assert!(reader.is_empty());
}

#[test]
fn lenient_mode_reads_valid_input_identically() {
    let lenient = Serializer::new(SerializerOptions {
        lenient: true,
        ..Default::default()
    });

    let value = Value::from_args([
        Value::ListString(vec!["a".into()]),
        Value::Double(2.0),
        Value::Int64(-5),
    ]);
    let data = lenient.serialize(&value).unwrap();

    assert_eq!(lenient.deserialize(&data).unwrap(), value);
    assert_eq!(arkbridge_codec::from_slice(&data).unwrap(), value);
}

#[test]
fn arguments() {
    let args = Value::from_args(Vec::new());
    assert_eq!(arkbridge_codec::to_vec(&args).unwrap(), [14, 0]);
    assert!(roundtrip(&args).into_args(4).is_empty());

    let args = Value::from_args([Value::Int32(1), Value::from("two"), Value::Null]);
    let unpacked = roundtrip(&args).into_args(2);
    assert_eq!(unpacked, [Value::Int32(1), Value::from("two")]);

    assert!(Value::Int32(1).into_args(3).is_empty());
}

#[test]
fn deeply_nested_values_drop_safely() {
    let mut value = Value::Null;
    for i in 0..200_000 {
        value = if i % 2 == 0 {
            Value::CompositeList(List::from(vec![value]))
        } else {
            let mut map = Map::new();
            map.insert(Value::Int32(i), value);
            Value::Map(map)
        };
    }

    drop(value);
}
