use arkbridge_codec::{
    serde::{Error, Serializer, SerializerOptions},
    value::{List, Value},
};

fn strict(data: &[u8]) -> Result<Value, Error> {
    arkbridge_codec::from_slice(data)
}

fn lenient(data: &[u8]) -> Result<Value, Error> {
    Serializer::new(SerializerOptions {
        lenient: true,
        ..Default::default()
    })
    .deserialize(data)
}

fn nested_lists(depth: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(depth * 2);
    for _ in 1..depth {
        data.extend_from_slice(&[14, 1]);
    }
    data.extend_from_slice(&[14, 0]);

    data
}

#[test]
fn truncated_input() {
    assert!(matches!(strict(&[]), Err(Error::Eof(..))));

    match strict(&[3, 1, 2]) {
        Err(Error::Eof(e)) => {
            assert_eq!(e.position, 1);
            assert_eq!(e.needed, 4);
            assert_eq!(e.remaining, 2);
        }
        other => panic!("expected EOF, got {other:?}"),
    }

    assert!(matches!(strict(&[6, 5, b'a']), Err(Error::Eof(..))));
    assert!(matches!(strict(&[5, 0, 0]), Err(Error::Eof(..))));
    assert!(matches!(strict(&[6, 0xFE, 0x01]), Err(Error::Eof(..))));
    assert!(matches!(strict(&[13, 1, 0]), Err(Error::Eof(..))));
    assert!(matches!(strict(&[9, 2, 0, 0, 1, 0, 0, 0]), Err(Error::Eof(..))));
}

#[test]
fn huge_declared_lengths_fail_before_allocating() {
    let string = [6, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];
    match strict(&string) {
        Err(Error::Eof(e)) => assert_eq!(e.needed, u32::MAX as usize),
        other => panic!("expected EOF, got {other:?}"),
    }

    let block = [10, 0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0, 0];
    assert!(matches!(strict(&block), Err(Error::Eof(..))));

    let bools = [8, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 1];
    assert!(matches!(strict(&bools), Err(Error::Eof(..))));
}

#[test]
fn unknown_opcode() {
    assert!(matches!(strict(&[15]), Err(Error::UnknownOpcode(15))));
    assert!(matches!(
        strict(&[14, 2, 0, 0xC0]),
        Err(Error::UnknownOpcode(0xC0))
    ));
}

#[test]
fn trailing_data() {
    assert!(matches!(strict(&[0, 0]), Err(Error::TrailingData(1))));
    assert!(matches!(
        strict(&[3, 1, 0, 0, 0, 9, 9, 9]),
        Err(Error::TrailingData(3))
    ));
}

#[test]
fn invalid_utf8() {
    assert!(matches!(strict(&[6, 2, 0xC3, 0x28]), Err(Error::Utf8(..))));
    assert!(matches!(
        strict(&[12, 1, 1, 0xFF]),
        Err(Error::Utf8(..))
    ));
}

#[test]
fn recursion_limit() {
    let limited = |limit| {
        Serializer::new(SerializerOptions {
            recursion_limit: limit,
            ..Default::default()
        })
    };

    let data = nested_lists(2);
    assert!(matches!(limited(1).deserialize(&data), Err(Error::Recursion)));
    assert!(limited(2).deserialize(&data).is_ok());

    assert!(strict(&nested_lists(128)).is_ok());
    assert!(matches!(strict(&nested_lists(129)), Err(Error::Recursion)));
    assert!(matches!(lenient(&nested_lists(129)), Err(Error::Recursion)));

    // Maps count towards the same limit.
    let data = [13, 1, 0, 14, 0];
    assert!(matches!(limited(1).deserialize(&data), Err(Error::Recursion)));
    assert!(limited(2).deserialize(&data).is_ok());
}

#[test]
fn duplicate_map_keys_keep_the_first_value() {
    let data = [
        13, 2, //
        3, 1, 0, 0, 0, 6, 1, b'a', //
        3, 1, 0, 0, 0, 6, 1, b'b',
    ];

    for result in [strict(&data), lenient(&data)] {
        match result {
            Ok(Value::Map(map)) => {
                assert_eq!(map.len(), 1);
                assert_eq!(map.get(&Value::Int32(1)), Some(&Value::from("a")));
            }
            other => panic!("expected map, got {other:?}"),
        }
    }
}

#[test]
fn lenient_truncation_reads_zeros() {
    assert_eq!(lenient(&[]).unwrap(), Value::Null);
    assert_eq!(lenient(&[3, 1]).unwrap(), Value::Int32(0));
    assert_eq!(lenient(&[4]).unwrap(), Value::Int64(0));
    assert_eq!(lenient(&[5]).unwrap(), Value::Double(0.0));
    assert_eq!(lenient(&[6, 3, b'a']).unwrap(), Value::from("\0\0\0"));
    assert_eq!(lenient(&[9, 2, 0, 0, 1]).unwrap(), Value::ListInt32(vec![0, 0]));
    assert_eq!(
        lenient(&[14, 2, 1]).unwrap(),
        Value::CompositeList(List::from(vec![Value::Bool(true), Value::Null]))
    );
}

#[test]
fn lenient_degrades_bad_input() {
    assert_eq!(lenient(&[0x20]).unwrap(), Value::Null);
    assert_eq!(
        lenient(&[14, 2, 0x99, 1]).unwrap(),
        Value::CompositeList(List::from(vec![Value::Null, Value::Bool(true)]))
    );

    assert_eq!(
        lenient(&[6, 2, 0xC3, 0x28]).unwrap(),
        Value::from("\u{FFFD}(")
    );

    assert_eq!(lenient(&[0, 0, 0]).unwrap(), Value::Null);
    assert_eq!(lenient(&[1, 7]).unwrap(), Value::Bool(true));
}

#[test]
fn list_bool_elements_other_than_true_read_as_false() {
    let data = [8, 3, 1, 2, 7];
    let expected = Value::ListBool(vec![true, false, false]);

    assert_eq!(strict(&data).unwrap(), expected);
    assert_eq!(lenient(&data).unwrap(), expected);

    assert_eq!(strict(&[8, 0]).unwrap(), Value::ListBool(Vec::new()));
    assert!(matches!(strict(&[8, 2, 1]), Err(Error::Eof(..))));
}
