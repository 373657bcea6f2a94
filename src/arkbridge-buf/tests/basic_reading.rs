use arkbridge_buf::{ByteReader, UnexpectedEof};

#[test]
fn read_primitives() -> Result<(), UnexpectedEof> {
    let data = [0xFF, 0xAD, 0xDE, 0xFE, 0xFF, 0xFF, 0xFF];
    let mut reader = ByteReader::new(&data);

    assert_eq!(reader.read_u8()?, 0xFF);
    assert_eq!(reader.read_u16()?, 0xDEAD);
    assert_eq!(reader.read_i32()?, -2);

    assert!(reader.is_empty());
    assert_eq!(reader.position(), 7);

    Ok(())
}

#[test]
fn read_element_blocks() -> Result<(), UnexpectedEof> {
    let mut data = Vec::new();
    data.extend_from_slice(&7i64.to_le_bytes());
    data.extend_from_slice(&(-3i64).to_le_bytes());

    let mut reader = ByteReader::new(&data);
    let mut out = [0i64; 2];
    reader.read_i64_into(&mut out)?;

    assert_eq!(out, [7, -3]);
    Ok(())
}

#[test]
fn strict_underrun() {
    let mut reader = ByteReader::new(&[1, 2]);

    assert_eq!(
        reader.read_i32(),
        Err(UnexpectedEof {
            position: 0,
            needed: 4,
            remaining: 2
        })
    );

    // A failed read does not move the cursor.
    assert_eq!(reader.position(), 0);
    assert_eq!(reader.read_u16(), Ok(0x0201));
    assert!(reader.read_u8().is_err());
}

#[test]
fn lenient_underrun() {
    let mut reader = ByteReader::lenient(&[9]);

    assert_eq!(reader.read_u8(), Ok(9));
    assert_eq!(reader.read_u8(), Ok(0));
    assert_eq!(reader.read_i64(), Ok(0));

    let mut out = [0xAA; 3];
    assert_eq!(reader.read_into(&mut out), Ok(()));
    assert_eq!(out, [0xAA; 3]);

    assert!(reader.ensure(100).is_ok());
}

#[test]
fn read_alignment() -> Result<(), UnexpectedEof> {
    let data = [1, 0, 0, 0, 2, 0, 0, 0, 3];
    let mut reader = ByteReader::new(&data);

    reader.skip_alignment(4)?;
    assert_eq!(reader.position(), 0);

    assert_eq!(reader.read_u8()?, 1);
    reader.skip_alignment(4)?;
    assert_eq!(reader.read_u8()?, 2);
    reader.skip_alignment(8)?;
    assert_eq!(reader.read_u8()?, 3);

    assert!(reader.skip_alignment(2).is_err());
    assert_eq!(reader.position(), 9);

    Ok(())
}

#[test]
fn lenient_alignment_clamps() {
    let mut reader = ByteReader::lenient(&[1, 0]);

    assert_eq!(reader.read_u8(), Ok(1));
    assert_eq!(reader.skip_alignment(8), Ok(()));
    assert!(reader.is_empty());
}
