use std::mem::size_of;

use arkbridge_buf::ByteWriter;

use super::{size, Error, Opcode};
use crate::value::{List, Map, Value};

pub fn serialize(writer: &mut ByteWriter, value: &Value) -> Result<(), Error> {
    writer.write_u8(Opcode::of(value).into());

    match value {
        // The opcode already carries everything there is to know.
        Value::Null | Value::Bool(..) => {}

        Value::Int32(v) => writer.write_i32(*v),
        Value::Int64(v) => writer.write_i64(*v),
        Value::Double(v) => {
            writer.write_alignment(size_of::<f64>());
            writer.write_f64(*v);
        }
        Value::String(v) => write_string(writer, v)?,

        Value::ListUInt8(v) => write_block(writer, v.as_slice(), ByteWriter::write_bytes)?,
        Value::ListBool(v) => write_list_bool(writer, v)?,
        Value::ListInt32(v) => write_block(writer, v.as_slice(), ByteWriter::write_i32_slice)?,
        Value::ListInt64(v) => write_block(writer, v.as_slice(), ByteWriter::write_i64_slice)?,
        Value::ListDouble(v) => write_block(writer, v.as_slice(), ByteWriter::write_f64_slice)?,
        Value::ListString(v) => write_list_string(writer, v)?,

        Value::Map(v) => write_map(writer, v)?,
        Value::CompositeList(v) => write_composite_list(writer, v)?,
    }

    Ok(())
}

fn write_string(writer: &mut ByteWriter, v: &str) -> Result<(), Error> {
    size::write_size(writer, v.len())?;
    if !v.is_empty() {
        writer.write_bytes(v.as_bytes());
    }

    Ok(())
}

// Homogeneous numeric blocks are aligned to their element size, but only
// when there is at least one element to align.
fn write_block<T, F>(writer: &mut ByteWriter, values: &[T], f: F) -> Result<(), Error>
where
    F: FnOnce(&mut ByteWriter, &[T]),
{
    size::write_size(writer, values.len())?;
    if values.is_empty() {
        return Ok(());
    }

    let width = size_of::<T>();
    if width > 1 {
        writer.write_alignment(width);
    }
    f(writer, values);

    Ok(())
}

fn write_list_bool(writer: &mut ByteWriter, values: &[bool]) -> Result<(), Error> {
    size::write_size(writer, values.len())?;
    writer.reserve(values.len());
    for &v in values {
        writer.write_u8(Opcode::of_bool(v).into());
    }

    Ok(())
}

fn write_list_string(writer: &mut ByteWriter, values: &[String]) -> Result<(), Error> {
    size::write_size(writer, values.len())?;
    for v in values {
        write_string(writer, v)?;
    }

    Ok(())
}

fn write_map(writer: &mut ByteWriter, map: &Map) -> Result<(), Error> {
    size::write_size(writer, map.len())?;
    for (key, value) in map {
        serialize(writer, key)?;
        serialize(writer, value)?;
    }

    Ok(())
}

fn write_composite_list(writer: &mut ByteWriter, list: &List) -> Result<(), Error> {
    size::write_size(writer, list.len())?;
    for value in list {
        serialize(writer, value)?;
    }

    Ok(())
}
