use std::mem::size_of;

use arkbridge_buf::{ByteReader, UnexpectedEof};

use super::{size, Error, Opcode, SerializerOptions};
use crate::value::{List, Map, Value};

pub struct Decoder<'o> {
    options: &'o SerializerOptions,
    depth_left: u8,
}

impl<'o> Decoder<'o> {
    pub fn new(options: &'o SerializerOptions) -> Self {
        Self {
            options,
            depth_left: options.recursion_limit,
        }
    }

    #[inline]
    fn with_recursion_limit<F, T>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Self) -> Result<T, Error>,
    {
        self.depth_left = self.depth_left.checked_sub(1).ok_or(Error::Recursion)?;
        let res = f(self);
        self.depth_left += 1;

        res
    }

    pub fn value(&mut self, reader: &mut ByteReader<'_>) -> Result<Value, Error> {
        let offset = reader.position();
        let op = match Opcode::try_from(reader.read_u8()?) {
            Ok(op) => op,
            Err(raw) if self.options.lenient => {
                log::warn!("Unknown value opcode {raw:#04x} at offset {offset}; reading null");
                return Ok(Value::Null);
            }
            Err(raw) => return Err(Error::UnknownOpcode(raw)),
        };
        log::trace!("Reading {op:?} at offset {offset}");

        let value = match op {
            Opcode::Null => Value::Null,
            Opcode::True => Value::Bool(true),
            Opcode::False => Value::Bool(false),

            Opcode::Int32 => Value::Int32(reader.read_i32()?),
            Opcode::Int64 => Value::Int64(reader.read_i64()?),
            Opcode::Double => {
                reader.skip_alignment(size_of::<f64>())?;
                Value::Double(reader.read_f64()?)
            }
            Opcode::String => Value::String(self.string(reader)?),

            Opcode::ListUInt8 => Value::ListUInt8(read_block(reader, ByteReader::read_into)?),
            Opcode::ListBool => Value::ListBool(read_list_bool(reader)?),
            Opcode::ListInt32 => Value::ListInt32(read_block(reader, ByteReader::read_i32_into)?),
            Opcode::ListInt64 => Value::ListInt64(read_block(reader, ByteReader::read_i64_into)?),
            Opcode::ListDouble => {
                Value::ListDouble(read_block(reader, ByteReader::read_f64_into)?)
            }
            Opcode::ListString => Value::ListString(self.list_string(reader)?),

            Opcode::Map => Value::Map(self.with_recursion_limit(|this| this.map(reader))?),
            Opcode::CompositeList => {
                Value::CompositeList(self.with_recursion_limit(|this| this.composite_list(reader))?)
            }
        };

        Ok(value)
    }

    fn string(&self, reader: &mut ByteReader<'_>) -> Result<String, Error> {
        let len = size::read_size(reader)?;
        reader.ensure(len)?;

        let mut buf = vec![0; len];
        reader.read_into(&mut buf)?;

        match String::from_utf8(buf) {
            Ok(s) => Ok(s),
            Err(e) if self.options.lenient => {
                log::warn!("{e}; replacing invalid sequences");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
            Err(e) => Err(e.into()),
        }
    }

    fn list_string(&self, reader: &mut ByteReader<'_>) -> Result<Vec<String>, Error> {
        let len = size::read_size(reader)?;

        let mut out = Vec::with_capacity(len.min(reader.remaining()));
        for _ in 0..len {
            out.push(self.string(reader)?);
        }

        Ok(out)
    }

    fn map(&mut self, reader: &mut ByteReader<'_>) -> Result<Map, Error> {
        let len = size::read_size(reader)?;

        let mut map = Map::new();
        for _ in 0..len {
            let key = self.value(reader)?;
            let value = self.value(reader)?;

            // The first occurrence of a key wins.
            if map.contains_key(&key) {
                log::debug!("Discarding value for duplicate map key {key:?}");
                continue;
            }
            map.insert(key, value);
        }

        Ok(map)
    }

    fn composite_list(&mut self, reader: &mut ByteReader<'_>) -> Result<List, Error> {
        let len = size::read_size(reader)?;

        let mut list = List::with_capacity(len.min(reader.remaining()));
        for _ in 0..len {
            list.push(self.value(reader)?);
        }

        Ok(list)
    }
}

fn read_block<'a, T, F>(reader: &mut ByteReader<'a>, f: F) -> Result<Vec<T>, Error>
where
    T: Clone + Default,
    F: FnOnce(&mut ByteReader<'a>, &mut [T]) -> Result<(), UnexpectedEof>,
{
    let len = size::read_size(reader)?;
    if len == 0 {
        return Ok(Vec::new());
    }

    let width = size_of::<T>();
    if width > 1 {
        reader.skip_alignment(width)?;
    }
    reader.ensure(len.saturating_mul(width))?;

    let mut out = vec![T::default(); len];
    f(reader, &mut out)?;

    Ok(out)
}

fn read_list_bool(reader: &mut ByteReader<'_>) -> Result<Vec<bool>, Error> {
    let len = size::read_size(reader)?;
    reader.ensure(len)?;

    let mut out = Vec::with_capacity(len.min(reader.remaining()));
    for _ in 0..len {
        out.push(reader.read_u8()? == u8::from(Opcode::True));
    }

    Ok(out)
}
