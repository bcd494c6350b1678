//! Zero terminated UTF-16 names shared by colors and groups.

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

use crate::error::{Error, Result};

/// Read a length prefixed, zero terminated UTF-16BE name.
///
/// A length of zero is an empty name with nothing else to consume.
pub(crate) fn read_name<R: Read>(reader: &mut R) -> Result<String> {
    let units = reader.read_u16::<BigEndian>()? as usize;
    if units == 0 {
        return Ok(String::new());
    }

    let mut buffer = vec![0u16; units];
    reader.read_u16_into::<BigEndian>(&mut buffer)?;

    if buffer.pop() != Some(0) {
        return Err(Error::MissingNameTerminator);
    }

    Ok(String::from_utf16(&buffer)?)
}

/// Length field for `name`: its UTF-16 code units plus the terminator
pub(crate) fn name_units(name: &str) -> Result<u16> {
    let units = name.encode_utf16().count();
    u16::try_from(units + 1).map_err(|_| Error::NameTooLong(units))
}

/// Bytes taken by the length field and the encoded name
pub(crate) fn name_size(name: &str) -> Result<usize> {
    Ok(2 + 2 * name_units(name)? as usize)
}

pub(crate) fn write_name<W: Write>(writer: &mut W, name: &str) -> Result<()> {
    writer.write_u16::<BigEndian>(name_units(name)?)?;
    for unit in name.encode_utf16() {
        writer.write_u16::<BigEndian>(unit)?;
    }
    writer.write_u16::<BigEndian>(0)?;
    Ok(())
}
