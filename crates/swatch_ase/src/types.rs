//! Base types for the framing of an ASE file.

use binrw::{BinRead, BinWrite};
use std::io::{Cursor, Read};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Version pair stored after the signature
#[derive(BinRead, BinWrite, Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(big)]
pub struct Version {
    /// Major version, always 1
    pub major: i16,

    /// Minor version, always 0
    pub minor: i16,
}

impl Version {
    /// The only version this library reads and writes
    pub const CURRENT: Version = Version { major: 1, minor: 0 };
}

impl Default for Version {
    fn default() -> Self {
        Self::CURRENT
    }
}

/// ASE file header
///
/// Defines the header of the ASE file which always starts with "ASEF" and then a version (1.0).
/// All data is stored in big endian format
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[brw(big, magic = b"ASEF")]
pub struct AseHeader {
    /// The format version of the file
    pub version: Version,

    /// The number of blocks that follow the header
    pub blocks: i32,
}

impl AseHeader {
    /// Signature every ASE file starts with
    pub const SIGNATURE: [u8; 4] = *b"ASEF";

    /// Size of the header on the wire
    pub const SIZE: usize = 12;

    /// Read and validate a header from a forward-only stream.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<AseHeader> {
        let mut raw = [0u8; Self::SIZE];

        reader.read_exact(&mut raw[..4])?;
        if raw[..4] != Self::SIGNATURE {
            return Err(Error::InvalidFile);
        }
        reader.read_exact(&mut raw[4..])?;

        let header = AseHeader::read(&mut Cursor::new(raw))?;
        if header.version != Version::CURRENT {
            return Err(Error::InvalidVersion {
                major: header.version.major,
                minor: header.version.minor,
            });
        }

        Ok(header)
    }

    /// Number of blocks the reader should iterate, a negative count yields none
    pub fn block_count(&self) -> usize {
        usize::try_from(self.blocks).unwrap_or(0)
    }
}

/// Tag identifying the payload of a block
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u16)]
pub enum BlockType {
    /// A single color entry
    Color = 0x0001,

    /// Opens a named group of colors
    GroupStart = 0xC001,

    /// Closes the currently open group
    GroupEnd = 0xC002,
}

impl TryFrom<u16> for BlockType {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        match value {
            0x0001 => Ok(BlockType::Color),
            0xC001 => Ok(BlockType::GroupStart),
            0xC002 => Ok(BlockType::GroupEnd),
            other => Err(Error::InvalidBlockType(other)),
        }
    }
}

impl From<BlockType> for u16 {
    fn from(value: BlockType) -> Self {
        value as u16
    }
}

/// Prefix of every block: a type tag and the byte length of the payload that follows
#[derive(BinRead, BinWrite, Debug, Default, Copy, Clone, PartialEq, Eq)]
#[brw(big)]
pub struct BlockHeader {
    /// Raw block type tag
    pub kind: u16,

    /// Length of the payload in bytes, excluding this header
    pub length: i32,
}

impl BlockHeader {
    /// Size of the block header on the wire
    pub const SIZE: usize = 6;

    /// Build the header for a payload of `length` bytes
    pub fn new(kind: BlockType, length: i32) -> Self {
        Self {
            kind: kind.into(),
            length,
        }
    }

    /// Read a block header from a forward-only stream.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<BlockHeader> {
        let mut raw = [0u8; Self::SIZE];
        reader.read_exact(&mut raw)?;
        Ok(BlockHeader::read(&mut Cursor::new(raw))?)
    }

    /// Resolve the raw tag into a known block type
    pub fn block_type(&self) -> Result<BlockType> {
        BlockType::try_from(self.kind)
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use binrw::BinWrite;
    use pretty_assertions::assert_eq;

    use crate::error::{Error, Result};
    use crate::types::{AseHeader, BlockHeader, BlockType, Version};

    #[test]
    fn read_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x41, 0x53, 0x45, 0x46,
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x0A,
        ]);

        let expected = AseHeader {
            version: Version::CURRENT,
            blocks: 10,
        };

        assert_eq!(AseHeader::read_from(&mut input)?, expected);

        Ok(())
    }

    #[test]
    fn write_header() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0x41, 0x53, 0x45, 0x46,
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x05,
        ];

        let header = AseHeader {
            blocks: 5,
            ..Default::default()
        };

        let mut actual: Vec<u8> = Vec::new();
        header.write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn read_header_invalid_signature() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x41, 0x53, 0x45, 0x47,
            0x00, 0x01, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);

        let result = AseHeader::read_from(&mut input);
        assert!(matches!(result, Err(Error::InvalidFile)));
    }

    #[test]
    fn read_header_unsupported_version() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x41, 0x53, 0x45, 0x46,
            0x00, 0x02, 0x00, 0x00,
            0x00, 0x00, 0x00, 0x00,
        ]);

        let result = AseHeader::read_from(&mut input);
        assert!(matches!(
            result,
            Err(Error::InvalidVersion { major: 2, minor: 0 })
        ));
    }

    #[test]
    fn read_header_rejects_minor_version() {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x41, 0x53, 0x45, 0x46,
            0x00, 0x01, 0x00, 0x01,
            0x00, 0x00, 0x00, 0x00,
        ]);

        let result = AseHeader::read_from(&mut input);
        assert!(matches!(
            result,
            Err(Error::InvalidVersion { major: 1, minor: 1 })
        ));
    }

    #[test]
    fn read_header_truncated() {
        let mut input = Cursor::new(vec![0x41, 0x53, 0x45, 0x46, 0x00, 0x01]);

        let result = AseHeader::read_from(&mut input);
        assert!(matches!(result, Err(Error::IOError(_))));
    }

    #[test]
    fn negative_block_count_is_empty() {
        let header = AseHeader {
            blocks: -3,
            ..Default::default()
        };

        assert_eq!(header.block_count(), 0);
    }

    #[test]
    fn read_block_header() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0xC0, 0x01,
            0x00, 0x00, 0x00, 0x10,
        ]);

        let header = BlockHeader::read_from(&mut input)?;
        assert_eq!(header, BlockHeader::new(BlockType::GroupStart, 16));
        assert_eq!(header.block_type()?, BlockType::GroupStart);

        Ok(())
    }

    #[test]
    fn write_block_header() -> Result<()> {
        #[rustfmt::skip]
        let expected: Vec<u8> = vec![
            0xC0, 0x02,
            0x00, 0x00, 0x00, 0x00,
        ];

        let mut actual: Vec<u8> = Vec::new();
        BlockHeader::new(BlockType::GroupEnd, 0).write(&mut Cursor::new(&mut actual))?;

        assert_eq!(actual, expected);

        Ok(())
    }

    #[test]
    fn unknown_block_type() {
        let header = BlockHeader {
            kind: 0xBEEF,
            length: 0,
        };

        assert!(matches!(
            header.block_type(),
            Err(Error::InvalidBlockType(0xBEEF))
        ));
    }
}
