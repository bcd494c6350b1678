//! Named groups of colors.

use std::io::{Read, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::name::{name_size, read_name, write_name};

/// A named, ordered collection of swatches
///
/// On the wire a group is a group start block carrying the name, one block per member color and
/// a group end block with an empty payload.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Group {
    /// Display name of the group
    pub name: String,

    /// Member colors, in file order
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: Vec<Color>,
}

impl Group {
    /// Create a group holding `colors`
    pub fn new(name: impl Into<String>, colors: Vec<Color>) -> Self {
        Self {
            name: name.into(),
            colors,
        }
    }

    /// Decode a group start payload, the returned group has no colors yet.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Group> {
        Ok(Group::new(read_name(reader)?, Vec::new()))
    }

    /// Encode the group start payload.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        write_name(writer, &self.name)
    }

    /// Size in bytes of the group start payload
    pub fn payload_size(&self) -> Result<usize> {
        name_size(&self.name)
    }

    /// Number of blocks this group takes up in a file
    pub fn block_count(&self) -> usize {
        2 + self.colors.len()
    }
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use crate::color::{Color, ColorModel};
    use crate::error::Result;
    use crate::group::Group;

    #[test]
    fn read_group() -> Result<()> {
        #[rustfmt::skip]
        let mut input = Cursor::new(vec![
            0x00, 0x06,
            0x00, 0x49, 0x00, 0x6E, 0x00, 0x6B, 0x00, 0x73, 0x00, 0x21, 0x00, 0x00,
        ]);

        assert_eq!(Group::read_from(&mut input)?, Group::new("Inks!", Vec::new()));

        Ok(())
    }

    #[test]
    fn read_unnamed_group() -> Result<()> {
        let mut input = Cursor::new(vec![0x00, 0x00]);

        let group = Group::read_from(&mut input)?;
        assert_eq!(group.name, "");
        assert_eq!(input.position(), 2);

        Ok(())
    }

    #[test]
    fn write_group() -> Result<()> {
        #[rustfmt::skip]
        let expected = vec![
            0x00, 0x02,
            0x00, 0x41, 0x00, 0x00,
        ];

        let group = Group::new(
            "A",
            vec![Color::builder()
                .name("Ignored")
                .model(ColorModel::Gray)
                .values(vec![0.0])
                .build()],
        );

        let mut actual: Vec<u8> = Vec::new();
        group.write_to(&mut actual)?;

        assert_eq!(actual, expected);
        assert_eq!(group.payload_size()?, expected.len());
        assert_eq!(group.block_count(), 3);

        Ok(())
    }
}
