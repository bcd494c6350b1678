//! Types for writing ASE files
//!

use binrw::BinWrite;
use std::fmt::Debug;
use std::io::{Cursor, Write};
use tracing::instrument;

use crate::color::Color;
use crate::document::Document;
use crate::error::{GroupError, Result};
use crate::group::Group;
use crate::name::write_name;
use crate::types::{AseHeader, BlockHeader, BlockType};

/// ASE file generator
///
/// Blocks are kept in memory until [`AseWriter::finish`] since the header has to carry the
/// final block count.
///
/// ```
/// # fn doit() -> swatch_ase::error::Result<()>
/// # {
/// use swatch_ase::{AseWriter, Color, ColorModel};
///
/// // We use a buffer here, though you'd normally use a `File`
/// let mut ase = AseWriter::new(Vec::<u8>::new());
///
/// ase.start_group("Grays")?;
/// ase.write_color(
///     &Color::builder()
///         .name("Mid gray")
///         .model(ColorModel::Gray)
///         .values(vec![0.5])
///         .build(),
/// )?;
/// ase.end_group()?;
///
/// // Apply the changes you've made.
/// let bytes = ase.finish()?;
/// assert_eq!(&bytes[..4], b"ASEF");
///
/// # Ok(())
/// # }
/// # doit().unwrap();
/// ```
pub struct AseWriter<W: Write> {
    inner: W,
    blocks: Cursor<Vec<u8>>,
    payload: Vec<u8>,
    header: AseHeader,
    current_group: Option<String>,
}

impl<W: Write> Debug for AseWriter<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AseWriter")
            .field("header", &self.header)
            .field("current_group", &self.current_group)
            .finish_non_exhaustive()
    }
}

impl<W: Write> AseWriter<W> {
    /// Initializes the file.
    pub fn new(inner: W) -> AseWriter<W> {
        AseWriter {
            inner,
            blocks: Cursor::new(Vec::new()),
            payload: Vec::new(),
            header: AseHeader::default(),
            current_group: None,
        }
    }

    /// Returns true if a group is currently open.
    pub const fn is_writing_group(&self) -> bool {
        self.current_group.is_some()
    }

    /// Number of blocks written so far
    pub fn block_count(&self) -> i32 {
        self.header.blocks
    }

    /// Append a color, inside the open group if there is one.
    #[instrument(skip(self, color), fields(name = %color.name), err)]
    pub fn write_color(&mut self, color: &Color) -> Result<()> {
        self.payload.clear();
        self.payload.reserve(color.payload_size()?);
        color.write_to(&mut self.payload)?;
        self.write_block(BlockType::Color)
    }

    /// Open a new group, closing the current one first.
    #[instrument(skip(self, name), err)]
    pub fn start_group(&mut self, name: impl ToString) -> Result<()> {
        if self.current_group.is_some() {
            self.end_group()?;
        }

        let name = name.to_string();
        self.payload.clear();
        write_name(&mut self.payload, &name)?;
        self.write_block(BlockType::GroupStart)?;

        self.current_group = Some(name);

        Ok(())
    }

    /// Close the open group.
    #[instrument(skip(self), err)]
    pub fn end_group(&mut self) -> Result<()> {
        if self.current_group.take().is_none() {
            return Err(GroupError::UnexpectedEnd.into());
        }

        self.payload.clear();
        self.write_block(BlockType::GroupEnd)
    }

    /// Write a whole group with its colors.
    #[instrument(skip(self, group), fields(name = %group.name, colors = group.colors.len()), err)]
    pub fn write_group(&mut self, group: &Group) -> Result<()> {
        self.start_group(&group.name)?;
        for color in &group.colors {
            self.write_color(color)?;
        }
        self.end_group()
    }

    #[instrument(skip(self), level = "trace", err, fields(size = self.payload.len()))]
    fn write_block(&mut self, kind: BlockType) -> Result<()> {
        BlockHeader::new(kind, self.payload.len() as i32).write(&mut self.blocks)?;
        self.blocks.write_all(&self.payload)?;
        self.header.blocks += 1;
        Ok(())
    }

    /// Close any open group and write the header followed by every block
    ///
    /// This will return the writer, but one should normally not append any data to the end of the file.
    #[instrument(skip(self), err)]
    pub fn finish(mut self) -> Result<W> {
        if self.current_group.is_some() {
            self.end_group()?;
        }

        let mut header = Vec::with_capacity(AseHeader::SIZE);
        self.header.write(&mut Cursor::new(&mut header))?;

        self.inner.write_all(&header)?;
        self.inner.write_all(self.blocks.get_ref())?;
        self.inner.flush()?;

        Ok(self.inner)
    }
}

/// Encode a [`Document`] into `writer`.
///
/// Ungrouped colors are written first, followed by each group with its colors. Nothing is
/// written to `writer` if any color fails to encode.
#[instrument(skip_all, err, fields(blocks = document.block_count()))]
pub fn encode<W: Write>(document: &Document, writer: W) -> Result<W> {
    let mut ase = AseWriter::new(writer);

    for color in &document.colors {
        ase.write_color(color)?;
    }

    for group in &document.groups {
        ase.write_group(group)?;
    }

    ase.finish()
}
