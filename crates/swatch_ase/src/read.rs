//! Types for reading ASE files
//!

use std::io::{self, Read};
use tracing::{debug, instrument, trace};

use crate::{
    color::Color,
    document::Document,
    error::{GroupError, Result},
    group::Group,
    types::{AseHeader, BlockHeader, BlockType},
};

/// Controls where colors inside a group end up when decoding
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum GroupMode {
    /// Colors stay inside [`Group::colors`]
    #[default]
    Nested,

    /// Every color is pooled into [`Document::colors`], groups are kept by name with no colors
    Flattened,
}

/// A decoded block
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A color entry
    Color(Color),

    /// Start of a group, the group has no colors yet
    GroupStart(Group),

    /// End of the open group
    GroupEnd,
}

/// Sequential ASE block reader
///
/// Reads the header on creation and then yields exactly as many blocks as the header declares.
/// After the first error no further blocks are produced.
///
/// ```no_run
/// use std::io::prelude::*;
///
/// fn list_blocks(reader: impl Read) -> swatch_ase::error::Result<()> {
///     let ase = swatch_ase::AseReader::new(reader)?;
///
///     for block in ase {
///         println!("{:?}", block?);
///     }
///
///     Ok(())
/// }
/// ```
pub struct AseReader<R> {
    reader: R,
    header: AseHeader,
    remaining: usize,
}

impl<R: Read> AseReader<R> {
    /// Read and validate the file header.
    pub fn new(mut reader: R) -> Result<AseReader<R>> {
        let header = AseHeader::read_from(&mut reader)?;
        debug!(blocks = header.blocks, "read header");

        Ok(AseReader {
            reader,
            remaining: header.block_count(),
            header,
        })
    }

    /// Header of the file being read
    pub fn header(&self) -> &AseHeader {
        &self.header
    }

    /// Number of blocks left to read
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Unwrap and return the inner reader object
    pub fn into_inner(self) -> R {
        self.reader
    }

    fn read_block(&mut self) -> Result<Block> {
        let header = BlockHeader::read_from(&mut self.reader)?;
        let kind = header.block_type()?;
        trace!(?kind, length = header.length, "read block");

        match kind {
            BlockType::Color => Ok(Block::Color(Color::read_from(&mut self.reader)?)),
            BlockType::GroupStart => Ok(Block::GroupStart(Group::read_from(&mut self.reader)?)),
            BlockType::GroupEnd => {
                let length = u64::try_from(header.length).unwrap_or(0);
                let skipped = io::copy(&mut self.reader.by_ref().take(length), &mut io::sink())?;
                if skipped != length {
                    return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
                }
                Ok(Block::GroupEnd)
            }
        }
    }
}

impl<R: Read> Iterator for AseReader<R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let block = self.read_block();
        self.remaining = match block {
            Ok(_) => self.remaining - 1,
            Err(_) => 0,
        };
        Some(block)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Decode an ASE file into a [`Document`].
///
/// Groups must be closed before another one starts and before the file ends.
#[instrument(skip(reader), err)]
pub fn decode<R: Read>(reader: R, mode: GroupMode) -> Result<Document> {
    let blocks = AseReader::new(reader)?;
    let header = *blocks.header();

    let mut colors = Vec::new();
    let mut groups = Vec::new();
    let mut open: Option<Group> = None;

    for block in blocks {
        match block? {
            Block::Color(color) => match (open.as_mut(), mode) {
                (Some(group), GroupMode::Nested) => group.colors.push(color),
                _ => colors.push(color),
            },
            Block::GroupStart(group) => {
                if open.is_some() {
                    return Err(GroupError::Nested(group.name).into());
                }
                debug!(name = %group.name, "group start");
                open = Some(group);
            }
            Block::GroupEnd => {
                let group = open.take().ok_or(GroupError::UnexpectedEnd)?;
                debug!(name = %group.name, colors = group.colors.len(), "group end");
                groups.push(group);
            }
        }
    }

    if let Some(group) = open {
        return Err(GroupError::Unterminated(group.name).into());
    }

    Ok(Document {
        header,
        colors,
        groups,
    })
}
