//! The logical content of an ASE file.

use std::io::{Read, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::Result;
use crate::group::Group;
use crate::read::{decode, GroupMode};
use crate::types::{AseHeader, Version};
use crate::write::encode;

/// Decoded swatch file
///
/// Colors outside of any group are kept in [`Document::colors`] in the order they appear in the
/// file, regardless of where they sit relative to the groups.
#[derive(Debug, Default, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Document {
    /// Header as read from the file, or derived by [`Document::new`]
    #[cfg_attr(feature = "serde", serde(default))]
    pub header: AseHeader,

    /// Colors that do not belong to a group
    #[cfg_attr(feature = "serde", serde(default))]
    pub colors: Vec<Color>,

    /// Groups, in file order
    #[cfg_attr(feature = "serde", serde(default))]
    pub groups: Vec<Group>,
}

impl Document {
    /// Create a document whose header matches its content
    pub fn new(colors: Vec<Color>, groups: Vec<Group>) -> Self {
        let mut document = Self {
            header: AseHeader::default(),
            colors,
            groups,
        };
        document.header = AseHeader {
            version: Version::CURRENT,
            blocks: i32::try_from(document.block_count()).unwrap_or(i32::MAX),
        };
        document
    }

    /// Decode a document from `reader`, see [`decode`].
    pub fn read<R: Read>(reader: R, mode: GroupMode) -> Result<Document> {
        decode(reader, mode)
    }

    /// Encode this document into `writer`, see [`encode`].
    pub fn write<W: Write>(&self, writer: W) -> Result<W> {
        encode(self, writer)
    }

    /// Number of blocks needed to store this document
    ///
    /// Every standalone color is one block, every group is a start block, an end block and one
    /// block per member.
    pub fn block_count(&self) -> usize {
        self.colors.len() + self.groups.iter().map(Group::block_count).sum::<usize>()
    }

    /// Whether this document holds no colors or groups
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.groups.is_empty()
    }

    /// Every color of the document, ungrouped colors first
    pub fn all_colors(&self) -> impl Iterator<Item = &Color> {
        self.colors
            .iter()
            .chain(self.groups.iter().flat_map(|g| g.colors.iter()))
    }

    /// Find a group by name
    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups.iter().find(|g| g.name == name)
    }
}
