//! This library handles reading from and creating **ASE** (Adobe Swatch Exchange) files.
//!
//! # ASE Format Documentation
//!
//! ASE files carry named color swatches, optionally organised in named groups, and are used to
//! exchange palettes between design applications. They are identified with the `.ase` extension.
//!
//! ## File Structure
//!
//! An ASE file consists of a header followed by a flat sequence of blocks.
//!
//! | Offset (bytes) | Field                  | Description                                                |
//! |----------------|------------------------|------------------------------------------------------------|
//! | 0x0000         | Magic number           | 4 bytes: 0x41534546 ("ASEF")                               |
//! | 0x0004         | Major version          | 2 bytes: Fixed value 0x0001                                |
//! | 0x0006         | Minor version          | 2 bytes: Fixed value 0x0000                                |
//! | 0x0008         | Block Count            | 4 bytes: Number of blocks that follow                      |
//!
//! ### Blocks
//!
//! Every block starts with a 6 byte header followed by its payload.
//!
//! | Offset (bytes) | Field                  | Description                                             |
//! |----------------|------------------------|---------------------------------------------------------|
//! | 0x0000         | Block Type             | 2 bytes: `0x0001` color, `0xC001` group start, `0xC002` group end |
//! | 0x0002         | Block Length           | 4 bytes: Size of the payload in bytes                   |
//!
//! A group start block opens a group, every color block up to the matching group end belongs to
//! it. Groups do not nest. The group end payload is empty.
//!
//! ### Names
//!
//! Colors and group starts begin their payload with a name:
//!
//! - **Length**: A 2-byte count of UTF-16 code units, including the terminating zero.
//! - **Characters**: `Length` UTF-16 big endian code units, the last one being `0x0000`.
//!
//! A length of zero denotes an empty name with no characters following.
//!
//! ### Color Payload
//!
//! After the name a color carries:
//!
//! - **Model**: 4 ASCII bytes padded with spaces, one of `RGB `, `CMYK`, `LAB ` or `Gray`.
//! - **Values**: One 32-bit float per channel: 3 for RGB and LAB, 4 for CMYK, 1 for Gray.
//! - **Type**: A 2-byte integer: `0` global, `1` spot, `2` normal.
//!
//! ## Additional Information
//!
//! - **File Extension**: `.ase`
//! - **Endianness**: Big-endian for all multi-byte values
//!

pub mod color;
pub mod document;
pub mod error;
pub mod group;
mod name;
pub mod read;
pub mod types;
pub mod write;

pub use color::{Color, ColorModel, ColorType};
pub use document::Document;
pub use group::Group;
pub use read::{decode, AseReader, Block, GroupMode};
pub use types::{AseHeader, BlockHeader, BlockType, Version};
pub use write::{encode, AseWriter};
