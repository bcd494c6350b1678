//! Error types that can be emitted from this library

use miette::Diagnostic;
use thiserror::Error;

use crate::color::ColorModel;

/// Error type for library
#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    /// Transparent wrapper for [`std::io::Error`]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// Transparent wrapper for [`binrw::Error`]
    #[error(transparent)]
    BinRWError(#[from] binrw::Error),

    /// Transparent wrapper for [`std::string::FromUtf16Error`]
    #[error(transparent)]
    UTF16Error(#[from] std::string::FromUtf16Error),

    /// file does not start with the ASEF signature
    #[error("file is not an ase file: expected signature of ASEF")]
    InvalidFile,

    /// unsupported version {major}.{minor}
    #[error("unsupported ase version {major}.{minor}, expected 1.0")]
    InvalidVersion {
        /// Major version read from the header
        major: i16,
        /// Minor version read from the header
        minor: i16,
    },

    /// invalid block type {0:#06x}
    #[error("invalid block type {0:#06x}")]
    InvalidBlockType(u16),

    /// invalid color model
    #[error("invalid color model")]
    InvalidColorModel(#[from] ColorModelError),

    /// invalid color type {0}
    #[error("invalid color type {0}")]
    InvalidColorType(i16),

    /// name is not zero terminated
    #[error("name is not zero terminated")]
    MissingNameTerminator,

    /// name of {0} code units does not fit in a name length field
    #[error("name of {0} code units does not fit in a name length field")]
    NameTooLong(usize),

    /// invalid group structure
    #[error("invalid group structure")]
    InvalidGroup(#[from] GroupError),
}

/// Error type to provide further information when a color model is rejected
#[derive(Error, Diagnostic, Debug)]
pub enum ColorModelError {
    /// unknown model tag {0:?}
    #[error("unknown model tag {0:?}")]
    UnknownTag(String),

    /// {model} expects {expected} values, found {found}
    #[error("{model} expects {expected} values, found {found}")]
    ChannelCount {
        /// Model of the offending color
        model: ColorModel,
        /// Number of channels the model carries
        expected: usize,
        /// Number of values present on the color
        found: usize,
    },
}

/// Error type to provide further information when group blocks are unbalanced
#[derive(Error, Diagnostic, Debug)]
pub enum GroupError {
    /// group {0:?} started while another group is open
    #[error("group {0:?} started while another group is open")]
    Nested(String),

    /// group end without an open group
    #[error("group end without an open group")]
    UnexpectedEnd,

    /// group {0:?} is never closed
    #[error("group {0:?} is never closed")]
    Unterminated(String),
}

/// Generic result type with crate's Error as its error variant
pub type Result<T> = core::result::Result<T, Error>;
