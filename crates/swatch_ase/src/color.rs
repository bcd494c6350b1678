//! Color entries and their block payload.

use bon::Builder;
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use derive_more::derive::Display;
use std::io::{Read, Write};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{ColorModelError, Error, Result};
use crate::name::{name_size, read_name, write_name};

/// Color space of a swatch's values
///
/// Stored on the wire as a four byte ASCII tag padded with spaces.
#[derive(Display, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ColorModel {
    /// Red, green and blue in `0.0..=1.0`
    #[display("RGB")]
    #[cfg_attr(feature = "serde", serde(rename = "RGB"))]
    Rgb,

    /// Cyan, magenta, yellow and key in `0.0..=1.0`
    #[display("CMYK")]
    #[cfg_attr(feature = "serde", serde(rename = "CMYK"))]
    Cmyk,

    /// CIE L*a*b*, lightness in `0.0..=1.0` and a/b in `-128.0..=127.0`
    #[display("LAB")]
    #[cfg_attr(feature = "serde", serde(rename = "LAB"))]
    Lab,

    /// Single gray channel in `0.0..=1.0`
    #[display("Gray")]
    Gray,
}

impl ColorModel {
    /// Number of values a color of this model carries
    pub const fn channels(&self) -> usize {
        match self {
            ColorModel::Rgb | ColorModel::Lab => 3,
            ColorModel::Cmyk => 4,
            ColorModel::Gray => 1,
        }
    }

    /// Wire tag of this model
    pub const fn tag(&self) -> [u8; 4] {
        match self {
            ColorModel::Rgb => *b"RGB ",
            ColorModel::Cmyk => *b"CMYK",
            ColorModel::Lab => *b"LAB ",
            ColorModel::Gray => *b"Gray",
        }
    }

    /// Resolve a wire tag, ignoring the space padding
    pub fn from_tag(tag: &[u8; 4]) -> Result<ColorModel> {
        match std::str::from_utf8(tag).map(str::trim) {
            Ok("RGB") => Ok(ColorModel::Rgb),
            Ok("CMYK") => Ok(ColorModel::Cmyk),
            Ok("LAB") => Ok(ColorModel::Lab),
            Ok("Gray") => Ok(ColorModel::Gray),
            _ => Err(ColorModelError::UnknownTag(String::from_utf8_lossy(tag).into_owned()).into()),
        }
    }
}

/// How an application should treat a swatch
#[derive(Display, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(i16)]
pub enum ColorType {
    /// Edits to the swatch apply everywhere it is used
    #[default]
    #[display("Global")]
    Global = 0,

    /// Printed with a dedicated ink
    #[display("Spot")]
    Spot = 1,

    /// A plain process color
    #[display("Normal")]
    Normal = 2,
}

impl TryFrom<i16> for ColorType {
    type Error = Error;

    fn try_from(value: i16) -> Result<Self> {
        match value {
            0 => Ok(ColorType::Global),
            1 => Ok(ColorType::Spot),
            2 => Ok(ColorType::Normal),
            other => Err(Error::InvalidColorType(other)),
        }
    }
}

impl From<ColorType> for i16 {
    fn from(value: ColorType) -> Self {
        value as i16
    }
}

/// A named swatch
///
/// ```
/// use swatch_ase::{Color, ColorModel, ColorType};
///
/// let red = Color::builder()
///     .name("Red")
///     .model(ColorModel::Rgb)
///     .values(vec![1.0, 0.0, 0.0])
///     .kind(ColorType::Spot)
///     .build();
///
/// assert!(red.validate().is_ok());
/// ```
#[derive(Builder, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    /// Display name of the swatch
    #[builder(into)]
    pub name: String,

    /// Color space of [`Color::values`]
    pub model: ColorModel,

    /// Channel values, as many as [`ColorModel::channels`]
    pub values: Vec<f32>,

    /// Swatch type
    #[builder(default)]
    #[cfg_attr(feature = "serde", serde(rename = "type", default))]
    pub kind: ColorType,
}

impl Color {
    /// Check that the values match the channel count of the model.
    pub fn validate(&self) -> Result<()> {
        let expected = self.model.channels();
        if self.values.len() != expected {
            return Err(ColorModelError::ChannelCount {
                model: self.model,
                expected,
                found: self.values.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Decode a color block payload.
    pub fn read_from<R: Read>(reader: &mut R) -> Result<Color> {
        let name = read_name(reader)?;

        let mut tag = [0u8; 4];
        reader.read_exact(&mut tag)?;
        let model = ColorModel::from_tag(&tag)?;

        let mut values = vec![0f32; model.channels()];
        reader.read_f32_into::<BigEndian>(&mut values)?;

        let kind = ColorType::try_from(reader.read_i16::<BigEndian>()?)?;

        Ok(Color {
            name,
            model,
            values,
            kind,
        })
    }

    /// Encode this color as a block payload.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> Result<()> {
        self.validate()?;

        write_name(writer, &self.name)?;
        writer.write_all(&self.model.tag())?;
        for value in &self.values {
            writer.write_f32::<BigEndian>(*value)?;
        }
        writer.write_i16::<BigEndian>(self.kind.into())?;

        Ok(())
    }

    /// Size in bytes of the encoded payload
    pub fn payload_size(&self) -> Result<usize> {
        Ok(name_size(&self.name)? + 4 + 4 * self.model.channels() + 2)
    }
}
