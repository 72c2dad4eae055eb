//! Codecs for `Colour` and `ColourRect`.
//!
//! Colours are written as eight lowercase hex digits in `AARRGGBB` order. A
//! colour rect collapses to a single colour when all corners agree and is
//! otherwise written as `tl:.. tr:.. bl:.. br:..`. Like other composite text,
//! colour rect fields may be wrapped in braces and separated by commas.

use super::{is_composite_separator, PropertyValue};
use crate::error::{PropertyError, Result};
use crate::types::{Colour, ColourRect};

fn parse_hex(digits: &str) -> Option<u32> {
    // `from_str_radix` accepts a leading '+', which is not colour text.
    if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok()
}

impl PropertyValue for Colour {
    const TYPE_NAME: &'static str = "Colour";

    fn to_property_string(&self) -> String {
        format!("{:08x}", self.argb())
    }

    fn from_property_string(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(Colour::OPAQUE_BLACK);
        }
        parse_hex(trimmed)
            .map(Colour::from_argb)
            .ok_or_else(|| PropertyError::malformed(Self::TYPE_NAME, text))
    }
}

impl PropertyValue for ColourRect {
    const TYPE_NAME: &'static str = "ColourRect";

    fn to_property_string(&self) -> String {
        match self.uniform_colour() {
            Some(colour) => colour.to_property_string(),
            None => format!(
                "tl:{} tr:{} bl:{} br:{}",
                self.top_left.to_property_string(),
                self.top_right.to_property_string(),
                self.bottom_left.to_property_string(),
                self.bottom_right.to_property_string(),
            ),
        }
    }

    fn from_property_string(text: &str) -> Result<Self> {
        let malformed = || PropertyError::malformed(Self::TYPE_NAME, text);
        let fields: Vec<&str> = text
            .split(is_composite_separator)
            .filter(|field| !field.is_empty())
            .collect();
        match fields.as_slice() {
            [] => return Ok(ColourRect::default()),
            [single] if !single.contains(':') => {
                return parse_hex(single)
                    .map(|argb| ColourRect::uniform(Colour::from_argb(argb)))
                    .ok_or_else(malformed);
            }
            _ => {}
        }

        // top-left, top-right, bottom-left, bottom-right
        let mut corners: [Option<Colour>; 4] = [None; 4];
        for field in fields {
            let (label, digits) = field.split_once(':').ok_or_else(malformed)?;
            let index = match label {
                "tl" => 0,
                "tr" => 1,
                "bl" => 2,
                "br" => 3,
                _ => return Err(malformed()),
            };
            if corners[index].is_some() {
                return Err(malformed());
            }
            corners[index] = Some(Colour::from_argb(parse_hex(digits).ok_or_else(malformed)?));
        }

        match corners {
            [Some(tl), Some(tr), Some(bl), Some(br)] => Ok(ColourRect::new(tl, tr, bl, br)),
            _ => Err(malformed()),
        }
    }
}
