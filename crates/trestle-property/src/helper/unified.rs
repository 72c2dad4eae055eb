//! Codecs for unified dimensions.

use super::{composite_numbers, PropertyValue};
use crate::error::Result;
use crate::types::{UDim, URect, UVector2};

fn udim_text(dim: &UDim) -> String {
    format!("{{{},{}}}", dim.scale, dim.offset)
}

impl PropertyValue for UDim {
    const TYPE_NAME: &'static str = "UDim";

    fn to_property_string(&self) -> String {
        udim_text(self)
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<2>(text, Self::TYPE_NAME)?
            .map(|[scale, offset]| UDim::new(scale, offset))
            .unwrap_or(UDim::ZERO))
    }
}

impl PropertyValue for UVector2 {
    const TYPE_NAME: &'static str = "UVector2";

    fn to_property_string(&self) -> String {
        format!("{{{},{}}}", udim_text(&self.x), udim_text(&self.y))
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<4>(text, Self::TYPE_NAME)?
            .map(|[xs, xo, ys, yo]| UVector2::new(UDim::new(xs, xo), UDim::new(ys, yo)))
            .unwrap_or_default())
    }
}

impl PropertyValue for URect {
    const TYPE_NAME: &'static str = "URect";

    fn to_property_string(&self) -> String {
        format!(
            "{{{},{},{},{}}}",
            udim_text(&self.left),
            udim_text(&self.top),
            udim_text(&self.right),
            udim_text(&self.bottom),
        )
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<8>(text, Self::TYPE_NAME)?
            .map(|[ls, lo, ts, to, rs, ro, bs, bo]| {
                URect::new(
                    UDim::new(ls, lo),
                    UDim::new(ts, to),
                    UDim::new(rs, ro),
                    UDim::new(bs, bo),
                )
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::{format, parse};

    #[test]
    fn test_udim_format() {
        assert_eq!(format(&UDim::new(0.5, -4.0)), "{0.5,-4}");
        assert_eq!(format(&UDim::ZERO), "{0,0}");
    }

    #[test]
    fn test_uvector2_format_and_parse() {
        let v = UVector2::new(UDim::new(1.0, 0.0), UDim::new(0.25, 12.0));
        assert_eq!(format(&v), "{{1,0},{0.25,12}}");
        assert_eq!(parse::<UVector2>("{{1,0},{0.25,12}}").unwrap(), v);
        assert_eq!(parse::<UVector2>("1 0 0.25 12").unwrap(), v);
    }

    #[test]
    fn test_unified_empty_is_zero() {
        assert_eq!(parse::<UDim>("").unwrap(), UDim::ZERO);
        assert_eq!(parse::<UVector2>("").unwrap(), UVector2::default());
        assert_eq!(parse::<URect>("").unwrap(), URect::default());
    }

    #[test]
    fn test_urect_wrong_arity() {
        assert!(parse::<URect>("{{0,0},{0,0},{0,0}}").is_err());
        assert!(parse::<UDim>("{0,0,0}").is_err());
    }
}
