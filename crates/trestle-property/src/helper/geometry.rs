//! Codecs for `Size`, `Point` and `Rect`.

use super::{composite_numbers, PropertyValue};
use crate::error::Result;
use crate::types::{Point, Rect, Size};

impl PropertyValue for Size {
    const TYPE_NAME: &'static str = "Size";

    fn to_property_string(&self) -> String {
        format!("{},{}", self.width, self.height)
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<2>(text, Self::TYPE_NAME)?
            .map(|[width, height]| Size::new(width, height))
            .unwrap_or(Size::ZERO))
    }
}

impl PropertyValue for Point {
    const TYPE_NAME: &'static str = "Point";

    fn to_property_string(&self) -> String {
        format!("{},{}", self.x, self.y)
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<2>(text, Self::TYPE_NAME)?
            .map(|[x, y]| Point::new(x, y))
            .unwrap_or(Point::ZERO))
    }
}

impl PropertyValue for Rect {
    const TYPE_NAME: &'static str = "Rect";

    fn to_property_string(&self) -> String {
        format!("{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }

    fn from_property_string(text: &str) -> Result<Self> {
        Ok(composite_numbers::<4>(text, Self::TYPE_NAME)?
            .map(|[left, top, right, bottom]| Rect::new(left, top, right, bottom))
            .unwrap_or_default())
    }
}
