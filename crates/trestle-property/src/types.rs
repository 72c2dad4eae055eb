//! Geometry, colour and unified-dimension value types.
//!
//! These are the composite values widgets expose as properties. Their string
//! forms live in [`crate::helper`].

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl From<(f32, f32)> for Size {
    fn from((width, height): (f32, f32)) -> Self {
        Self { width, height }
    }
}

/// A rectangle given by its four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a rectangle from its edges.
    #[inline]
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from a position and a size.
    pub fn from_position_size(position: Point, size: Size) -> Self {
        Self::new(
            position.x,
            position.y,
            position.x + size.width,
            position.y + size.height,
        )
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Top-left corner.
    #[inline]
    pub fn position(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Width and height.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// A packed 32-bit colour, `0xAARRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour(pub u32);

impl Colour {
    /// Opaque black, the default for empty colour text.
    pub const OPAQUE_BLACK: Self = Self(0xFF00_0000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFF_FFFF);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self(0);

    /// Create a colour from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    /// Create a colour from 8-bit channels.
    #[inline]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// The packed `0xAARRGGBB` value.
    #[inline]
    pub const fn argb(self) -> u32 {
        self.0
    }

    /// Alpha channel.
    #[inline]
    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel.
    #[inline]
    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl From<u32> for Colour {
    fn from(argb: u32) -> Self {
        Self(argb)
    }
}

/// Four colours, one per corner, used for gradients across a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColourRect {
    pub top_left: Colour,
    pub top_right: Colour,
    pub bottom_left: Colour,
    pub bottom_right: Colour,
}

impl ColourRect {
    /// Create a colour rect from its four corners.
    #[inline]
    pub const fn new(
        top_left: Colour,
        top_right: Colour,
        bottom_left: Colour,
        bottom_right: Colour,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Create a colour rect with the same colour in every corner.
    #[inline]
    pub const fn uniform(colour: Colour) -> Self {
        Self::new(colour, colour, colour, colour)
    }

    /// The shared colour if all four corners match.
    pub fn uniform_colour(&self) -> Option<Colour> {
        let c = self.top_left;
        (self.top_right == c && self.bottom_left == c && self.bottom_right == c).then_some(c)
    }
}

impl Default for ColourRect {
    fn default() -> Self {
        Self::uniform(Colour::OPAQUE_BLACK)
    }
}

impl From<Colour> for ColourRect {
    fn from(colour: Colour) -> Self {
        Self::uniform(colour)
    }
}

/// A unified dimension: a fraction of the parent's extent plus a pixel offset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UDim {
    pub scale: f32,
    pub offset: f32,
}

impl UDim {
    /// Create a unified dimension.
    #[inline]
    pub const fn new(scale: f32, offset: f32) -> Self {
        Self { scale, offset }
    }

    /// Zero scale and offset.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Resolve against a parent extent in pixels.
    #[inline]
    pub fn resolve(&self, base: f32) -> f32 {
        self.scale * base + self.offset
    }
}

/// A pair of unified dimensions (a unified position or size).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UVector2 {
    pub x: UDim,
    pub y: UDim,
}

impl UVector2 {
    /// Create a unified vector.
    #[inline]
    pub const fn new(x: UDim, y: UDim) -> Self {
        Self { x, y }
    }

    /// Resolve against a parent size in pixels.
    pub fn resolve(&self, base: Size) -> Point {
        Point::new(self.x.resolve(base.width), self.y.resolve(base.height))
    }
}

/// A rectangle whose edges are unified dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct URect {
    pub left: UDim,
    pub top: UDim,
    pub right: UDim,
    pub bottom: UDim,
}

impl URect {
    /// Create a unified rectangle from its edges.
    #[inline]
    pub const fn new(left: UDim, top: UDim, right: UDim, bottom: UDim) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Resolve against a parent size in pixels.
    pub fn resolve(&self, base: Size) -> Rect {
        Rect::new(
            self.left.resolve(base.width),
            self.top.resolve(base.height),
            self.right.resolve(base.width),
            self.bottom.resolve(base.height),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_geometry() {
        let r = Rect::from_position_size(Point::new(10.0, 20.0), Size::new(100.0, 50.0));
        assert_eq!(r, Rect::new(10.0, 20.0, 110.0, 70.0));
        assert_eq!(r.width(), 100.0);
        assert_eq!(r.height(), 50.0);
        assert_eq!(r.position(), Point::new(10.0, 20.0));
        assert_eq!(r.size(), Size::new(100.0, 50.0));
    }

    #[test]
    fn test_colour_channels() {
        let c = Colour::from_argb(0xFFAA_00C9);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!(c.red(), 0xAA);
        assert_eq!(c.green(), 0x00);
        assert_eq!(c.blue(), 0xC9);
        assert_eq!(Colour::from_channels(0xFF, 0xAA, 0x00, 0xC9), c);
    }

    #[test]
    fn test_colour_rect_uniform() {
        assert_eq!(ColourRect::default().uniform_colour(), Some(Colour::OPAQUE_BLACK));

        let mixed = ColourRect::new(
            Colour::WHITE,
            Colour::WHITE,
            Colour::TRANSPARENT,
            Colour::WHITE,
        );
        assert_eq!(mixed.uniform_colour(), None);
    }

    #[test]
    fn test_unified_resolve() {
        let rect = URect::new(
            UDim::new(0.25, 0.0),
            UDim::new(0.0, 10.0),
            UDim::new(0.75, 0.0),
            UDim::new(1.0, -10.0),
        );
        assert_eq!(rect.resolve(Size::new(200.0, 100.0)), Rect::new(50.0, 10.0, 150.0, 90.0));

        let pos = UVector2::new(UDim::new(0.5, 2.0), UDim::new(0.0, 4.0));
        assert_eq!(pos.resolve(Size::new(100.0, 100.0)), Point::new(52.0, 4.0));
    }
}
