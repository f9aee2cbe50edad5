//! RGBA8888 texel representation.

/// Represents a single RGBA8888 texel from a decoded block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(C)]
pub struct Color8888 {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
    /// Alpha component (0-255)
    pub a: u8,
}

impl Color8888 {
    /// Opaque magenta, written in place of any texel that could not be decoded.
    ///
    /// In memory this is `FF 00 FF FF`.
    pub const ERROR_SENTINEL: Self = Self::new(255, 0, 255, 255);

    /// Constructs a new [`Color8888`] from the specified red, green, blue, and alpha components.
    ///
    /// Each parameter represents the intensity of its corresponding colour channel (0–255).
    ///
    /// # Examples
    ///
    /// ```
    /// use gpu_block_decode_common::color_8888::Color8888;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// assert_eq!(pixel.r, 255);
    /// assert_eq!(pixel.g, 0);
    /// assert_eq!(pixel.b, 0);
    /// assert_eq!(pixel.a, 255);
    /// ```
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the texel as bytes in R, G, B, A order.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Builds a texel from bytes in R, G, B, A order.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Returns true if this texel equals [`Color8888::ERROR_SENTINEL`].
    ///
    /// Note that a legitimately opaque magenta texel is indistinguishable from the sentinel.
    #[inline]
    pub fn is_error_sentinel(&self) -> bool {
        *self == Self::ERROR_SENTINEL
    }
}
