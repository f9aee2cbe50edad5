//! # ASTC Footprints
//!
//! An ASTC block is always 16 bytes, whatever the number of texels it covers, so the
//! texel grid cannot be recovered from the block itself. It has to be supplied by the
//! caller and validated against the set of footprints we support before decoding.
//!
//! [`AstcFootprint::resolve`] maps a `(width, height)` pair to exactly one
//! [`AstcFootprint`], or to [`None`] if the pair is not a supported 2D footprint.
//!
//! ```
//! use gpu_block_decode::AstcFootprint;
//!
//! assert_eq!(AstcFootprint::resolve(6, 6), Some(AstcFootprint::Astc6x6));
//! assert_eq!(AstcFootprint::resolve(6, 4), None);
//! assert_eq!(AstcFootprint::Astc6x6.output_len(), 144);
//! ```

use crate::BYTES_PER_TEXEL;
use core::fmt::{self, Display};
use core::str::FromStr;
use derive_enum_all_values::AllValues;

/// A supported 2D ASTC block footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum AstcFootprint {
    /// 4x4 texels (8.00 bits per texel)
    Astc4x4,
    /// 5x4 texels (6.40 bits per texel)
    Astc5x4,
    /// 5x5 texels (5.12 bits per texel)
    Astc5x5,
    /// 6x5 texels (4.27 bits per texel)
    Astc6x5,
    /// 6x6 texels (3.56 bits per texel)
    Astc6x6,
    /// 8x5 texels (3.20 bits per texel)
    Astc8x5,
    /// 8x6 texels (2.67 bits per texel)
    Astc8x6,
    /// 10x5 texels (2.56 bits per texel)
    Astc10x5,
    /// 10x6 texels (2.13 bits per texel)
    Astc10x6,
    /// 8x8 texels (2.00 bits per texel)
    Astc8x8,
    /// 10x8 texels (1.60 bits per texel)
    Astc10x8,
    /// 10x10 texels (1.28 bits per texel)
    Astc10x10,
    /// 12x10 texels (1.07 bits per texel)
    Astc12x10,
    /// 12x12 texels (0.89 bits per texel)
    Astc12x12,
}

impl AstcFootprint {
    /// Resolves a texel grid to its footprint.
    ///
    /// Returns [`None`] for any pair that is not a supported footprint, including
    /// zero, transposed (e.g. `4x5`) and oversized dimensions.
    pub const fn resolve(width: u32, height: u32) -> Option<Self> {
        use AstcFootprint::*;
        Some(match (width, height) {
            (4, 4) => Astc4x4,
            (5, 4) => Astc5x4,
            (5, 5) => Astc5x5,
            (6, 5) => Astc6x5,
            (6, 6) => Astc6x6,
            (8, 5) => Astc8x5,
            (8, 6) => Astc8x6,
            (10, 5) => Astc10x5,
            (10, 6) => Astc10x6,
            (8, 8) => Astc8x8,
            (10, 8) => Astc10x8,
            (10, 10) => Astc10x10,
            (12, 10) => Astc12x10,
            (12, 12) => Astc12x12,
            _ => return None,
        })
    }

    /// Width and height of the texel grid.
    pub const fn dimensions(self) -> (u32, u32) {
        use AstcFootprint::*;
        match self {
            Astc4x4 => (4, 4),
            Astc5x4 => (5, 4),
            Astc5x5 => (5, 5),
            Astc6x5 => (6, 5),
            Astc6x6 => (6, 6),
            Astc8x5 => (8, 5),
            Astc8x6 => (8, 6),
            Astc10x5 => (10, 5),
            Astc10x6 => (10, 6),
            Astc8x8 => (8, 8),
            Astc10x8 => (10, 8),
            Astc10x10 => (10, 10),
            Astc12x10 => (12, 10),
            Astc12x12 => (12, 12),
        }
    }

    /// Width of the texel grid.
    #[inline]
    pub const fn width(self) -> u32 {
        self.dimensions().0
    }

    /// Height of the texel grid.
    #[inline]
    pub const fn height(self) -> u32 {
        self.dimensions().1
    }

    /// Number of texels encoded by one block.
    #[inline]
    pub const fn texel_count(self) -> usize {
        (self.width() * self.height()) as usize
    }

    /// Bytes between the starts of two consecutive rows of decoded output.
    #[inline]
    pub const fn stride(self) -> usize {
        self.width() as usize * BYTES_PER_TEXEL
    }

    /// Size of one decoded block in bytes.
    #[inline]
    pub const fn output_len(self) -> usize {
        self.texel_count() * BYTES_PER_TEXEL
    }
}

impl Display for AstcFootprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width(), self.height())
    }
}

/// Error returned when parsing an [`AstcFootprint`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseFootprintError {
    /// The string was not of the form `WxH`.
    #[error("Invalid footprint syntax. Expected WxH, e.g. 6x6.")]
    InvalidSyntax,

    /// The string was well formed but names an unsupported footprint.
    #[error("Unsupported ASTC footprint: {width}x{height}")]
    Unsupported {
        /// Requested width in texels
        width: u32,
        /// Requested height in texels
        height: u32,
    },
}

impl FromStr for AstcFootprint {
    type Err = ParseFootprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (width, height) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or(ParseFootprintError::InvalidSyntax)?;
        let width: u32 = width
            .parse()
            .map_err(|_| ParseFootprintError::InvalidSyntax)?;
        let height: u32 = height
            .parse()
            .map_err(|_| ParseFootprintError::InvalidSyntax)?;

        Self::resolve(width, height).ok_or(ParseFootprintError::Unsupported { width, height })
    }
}
