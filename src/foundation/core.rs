use std::fmt;

use crate::foundation::error::{PlaceholderError, PlaceholderResult};
use crate::validate::{validate_range, validate_ratio};

/// Inclusive `lower..=upper` range used for input validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bound {
    pub lower: i64,
    pub upper: i64,
}

impl Bound {
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    pub fn contains(self, value: i64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}

/// Bounds applied to pixel dimensions and ratio components.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    pub width: Bound,
    pub height: Bound,
    pub ratio: Bound,
}

impl Limits {
    pub const DIMENSION: Bound = Bound::new(32, 4000);
    pub const RATIO: Bound = Bound::new(1, 30);
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            width: Self::DIMENSION,
            height: Self::DIMENSION,
            ratio: Self::RATIO,
        }
    }
}

/// Straight (non-premultiplied) 8-bit RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Splits a `0xRRGGBB` value; bits above 24 are ignored.
    pub const fn from_u24(v: u32) -> Self {
        Self {
            r: ((v >> 16) & 0xFF) as u8,
            g: ((v >> 8) & 0xFF) as u8,
            b: (v & 0xFF) as u8,
        }
    }

    pub const fn to_u24(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub const fn inverted(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Aspect ratio in abstract units, e.g. `16:9`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    pub width: u32,
    pub height: u32,
}

impl Ratio {
    pub fn from_values(values: &[i64], bound: Bound) -> PlaceholderResult<Self> {
        let invalid = || {
            PlaceholderError::invalid_ratio(format!(
                "{values:?} (expected two integers in {bound})"
            ))
        };
        if !validate_ratio(values, bound) {
            return Err(invalid());
        }
        // A caller-supplied bound may still admit values no u32 can hold.
        Ok(Self {
            width: u32::try_from(values[0]).map_err(|_| invalid())?,
            height: u32::try_from(values[1]).map_err(|_| invalid())?,
        })
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

/// Final pixel size of a placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: i64, height: i64, limits: &Limits) -> PlaceholderResult<Self> {
        let invalid = || {
            PlaceholderError::invalid_size(format!(
                "{width}x{height} (width must be in {}, height in {})",
                limits.width, limits.height
            ))
        };
        if !(validate_range(width, limits.width) && validate_range(height, limits.height)) {
            return Err(invalid());
        }
        Ok(Self {
            width: u32::try_from(width).map_err(|_| invalid())?,
            height: u32::try_from(height).map_err(|_| invalid())?,
        })
    }

    /// Cache key of the artifact on disk.
    pub fn file_name(self) -> String {
        format!("{}_x_{}.jpg", self.width, self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
