//! Cached placeholder image generation.
//!
//! A placeholder is a JPEG of a requested pixel size (or aspect ratio), filled with one color
//! and crossed corner to corner in the inverted color. Files are keyed by size alone:
//! `<out>/placeholders/<width>_x_<height>.jpg` is written once and reused afterwards.
//!
//! - Resolve a [`PlaceholderRequest`] from a [`DimensionSpec`] and a hex color
//! - Hand it to a [`Generator`], which checks the cache, renders and saves
#![forbid(unsafe_code)]

pub mod cache;
pub mod dimensions;
pub mod encode;
pub mod foundation;
pub mod generate;
pub mod logging;
pub mod render;
pub mod validate;

pub use cache::{placeholder_exists, placeholder_path};
pub use dimensions::{DEFAULT_BASE, dimensions_from_ratio};
pub use encode::{DEFAULT_JPEG_QUALITY, save_jpeg};
pub use foundation::core::{Bound, Dimensions, Limits, Ratio, Rgb8};
pub use foundation::error::{PlaceholderError, PlaceholderResult};
pub use generate::{
    DEFAULT_COLOR, DimensionSpec, Generator, GeneratorConfig, Outcome, PLACEHOLDER_DIR,
    PlaceholderRequest, resolve_dimensions,
};
pub use render::{RenderOptions, render_placeholder, stroke_width};
pub use validate::{parse_hex_color, validate_hex_color, validate_range, validate_ratio};
