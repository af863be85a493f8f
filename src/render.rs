pub mod cpu;

use image::RgbImage;

use crate::foundation::core::{Dimensions, Rgb8};
use crate::foundation::error::PlaceholderResult;

/// Options for [`render_placeholder`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderOptions {
    /// Gaussian sigma used to soften the cross; `None` leaves the raster untouched.
    pub blur_sigma: Option<f32>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blur_sigma: Some(1.0),
        }
    }
}

/// Cross stroke width in pixels for an image `width` pixels wide.
pub fn stroke_width(width: u32) -> f64 {
    if width < 1000 { 2.0 } else { 3.0 }
}

/// Renders the placeholder: a solid `color` fill crossed corner to corner in the inverted
/// color, then optionally blurred.
#[tracing::instrument(level = "debug", skip(opts))]
pub fn render_placeholder(
    dims: Dimensions,
    color: Rgb8,
    opts: &RenderOptions,
) -> PlaceholderResult<RgbImage> {
    let img = cpu::rasterize_cross(dims, color, color.inverted(), stroke_width(dims.width))?;
    match opts.blur_sigma {
        Some(sigma) if sigma.is_finite() && sigma > 0.0 => Ok(image::imageops::blur(&img, sigma)),
        _ => Ok(img),
    }
}
