use image::RgbImage;
use vello_cpu::kurbo::{BezPath, Cap, Point, Rect, Stroke};

use crate::foundation::core::{Dimensions, Rgb8};
use crate::foundation::error::{PlaceholderError, PlaceholderResult};

/// Rasterizes a `fill` background with two corner-to-corner strokes in `ink`.
///
/// Lines run `(0,0) -> (w,h)` and `(0,h) -> (w,0)` in pixel-edge coordinates, so each one
/// covers the corner pixels it starts and ends on.
pub fn rasterize_cross(
    dims: Dimensions,
    fill: Rgb8,
    ink: Rgb8,
    stroke_width: f64,
) -> PlaceholderResult<RgbImage> {
    let width_u16: u16 = dims
        .width
        .try_into()
        .map_err(|_| PlaceholderError::render("surface width exceeds u16"))?;
    let height_u16: u16 = dims
        .height
        .try_into()
        .map_err(|_| PlaceholderError::render("surface height exceeds u16"))?;
    if width_u16 == 0 || height_u16 == 0 {
        return Err(PlaceholderError::render("surface must be non-empty"));
    }

    let w = f64::from(dims.width);
    let h = f64::from(dims.height);

    let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);

    ctx.set_paint(color_to_cpu(fill));
    ctx.fill_rect(&Rect::new(0.0, 0.0, w, h));

    ctx.set_paint(color_to_cpu(ink));
    ctx.set_stroke(Stroke::new(stroke_width).with_caps(Cap::Butt));
    ctx.stroke_path(&line((0.0, 0.0), (w, h)));
    ctx.stroke_path(&line((0.0, h), (w, 0.0)));

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width_u16, height_u16);
    ctx.render_to_pixmap(&mut pixmap);

    pixmap_to_rgb(&pixmap, dims)
}

fn line(from: (f64, f64), to: (f64, f64)) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(Point::new(from.0, from.1));
    p.line_to(Point::new(to.0, to.1));
    p
}

fn color_to_cpu(c: Rgb8) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, 255)
}

// The surface is fully opaque, so premultiplied RGB equals straight RGB.
fn pixmap_to_rgb(pixmap: &vello_cpu::Pixmap, dims: Dimensions) -> PlaceholderResult<RgbImage> {
    let rgba = pixmap.data_as_u8_slice();
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for px in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }
    RgbImage::from_raw(dims.width, dims.height, rgb)
        .ok_or_else(|| PlaceholderError::render("pixmap size does not match dimensions"))
}
