use anyhow::Context as _;

use crate::foundation::error::{PathglowError, PathglowResult};

/// Rasterize an SVG document at its intrinsic size into straight-alpha RGBA8.
pub fn rasterize_svg(svg: &str) -> PathglowResult<image::RgbaImage> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse scene svg")?;

    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| PathglowError::render(format!("failed to allocate {width}x{height} pixmap")))?;

    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );

    let mut data = Vec::with_capacity(pixmap.data().len());
    for px in pixmap.pixels() {
        let c = px.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }

    image::RgbaImage::from_raw(width, height, data)
        .ok_or_else(|| PathglowError::render("pixel buffer does not match pixmap size"))
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
