use std::{
    fs::File,
    io::{BufWriter, Write as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use image::{RgbImage, codecs::jpeg::JpegEncoder};

use crate::foundation::error::PlaceholderResult;

pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Encodes `img` as JPEG at `path`.
///
/// The bytes go to a sibling `.tmp` file that is renamed over `path` once complete, so a
/// concurrent reader sees either nothing or a whole file.
pub fn save_jpeg(img: &RgbImage, path: &Path, quality: u8) -> PlaceholderResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create placeholder dir '{}'", parent.display()))?;
    }

    let tmp = tmp_path(path);
    if let Err(e) = write_jpeg(img, &tmp, quality) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }
    std::fs::rename(&tmp, path)
        .with_context(|| format!("move '{}' into place", tmp.display()))?;

    tracing::info!(path = %path.display(), "saved placeholder image");
    Ok(())
}

fn write_jpeg(img: &RgbImage, path: &Path, quality: u8) -> PlaceholderResult<()> {
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    let mut w = BufWriter::new(f);
    let encoder = JpegEncoder::new_with_quality(&mut w, quality.clamp(1, 100));
    img.write_with_encoder(encoder)
        .with_context(|| format!("encode jpeg '{}'", path.display()))?;
    w.flush()
        .with_context(|| format!("flush '{}'", path.display()))?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
