use crate::config::constants::{JPEG_QUALITY, MAX_DIMENSION};
use crate::models::image_dao::ImageFile;
use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum CompressError {
    #[error("Error al comprimir la imagen: {0}")]
    Image(#[from] image::ImageError),
}

/// Scales `(width, height)` so the longer edge is at most `max`, keeping the
/// aspect ratio. Dimensions already within bounds are returned unchanged.
pub fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    if width <= max && height <= max {
        return (width, height);
    }

    let scaled = |short: u32, long: u32| -> u32 {
        ((short as f64 / long as f64) * max as f64).round().max(1.0) as u32
    };

    if width > height {
        (max, scaled(height, width))
    } else {
        (scaled(width, height), max)
    }
}

fn jpeg_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{stem}.jpg"),
        _ => format!("{name}.jpg"),
    }
}

/// Decodes `file`, caps its longer edge at 2048 px and re-encodes it as JPEG
/// at quality 85.
pub fn compress_image(file: &ImageFile) -> Result<ImageFile, CompressError> {
    let img = image::load_from_memory(&file.data)?;
    let (width, height) = fit_within(img.width(), img.height(), MAX_DIMENSION);

    let img = if (width, height) != (img.width(), img.height()) {
        img.resize_exact(width, height, FilterType::Triangle)
    } else {
        img
    };

    // JPEG carries no alpha channel
    let rgb = img.to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).encode_image(&rgb)?;

    debug!(
        "compressed {} from {} to {} bytes ({}x{})",
        file.name,
        file.data.len(),
        out.len(),
        width,
        height
    );

    Ok(ImageFile::new(jpeg_name(&file.name), "image/jpeg", Bytes::from(out)))
}
