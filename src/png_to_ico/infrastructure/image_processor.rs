use crate::domain::icon::EncodedIcon;
use crate::domain::icon_spec::{IconSpec, ResizeMode};
use crate::domain::image::{ImageInfo, PixelFormat};
use crate::domain::image_processor_trait::ImageProcessor;
use super::error::InfrastructureError;
use image::codecs::ico::IcoEncoder;
use image::imageops::{self, FilterType};
use image::{ColorType, DynamicImage, ImageEncoder, RgbaImage};
use log::debug;
use std::io::Cursor;

pub struct DefaultImageProcessor;

impl DefaultImageProcessor {
    pub fn new() -> Self {
        Self
    }

    fn decode(&self, image_bytes: &[u8]) -> Result<DynamicImage, InfrastructureError> {
        let reader = image::io::Reader::new(Cursor::new(image_bytes))
            .with_guessed_format()
            .map_err(InfrastructureError::IoError)?;
        Ok(reader.decode()?)
    }

    /// RGBA8 以外は変換する。アルファの無いフォーマットは不透明 (255) で埋まる
    fn normalize(&self, img: DynamicImage, format: PixelFormat) -> (RgbaImage, bool) {
        if format.is_rgba8() {
            (img.into_rgba8(), false)
        } else {
            (img.to_rgba8(), true)
        }
    }

    fn resample(&self, rgba: RgbaImage, spec: &IconSpec) -> RgbaImage {
        let size = spec.size();
        if rgba.width() == size && rgba.height() == size {
            return rgba;
        }
        let filter: FilterType = spec.filter.into();
        match spec.resize {
            ResizeMode::Stretch => imageops::resize(&rgba, size, size, filter),
            ResizeMode::Fit => {
                let (width, height) = fit_within(rgba.width(), rgba.height(), size);
                let scaled = imageops::resize(&rgba, width, height, filter);
                let mut canvas = RgbaImage::new(size, size); // 全面透明
                let x = (size - width) / 2;
                let y = (size - height) / 2;
                imageops::overlay(&mut canvas, &scaled, x as i64, y as i64);
                canvas
            }
        }
    }

    fn encode(&self, icon: &RgbaImage) -> Result<Vec<u8>, InfrastructureError> {
        let mut buffer = Vec::new();
        IcoEncoder::new(&mut buffer).write_image(
            icon.as_raw(),
            icon.width(),
            icon.height(),
            ColorType::Rgba8,
        )?;
        Ok(buffer)
    }
}

impl Default for DefaultImageProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageProcessor for DefaultImageProcessor {
    fn png_to_ico(
        &self,
        image_bytes: &[u8],
        spec: &IconSpec,
    ) -> Result<EncodedIcon, InfrastructureError> {
        let img = self.decode(image_bytes)?;
        ensure_has_pixels(&img)?;
        let source = ImageInfo::new(img.width(), img.height(), PixelFormat::from(img.color()));
        debug!("Decoded {}x{} {} image", source.width, source.height, source.format);

        let (rgba, normalized) = self.normalize(img, source.format);
        if normalized && !source.format.has_alpha() {
            debug!("Converted {} to RGBA8 with opaque alpha", source.format);
        } else if normalized {
            debug!("Converted {} to RGBA8", source.format);
        }

        if !source.has_size(spec.size()) {
            debug!(
                "Resampling {}x{} to {}x{} ({:?}, {:?})",
                source.width,
                source.height,
                spec.size(),
                spec.size(),
                spec.resize,
                spec.filter
            );
        }
        let icon = self.resample(rgba, spec);

        let bytes = self.encode(&icon)?;
        Ok(EncodedIcon {
            bytes,
            source,
            normalized,
        })
    }
}

// PNG デコーダは 0px を弾くが、with_guessed_format で他フォーマットも通る
fn ensure_has_pixels(img: &DynamicImage) -> Result<(), InfrastructureError> {
    if img.width() == 0 || img.height() == 0 {
        return Err(InfrastructureError::ImageProcessingError(
            "source image has no pixels".to_string(),
        ));
    }
    Ok(())
}

// アスペクト比を保ったまま size x size に収まる寸法 (各辺最低 1px)
fn fit_within(width: u32, height: u32, size: u32) -> (u32, u32) {
    if width >= height {
        let scaled = (height as u64 * size as u64 + width as u64 / 2) / width as u64;
        (size, (scaled as u32).clamp(1, size))
    } else {
        let scaled = (width as u64 * size as u64 + height as u64 / 2) / height as u64;
        ((scaled as u32).clamp(1, size), size)
    }
}
