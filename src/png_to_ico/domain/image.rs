use image::ColorType;
use std::fmt;

/// デコード直後のピクセルフォーマット (チャンネル構成 + チャンネルあたりのビット数)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    Luma(u8),
    LumaAlpha(u8),
    Rgb(u8),
    Rgba(u8),
    Other,
}

impl PixelFormat {
    /// 正規化が不要な唯一のフォーマット
    pub fn is_rgba8(&self) -> bool {
        matches!(self, PixelFormat::Rgba(8))
    }

    pub fn has_alpha(&self) -> bool {
        matches!(self, PixelFormat::LumaAlpha(_) | PixelFormat::Rgba(_))
    }
}

impl From<ColorType> for PixelFormat {
    fn from(color: ColorType) -> Self {
        match color {
            ColorType::L8 => PixelFormat::Luma(8),
            ColorType::La8 => PixelFormat::LumaAlpha(8),
            ColorType::Rgb8 => PixelFormat::Rgb(8),
            ColorType::Rgba8 => PixelFormat::Rgba(8),
            ColorType::L16 => PixelFormat::Luma(16),
            ColorType::La16 => PixelFormat::LumaAlpha(16),
            ColorType::Rgb16 => PixelFormat::Rgb(16),
            ColorType::Rgba16 => PixelFormat::Rgba(16),
            ColorType::Rgb32F => PixelFormat::Rgb(32),
            ColorType::Rgba32F => PixelFormat::Rgba(32),
            _ => PixelFormat::Other,
        }
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PixelFormat::Luma(bits) => write!(f, "L{}", bits),
            PixelFormat::LumaAlpha(bits) => write!(f, "LA{}", bits),
            PixelFormat::Rgb(bits) => write!(f, "RGB{}", bits),
            PixelFormat::Rgba(bits) => write!(f, "RGBA{}", bits),
            PixelFormat::Other => write!(f, "unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
}

impl ImageInfo {
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Self {
        Self {
            width,
            height,
            format,
        }
    }

    pub fn has_size(&self, size: u32) -> bool {
        self.width == size && self.height == size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_format_from_color_type() {
        assert_eq!(PixelFormat::from(ColorType::Rgba8), PixelFormat::Rgba(8));
        assert_eq!(PixelFormat::from(ColorType::Rgb8), PixelFormat::Rgb(8));
        assert_eq!(PixelFormat::from(ColorType::La16), PixelFormat::LumaAlpha(16));
    }

    #[test]
    fn test_only_rgba8_skips_normalization() {
        assert!(PixelFormat::Rgba(8).is_rgba8());
        assert!(!PixelFormat::Rgba(16).is_rgba8());
        assert!(!PixelFormat::Rgb(8).is_rgba8());
        assert!(!PixelFormat::Luma(8).is_rgba8());
    }

    #[test]
    fn test_has_alpha() {
        assert!(PixelFormat::LumaAlpha(8).has_alpha());
        assert!(PixelFormat::Rgba(16).has_alpha());
        assert!(!PixelFormat::Rgb(8).has_alpha());
        assert!(!PixelFormat::Other.has_alpha());
    }

    #[test]
    fn test_display() {
        assert_eq!(PixelFormat::Rgba(8).to_string(), "RGBA8");
        assert_eq!(PixelFormat::Luma(16).to_string(), "L16");
    }
}
