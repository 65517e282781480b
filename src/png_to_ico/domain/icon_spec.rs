use crate::domain::error::DomainError;
use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

pub const MAX_ICON_SIZE: u32 = 256;
pub const DEFAULT_ICON_SIZE: u32 = 256;

/// 正方形でない入力をどう収めるか
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    /// 縦横を独立に拡縮して正方形にする
    #[default]
    Stretch,
    /// アスペクト比を保って縮小し、透明キャンバスの中央に置く
    Fit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    Nearest,
    Triangle,
    CatmullRom,
    Gaussian,
    #[default]
    Lanczos3,
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Triangle => FilterType::Triangle,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
        }
    }
}

/// 出力する ICO エントリ 1 枚分の仕様
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSpec {
    size: u32,
    pub resize: ResizeMode,
    pub filter: ResampleFilter,
}

impl IconSpec {
    pub fn new(size: u32, resize: ResizeMode, filter: ResampleFilter) -> Result<Self, DomainError> {
        if size == 0 || size > MAX_ICON_SIZE {
            return Err(DomainError::InvalidIconSize(size));
        }
        Ok(Self { size, resize, filter })
    }

    pub fn size(&self) -> u32 {
        self.size
    }
}

impl Default for IconSpec {
    fn default() -> Self {
        Self {
            size: DEFAULT_ICON_SIZE,
            resize: ResizeMode::default(),
            filter: ResampleFilter::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_256_stretch_lanczos() {
        let spec = IconSpec::default();
        assert_eq!(spec.size(), 256);
        assert_eq!(spec.resize, ResizeMode::Stretch);
        assert_eq!(spec.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn test_new_accepts_bounds() {
        assert!(IconSpec::new(1, ResizeMode::Fit, ResampleFilter::Nearest).is_ok());
        assert!(IconSpec::new(256, ResizeMode::Stretch, ResampleFilter::Lanczos3).is_ok());
    }

    #[test]
    fn test_new_rejects_out_of_range_size() {
        match IconSpec::new(0, ResizeMode::Stretch, ResampleFilter::Lanczos3) {
            Err(DomainError::InvalidIconSize(0)) => {}
            other => panic!("Expected InvalidIconSize(0), got {:?}", other),
        }
        match IconSpec::new(512, ResizeMode::Stretch, ResampleFilter::Lanczos3) {
            Err(DomainError::InvalidIconSize(512)) => {}
            other => panic!("Expected InvalidIconSize(512), got {:?}", other),
        }
    }

    #[test]
    fn test_filter_maps_to_image_filter_type() {
        assert_eq!(FilterType::from(ResampleFilter::Nearest), FilterType::Nearest);
        assert_eq!(FilterType::from(ResampleFilter::CatmullRom), FilterType::CatmullRom);
        assert_eq!(FilterType::from(ResampleFilter::Lanczos3), FilterType::Lanczos3);
    }
}
