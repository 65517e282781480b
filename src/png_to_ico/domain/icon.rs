use crate::domain::image::ImageInfo;
use std::path::PathBuf;

/// エンコード済みの ICO バイト列と、変換中に何が起きたか
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedIcon {
    pub bytes: Vec<u8>,
    pub source: ImageInfo,
    pub normalized: bool, // RGBA8 への変換をしたか
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionReport {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub source_info: ImageInfo,
    pub normalized: bool,
    pub icon_size: u32,
    pub bytes_written: usize,
}
