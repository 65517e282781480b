use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use super::error::ApplicationError;
use log::{debug, info, warn};

use crate::domain::file_storage_trait::FileStorage;
use crate::domain::icon::ConversionReport;
use crate::domain::icon_spec::IconSpec;
use crate::domain::image_processor_trait::ImageProcessor;
use crate::infrastructure::config::ConversionPaths;

/// 変換 1 回分の結果。エラーは呼び出し元へ伝播させずメッセージとして返す
#[derive(Debug)]
pub enum ConversionOutcome {
    Converted(ConversionReport),
    MissingInput { path: PathBuf },
    Failed { message: String },
}

impl ConversionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ConversionOutcome::Converted(_))
    }
}

impl fmt::Display for ConversionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionOutcome::Converted(report) => write!(
                f,
                "Successfully converted {} to {}",
                report.source.display(),
                report.dest.display()
            ),
            ConversionOutcome::MissingInput { path } => {
                write!(f, "Error: {} not found!", path.display())
            }
            ConversionOutcome::Failed { message } => {
                write!(f, "Error converting image: {}", message)
            }
        }
    }
}

pub struct ConvertService {
    image_processor: Arc<dyn ImageProcessor + Send + Sync>,
    file_storage: Arc<dyn FileStorage + Send + Sync>,
}

impl ConvertService {
    pub fn new(
        image_processor: Arc<dyn ImageProcessor + Send + Sync>,
        file_storage: Arc<dyn FileStorage + Send + Sync>,
    ) -> Self {
        Self {
            image_processor,
            file_storage,
        }
    }

    /// PNG を読み込み、RGBA に揃えて、1 エントリの ICO として書き出す
    pub fn convert(
        &self,
        source: &Path,
        dest: &Path,
        spec: &IconSpec,
    ) -> Result<ConversionReport, ApplicationError> {
        debug!("Reading {}", source.display());
        let image_data = self.file_storage.read_image(source)?;

        // エンコードはメモリ上で完結させ、成功してから出力先を開く
        let icon = self.image_processor.png_to_ico(&image_data, spec)?;

        self.file_storage.save_image(dest, &icon.bytes)?;
        info!(
            "Wrote {}x{} icon ({} bytes) to {}",
            spec.size(),
            spec.size(),
            icon.bytes.len(),
            dest.display()
        );

        Ok(ConversionReport {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            source_info: icon.source,
            normalized: icon.normalized,
            icon_size: spec.size(),
            bytes_written: icon.bytes.len(),
        })
    }

    /// 入力の存在チェックをしてから convert を呼ぶ
    pub fn run(&self, paths: &ConversionPaths, spec: &IconSpec) -> ConversionOutcome {
        if !self.file_storage.exists(&paths.source) {
            warn!("Input file {} does not exist", paths.source.display());
            return ConversionOutcome::MissingInput {
                path: paths.source.clone(),
            };
        }

        match self.convert(&paths.source, &paths.dest, spec) {
            Ok(report) => ConversionOutcome::Converted(report),
            Err(e) => ConversionOutcome::Failed {
                message: e.to_string(),
            },
        }
    }
}
