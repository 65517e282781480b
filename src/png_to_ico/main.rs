mod application {
    pub mod convert_service;
    pub mod error;
}
mod domain {
    pub mod error;
    pub mod file_storage_trait;
    pub mod icon;
    pub mod icon_spec;
    pub mod image;
    pub mod image_processor_trait;
}
mod infrastructure {
    pub mod config;
    pub mod error;
    pub mod file_storage;
    pub mod image_processor;
}

use anyhow::Context;
use log::debug;
use std::path::PathBuf;
use std::sync::Arc;

use application::convert_service::{ConversionOutcome, ConvertService};
use application::error::ApplicationError;
use domain::icon_spec::IconSpec;
use infrastructure::config::{ConversionPaths, ConverterConfig};
use infrastructure::file_storage::LocalFileStorage;
use infrastructure::image_processor::DefaultImageProcessor;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (paths, spec) = match prepare() {
        Ok(prepared) => prepared,
        Err(e) => {
            eprintln!("Error: {}", e);
            return;
        }
    };

    let service = ConvertService::new(
        Arc::new(DefaultImageProcessor::new()),
        Arc::new(LocalFileStorage::new()),
    );

    // 成否にかかわらず正常終了する
    let outcome = service.run(&paths, &spec);
    if let ConversionOutcome::Converted(report) = &outcome {
        debug!(
            "Source {}x{} {}, normalized: {}, {} bytes written",
            report.source_info.width,
            report.source_info.height,
            report.source_info.format,
            report.normalized,
            report.bytes_written
        );
    }
    if outcome.is_success() {
        println!("{}", outcome);
    } else {
        eprintln!("{}", outcome);
    }
}

fn prepare() -> Result<(ConversionPaths, IconSpec), ApplicationError> {
    let base_dir = resolve_base_dir()?;
    let config = ConverterConfig::load(&base_dir)
        .map_err(|e| ApplicationError::ConfigurationError(e.to_string()))?;
    let spec = config
        .icon_spec()
        .map_err(|e| ApplicationError::ConfigurationError(e.to_string()))?;
    Ok((config.paths(&base_dir), spec))
}

// 実行ファイルが置かれているディレクトリ
fn resolve_base_dir() -> anyhow::Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}
