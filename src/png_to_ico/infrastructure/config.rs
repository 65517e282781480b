use super::error::InfrastructureError;
use crate::domain::icon_spec::{IconSpec, ResampleFilter, ResizeMode, DEFAULT_ICON_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "png_to_ico.toml";

/// 実行ファイルと同じディレクトリに置く設定ファイル (任意)
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub input: String,
    pub output: String,
    pub size: u32,
    pub resize: ResizeMode,
    pub filter: ResampleFilter,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            input: "logo.png".to_string(),
            output: "logo.ico".to_string(),
            size: DEFAULT_ICON_SIZE,
            resize: ResizeMode::default(),
            filter: ResampleFilter::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    pub source: PathBuf,
    pub dest: PathBuf,
}

impl ConverterConfig {
    /// 設定ファイルが無ければデフォルト値
    pub fn load(base_dir: &Path) -> Result<Self, InfrastructureError> {
        let path = base_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, InfrastructureError> {
        Ok(toml::from_str(content)?)
    }

    pub fn paths(&self, base_dir: &Path) -> ConversionPaths {
        ConversionPaths {
            source: base_dir.join(&self.input),
            dest: base_dir.join(&self.output),
        }
    }

    pub fn icon_spec(&self) -> Result<IconSpec, InfrastructureError> {
        Ok(IconSpec::new(self.size, self.resize, self.filter)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;

    #[test]
    fn test_missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = ConverterConfig::load(dir.path()).unwrap();

        assert_eq!(config, ConverterConfig::default());
        assert_eq!(config.icon_spec().unwrap(), IconSpec::default());
    }

    #[test]
    fn test_default_paths_sit_next_to_base_dir() {
        let base = Path::new("/opt/app");

        let paths = ConverterConfig::default().paths(base);

        assert_eq!(paths.source, PathBuf::from("/opt/app/logo.png"));
        assert_eq!(paths.dest, PathBuf::from("/opt/app/logo.ico"));
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = ConverterConfig::from_toml("output = \"app.ico\"\nresize = \"fit\"\n").unwrap();

        assert_eq!(config.input, "logo.png");
        assert_eq!(config.output, "app.ico");
        assert_eq!(config.size, 256);
        assert_eq!(config.resize, ResizeMode::Fit);
        assert_eq!(config.filter, ResampleFilter::Lanczos3);
    }

    #[test]
    fn test_load_reads_file_from_base_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            "input = \"icon.png\"\nsize = 64\nfilter = \"catmullrom\"\n",
        )
        .unwrap();

        let config = ConverterConfig::load(dir.path()).unwrap();

        assert_eq!(config.paths(dir.path()).source, dir.path().join("icon.png"));
        let spec = config.icon_spec().unwrap();
        assert_eq!(spec.size(), 64);
        assert_eq!(spec.filter, ResampleFilter::CatmullRom);
    }

    #[test]
    fn test_malformed_config_is_error() {
        assert!(matches!(
            ConverterConfig::from_toml("size = \"big\""),
            Err(InfrastructureError::ConfigError(_))
        ));
        assert!(matches!(
            ConverterConfig::from_toml("resize = \"crop\""),
            Err(InfrastructureError::ConfigError(_))
        ));
        assert!(matches!(
            ConverterConfig::from_toml("sizes = [256]"),
            Err(InfrastructureError::ConfigError(_))
        ));
    }

    #[test]
    fn test_oversized_icon_is_rejected() {
        let config = ConverterConfig::from_toml("size = 300").unwrap();

        match config.icon_spec() {
            Err(InfrastructureError::DomainErrorWrapper(DomainError::InvalidIconSize(300))) => {}
            other => panic!("Expected InvalidIconSize(300), got {:?}", other),
        }
    }
}
