use crate::domain::icon::EncodedIcon;
use crate::domain::icon_spec::IconSpec;
use crate::infrastructure::error::InfrastructureError;

// 画像のバイト列を受け取り、ICO のバイト列を返す
#[cfg_attr(test, mockall::automock)]
pub trait ImageProcessor {
    fn png_to_ico(
        &self,
        image_bytes: &[u8],
        spec: &IconSpec,
    ) -> Result<EncodedIcon, InfrastructureError>;
}
