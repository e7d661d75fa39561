//! PNG export

use crate::io::error::{CamoError, Result};
use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Write `image` to `output_path`, creating parent directories as needed
///
/// The file is always PNG-encoded, whatever its extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_png(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CamoError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| CamoError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
