//! Reading images from disk and saving snapshots back.

use super::data_uri::DataUri;
use super::types::ImageError;
use std::fs;
use std::path::{Path, PathBuf};

/// Infers an image MIME type from a file extension.
///
/// Unknown extensions map to `application/octet-stream`; decoding such a
/// source later fails with an unsupported-format error.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Reads a user-selected file into a data URI.
///
/// # Arguments
/// * `path` - File to read (a leading `~/` is expanded)
pub fn read_file_as_data_uri(path: &Path) -> Result<DataUri, ImageError> {
    let path = match path.to_str() {
        Some(raw) => expand_tilde(raw),
        None => path.to_path_buf(),
    };

    let bytes = fs::read(&path)?;
    let mime = mime_for_path(&path);
    log::info!(
        "Read {} ({} bytes, {})",
        path.display(),
        bytes.len(),
        mime
    );

    Ok(DataUri::new(mime, bytes))
}

/// Ensure the parent directory of `path` exists, creating it if necessary.
pub fn ensure_parent_exists(path: &Path) -> Result<(), ImageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            log::info!("Creating output directory: {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Save encoded image data to a file.
///
/// # Arguments
/// * `image_data` - Encoded image bytes (PNG format)
/// * `path` - Destination file
///
/// # Returns
/// Path the file was written to, after tilde expansion
pub fn save_png(image_data: &[u8], path: &Path) -> Result<PathBuf, ImageError> {
    let path = match path.to_str() {
        Some(raw) => expand_tilde(raw),
        None => path.to_path_buf(),
    };
    ensure_parent_exists(&path)?;

    log::info!(
        "Saving image to: {} ({} bytes)",
        path.display(),
        image_data.len()
    );
    fs::write(&path, image_data)?;

    let written_size = fs::metadata(&path)?.len();
    log::debug!("File written: {} bytes", written_size);

    Ok(path)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
