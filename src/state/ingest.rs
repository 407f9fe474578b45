/// Image ingestion: reading a picked file into an uploadable image
///
/// The file picker filters to image extensions, but the content type we
/// send to the service is sniffed from the actual bytes, not the file
/// name. The preview handle is derived from the same bytes so the UI
/// never touches the file again after loading.
use std::path::PathBuf;

use iced::widget::image;

use crate::error::IngestionError;

/// The currently selected screenshot, ready for display and upload.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// File name as picked, sent as the multipart part's file name
    pub file_name: String,
    /// MIME type sniffed from the file contents
    pub content_type: &'static str,
    /// Raw file bytes, uploaded verbatim
    pub bytes: Vec<u8>,
    /// Display handle decoded from the same bytes
    pub preview: image::Handle,
}

impl UploadedImage {
    /// Read and recognize a picked file. This is the only suspension
    /// point of ingestion; it runs as a background task so the UI keeps
    /// rendering while large screenshots load.
    pub async fn load(path: PathBuf) -> Result<Self, IngestionError> {
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| IngestionError::Unreadable(e.to_string()))?;

        let content_type = sniff_content_type(&bytes)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| String::from("screenshot"));

        let preview = image::Handle::from_bytes(bytes.clone());

        Ok(UploadedImage {
            file_name,
            content_type,
            bytes,
            preview,
        })
    }
}

/// Sniff the MIME type from the file's magic bytes.
fn sniff_content_type(bytes: &[u8]) -> Result<&'static str, IngestionError> {
    ::image::guess_format(bytes)
        .map(|format| format.to_mime_type())
        .map_err(|_| IngestionError::UnrecognizedFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniffs_png_from_magic_bytes() {
        let png_header = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0];
        assert_eq!(sniff_content_type(&png_header).unwrap(), "image/png");
    }

    #[test]
    fn test_sniffs_jpeg_from_magic_bytes() {
        let jpeg_header = [0xFF, 0xD8, 0xFF, 0xE0, 0, 0, 0, 0];
        assert_eq!(sniff_content_type(&jpeg_header).unwrap(), "image/jpeg");
    }

    #[test]
    fn test_rejects_unrecognized_content() {
        let text = b"definitely not an image";
        assert_eq!(
            sniff_content_type(text),
            Err(IngestionError::UnrecognizedFormat)
        );
    }
}
