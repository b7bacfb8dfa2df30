use derive_more::Display;
use infer::Infer;

/// Image formats accepted for profile pictures, with the extension used on disk.
const ALLOWED_IMAGE_TYPES: [(&str, &str); 4] = [
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
];

#[derive(Debug, Display, PartialEq)]
pub enum ImageError {
    #[display("Image file is empty")]
    Empty,

    #[display("Image exceeds the maximum size of {_0} bytes")]
    TooLarge(usize),

    #[display("Unsupported image type: {_0}")]
    UnsupportedType(String),

    #[display("Could not detect the file type")]
    UnknownType,
}

/// Checks size and sniffs the content, returning the file extension to store it under.
pub fn detect_image_extension(bytes: &[u8], max_size: usize) -> Result<&'static str, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    if bytes.len() > max_size {
        return Err(ImageError::TooLarge(max_size));
    }

    let infer = Infer::new();
    let kind = infer.get(bytes).ok_or(ImageError::UnknownType)?;

    ALLOWED_IMAGE_TYPES
        .iter()
        .find(|(mime, _)| *mime == kind.mime_type())
        .map(|(_, ext)| *ext)
        .ok_or_else(|| ImageError::UnsupportedType(kind.mime_type().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_HEADER: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
    const PDF_HEADER: &[u8] = b"%PDF-1.7\n";

    #[test]
    fn accepts_png_content() {
        assert_eq!(detect_image_extension(PNG_HEADER, 1024), Ok("png"));
    }

    #[test]
    fn rejects_non_image_content() {
        assert_eq!(
            detect_image_extension(PDF_HEADER, 1024),
            Err(ImageError::UnsupportedType("application/pdf".into()))
        );
        assert_eq!(detect_image_extension(b"hello", 1024), Err(ImageError::UnknownType));
    }

    #[test]
    fn enforces_size_limits() {
        assert_eq!(detect_image_extension(&[], 1024), Err(ImageError::Empty));
        assert_eq!(detect_image_extension(PNG_HEADER, 4), Err(ImageError::TooLarge(4)));
    }
}
