//! Image MIME type detection from magic bytes.

/// MIME type used when the payload is not recognized.
pub const FALLBACK_MIME: &str = "image/jpeg";

/// Sniff the image format. Unrecognized payloads are sent as JPEG and left
/// for the service to reject.
pub fn sniff_mime_type(image: &[u8]) -> &'static str {
    if image.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        "image/png"
    } else if image.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "image/jpeg"
    } else if image.len() >= 12 && &image[0..4] == b"RIFF" && &image[8..12] == b"WEBP" {
        "image/webp"
    } else if image.starts_with(b"GIF87a") || image.starts_with(b"GIF89a") {
        "image/gif"
    } else {
        FALLBACK_MIME
    }
}
