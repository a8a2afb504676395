//! Report text decoding for uploads and pasted input.
//! Uploads are decoded as UTF-8, then Latin-1; undecodable content becomes empty text.

use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::error::AppError;

/// Decode uploaded bytes into report text.
///
/// Never fails: valid UTF-8 is kept as-is, other text is read as Latin-1.
/// Content that is neither UTF-8 nor text (invalid UTF-8 with NUL bytes)
/// yields an empty string.
pub fn decode_report_bytes(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) if bytes.contains(&0) => {
            warn!("Upload looks binary ({} bytes), ignoring it", bytes.len());
            String::new()
        }
        Err(e) => {
            warn!("Upload is not valid UTF-8 ({}), decoding as Latin-1", e);
            decode_latin1(bytes)
        }
    }
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Pick the report text for a request.
///
/// The upload wins only when it decodes to non-empty text; otherwise the
/// pasted text is used, and with neither the report is empty.
pub fn resolve_report_text(upload: Option<&[u8]>, pasted: Option<&str>) -> String {
    if let Some(bytes) = upload {
        let decoded = decode_report_bytes(bytes);
        if !decoded.is_empty() {
            info!("Using uploaded report: {} characters", decoded.len());
            return decoded;
        }
    }
    pasted.unwrap_or_default().to_string()
}

/// Read a report file from disk as raw upload bytes.
pub fn read_report_bytes(path: impl AsRef<Path>) -> Result<Vec<u8>, AppError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    info!("Read report file {:?} ({} bytes)", path, bytes.len());
    Ok(bytes)
}

/// Read a report file from disk and decode it like an upload.
pub fn read_report_file(path: impl AsRef<Path>) -> Result<String, AppError> {
    read_report_bytes(path).map(|bytes| decode_report_bytes(&bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        let content = "Impression: no acute findings. Café.".as_bytes();
        assert_eq!(decode_report_bytes(content), "Impression: no acute findings. Café.");
    }

    #[test]
    fn test_latin1_fallback() {
        // "Café" encoded as Latin-1 is not valid UTF-8
        let content = b"Caf\xe9 au lait";
        assert_eq!(decode_report_bytes(content), "Café au lait");
    }

    #[test]
    fn test_binary_is_empty() {
        assert_eq!(decode_report_bytes(b"PK\x03\x04\x00\x00\xff\xfe"), "");
    }

    #[test]
    fn test_utf8_with_nul_is_kept() {
        let content = "Impression: mass in left lobe.\0".as_bytes();
        assert_eq!(decode_report_bytes(content), "Impression: mass in left lobe.\0");
    }

    #[test]
    fn test_empty_file() {
        assert_eq!(decode_report_bytes(b""), "");
    }
}
