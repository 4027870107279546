//! Transport Encoder
//!
//! Renders an alias into a scannable QR image of its canonical URI,
//! `anonconnect://<alias>`, returned as a PNG data URI. Pure function:
//! deterministic for a given payload, no state.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use image::Luma;
use qrcode::QrCode;
use std::io::Cursor;

use crate::shared::error::{PlatformError, Result};

/// URI scheme for shared aliases.
pub const ALIAS_URI_SCHEME: &str = "anonconnect";

/// Build the canonical URI for an alias.
pub fn alias_uri(alias: &str) -> String {
    format!("{}://{}", ALIAS_URI_SCHEME, alias)
}

/// Encode an alias as a QR PNG data URI.
///
/// Fails with `InvalidPayload` on an empty alias; QR and PNG encoder errors
/// propagate as internal errors.
pub fn encode(alias: &str) -> Result<String> {
    if alias.is_empty() {
        return Err(PlatformError::InvalidPayload {
            message: "Alias payload must not be empty".to_string(),
        });
    }

    let uri = alias_uri(alias);
    let code = QrCode::new(uri.as_bytes()).map_err(|e| PlatformError::Internal {
        message: format!("QR encoding failed: {}", e),
    })?;

    let img = code.render::<Luma<u8>>().build();
    let mut png = Vec::new();
    image::DynamicImage::ImageLuma8(img)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| PlatformError::Internal {
            message: format!("PNG encoding failed: {}", e),
        })?;

    Ok(format!("data:image/png;base64,{}", BASE64.encode(&png)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_produces_png_data_uri() {
        let image = encode("abc123").unwrap();
        assert!(image.starts_with("data:image/png;base64,"));
        assert!(image.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn test_encode_is_deterministic() {
        let a = encode("same-alias").unwrap();
        let b = encode("same-alias").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_payload_rejected() {
        let err = encode("").unwrap_err();
        assert!(matches!(err, PlatformError::InvalidPayload { .. }));
    }

    #[test]
    fn test_alias_uri_format() {
        assert_eq!(alias_uri("deadbeef"), "anonconnect://deadbeef");
    }
}
