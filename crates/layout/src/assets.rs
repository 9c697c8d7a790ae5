//! Decoding of inline logo and signature images.
//!
//! Decoding is a fallible step whose error is recoverable by design of the
//! document: sections match on the result and draw either the image or a
//! placeholder, recording an [`AssetWarning`] for the caller.

use base64::Engine;
use billforge_types::{ImageSource, Size};
use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssetError {
    #[error("image data is empty")]
    Empty,
    #[error("unsupported data URI: {0}")]
    DataUri(String),
    #[error("image data is not valid base64: {0}")]
    Base64(String),
    #[error("image could not be decoded: {0}")]
    Decode(String),
}

/// A decoded image as 8-bit RGB with an optional separate alpha channel.
#[derive(Clone, PartialEq, Eq)]
pub struct EmbeddedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    /// Present only when at least one pixel is not fully opaque.
    pub alpha: Option<Vec<u8>>,
}

impl fmt::Debug for EmbeddedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddedImage")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("has_alpha", &self.alpha.is_some())
            .finish()
    }
}

impl EmbeddedImage {
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Logo,
    Signature,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Logo => f.write_str("logo"),
            AssetKind::Signature => f.write_str("signature"),
        }
    }
}

/// A non-fatal asset failure, surfaced to the caller after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWarning {
    pub asset: AssetKind,
    pub error: AssetError,
}

impl fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} image skipped: {}", self.asset, self.error)
    }
}

pub fn decode_image(source: &ImageSource) -> Result<EmbeddedImage, AssetError> {
    let bytes = match source {
        ImageSource::DataUri(uri) => decode_data_uri(uri)?,
        ImageSource::Bytes(bytes) => bytes.clone(),
    };
    if bytes.is_empty() {
        return Err(AssetError::Empty);
    }

    let decoded = image::load_from_memory(&bytes).map_err(|e| AssetError::Decode(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(AssetError::Empty);
    }

    let pixel_count = (width * height) as usize;
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    let mut alpha = Vec::with_capacity(pixel_count);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }
    let alpha = alpha.iter().any(|&a| a != 255).then_some(alpha);

    Ok(EmbeddedImage {
        width,
        height,
        rgb,
        alpha,
    })
}

/// Accepts `data:<mime>;base64,<payload>` or a bare base64 string.
fn decode_data_uri(uri: &str) -> Result<Vec<u8>, AssetError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(AssetError::Empty);
    }
    let payload = match uri.strip_prefix("data:") {
        Some(rest) => {
            let (header, payload) = rest
                .split_once(',')
                .ok_or_else(|| AssetError::DataUri("missing ',' separator".to_string()))?;
            if !header.contains(";base64") {
                return Err(AssetError::DataUri(format!("'{}' is not base64-encoded", header)));
            }
            payload
        }
        None => uri,
    };
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    base64::engine::general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| AssetError::Base64(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(alpha: u8) -> Vec<u8> {
        let img = RgbaImage::from_pixel(3, 2, Rgba([10, 20, 30, alpha]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn decodes_raw_png_bytes() {
        let image = decode_image(&ImageSource::Bytes(png_bytes(255))).unwrap();
        assert_eq!((image.width, image.height), (3, 2));
        assert_eq!(image.rgb.len(), 18);
        assert_eq!(&image.rgb[..3], &[10, 20, 30]);
        assert!(image.alpha.is_none());
    }

    #[test]
    fn keeps_alpha_when_translucent() {
        let image = decode_image(&ImageSource::Bytes(png_bytes(128))).unwrap();
        assert_eq!(image.alpha.as_deref(), Some(&[128u8; 6][..]));
    }

    #[test]
    fn decodes_data_uris_and_bare_base64() {
        let encoded = base64::engine::general_purpose::STANDARD.encode(png_bytes(255));
        let uri = format!("data:image/png;base64,{}", encoded);
        assert!(decode_image(&ImageSource::DataUri(uri)).is_ok());
        assert!(decode_image(&ImageSource::DataUri(encoded)).is_ok());
    }

    #[test]
    fn corrupt_inputs_are_errors_not_panics() {
        assert_eq!(decode_image(&ImageSource::Bytes(Vec::new())), Err(AssetError::Empty));
        assert!(matches!(
            decode_image(&ImageSource::Bytes(b"not an image".to_vec())),
            Err(AssetError::Decode(_))
        ));
        assert!(matches!(
            decode_image(&ImageSource::DataUri("data:image/png;base64,@@@@".into())),
            Err(AssetError::Base64(_))
        ));
        assert!(matches!(
            decode_image(&ImageSource::DataUri("data:image/svg+xml,<svg/>".into())),
            Err(AssetError::DataUri(_))
        ));
        let truncated = png_bytes(255)[..20].to_vec();
        assert!(matches!(
            decode_image(&ImageSource::Bytes(truncated)),
            Err(AssetError::Decode(_))
        ));
    }
}
