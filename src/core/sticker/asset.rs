//! `.tgs` asset decoding
//!
//! A Telegram sticker (`.tgs`) is a gzip-compressed Lottie JSON document.
//! Decoding happens in two stages that fail with distinct errors:
//! - gzip decompression (bounded, see [`MAX_DECOMPRESSED_BYTES`])
//! - JSON parsing into [`AnimationData`]

use std::io::Read;

use flate2::read::GzDecoder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::StickerError;

/// The two magic bytes every gzip member starts with.
pub const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// Upper bound for the inflated document. Real stickers are well under 1 MiB.
pub const MAX_DECOMPRESSED_BYTES: u64 = 8 * 1024 * 1024;

/// A parsed Lottie animation document.
///
/// Only the header fields needed to reason about playback are typed; the
/// shape/keyframe tree and any other keys are kept verbatim so that the
/// whole document can be handed to the renderer unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    /// Bodymovin version that exported the file
    #[serde(rename = "v", default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "nm", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Frames per second
    #[serde(rename = "fr")]
    pub frame_rate: f64,
    /// First frame
    #[serde(rename = "ip")]
    pub in_point: f64,
    /// Frame after the last one
    #[serde(rename = "op")]
    pub out_point: f64,
    #[serde(rename = "w")]
    pub width: f64,
    #[serde(rename = "h")]
    pub height: f64,
    /// Set to `1` by Telegram's sticker exporter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tgs: Option<u8>,
    #[serde(default)]
    pub layers: Vec<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assets: Vec<Value>,
    /// Everything else in the document (markers, fonts, chars, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl AnimationData {
    /// Number of frames between the in and out points.
    pub fn frame_count(&self) -> f64 {
        (self.out_point - self.in_point).max(0.0)
    }

    /// Playback length of one loop in seconds.
    pub fn duration_secs(&self) -> f64 {
        if self.frame_rate <= 0.0 {
            return 0.0;
        }
        self.frame_count() / self.frame_rate
    }

    pub fn is_telegram_sticker(&self) -> bool {
        self.tgs == Some(1)
    }
}

/// Inflate a gzip payload, refusing anything that is not gzip or that
/// inflates past [`MAX_DECOMPRESSED_BYTES`].
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, StickerError> {
    if bytes.is_empty() {
        return Err(StickerError::Decompression("empty payload".to_string()));
    }
    if !bytes.starts_with(&GZIP_MAGIC) {
        return Err(StickerError::Decompression(
            "missing gzip header".to_string(),
        ));
    }

    let mut inflated = Vec::new();
    GzDecoder::new(bytes)
        .take(MAX_DECOMPRESSED_BYTES + 1)
        .read_to_end(&mut inflated)
        .map_err(|e| StickerError::Decompression(format!("corrupt gzip stream: {}", e)))?;

    if inflated.len() as u64 > MAX_DECOMPRESSED_BYTES {
        return Err(StickerError::Decompression(format!(
            "payload inflates past {} bytes",
            MAX_DECOMPRESSED_BYTES
        )));
    }

    Ok(inflated)
}

/// Parse an inflated document. Invalid UTF-8 and invalid JSON are both parse errors.
pub fn parse_animation(json: &[u8]) -> Result<AnimationData, StickerError> {
    serde_json::from_slice(json).map_err(|e| StickerError::Parse(e.to_string()))
}

/// Decode raw `.tgs` bytes into an animation document.
pub fn decode_sticker(bytes: &[u8]) -> Result<AnimationData, StickerError> {
    let json = decompress(bytes)?;
    parse_animation(&json)
}


#[cfg(test)]
mod tests {
    use super::fixtures::{STICKER_JSON, gzip, sticker_bytes};
    use super::*;

    #[test]
    fn test_decode_valid_sticker() {
        let animation = decode_sticker(&sticker_bytes()).unwrap();

        assert_eq!(animation.version.as_deref(), Some("5.5.2"));
        assert_eq!(animation.name.as_deref(), Some("wave"));
        assert_eq!(animation.frame_rate, 60.0);
        assert_eq!(animation.width, 512.0);
        assert_eq!(animation.height, 512.0);
        assert_eq!(animation.layers.len(), 1);
        assert!(animation.is_telegram_sticker());
    }

    #[test]
    fn test_decode_keeps_unknown_keys() {
        let animation = decode_sticker(&sticker_bytes()).unwrap();

        assert_eq!(animation.extra.get("ddd"), Some(&Value::from(0)));
        assert!(animation.extra.contains_key("markers"));

        let reencoded = serde_json::to_value(&animation).unwrap();
        let original: Value = serde_json::from_str(STICKER_JSON).unwrap();
        assert_eq!(reencoded["layers"], original["layers"]);
        assert_eq!(reencoded["markers"], original["markers"]);
        assert_eq!(reencoded["fr"], 60.0);
    }

    #[test]
    fn test_duration() {
        let animation = decode_sticker(&sticker_bytes()).unwrap();
        assert_eq!(animation.frame_count(), 180.0);
        assert_eq!(animation.duration_secs(), 3.0);
    }

    #[test]
    fn test_duration_with_zero_frame_rate() {
        let mut animation = decode_sticker(&sticker_bytes()).unwrap();
        animation.frame_rate = 0.0;
        assert_eq!(animation.duration_secs(), 0.0);
    }

    #[test]
    fn test_empty_buffer_is_decompression_error() {
        let result = decode_sticker(&[]);
        assert!(matches!(result, Err(StickerError::Decompression(_))));
    }

    #[test]
    fn test_plain_json_is_decompression_error() {
        let result = decode_sticker(STICKER_JSON.as_bytes());
        assert_eq!(
            result,
            Err(StickerError::Decompression("missing gzip header".to_string()))
        );
    }

    #[test]
    fn test_truncated_gzip_is_decompression_error() {
        let bytes = sticker_bytes();
        let truncated = &bytes[..bytes.len() / 2];

        let result = decode_sticker(truncated);
        assert!(matches!(result, Err(StickerError::Decompression(_))));
    }

    #[test]
    fn test_header_only_is_decompression_error() {
        let bytes = sticker_bytes();
        let result = decode_sticker(&bytes[..4]);
        assert!(matches!(result, Err(StickerError::Decompression(_))));
    }

    #[test]
    fn test_non_json_payload_is_parse_error() {
        let result = decode_sticker(&gzip(b"definitely not json"));
        assert!(matches!(result, Err(StickerError::Parse(_))));
    }

    #[test]
    fn test_json_without_animation_header_is_parse_error() {
        let result = decode_sticker(&gzip(br#"{"hello": "world"}"#));
        assert!(matches!(result, Err(StickerError::Parse(_))));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let result = decode_sticker(&gzip(&[0x7b, 0x22, 0xff, 0xfe, 0x22, 0x7d]));
        assert!(matches!(result, Err(StickerError::Parse(_))));
    }

    #[test]
    fn test_oversized_payload_is_rejected() {
        let huge = vec![b' '; (MAX_DECOMPRESSED_BYTES + 16) as usize];
        let result = decompress(&gzip(&huge));
        assert!(matches!(result, Err(StickerError::Decompression(_))));
    }

    #[test]
    fn test_plain_lottie_is_not_telegram_sticker() {
        let json = r#"{"fr": 30, "ip": 0, "op": 60, "w": 100, "h": 100, "layers": []}"#;
        let animation = decode_sticker(&gzip(json.as_bytes())).unwrap();
        assert!(!animation.is_telegram_sticker());
        assert!(animation.version.is_none());
    }
}
