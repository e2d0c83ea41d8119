//! Small shared value types.

/// An 8-bit RGB color parsed from a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a `#rrggbb` hex string. Returns `None` on any malformed input.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        // Byte-offset slicing below requires ASCII; a multi-byte char in a
        // 6-byte string would land mid-character.
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Normalized channel values in 0.0..=1.0.
    pub fn to_f32(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_hex_parses_cyan() {
        let c = Color::from_hex("#00d4ff").unwrap();
        assert_eq!(c, Color { r: 0, g: 0xd4, b: 0xff });
    }

    #[test]
    fn from_hex_rejects_missing_hash() {
        assert!(Color::from_hex("00d4ff").is_none());
    }

    #[test]
    fn from_hex_rejects_short_and_long() {
        assert!(Color::from_hex("#fff").is_none());
        assert!(Color::from_hex("#00d4ff00").is_none());
    }

    #[test]
    fn from_hex_rejects_non_hex_digits() {
        assert!(Color::from_hex("#zzzzzz").is_none());
    }

    #[test]
    fn from_hex_rejects_multibyte_utf8_without_panicking() {
        // Both are 6 bytes after the '#', so they pass a byte-length check
        // but must not be sliced at byte offsets.
        assert!(Color::from_hex("#a\u{2665}xy").is_none());
        assert!(Color::from_hex("#ééé").is_none());
    }

    #[test]
    fn to_f32_normalizes() {
        let [r, g, b] = Color { r: 255, g: 0, b: 128 }.to_f32();
        assert!((r - 1.0).abs() < 1e-6);
        assert!((g - 0.0).abs() < 1e-6);
        assert!((b - 128.0 / 255.0).abs() < 1e-6);
    }
}
