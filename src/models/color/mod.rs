use serde::{Deserialize, Serialize};

/// Caller-supplied color carried on decoration elements.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct RgbaColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl RgbaColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex_str(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 && hex.len() != 8 {
            return None;
        }

        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        let a = if hex.len() == 8 {
            u8::from_str_radix(hex.get(6..8)?, 16).ok()?
        } else {
            255
        };

        Some(RgbaColor::new(r, g, b, a))
    }

    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Default for RgbaColor {
    fn default() -> Self {
        RgbaColor::new(0, 0, 0, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_without_alpha() {
        assert_eq!(
            RgbaColor::from_hex_str("#FF6A6A"),
            Some(RgbaColor::new(255, 106, 106, 255))
        );
    }

    #[test]
    fn test_from_hex_with_alpha() {
        assert_eq!(
            RgbaColor::from_hex_str("c8c8c84d"),
            Some(RgbaColor::new(200, 200, 200, 77))
        );
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(RgbaColor::from_hex_str("#12345"), None);
        assert_eq!(RgbaColor::from_hex_str("#GGGGGG"), None);
        assert_eq!(RgbaColor::from_hex_str("#ééé"), None);
    }

    #[test]
    fn test_to_hex_round_trips() {
        let color = RgbaColor::new(253, 254, 200, 255);
        assert_eq!(color.to_hex(), "#FDFEC8");
        assert_eq!(RgbaColor::from_hex_str(&color.to_hex()), Some(color));
    }
}
