//! Hex color strings as chosen in the toolbar.
//!
//! The simulation stores whatever string it is given. Parsing only happens
//! at draw time, and a string that does not parse simply paints nothing.

use macroquad::color::Color;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color {0:?} does not start with '#'")]
    MissingHash(String),
    #[error("color {0:?} must have 3 or 6 hex digits")]
    BadLength(String),
    #[error("color {0:?} contains a non-hex digit")]
    BadDigit(String),
}

/// 8-bit RGB triple parsed from `#rrggbb` or `#rgb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn parse(text: &str) -> Result<Self, ColorError> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| ColorError::MissingHash(text.to_owned()))?;

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::BadDigit(text.to_owned()));
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::BadDigit(text.to_owned()));

        match digits.len() {
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            // #rgb expands each digit: #0f8 == #00ff88
            3 => {
                let short = |i: usize| channel(&digits[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(ColorError::BadLength(text.to_owned())),
        }
    }

    /// Color with the given opacity, clamped to `0.0..=1.0`.
    pub fn with_alpha(self, alpha: f32) -> Color {
        let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Color::from_rgba(self.r, self.g, self.b, alpha)
    }

    pub fn opaque(self) -> Color {
        self.with_alpha(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_long_form() {
        assert_eq!(HexColor::parse("#00ff00"), Ok(HexColor::new(0, 255, 0)));
        assert_eq!(HexColor::parse("#1A2b3C"), Ok(HexColor::new(0x1a, 0x2b, 0x3c)));
    }

    #[test]
    fn test_parse_short_form() {
        assert_eq!(HexColor::parse("#0f8"), Ok(HexColor::new(0, 255, 0x88)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(HexColor::parse("00ff00"), Err(ColorError::MissingHash(_))));
        assert!(matches!(HexColor::parse("#00ff0"), Err(ColorError::BadLength(_))));
        assert!(matches!(HexColor::parse("#"), Err(ColorError::BadLength(_))));
        assert!(matches!(HexColor::parse("#gg0000"), Err(ColorError::BadDigit(_))));
        // multi-byte chars must not reach the slicing below
        assert!(matches!(HexColor::parse("#ä0000"), Err(ColorError::BadDigit(_))));
    }

    #[test]
    fn test_with_alpha_clamps() {
        let green = HexColor::new(0, 255, 0);
        assert_eq!(green.with_alpha(1.5), green.opaque());
        assert_eq!(green.with_alpha(-0.2), Color::from_rgba(0, 255, 0, 0));
        assert_eq!(green.with_alpha(0.5), Color::from_rgba(0, 255, 0, 128));
    }
}
