//! ARGB color strings

use std::fmt;

/// A color parsed from a `#AARRGGBB` style string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgbColor {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ArgbColor {
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Parse `#AARRGGBB`, `#RRGGBB`, `#ARGB` or `#RGB`.
    ///
    /// Short forms double each nibble; forms without alpha are fully opaque.
    pub fn parse(value: &str) -> Option<Self> {
        let hex = value.trim().strip_prefix('#')?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |index: usize| {
            let digit = u8::from_str_radix(&hex[index..=index], 16).ok()?;
            Some(digit * 17)
        };
        let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

        match hex.len() {
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            6 => Some(Self::new(0xFF, byte(0)?, byte(2)?, byte(4)?)),
            4 => Some(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            3 => Some(Self::new(0xFF, nibble(0)?, nibble(1)?, nibble(2)?)),
            _ => None,
        }
    }

    /// CSS `rgba()` form with the alpha channel scaled to [0,1].
    pub fn to_css(self) -> String {
        let alpha = f64::from(self.a) / 255.0;
        format!("rgba({}, {}, {}, {alpha:.3})", self.r, self.g, self.b)
    }
}

impl fmt::Display for ArgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.a, self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_argb() {
        assert_eq!(
            ArgbColor::parse("#AA222222"),
            Some(ArgbColor::new(0xAA, 0x22, 0x22, 0x22))
        );
        assert_eq!(
            ArgbColor::parse(" #80ff0010 "),
            Some(ArgbColor::new(0x80, 0xFF, 0x00, 0x10))
        );
    }

    #[test]
    fn parses_short_and_opaque_forms() {
        assert_eq!(
            ArgbColor::parse("#336699"),
            Some(ArgbColor::new(0xFF, 0x33, 0x66, 0x99))
        );
        assert_eq!(
            ArgbColor::parse("#8F00"),
            Some(ArgbColor::new(0x88, 0xFF, 0x00, 0x00))
        );
        assert_eq!(
            ArgbColor::parse("#fff"),
            Some(ArgbColor::new(0xFF, 0xFF, 0xFF, 0xFF))
        );
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(ArgbColor::parse("AA222222"), None);
        assert_eq!(ArgbColor::parse("#GG222222"), None);
        assert_eq!(ArgbColor::parse("#12345"), None);
        assert_eq!(ArgbColor::parse("#"), None);
        assert_eq!(ArgbColor::parse("#ＡＡ22"), None);
    }

    #[test]
    fn display_and_css_forms() {
        let color = ArgbColor::new(0xAA, 0x22, 0x22, 0x22);
        assert_eq!(color.to_string(), "#AA222222");
        assert_eq!(color.to_css(), "rgba(34, 34, 34, 0.667)");
    }
}
