// Simple color struct with 8-bit channels and a fractional alpha, formatted
// as a CSS rgba() string for the 2d canvas and element styles

use serde::Deserialize;
use std::convert::TryFrom;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

// Config accepts either "#rrggbb" / "#rrggbbaa" or explicit channels
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Channels {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "Color::opaque")]
        a: f64,
    },
}

impl TryFrom<ColorRepr> for Color {
    type Error = String;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(hex) => Color::from_hex(&hex),
            ColorRepr::Channels { r, g, b, a } => Ok(Color { r, g, b, a }),
        }
    }
}

impl Color {
    pub const FIELD_BLUE: Color = Color::rgba(74, 144, 226, 0.4);
    pub const FIELD_PINK: Color = Color::rgba(255, 105, 180, 0.4);
    pub const LINK_BLUE: Color = Color::rgba(74, 144, 226, 1.0);
    pub const MUTED_GRAY: Color = Color::rgba(0x88, 0x88, 0x88, 1.0);
    pub const SOFT_WHITE: Color = Color::rgba(255, 255, 255, 0.9);

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Color {
        Color { r, g, b, a }
    }

    // Unsigned 32 representing RRGGBBAA
    pub fn from_u32(num: u32) -> Color {
        let r = (num >> 24) as u8;
        let g = (num >> 16) as u8;
        let b = (num >> 8) as u8;
        let a = (num & 0xff) as f64 / 255.0;

        Color { r, g, b, a }
    }

    // "#rrggbb" is taken as opaque
    pub fn from_hex(hex: &str) -> Result<Color, String> {
        let digits = hex.trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("bad hex color {:?}", hex));
        }
        let num = u32::from_str_radix(digits, 16).map_err(|_| format!("bad hex color {:?}", hex))?;
        match digits.len() {
            6 => Ok(Color::from_u32((num << 8) | 0xff)),
            8 => Ok(Color::from_u32(num)),
            _ => Err(format!("bad hex color {:?}", hex)),
        }
    }

    pub fn with_alpha(self, a: f64) -> Color {
        Color { a, ..self }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }

    fn opaque() -> f64 {
        1.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_u32_splits_channels() {
        let c = Color::from_u32(0x4a90e2ff);
        assert_eq!((c.r, c.g, c.b), (74, 144, 226));
        assert_eq!(c.a, 1.0);
        assert_eq!(Color::from_u32(0xffffff00).a, 0.0);
    }

    #[test]
    fn hex_strings_parse_through_from_u32() {
        assert_eq!(Color::from_hex("#888888").unwrap(), Color::MUTED_GRAY);
        assert_eq!(Color::from_hex("4a90e2ff").unwrap(), Color::LINK_BLUE);
        assert_eq!(Color::from_hex("#ff69b400").unwrap().a, 0.0);
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#gg0000").is_err());
    }

    #[test]
    fn hex_form_is_accepted_when_deserialized() {
        let c: Color = serde_json::from_str(r##""#4a90e2""##).unwrap();
        assert_eq!(c, Color::LINK_BLUE);
        assert!(serde_json::from_str::<Color>(r##""#4a90""##).is_err());
    }

    #[test]
    fn css_formatting() {
        assert_eq!(Color::FIELD_PINK.to_css(), "rgba(255, 105, 180, 0.4)");
        assert_eq!(
            Color::LINK_BLUE.with_alpha(0.075).to_css(),
            "rgba(74, 144, 226, 0.075)"
        );
    }

    #[test]
    fn alpha_defaults_to_opaque_when_deserialized() {
        let c: Color = serde_json::from_str(r#"{"r": 1, "g": 2, "b": 3}"#).unwrap();
        assert_eq!(c, Color::rgba(1, 2, 3, 1.0));
    }
}
