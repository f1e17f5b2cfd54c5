//! RGB/HSL color values and the darken transform used for pressed states.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ContractsError;

/// 8-bit sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` or `#rgb` (case-insensitive, leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, ContractsError> {
        let invalid = || ContractsError::InvalidColor(s.to_string());
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |part: &str| u8::from_str_radix(part, 16).map_err(|_| invalid());
        match hex.len() {
            6 => Ok(Self::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                let short = |i: usize| channel(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(short(0)?, short(1)?, short(2)?))
            }
            _ => Err(invalid()),
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Hsl {
                hue: 0.0,
                saturation: 0.0,
                lightness,
            };
        }

        let delta = max - min;
        let saturation = if lightness > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };

        let hue = if max == r {
            (g - b) / delta + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        };

        Hsl {
            hue: hue * 60.0,
            saturation,
            lightness,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Rgb {
    type Error = ContractsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub fn to_rgb(&self) -> Rgb {
        if self.saturation == 0.0 {
            let v = to_channel(self.lightness);
            return Rgb::new(v, v, v);
        }

        let chroma = (1.0 - (2.0 * self.lightness - 1.0).abs()) * self.saturation;
        let sector = (self.hue.rem_euclid(360.0)) / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
        let m = self.lightness - chroma / 2.0;

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        Rgb::new(to_channel(r + m), to_channel(g + m), to_channel(b + m))
    }
}

fn to_channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Lower the HSL lightness of `color` by `amount` (0.1 is 10%), clamped at black.
pub fn darken(amount: f64, color: Rgb) -> Rgb {
    let mut hsl = color.to_hsl();
    hsl.lightness = (hsl.lightness - amount).clamp(0.0, 1.0);
    hsl.to_rgb()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgb::from_hex("#282a36").unwrap(), Rgb::new(0x28, 0x2a, 0x36));
        assert_eq!(Rgb::from_hex("F8F8F2").unwrap(), Rgb::new(0xf8, 0xf8, 0xf2));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(matches!(
            Rgb::from_hex("#12345"),
            Err(ContractsError::InvalidColor(_))
        ));
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("").is_err());
        assert!(Rgb::from_hex("#ффф").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
        assert!(Rgb::from_hex("#+a+b+c").is_err());
        assert!(Rgb::from_hex("##fff").is_err());
        assert!(Rgb::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(Rgb::new(0x44, 0x47, 0x5a).to_hex(), "#44475a");
        assert_eq!(Rgb::new(0, 0, 0).to_string(), "#000000");
    }

    #[test]
    fn test_hsl_primaries() {
        let red = Rgb::new(255, 0, 0).to_hsl();
        assert_eq!(red.hue, 0.0);
        assert_eq!(red.saturation, 1.0);
        assert_eq!(red.lightness, 0.5);

        let blue = Rgb::new(0, 0, 255).to_hsl();
        assert_eq!(blue.hue, 240.0);
        assert_eq!(blue.to_rgb(), Rgb::new(0, 0, 255));
    }

    #[test]
    fn test_hsl_keeps_palette_colors() {
        for hex in ["#282a36", "#44475a", "#6272a4", "#50fa7b", "#ff5555", "#bd93f9"] {
            let color = Rgb::from_hex(hex).unwrap();
            assert_eq!(color.to_hsl().to_rgb(), color, "{}", hex);
        }
    }

    #[test]
    fn test_darken() {
        assert_eq!(darken(0.1, Rgb::new(255, 0, 0)), Rgb::new(0xcc, 0, 0));
        assert_eq!(darken(0.1, Rgb::new(255, 255, 255)), Rgb::new(0xe6, 0xe6, 0xe6));
    }

    #[test]
    fn test_darken_dracula_comment() {
        let comment = Rgb::from_hex("#6272a4").unwrap();
        assert_eq!(darken(0.1, comment).to_hex(), "#4d5b86");
    }

    #[test]
    fn test_darken_clamps_at_black() {
        assert_eq!(darken(0.1, Rgb::new(0, 0, 0)), Rgb::new(0, 0, 0));
        assert_eq!(darken(0.1, Rgb::new(10, 10, 10)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn test_darken_lowers_lightness_by_step() {
        let comment = Rgb::from_hex("#6272a4").unwrap();
        let darker = darken(0.1, comment).to_hsl();
        let diff = comment.to_hsl().lightness - darker.lightness;
        assert!((diff - 0.1).abs() < 0.005, "diff = {}", diff);
    }

    #[test]
    fn test_serde_as_hex_string() {
        let json = serde_json::to_string(&Rgb::new(0x50, 0xfa, 0x7b)).unwrap();
        assert_eq!(json, "\"#50fa7b\"");
        let parsed: Rgb = serde_json::from_str("\"#ff5555\"").unwrap();
        assert_eq!(parsed, Rgb::new(0xff, 0x55, 0x55));
        assert!(serde_json::from_str::<Rgb>("\"red\"").is_err());
    }
}
