//! Semantic color tokens and the palette that resolves them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::color::Rgb;
use super::error::ContractsError;

/// Named palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColorToken {
    DraculaBackground,
    DraculaCurrentLine,
    DraculaSelection,
    DraculaForeground,
    DraculaComment,
    DraculaCyan,
    DraculaGreen,
    DraculaOrange,
    DraculaPink,
    DraculaPurple,
    DraculaRed,
    DraculaYellow,
    Gray1,
}

impl ColorToken {
    /// Token name as used in palette JSON and CSS custom properties.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorToken::DraculaBackground => "draculaBackground",
            ColorToken::DraculaCurrentLine => "draculaCurrentLine",
            ColorToken::DraculaSelection => "draculaSelection",
            ColorToken::DraculaForeground => "draculaForeground",
            ColorToken::DraculaComment => "draculaComment",
            ColorToken::DraculaCyan => "draculaCyan",
            ColorToken::DraculaGreen => "draculaGreen",
            ColorToken::DraculaOrange => "draculaOrange",
            ColorToken::DraculaPink => "draculaPink",
            ColorToken::DraculaPurple => "draculaPurple",
            ColorToken::DraculaRed => "draculaRed",
            ColorToken::DraculaYellow => "draculaYellow",
            ColorToken::Gray1 => "gray1",
        }
    }

    pub fn all() -> [ColorToken; 13] {
        [
            ColorToken::DraculaBackground,
            ColorToken::DraculaCurrentLine,
            ColorToken::DraculaSelection,
            ColorToken::DraculaForeground,
            ColorToken::DraculaComment,
            ColorToken::DraculaCyan,
            ColorToken::DraculaGreen,
            ColorToken::DraculaOrange,
            ColorToken::DraculaPink,
            ColorToken::DraculaPurple,
            ColorToken::DraculaRed,
            ColorToken::DraculaYellow,
            ColorToken::Gray1,
        ]
    }
}

impl FromStr for ColorToken {
    type Err = ContractsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorToken::all()
            .into_iter()
            .find(|token| token.as_str() == s)
            .ok_or_else(|| ContractsError::UnknownToken(s.to_string()))
    }
}

/// Complete token table. Every token has a value, so lookups never fall back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Palette {
    pub dracula_background: Rgb,
    pub dracula_current_line: Rgb,
    pub dracula_selection: Rgb,
    pub dracula_foreground: Rgb,
    pub dracula_comment: Rgb,
    pub dracula_cyan: Rgb,
    pub dracula_green: Rgb,
    pub dracula_orange: Rgb,
    pub dracula_pink: Rgb,
    pub dracula_purple: Rgb,
    pub dracula_red: Rgb,
    pub dracula_yellow: Rgb,
    pub gray1: Rgb,
}

impl Palette {
    /// The stock Dracula palette.
    pub const fn dracula() -> Self {
        Self {
            dracula_background: Rgb::new(0x28, 0x2a, 0x36),
            dracula_current_line: Rgb::new(0x44, 0x47, 0x5a),
            dracula_selection: Rgb::new(0x44, 0x47, 0x5a),
            dracula_foreground: Rgb::new(0xf8, 0xf8, 0xf2),
            dracula_comment: Rgb::new(0x62, 0x72, 0xa4),
            dracula_cyan: Rgb::new(0x8b, 0xe9, 0xfd),
            dracula_green: Rgb::new(0x50, 0xfa, 0x7b),
            dracula_orange: Rgb::new(0xff, 0xb8, 0x6c),
            dracula_pink: Rgb::new(0xff, 0x79, 0xc6),
            dracula_purple: Rgb::new(0xbd, 0x93, 0xf9),
            dracula_red: Rgb::new(0xff, 0x55, 0x55),
            dracula_yellow: Rgb::new(0xf1, 0xfa, 0x8c),
            gray1: Rgb::new(0x8e, 0x8e, 0x8e),
        }
    }

    /// Load a palette from JSON keyed by token name. All tokens are required.
    pub fn from_json(json: &str) -> Result<Self, ContractsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn color(&self, token: ColorToken) -> Rgb {
        match token {
            ColorToken::DraculaBackground => self.dracula_background,
            ColorToken::DraculaCurrentLine => self.dracula_current_line,
            ColorToken::DraculaSelection => self.dracula_selection,
            ColorToken::DraculaForeground => self.dracula_foreground,
            ColorToken::DraculaComment => self.dracula_comment,
            ColorToken::DraculaCyan => self.dracula_cyan,
            ColorToken::DraculaGreen => self.dracula_green,
            ColorToken::DraculaOrange => self.dracula_orange,
            ColorToken::DraculaPink => self.dracula_pink,
            ColorToken::DraculaPurple => self.dracula_purple,
            ColorToken::DraculaRed => self.dracula_red,
            ColorToken::DraculaYellow => self.dracula_yellow,
            ColorToken::Gray1 => self.gray1,
        }
    }

    /// Resolve a token to its CSS hex value.
    pub fn css(&self, token: ColorToken) -> String {
        self.color(token).to_hex()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::dracula()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_names_round_trip() {
        for token in ColorToken::all() {
            assert_eq!(token.as_str().parse::<ColorToken>().unwrap(), token);
            let json = serde_json::to_string(&token).unwrap();
            assert_eq!(json, format!("\"{}\"", token.as_str()));
        }
    }

    #[test]
    fn test_unknown_token() {
        let err = "draculaBlurple".parse::<ColorToken>().unwrap_err();
        assert!(matches!(err, ContractsError::UnknownToken(ref name) if name == "draculaBlurple"));
    }

    #[test]
    fn test_dracula_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.css(ColorToken::DraculaSelection), "#44475a");
        assert_eq!(palette.css(ColorToken::DraculaForeground), "#f8f8f2");
        assert_eq!(palette.css(ColorToken::DraculaRed), "#ff5555");
    }

    #[test]
    fn test_from_json() {
        let mut value = serde_json::to_value(Palette::dracula()).unwrap();
        value["draculaRed"] = serde_json::json!("#e00");
        let palette = Palette::from_json(&value.to_string()).unwrap();
        assert_eq!(palette.color(ColorToken::DraculaRed), Rgb::new(0xee, 0, 0));
        assert_eq!(palette.color(ColorToken::Gray1), Palette::dracula().gray1);
    }

    #[test]
    fn test_from_json_requires_every_token() {
        let err = Palette::from_json(r##"{"draculaRed": "#ff5555"}"##).unwrap_err();
        assert!(matches!(err, ContractsError::InvalidPalette(_)));
    }

    #[test]
    fn test_from_json_rejects_bad_color() {
        let mut value = serde_json::to_value(Palette::dracula()).unwrap();
        value["gray1"] = serde_json::json!("grey");
        assert!(Palette::from_json(&value.to_string()).is_err());
    }
}
