use serde::{Deserialize, Serialize};

use super::palette::ColorToken;

/// Tokens for one visual state of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeShape {
    pub background: ColorToken,
    pub border: ColorToken,
    pub color: ColorToken,
}

impl ThemeShape {
    pub const fn new(background: ColorToken, border: ColorToken, color: ColorToken) -> Self {
        Self {
            background,
            border,
            color,
        }
    }
}

/// Normal, hover and disabled shapes of a variant. The active state is derived
/// from `hover.background`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantTheme {
    pub normal: ThemeShape,
    pub hover: ThemeShape,
    pub disabled: ThemeShape,
}
