use serde::{Deserialize, Serialize};

use crate::shared::palette::ColorToken::{self, *};
use crate::shared::theme_shape::{ThemeShape, VariantTheme};

/// Semantic role of a button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Success,
    Error,
}

const DISABLED: ThemeShape = ThemeShape::new(DraculaSelection, Gray1, Gray1);

impl ButtonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Success => "success",
            ButtonVariant::Error => "error",
        }
    }

    /// Fixed token triple for the variant.
    pub fn theme(&self) -> VariantTheme {
        match self {
            ButtonVariant::Primary => accent_on_selection(DraculaForeground),
            ButtonVariant::Secondary => VariantTheme {
                normal: ThemeShape::new(DraculaBackground, DraculaBackground, DraculaForeground),
                hover: ThemeShape::new(DraculaComment, DraculaComment, DraculaForeground),
                disabled: DISABLED,
            },
            ButtonVariant::Success => accent_on_selection(DraculaGreen),
            ButtonVariant::Error => accent_on_selection(DraculaRed),
        }
    }

    pub fn all() -> [ButtonVariant; 4] {
        [
            ButtonVariant::Primary,
            ButtonVariant::Secondary,
            ButtonVariant::Success,
            ButtonVariant::Error,
        ]
    }
}

/// Selection background with `text` as the foreground, comment background on hover.
fn accent_on_selection(text: ColorToken) -> VariantTheme {
    VariantTheme {
        normal: ThemeShape::new(DraculaSelection, DraculaSelection, text),
        hover: ThemeShape::new(DraculaComment, DraculaSelection, text),
        disabled: DISABLED,
    }
}
