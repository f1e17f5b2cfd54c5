use serde::{Deserialize, Serialize};

/// Button height preset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
}

impl ButtonSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Sm => "sm",
            ButtonSize::Md => "md",
        }
    }

    /// CSS height of the button.
    pub fn height(&self) -> &'static str {
        get_button_size(*self)
    }

    /// Anything other than "sm" is treated as the medium size.
    pub fn parse_lossy(s: &str) -> Self {
        match s {
            "sm" => ButtonSize::Sm,
            _ => ButtonSize::Md,
        }
    }

    pub fn all() -> [ButtonSize; 2] {
        [ButtonSize::Sm, ButtonSize::Md]
    }
}

/// "2rem" for the small size, "3rem" otherwise.
pub fn get_button_size(size: ButtonSize) -> &'static str {
    if size == ButtonSize::Sm {
        "2rem"
    } else {
        "3rem"
    }
}
