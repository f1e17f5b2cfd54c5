pub mod enums;
pub mod shared;

pub use enums::{get_button_size, ButtonSize, ButtonType, ButtonVariant};
pub use shared::color::{darken, Hsl, Rgb};
pub use shared::error::ContractsError;
pub use shared::palette::{ColorToken, Palette};
pub use shared::theme_shape::{ThemeShape, VariantTheme};
