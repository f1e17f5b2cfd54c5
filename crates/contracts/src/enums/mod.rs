pub mod button_size;
pub mod button_type;
pub mod button_variant;

pub use button_size::{get_button_size, ButtonSize};
pub use button_type::ButtonType;
pub use button_variant::ButtonVariant;
