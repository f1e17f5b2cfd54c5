pub mod button;

pub use button::{ButtonProps, ErrorButton, PrimaryButton, SecondaryButton, SuccessButton};
