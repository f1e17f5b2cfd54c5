#[cfg(feature = "demo")]
pub mod app;
pub mod shared;

pub use shared::components::ui::{
    ButtonProps, ErrorButton, PrimaryButton, SecondaryButton, SuccessButton,
};
pub use shared::theme::{use_palette, ButtonStyles, PaletteContext, PaletteProvider};

#[cfg(feature = "demo")]
use wasm_bindgen::prelude::wasm_bindgen;

#[cfg(feature = "demo")]
#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(app::App);
}
