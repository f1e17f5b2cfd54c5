//! Palette context and stylesheet injection for the button family.
//!
//! The active palette lives in a context signal. Whenever it changes the
//! generated stylesheet is written into a single `<style>` element in `<head>`.

pub mod stylesheet;

use contracts::Palette;
use leptos::prelude::*;
use web_sys::window;

pub use stylesheet::{button_class, render_stylesheet};

const STYLESHEET_ID: &str = "button-kit-styles";

/// Replace (or create) the button stylesheet element.
fn inject_stylesheet(css: &str) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    if let Ok(Some(existing)) = document.query_selector(&format!("#{}", STYLESHEET_ID)) {
        existing.remove();
    }

    match document.create_element("style") {
        Ok(style) => {
            let _ = style.set_attribute("id", STYLESHEET_ID);
            style.set_text_content(Some(css));
            if head.append_child(&style).is_err() {
                log::warn!("failed to attach button stylesheet");
            } else {
                log::debug!("button stylesheet injected ({} bytes)", css.len());
            }
        }
        Err(_) => log::warn!("failed to create button stylesheet element"),
    }
}

fn stylesheet_present() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(STYLESHEET_ID))
        .is_some()
}

/// Inject the stylesheet only when no provider has done so yet.
fn ensure_stylesheet(palette: &Palette) {
    if !stylesheet_present() {
        inject_stylesheet(&render_stylesheet(palette));
    }
}

/// Palette context type.
#[derive(Clone, Copy)]
pub struct PaletteContext {
    /// Current palette signal.
    pub palette: RwSignal<Palette>,
}

impl PaletteContext {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette: RwSignal::new(palette),
        }
    }

    /// Swap the palette; the stylesheet is regenerated by the provider.
    pub fn set_palette(&self, palette: Palette) {
        self.palette.set(palette);
    }

    pub fn get_palette(&self) -> Palette {
        self.palette.get()
    }
}

/// Provides the palette to every button below it.
#[component]
pub fn PaletteProvider(
    /// Palette to start with, Dracula when omitted
    #[prop(optional)]
    palette: Option<Palette>,
    children: Children,
) -> impl IntoView {
    let context = PaletteContext::new(palette.unwrap_or_default());
    provide_context(context);

    Effect::new(move |_| {
        let css = render_stylesheet(&context.palette.get());
        inject_stylesheet(&css);
    });

    children()
}

/// Palette from the nearest provider, or a detached Dracula palette.
pub fn use_palette() -> PaletteContext {
    use_context::<PaletteContext>().unwrap_or_else(|| PaletteContext::new(Palette::default()))
}

/// Makes sure the button stylesheet exists for the palette in scope.
pub fn use_button_styles() {
    let ctx = use_palette();
    Effect::new(move |_| ensure_stylesheet(&ctx.palette.get()));
}

/// Renders nothing; injects the stylesheet for apps that don't use [`PaletteProvider`].
#[component]
pub fn ButtonStyles() -> impl IntoView {
    use_button_styles();
}
