//! Showcase page: every variant in both sizes, with a palette toggle.

use contracts::{ButtonSize, ButtonType, Palette, Rgb};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::components::ui::{ErrorButton, PrimaryButton, SecondaryButton, SuccessButton};
use crate::shared::theme::{use_palette, PaletteProvider};

/// Palette overrides bundled with the demo.
const ALT_PALETTE_JSON: &str = r##"{
    "draculaBackground": "#1e1f29",
    "draculaCurrentLine": "#44475a",
    "draculaSelection": "#3a3c4e",
    "draculaForeground": "#f8f8f2",
    "draculaComment": "#7970a9",
    "draculaCyan": "#80ffea",
    "draculaGreen": "#8aff80",
    "draculaOrange": "#ffca80",
    "draculaPink": "#ff80bf",
    "draculaPurple": "#9580ff",
    "draculaRed": "#ff9580",
    "draculaYellow": "#ffff80",
    "gray1": "#8e8e8e"
}"##;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <PaletteProvider>
            <Showcase />
        </PaletteProvider>
    }
}

#[component]
fn Showcase() -> impl IntoView {
    let ctx = use_palette();
    let (clicks, set_clicks) = signal(0u32);
    let (locked, set_locked) = signal(false);

    let count = Callback::new(move |_: MouseEvent| {
        set_clicks.update(|n| *n += 1);
        log::info!("button clicked ({} total)", clicks.get_untracked());
    });

    let toggle_palette = Callback::new(move |_: MouseEvent| {
        let next = if ctx.get_palette() == Palette::dracula() {
            match Palette::from_json(ALT_PALETTE_JSON) {
                Ok(palette) => palette,
                Err(e) => {
                    log::warn!("demo palette rejected: {}", e);
                    return;
                }
            }
        } else {
            Palette::dracula()
        };
        ctx.set_palette(next);
    });

    let background = move || {
        let bg: Rgb = ctx.palette.get().dracula_background;
        format!("background: {}; padding: 2rem; min-height: 100vh;", bg)
    };

    view! {
        <div style=background>
            <div style="display: flex; gap: 0.5rem; margin-bottom: 1rem;">
                <SecondaryButton size=ButtonSize::Sm on_click=toggle_palette>
                    "Switch palette"
                </SecondaryButton>
                <SecondaryButton
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_: MouseEvent| set_locked.update(|l| *l = !*l))
                >
                    {move || if locked.get() { "Enable buttons" } else { "Disable buttons" }}
                </SecondaryButton>
            </div>

            {ButtonSize::all().into_iter().map(|size| view! {
                <div style="display: flex; gap: 0.5rem; margin-bottom: 0.5rem;">
                    <PrimaryButton size=size disabled=locked on_click=count>"Primary"</PrimaryButton>
                    <SecondaryButton size=size disabled=locked on_click=count>"Secondary"</SecondaryButton>
                    <SuccessButton size=size disabled=locked on_click=count button_type=ButtonType::Submit>
                        "Success"
                    </SuccessButton>
                    <ErrorButton size=size disabled=locked on_click=count title="Destructive">
                        "Error"
                    </ErrorButton>
                </div>
            }).collect_view()}

            <p style="color: #f8f8f2;">{move || format!("Clicks: {}", clicks.get())}</p>
        </div>
    }
}
