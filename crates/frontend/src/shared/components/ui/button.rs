use contracts::{ButtonSize, ButtonType, ButtonVariant};
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::theme::{button_class, use_button_styles};

/// Props shared by every button variant.
pub struct ButtonProps {
    pub children: Children,
    pub disabled: MaybeProp<bool>,
    pub on_click: Option<Callback<MouseEvent>>,
    pub size: MaybeProp<ButtonSize>,
    pub button_type: MaybeProp<ButtonType>,
    pub class: MaybeProp<String>,
    pub title: MaybeProp<String>,
}

/// Runs `handler` unless the button is disabled. Returns whether it ran.
pub(crate) fn forward_click<E>(disabled: bool, ev: E, handler: impl FnOnce(E)) -> bool {
    if disabled {
        return false;
    }
    handler(ev);
    true
}

/// One native `<button>` styled for `variant`.
fn themed_button(variant: ButtonVariant, props: ButtonProps) -> impl IntoView {
    let ButtonProps {
        children,
        disabled,
        on_click,
        size,
        button_type,
        class,
        title,
    } = props;

    use_button_styles();

    let is_disabled = move || disabled.get().unwrap_or(false);
    let btn_type = move || button_type.get().unwrap_or_default().as_str();
    let btn_class = move || {
        button_class(
            variant,
            size.get().unwrap_or_default(),
            class.get().as_deref(),
        )
    };

    view! {
        <button
            type=btn_type
            class=btn_class
            title=move || title.get()
            disabled=is_disabled
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    forward_click(is_disabled(), ev, |ev| handler.run(ev));
                }
            }
        >
            {children()}
        </button>
    }
}

/// Main call to action: foreground text on the selection color.
#[component]
pub fn PrimaryButton(
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Click event handler, not called while disabled
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Button size, `Md` when omitted
    #[prop(optional, into)]
    size: MaybeProp<ButtonSize>,
    /// Button type attribute, `Button` when omitted
    #[prop(optional, into)]
    button_type: MaybeProp<ButtonType>,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Tooltip
    #[prop(optional, into)]
    title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    themed_button(
        ButtonVariant::Primary,
        ButtonProps {
            children,
            disabled,
            on_click,
            size,
            button_type,
            class,
            title,
        },
    )
}

/// Low-emphasis button on the page background.
#[component]
pub fn SecondaryButton(
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] size: MaybeProp<ButtonSize>,
    #[prop(optional, into)] button_type: MaybeProp<ButtonType>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    themed_button(
        ButtonVariant::Secondary,
        ButtonProps {
            children,
            disabled,
            on_click,
            size,
            button_type,
            class,
            title,
        },
    )
}

/// Green text, for confirming actions.
#[component]
pub fn SuccessButton(
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] size: MaybeProp<ButtonSize>,
    #[prop(optional, into)] button_type: MaybeProp<ButtonType>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    themed_button(
        ButtonVariant::Success,
        ButtonProps {
            children,
            disabled,
            on_click,
            size,
            button_type,
            class,
            title,
        },
    )
}

/// Red text, for destructive actions.
#[component]
pub fn ErrorButton(
    #[prop(optional, into)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] size: MaybeProp<ButtonSize>,
    #[prop(optional, into)] button_type: MaybeProp<ButtonType>,
    #[prop(optional, into)] class: MaybeProp<String>,
    #[prop(optional, into)] title: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    themed_button(
        ButtonVariant::Error,
        ButtonProps {
            children,
            disabled,
            on_click,
            size,
            button_type,
            class,
            title,
        },
    )
}
