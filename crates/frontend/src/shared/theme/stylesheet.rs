//! CSS generation for the button family.
//!
//! Every variant shares the base layout; each variant class then binds its
//! palette colors for the default, focus, hover, active and disabled states.

use contracts::{darken, ButtonSize, ButtonVariant, ColorToken, Palette, VariantTheme};

/// Class carried by every button.
pub const BASE_CLASS: &str = "bk-button";

/// Lightness step applied to the hover background for the pressed state.
pub const ACTIVE_DARKEN: f64 = 0.1;

pub fn size_class(size: ButtonSize) -> String {
    format!("{}--{}", BASE_CLASS, size.as_str())
}

pub fn variant_class(variant: ButtonVariant) -> String {
    format!("{}--{}", BASE_CLASS, variant.as_str())
}

/// Full class list for a button element.
pub fn button_class(variant: ButtonVariant, size: ButtonSize, extra: Option<&str>) -> String {
    let mut class = format!(
        "{} {} {}",
        BASE_CLASS,
        size_class(size),
        variant_class(variant)
    );
    if let Some(extra) = extra.map(str::trim).filter(|s| !s.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    class
}

/// Layout shared by all variants, plus one height rule per size.
pub fn base_css() -> String {
    let mut css = format!(
        ".{base} {{
  display: flex;
  padding: 0 1rem;
  align-items: center;
  background: transparent;
  border-radius: 0.25rem;
  border: 1px solid transparent;
  font-weight: 400;
  outline: 0;
  line-height: 1.15;
  transition: all 70ms cubic-bezier(0, 0, 0.38, 0.9);
}}
.{base} svg + span {{
  margin-left: 0.5rem;
}}
",
        base = BASE_CLASS
    );
    for size in ButtonSize::all() {
        css.push_str(&format!(
            ".{} {{\n  height: {};\n}}\n",
            size_class(size),
            size.height()
        ));
    }
    css
}

/// Hover background darkened by [`ACTIVE_DARKEN`].
pub fn active_background(theme: &VariantTheme, palette: &Palette) -> String {
    darken(ACTIVE_DARKEN, palette.color(theme.hover.background)).to_hex()
}

/// State rules for one variant, scoped to `selector`.
pub fn theme_css(selector: &str, theme: &VariantTheme, palette: &Palette) -> String {
    let VariantTheme {
        normal,
        hover,
        disabled,
    } = theme;

    format!(
        "{sel} {{
  background: {normal_bg};
  color: {normal_color};
  border-color: {normal_border};
}}
{sel}:focus {{
  box-shadow: inset 0 0 0 1px {focus};
}}
{sel}:hover:not([disabled]) {{
  background: {hover_bg};
  color: {hover_color};
  border-color: {hover_border};
}}
{sel}:active:not([disabled]) {{
  background: {active_bg};
}}
{sel}:disabled {{
  cursor: not-allowed;
  background: {disabled_bg};
  color: {disabled_color};
  border-color: {disabled_border};
}}
",
        sel = selector,
        normal_bg = palette.css(normal.background),
        normal_color = palette.css(normal.color),
        normal_border = palette.css(normal.border),
        focus = palette.css(ColorToken::DraculaForeground),
        hover_bg = palette.css(hover.background),
        hover_color = palette.css(hover.color),
        hover_border = palette.css(hover.border),
        active_bg = active_background(theme, palette),
        disabled_bg = palette.css(disabled.background),
        disabled_color = palette.css(disabled.color),
        disabled_border = palette.css(disabled.border),
    )
}

/// Complete stylesheet: base layout first so variant rules win on equal specificity.
pub fn render_stylesheet(palette: &Palette) -> String {
    let mut css = base_css();
    for variant in ButtonVariant::all() {
        let selector = format!(".{}", variant_class(variant));
        css.push_str(&theme_css(&selector, &variant.theme(), palette));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::Rgb;

    #[test]
    fn test_button_class() {
        assert_eq!(
            button_class(ButtonVariant::Primary, ButtonSize::default(), None),
            "bk-button bk-button--md bk-button--primary"
        );
        assert_eq!(
            button_class(ButtonVariant::Error, ButtonSize::Sm, Some("  wide ")),
            "bk-button bk-button--sm bk-button--error wide"
        );
        assert_eq!(
            button_class(ButtonVariant::Success, ButtonSize::Md, Some("")),
            "bk-button bk-button--md bk-button--success"
        );
    }

    #[test]
    fn test_base_css_heights() {
        let css = base_css();
        assert!(css.contains(".bk-button--sm {\n  height: 2rem;\n}"));
        assert!(css.contains(".bk-button--md {\n  height: 3rem;\n}"));
        assert!(css.contains("transition: all 70ms cubic-bezier(0, 0, 0.38, 0.9);"));
    }

    #[test]
    fn test_theme_css_primary() {
        let palette = Palette::dracula();
        let css = theme_css(".p", &ButtonVariant::Primary.theme(), &palette);

        assert!(css.contains(".p {\n  background: #44475a;\n  color: #f8f8f2;\n  border-color: #44475a;\n}"));
        assert!(css.contains(".p:focus {\n  box-shadow: inset 0 0 0 1px #f8f8f2;\n}"));
        assert!(css.contains(".p:hover:not([disabled]) {\n  background: #6272a4;"));
        assert!(css.contains(".p:disabled {\n  cursor: not-allowed;\n  background: #44475a;\n  color: #8e8e8e;\n  border-color: #8e8e8e;\n}"));
    }

    #[test]
    fn test_active_is_darkened_hover() {
        let palette = Palette::dracula();
        for variant in ButtonVariant::all() {
            let theme = variant.theme();
            assert_eq!(active_background(&theme, &palette), "#4d5b86", "{:?}", variant);

            let css = theme_css(".x", &theme, &palette);
            assert!(css.contains(".x:active:not([disabled]) {\n  background: #4d5b86;\n}"));
        }
    }

    #[test]
    fn test_active_follows_palette() {
        let palette = Palette {
            dracula_comment: Rgb::new(255, 0, 0),
            ..Palette::dracula()
        };
        let theme = ButtonVariant::Secondary.theme();
        assert_eq!(active_background(&theme, &palette), "#cc0000");
    }

    #[test]
    fn test_render_stylesheet_order() {
        let css = render_stylesheet(&Palette::default());
        let base = css.find(".bk-button {").unwrap();
        for variant in ButtonVariant::all() {
            let rule = format!(".{} {{", variant_class(variant));
            let pos = css.find(&rule).unwrap();
            assert!(pos > base, "{:?}", variant);
        }
        assert!(css.contains("color: #50fa7b;"));
        assert!(css.contains("color: #ff5555;"));
        assert!(css.contains("background: #282a36;"));
    }
}
