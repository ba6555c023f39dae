use fltk::enums::Color;
use fltk::prelude::*;

use crate::ui::main_window::Shell;

/// Colors for one theme. Pages read these at build time; chrome widgets
/// are restyled in place by [`apply_theme`].
pub struct Palette {
    pub window_bg: Color,
    pub surface: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub error: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window_bg: Color::from_rgb(18, 18, 22),
            surface: Color::from_rgb(28, 28, 34),
            text: Color::from_rgb(230, 230, 235),
            muted: Color::from_rgb(150, 150, 160),
            accent: Color::from_rgb(212, 175, 55),
            error: Color::from_rgb(235, 105, 105),
        }
    } else {
        Palette {
            window_bg: Color::from_rgb(248, 247, 244),
            surface: Color::from_rgb(255, 255, 255),
            text: Color::from_rgb(30, 30, 35),
            muted: Color::from_rgb(110, 110, 120),
            accent: Color::from_rgb(160, 120, 20),
            error: Color::from_rgb(190, 40, 40),
        }
    }
}

/// Hex form of a color, for the HTML wrapper around the legal pages.
pub fn hex(color: Color) -> String {
    let (r, g, b) = color.to_rgb();
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Restyle all persistent chrome for the given mode. Page bodies are
/// rebuilt with the fresh palette by the caller, so only the widgets
/// that survive a theme switch are touched here.
pub fn apply_theme(shell: &mut Shell, is_dark: bool) {
    let pal = palette(is_dark);

    shell.window.set_color(pal.window_bg);

    shell.header_bg.set_color(pal.surface);
    shell.brand_button.set_color(pal.surface);
    shell.brand_button.set_label_color(pal.accent);

    for button in [
        &mut shell.back_button,
        &mut shell.forward_button,
        &mut shell.drawer_toggle,
        &mut shell.theme_toggle,
    ] {
        button.set_color(pal.surface);
        button.set_label_color(pal.text);
    }
    shell
        .theme_toggle
        .set_label(if is_dark { "\u{2600}" } else { "\u{263d}" });

    for link in &mut shell.nav_links {
        link.button.set_color(pal.surface);
        link.button.set_label_color(pal.text);
    }

    shell.drawer.set_color(pal.surface);
    for link in &mut shell.drawer_links {
        link.button.set_color(pal.surface);
        link.button.set_label_color(pal.text);
    }

    shell.footer_bg.set_color(pal.surface);
    shell.copyright.set_label_color(pal.muted);
    for button in &mut shell.social_buttons {
        button.set_color(pal.surface);
        button.set_label_color(pal.accent);
    }
    for button in [
        &mut shell.privacy_button,
        &mut shell.terms_button,
        &mut shell.app_info_button,
    ] {
        button.set_color(pal.surface);
        button.set_label_color(pal.muted);
    }

    shell.overlay.set_color(pal.window_bg);
    shell.overlay.set_label_color(pal.accent);

    shell.window.redraw();
}
