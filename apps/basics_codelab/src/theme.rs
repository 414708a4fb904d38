//! Light and dark color schemes.

use sprout_core::{Color, Theme, View, with_theme};

pub const PURPLE_80: Color = Color::from_argb(0xFFD0BCFF);
pub const PURPLE_GREY_80: Color = Color::from_argb(0xFFCCC2DC);
pub const PINK_80: Color = Color::from_argb(0xFFEFB8C8);

pub const PURPLE_40: Color = Color::from_argb(0xFF6650A4);
pub const PURPLE_GREY_40: Color = Color::from_argb(0xFF625B71);
pub const PINK_40: Color = Color::from_argb(0xFF7D5260);

pub fn codelab_theme(dark: bool) -> Theme {
    if dark {
        Theme {
            primary: PURPLE_80,
            on_primary: Color::from_argb(0xFF381E72),
            secondary: PURPLE_GREY_80,
            tertiary: PINK_80,
            background: Color::from_argb(0xFF1C1B1F),
            on_background: Color::from_argb(0xFFE6E1E5),
            surface: Color::from_argb(0xFF1C1B1F),
            on_surface: Color::from_argb(0xFFE6E1E5),
        }
    } else {
        Theme {
            primary: PURPLE_40,
            on_primary: Color::WHITE,
            secondary: PURPLE_GREY_40,
            tertiary: PINK_40,
            background: Color::from_argb(0xFFFFFBFE),
            on_background: Color::from_argb(0xFF1C1B1F),
            surface: Color::from_argb(0xFFFFFBFE),
            on_surface: Color::from_argb(0xFF1C1B1F),
        }
    }
}

pub fn CodelabTheme(dark: bool, content: impl FnOnce() -> View) -> View {
    with_theme(codelab_theme(dark), content)
}
