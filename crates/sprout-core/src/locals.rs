//! # Theming and locals
//!
//! Composition locals are values visible to everything composed inside a
//! `with_*` call, without threading them through every view function:
//!
//! - `Theme`: the color scheme widgets draw with.
//! - `Typography`: named text styles.
//! - `Density`: dp→px scale factor.
//!
//! ```rust
//! use sprout_core::*;
//!
//! let dark = Theme {
//!     primary: Color::from_hex("#D0BCFF"),
//!     ..Theme::default()
//! };
//!
//! with_theme(dark, || {
//!     assert_eq!(theme().primary, Color::from_hex("#D0BCFF"));
//! });
//! assert_eq!(theme().primary, Theme::default().primary);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;

use crate::{Color, FontWeight};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

/// density‑independent pixels (dp)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dp(pub f32);

impl Dp {
    /// Converts this dp value into physical pixels using the current Density.
    pub fn to_px(self) -> f32 {
        self.0 * density().scale
    }
}

pub fn dp_to_px(dp: f32) -> f32 {
    Dp(dp).to_px()
}

/// Runs `f` with `value` visible to `local::<T>()`, then pops it again.
pub fn provide<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    // pops on unwind too
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            LOCALS_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _guard = Guard;
    f()
}

/// Innermost provided `T`, or `T::default()`.
pub fn local<T: Clone + Default + 'static>() -> T {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>())?.downcast_ref::<T>().cloned())
            .unwrap_or_default()
    })
}

/// Material-style color scheme used by widgets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub primary: Color,
    pub on_primary: Color,
    pub secondary: Color,
    pub tertiary: Color,
    /// Window background / app root.
    pub background: Color,
    pub on_background: Color,
    /// Default container surface (cards, sheets, panels).
    pub surface: Color,
    pub on_surface: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: Color::from_hex("#6650A4"),
            on_primary: Color::WHITE,
            secondary: Color::from_hex("#625B71"),
            tertiary: Color::from_hex("#7D5260"),
            background: Color::from_hex("#FFFBFE"),
            on_background: Color::from_hex("#1C1B1F"),
            surface: Color::from_hex("#FFFBFE"),
            on_surface: Color::from_hex("#1C1B1F"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyleSpec {
    pub font_size: f32,
    pub font_weight: FontWeight,
}

impl TextStyleSpec {
    pub fn with_weight(self, font_weight: FontWeight) -> Self {
        Self {
            font_weight,
            ..self
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Typography {
    pub headline_medium: TextStyleSpec,
    pub body_large: TextStyleSpec,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            headline_medium: TextStyleSpec {
                font_size: 28.0,
                font_weight: FontWeight::Normal,
            },
            body_large: TextStyleSpec {
                font_size: 16.0,
                font_weight: FontWeight::Normal,
            },
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Density {
    pub scale: f32, // dp→px multiplier
}
impl Default for Density {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

pub fn with_theme<R>(theme: Theme, f: impl FnOnce() -> R) -> R {
    provide(theme, f)
}

pub fn with_typography<R>(typography: Typography, f: impl FnOnce() -> R) -> R {
    provide(typography, f)
}

pub fn with_density<R>(density: Density, f: impl FnOnce() -> R) -> R {
    provide(density, f)
}

pub fn theme() -> Theme {
    local::<Theme>()
}

pub fn typography() -> Typography {
    local::<Typography>()
}

pub fn density() -> Density {
    local::<Density>()
}
