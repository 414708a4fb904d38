#![allow(non_snake_case)]
//! Widgets and lists.
//!
//! Every widget is a plain function returning a `View`. Children are attached
//! with `ViewExt::child`, which accepts a single view, a `Vec`, an array or
//! a tuple of those.

pub mod icons;
pub mod lazy;

use std::rc::Rc;

use sprout_core::*;

pub use lazy::{LazyColumn, LazyColumnState, remember_lazy_column_state};

/// Color for text and icons placed on the current container. Cards and
/// buttons provide it for their content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentColor(pub Option<Color>);

pub fn content_color() -> Color {
    local::<ContentColor>().0.unwrap_or_else(|| theme().on_surface)
}

pub fn with_content_color<R>(c: Color, f: impl FnOnce() -> R) -> R {
    provide(ContentColor(Some(c)), f)
}

pub fn Surface(modifier: Modifier, child: View) -> View {
    let modifier = if modifier.background.is_none() {
        modifier.background(theme().surface)
    } else {
        modifier
    };
    View::new(0, ViewKind::Surface)
        .modifier(modifier)
        .with_children(vec![child])
}

pub fn Box(modifier: Modifier) -> View {
    View::new(0, ViewKind::Box).modifier(modifier)
}

pub fn Row(modifier: Modifier) -> View {
    View::new(0, ViewKind::Row).modifier(modifier)
}

pub fn Column(modifier: Modifier) -> View {
    View::new(0, ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    let style = typography().body_large;
    View::new(
        0,
        ViewKind::Text {
            text: text.into(),
            color: content_color(),
            font_size: style.font_size, // dp (converted to px by the platform)
            font_weight: style.font_weight,
        },
    )
}

/// Filled button. `content` is usually a `Text`.
pub fn Button(content: impl FnOnce() -> View, on_click: impl Fn() + 'static) -> View {
    let t = theme();
    let content = with_content_color(t.on_primary, content);
    View::new(
        0,
        ViewKind::Button {
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(Modifier::new().background(t.primary).clip_rounded(20.0))
    .semantics(Semantics::new(Role::Button))
    .with_children(vec![content])
}

pub fn Icon(image: ImageVector, content_description: Option<String>) -> View {
    let mut v = View::new(
        0,
        ViewKind::Icon {
            image,
            content_description: content_description.clone(),
            tint: content_color(),
        },
    );
    if let Some(label) = content_description {
        v = v.semantics(Semantics::new(Role::Image).label(label));
    }
    v
}

/// Borderless button around an icon. Its semantics label is the icon's
/// content description.
pub fn IconButton(on_click: impl Fn() + 'static, icon: View) -> View {
    let label = match &icon.kind {
        ViewKind::Icon {
            content_description,
            ..
        } => content_description.clone(),
        _ => None,
    };
    let mut sem = Semantics::new(Role::Button);
    sem.label = label;
    View::new(
        0,
        ViewKind::IconButton {
            on_click: Some(Rc::new(on_click)),
        },
    )
    .modifier(Modifier::new().size(48.0, 48.0))
    .semantics(sem)
    .with_children(vec![icon])
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardColors {
    pub container: Color,
    pub content: Color,
}

pub struct CardDefaults;

impl CardDefaults {
    /// Colors for a card filled with `container`; content color follows the
    /// matching "on" color of the theme.
    pub fn card_colors(container: Color) -> CardColors {
        let t = theme();
        let content = if container == t.primary {
            t.on_primary
        } else {
            t.on_surface
        };
        CardColors { container, content }
    }
}

impl Default for CardColors {
    fn default() -> Self {
        let t = theme();
        CardColors {
            container: t.surface,
            content: t.on_surface,
        }
    }
}

pub fn Card(modifier: Modifier, colors: CardColors, content: impl FnOnce() -> View) -> View {
    let content = with_content_color(colors.content, content);
    Surface(
        modifier.background(colors.container).clip_rounded(12.0),
        content,
    )
}

/// Method styling
pub trait TextStyle {
    fn color(self, c: Color) -> View;
    fn size(self, dp_font: f32) -> View;
    fn weight(self, w: FontWeight) -> View;
    fn style(self, s: TextStyleSpec) -> View;
}

impl TextStyle for View {
    fn color(mut self, c: Color) -> View {
        if let ViewKind::Text { color, .. } = &mut self.kind {
            *color = c;
        }
        self
    }
    fn size(mut self, dp_font: f32) -> View {
        if let ViewKind::Text { font_size, .. } = &mut self.kind {
            *font_size = dp_font;
        }
        self
    }
    fn weight(mut self, w: FontWeight) -> View {
        if let ViewKind::Text { font_weight, .. } = &mut self.kind {
            *font_weight = w;
        }
        self
    }
    fn style(self, s: TextStyleSpec) -> View {
        self.size(s.font_size).weight(s.font_weight)
    }
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for Option<View> {
    fn into_children(self) -> Vec<View> {
        self.into_iter().collect()
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
