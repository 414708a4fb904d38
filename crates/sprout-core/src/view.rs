use crate::{Color, Modifier};
use std::rc::Rc;

pub type ViewId = u64;

pub type Callback = Rc<dyn Fn()>;
pub type ScrollCallback = Rc<dyn Fn(f32) -> f32>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
    ExtraBold,
}

impl FontWeight {
    pub fn value(self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Medium => 500,
            FontWeight::Bold => 700,
            FontWeight::ExtraBold => 800,
        }
    }
}

/// Named vector icon. The platform owns the actual path data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageVector {
    pub name: &'static str,
}

#[derive(Clone)]
pub enum ViewKind {
    Surface,
    Box,
    Row,
    Column,
    ScrollV {
        on_scroll: Option<ScrollCallback>,
        set_viewport_height: Option<Rc<dyn Fn(f32)>>,
        get_scroll_offset: Option<Rc<dyn Fn() -> f32>>,
    },
    Text {
        text: String,
        color: Color,
        font_size: f32,
        font_weight: FontWeight,
    },
    Button {
        on_click: Option<Callback>,
    },
    IconButton {
        on_click: Option<Callback>,
    },
    Icon {
        image: ImageVector,
        content_description: Option<String>,
        tint: Color,
    },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Surface => write!(f, "Surface"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Column => write!(f, "Column"),
            ViewKind::ScrollV {
                get_scroll_offset, ..
            } => f
                .debug_struct("ScrollV")
                .field("offset", &get_scroll_offset.as_ref().map(|g| g()))
                .finish(),
            ViewKind::Text {
                text,
                color,
                font_size,
                font_weight,
            } => f
                .debug_struct("Text")
                .field("text", text)
                .field("color", color)
                .field("font_size", font_size)
                .field("font_weight", font_weight)
                .finish(),
            ViewKind::Button { .. } => f
                .debug_struct("Button")
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::IconButton { .. } => f
                .debug_struct("IconButton")
                .field("on_click", &"<callback>")
                .finish(),
            ViewKind::Icon {
                image,
                content_description,
                tint,
            } => f
                .debug_struct("Icon")
                .field("image", &image.name)
                .field("content_description", content_description)
                .field("tint", tint)
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
    pub semantics: Option<crate::semantics::Semantics>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            modifier: Modifier::default(),
            children: vec![],
            semantics: None,
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn map_modifier(mut self, f: impl FnOnce(Modifier) -> Modifier) -> Self {
        self.modifier = f(std::mem::take(&mut self.modifier));
        self
    }
    /// Tags this node for hosts and tests without replacing its modifier.
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.modifier.test_tag = Some(tag.into());
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: crate::semantics::Semantics) -> Self {
        self.semantics = Some(s);
        self
    }

    /// Depth-first search by test tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        if self.modifier.test_tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    /// Every text string in this subtree, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        fn walk<'a>(v: &'a View, out: &mut Vec<&'a str>) {
            if let ViewKind::Text { text, .. } = &v.kind {
                out.push(text.as_str());
            }
            for c in &v.children {
                walk(c, out);
            }
        }
        walk(self, &mut out);
        out
    }
}
