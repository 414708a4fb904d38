use crate::{Color, Size, SpringSpec};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PaddingValues {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Main-axis placement of a container's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arrangement {
    #[default]
    Start,
    Center,
    End,
}

/// Cross-axis placement of a container's children.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Clone, Debug, Default)]
pub struct Modifier {
    pub size: Option<Size>,
    pub fill_max: bool,
    pub padding: Option<PaddingValues>,
    pub background: Option<Color>,
    pub clip_rounded: Option<f32>,
    /// Share of the remaining main-axis space (Compose `weight`).
    pub weight: Option<f32>,
    pub arrangement: Option<Arrangement>,
    pub alignment: Option<Alignment>,
    pub animate_content_size: Option<SpringSpec>,
    pub test_tag: Option<String>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn size(mut self, w: f32, h: f32) -> Self {
        self.size = Some(Size {
            width: w,
            height: h,
        });
        self
    }
    pub fn fill_max_size(mut self) -> Self {
        self.fill_max = true;
        self
    }
    pub fn padding(mut self, v: f32) -> Self {
        self.padding = Some(PaddingValues {
            left: v,
            right: v,
            top: v,
            bottom: v,
        });
        self
    }
    /// Adds to any padding already present, like chained Compose paddings.
    pub fn padding_symmetric(mut self, horizontal: f32, vertical: f32) -> Self {
        let p = self.padding.unwrap_or_default();
        self.padding = Some(PaddingValues {
            left: p.left + horizontal,
            right: p.right + horizontal,
            top: p.top + vertical,
            bottom: p.bottom + vertical,
        });
        self
    }
    pub fn padding_vertical(self, v: f32) -> Self {
        self.padding_symmetric(0.0, v)
    }
    pub fn padding_horizontal(self, h: f32) -> Self {
        self.padding_symmetric(h, 0.0)
    }
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
    pub fn clip_rounded(mut self, radius: f32) -> Self {
        self.clip_rounded = Some(radius);
        self
    }
    pub fn weight(mut self, w: f32) -> Self {
        self.weight = Some(w);
        self
    }
    pub fn arrangement(mut self, a: Arrangement) -> Self {
        self.arrangement = Some(a);
        self
    }
    pub fn alignment(mut self, a: Alignment) -> Self {
        self.alignment = Some(a);
        self
    }
    /// Declares that size changes of this node animate with `spec`. The
    /// interpolation itself belongs to the platform.
    pub fn animate_content_size(mut self, spec: SpringSpec) -> Self {
        self.animate_content_size = Some(spec);
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}
