use std::fmt::Write as _;

use web_time::Instant;

use sprout_core::{FontWeight, Frame, View, ViewKind};

/// Counters for the most recent frame.
#[derive(Clone, Debug, Default)]
pub struct Metrics {
    pub compose_ms: f32,
    pub nodes: usize,
    pub targets: usize,
}

/// Frame statistics plus a readable outline of the composed tree.
pub struct Inspector {
    pub enabled: bool,
    frame_count: u64,
    last_frame: Option<Instant>,
    fps_smooth: f32,
    pub metrics: Option<Metrics>,
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector {
    pub fn new() -> Self {
        Self {
            enabled: false,
            frame_count: 0,
            last_frame: None,
            fps_smooth: 0.0,
            metrics: None,
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Records a composed frame. `compose_ms` is how long the root took.
    pub fn frame(&mut self, frame: &Frame, compose_ms: f32) {
        self.frame_count += 1;
        let now = Instant::now();
        if let Some(prev) = self.last_frame.replace(now) {
            let dt = (now - prev).as_secs_f32();
            if dt > 0.0 {
                let fps = 1.0 / dt;
                // simple EMA
                let a = 0.2;
                self.fps_smooth = if self.fps_smooth == 0.0 {
                    fps
                } else {
                    (1.0 - a) * self.fps_smooth + a * fps
                };
            }
        }
        self.metrics = Some(Metrics {
            compose_ms,
            nodes: count_nodes(&frame.root),
            targets: frame.targets.len(),
        });
        if self.enabled {
            log::debug!("{}", self.summary());
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("frame: {}", self.frame_count),
            format!("fps: {:.1}", self.fps_smooth),
        ];
        if let Some(m) = &self.metrics {
            lines.push(format!("compose: {:.2} ms", m.compose_ms));
            lines.push(format!("nodes: {}", m.nodes));
            lines.push(format!("targets: {}", m.targets));
        }
        lines.join("  |  ")
    }
}

pub fn count_nodes(v: &View) -> usize {
    1 + v.children.iter().map(count_nodes).sum::<usize>()
}

/// Indented outline of `root`, one node per line.
pub fn dump_tree(root: &View) -> String {
    let mut out = String::new();
    dump_node(root, 0, &mut out);
    out
}

fn dump_node(v: &View, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}", "", indent = depth * 2);
    match &v.kind {
        ViewKind::Surface => out.push_str("Surface"),
        ViewKind::Box => out.push_str("Box"),
        ViewKind::Row => out.push_str("Row"),
        ViewKind::Column => out.push_str("Column"),
        ViewKind::ScrollV {
            get_scroll_offset, ..
        } => {
            let off = get_scroll_offset.as_ref().map(|g| g()).unwrap_or(0.0);
            let _ = write!(out, "ScrollV offset={off}");
        }
        ViewKind::Text {
            text, font_weight, ..
        } => {
            let _ = write!(out, "Text {text:?}");
            if *font_weight != FontWeight::Normal {
                let _ = write!(out, " {font_weight:?}");
            }
        }
        ViewKind::Button { .. } => out.push_str("Button"),
        ViewKind::IconButton { .. } => {
            out.push_str("IconButton");
            if let Some(label) = v.semantics.as_ref().and_then(|s| s.label.as_ref()) {
                let _ = write!(out, " {label:?}");
            }
        }
        ViewKind::Icon { image, .. } => {
            let _ = write!(out, "Icon {}", image.name);
        }
    }
    if let Some(size) = v.modifier.size {
        let _ = write!(out, " {}x{}", size.width, size.height);
    }
    if let Some(tag) = &v.modifier.test_tag {
        let _ = write!(out, " #{tag}");
    }
    out.push('\n');
    for c in &v.children {
        dump_node(c, depth + 1, out);
    }
}
