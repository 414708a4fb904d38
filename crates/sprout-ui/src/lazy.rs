use serde_json::Value;
use sprout_core::*;
use std::ops::Range;
use std::rc::Rc;

/// Scroll position of a `LazyColumn`, in px.
pub struct LazyColumnState {
    scroll_offset: Signal<f32>,
    viewport_height: Signal<f32>,
}

impl Default for LazyColumnState {
    fn default() -> Self {
        Self::new()
    }
}

impl LazyColumnState {
    pub fn new() -> Self {
        Self::with_offset(0.0)
    }

    pub fn with_offset(offset: f32) -> Self {
        Self {
            scroll_offset: signal(offset.max(0.0)),
            viewport_height: signal(600.0),
        }
    }

    pub fn offset(&self) -> f32 {
        self.scroll_offset.get()
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height.get()
    }

    pub fn set_viewport_height(&self, h: f32) {
        let h = h.max(0.0);
        // Writes invalidate the frame, so only write on change.
        if self.viewport_height.get() != h {
            self.viewport_height.set(h);
        }
    }

    pub fn set_offset(&self, off: f32, content_height: f32) {
        if !off.is_finite() {
            log::debug!("LazyColumnState: ignoring offset {off}");
            return;
        }
        let max_off = (content_height - self.viewport_height.get()).max(0.0);
        self.scroll_offset.set(off.clamp(0.0, max_off));
    }

    /// Consume delta in px. Returns the part that could not be scrolled.
    pub fn scroll_by(&self, delta_px: f32, content_height_px: f32) -> f32 {
        let before = self.scroll_offset.get();
        self.set_offset(before + delta_px, content_height_px);
        let consumed = self.scroll_offset.get() - before;
        delta_px - consumed
    }

    /// Indices to compose: the visible window plus `buffer` items either side.
    pub fn window(&self, count: usize, item_h_px: f32, buffer: usize) -> Range<usize> {
        if count == 0 || item_h_px <= 0.0 {
            return 0..0;
        }
        let offset = self.scroll_offset.get();
        let first_visible = (offset / item_h_px).floor().max(0.0) as usize;
        let last_visible = ((offset + self.viewport_height.get()) / item_h_px).ceil() as usize;
        first_visible.saturating_sub(buffer).min(count)..(last_visible + buffer).min(count)
    }
}

struct LazyColumnStateSaver;

impl StateSaver<LazyColumnState> for LazyColumnStateSaver {
    fn save(&self, value: &LazyColumnState) -> Option<Value> {
        serde_json::to_value(value.offset()).ok()
    }
    fn restore(&self, saved: &Value) -> Option<LazyColumnState> {
        saved
            .as_f64()
            .map(|off| LazyColumnState::with_offset(off as f32))
    }
}

/// Scroll state that keeps its position across recreation.
pub fn remember_lazy_column_state(key: impl Into<String>) -> Rc<LazyColumnState> {
    remember_saveable_with(key, LazyColumnStateSaver, LazyColumnState::new)
}

/// Virtualized list: only items inside the viewport (plus a small buffer)
/// are composed. Skipped items are replaced by spacers of their height.
pub fn LazyColumn<T, F>(
    items: &[T],
    item_height_dp: f32,
    state: Rc<LazyColumnState>,
    modifier: Modifier,
    item_builder: F,
) -> View
where
    F: Fn(&T, usize) -> View,
{
    const BUFFER: usize = 2;

    let item_h_px = dp_to_px(item_height_dp);
    let content_height_px = items.len() as f32 * item_h_px;
    let window = state.window(items.len(), item_h_px, BUFFER);

    let mut children = Vec::with_capacity(window.len() + 2);
    if window.start > 0 {
        children.push(crate::Box(
            Modifier::new().size(1.0, window.start as f32 * item_height_dp),
        ));
    }
    for i in window.clone() {
        children.push(item_builder(&items[i], i));
    }
    if window.end < items.len() {
        let remaining = items.len() - window.end;
        children.push(crate::Box(
            Modifier::new().size(1.0, remaining as f32 * item_height_dp),
        ));
    }
    log::trace!(
        "LazyColumn: composed {:?} of {} items",
        window,
        items.len()
    );

    let weak = Rc::downgrade(&state);
    let on_scroll: ScrollCallback = {
        let weak = weak.clone();
        Rc::new(move |dy: f32| match weak.upgrade() {
            Some(st) => st.scroll_by(dy, content_height_px),
            None => dy,
        })
    };
    let set_viewport: Rc<dyn Fn(f32)> = {
        let weak = weak.clone();
        Rc::new(move |h: f32| {
            if let Some(st) = weak.upgrade() {
                st.set_viewport_height(h)
            }
        })
    };
    let get_scroll: Rc<dyn Fn() -> f32> =
        Rc::new(move || weak.upgrade().map(|st| st.offset()).unwrap_or(0.0));

    let content = crate::Column(Modifier::new()).with_children(children);

    View::new(
        0,
        ViewKind::ScrollV {
            on_scroll: Some(on_scroll),
            set_viewport_height: Some(set_viewport),
            get_scroll_offset: Some(get_scroll),
        },
    )
    .modifier(modifier)
    .semantics(Semantics::new(Role::List))
    .with_children(vec![content])
}
