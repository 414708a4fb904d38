use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::scope::Scope;
use crate::state::{SavedInstanceState, SaveableRegistry};
use crate::{Callback, Role, ScrollCallback, Size, View, ViewId, ViewKind, dp_to_px};

thread_local! {
    pub static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
    static GENERATION: Cell<u64> = const { Cell::new(0) };
}

/// Slot storage for one composition. The active composer lives in a
/// thread-local while a frame is being built; between frames it is parked
/// in its `Scheduler`.
#[derive(Default)]
pub struct Composer {
    pub slots: Vec<Box<dyn Any>>,
    pub cursor: usize,
    pub keyed_slots: HashMap<String, Box<dyn Any>>,
    pub(crate) saveable: SaveableRegistry,
}

pub struct ComposeGuard {
    scope: Scope,
    parked: Option<Composer>,
}

impl ComposeGuard {
    /// Installs `composer` as the active composition for this thread.
    pub fn begin(composer: Composer, scope: Scope) -> Self {
        let parked = COMPOSER.with(|c| {
            let mut c = c.borrow_mut();
            let prev = std::mem::replace(&mut *c, composer);
            c.cursor = 0;
            prev
        });
        ComposeGuard {
            scope,
            parked: Some(parked),
        }
    }

    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Uninstalls the active composer and hands it back.
    pub fn finish(mut self) -> Composer {
        let parked = self.parked.take().unwrap_or_default();
        COMPOSER.with(|c| std::mem::replace(&mut *c.borrow_mut(), parked))
    }
}

impl Drop for ComposeGuard {
    fn drop(&mut self) {
        // Only reached without `finish` when the root panicked.
        if let Some(parked) = self.parked.take() {
            COMPOSER.with(|c| *c.borrow_mut() = parked);
        }
    }
}

/// Bumps the write generation. Called by every signal write; each
/// `Scheduler` compares it with the generation it last composed at.
pub fn invalidate() {
    GENERATION.with(|g| g.set(g.get().wrapping_add(1)));
}

/// Number of signal writes on this thread so far.
pub fn generation() -> u64 {
    GENERATION.with(Cell::get)
}

/// Slot-based remember (sequential composition only)
pub fn remember<T: 'static>(init: impl FnOnce() -> T) -> Rc<T> {
    let (cursor, existing) = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let cursor = c.cursor;
        c.cursor += 1;
        let existing = c
            .slots
            .get(cursor)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned());
        if existing.is_none() {
            // reserve the slot so remembers inside init() land after it
            c.slots.push(Box::new(()));
        }
        (cursor, existing)
    });

    match existing {
        Some(Some(rc)) => rc,
        Some(None) => {
            log::warn!(
                "remember: slot {} type changed; replacing. \
                 If this is due to conditional composition, prefer remember_with_key.",
                cursor
            );
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
        None => {
            let rc: Rc<T> = Rc::new(init());
            COMPOSER.with(|c| c.borrow_mut().slots[cursor] = Box::new(rc.clone()));
            rc
        }
    }
}

/// Key-based remember
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();
    let existing = COMPOSER.with(|c| {
        c.borrow()
            .keyed_slots
            .get(&key)
            .map(|slot| slot.downcast_ref::<Rc<T>>().cloned())
    });

    match existing {
        Some(Some(rc)) => return rc,
        Some(None) => log::warn!(
            "remember_with_key: key '{}' reused with a different type; replacing.",
            key
        ),
        None => {}
    }

    let rc: Rc<T> = Rc::new(init());
    COMPOSER.with(|c| c.borrow_mut().keyed_slots.insert(key, Box::new(rc.clone())));
    rc
}

/// Frame: output of composition for a tick. The view tree plus every
/// node a host can dispatch input to.
pub struct Frame {
    pub root: View,
    pub targets: Vec<Target>,
}

impl Frame {
    pub fn target(&self, tag: &str) -> Option<&Target> {
        self.targets.iter().find(|t| t.tag.as_deref() == Some(tag))
    }
}

#[derive(Clone)]
pub struct Target {
    pub id: ViewId,
    pub tag: Option<String>,
    pub role: Option<Role>,
    pub label: Option<String>,
    pub on_click: Option<Callback>,
    pub on_scroll: Option<ScrollCallback>,
}

impl std::fmt::Debug for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Target")
            .field("id", &self.id)
            .field("tag", &self.tag)
            .field("role", &self.role)
            .field("label", &self.label)
            .field("on_click", &self.on_click.as_ref().map(|_| "..."))
            .field("on_scroll", &self.on_scroll.as_ref().map(|_| "..."))
            .finish()
    }
}

pub struct Scheduler {
    next_id: u64,
    composer: Option<Composer>,
    scope: Scope,
    /// Write generation the last composition started at.
    composed_at: Option<u64>,
    /// Viewport in dp.
    pub size: Size,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            composer: Some(Composer::default()),
            scope: Scope::new(),
            composed_at: None,
            size: Size {
                width: 360.0,
                height: 640.0,
            },
        }
    }

    /// A scheduler whose first composition picks up `saved` through
    /// `remember_saveable`.
    pub fn restoring(saved: SavedInstanceState) -> Self {
        let mut s = Self::new();
        if let Some(c) = s.composer.as_mut() {
            c.saveable = SaveableRegistry::restoring(saved);
        }
        s
    }

    pub fn id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn compose<F>(&mut self, mut build_root: F) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        let started_at = generation();
        let composer = self.composer.take().unwrap_or_default();
        let guard = ComposeGuard::begin(composer, self.scope.clone());
        let root = guard.scope().clone().run(|| build_root(self));
        self.composer = Some(guard.finish());

        self.next_id = 1;
        let root = self.stamp(root);
        let mut targets = Vec::new();
        self.collect(&root, &mut targets);
        self.composed_at = Some(started_at);

        Frame { root, targets }
    }

    /// Whether a signal was written since this scheduler last composed,
    /// including writes made while composing.
    pub fn is_stale(&self) -> bool {
        self.composed_at != Some(generation())
    }

    pub fn save_instance_state(&self) -> SavedInstanceState {
        self.composer
            .as_ref()
            .map(|c| c.saveable.save())
            .unwrap_or_default()
    }

    /// Tears the composition down: runs scope disposers and drops every
    /// remembered value.
    pub fn dispose(mut self) {
        self.composer = None;
        self.scope.clone().dispose();
    }

    fn stamp(&mut self, mut v: View) -> View {
        v.id = self.id();
        v.children = std::mem::take(&mut v.children)
            .into_iter()
            .map(|c| self.stamp(c))
            .collect();
        v
    }

    fn collect(&self, v: &View, out: &mut Vec<Target>) {
        let role = v.semantics.as_ref().map(|s| s.role);
        let label = v.semantics.as_ref().and_then(|s| s.label.clone());
        let target = |on_click: Option<Callback>, on_scroll: Option<ScrollCallback>| Target {
            id: v.id,
            tag: v.modifier.test_tag.clone(),
            role,
            label: label.clone(),
            on_click,
            on_scroll,
        };
        match &v.kind {
            ViewKind::Button { on_click } | ViewKind::IconButton { on_click } => {
                out.push(target(on_click.clone(), None));
            }
            ViewKind::ScrollV {
                on_scroll,
                set_viewport_height,
                ..
            } => {
                // No layout pass: the scroller fills the host viewport.
                if let Some(set) = set_viewport_height {
                    set(dp_to_px(self.size.height));
                }
                out.push(target(None, on_scroll.clone()));
            }
            _ => {
                if v.modifier.test_tag.is_some() {
                    out.push(target(None, None));
                }
            }
        }
        for child in &v.children {
            self.collect(child, out);
        }
    }
}
