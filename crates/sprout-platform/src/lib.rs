//! Platform runners.
//!
//! `HeadlessHost` plays the role a windowing runner plays on a device: it
//! calls the root view function on mount and whenever a signal write has
//! invalidated the composition, routes input to the frame's targets, and
//! carries saved instance state across recreation. It draws nothing.

mod common;

pub use common::Step;

use sprout_core::*;
use sprout_devtools::Inspector;
use thiserror::Error;
use web_time::Instant;

use crate::common::{target_by_label, target_by_tag};

#[derive(Debug, Error)]
pub enum HostError {
    #[error("no target tagged '{0}' in the current frame")]
    TargetNotFound(String),
    #[error("target '{0}' does not accept clicks")]
    NotClickable(String),
    #[error("target '{0}' does not scroll")]
    NotScrollable(String),
}

#[derive(Clone, Debug)]
pub struct HostConfig {
    /// Viewport in dp. Scrollers fill it.
    pub viewport: Size,
    /// Upper bound on compositions per frame when composing writes state.
    pub max_passes: usize,
    pub inspector: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            viewport: Size {
                width: 360.0,
                height: 640.0,
            },
            max_passes: 3,
            inspector: false,
        }
    }
}

type RootFn = Box<dyn FnMut(&mut Scheduler) -> View>;

pub struct HeadlessHost {
    root: RootFn,
    sched: Scheduler,
    config: HostConfig,
    inspector: Inspector,
    frame_cache: Option<Frame>,
}

impl HeadlessHost {
    pub fn new(root: impl FnMut(&mut Scheduler) -> View + 'static) -> Self {
        Self::with_config(root, HostConfig::default())
    }

    pub fn with_config(
        root: impl FnMut(&mut Scheduler) -> View + 'static,
        config: HostConfig,
    ) -> Self {
        Self::build(Box::new(root), config, Scheduler::new())
    }

    /// A host whose composition starts from `saved`.
    pub fn restore(
        root: impl FnMut(&mut Scheduler) -> View + 'static,
        config: HostConfig,
        saved: SavedInstanceState,
    ) -> Self {
        Self::build(Box::new(root), config, Scheduler::restoring(saved))
    }

    fn build(root: RootFn, config: HostConfig, mut sched: Scheduler) -> Self {
        sched.size = config.viewport;
        let mut inspector = Inspector::new();
        inspector.enabled = config.inspector;
        Self {
            root,
            sched,
            config,
            inspector,
            frame_cache: None,
        }
    }

    /// Current frame, recomposing first if state changed since the last one.
    pub fn frame(&mut self) -> &Frame {
        let stale = self.sched.is_stale();
        match self.frame_cache.take() {
            Some(frame) if !stale => self.frame_cache.insert(frame),
            _ => {
                let frame = self.recompose();
                self.frame_cache.insert(frame)
            }
        }
    }

    fn recompose(&mut self) -> Frame {
        let mut pass = 1;
        loop {
            let t0 = Instant::now();
            let frame = self.sched.compose(&mut self.root);
            let compose_ms = (Instant::now() - t0).as_secs_f32() * 1000.0;
            self.inspector.frame(&frame, compose_ms);

            // Composing may write state (e.g. a scroller learning its viewport).
            if !self.sched.is_stale() {
                return frame;
            }
            if pass >= self.config.max_passes {
                log::warn!("composition still invalid after {pass} passes");
                return frame;
            }
            log::trace!("composition invalidated during pass {pass}; composing again");
            pass += 1;
        }
    }

    pub fn click(&mut self, tag: &str) -> Result<(), HostError> {
        let target = target_by_tag(self.frame(), tag)
            .ok_or_else(|| HostError::TargetNotFound(tag.to_string()))?;
        let on_click = target
            .on_click
            .clone()
            .ok_or_else(|| HostError::NotClickable(tag.to_string()))?;
        log::debug!("click #{tag}");
        on_click();
        Ok(())
    }

    pub fn click_label(&mut self, label: &str) -> Result<(), HostError> {
        let on_click = target_by_label(self.frame(), label)
            .and_then(|t| t.on_click.clone())
            .ok_or_else(|| HostError::TargetNotFound(label.to_string()))?;
        log::debug!("click {label:?}");
        on_click();
        Ok(())
    }

    /// Scrolls by `dy` px. Returns the part the scroller could not consume.
    pub fn scroll_by(&mut self, tag: &str, dy: f32) -> Result<f32, HostError> {
        let target = target_by_tag(self.frame(), tag)
            .ok_or_else(|| HostError::TargetNotFound(tag.to_string()))?;
        let on_scroll = target
            .on_scroll
            .clone()
            .ok_or_else(|| HostError::NotScrollable(tag.to_string()))?;
        Ok(on_scroll(dy))
    }

    pub fn save_instance_state(&self) -> SavedInstanceState {
        self.sched.save_instance_state()
    }

    /// Simulates a configuration change: saves state, disposes the
    /// composition and builds a fresh one from the saved state.
    pub fn recreate(self) -> Self {
        let saved = self.save_instance_state();
        log::info!("recreating composition ({} saved entries)", saved.len());
        let HeadlessHost {
            root,
            sched,
            config,
            ..
        } = self;
        sched.dispose();
        Self::build(root, config, Scheduler::restoring(saved))
    }

    pub fn apply(&mut self, step: &Step) -> anyhow::Result<()> {
        match step {
            Step::Click(tag) => self.click(tag)?,
            Step::ClickLabel(label) => self.click_label(label)?,
            Step::Scroll(tag, dy) => {
                self.scroll_by(tag, *dy)?;
            }
            Step::Recreate => anyhow::bail!("Recreate consumes the host; use run_headless_app"),
        }
        Ok(())
    }

    pub fn inspector(&self) -> &Inspector {
        &self.inspector
    }

    pub fn dispose(self) {
        self.sched.dispose();
    }
}

/// Mounts `root`, replays `steps` and returns the host so the caller can
/// inspect the final frame.
pub fn run_headless_app(
    root: impl FnMut(&mut Scheduler) -> View + 'static,
    config: HostConfig,
    steps: &[Step],
) -> anyhow::Result<HeadlessHost> {
    let mut host = HeadlessHost::with_config(root, config);
    host.frame();
    for step in steps {
        log::info!("step: {step:?}");
        match step {
            Step::Recreate => host = host.recreate(),
            other => host.apply(other)?,
        }
        host.frame();
    }
    Ok(host)
}
