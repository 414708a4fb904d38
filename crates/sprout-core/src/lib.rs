//! # State, Signals, and Saveable state
//!
//! Sprout uses a small reactive core instead of an explicit widget tree with
//! mutable fields. The main pieces:
//!
//! - `Signal<T>`: observable value; every write asks the host to recompose.
//! - `remember*`: storage bound to the composition.
//! - `remember_saveable*`: remembered values that also survive the
//!   composition being recreated.
//!
//! ## Signals
//!
//! ```rust
//! use sprout_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! ## Remembered state
//!
//! View functions are re-run on every frame, so state lives in slots of the
//! composition rather than in locals:
//!
//! ```rust
//! use sprout_core::*;
//!
//! fn counter() -> View {
//!     let count = remember_saveable("count", || 0);
//!     let on_click = {
//!         let count = count.downgrade();
//!         move || {
//!             if let Some(count) = count.upgrade() {
//!                 count.update(|c| *c += 1)
//!             }
//!         }
//!     };
//!     View::new(0, ViewKind::Button { on_click: Some(std::rc::Rc::new(on_click)) })
//! }
//!
//! let mut sched = Scheduler::new();
//! let frame = sched.compose(|_| counter());
//! assert_eq!(frame.targets.len(), 1);
//! ```
//!
//! - `remember` is order‑based: the Nth call in a composition always refers
//!   to the Nth stored value.
//! - `remember_with_key` and `remember_saveable` are key‑based and stable
//!   across conditional branches.

pub mod animation;
pub mod color;
pub mod error;
pub mod geometry;
pub mod locals;
pub mod modifier;
pub mod prelude;
pub mod runtime;
pub mod scope;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

pub use animation::*;
pub use color::*;
pub use error::*;
pub use geometry::*;
pub use locals::*;
pub use modifier::*;
pub use runtime::*;
pub use scope::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;
