use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::runtime::invalidate;

pub type SubId = usize;

type Subscriber<T> = Rc<dyn Fn(&T)>;
type Write<T> = Box<dyn FnOnce(&mut T)>;

/// Observable value. Every write notifies subscribers and marks the current
/// composition as stale so the host recomposes on its next frame.
///
/// Writes made while the value is borrowed (from a subscriber or inside
/// `with`) are queued and applied, with a fresh notification, once the
/// borrow ends.
pub struct Signal<T: 'static>(Rc<Inner<T>>);

struct Inner<T> {
    value: RefCell<T>,
    subs: RefCell<Vec<Subscriber<T>>>,
    pending: RefCell<Vec<Write<T>>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Signal").field(&*self.0.value.borrow()).finish()
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        Self(Rc::new(Inner {
            value: RefCell::new(value),
            subs: RefCell::new(Vec::new()),
            pending: RefCell::new(Vec::new()),
        }))
    }
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.0.value.borrow().clone()
    }
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let out = f(&self.0.value.borrow());
        if self.apply_pending() {
            self.notify();
        }
        out
    }
    pub fn set(&self, v: T) {
        self.update(move |value| *value = v);
    }
    pub fn update(&self, f: impl FnOnce(&mut T) + 'static) {
        match self.0.value.try_borrow_mut() {
            Ok(mut value) => f(&mut value),
            Err(_) => {
                self.0.pending.borrow_mut().push(Box::new(f));
                return;
            }
        }
        self.notify();
    }
    pub fn subscribe(&self, f: impl Fn(&T) + 'static) -> SubId {
        let mut subs = self.0.subs.borrow_mut();
        subs.push(Rc::new(f));
        subs.len() - 1
    }
    pub fn downgrade(&self) -> WeakSignal<T> {
        WeakSignal(Rc::downgrade(&self.0))
    }

    fn notify(&self) {
        loop {
            invalidate();
            let subs: Vec<Subscriber<T>> = self.0.subs.borrow().clone();
            for s in &subs {
                s(&self.0.value.borrow());
            }
            if !self.apply_pending() {
                break;
            }
        }
    }

    /// Applies writes queued while the value was borrowed.
    fn apply_pending(&self) -> bool {
        // Still borrowed further up the stack; whoever holds it applies them.
        let Ok(mut value) = self.0.value.try_borrow_mut() else {
            return false;
        };
        let pending = std::mem::take(&mut *self.0.pending.borrow_mut());
        if pending.is_empty() {
            return false;
        }
        for write in pending {
            write(&mut value);
        }
        true
    }
}

/// Non-owning handle to a `Signal`. Callbacks registered with the host hold
/// these so that a torn-down composition does not keep its state alive.
pub struct WeakSignal<T: 'static>(Weak<Inner<T>>);

impl<T> Clone for WeakSignal<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> WeakSignal<T> {
    pub fn upgrade(&self) -> Option<Signal<T>> {
        self.0.upgrade().map(Signal)
    }
}

pub fn signal<T>(t: T) -> Signal<T> {
    Signal::new(t)
}
