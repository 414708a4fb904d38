//! Saveable state: values that survive the composition being torn down and
//! rebuilt (a configuration change on a phone, a window being recreated).
//!
//! `remember_saveable` registers a provider under a stable key. When the host
//! asks for `SavedInstanceState` every live provider is serialized to JSON;
//! a `Scheduler::restoring` composition hands those values back the first
//! time the same key is remembered.

use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::SaveStateError;
use crate::runtime::COMPOSER;
use crate::{Signal, remember_with_key, signal};

/// Converts a remembered value to and from its saved form.
pub trait StateSaver<T>: 'static {
    fn save(&self, value: &T) -> Option<Value>;
    fn restore(&self, saved: &Value) -> Option<T>;
}

/// Saver for a `Signal` holding any serde type.
pub struct SignalSaver;

impl<T> StateSaver<Signal<T>> for SignalSaver
where
    T: Serialize + DeserializeOwned + 'static,
{
    fn save(&self, value: &Signal<T>) -> Option<Value> {
        value.with(|v| serde_json::to_value(v).ok())
    }
    fn restore(&self, saved: &Value) -> Option<Signal<T>> {
        serde_json::from_value(saved.clone()).ok().map(signal)
    }
}

/// Opaque bag of saved values, keyed by the `remember_saveable` key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SavedInstanceState {
    entries: BTreeMap<String, Value>,
}

impl SavedInstanceState {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn to_json(&self) -> String {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
        .to_string()
    }

    pub fn from_json(json: &str) -> Result<Self, SaveStateError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self {
                entries: map.into_iter().collect(),
            }),
            _ => Err(SaveStateError::NotAnObject),
        }
    }
}

type Provider = Box<dyn Fn() -> Option<Value>>;

#[derive(Default)]
pub(crate) struct SaveableRegistry {
    restored: HashMap<String, Value>,
    providers: BTreeMap<String, Provider>,
}

impl SaveableRegistry {
    pub(crate) fn restoring(saved: SavedInstanceState) -> Self {
        Self {
            restored: saved.entries.into_iter().collect(),
            providers: BTreeMap::new(),
        }
    }

    pub(crate) fn save(&self) -> SavedInstanceState {
        // Values restored but not yet remembered again are carried over.
        let mut entries: BTreeMap<String, Value> = self
            .restored
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        for (key, provider) in &self.providers {
            if let Some(v) = provider() {
                entries.insert(key.clone(), v);
            }
        }
        SavedInstanceState { entries }
    }
}

/// `remember_with_key` whose value is also written to, and read back from,
/// saved instance state.
pub fn remember_saveable_with<T, S>(
    key: impl Into<String>,
    saver: S,
    init: impl FnOnce() -> T,
) -> Rc<T>
where
    T: 'static,
    S: StateSaver<T>,
{
    let key = key.into();
    let saver = Rc::new(saver);
    let restored = COMPOSER.with(|c| c.borrow_mut().saveable.restored.remove(&key));

    let value = remember_with_key(format!("saveable:{key}"), || {
        restored
            .and_then(|saved| {
                let v = saver.restore(&saved);
                if v.is_none() {
                    log::warn!("remember_saveable: could not restore '{key}'; using initial value");
                }
                v
            })
            .unwrap_or_else(init)
    });

    COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        if !c.saveable.providers.contains_key(&key) {
            let weak: Weak<T> = Rc::downgrade(&value);
            let saver = saver.clone();
            c.saveable.providers.insert(
                key,
                Box::new(move || weak.upgrade().and_then(|v| saver.save(&v))),
            );
        }
    });

    value
}

/// Saveable `Signal` for any serde value.
pub fn remember_saveable<T>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<Signal<T>>
where
    T: Serialize + DeserializeOwned + 'static,
{
    remember_saveable_with(key, SignalSaver, || signal(init()))
}
