//! Application state: which screen is showing and which cards are expanded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sprout_core::*;
use sprout_ui::icons;

use crate::strings;

/// Number of greetings shown after onboarding.
pub const NAME_COUNT: usize = 1000;

/// Shown under an expanded greeting, four times over.
pub const EXTENDED_TEXT: &str = "Composem ipsum color sit, padding theme elit, send do bouncy, ";

/// `"0"`, `"1"`, ... `"{n-1}"`.
pub fn make_names(n: usize) -> Vec<String> {
    (0..n).map(|i| i.to_string()).collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    Onboarding,
    Greetings,
}

/// One expandable card.
pub struct GreetingItem {
    name: String,
    expanded: Signal<bool>,
}

impl GreetingItem {
    /// Spring the card content animates its size with.
    pub const SPRING: SpringSpec = SpringSpec::new(
        SpringSpec::DAMPING_RATIO_MEDIUM_BOUNCY,
        SpringSpec::STIFFNESS_LOW,
    );

    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: signal(false),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded.get()
    }

    pub fn toggle(&self) {
        self.expanded.update(|e| *e = !*e);
        log::debug!("greeting {} expanded={}", self.name, self.is_expanded());
    }

    /// Calls `f` with the new state after every toggle.
    pub fn subscribe(&self, f: impl Fn(bool) + 'static) -> SubId {
        self.expanded.subscribe(move |expanded| f(*expanded))
    }

    pub fn extended_text(&self) -> Option<String> {
        self.is_expanded().then(|| EXTENDED_TEXT.repeat(4))
    }

    pub fn icon(&self) -> ImageVector {
        if self.is_expanded() {
            icons::filled::EXPAND_LESS
        } else {
            icons::filled::EXPAND_MORE
        }
    }

    pub fn icon_label(&self) -> &'static str {
        if self.is_expanded() {
            strings::SHOW_LESS
        } else {
            strings::SHOW_MORE
        }
    }
}

/// The names plus an arena of per-item state, keyed by name. Item state is
/// created the first time an item is asked for.
pub struct GreetingList {
    names: Rc<[String]>,
    index: HashMap<String, usize>,
    items: RefCell<HashMap<String, Rc<GreetingItem>>>,
}

impl GreetingList {
    pub fn new(names: Rc<[String]>) -> Self {
        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if index.insert(name.clone(), i).is_some() {
                log::warn!("duplicate greeting name {name:?}; items will share state");
            }
        }
        Self {
            names,
            index,
            items: RefCell::new(HashMap::new()),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// State for `name`, or `None` if it is not in the list.
    pub fn item(&self, name: &str) -> Option<Rc<GreetingItem>> {
        if !self.index.contains_key(name) {
            return None;
        }
        let item = self
            .items
            .borrow_mut()
            .entry(name.to_string())
            .or_insert_with(|| Rc::new(GreetingItem::new(name)))
            .clone();
        Some(item)
    }

    pub fn item_at(&self, index: usize) -> Option<Rc<GreetingItem>> {
        self.names.get(index).and_then(|n| self.item(n))
    }

    /// How many items have state so far.
    pub fn created(&self) -> usize {
        self.items.borrow().len()
    }

    /// Expanded names in list order.
    pub fn expanded_names(&self) -> Vec<String> {
        let items = self.items.borrow();
        let mut out: Vec<(usize, String)> = items
            .values()
            .filter(|it| it.is_expanded())
            .filter_map(|it| self.index.get(it.name()).map(|&i| (i, it.name.clone())))
            .collect();
        out.sort_unstable();
        out.into_iter().map(|(_, n)| n).collect()
    }
}

/// Top level state: onboarding first, then the greeting list. The switch
/// happens once and is never undone.
pub struct AppShell {
    onboarding_visible: Signal<bool>,
    names: Rc<[String]>,
    greetings: RefCell<Option<Rc<GreetingList>>>,
}

impl Default for AppShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AppShell {
    pub fn new() -> Self {
        Self::with_names(make_names(NAME_COUNT))
    }

    pub fn with_names(names: impl Into<Rc<[String]>>) -> Self {
        Self {
            onboarding_visible: signal(true),
            names: names.into(),
            greetings: RefCell::new(None),
        }
    }

    pub fn on_continue(&self) {
        if self.onboarding_visible.get() {
            log::info!("onboarding finished");
            self.onboarding_visible.set(false);
        } else {
            log::debug!("continue after onboarding; ignored");
        }
    }

    pub fn is_onboarding_visible(&self) -> bool {
        self.onboarding_visible.get()
    }

    pub fn screen(&self) -> Screen {
        if self.is_onboarding_visible() {
            Screen::Onboarding
        } else {
            Screen::Greetings
        }
    }

    /// The list, built on first use. `None` while onboarding is showing.
    pub fn greetings(&self) -> Option<Rc<GreetingList>> {
        if self.is_onboarding_visible() {
            return None;
        }
        let list = self
            .greetings
            .borrow_mut()
            .get_or_insert_with(|| Rc::new(GreetingList::new(self.names.clone())))
            .clone();
        Some(list)
    }

    /// Calls `f` with the new screen when onboarding is dismissed.
    pub fn subscribe(&self, f: impl Fn(Screen) + 'static) -> SubId {
        self.onboarding_visible.subscribe(move |visible| {
            f(if *visible {
                Screen::Onboarding
            } else {
                Screen::Greetings
            })
        })
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedShell {
    onboarding_visible: bool,
    #[serde(default)]
    expanded: Vec<String>,
}

/// Saves the current screen and the expanded names. The names themselves
/// are not saved; the saver restores into a shell over `names`.
pub struct AppShellSaver {
    names: Rc<[String]>,
}

impl AppShellSaver {
    pub fn new(names: Rc<[String]>) -> Self {
        Self { names }
    }
}

impl StateSaver<AppShell> for AppShellSaver {
    fn save(&self, shell: &AppShell) -> Option<Value> {
        let expanded = shell
            .greetings
            .borrow()
            .as_ref()
            .map(|list| list.expanded_names())
            .unwrap_or_default();
        serde_json::to_value(SavedShell {
            onboarding_visible: shell.is_onboarding_visible(),
            expanded,
        })
        .ok()
    }

    fn restore(&self, saved: &Value) -> Option<AppShell> {
        let saved: SavedShell = serde_json::from_value(saved.clone()).ok()?;
        let shell = AppShell::with_names(self.names.clone());
        if saved.onboarding_visible {
            if !saved.expanded.is_empty() {
                log::warn!("saved expansions while onboarding; dropping them");
            }
            return Some(shell);
        }
        shell.onboarding_visible.set(false);
        if let Some(list) = shell.greetings() {
            for name in &saved.expanded {
                match list.item(name) {
                    Some(item) => item.expanded.set(true),
                    None => log::debug!("saved expansion for unknown item {name:?}"),
                }
            }
        }
        Some(shell)
    }
}

/// The app's shell over the default names, kept across recreation.
pub fn remember_app_shell() -> Rc<AppShell> {
    let names = remember_with_key("app_names", || -> Rc<[String]> {
        make_names(NAME_COUNT).into()
    });
    remember_app_shell_with((*names).clone())
}

/// The app's shell over `names`, kept across recreation.
pub fn remember_app_shell_with(names: Rc<[String]>) -> Rc<AppShell> {
    let saver = AppShellSaver::new(names.clone());
    remember_saveable_with("app_shell", saver, move || AppShell::with_names(names))
}
