#![allow(non_snake_case)]
//! Basics codelab: a welcome screen with a "Continue" button, then a lazy
//! list of 1000 greeting cards that expand and collapse one by one.
//!
//! ```rust
//! use basics_codelab::{app, tags};
//! use sprout_platform::HeadlessHost;
//!
//! let mut host = HeadlessHost::new(app(false));
//! host.click(tags::CONTINUE).unwrap();
//! host.click(&tags::toggle("5")).unwrap();
//! let card = host.frame().root.find_by_tag(&tags::item("5")).unwrap();
//! assert_eq!(card.texts().len(), 3);
//! ```

pub mod state;
pub mod strings;
pub mod theme;
pub mod ui;

#[cfg(test)]
mod tests;

use sprout_core::{Modifier, Scheduler, View};

pub use state::{
    AppShell, AppShellSaver, EXTENDED_TEXT, GreetingItem, GreetingList, NAME_COUNT, Screen,
    make_names, remember_app_shell, remember_app_shell_with,
};
pub use theme::{CodelabTheme, codelab_theme};
pub use ui::{CardContent, Greeting, Greetings, MyApp, OnboardingScreen, tags};

/// Root view function for a host.
pub fn app(dark: bool) -> impl FnMut(&mut Scheduler) -> View {
    move |_| {
        CodelabTheme(dark, || {
            let shell = remember_app_shell();
            MyApp(Modifier::new().fill_max_size(), &shell)
        })
    }
}
