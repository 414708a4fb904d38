use std::rc::Rc;

use sprout_core::prelude::*;
use sprout_ui::*;

use crate::state::{AppShell, GreetingItem, GreetingList};
use crate::strings;

/// Height a collapsed card takes in the list, in dp.
pub const GREETING_HEIGHT_DP: f32 = 88.0;

/// Test tags hosts use to find targets.
pub mod tags {
    pub const CONTINUE: &str = "continue";
    pub const GREETINGS: &str = "greetings";

    pub fn item(name: &str) -> String {
        format!("item:{name}")
    }

    pub fn toggle(name: &str) -> String {
        format!("toggle:{name}")
    }
}

pub fn MyApp(modifier: Modifier, shell: &Rc<AppShell>) -> View {
    let content = match shell.greetings() {
        Some(list) => Greetings(Modifier::new(), &list),
        None => {
            let shell = Rc::downgrade(shell);
            OnboardingScreen(move || match shell.upgrade() {
                Some(shell) => shell.on_continue(),
                None => log::debug!("continue clicked on a disposed composition"),
            })
        }
    };
    Surface(modifier.background(theme().background), content)
}

pub fn OnboardingScreen(on_continue: impl Fn() + 'static) -> View {
    Column(
        Modifier::new()
            .fill_max_size()
            .arrangement(Arrangement::Center)
            .alignment(Alignment::Center),
    )
    .child((
        Text(strings::WELCOME),
        Button(|| Text(strings::CONTINUE), on_continue)
            .map_modifier(|m| m.padding_vertical(24.0))
            .test_tag(tags::CONTINUE),
    ))
}

pub fn Greetings(modifier: Modifier, list: &GreetingList) -> View {
    let state = remember_lazy_column_state("greetings_scroll");
    LazyColumn(
        list.names(),
        GREETING_HEIGHT_DP,
        state,
        modifier.padding_vertical(4.0).test_tag(tags::GREETINGS),
        |name, _| match list.item(name) {
            Some(item) => Greeting(&item),
            None => Box(Modifier::new()),
        },
    )
}

pub fn Greeting(item: &Rc<GreetingItem>) -> View {
    Card(
        Modifier::new()
            .padding_symmetric(8.0, 4.0)
            .test_tag(tags::item(item.name())),
        CardDefaults::card_colors(theme().primary),
        || CardContent(item),
    )
}

pub fn CardContent(item: &Rc<GreetingItem>) -> View {
    let toggle = {
        let item = Rc::downgrade(item);
        move || match item.upgrade() {
            Some(item) => item.toggle(),
            None => log::debug!("toggle clicked on a disposed item"),
        }
    };
    let name_style = typography()
        .headline_medium
        .with_weight(FontWeight::ExtraBold);

    Row(Modifier::new()
        .padding(12.0)
        .animate_content_size(GreetingItem::SPRING))
    .child((
        Column(Modifier::new().weight(1.0).padding(12.0)).child((
            Text(strings::HELLO),
            Text(item.name()).style(name_style),
            item.extended_text().map(Text),
        )),
        IconButton(toggle, Icon(item.icon(), Some(item.icon_label().into())))
            .test_tag(tags::toggle(item.name())),
    ))
}
