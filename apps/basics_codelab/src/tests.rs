use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use sprout_core::*;
use sprout_devtools::dump_tree;
use sprout_platform::{HeadlessHost, HostConfig, HostError, Step, run_headless_app};

use crate::*;

fn target_label(host: &mut HeadlessHost, tag: &str) -> Option<String> {
    host.frame().target(tag).and_then(|t| t.label.clone())
}

fn item_texts(host: &mut HeadlessHost, name: &str) -> Vec<String> {
    host.frame()
        .root
        .find_by_tag(&tags::item(name))
        .map(|v| v.texts().into_iter().map(str::to_string).collect())
        .unwrap_or_default()
}

#[test]
fn starts_on_onboarding() {
    let shell = AppShell::new();
    assert_eq!(shell.screen(), Screen::Onboarding);
    assert!(shell.is_onboarding_visible());
    assert!(shell.greetings().is_none());
}

#[test]
fn continue_is_idempotent() {
    let shell = AppShell::new();
    let notified = Rc::new(Cell::new(0));
    let n = notified.clone();
    shell.subscribe(move |screen| {
        assert_eq!(screen, Screen::Greetings);
        n.set(n.get() + 1);
    });

    for _ in 0..3 {
        shell.on_continue();
        assert_eq!(shell.screen(), Screen::Greetings);
    }
    assert_eq!(notified.get(), 1);
}

#[test]
fn no_way_back_to_onboarding() {
    let shell = AppShell::new();
    shell.on_continue();
    let list = shell.greetings().expect("list");
    list.item("3").expect("item").toggle();
    shell.on_continue();
    assert_eq!(shell.screen(), Screen::Greetings);
    assert!(Rc::ptr_eq(&list, &shell.greetings().expect("list")));
}

#[test]
fn items_start_collapsed() {
    let item = GreetingItem::new("42");
    assert_eq!(item.name(), "42");
    assert!(!item.is_expanded());
    assert_eq!(item.extended_text(), None);
    assert_eq!(item.icon_label(), "Show more");
    assert_eq!(item.icon().name, "ExpandMore");
}

#[test]
fn expanded_follows_toggle_parity() {
    for toggles in 0..6 {
        let item = GreetingItem::new("x");
        for _ in 0..toggles {
            item.toggle();
        }
        assert_eq!(item.is_expanded(), toggles % 2 == 1, "after {toggles} toggles");
    }
}

#[test]
fn expanded_item_shows_text_and_collapse_icon() {
    let item = GreetingItem::new("7");
    item.toggle();
    let text = item.extended_text().expect("expanded text");
    assert_eq!(text, EXTENDED_TEXT.repeat(4));
    assert!(text.starts_with("Composem ipsum color sit"));
    assert_eq!(item.icon().name, "ExpandLess");
    assert_eq!(item.icon_label(), "Show less");
}

#[test]
fn item_subscribers_see_every_toggle() {
    let item = GreetingItem::new("3");
    let seen = Rc::new(std::cell::RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    item.subscribe(move |expanded| seen_clone.borrow_mut().push(expanded));

    item.toggle();
    item.toggle();
    item.toggle();
    assert_eq!(*seen.borrow(), vec![true, false, true]);
}

#[test]
fn saver_restores_custom_names() {
    let names: Rc<[String]> = vec!["ann".to_string(), "bo".to_string()].into();
    let saver = AppShellSaver::new(names.clone());
    let shell = AppShell::with_names(names);
    shell.on_continue();
    shell
        .greetings()
        .and_then(|l| l.item("bo"))
        .expect("item")
        .toggle();

    let saved = saver.save(&shell).expect("saved");
    let restored = saver.restore(&saved).expect("restored");
    let list = restored.greetings().expect("list");
    assert_eq!(list.names(), ["ann", "bo"]);
    assert_eq!(list.expanded_names(), vec!["bo"]);
}

#[test]
fn custom_names_survive_recreate() {
    let names: Rc<[String]> = vec!["ann".to_string(), "bo".to_string()].into();
    let root = move |_: &mut Scheduler| {
        let shell = remember_app_shell_with(names.clone());
        MyApp(Modifier::new(), &shell)
    };
    let mut host = HeadlessHost::new(root);
    host.click(tags::CONTINUE).expect("continue");
    let mut host = host.recreate();
    assert!(host.frame().target(&tags::toggle("ann")).is_some());
    assert!(host.frame().target(&tags::toggle("0")).is_none());
}

#[test]
fn card_spring_is_medium_bouncy_low_stiffness() {
    assert_eq!(GreetingItem::SPRING.damping_ratio, 0.5);
    assert_eq!(GreetingItem::SPRING.stiffness, 200.0);
    assert!(GreetingItem::SPRING.is_bouncy());
}

#[test]
fn names_are_zero_to_n() {
    let names = make_names(NAME_COUNT);
    assert_eq!(names.len(), 1000);
    assert_eq!(names[0], "0");
    assert_eq!(names[999], "999");
    let unique: HashSet<&String> = names.iter().collect();
    assert_eq!(unique.len(), names.len());
    assert!(make_names(0).is_empty());
}

#[test]
fn item_state_is_independent_and_lazy() {
    let shell = AppShell::new();
    shell.on_continue();
    let list = shell.greetings().expect("list");
    assert_eq!(list.len(), 1000);
    assert_eq!(list.created(), 0);

    list.item("5").expect("item").toggle();
    assert!(list.item_at(5).expect("item").is_expanded());
    assert!(!list.item("4").expect("item").is_expanded());
    assert!(list.item("1000").is_none());
    assert_eq!(list.created(), 2);
    assert_eq!(list.expanded_names(), vec!["5"]);
}

#[test]
fn onboarding_screen_layout() {
    let mut sched = Scheduler::new();
    let frame = sched.compose(app(false));
    insta::assert_snapshot!(dump_tree(&frame.root), @r#"
    Surface
      Column
        Text "Welcome to the Basic Codelab!"
        Button #continue
          Text "Continue"
    "#);
}

#[test]
fn collapsed_card_layout() {
    let item = Rc::new(GreetingItem::new("5"));
    let card = Greeting(&item);
    insta::assert_snapshot!(dump_tree(&card), @r#"
    Surface #item:5
      Row
        Column
          Text "Hello, "
          Text "5" ExtraBold
        IconButton "Show more" 48x48 #toggle:5
          Icon ExpandMore
    "#);
    assert_eq!(
        card.children[0].modifier.animate_content_size,
        Some(GreetingItem::SPRING)
    );
}

#[test]
fn end_to_end_toggle_one_item() {
    let mut host = HeadlessHost::new(app(false));
    assert!(host.frame().root.texts().contains(&strings::WELCOME));
    assert!(host.frame().target(tags::GREETINGS).is_none());

    host.click(tags::CONTINUE).expect("continue");
    assert!(host.frame().target(tags::CONTINUE).is_none());
    assert!(host.frame().target(tags::GREETINGS).is_some());
    for name in ["0", "4", "5", "6"] {
        assert_eq!(target_label(&mut host, &tags::toggle(name)).as_deref(), Some("Show more"));
    }

    host.click(&tags::toggle("5")).expect("toggle");
    assert_eq!(target_label(&mut host, &tags::toggle("5")).as_deref(), Some("Show less"));
    assert_eq!(item_texts(&mut host, "5")[2], EXTENDED_TEXT.repeat(4));
    for name in ["0", "4", "6"] {
        assert_eq!(target_label(&mut host, &tags::toggle(name)).as_deref(), Some("Show more"));
        assert_eq!(item_texts(&mut host, name).len(), 2);
    }

    host.click(&tags::toggle("5")).expect("toggle");
    assert_eq!(item_texts(&mut host, "5").len(), 2);
}

#[test]
fn only_item_five_expanded_across_the_list() {
    let shell = Rc::new(AppShell::new());
    let mut sched = Scheduler::new();
    {
        let shell = shell.clone();
        sched.compose(move |_| MyApp(Modifier::new(), &shell));
    }
    shell.on_continue();
    let frame = {
        let shell = shell.clone();
        sched.compose(move |_| MyApp(Modifier::new(), &shell))
    };
    let list = shell.greetings().expect("list");
    // only the visible window got item state
    assert!(list.created() < 20, "created {}", list.created());

    frame
        .target(&tags::toggle("5"))
        .and_then(|t| t.on_click.clone())
        .expect("toggle target")();

    let expanded: Vec<usize> = (0..list.len())
        .filter(|&i| list.item_at(i).is_some_and(|it| it.is_expanded()))
        .collect();
    assert_eq!(expanded, vec![5]);
}

#[test]
fn recreate_keeps_screen_and_expansion() {
    let mut host = HeadlessHost::new(app(false));
    host.click(tags::CONTINUE).expect("continue");
    host.click(&tags::toggle("5")).expect("toggle");

    let saved = host.save_instance_state();
    assert!(saved.to_json().contains(r#""expanded":["5"]"#));

    let mut host = host.recreate();
    assert!(host.frame().target(tags::GREETINGS).is_some());
    assert_eq!(target_label(&mut host, &tags::toggle("5")).as_deref(), Some("Show less"));
    assert_eq!(target_label(&mut host, &tags::toggle("4")).as_deref(), Some("Show more"));
}

#[test]
fn onboarding_survives_recreate() {
    let host = HeadlessHost::new(app(false));
    let mut host = host.recreate();
    assert!(host.frame().target(tags::CONTINUE).is_some());
}

#[test]
fn restore_from_json() {
    let saved = SavedInstanceState::from_json(
        r#"{"app_shell":{"onboarding_visible":false,"expanded":["2","9999"]}}"#,
    )
    .expect("json");
    let mut host = HeadlessHost::restore(app(false), HostConfig::default(), saved);
    assert_eq!(target_label(&mut host, &tags::toggle("2")).as_deref(), Some("Show less"));
    assert_eq!(target_label(&mut host, &tags::toggle("3")).as_deref(), Some("Show more"));
}

#[test]
fn unreadable_saved_shell_starts_over() {
    let saved = SavedInstanceState::from_json(r#"{"app_shell":5}"#).expect("json");
    let mut host = HeadlessHost::restore(app(false), HostConfig::default(), saved);
    assert!(host.frame().target(tags::CONTINUE).is_some());
}

#[test]
fn saved_expansions_ignored_while_onboarding() {
    let saved = SavedInstanceState::from_json(
        r#"{"app_shell":{"onboarding_visible":true,"expanded":["1"]}}"#,
    )
    .expect("json");
    let mut host = HeadlessHost::restore(app(false), HostConfig::default(), saved);
    host.click(tags::CONTINUE).expect("continue");
    assert_eq!(target_label(&mut host, &tags::toggle("1")).as_deref(), Some("Show more"));
}

#[test]
fn stale_callbacks_are_noops() {
    let mut host = HeadlessHost::new(app(false));
    let stale_continue = host
        .frame()
        .target(tags::CONTINUE)
        .and_then(|t| t.on_click.clone())
        .expect("continue");
    let mut host = host.recreate();
    stale_continue();
    assert!(host.frame().target(tags::CONTINUE).is_some());

    host.click(tags::CONTINUE).expect("continue");
    let stale_toggle = host
        .frame()
        .target(&tags::toggle("1"))
        .and_then(|t| t.on_click.clone())
        .expect("toggle");
    let mut host = host.recreate();
    stale_toggle();
    assert_eq!(target_label(&mut host, &tags::toggle("1")).as_deref(), Some("Show more"));
}

#[test]
fn scrolling_moves_the_window() {
    let mut host = HeadlessHost::new(app(false));
    host.click(tags::CONTINUE).expect("continue");
    assert!(host.frame().target(&tags::toggle("30")).is_none());

    let leftover = host
        .scroll_by(tags::GREETINGS, 30.0 * ui::GREETING_HEIGHT_DP)
        .expect("scroll");
    assert_eq!(leftover, 0.0);
    assert!(host.frame().target(&tags::toggle("30")).is_some());
    assert!(host.frame().target(&tags::toggle("0")).is_none());

    // past the end
    let leftover = host.scroll_by(tags::GREETINGS, 1.0e6).expect("scroll");
    assert!(leftover > 0.0);
    assert!(host.frame().target(&tags::toggle("999")).is_some());
}

#[test]
fn unknown_target_reports_error() {
    let mut host = HeadlessHost::new(app(false));
    let err = host.click(&tags::toggle("5")).expect_err("not on screen yet");
    assert!(matches!(err, HostError::TargetNotFound(_)));
    assert_eq!(
        err.to_string(),
        "no target tagged 'toggle:5' in the current frame"
    );
}

#[test]
fn dark_theme_colors_cards() {
    let mut host = HeadlessHost::new(app(true));
    host.click(tags::CONTINUE).expect("continue");
    let dark = codelab_theme(true);
    let frame = host.frame();
    assert_eq!(frame.root.modifier.background, Some(dark.background));
    let card = frame.root.find_by_tag(&tags::item("0")).expect("card");
    assert_eq!(card.modifier.background, Some(theme::PURPLE_80));
    let name = &card.children[0].children[0].children[1];
    match &name.kind {
        ViewKind::Text { color, .. } => assert_eq!(*color, dark.on_primary),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn scripted_session_runs() {
    let host = run_headless_app(
        app(false),
        HostConfig::default(),
        &[
            Step::Click(tags::CONTINUE.into()),
            Step::Click(tags::toggle("5")),
            Step::Recreate,
            Step::ClickLabel("Show more".into()),
        ],
    );
    let mut host = host.expect("script");
    // the first collapsed card is "0"
    assert_eq!(target_label(&mut host, &tags::toggle("0")).as_deref(), Some("Show less"));
    assert_eq!(target_label(&mut host, &tags::toggle("5")).as_deref(), Some("Show less"));
}
