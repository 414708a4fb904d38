use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::*;

fn button(on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            on_click: Some(Rc::new(on_click)),
        },
    )
}

#[test]
fn test_signal_basic() {
    let sig = signal(42);
    assert_eq!(sig.get(), 42);

    sig.set(100);
    assert_eq!(sig.get(), 100);

    sig.update(|v| *v += 1);
    assert_eq!(sig.get(), 101);
}

#[test]
fn test_signal_subscription() {
    let sig = signal(0);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let seen_clone = seen.clone();
    sig.subscribe(move |v| seen_clone.borrow_mut().push(*v));

    sig.set(42);
    sig.update(|v| *v += 1);
    assert_eq!(*seen.borrow(), vec![42, 43]);
}

#[test]
fn test_signal_write_invalidates() {
    let before = generation();
    let sig = signal(false);
    assert_eq!(generation(), before);
    sig.set(true);
    assert_eq!(generation(), before + 1);
}

#[test]
fn test_subscriber_may_write_its_own_signal() {
    let sig = signal(0);
    let weak = sig.downgrade();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_clone = seen.clone();
    sig.subscribe(move |v| {
        seen_clone.borrow_mut().push(*v);
        if *v == 1 {
            if let Some(s) = weak.upgrade() {
                s.set(2)
            }
        }
    });

    sig.set(1);
    assert_eq!(sig.get(), 2);
    assert_eq!(*seen.borrow(), vec![1, 2]);
}

#[test]
fn test_write_inside_with_lands_after_read() {
    let sig = signal(String::from("a"));
    let seen = Rc::new(Cell::new(0));
    let seen_clone = seen.clone();
    sig.subscribe(move |_| seen_clone.set(seen_clone.get() + 1));

    let len = sig.with(|s| {
        sig.set(String::from("bb"));
        s.len()
    });
    assert_eq!(len, 1);
    assert_eq!(sig.get(), "bb");
    assert_eq!(seen.get(), 1);
}

#[test]
fn test_scheduler_staleness_is_per_scheduler() {
    let sig = signal(0);
    let mut a = Scheduler::new();
    let mut b = Scheduler::new();
    assert!(a.is_stale());
    a.compose(|_| View::new(0, ViewKind::Box));
    b.compose(|_| View::new(0, ViewKind::Box));
    assert!(!a.is_stale());

    sig.set(1);
    b.compose(|_| View::new(0, ViewKind::Box));
    assert!(!b.is_stale());
    assert!(a.is_stale());
}

#[test]
fn test_write_during_compose_leaves_scheduler_stale() {
    let sig = signal(0);
    let mut sched = Scheduler::new();
    sched.compose(|_| {
        sig.set(1);
        View::new(0, ViewKind::Box)
    });
    assert!(sched.is_stale());
}

#[test]
fn test_weak_signal_dies_with_owner() {
    let sig = signal(1);
    let weak = sig.downgrade();
    assert_eq!(weak.upgrade().map(|s| s.get()), Some(1));
    drop(sig);
    assert!(weak.upgrade().is_none());
}

#[test]
fn test_scope_explicit_dispose() {
    let cleaned_up = Rc::new(Cell::new(0));

    let scope = Scope::new();
    let c = cleaned_up.clone();
    scope.add_disposer(move || c.set(c.get() + 1));

    assert_eq!(cleaned_up.get(), 0);
    scope.clone().dispose();
    assert_eq!(cleaned_up.get(), 1);
    // second dispose is a no-op
    scope.dispose();
    assert_eq!(cleaned_up.get(), 1);
}

#[test]
fn test_key_based_remember() {
    COMPOSER.with(|c| c.borrow_mut().keyed_slots.clear());

    let val1 = remember_with_key("test", || 42);
    let val2 = remember_with_key("test", || 100);

    // Same instance, init only ran once
    assert_eq!(*val1, 42);
    assert_eq!(*val2, 42);
}

#[test]
fn test_slot_remember_survives_recomposition() {
    let mut sched = Scheduler::new();
    let inits = Rc::new(Cell::new(0));

    for _ in 0..3 {
        let inits = inits.clone();
        sched.compose(move |_| {
            let n = remember(|| {
                inits.set(inits.get() + 1);
                signal(7)
            });
            assert_eq!(n.get(), 7);
            View::new(0, ViewKind::Box)
        });
    }
    assert_eq!(inits.get(), 1);
}

#[test]
fn test_compositions_do_not_share_slots() {
    let mut a = Scheduler::new();
    let mut b = Scheduler::new();

    a.compose(|_| {
        remember_with_key("n", || 1);
        View::new(0, ViewKind::Box)
    });
    b.compose(|_| {
        let n = remember_with_key("n", || 2);
        assert_eq!(*n, 2);
        View::new(0, ViewKind::Box)
    });
}

#[test]
fn test_compose_stamps_ids_and_collects_targets() {
    let mut sched = Scheduler::new();
    let frame = sched.compose(|_| {
        View::new(0, ViewKind::Column).with_children(vec![
            View::new(0, ViewKind::Box).modifier(Modifier::new().test_tag("header")),
            button(|| {}).modifier(Modifier::new().test_tag("go")),
        ])
    });

    assert_eq!(frame.root.id, 1);
    assert_eq!(frame.root.children[1].id, 3);
    let tags: Vec<_> = frame.targets.iter().filter_map(|t| t.tag.as_deref()).collect();
    assert_eq!(tags, vec!["header", "go"]);
    assert!(frame.target("go").and_then(|t| t.on_click.as_ref()).is_some());
    assert!(frame.target("header").and_then(|t| t.on_click.as_ref()).is_none());
}

#[test]
fn test_saveable_round_trip_through_recreation() {
    let root = |_: &mut Scheduler| {
        let flag = remember_saveable("flag", || true);
        let weak = flag.downgrade();
        button(move || {
            if let Some(f) = weak.upgrade() {
                f.set(false)
            }
        })
        .modifier(Modifier::new().test_tag(format!("flag={}", flag.get())))
    };

    let mut sched = Scheduler::new();
    let frame = sched.compose(root);
    let click = frame.target("flag=true").and_then(|t| t.on_click.clone());
    click.expect("button")();

    let saved = sched.save_instance_state();
    assert_eq!(saved.get("flag"), Some(&serde_json::json!(false)));
    sched.dispose();

    let mut restored = Scheduler::restoring(saved);
    let frame = restored.compose(root);
    assert!(frame.target("flag=false").is_some());
}

#[test]
fn test_stale_callback_after_dispose_is_noop() {
    let mut sched = Scheduler::new();
    let frame = sched.compose(|_| {
        let n = remember_saveable("n", || 0u32);
        let weak = n.downgrade();
        button(move || {
            if let Some(n) = weak.upgrade() {
                n.update(|v| *v += 1)
            }
        })
        .modifier(Modifier::new().test_tag("inc"))
    });
    let click = frame.target("inc").and_then(|t| t.on_click.clone());
    sched.dispose();

    let before = generation();
    click.expect("button")();
    assert_eq!(generation(), before);
}

#[test]
fn test_unconsumed_saved_values_are_kept() {
    let saved = SavedInstanceState::from_json(r#"{"later": 5}"#).expect("valid");
    let mut sched = Scheduler::restoring(saved);
    sched.compose(|_| View::new(0, ViewKind::Box));
    assert_eq!(
        sched.save_instance_state().get("later"),
        Some(&serde_json::json!(5))
    );
}

#[test]
fn test_saved_state_json() {
    let saved = SavedInstanceState::from_json(r#"{"a": true, "b": [1, 2]}"#).expect("valid");
    assert_eq!(saved.len(), 2);
    assert_eq!(saved.keys().collect::<Vec<_>>(), vec!["a", "b"]);

    let again = SavedInstanceState::from_json(&saved.to_json()).expect("round trip");
    assert_eq!(again, saved);

    assert!(matches!(
        SavedInstanceState::from_json("[1]"),
        Err(SaveStateError::NotAnObject)
    ));
    assert!(matches!(
        SavedInstanceState::from_json("{"),
        Err(SaveStateError::Malformed(_))
    ));
}

#[test]
fn test_restore_with_wrong_type_falls_back_to_init() {
    let saved = SavedInstanceState::from_json(r#"{"flag": "yes"}"#).expect("valid");
    let mut sched = Scheduler::restoring(saved);
    sched.compose(|_| {
        let flag = remember_saveable("flag", || true);
        assert!(flag.get());
        View::new(0, ViewKind::Box)
    });
}

#[test]
fn test_scoped_effect_cleanup_runs_on_dispose() {
    let disposed = Rc::new(Cell::new(false));
    let mut sched = Scheduler::new();
    let d = disposed.clone();
    sched.compose(move |_| {
        let d = d.clone();
        remember(move || {
            scoped_effect(move || Box::new(move || d.set(true)));
        });
        View::new(0, ViewKind::Box)
    });
    assert!(!disposed.get());
    sched.dispose();
    assert!(disposed.get());
}

#[test]
fn test_color_from_hex() {
    let c = Color::from_hex("#FF5733");
    assert_eq!(c, Color(255, 87, 51, 255));

    let c_alpha = Color::from_hex("#FF5733AA");
    assert_eq!(c_alpha, Color(255, 87, 51, 170));

    assert_eq!(Color::from_argb(0xFFD0BCFF), Color::from_hex("#D0BCFF"));
    assert_eq!(Color::from_hex("#D0BCFF").to_hex(), "#D0BCFF");
}

#[test]
fn test_locals_nest_and_pop() {
    let custom = Theme {
        primary: Color::BLACK,
        ..Theme::default()
    };
    with_theme(custom, || {
        assert_eq!(theme().primary, Color::BLACK);
        with_density(Density { scale: 2.0 }, || {
            assert_eq!(theme().primary, Color::BLACK);
            assert_eq!(dp_to_px(4.0), 8.0);
        });
        assert_eq!(dp_to_px(4.0), 4.0);
        let large = Typography {
            body_large: TextStyleSpec {
                font_size: 20.0,
                font_weight: FontWeight::Medium,
            },
            ..Typography::default()
        };
        with_typography(large, || {
            assert_eq!(typography().body_large.font_size, 20.0);
            assert_eq!(theme().primary, Color::BLACK);
        });
    });
    assert_eq!(theme(), Theme::default());
    assert_eq!(typography().body_large.font_size, 16.0);
}

#[test]
fn test_spring_presets() {
    let s = SpringSpec::new(
        SpringSpec::DAMPING_RATIO_MEDIUM_BOUNCY,
        SpringSpec::STIFFNESS_LOW,
    );
    assert!(s.is_bouncy());
    assert!(!SpringSpec::default().is_bouncy());
}

#[test]
fn test_padding_accumulates() {
    let m = Modifier::new().padding_vertical(4.0).padding_horizontal(8.0);
    assert_eq!(
        m.padding,
        Some(PaddingValues {
            left: 8.0,
            right: 8.0,
            top: 4.0,
            bottom: 4.0,
        })
    );
}
