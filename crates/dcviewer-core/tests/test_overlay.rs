#[allow(dead_code)]
mod common;

use common::pointer;
use dcviewer_core::overlay::{OverlayState, PointerButton, SelectionOverlay, SelectorConfig};
use dcviewer_core::render::Axes;

fn overlay() -> SelectionOverlay {
    SelectionOverlay::new(
        Axes {
            width: 64,
            height: 32,
        },
        SelectorConfig::default(),
    )
}

// ---------------------------------------------------------------------------
// Drag threshold
// ---------------------------------------------------------------------------

#[test]
fn test_drag_meeting_minimum_emits_one_event() {
    let mut o = overlay();
    o.press(pointer(10.0, 10.0, PointerButton::Primary));
    let sel = o
        .release(pointer(15.0, 15.0, PointerButton::Secondary))
        .expect("span of exactly 5px is accepted");

    assert_eq!(sel.start.x, 5.0);
    assert_eq!(sel.start.y, 5.0);
    assert_eq!(sel.end.x, 7.5);
    assert_eq!(sel.end.y, 7.5);
    assert_eq!(sel.press_button, PointerButton::Primary);
    assert_eq!(sel.release_button, PointerButton::Secondary);
    assert_eq!(o.state(), OverlayState::Idle);

    // A second release without a press emits nothing more.
    assert!(o.release(pointer(30.0, 30.0, PointerButton::Primary)).is_none());
}

#[test]
fn test_drag_below_minimum_in_x_is_discarded() {
    let mut o = overlay();
    o.press(pointer(10.0, 10.0, PointerButton::Primary));
    assert!(o.release(pointer(14.0, 40.0, PointerButton::Primary)).is_none());
    assert_eq!(o.state(), OverlayState::Idle);
    assert!(o.last_selection().is_none());
}

#[test]
fn test_drag_below_minimum_in_y_is_discarded() {
    let mut o = overlay();
    o.press(pointer(10.0, 10.0, PointerButton::Secondary));
    assert!(o.release(pointer(40.0, 12.0, PointerButton::Secondary)).is_none());
}

#[test]
fn test_reverse_drag_counts_absolute_span() {
    let mut o = overlay();
    o.press(pointer(40.0, 40.0, PointerButton::Primary));
    let sel = o.release(pointer(10.0, 10.0, PointerButton::Primary)).unwrap();
    assert_eq!(sel.extents(), (5.0, 20.0, 5.0, 20.0));
}

#[test]
fn test_custom_min_span() {
    let mut o = SelectionOverlay::new(
        Axes {
            width: 8,
            height: 8,
        },
        SelectorConfig {
            min_span_x: 20.0,
            min_span_y: 1.0,
        },
    );
    o.press(pointer(0.0, 0.0, PointerButton::Primary));
    assert!(o.release(pointer(10.0, 10.0, PointerButton::Primary)).is_none());
    o.press(pointer(0.0, 0.0, PointerButton::Primary));
    assert!(o.release(pointer(20.0, 1.0, PointerButton::Primary)).is_some());
}

#[test]
fn test_middle_button_is_not_a_trigger() {
    let mut o = overlay();
    o.press(pointer(0.0, 0.0, PointerButton::Middle));
    assert!(o.release(pointer(50.0, 50.0, PointerButton::Middle)).is_none());
}

#[test]
fn test_middle_release_does_not_end_drag() {
    let mut o = overlay();
    o.press(pointer(10.0, 10.0, PointerButton::Primary));
    assert!(o.release(pointer(40.0, 40.0, PointerButton::Middle)).is_none());
    assert!(matches!(o.state(), OverlayState::Armed { .. }));
    assert!(o.last_selection().is_none());

    let sel = o
        .release(pointer(40.0, 40.0, PointerButton::Secondary))
        .expect("drag still armed");
    assert_eq!(sel.press_button, PointerButton::Primary);
    assert_eq!(sel.release_button, PointerButton::Secondary);
}

// ---------------------------------------------------------------------------
// Toggling
// ---------------------------------------------------------------------------

#[test]
fn test_q_disables_and_a_enables() {
    let mut o = overlay();
    assert!(o.key('q'));
    assert_eq!(o.state(), OverlayState::Disabled);
    assert!(!o.is_active());
    assert!(o.key('a'));
    assert_eq!(o.state(), OverlayState::Idle);

    assert!(o.key('Q'));
    assert!(o.key('A'));
    assert!(o.is_active());
}

#[test]
fn test_other_keys_are_ignored() {
    let mut o = overlay();
    for key in ['a', 'A', 'x', 'z', ' ', '\u{1b}', '1'] {
        assert!(!o.key(key), "key {key:?} in Idle");
        assert_eq!(o.state(), OverlayState::Idle);
    }

    o.key('q');
    for key in ['q', 'Q', 'x', 'w', '\n'] {
        assert!(!o.key(key), "key {key:?} in Disabled");
        assert_eq!(o.state(), OverlayState::Disabled);
    }
}

#[test]
fn test_disabled_overlay_ignores_pointer() {
    let mut o = overlay();
    o.key('q');
    o.press(pointer(0.0, 0.0, PointerButton::Primary));
    assert_eq!(o.state(), OverlayState::Disabled);
    assert!(o.release(pointer(50.0, 50.0, PointerButton::Primary)).is_none());

    o.key('a');
    o.press(pointer(0.0, 0.0, PointerButton::Primary));
    assert!(o.release(pointer(50.0, 50.0, PointerButton::Primary)).is_some());
}
