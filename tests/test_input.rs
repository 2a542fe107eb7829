mod common;

use common::*;
use space_invaders::input::*;

fn adapter() -> InputAdapter {
    InputAdapter::new(FireTrigger::KeyUp)
}

fn feed(a: &mut InputAdapter, event: InputEvent) -> Option<Intent> {
    let s = running_state();
    a.translate(event, &s.ship, s.height)
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

#[test]
fn arrows_and_wasd_map_to_moves() {
    let mut a = adapter();
    for key in [Key::Left, Key::A] {
        assert_eq!(feed(&mut a, InputEvent::KeyDown(key)), Some(Intent::MoveLeft));
    }
    for key in [Key::Right, Key::D] {
        assert_eq!(feed(&mut a, InputEvent::KeyDown(key)), Some(Intent::MoveRight));
    }
}

#[test]
fn releasing_movement_keys_does_nothing() {
    let mut a = adapter();
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Left)), None);
    assert_eq!(feed(&mut a, InputEvent::KeyDown(Key::Other)), None);
}

#[test]
fn space_fires_on_release() {
    let mut a = adapter();
    assert_eq!(feed(&mut a, InputEvent::KeyDown(Key::Space)), None);
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), Some(Intent::Fire));
}

#[test]
fn space_release_without_press_does_not_fire() {
    let mut a = adapter();
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), None);

    feed(&mut a, InputEvent::KeyDown(Key::Space));
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), Some(Intent::Fire));
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), None);
}

#[test]
fn held_space_fires_once_on_release() {
    let mut a = adapter();
    for _ in 0..3 {
        assert_eq!(feed(&mut a, InputEvent::KeyDown(Key::Space)), None);
    }
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), Some(Intent::Fire));
}

#[test]
fn reset_forgets_a_pressed_fire_key() {
    let mut a = adapter();
    feed(&mut a, InputEvent::KeyDown(Key::Space));
    a.reset();
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), None);
}

#[test]
fn space_fires_on_press_without_release_events() {
    let mut a = InputAdapter::new(FireTrigger::KeyDown);
    assert_eq!(feed(&mut a, InputEvent::KeyDown(Key::Space)), Some(Intent::Fire));
    assert_eq!(feed(&mut a, InputEvent::KeyUp(Key::Space)), None);
}

// ── Touch ─────────────────────────────────────────────────────────────────────

#[test]
fn tap_near_ship_fires() {
    let s = running_state(); // height 600, ship height 75
    let mut a = adapter();
    let tap = InputEvent::TouchStart { x: 50.0, y: 560.0 };
    assert_eq!(a.translate(tap, &s.ship, s.height), Some(Intent::Fire));
}

#[test]
fn tap_above_ship_band_does_not_fire() {
    let s = running_state();
    let mut a = adapter();
    let tap = InputEvent::TouchStart { x: 50.0, y: 525.0 }; // exactly 600 - 75
    assert_eq!(a.translate(tap, &s.ship, s.height), None);
}

#[test]
fn drag_reports_delta_from_previous_touch() {
    let s = running_state();
    let mut a = adapter();
    a.translate(InputEvent::TouchStart { x: 100.0, y: 100.0 }, &s.ship, s.height);
    assert_eq!(
        a.translate(InputEvent::TouchMove { x: 130.0 }, &s.ship, s.height),
        Some(Intent::Drag(30.0))
    );
    assert_eq!(
        a.translate(InputEvent::TouchMove { x: 110.0 }, &s.ship, s.height),
        Some(Intent::Drag(-20.0))
    );
}

#[test]
fn drag_without_touch_is_ignored() {
    let s = running_state();
    let mut a = adapter();
    assert_eq!(a.translate(InputEvent::TouchMove { x: 130.0 }, &s.ship, s.height), None);

    a.translate(InputEvent::TouchStart { x: 100.0, y: 100.0 }, &s.ship, s.height);
    a.translate(InputEvent::TouchEnd, &s.ship, s.height);
    assert_eq!(a.translate(InputEvent::TouchMove { x: 130.0 }, &s.ship, s.height), None);
}

// ── Queue ─────────────────────────────────────────────────────────────────────

#[test]
fn queue_drains_oldest_first() {
    let mut q = IntentQueue::new();
    q.push(Intent::MoveLeft);
    q.push(Intent::Fire);
    q.push(Intent::Drag(4.0));
    assert_eq!(q.len(), 3);
    assert_eq!(q.drain(), vec![Intent::MoveLeft, Intent::Fire, Intent::Drag(4.0)]);
    assert!(q.is_empty());
}
