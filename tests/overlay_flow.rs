use concierge::app::focus::Element;
use concierge::app::input::{map_key, map_pipe, PIPE_NAME};
use concierge::app::{Action, HitTarget};
use concierge::ui::{render, render_root};
use concierge::{handle_event, initialize, AppState, Config, Event};
use zellij_tile::prelude::{BareKey, KeyWithModifier};

const ROWS: usize = 36;
const COLS: usize = 110;

fn rendered_state() -> AppState {
    let mut state = initialize(&Config::default());
    handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();
    state
}

fn key(bare: BareKey) -> KeyWithModifier {
    KeyWithModifier::new(bare)
}

fn press_key(state: &mut AppState, key: &KeyWithModifier) -> (bool, Vec<Action>) {
    let event = map_key(key).expect("key maps to an event");
    handle_event(state, &event).unwrap()
}

#[test]
fn shortcut_then_escape_round_trip() {
    let mut state = rendered_state();
    assert!(render_root(&state, ROWS, COLS).unwrap().portals().is_empty());

    let (should_render, actions) =
        press_key(&mut state, &key(BareKey::Char('i')).with_ctrl_modifier());
    assert!(should_render);
    assert_eq!(actions, vec![Action::RaiseSurface]);
    assert!(state.overlay_visible());
    assert_eq!(state.focused(), Some(Element::OverlayInput));
    assert_eq!(render_root(&state, ROWS, COLS).unwrap().portal_count(), 1);

    let (should_render, actions) = press_key(&mut state, &key(BareKey::Esc));
    assert!(should_render);
    assert_eq!(actions, vec![Action::LowerSurface]);
    assert!(!state.is_open());
    assert_eq!(state.focused(), None);
    assert_eq!(render_root(&state, ROWS, COLS).unwrap().portal_count(), 0);
}

#[test]
fn repeated_activation_keeps_a_single_overlay_layer() {
    let mut state = rendered_state();
    let shortcut = key(BareKey::Char('I')).with_super_modifier();

    press_key(&mut state, &shortcut);
    let (should_render, actions) = press_key(&mut state, &shortcut);
    handle_event(&mut state, &map_pipe(PIPE_NAME, Some("open")).unwrap()).unwrap();

    assert!(!should_render);
    assert!(actions.is_empty());
    assert_eq!(render_root(&state, ROWS, COLS).unwrap().portal_count(), 1);
}

#[test]
fn shortcut_opens_from_any_focus_location() {
    let mut state = rendered_state();
    let trigger = state.page_layout(ROWS, COLS).trigger;

    handle_event(&mut state, &Event::Click { row: trigger.y + 1, col: trigger.x + 4 }).unwrap();
    assert_eq!(state.focused(), Some(Element::OverlayInput));
    handle_event(&mut state, &Event::Escape).unwrap();
    assert_eq!(state.focused(), None);

    press_key(&mut state, &key(BareKey::Char('i')).with_ctrl_modifier());
    assert!(state.overlay_visible());
}

#[test]
fn typing_reaches_the_overlay_input_and_is_cleared_on_close() {
    let mut state = rendered_state();
    press_key(&mut state, &key(BareKey::Char('i')).with_ctrl_modifier());

    for c in "qzx".chars() {
        press_key(&mut state, &key(BareKey::Char(c)));
    }
    press_key(&mut state, &key(BareKey::Backspace));
    assert_eq!(state.overlay_query, "qz");
    assert!(render(&state, ROWS, COLS).unwrap().contains("qz"));

    assert_eq!(state.hit_test(ROWS, 1).unwrap(), vec![HitTarget::Backdrop]);
    handle_event(&mut state, &Event::Click { row: ROWS, col: 1 }).unwrap();

    assert!(!state.is_open());
    assert!(state.overlay_query.is_empty());
}

#[test]
fn shortcut_hint_disappears_while_open() {
    let mut state = rendered_state();
    assert!(render(&state, ROWS, COLS).unwrap().contains("⌘ I"));

    handle_event(&mut state, &map_pipe(PIPE_NAME, Some("toggle")).unwrap()).unwrap();
    assert!(!render(&state, ROWS, COLS).unwrap().contains("⌘ I"));

    handle_event(&mut state, &map_pipe(PIPE_NAME, Some("close")).unwrap()).unwrap();
    assert!(render(&state, ROWS, COLS).unwrap().contains("⌘ I"));
}
