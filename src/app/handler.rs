//! Event handling and state transition logic.
//!
//! This module turns host input into state transitions. It owns no state of
//! its own: [`handle_event`] pattern-matches the event, asks
//! [`AppState`] for the transition and returns whether the pane must be
//! redrawn along with the host actions to execute.
//!
//! # Pointer propagation
//!
//! A press is dispatched along the hit path returned by
//! [`AppState::hit_test`], innermost element first. The content panel stops
//! propagation, so presses inside it never reach the backdrop; the spacer is
//! non-interactive and lets presses through.
//!
//! ```text
//! [SuggestedQuery(2), Panel, Backdrop]   → stub, stops at Panel
//! [CloseControl, Panel, Backdrop]        → dismiss, stops
//! [Spacer, Backdrop]                     → dismiss
//! [Trigger, Page]                        → activate (pointer)
//! ```
//!
//! # Example
//!
//! ```rust
//! use concierge::app::{handle_event, AppState, Event};
//!
//! let mut state = AppState::default();
//! handle_event(&mut state, &Event::Viewport { rows: 24, cols: 80 })?;
//! let (should_render, _actions) = handle_event(&mut state, &Event::Shortcut)?;
//! assert!(should_render);
//! assert!(state.overlay_visible());
//! # Ok::<(), concierge::ConciergeError>(())
//! ```

use super::focus::Element;
use super::modes::{Activation, Dismissal, OverlayState};
use super::state::HitTarget;
use crate::app::{Action, AppState};
use crate::domain::error::Result;

/// Events delivered by the plugin runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The pane is about to be drawn at this size. The first one mounts the
    /// render root.
    Viewport {
        /// Pane height in rows.
        rows: usize,
        /// Pane width in columns.
        cols: usize,
    },
    /// The modifier+I shortcut (or an `open` pipe message).
    Shortcut,
    /// The Escape key (or a `close` pipe message).
    Escape,
    /// Opens when closed, closes when open (a `toggle` pipe message).
    Toggle,
    /// A primary pointer press at a 1-indexed cell.
    Click {
        /// Row of the press.
        row: usize,
        /// Column of the press.
        col: usize,
    },
    /// A printable character for the focused input.
    Char(char),
    /// Deletes the last character of the focused input.
    Backspace,
    /// The host reported whether the plugin pane is fullscreen.
    HostFullscreen(bool),
}

/// What the handler compares to decide whether a redraw is needed.
#[derive(PartialEq, Eq)]
struct Snapshot {
    overlay: OverlayState,
    visible: bool,
    focused: Option<Element>,
}

impl Snapshot {
    const fn of(state: &AppState) -> Self {
        Self {
            overlay: state.overlay(),
            visible: state.overlay_visible(),
            focused: state.focused(),
        }
    }
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`. `should_render` is `false` when the event left
/// the visible state untouched, e.g. Escape while already closed.
///
/// # Errors
///
/// Returns [`ConciergeError::RenderTargetUnavailable`] for a pointer press
/// that arrives before the first render. The runtime drops such events.
///
/// [`ConciergeError::RenderTargetUnavailable`]: crate::ConciergeError::RenderTargetUnavailable
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    let before = Snapshot::of(state);

    let (edited, actions) = match *event {
        Event::Viewport { rows, cols } => (false, state.mount(rows, cols)),
        Event::Shortcut => (false, state.activate(Activation::Keyboard)),
        Event::Escape => (false, state.dismiss(Dismissal::Escape)),
        Event::Toggle => {
            if state.is_open() {
                (false, state.dismiss(Dismissal::Escape))
            } else {
                (false, state.activate(Activation::Keyboard))
            }
        }
        Event::Click { row, col } => {
            let path = state.hit_test(row, col)?;
            (false, dispatch_press(state, &path))
        }
        Event::Char(c) => (state.type_char(c), vec![]),
        Event::Backspace => (state.backspace(), vec![]),
        Event::HostFullscreen(fullscreen) => {
            state.set_host_fullscreen(fullscreen);
            (false, vec![])
        }
    };

    let should_render = edited || before != Snapshot::of(state);

    tracing::debug!(
        should_render,
        action_count = actions.len(),
        open = state.is_open(),
        focused = ?state.focused(),
        "event handled"
    );

    Ok((should_render, actions))
}

/// Delivers a press to each element of `path`, innermost first, until one
/// stops propagation.
fn dispatch_press(state: &mut AppState, path: &[HitTarget]) -> Vec<Action> {
    let mut actions = vec![];

    for target in path {
        match *target {
            HitTarget::Trigger => {
                actions.extend(state.activate(Activation::Pointer));
            }
            HitTarget::Page | HitTarget::Spacer => {}
            HitTarget::OverlayInput => state.focus_overlay_input(),
            HitTarget::CloseControl => {
                actions.extend(state.dismiss(Dismissal::CloseControl));
                break;
            }
            HitTarget::SuggestedQuery(index) => {
                tracing::debug!(
                    index,
                    query = ?state.content.suggested_queries.get(index),
                    "suggested query pressed"
                );
            }
            HitTarget::RecentSearch(index) => {
                tracing::debug!(
                    index,
                    query = ?state.content.recent_searches.get(index),
                    "recent search pressed"
                );
            }
            HitTarget::TrendingCard(index) => {
                tracing::debug!(
                    index,
                    product = ?state.content.trending.get(index).map(|p| &p.name),
                    "trending card pressed"
                );
            }
            HitTarget::Panel => {
                tracing::trace!("press stopped at panel");
                break;
            }
            HitTarget::Backdrop => {
                actions.extend(state.dismiss(Dismissal::Backdrop));
            }
        }
    }

    actions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::input::{map_pipe, PIPE_NAME};
    use crate::ConciergeError;

    const ROWS: usize = 40;
    const COLS: usize = 120;

    fn open_state() -> AppState {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();
        handle_event(&mut state, &Event::Shortcut).unwrap();
        state
    }

    fn press(state: &mut AppState, row: usize, col: usize) -> (bool, Vec<Action>) {
        handle_event(state, &Event::Click { row, col }).unwrap()
    }

    #[test]
    fn escape_while_closed_is_a_silent_no_op() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();

        let (should_render, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(!state.is_open());
    }

    #[test]
    fn pipe_open_focuses_and_raises_the_plugin_pane() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();

        let open = map_pipe(PIPE_NAME, Some("open")).unwrap();
        let (should_render, actions) = handle_event(&mut state, &open).unwrap();
        assert!(should_render);
        assert_eq!(actions, vec![Action::RaiseSurface]);
        assert_eq!(state.focused(), Some(Element::OverlayInput));

        let close = map_pipe(PIPE_NAME, Some("close")).unwrap();
        let (_, actions) = handle_event(&mut state, &close).unwrap();
        assert_eq!(actions, vec![Action::LowerSurface]);
    }

    #[test]
    fn pipe_open_on_a_fullscreen_pane_only_takes_focus() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();

        let (should_render, actions) =
            handle_event(&mut state, &Event::HostFullscreen(true)).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());

        let open = map_pipe(PIPE_NAME, Some("open")).unwrap();
        let (_, actions) = handle_event(&mut state, &open).unwrap();
        assert_eq!(actions, vec![Action::FocusSurface]);

        let (_, actions) = handle_event(&mut state, &Event::Escape).unwrap();
        assert!(actions.is_empty());
    }

    #[test]
    fn second_shortcut_does_not_render_or_raise_again() {
        let mut state = open_state();
        let (should_render, actions) = handle_event(&mut state, &Event::Shortcut).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
        assert!(state.is_open());
    }

    #[test]
    fn backdrop_press_closes() {
        let mut state = open_state();
        let (should_render, actions) = press(&mut state, ROWS, 1);

        assert!(should_render);
        assert_eq!(actions, vec![Action::LowerSurface]);
        assert!(!state.is_open());
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn spacer_press_falls_through_to_backdrop() {
        let mut state = open_state();
        press(&mut state, 1, COLS / 2);
        assert!(!state.is_open());
    }

    #[test]
    fn panel_presses_do_not_reach_backdrop() {
        let mut state = open_state();
        let layout = state.overlay_layout(ROWS, COLS);

        let targets = [
            (layout.panel.y + 1, layout.panel.x + 1),
            (layout.suggestion_rows[0].y, layout.suggestion_rows[0].x),
            (layout.recent_rows[0].y, layout.recent_rows[0].x),
            (layout.cards[0].y, layout.cards[0].x),
            (layout.input.y + 1, layout.input.x + 3),
        ];

        for (row, col) in targets {
            let (_, actions) = press(&mut state, row, col);
            assert!(actions.is_empty(), "press at {row},{col}");
            assert!(state.is_open(), "press at {row},{col}");
        }
        assert_eq!(state.focused(), Some(Element::OverlayInput));
    }

    #[test]
    fn close_control_closes() {
        let mut state = open_state();
        let close = state.overlay_layout(ROWS, COLS).close_control;

        let (should_render, actions) = press(&mut state, close.y, close.x + 1);
        assert!(should_render);
        assert_eq!(actions, vec![Action::LowerSurface]);
        assert!(!state.is_open());
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn pointer_press_on_trigger_opens() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();
        let trigger = state.page_layout(ROWS, COLS).trigger;

        let (should_render, actions) = press(&mut state, trigger.y + 1, trigger.x + 1);
        assert!(should_render);
        assert_eq!(actions, vec![Action::RaiseSurface]);
        assert!(state.overlay_visible());
        assert_eq!(state.focused(), Some(Element::OverlayInput));
    }

    #[test]
    fn page_press_while_closed_changes_nothing() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();

        let (should_render, actions) = press(&mut state, 5, 5);
        assert!(!should_render);
        assert!(actions.is_empty());
    }

    #[test]
    fn press_before_first_render_is_an_error() {
        let mut state = AppState::default();
        let err = handle_event(&mut state, &Event::Click { row: 1, col: 1 }).unwrap_err();
        assert!(matches!(err, ConciergeError::RenderTargetUnavailable(_)));
        assert!(!state.is_open());
    }

    #[test]
    fn toggle_alternates() {
        let mut state = open_state();
        handle_event(&mut state, &Event::Toggle).unwrap();
        assert!(!state.is_open());
        handle_event(&mut state, &Event::Toggle).unwrap();
        assert!(state.overlay_visible());
    }

    #[test]
    fn typing_renders_only_when_an_input_is_focused() {
        let mut state = AppState::default();
        handle_event(&mut state, &Event::Viewport { rows: ROWS, cols: COLS }).unwrap();
        assert_eq!(handle_event(&mut state, &Event::Char('q')).unwrap(), (false, vec![]));

        handle_event(&mut state, &Event::Shortcut).unwrap();
        assert_eq!(handle_event(&mut state, &Event::Char('q')).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Backspace).unwrap(), (true, vec![]));
        assert_eq!(handle_event(&mut state, &Event::Backspace).unwrap(), (false, vec![]));
    }

    #[test]
    fn resize_after_mount_does_not_request_render() {
        let mut state = open_state();
        let (should_render, actions) =
            handle_event(&mut state, &Event::Viewport { rows: 50, cols: 150 }).unwrap();
        assert!(!should_render);
        assert!(actions.is_empty());
        assert_eq!(state.viewport(), Some((50, 150)));
    }
}
