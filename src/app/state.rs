//! Application state and the overlay transitions.
//!
//! [`AppState`] is the single owner of the overlay flag. Nothing outside this
//! module can set it: the event handler requests transitions through
//! [`AppState::activate`] and [`AppState::dismiss`], and every dismissal entry
//! point shares the same close routine.
//!
//! # State Components
//!
//! - **Overlay**: [`OverlayState`], open or closed
//! - **Mount guard**: set by the first render, never cleared
//! - **Focus**: which input, if any, receives typed characters
//! - **Queries**: text typed into the trigger and overlay inputs
//! - **Viewport**: last pane size, used to hit-test pointer presses
//!
//! # Invariant
//!
//! The overlay is drawn if and only if it is open *and* mounted. When the
//! overlay first becomes visible its input takes focus; when it is dismissed
//! the trigger input is blurred and the overlay input disappears with it.
//!
//! # Example
//!
//! ```rust
//! use concierge::app::{Activation, AppState};
//! use concierge::app::focus::Element;
//!
//! let mut state = AppState::default();
//! state.mount(24, 80);
//! state.activate(Activation::Keyboard);
//!
//! assert!(state.overlay_visible());
//! assert_eq!(state.focused(), Some(Element::OverlayInput));
//! ```

use super::actions::Action;
use super::focus::{Element, FocusHandle, FocusRing};
use super::modes::{Activation, Dismissal, OverlayState};
use super::props::TriggerProps;
use crate::domain::error::{ConciergeError, Result};
use crate::domain::StaticContent;
use crate::ui::layout::{OverlayLayout, PageLayout};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    CardInfo, HeaderInfo, InputInfo, NavItem, OverlayInfo, TriggerInfo, UIViewModel,
};

/// Element under a pointer press.
///
/// [`AppState::hit_test`] returns these innermost first, followed by each
/// enclosing element, which is the order a press propagates in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Page background, header included.
    Page,
    /// The compact trigger container.
    Trigger,
    /// Full-pane overlay backdrop.
    Backdrop,
    /// Non-interactive band above the panel.
    Spacer,
    /// The overlay content panel.
    Panel,
    /// The panel's close control.
    CloseControl,
    /// The overlay search input.
    OverlayInput,
    /// A recent search row, by index.
    RecentSearch(usize),
    /// A trending product card, by index.
    TrendingCard(usize),
    /// A suggested query row, by index.
    SuggestedQuery(usize),
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    overlay: OverlayState,
    mounted: bool,
    raised: bool,
    host_fullscreen: bool,
    focus: FocusRing,
    trigger_input: FocusHandle,
    overlay_input: FocusHandle,
    viewport: Option<(usize, usize)>,

    /// Text typed into the trigger input.
    pub trigger_query: String,

    /// Text typed into the overlay input. Cleared whenever the overlay closes.
    pub overlay_query: String,

    /// Trigger attributes from the host configuration.
    pub props: TriggerProps,

    /// Read-only display content.
    pub content: StaticContent,

    /// Colour scheme for rendering.
    pub theme: Theme,

    /// Whether opening the overlay should raise the plugin pane above the tab.
    pub raise_on_open: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TriggerProps::default(), StaticContent::default(), Theme::default())
    }
}

impl AppState {
    /// Creates a closed, unmounted state.
    #[must_use]
    pub fn new(props: TriggerProps, content: StaticContent, theme: Theme) -> Self {
        Self {
            overlay: OverlayState::Closed,
            mounted: false,
            raised: false,
            host_fullscreen: false,
            focus: FocusRing::default(),
            trigger_input: FocusHandle::new(Element::TriggerInput),
            overlay_input: FocusHandle::new(Element::OverlayInput),
            viewport: None,
            trigger_query: String::new(),
            overlay_query: String::new(),
            props,
            content,
            theme,
            raise_on_open: true,
        }
    }

    /// Current overlay state.
    #[must_use]
    pub const fn overlay(&self) -> OverlayState {
        self.overlay
    }

    /// Whether the overlay is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Whether the render root exists.
    #[must_use]
    pub const fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Whether the overlay is part of the rendered output.
    #[must_use]
    pub const fn overlay_visible(&self) -> bool {
        self.overlay.is_open() && self.mounted
    }

    /// Whether the plugin pane is currently raised for the overlay.
    #[must_use]
    pub const fn is_raised(&self) -> bool {
        self.raised
    }

    /// Records whether the host currently shows the plugin pane fullscreen.
    ///
    /// A pane that is already fullscreen when the overlay opens is not raised,
    /// and so is not lowered when it closes.
    pub fn set_host_fullscreen(&mut self, fullscreen: bool) {
        if self.host_fullscreen != fullscreen {
            tracing::debug!(fullscreen, raised = self.raised, "host fullscreen changed");
        }
        self.host_fullscreen = fullscreen;
    }

    /// The element receiving typed characters.
    #[must_use]
    pub const fn focused(&self) -> Option<Element> {
        self.focus.focused()
    }

    /// Whether the trigger shows its shortcut glyph.
    #[must_use]
    pub const fn shows_shortcut_hint(&self) -> bool {
        !self.overlay.is_open()
    }

    /// Last known pane size as `(rows, cols)`.
    #[must_use]
    pub const fn viewport(&self) -> Option<(usize, usize)> {
        self.viewport
    }

    /// Records the pane size. The first call mounts the render root.
    ///
    /// If the overlay was opened before the first render, it appears now and
    /// its input takes focus.
    pub fn mount(&mut self, rows: usize, cols: usize) -> Vec<Action> {
        self.viewport = Some((rows, cols));

        if self.mounted {
            return vec![];
        }

        tracing::debug!(rows, cols, "render root mounted");
        self.mounted = true;

        if self.overlay.is_open() {
            self.overlay_did_mount()
        } else {
            vec![]
        }
    }

    /// Opens the overlay.
    ///
    /// The trigger input takes focus first, as the press or shortcut targets
    /// it; once the overlay is mounted its own input takes over. Activating
    /// an open overlay changes nothing.
    pub fn activate(&mut self, via: Activation) -> Vec<Action> {
        if self.overlay.is_open() {
            tracing::debug!(?via, "overlay already open");
            return vec![];
        }

        tracing::debug!(?via, mounted = self.mounted, "opening overlay");
        self.overlay = OverlayState::Open;
        self.trigger_input.focus(&mut self.focus);

        if self.mounted {
            self.overlay_did_mount()
        } else {
            vec![]
        }
    }

    /// Closes the overlay. Every dismissal path ends here.
    ///
    /// Dismissing a closed overlay changes nothing.
    pub fn dismiss(&mut self, reason: Dismissal) -> Vec<Action> {
        if !self.overlay.is_open() {
            tracing::trace!(?reason, "overlay already closed");
            return vec![];
        }

        tracing::debug!(?reason, "closing overlay");
        self.overlay = OverlayState::Closed;
        self.overlay_query.clear();
        self.overlay_input.blur(&mut self.focus);
        self.trigger_input.blur(&mut self.focus);

        if self.raised {
            self.raised = false;
            vec![Action::LowerSurface]
        } else {
            vec![]
        }
    }

    /// Moves focus into the overlay input if the overlay is visible.
    pub fn focus_overlay_input(&mut self) {
        if self.overlay_visible() {
            self.overlay_input.focus(&mut self.focus);
        }
    }

    /// Appends a character to the focused input.
    ///
    /// Returns `false` when no input has focus.
    pub fn type_char(&mut self, c: char) -> bool {
        match self.focused() {
            Some(Element::OverlayInput) => self.overlay_query.push(c),
            Some(Element::TriggerInput) => self.trigger_query.push(c),
            None => return false,
        }
        true
    }

    /// Removes the last character of the focused input.
    ///
    /// Returns `false` when no input has focus or the input was empty.
    pub fn backspace(&mut self) -> bool {
        let query = match self.focused() {
            Some(Element::OverlayInput) => &mut self.overlay_query,
            Some(Element::TriggerInput) => &mut self.trigger_query,
            None => return false,
        };
        query.pop().is_some()
    }

    /// Page layout for the given pane size.
    #[must_use]
    pub fn page_layout(&self, rows: usize, cols: usize) -> PageLayout {
        PageLayout::compute(rows, cols, &self.props.container_style)
    }

    /// Overlay layout for the given pane size.
    #[must_use]
    pub fn overlay_layout(&self, rows: usize, cols: usize) -> OverlayLayout {
        OverlayLayout::compute(
            rows,
            cols,
            self.content.recent_searches.len(),
            self.content.trending.len(),
            self.content.suggested_queries.len(),
        )
    }

    /// Returns the elements under the cell at `(row, col)`, innermost first.
    ///
    /// Coordinates are 1-indexed. While the overlay is visible it covers the
    /// whole pane, so the page and trigger below it are never hit.
    ///
    /// # Errors
    ///
    /// Returns [`ConciergeError::RenderTargetUnavailable`] before the first
    /// render, when no geometry exists yet.
    pub fn hit_test(&self, row: usize, col: usize) -> Result<Vec<HitTarget>> {
        let (rows, cols) = self
            .viewport
            .filter(|_| self.mounted)
            .ok_or(ConciergeError::RenderTargetUnavailable("hit test before first render"))?;

        if !self.overlay_visible() {
            let page = self.page_layout(rows, cols);
            if page.trigger.contains(row, col) {
                return Ok(vec![HitTarget::Trigger, HitTarget::Page]);
            }
            if page.viewport.contains(row, col) {
                return Ok(vec![HitTarget::Page]);
            }
            return Ok(vec![]);
        }

        let overlay = self.overlay_layout(rows, cols);
        if !overlay.backdrop.contains(row, col) {
            return Ok(vec![]);
        }

        if overlay.panel.contains(row, col) {
            let inner = if overlay.close_control.contains(row, col) {
                Some(HitTarget::CloseControl)
            } else if overlay.input.contains(row, col) {
                Some(HitTarget::OverlayInput)
            } else if let Some(i) = overlay.suggestion_rows.iter().position(|r| r.contains(row, col)) {
                Some(HitTarget::SuggestedQuery(i))
            } else if let Some(i) = overlay.recent_rows.iter().position(|r| r.contains(row, col)) {
                Some(HitTarget::RecentSearch(i))
            } else {
                overlay
                    .cards
                    .iter()
                    .position(|r| r.contains(row, col))
                    .map(HitTarget::TrendingCard)
            };

            return Ok(inner
                .into_iter()
                .chain([HitTarget::Panel, HitTarget::Backdrop])
                .collect());
        }

        if overlay.spacer.contains(row, col) {
            return Ok(vec![HitTarget::Spacer, HitTarget::Backdrop]);
        }

        Ok(vec![HitTarget::Backdrop])
    }

    /// Computes a renderable view model from the current state.
    ///
    /// The overlay section is present only while the overlay is visible; the
    /// trigger's shortcut hint only while it is closed.
    #[must_use]
    pub fn compute_viewmodel(&self) -> UIViewModel {
        UIViewModel {
            header: self.compute_header(),
            trigger: self.compute_trigger(),
            overlay: self.overlay_visible().then(|| self.compute_overlay()),
        }
    }

    fn overlay_did_mount(&mut self) -> Vec<Action> {
        self.overlay_input.focus(&mut self.focus);

        if self.raise_on_open && !self.raised && !self.host_fullscreen {
            self.raised = true;
            vec![Action::RaiseSurface]
        } else {
            vec![Action::FocusSurface]
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        HeaderInfo {
            brand: self.content.brand.clone(),
            nav: self
                .content
                .nav_links
                .iter()
                .map(|link| NavItem {
                    label: link.label.clone(),
                    active: link.active,
                })
                .collect(),
        }
    }

    fn compute_trigger(&self) -> TriggerInfo {
        let is_placeholder = self.trigger_query.is_empty();
        TriggerInfo {
            input: InputInfo {
                text: if is_placeholder {
                    self.props.placeholder.clone()
                } else {
                    self.trigger_query.clone()
                },
                is_placeholder,
                is_focused: self.trigger_input.is_focused(&self.focus),
            },
            label: self.props.label.clone(),
            shortcut_hint: self
                .shows_shortcut_hint()
                .then(|| self.props.shortcut_hint.clone()),
        }
    }

    fn compute_overlay(&self) -> OverlayInfo {
        let is_placeholder = self.overlay_query.is_empty();
        OverlayInfo {
            label: self.props.label.clone(),
            input: InputInfo {
                text: if is_placeholder {
                    self.props.placeholder.clone()
                } else {
                    self.overlay_query.clone()
                },
                is_placeholder,
                is_focused: self.overlay_input.is_focused(&self.focus),
            },
            recent_searches: self.content.recent_searches.clone(),
            trending: self
                .content
                .trending
                .iter()
                .map(|product| CardInfo {
                    name: product.name.clone(),
                    price: product.price.clone(),
                    image: product.image_label().to_string(),
                })
                .collect(),
            suggested_queries: self.content.suggested_queries.clone(),
            hints: "Esc: close  Click outside: dismiss  Ctrl+I: search".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mounted_state() -> AppState {
        let mut state = AppState::default();
        state.mount(40, 120);
        state
    }

    #[test]
    fn starts_closed_unmounted_and_unfocused() {
        let state = AppState::default();
        assert_eq!(state.overlay(), OverlayState::Closed);
        assert!(!state.is_mounted());
        assert_eq!(state.focused(), None);
        assert!(state.shows_shortcut_hint());
    }

    #[test]
    fn mount_happens_once() {
        let mut state = AppState::default();
        assert!(state.mount(10, 10).is_empty());
        assert!(state.is_mounted());
        state.mount(20, 30);
        assert!(state.is_mounted());
        assert_eq!(state.viewport(), Some((20, 30)));
    }

    #[test]
    fn keyboard_activation_focuses_trigger_until_overlay_mounts() {
        let mut state = AppState::default();

        let actions = state.activate(Activation::Keyboard);
        assert!(actions.is_empty());
        assert!(state.is_open());
        assert!(!state.overlay_visible());
        assert_eq!(state.focused(), Some(Element::TriggerInput));

        let actions = state.mount(24, 80);
        assert_eq!(actions, vec![Action::RaiseSurface]);
        assert!(state.overlay_visible());
        assert_eq!(state.focused(), Some(Element::OverlayInput));
    }

    #[test]
    fn activation_is_idempotent() {
        let mut state = mounted_state();
        assert_eq!(state.activate(Activation::Pointer), vec![Action::RaiseSurface]);
        state.type_char('x');

        assert!(state.activate(Activation::Keyboard).is_empty());
        assert!(state.is_open());
        assert_eq!(state.focused(), Some(Element::OverlayInput));
        assert_eq!(state.overlay_query, "x");
    }

    #[test]
    fn dismissal_is_idempotent() {
        let mut state = mounted_state();
        assert!(state.dismiss(Dismissal::Escape).is_empty());
        assert!(!state.is_open());
        assert_eq!(state.focused(), None);
    }

    #[test]
    fn every_dismissal_path_reaches_the_same_end_state() {
        for reason in [Dismissal::Escape, Dismissal::Backdrop, Dismissal::CloseControl] {
            let mut state = mounted_state();
            state.activate(Activation::Keyboard);
            state.type_char('l');

            let actions = state.dismiss(reason);

            assert_eq!(actions, vec![Action::LowerSurface], "{reason:?}");
            assert_eq!(state.overlay(), OverlayState::Closed);
            assert!(!state.overlay_visible());
            assert_eq!(state.focused(), None);
            assert!(state.overlay_query.is_empty());
            assert!(!state.is_raised());
        }
    }

    #[test]
    fn raise_can_be_disabled() {
        let mut state = mounted_state();
        state.raise_on_open = false;
        assert_eq!(state.activate(Activation::Keyboard), vec![Action::FocusSurface]);
        assert!(state.dismiss(Dismissal::Escape).is_empty());
    }

    #[test]
    fn pane_already_fullscreen_is_left_alone() {
        let mut state = mounted_state();
        state.set_host_fullscreen(true);

        assert_eq!(state.activate(Activation::Keyboard), vec![Action::FocusSurface]);
        assert!(!state.is_raised());
        assert!(state.dismiss(Dismissal::Escape).is_empty());
    }

    #[test]
    fn raised_pane_is_lowered_even_after_host_reports_fullscreen() {
        let mut state = mounted_state();
        assert_eq!(state.activate(Activation::Keyboard), vec![Action::RaiseSurface]);

        state.set_host_fullscreen(true);

        assert_eq!(state.dismiss(Dismissal::Backdrop), vec![Action::LowerSurface]);
        state.set_host_fullscreen(false);
        assert_eq!(state.activate(Activation::Pointer), vec![Action::RaiseSurface]);
    }

    #[test]
    fn shortcut_hint_follows_overlay_state() {
        let mut state = mounted_state();
        assert!(state.compute_viewmodel().trigger.shortcut_hint.is_some());

        state.activate(Activation::Keyboard);
        assert!(state.compute_viewmodel().trigger.shortcut_hint.is_none());

        state.dismiss(Dismissal::Backdrop);
        assert_eq!(
            state.compute_viewmodel().trigger.shortcut_hint.as_deref(),
            Some("⌘ I")
        );
    }

    #[test]
    fn typing_goes_to_the_focused_input_only() {
        let mut state = mounted_state();
        assert!(!state.type_char('a'));
        assert!(!state.backspace());

        state.activate(Activation::Keyboard);
        assert!(state.type_char('a'));
        assert!(state.type_char('b'));
        assert!(state.backspace());
        assert_eq!(state.overlay_query, "a");
        assert!(state.trigger_query.is_empty());
    }

    #[test]
    fn viewmodel_has_overlay_only_when_visible() {
        let mut state = AppState::default();
        state.activate(Activation::Keyboard);
        assert!(state.compute_viewmodel().overlay.is_none());

        state.mount(24, 80);
        let vm = state.compute_viewmodel();
        let overlay = vm.overlay.expect("overlay visible");
        assert!(overlay.input.is_focused);
        assert!(overlay.input.is_placeholder);
        assert_eq!(overlay.input.text, "Search");
        assert_eq!(overlay.trending.len(), state.content.trending.len());
    }

    #[test]
    fn hit_test_requires_a_render_root() {
        let state = AppState::default();
        assert!(matches!(
            state.hit_test(1, 1),
            Err(ConciergeError::RenderTargetUnavailable(_))
        ));
    }

    #[test]
    fn hit_test_closed_finds_trigger() {
        let state = mounted_state();
        let trigger = state.page_layout(40, 120).trigger;

        assert_eq!(
            state.hit_test(trigger.y + 1, trigger.x + 2).unwrap(),
            vec![HitTarget::Trigger, HitTarget::Page]
        );
        assert_eq!(state.hit_test(1, 1).unwrap(), vec![HitTarget::Page]);
        assert!(state.hit_test(41, 1).unwrap().is_empty());
    }

    #[test]
    fn hit_test_open_propagates_from_panel_children() {
        let mut state = mounted_state();
        state.activate(Activation::Keyboard);
        let layout = state.overlay_layout(40, 120);

        let close = layout.close_control;
        assert_eq!(
            state.hit_test(close.y, close.x).unwrap(),
            vec![HitTarget::CloseControl, HitTarget::Panel, HitTarget::Backdrop]
        );

        let row = layout.suggestion_rows[1];
        assert_eq!(
            state.hit_test(row.y, row.x).unwrap(),
            vec![HitTarget::SuggestedQuery(1), HitTarget::Panel, HitTarget::Backdrop]
        );

        let card = layout.cards[0];
        assert_eq!(
            state.hit_test(card.y + 1, card.x + 1).unwrap(),
            vec![HitTarget::TrendingCard(0), HitTarget::Panel, HitTarget::Backdrop]
        );

        assert_eq!(
            state.hit_test(layout.spacer.y, 5).unwrap(),
            vec![HitTarget::Spacer, HitTarget::Backdrop]
        );
        assert_eq!(state.hit_test(40, 1).unwrap(), vec![HitTarget::Backdrop]);
    }
}
