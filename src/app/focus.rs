//! Keyboard focus between the trigger input and the overlay input.
//!
//! A [`FocusHandle`] is a back reference to a focusable element: it carries the
//! element's identity and the ability to move focus into or out of it, nothing
//! else. The [`FocusRing`] records which element, if any, currently receives
//! typed characters.

/// Focusable elements of the plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    /// The compact input inside the trigger.
    TriggerInput,
    /// The search input inside the overlay panel.
    OverlayInput,
}

/// Tracks the currently focused element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusRing {
    focused: Option<Element>,
}

impl FocusRing {
    /// Returns the focused element.
    #[must_use]
    pub const fn focused(&self) -> Option<Element> {
        self.focused
    }
}

/// Opaque handle to a focusable element.
///
/// # Example
///
/// ```
/// use concierge::app::focus::{Element, FocusHandle, FocusRing};
///
/// let mut ring = FocusRing::default();
/// let trigger = FocusHandle::new(Element::TriggerInput);
///
/// trigger.focus(&mut ring);
/// assert!(trigger.is_focused(&ring));
///
/// trigger.blur(&mut ring);
/// assert_eq!(ring.focused(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusHandle(Element);

impl FocusHandle {
    /// Creates a handle for `element`.
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }

    /// The element this handle refers to.
    #[must_use]
    pub const fn element(self) -> Element {
        self.0
    }

    /// Moves focus into this element, taking it from any other.
    pub fn focus(self, ring: &mut FocusRing) {
        tracing::trace!(element = ?self.0, "focus");
        ring.focused = Some(self.0);
    }

    /// Removes focus from this element. Leaves other elements untouched.
    pub fn blur(self, ring: &mut FocusRing) {
        if ring.focused == Some(self.0) {
            tracing::trace!(element = ?self.0, "blur");
            ring.focused = None;
        }
    }

    /// Whether this element currently holds focus.
    #[must_use]
    pub fn is_focused(self, ring: &FocusRing) -> bool {
        ring.focused == Some(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focusing_one_element_takes_focus_from_the_other() {
        let mut ring = FocusRing::default();
        let trigger = FocusHandle::new(Element::TriggerInput);
        let overlay = FocusHandle::new(Element::OverlayInput);

        trigger.focus(&mut ring);
        overlay.focus(&mut ring);

        assert!(overlay.is_focused(&ring));
        assert!(!trigger.is_focused(&ring));
    }

    #[test]
    fn blurring_an_unfocused_element_keeps_current_focus() {
        let mut ring = FocusRing::default();
        let trigger = FocusHandle::new(Element::TriggerInput);
        let overlay = FocusHandle::new(Element::OverlayInput);

        overlay.focus(&mut ring);
        trigger.blur(&mut ring);

        assert_eq!(ring.focused(), Some(Element::OverlayInput));
    }
}
