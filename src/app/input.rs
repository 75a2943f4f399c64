//! Mapping of Zellij input to application events.
//!
//! The key mapping is global: it recognizes the open shortcut and Escape no
//! matter which element holds focus, and hands every other printable key to
//! the focused input. Keys it does not recognize map to `None` and are left
//! alone.
//!
//! # Keybindings
//!
//! - `Ctrl+i` / `Super+i` (either case, Shift tolerated): open the overlay
//! - `Esc`: close the overlay
//! - printable characters, `Backspace`: edit the focused input
//!
//! # Pipe messages
//!
//! A Zellij keybinding can drive the overlay from any pane:
//!
//! ```kdl
//! bind "Ctrl i" { MessagePlugin "concierge" { payload "toggle"; }; }
//! ```
//!
//! or from a shell:
//!
//! ```sh
//! zellij pipe --name concierge -- open
//! ```
//!
//! Only messages named `concierge` are handled; the command travels in the
//! payload. Broadcasts under any other name are left to other plugins.

use super::handler::Event;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Pipe message name that carries a command in its payload.
pub const PIPE_NAME: &str = "concierge";

/// Whether `key` is the platform modifier plus I.
///
/// Terminals report the letter as typed, so both cases are accepted, and a
/// Shift held alongside the modifier is ignored. Alt is not a platform
/// modifier and disqualifies the press.
#[must_use]
pub fn is_open_shortcut(key: &KeyWithModifier) -> bool {
    let is_i = matches!(key.bare_key, BareKey::Char('i' | 'I'));
    let modifiers = &key.key_modifiers;
    let has_platform_modifier =
        modifiers.contains(&KeyModifier::Ctrl) || modifiers.contains(&KeyModifier::Super);

    is_i && has_platform_modifier && !modifiers.contains(&KeyModifier::Alt)
}

/// Maps a key press to an event.
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    tracing::trace!(bare_key = ?key.bare_key, modifiers = ?key.key_modifiers, "key event");

    if is_open_shortcut(key) {
        return Some(Event::Shortcut);
    }

    let plain = key
        .key_modifiers
        .iter()
        .all(|modifier| *modifier == KeyModifier::Shift);

    match key.bare_key {
        BareKey::Esc => Some(Event::Escape),
        BareKey::Backspace if plain => Some(Event::Backspace),
        BareKey::Char(c) if plain && !c.is_control() => Some(Event::Char(c)),
        _ => None,
    }
}

/// Whether a pipe message with this name is addressed to the plugin.
///
/// The runtime releases blocked CLI pipes for exactly these messages.
#[must_use]
pub fn is_own_pipe(name: &str) -> bool {
    name == PIPE_NAME
}

/// Maps a pipe message to an event.
///
/// Messages for other recipients and unknown commands map to `None`.
#[must_use]
pub fn map_pipe(name: &str, payload: Option<&str>) -> Option<Event> {
    if !is_own_pipe(name) {
        return None;
    }
    let command = payload?;

    match command.trim().to_ascii_lowercase().as_str() {
        "open" => Some(Event::Shortcut),
        "close" => Some(Event::Escape),
        "toggle" => Some(Event::Toggle),
        other => {
            tracing::debug!(command = %other, "ignoring unknown pipe command");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_and_super_i_open_in_either_case() {
        let keys = [
            KeyWithModifier::new(BareKey::Char('i')).with_ctrl_modifier(),
            KeyWithModifier::new(BareKey::Char('I')).with_ctrl_modifier(),
            KeyWithModifier::new(BareKey::Char('i')).with_super_modifier(),
            KeyWithModifier::new(BareKey::Char('I'))
                .with_ctrl_modifier()
                .with_shift_modifier(),
        ];
        for key in keys {
            assert_eq!(map_key(&key), Some(Event::Shortcut), "{key:?}");
        }
    }

    #[test]
    fn near_misses_are_not_the_shortcut() {
        let plain_i = KeyWithModifier::new(BareKey::Char('i'));
        assert_eq!(map_key(&plain_i), Some(Event::Char('i')));

        let alt_i = KeyWithModifier::new(BareKey::Char('i'))
            .with_ctrl_modifier()
            .with_alt_modifier();
        assert!(!is_open_shortcut(&alt_i));
        assert_eq!(map_key(&alt_i), None);

        let ctrl_j = KeyWithModifier::new(BareKey::Char('j')).with_ctrl_modifier();
        assert_eq!(map_key(&ctrl_j), None);
    }

    #[test]
    fn escape_maps_with_or_without_modifiers() {
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Esc)), Some(Event::Escape));
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Esc).with_shift_modifier()),
            Some(Event::Escape)
        );
    }

    #[test]
    fn other_keys_pass_through_untouched() {
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('A')).with_shift_modifier()),
            Some(Event::Char('A'))
        );
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Backspace)), Some(Event::Backspace));
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Enter)), None);
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Tab)), None);
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('c')).with_ctrl_modifier()),
            None
        );
    }

    #[test]
    fn pipe_commands() {
        assert_eq!(map_pipe(PIPE_NAME, Some("open")), Some(Event::Shortcut));
        assert_eq!(map_pipe(PIPE_NAME, Some(" Close\n")), Some(Event::Escape));
        assert_eq!(map_pipe(PIPE_NAME, Some("toggle")), Some(Event::Toggle));
        assert_eq!(map_pipe(PIPE_NAME, None), None);
        assert_eq!(map_pipe(PIPE_NAME, Some("resize")), None);
    }

    #[test]
    fn pipes_for_other_recipients_are_ignored() {
        assert!(is_own_pipe("concierge"));
        assert!(!is_own_pipe("open"));
        assert_eq!(map_pipe("open", None), None);
        assert_eq!(map_pipe("toggle", None), None);
        assert_eq!(map_pipe("resize", Some("open")), None);
    }
}
